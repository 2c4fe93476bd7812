use regex::Regex;
use std::sync::LazyLock;

macro_rules! prompt_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Length with unit: 5mm, 2.5 cm, 3 inches, 3in ──────────────────────────
// Bare `in` only counts when attached to the number ("3 in PLA" is prose).
prompt_pattern!(
    RE_DIMENSION,
    r"(?i)\b(\d+(?:\.\d+)?)(?:\s*(mm|cm|inches|inch|m)|(in))\b"
);

// ── Tooth count: 15 teeth, 1 tooth ────────────────────────────────────────
prompt_pattern!(RE_TEETH, r"(?i)\b(\d+)\s*(?:teeth|tooth)\b");

// ── Metric thread: M3, M8x1.25 ────────────────────────────────────────────
prompt_pattern!(RE_METRIC_THREAD, r"\bM(\d+(?:\.\d+)?)(?:\s*x\s*(\d+(?:\.\d+)?))?\b");

// ── Tolerance: ±0.1mm, +/- 0.2 mm ─────────────────────────────────────────
prompt_pattern!(
    RE_PLUS_MINUS,
    r"(?i)(?:±|\+/-|\+-)\s*(\d+(?:\.\d+)?)\s*(mm|cm|in)?"
);

// ── Tolerance: 0.2mm clearance, tolerance of 0.3 mm ───────────────────────
prompt_pattern!(
    RE_CLEARANCE_AFTER,
    r"(?i)\b(\d+(?:\.\d+)?)\s*(mm)?\s+(?:of\s+)?(?:tolerance|clearance|gap)\b"
);
prompt_pattern!(
    RE_CLEARANCE_BEFORE,
    r"(?i)\b(?:tolerance|clearance|gap)\s+(?:of\s+)?(\d+(?:\.\d+)?)\s*(mm)?"
);
