//! Static render-cost estimate from module, primitive and boolean counts.

use scadgen_core::config::ComplexityConfig;
use scadgen_core::constants::{BOOLEAN_OPERATIONS, KNOWN_PRIMITIVES};
use scadgen_core::models::{ComplexityReport, RenderBucket};
use tracing::debug;

use super::suggestions;
use crate::checks::is_call;
use crate::lexer::{tokenize, Token};

/// Pure and infallible: malformed code still tokenizes, and code with no
/// recognisable constructs scores zero.
#[derive(Debug, Clone, Default)]
pub struct ComplexityAnalyzer {
    config: ComplexityConfig,
}

/// Raw counts for one piece of code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counts {
    pub modules: usize,
    pub primitives: usize,
    pub boolean_ops: usize,
}

impl ComplexityAnalyzer {
    pub fn new(config: ComplexityConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, code: &str) -> ComplexityReport {
        let tokens = tokenize(code).tokens;
        let counts = count(&tokens);
        let score = counts.modules as f64 * self.config.module_weight
            + counts.primitives as f64 * self.config.primitive_weight
            + counts.boolean_ops as f64 * self.config.boolean_weight;
        let bucket = self.bucket(score);
        let suggestions = suggestions::collect(&tokens, counts, bucket);

        debug!(
            modules = counts.modules,
            primitives = counts.primitives,
            boolean_ops = counts.boolean_ops,
            score,
            bucket = %bucket,
            "complexity analyzed"
        );

        ComplexityReport {
            modules: counts.modules,
            primitives: counts.primitives,
            boolean_ops: counts.boolean_ops,
            score,
            bucket,
            suggestions,
        }
    }

    /// Below `quick_below` is quick, above `heavy_above` is heavy, the
    /// closed range between is moderate.
    fn bucket(&self, score: f64) -> RenderBucket {
        if score < self.config.quick_below {
            RenderBucket::Quick
        } else if score > self.config.heavy_above {
            RenderBucket::Heavy
        } else {
            RenderBucket::Moderate
        }
    }
}

pub(crate) fn count(tokens: &[Token]) -> Counts {
    let mut counts = Counts::default();
    for (i, token) in tokens.iter().enumerate() {
        let Some(name) = token.ident() else {
            continue;
        };
        if name == "module" && tokens.get(i + 1).and_then(Token::ident).is_some() {
            counts.modules += 1;
        } else if KNOWN_PRIMITIVES.contains(&name) && is_call(tokens, i) {
            counts.primitives += 1;
        } else if BOOLEAN_OPERATIONS.contains(&name) && is_call(tokens, i) {
            counts.boolean_ops += 1;
        }
    }
    counts
}
