//! Pulls the code region out of a raw model response.
//!
//! Fenced blocks win: the first fence's body is taken, and an unclosed
//! fence runs to the end of the text. Without fences, leading and trailing
//! lines that do not look like code are dropped as narration.

const FENCE: &str = "```";

const CODE_KEYWORDS: &[&str] = &[
    "module", "function", "use", "include", "for", "if", "else", "let", "translate", "rotate",
    "scale", "mirror", "union", "difference", "intersection", "hull", "minkowski", "cube",
    "sphere", "cylinder", "linear_extrude", "rotate_extrude", "color", "render", "echo", "$fn",
];

pub fn extract_code(raw: &str) -> String {
    match fenced_body(raw) {
        Some(body) => body.trim().to_string(),
        None => strip_narration(raw),
    }
}

fn fenced_body(raw: &str) -> Option<&str> {
    let open = raw.find(FENCE)?;
    let after_open = &raw[open + FENCE.len()..];
    // The rest of the opening line is the language tag.
    let body_start = after_open.find('\n').map_or(after_open.len(), |n| n + 1);
    let body = &after_open[body_start..];
    Some(match body.find(FENCE) {
        Some(close) => &body[..close],
        None => body,
    })
}

fn strip_narration(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let first = lines.iter().position(|l| looks_like_code(l));
    let last = lines.iter().rposition(|l| looks_like_code(l));
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n").trim().to_string(),
        _ => String::new(),
    }
}

fn looks_like_code(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        return true;
    }
    if trimmed.ends_with(';') || trimmed.ends_with('{') || trimmed.ends_with('}') {
        return true;
    }
    if trimmed.starts_with('}') || trimmed.starts_with(']') || trimmed.starts_with(')') {
        return true;
    }
    let first_word: String = trimmed
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    if CODE_KEYWORDS.contains(&first_word.as_str()) {
        return true;
    }
    // `name = value` without a terminator still reads as code.
    !first_word.is_empty()
        && trimmed[first_word.len()..].trim_start().starts_with('=')
        && !trimmed.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fence_wins() {
        let raw = "Here you go:\n```openscad\ncube(1);\n```\nAnd a variant:\n```\nsphere(2);\n```";
        assert_eq!(extract_code(raw), "cube(1);");
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        assert_eq!(extract_code("```scad\ncube(1);\nsphere(1);"), "cube(1);\nsphere(1);");
    }

    #[test]
    fn narration_is_trimmed_without_fences() {
        let raw = "Sure! Here is the model:\n\nwidth = 10;\ncube(width);\n\nLet me know if you need changes.";
        assert_eq!(extract_code(raw), "width = 10;\ncube(width);");
    }

    #[test]
    fn pure_prose_yields_nothing() {
        assert_eq!(extract_code("I am unable to help with that request."), "");
    }

    #[test]
    fn leading_comment_is_kept() {
        assert_eq!(extract_code("// gear\ncube(1);"), "// gear\ncube(1);");
    }
}
