use scadgen_core::models::{RenderBucket, Suggestion};

use super::analyzer::Counts;
use crate::checks::is_call;
use crate::lexer::Token;

const MAX_BOOLEANS_WITHOUT_RENDER: usize = 5;
const MAX_FN: f64 = 200.0;
const MINKOWSKI_PRIMITIVE_THRESHOLD: usize = 3;
const MANY_PRIMITIVES: usize = 10;

pub(crate) fn collect(tokens: &[Token], counts: Counts, bucket: RenderBucket) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let has_render_hint = tokens
        .iter()
        .any(|t| matches!(t.ident(), Some("render" | "convexity")));
    if counts.boolean_ops > MAX_BOOLEANS_WITHOUT_RENDER && !has_render_hint {
        suggestions.push(Suggestion::new(
            "boolean-heavy-without-render",
            format!(
                "{} boolean operations and no render() or convexity hint; wrap expensive subtrees in render() or set convexity to bound preview cost",
                counts.boolean_ops
            ),
        ));
    }

    if has_nested_difference(tokens) {
        suggestions.push(Suggestion::new(
            "nested-difference",
            "excessive nested difference(); collect the cutters into one difference() with a union of subtracted parts",
        ));
    }

    let uses_minkowski = tokens
        .iter()
        .enumerate()
        .any(|(i, t)| t.ident() == Some("minkowski") && is_call(tokens, i));
    if uses_minkowski && counts.primitives > MINKOWSKI_PRIMITIVE_THRESHOLD {
        suggestions.push(Suggestion::new(
            "minkowski",
            "minkowski() on a non-trivial model is very slow; prefer offset() in 2D or hull() of spheres for rounding",
        ));
    }

    if let Some(fn_value) = highest_fn(tokens).filter(|v| *v > MAX_FN) {
        suggestions.push(Suggestion::new(
            "high-$fn",
            format!("$fn = {fn_value} is very high; values around 64-128 are usually enough, or use $fa/$fs"),
        ));
    }

    if counts.primitives > MANY_PRIMITIVES && counts.modules <= 1 {
        suggestions.push(Suggestion::new(
            "few-modules",
            format!(
                "{} primitives in {} module(s); factor repeated geometry into parametric modules",
                counts.primitives, counts.modules
            ),
        ));
    }

    if bucket == RenderBucket::Heavy {
        suggestions.push(Suggestion::new(
            "heavy-render",
            "heavy render expected; preview with lower $fn and cache stable parts with render()",
        ));
    }

    suggestions
}

/// A `difference()` call inside the block of another `difference()`.
fn has_nested_difference(tokens: &[Token]) -> bool {
    // One entry per open brace: whether it is a difference() body.
    let mut blocks: Vec<bool> = Vec::new();
    let mut paren_depth = 0usize;
    // Paren depth at which the pending difference() call's arguments close.
    let mut pending: Option<usize> = None;
    let mut awaiting_brace = false;

    for (i, token) in tokens.iter().enumerate() {
        if token.ident() == Some("difference") && is_call(tokens, i) {
            if blocks.iter().any(|b| *b) {
                return true;
            }
            pending = Some(paren_depth);
            awaiting_brace = false;
            continue;
        }
        if token.is_punct('(') {
            paren_depth += 1;
        } else if token.is_punct(')') {
            paren_depth = paren_depth.saturating_sub(1);
            if pending == Some(paren_depth) {
                pending = None;
                awaiting_brace = true;
                continue;
            }
        } else if token.is_punct('{') {
            blocks.push(awaiting_brace);
        } else if token.is_punct('}') {
            blocks.pop();
        }
        awaiting_brace = false;
    }
    false
}

/// Largest numeric value assigned to `$fn` anywhere.
fn highest_fn(tokens: &[Token]) -> Option<f64> {
    tokens
        .windows(3)
        .filter(|w| w[0].ident() == Some("$fn") && w[1].is_punct('='))
        .filter_map(|w| w[2].number())
        .reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn nested_difference_detected() {
        let src = "difference() { cube(10); difference() { sphere(4); cube(2); } }";
        assert!(has_nested_difference(&tokenize(src).tokens));
    }

    #[test]
    fn sibling_differences_are_fine() {
        let src = "difference() { cube(10); sphere(6); }\ndifference() { cube(5); sphere(3); }";
        assert!(!has_nested_difference(&tokenize(src).tokens));
    }

    #[test]
    fn highest_fn_value_found() {
        let tokens = tokenize("sphere(r = 2, $fn = 32); cylinder(h = 1, $fn = 360);").tokens;
        assert_eq!(highest_fn(&tokens), Some(360.0));
    }
}
