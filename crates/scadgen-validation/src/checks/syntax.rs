//! Cheap syntax heuristics for mistakes models commonly make.

use scadgen_core::constants::VECTOR_TRANSFORMS;
use scadgen_core::models::{IssueKind, ValidationIssue};

use super::is_call;
use crate::lexer::{Token, TokenKind};

pub fn check(tokens: &[Token]) -> Vec<ValidationIssue> {
    let mut issues = missing_commas(tokens);
    issues.extend(positional_transforms(tokens));
    if !tokens.is_empty() && !tokens.iter().any(|t| t.is_punct(';') || t.is_punct('}')) {
        issues.push(ValidationIssue::new(
            IssueKind::SyntaxError,
            "code has no statement terminator (`;` or `}`)",
        ));
    }
    issues
}

/// `[1 2 3]`: two numbers side by side inside a vector literal.
fn missing_commas(tokens: &[Token]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    // (opener, already reported)
    let mut stack: Vec<(char, bool)> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Punct(c @ ('(' | '[' | '{')) => stack.push((c, false)),
            TokenKind::Punct(')' | ']' | '}') => {
                stack.pop();
            }
            TokenKind::Number(a) => {
                let Some(top) = stack.last_mut() else {
                    continue;
                };
                let Some(b) = tokens.get(i + 1).and_then(Token::number) else {
                    continue;
                };
                if top.0 == '[' && !top.1 {
                    top.1 = true;
                    issues.push(
                        ValidationIssue::new(
                            IssueKind::SyntaxError,
                            format!("vector literal is missing a comma between `{a}` and `{b}`"),
                        )
                        .at_line(token.line),
                    );
                }
            }
            _ => {}
        }
    }
    issues
}

/// `translate(1, 2, 3)`: a vector transform given separate scalars.
fn positional_transforms(tokens: &[Token]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let Some(name) = token.ident() else {
            continue;
        };
        if !VECTOR_TRANSFORMS.contains(&name) || !is_call(tokens, i) {
            continue;
        }
        let mut j = i + 2;
        let mut scalars = 0;
        while scalars < 2 {
            if tokens.get(j).is_some_and(|t| t.is_punct('-')) {
                j += 1;
            }
            if tokens.get(j).and_then(Token::number).is_none() {
                break;
            }
            scalars += 1;
            j += 1;
            if scalars < 2 {
                if !tokens.get(j).is_some_and(|t| t.is_punct(',')) {
                    break;
                }
                j += 1;
            }
        }
        if scalars == 2 {
            issues.push(
                ValidationIssue::new(
                    IssueKind::SyntaxError,
                    format!("`{name}` expects a single vector, e.g. {name}([x, y, z]), not separate numbers"),
                )
                .at_line(token.line),
            );
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn issues(src: &str) -> Vec<ValidationIssue> {
        check(&tokenize(src).tokens)
    }

    #[test]
    fn missing_comma_in_vector() {
        let found = issues("cube([10 20 30]);");
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("comma"));
    }

    #[test]
    fn ranges_and_subtraction_are_fine() {
        assert!(issues("for (i = [0:3]) translate([i, 1 -2, 0]) cube(1);").is_empty());
    }

    #[test]
    fn positional_translate_is_flagged() {
        let found = issues("translate(1, -2, 3) cube(1);");
        assert_eq!(found.len(), 1);
        assert!(found[0].message.contains("translate([x, y, z])"));
    }

    #[test]
    fn rotate_angle_and_axis_is_fine() {
        assert!(issues("rotate(45, [0, 0, 1]) cube(1);").is_empty());
    }

    #[test]
    fn missing_terminator_is_flagged() {
        let found = issues("cube(10)");
        assert_eq!(found.len(), 1);
    }
}
