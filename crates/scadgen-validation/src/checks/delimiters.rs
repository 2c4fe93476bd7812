use scadgen_core::models::{IssueKind, ValidationIssue};

use crate::lexer::{Token, TokenKind};

fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Parentheses, brackets and braces must nest and close.
pub fn check(tokens: &[Token]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut stack: Vec<(char, usize)> = Vec::new();

    for token in tokens {
        let TokenKind::Punct(c) = token.kind else {
            continue;
        };
        match c {
            '(' | '[' | '{' => stack.push((c, token.line)),
            ')' | ']' | '}' => match stack.last() {
                Some(&(open, _)) if closer_for(open) == c => {
                    stack.pop();
                }
                Some(&(open, open_line)) => {
                    issues.push(
                        ValidationIssue::new(
                            IssueKind::UnbalancedDelimiter,
                            format!(
                                "found `{c}` where `{}` was expected to close `{open}` from line {open_line}",
                                closer_for(open)
                            ),
                        )
                        .at_line(token.line),
                    );
                    // Recover when the closer matches something further down.
                    if let Some(pos) = stack.iter().rposition(|(o, _)| closer_for(*o) == c) {
                        stack.truncate(pos);
                    }
                }
                None => issues.push(
                    ValidationIssue::new(
                        IssueKind::UnbalancedDelimiter,
                        format!("`{c}` has no matching opening delimiter"),
                    )
                    .at_line(token.line),
                ),
            },
            _ => {}
        }
    }

    for (open, line) in stack.into_iter().rev() {
        issues.push(
            ValidationIssue::new(
                IssueKind::UnbalancedDelimiter,
                format!("`{open}` is never closed with `{}`", closer_for(open)),
            )
            .at_line(line),
        );
    }
    issues
}
