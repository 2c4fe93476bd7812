//! Individual structural checks. Each takes the token stream and returns
//! the issues it found; none of them stops at the first problem.

pub mod declarations;
pub mod delimiters;
pub mod imports;
pub mod syntax;

use crate::lexer::{Token, TokenKind};

/// Keywords and builtins that never count as variables.
pub(crate) const RESERVED: &[&str] = &[
    "module", "function", "if", "else", "for", "intersection_for", "let", "each", "assert",
    "echo", "true", "false", "undef", "PI", "children", "import", "surface",
];

/// Index of the token matching the opener at `open`, if any.
pub(crate) fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let (opener, closer) = match tokens.get(open)?.kind {
        TokenKind::Punct('(') => ('(', ')'),
        TokenKind::Punct('[') => ('[', ']'),
        TokenKind::Punct('{') => ('{', '}'),
        _ => return None,
    };
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if token.is_punct(opener) {
            depth += 1;
        } else if token.is_punct(closer) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Whether `tokens[i]` is an identifier directly followed by a call `(`.
pub(crate) fn is_call(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).and_then(Token::ident).is_some() && tokens.get(i + 1).is_some_and(|t| t.is_punct('('))
}

/// Whether `tokens[i]` is followed by a single `=` (assignment or named argument).
pub(crate) fn is_assigned(tokens: &[Token], i: usize) -> bool {
    tokens.get(i + 1).is_some_and(|t| t.is_punct('='))
        && !tokens.get(i + 2).is_some_and(|t| t.is_punct('='))
}
