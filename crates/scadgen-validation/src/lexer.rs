//! Tokenizer for OpenSCAD source.
//!
//! Drops comments and whitespace, keeps line numbers, and folds
//! `use <path>` / `include <path>` into single import tokens.

use scadgen_core::models::{IssueKind, ValidationIssue};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Number(f64),
    Str,
    /// `use <path>` or `include <path>`.
    Import { path: String },
    Punct(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Token stream plus lexical problems (unterminated strings or comments).
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub issues: Vec<ValidationIssue>,
}

pub fn tokenize(source: &str) -> Lexed {
    let chars: Vec<char> = source.chars().collect();
    let mut lexed = Lexed::default();
    let mut line = 1;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\n' => {
                line += 1;
                i += 1;
            }
            c if c.is_whitespace() => i += 1,
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                let start_line = line;
                i += 2;
                loop {
                    match chars.get(i) {
                        None => {
                            lexed.issues.push(
                                ValidationIssue::new(
                                    IssueKind::SyntaxError,
                                    "unterminated block comment",
                                )
                                .at_line(start_line),
                            );
                            break;
                        }
                        Some('*') if chars.get(i + 1) == Some(&'/') => {
                            i += 2;
                            break;
                        }
                        Some('\n') => {
                            line += 1;
                            i += 1;
                        }
                        Some(_) => i += 1,
                    }
                }
            }
            '"' => {
                let start_line = line;
                i += 1;
                let mut closed = false;
                while let Some(&s) = chars.get(i) {
                    i += 1;
                    match s {
                        '\\' => i += 1,
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\n' => line += 1,
                        _ => {}
                    }
                }
                if !closed {
                    lexed.issues.push(
                        ValidationIssue::new(IssueKind::SyntaxError, "unterminated string literal")
                            .at_line(start_line),
                    );
                }
                lexed.tokens.push(Token {
                    kind: TokenKind::Str,
                    line: start_line,
                });
            }
            c if c.is_ascii_digit()
                || (c == '.' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit())) =>
            {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                lexed.tokens.push(Token {
                    kind: TokenKind::Number(text.parse().unwrap_or(0.0)),
                    line,
                });
            }
            c if c.is_alphabetic() || c == '_' || c == '$' => {
                let start = i;
                i += 1;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                if word == "use" || word == "include" {
                    if let Some((path, next)) = import_path(&chars, i) {
                        lexed.tokens.push(Token {
                            kind: TokenKind::Import { path },
                            line,
                        });
                        i = next;
                        continue;
                    }
                }
                lexed.tokens.push(Token {
                    kind: TokenKind::Ident(word),
                    line,
                });
            }
            other => {
                lexed.tokens.push(Token {
                    kind: TokenKind::Punct(other),
                    line,
                });
                i += 1;
            }
        }
    }
    lexed
}

/// `<path>` after `use`/`include` on the same line. Returns the path and
/// the index after `>`.
fn import_path(chars: &[char], mut i: usize) -> Option<(String, usize)> {
    while i < chars.len() && (chars[i] == ' ' || chars[i] == '\t') {
        i += 1;
    }
    if chars.get(i) != Some(&'<') {
        return None;
    }
    let start = i + 1;
    let mut end = start;
    while end < chars.len() && chars[end] != '>' && chars[end] != '\n' {
        end += 1;
    }
    if chars.get(end) != Some(&'>') {
        return None;
    }
    Some((chars[start..end].iter().collect(), end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn comments_and_strings_are_dropped() {
        let lexed = tokenize("// (\n/* { */ x = \"(\";");
        assert!(lexed.issues.is_empty());
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Punct('='),
                TokenKind::Str,
                TokenKind::Punct(';'),
            ]
        );
        assert_eq!(lexed.tokens[0].line, 2);
    }

    #[test]
    fn imports_are_single_tokens() {
        assert_eq!(
            kinds("include <BOSL2/std.scad>\nuse<MCAD/gears.scad>"),
            vec![
                TokenKind::Import { path: "BOSL2/std.scad".into() },
                TokenKind::Import { path: "MCAD/gears.scad".into() },
            ]
        );
    }

    #[test]
    fn numbers_and_special_variables() {
        assert_eq!(
            kinds("$fn=1.5e2;"),
            vec![
                TokenKind::Ident("$fn".into()),
                TokenKind::Punct('='),
                TokenKind::Number(150.0),
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn unterminated_string_is_reported() {
        let lexed = tokenize("echo(\"oops);");
        assert_eq!(lexed.issues.len(), 1);
        assert_eq!(lexed.issues[0].kind, IssueKind::SyntaxError);
    }
}
