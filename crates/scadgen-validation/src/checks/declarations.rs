//! Use-before-assignment.
//!
//! A variable is any name assigned at statement level (`name = ...;`).
//! Reading it at a token position before its first such assignment is an
//! issue, unless a module/function parameter or a `for`/`let` binding
//! covering that position has the same name. Reads inside a module body are
//! located by module name, others by line.

use std::collections::{HashMap, HashSet};

use scadgen_core::models::{IssueKind, ValidationIssue};

use super::{is_assigned, is_call, matching_close, RESERVED};
use crate::lexer::Token;

struct Scope {
    /// Set for module bodies.
    module: Option<String>,
    names: Vec<String>,
    start: usize,
    end: usize,
}

pub fn check(tokens: &[Token]) -> Vec<ValidationIssue> {
    let assignments = statement_assignments(tokens);
    if assignments.is_empty() {
        return Vec::new();
    }
    let scopes = local_scopes(tokens);
    let mut reported = HashSet::new();
    let mut issues = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(name) = token.ident() else {
            continue;
        };
        let Some(&(assigned_at, assigned_line)) = assignments.get(name) else {
            continue;
        };
        if i >= assigned_at
            || is_call(tokens, i)
            || is_assigned(tokens, i)
            || follows_definition_keyword(tokens, i)
            || (i > 0 && tokens[i - 1].is_punct('.'))
        {
            continue;
        }
        let bound = scopes
            .iter()
            .any(|s| s.start <= i && i <= s.end && s.names.iter().any(|n| n == name));
        if bound || !reported.insert(name.to_string()) {
            continue;
        }
        let enclosing = scopes
            .iter()
            .filter(|s| s.start <= i && i <= s.end)
            .filter_map(|s| s.module.as_deref().map(|m| (s.end - s.start, m)))
            .min_by_key(|(width, _)| *width);
        let issue = ValidationIssue::new(
            IssueKind::UndeclaredVariableUse,
            format!(
                "`{name}` is used on line {} before its assignment on line {assigned_line}",
                token.line
            ),
        );
        issues.push(match enclosing {
            Some((_, module)) => issue.in_module(module),
            None => issue.at_line(token.line),
        });
    }
    issues
}

/// First statement-level assignment of each name: (token index, line).
fn statement_assignments(tokens: &[Token]) -> HashMap<String, (usize, usize)> {
    let mut found = HashMap::new();
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        if token.is_punct('(') || token.is_punct('[') {
            depth += 1;
        } else if token.is_punct(')') || token.is_punct(']') {
            depth = depth.saturating_sub(1);
        }
        let Some(name) = token.ident() else {
            continue;
        };
        if depth != 0 || name.starts_with('$') || RESERVED.contains(&name) || !is_assigned(tokens, i) {
            continue;
        }
        let at_statement_start = i == 0
            || tokens[i - 1].is_punct(';')
            || tokens[i - 1].is_punct('{')
            || tokens[i - 1].is_punct('}');
        if at_statement_start {
            found.entry(name.to_string()).or_insert((i, token.line));
        }
    }
    found
}

fn follows_definition_keyword(tokens: &[Token], i: usize) -> bool {
    i > 0 && matches!(tokens[i - 1].ident(), Some("module" | "function"))
}

fn local_scopes(tokens: &[Token]) -> Vec<Scope> {
    let mut scopes = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token.ident() {
            Some(keyword @ ("module" | "function")) => {
                let open = i + 2;
                if !tokens.get(open).is_some_and(|t| t.is_punct('(')) {
                    continue;
                }
                let Some(close) = matching_close(tokens, open) else {
                    continue;
                };
                let braced =
                    keyword == "module" && tokens.get(close + 1).is_some_and(|t| t.is_punct('{'));
                let end = if braced {
                    matching_close(tokens, close + 1).unwrap_or(tokens.len() - 1)
                } else {
                    statement_end(tokens, close + 1)
                };
                let module = tokens[i + 1]
                    .ident()
                    .filter(|_| keyword == "module")
                    .map(str::to_string);
                scopes.push(Scope {
                    module,
                    names: binding_names(tokens, open, close, false),
                    start: open,
                    end,
                });
            }
            Some("for" | "intersection_for" | "let") => {
                let open = i + 1;
                if !tokens.get(open).is_some_and(|t| t.is_punct('(')) {
                    continue;
                }
                let Some(close) = matching_close(tokens, open) else {
                    continue;
                };
                scopes.push(Scope {
                    module: None,
                    names: binding_names(tokens, open, close, true),
                    start: open,
                    end: statement_end(tokens, close + 1),
                });
            }
            _ => {}
        }
    }
    scopes
}

/// Names introduced inside `(...)`: identifiers directly after `(` or `,`
/// at the top nesting level.
fn binding_names(tokens: &[Token], open: usize, close: usize, require_assignment: bool) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    for j in open + 1..close {
        let token = &tokens[j];
        if token.is_punct('(') || token.is_punct('[') || token.is_punct('{') {
            depth += 1;
            continue;
        }
        if token.is_punct(')') || token.is_punct(']') || token.is_punct('}') {
            depth = depth.saturating_sub(1);
            continue;
        }
        if depth != 0 {
            continue;
        }
        let Some(name) = token.ident() else {
            continue;
        };
        let after_separator = j == open + 1 || tokens[j - 1].is_punct(',');
        if after_separator && (!require_assignment || is_assigned(tokens, j)) {
            names.push(name.to_string());
        }
    }
    names
}

/// Last token index of the statement starting at `from`: a braced block,
/// everything up to the next `;`, or up to the enclosing closer.
fn statement_end(tokens: &[Token], from: usize) -> usize {
    let last = tokens.len().saturating_sub(1);
    if from > last {
        return last;
    }
    if tokens[from].is_punct('{') {
        return matching_close(tokens, from).unwrap_or(last);
    }
    let mut depth = 0usize;
    for (j, token) in tokens.iter().enumerate().skip(from) {
        if token.is_punct('(') || token.is_punct('[') || token.is_punct('{') {
            depth += 1;
        } else if token.is_punct(')') || token.is_punct(']') || token.is_punct('}') {
            if depth == 0 {
                return j.saturating_sub(1);
            }
            depth -= 1;
            if depth == 0 && token.is_punct('}') {
                return j;
            }
        } else if depth == 0 && token.is_punct(';') {
            return j;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use scadgen_core::models::IssueLocation;

    use super::*;
    use crate::lexer::tokenize;

    fn issues(src: &str) -> Vec<ValidationIssue> {
        check(&tokenize(src).tokens)
    }

    #[test]
    fn use_in_module_before_assignment_is_flagged() {
        let found = issues("module base() {\n  cube([10, 10, height]);\n}\nheight = 10;\nbase();");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, IssueKind::UndeclaredVariableUse);
        assert!(found[0].message.contains("height"));
        assert!(found[0].message.contains("line 2 before its assignment on line 4"));
        assert_eq!(found[0].location, Some(IssueLocation::Module("base".to_string())));
    }

    #[test]
    fn top_level_use_is_located_by_line() {
        let found = issues("cube(size);
size = 3;");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].location, Some(IssueLocation::Line(1)));
    }

    #[test]
    fn assignment_before_use_passes() {
        assert!(issues("height = 10;\ncube([1, 1, height]);").is_empty());
    }

    #[test]
    fn parameters_shadow_later_globals() {
        let src = "module post(height) { cylinder(h = height, r = 1); }\nheight = 5;\npost(height);";
        assert!(issues(src).is_empty());
    }

    #[test]
    fn loop_bindings_are_local() {
        let src = "for (i = [0:3]) translate([i * 10, 0, 0]) cube(5);\ni = 2;";
        assert!(issues(src).is_empty());
    }

    #[test]
    fn function_parameters_are_local() {
        let src = "function double(x) = x * 2;\nx = 4;\necho(double(x));";
        assert!(issues(src).is_empty());
    }

    #[test]
    fn named_arguments_are_not_reads() {
        let src = "cylinder(r = 2, h = 3);\nr = 1;\nh = 2;";
        assert!(issues(src).is_empty());
    }

    #[test]
    fn each_name_is_reported_once() {
        let src = "cube(w); sphere(w);\nw = 3;";
        assert_eq!(issues(src).len(), 1);
    }
}
