//! Every referenced library must be loaded with `use <...>` or `include <...>`.
//!
//! A library is referenced when the request asks for it, or when the code
//! calls one of its signature modules without defining that name itself.

use std::collections::{BTreeSet, HashSet};

use scadgen_core::models::{IssueKind, ValidationIssue};

use super::is_call;
use crate::lexer::{Token, TokenKind};
use crate::libraries::{import_matches, lookup, KNOWN_LIBRARIES};

pub fn check(tokens: &[Token], requested: &BTreeSet<String>) -> Vec<ValidationIssue> {
    let imports: Vec<&str> = tokens
        .iter()
        .filter_map(|t| match &t.kind {
            TokenKind::Import { path } => Some(path.as_str()),
            _ => None,
        })
        .collect();
    let defined: HashSet<&str> = tokens
        .windows(2)
        .filter(|w| matches!(w[0].ident(), Some("module" | "function")))
        .filter_map(|w| w[1].ident())
        .collect();

    // (library, how it was referenced, line of first use)
    let mut referenced: Vec<(String, String, Option<usize>)> = requested
        .iter()
        .map(|lib| (lib.clone(), "requested".to_string(), None))
        .collect();
    for library in KNOWN_LIBRARIES {
        if referenced.iter().any(|(name, _, _)| name.eq_ignore_ascii_case(library.name)) {
            continue;
        }
        let first_call = tokens.iter().enumerate().find(|(i, t)| {
            t.ident().is_some_and(|name| {
                library.calls.contains(&name) && !defined.contains(name) && is_call(tokens, *i)
            })
        });
        if let Some((_, token)) = first_call {
            let call = token.ident().unwrap_or_default();
            referenced.push((
                library.name.to_string(),
                format!("calls `{call}()`"),
                Some(token.line),
            ));
        }
    }

    referenced
        .into_iter()
        .filter(|(library, _, _)| !imports.iter().any(|path| import_matches(path, library)))
        .map(|(library, reason, line)| {
            let hint = lookup(&library)
                .map(|sig| format!("; add `{}`", sig.suggested_import))
                .unwrap_or_default();
            let issue = ValidationIssue::new(
                IssueKind::MissingLibraryImport,
                format!("library `{library}` is referenced ({reason}) but never imported{hint}"),
            );
            match line {
                Some(line) => issue.at_line(line),
                None => issue,
            }
        })
        .collect()
}
