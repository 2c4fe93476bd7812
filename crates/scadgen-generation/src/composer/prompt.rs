//! PromptComposer: fixed-section generation prompts and correction prompts.
//!
//! Output is a pure function of its inputs. Nothing here reads clocks,
//! environment, or hash-map iteration order.

use std::fmt::Write;

use scadgen_core::constants::CORRECTION_CODE_ECHO_CHARS;
use scadgen_core::models::{
    DesignRequest, ExtractedRequirements, GenerationAttempt, ManufacturingMethod, RankedContext,
};

use super::rules::{manufacturing_rules, IMPLEMENTATION_RULES};

#[derive(Debug, Default, Clone, Copy)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    /// Sections, in order: task, manufacturing checklist, implementation
    /// checklist, reference code, closing instruction.
    pub fn compose(
        &self,
        request: &DesignRequest,
        requirements: &ExtractedRequirements,
        method: ManufacturingMethod,
        context: &RankedContext,
    ) -> String {
        let mut out = String::new();

        out.push_str("# DESIGN TASK\n");
        let _ = writeln!(out, "Generate parametric OpenSCAD code for: {}", request.text());
        out.push('\n');
        write_requirements(&mut out, request, requirements);

        let _ = writeln!(out, "\n# MANUFACTURING CONSIDERATIONS ({})", method.label());
        for rule in manufacturing_rules(method) {
            let _ = writeln!(out, "- {rule}");
        }

        out.push_str("\n# IMPLEMENTATION REQUIREMENTS\n");
        for rule in IMPLEMENTATION_RULES {
            let _ = writeln!(out, "- {rule}");
        }

        out.push_str("\n# CODE REFERENCES\n");
        if context.is_empty() {
            out.push_str("No reference code was retrieved; rely on standard OpenSCAD.\n");
        } else {
            out.push_str("Adapt the relevant patterns below; keep the imports they rely on.\n");
            for (i, entry) in context.entries().iter().enumerate() {
                let chunk = &entry.chunk;
                let _ = writeln!(
                    out,
                    "\n## [{}] {} ({})\n```openscad\n{}\n```",
                    i + 1,
                    chunk.library,
                    chunk.chunk_id,
                    chunk.code.trim_end()
                );
            }
        }

        out.push_str("\n# IMPLEMENTATION\nWrite the complete OpenSCAD code:\n");
        out
    }

    /// The original prompt followed by a correction section listing every
    /// issue of `failed` and echoing its candidate code.
    pub fn compose_correction(&self, base_prompt: &str, failed: &GenerationAttempt) -> String {
        let mut out = String::with_capacity(base_prompt.len() + 512);
        out.push_str(base_prompt);
        if !out.ends_with('\n') {
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "\n# CORRECTIONS REQUIRED\nAttempt {} failed validation with {} issue(s):",
            failed.index,
            failed.issues.len()
        );
        for issue in &failed.issues {
            let _ = writeln!(out, "- {issue}");
        }

        if !failed.code.trim().is_empty() {
            let (echo, truncated) = truncate_chars(&failed.code, CORRECTION_CODE_ECHO_CHARS);
            out.push_str("\nPrevious code:\n```openscad\n");
            out.push_str(echo.trim_end());
            if truncated {
                out.push_str("\n// ... truncated");
            }
            out.push_str("\n```\n");
        }

        out.push_str(
            "\nFix every issue listed above and regenerate the complete OpenSCAD code. \
             Do not omit parts of the model that were already correct.\n",
        );
        out
    }
}

fn write_requirements(out: &mut String, request: &DesignRequest, reqs: &ExtractedRequirements) {
    out.push_str("## Extracted requirements\n");
    if reqs.is_empty() {
        out.push_str("- none detected; choose sensible defaults and expose them as variables\n");
    } else {
        for (category, items) in reqs.iter() {
            if items.is_empty() {
                continue;
            }
            let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "- {}: {}", category.as_str(), joined.join(", "));
        }
    }

    if !request.libraries().is_empty() {
        let names: Vec<&str> = request.libraries().iter().map(String::as_str).collect();
        let _ = writeln!(out, "Required libraries (import each one): {}", names.join(", "));
    } else if !reqs.suggested_libraries.is_empty() {
        let _ = writeln!(
            out,
            "Libraries that may help: {}",
            reqs.suggested_libraries.join(", ")
        );
    }
}

fn truncate_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => (&text[..byte], true),
        None => (text, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        let (head, cut) = truncate_chars("ééééé", 2);
        assert_eq!(head, "éé");
        assert!(cut);
        let (all, cut) = truncate_chars("abc", 10);
        assert_eq!(all, "abc");
        assert!(!cut);
    }
}
