use std::fmt::Write;
use std::sync::LazyLock;

use scadgen_validation::libraries::KNOWN_LIBRARIES;

const RULES: &str = "\
You are an expert OpenSCAD programmer and mechanical engineer. You write precise, \
parametric and manufacturable OpenSCAD models.

Rules for every answer:
1. Reply with executable OpenSCAD code only, inside a single ```openscad fenced block.
2. Call primitives with named arguments: cylinder(h = height, d = diameter), never cylinder(10, 5).
3. Pass transforms one vector: translate([x, y, z]), never translate(x, y, z).
4. End every statement with a semicolon and close every ( [ { you open.
5. Separate vector elements with commas: [x, y, z].
6. Assign each variable before it is used and define each module before calling it.
7. Put all parameters at the top of the file with their unit in a comment (mm).
8. Split multi-part models into one module per part.
9. Set $fn for curved surfaces (around 64 to 100 for final renders).
10. Import every library you call:
";

const CLOSING: &str = "\
Do not use reserved words (module, function, for, if, else) as variable names, and do not \
give a function and a variable the same name.";

// Import lines come from the same table the validator checks against.
static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(|| {
    let mut prompt = String::from(RULES);
    for library in KNOWN_LIBRARIES {
        let _ = writeln!(prompt, "   - {}: {}", library.name, library.suggested_import);
    }
    prompt.push('\n');
    prompt.push_str(CLOSING);
    prompt
});

/// Instructions sent as the system message to chat-style backends.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_known_import() {
        let prompt = system_prompt();
        for library in KNOWN_LIBRARIES {
            assert!(prompt.contains(library.suggested_import), "{}", library.name);
        }
        assert!(prompt.contains("use <BOSL/basics.scad>"));
        assert!(!prompt.contains("BOSL/shapes.scad"));
        assert!(prompt.ends_with("the same name."));
    }
}
