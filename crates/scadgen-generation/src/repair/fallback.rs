//! Always-valid template emitted when every attempt failed validation.

use std::collections::BTreeSet;
use std::fmt::Write;

use scadgen_core::models::{ExtractedRequirements, Requirement};
use scadgen_validation::libraries::lookup;

const DEFAULT_WIDTH: f64 = 20.0;
const DEFAULT_DEPTH: f64 = 20.0;
const DEFAULT_HEIGHT: f64 = 10.0;

enum Shape {
    Box { width: f64, depth: f64, height: f64 },
    Cylinder { diameter: f64, height: f64 },
}

/// Length requirement in millimetres, rounded for printing. Non-positive
/// and non-finite values are dropped.
fn mm(requirement: &Requirement) -> Option<f64> {
    let value = requirement.millimetres()?;
    let rounded = (value * 1000.0).round() / 1000.0;
    (rounded.is_finite() && rounded > 0.0).then_some(rounded)
}

fn labelled(dims: &[(Option<&str>, f64)], labels: &[&str]) -> Option<f64> {
    dims.iter()
        .find(|(label, _)| label.is_some_and(|l| labels.contains(&l)))
        .map(|(_, v)| *v)
}

fn choose_shape(requirements: &ExtractedRequirements) -> Shape {
    let dims: Vec<(Option<&str>, f64)> = requirements
        .dimensions()
        .iter()
        .filter_map(|r| mm(r).map(|v| (r.label.as_deref(), v)))
        .collect();
    let mut unlabelled = dims.iter().filter(|(l, _)| l.is_none()).map(|(_, v)| *v);

    let height = labelled(&dims, &["height", "length", "thickness"]);
    let diameter = labelled(&dims, &["diameter"])
        .or_else(|| labelled(&dims, &["radius"]).map(|r| r * 2.0));

    if let Some(diameter) = diameter {
        return Shape::Cylinder {
            diameter,
            height: height.or_else(|| unlabelled.next()).unwrap_or(DEFAULT_HEIGHT),
        };
    }

    let width = labelled(&dims, &["width"]).or_else(|| unlabelled.next());
    let depth = labelled(&dims, &["depth"]).or_else(|| unlabelled.next());
    let height = height.or_else(|| unlabelled.next());
    Shape::Box {
        width: width.unwrap_or(DEFAULT_WIDTH),
        depth: depth.unwrap_or(DEFAULT_DEPTH),
        height: height.unwrap_or(DEFAULT_HEIGHT),
    }
}

/// One-line, comment-safe rendering of the request text.
fn comment_text(text: &str) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(120)
        .collect();
    flat.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Known libraries get their usual import; others `use <name/name.scad>`.
fn import_line(library: &str) -> String {
    match lookup(library) {
        Some(signature) => signature.suggested_import.to_string(),
        None => format!("use <{library}/{library}.scad>"),
    }
}

/// A box, or a cylinder when a diameter or radius was extracted, sized
/// from the extracted dimensions. Every requested library is imported.
pub fn fallback_template(
    request_text: &str,
    requirements: &ExtractedRequirements,
    libraries: &BTreeSet<String>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Fallback model for: {}", comment_text(request_text));
    out.push_str("// No generated candidate passed validation; adjust the parameters below.\n\n");

    let imports: BTreeSet<String> = libraries.iter().map(|l| import_line(l)).collect();
    for line in &imports {
        let _ = writeln!(out, "{line}");
    }
    if !imports.is_empty() {
        out.push('\n');
    }

    match choose_shape(requirements) {
        Shape::Box {
            width,
            depth,
            height,
        } => {
            let _ = writeln!(out, "width = {width}; // mm");
            let _ = writeln!(out, "depth = {depth}; // mm");
            let _ = writeln!(out, "height = {height}; // mm");
            out.push_str("\nmodule fallback_shape() {\n    cube([width, depth, height]);\n}\n");
        }
        Shape::Cylinder { diameter, height } => {
            let _ = writeln!(out, "diameter = {diameter}; // mm");
            let _ = writeln!(out, "height = {height}; // mm");
            out.push_str("$fn = 64;\n");
            out.push_str(
                "\nmodule fallback_shape() {\n    cylinder(h = height, d = diameter);\n}\n",
            );
        }
    }
    out.push_str("\nfallback_shape();\n");
    out
}

#[cfg(test)]
mod tests {
    use scadgen_core::models::{Requirement, RequirementCategory};

    use super::*;

    #[test]
    fn defaults_to_box() {
        let code = fallback_template(
            "something",
            &ExtractedRequirements::new(),
            &BTreeSet::new(),
        );
        assert!(code.contains("width = 20; // mm"));
        assert!(code.contains("height = 10; // mm"));
        assert!(code.contains("cube([width, depth, height]);"));
    }

    #[test]
    fn diameter_selects_cylinder() {
        let mut reqs = ExtractedRequirements::new();
        reqs.push(
            RequirementCategory::Dimension,
            Requirement::number(1.5, "inch", 0.95).with_label("diameter"),
        );
        reqs.push(
            RequirementCategory::Dimension,
            Requirement::number(4.0, "cm", 0.95).with_label("height"),
        );
        let code = fallback_template("a peg", &reqs, &BTreeSet::new());
        assert!(code.contains("diameter = 38.1; // mm"));
        assert!(code.contains("height = 40; // mm"));
        assert!(code.contains("cylinder(h = height, d = diameter);"));
    }

    #[test]
    fn teeth_are_not_lengths() {
        let mut reqs = ExtractedRequirements::new();
        reqs.push(
            RequirementCategory::Dimension,
            Requirement::number(15.0, "teeth", 0.9),
        );
        reqs.push(RequirementCategory::Dimension, Requirement::number(5.0, "mm", 0.85));
        let code = fallback_template("gear", &reqs, &BTreeSet::new());
        assert!(code.contains("width = 5; // mm"));
        assert!(code.contains("depth = 20; // mm"));
    }

    #[test]
    fn request_text_stays_on_one_comment_line() {
        let code = fallback_template(
            "two\nlines\r\tand more",
            &ExtractedRequirements::new(),
            &BTreeSet::new(),
        );
        assert!(code.starts_with("// Fallback model for: two lines and more\n"));
    }

    #[test]
    fn requested_libraries_are_imported() {
        let libraries: BTreeSet<String> =
            ["BOSL2", "bosl2", "MyParts"].iter().map(|s| s.to_string()).collect();
        let code = fallback_template("a gear", &ExtractedRequirements::new(), &libraries);
        assert_eq!(code.matches("include <BOSL2/std.scad>").count(), 1);
        assert!(code.contains("use <MyParts/MyParts.scad>"));
    }
}
