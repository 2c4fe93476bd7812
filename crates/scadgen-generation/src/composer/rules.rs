//! Static design checklists injected into every prompt.

use scadgen_core::models::ManufacturingMethod;

const PRINTING_RULES: &[&str] = &[
    "Keep walls at least 1.2 mm thick.",
    "Avoid overhangs steeper than 45 degrees; prefer chamfers to flat ceilings.",
    "Leave 0.2 to 0.4 mm clearance between mating or moving parts.",
    "Give the part a flat face to sit on the build plate.",
    "Orient holes and bridges so they print without supports where possible.",
];

const CNC_RULES: &[&str] = &[
    "Give inside corners a radius no smaller than the cutting tool radius.",
    "Keep pocket depth under four times the tool diameter.",
    "Make every feature reachable from a small number of setups.",
    "Avoid walls thinner than 1 mm in metal or 1.5 mm in plastic.",
    "Use standard drill sizes for holes.",
];

const INJECTION_MOLDING_RULES: &[&str] = &[
    "Add a draft angle of at least 1 to 2 degrees on faces parallel to the pull direction.",
    "Keep wall thickness uniform, typically 1.5 to 3 mm.",
    "Use ribs instead of thick sections; ribs at 50 to 60 percent of wall thickness.",
    "Round internal corners with a radius of at least half the wall thickness.",
    "Avoid undercuts unless side actions are acceptable.",
];

const GENERAL_RULES: &[&str] = &[
    "Keep the design parametric so dimensions can be adjusted later.",
    "Add fillets or chamfers to sharp edges that carry load.",
    "Use millimetres for every dimension.",
];

/// Ordered design-consideration checklist for a manufacturing method.
pub fn manufacturing_rules(method: ManufacturingMethod) -> &'static [&'static str] {
    match method {
        ManufacturingMethod::None => GENERAL_RULES,
        ManufacturingMethod::Printing => PRINTING_RULES,
        ManufacturingMethod::Cnc => CNC_RULES,
        ManufacturingMethod::InjectionMolding => INJECTION_MOLDING_RULES,
    }
}

/// Code-structure checklist, the same for every request.
pub const IMPLEMENTATION_RULES: &[&str] = &[
    "Declare every key dimension as a named variable at the top of the file, with its unit in a comment.",
    "Assign every variable before it is used.",
    "Organise the model into modules with descriptive names and call them at the end.",
    "Comment the design decisions.",
    "Add a `use <...>` or `include <...>` line for every library the code calls.",
    "Use named arguments for primitives, e.g. cylinder(h = height, d = diameter).",
    "Pass transforms a single vector: translate([x, y, z]).",
    "Return only OpenSCAD code, in one fenced code block.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_has_rules() {
        for method in ManufacturingMethod::ALL {
            assert!(!manufacturing_rules(method).is_empty());
        }
    }

    #[test]
    fn molding_mentions_draft() {
        assert!(manufacturing_rules(ManufacturingMethod::InjectionMolding)[0].contains("draft"));
    }
}
