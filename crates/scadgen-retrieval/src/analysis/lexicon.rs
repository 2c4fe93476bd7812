//! Keyword tables consulted by the analyzer.

use scadgen_core::models::ManufacturingMethod;

/// Canonical feature name and the words that indicate it.
pub const FEATURE_TERMS: &[(&str, &[&str])] = &[
    ("gear", &["gear", "gears", "cog", "sprocket", "pinion", "rack"]),
    ("thread", &["thread", "threaded", "threads", "screw", "bolt", "nut", "fastener"]),
    ("snap fit", &["snap fit", "snap-fit", "snapfit"]),
    ("ventilation", &["ventilation", "vent", "vents", "vented", "airflow"]),
    ("hinge", &["hinge", "hinged", "living hinge"]),
    ("enclosure", &["enclosure", "box", "case", "housing", "container"]),
    ("rounded", &["rounded", "round", "fillet", "filleted", "chamfer", "chamfered"]),
    ("text", &["text", "label", "lettering", "engraved", "embossed"]),
    ("electronic", &["pcb", "arduino", "raspberry pi", "electronic", "electronics"]),
    ("mounting hole", &["mounting hole", "mounting holes", "screw hole", "screw holes"]),
    ("bracket", &["bracket", "mount"]),
    ("hole", &["hole", "holes", "bore"]),
    ("handle", &["handle", "knob"]),
    ("lid", &["lid", "cover"]),
    ("spring", &["spring", "flexure"]),
];

/// Libraries suggested per detected feature domain.
pub const DOMAIN_LIBRARIES: &[(&str, &[&str])] = &[
    ("thread", &["BOLTS_archive", "threads-scad", "NopSCADlib"]),
    ("gear", &["BOSL2", "BOLTS_archive", "BOSL"]),
    ("rounded", &["Round-Anything", "BOSL2"]),
    ("enclosure", &["YAPP_Box", "MarksEnclosureHelper"]),
    ("electronic", &["NopSCADlib"]),
    ("text", &["BOSL2", "BOSL"]),
];

/// Canonical material name and its spellings.
pub const MATERIAL_TERMS: &[(&str, &[&str])] = &[
    ("pla", &["pla"]),
    ("petg", &["petg"]),
    ("abs", &["abs"]),
    ("tpu", &["tpu", "flexible filament"]),
    ("nylon", &["nylon", "pa12"]),
    ("resin", &["resin"]),
    ("aluminum", &["aluminum", "aluminium"]),
    ("stainless steel", &["stainless steel", "stainless"]),
    ("steel", &["steel"]),
    ("brass", &["brass"]),
    ("wood", &["wood", "plywood", "mdf"]),
    ("acrylic", &["acrylic", "pmma"]),
    ("polycarbonate", &["polycarbonate"]),
    ("polypropylene", &["polypropylene"]),
];

/// Process words and the manufacturing method they imply.
pub const PROCESS_TERMS: &[(ManufacturingMethod, &[&str])] = &[
    (
        ManufacturingMethod::Printing,
        &["3d print", "3d printed", "3d printing", "3d-printed", "printable", "fdm", "sla"],
    ),
    (
        ManufacturingMethod::Cnc,
        &["cnc", "machined", "machining", "milled", "milling"],
    ),
    (
        ManufacturingMethod::InjectionMolding,
        &["injection molded", "injection molding", "injection moulded", "injection moulding", "molded", "moulded"],
    ),
];

/// Connection methods that are not features in their own right.
pub const CONNECTION_TERMS: &[(&str, &[&str])] = &[
    ("press fit", &["press fit", "press-fit", "interference fit"]),
    ("dovetail", &["dovetail"]),
    ("magnet", &["magnet", "magnetic", "magnets"]),
    ("bayonet", &["bayonet", "twist lock", "twist-lock"]),
    ("adhesive", &["glue", "glued", "adhesive"]),
];

/// Words that name the parameter a nearby dimension belongs to.
pub const PARAMETER_WORDS: &[&str] = &[
    "height",
    "width",
    "depth",
    "diameter",
    "radius",
    "length",
    "thickness",
];

/// Characters before a dimension searched for a parameter word.
pub const PARAMETER_WINDOW: usize = 20;

pub fn libraries_for(feature: &str) -> &'static [&'static str] {
    DOMAIN_LIBRARIES
        .iter()
        .find(|(domain, _)| *domain == feature)
        .map(|(_, libs)| *libs)
        .unwrap_or(&[])
}
