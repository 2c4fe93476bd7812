/// scadgen version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on results requested from a store for a single query.
pub const MAX_TOP_K: usize = 20;

/// Requested-library hits a query needs before other libraries are dropped from it.
pub const MIN_PREFERRED_LIBRARY_HITS: usize = 3;

/// Upper bound on repair attempts regardless of configuration.
pub const MAX_REPAIR_ATTEMPTS: u32 = 10;

/// Built-in OpenSCAD geometry primitives, 2D and 3D.
pub const KNOWN_PRIMITIVES: &[&str] = &[
    "cube",
    "sphere",
    "cylinder",
    "polyhedron",
    "square",
    "circle",
    "polygon",
    "text",
];

/// CSG boolean operations.
pub const BOOLEAN_OPERATIONS: &[&str] = &["union", "difference", "intersection"];

/// Transform calls that take a single vector argument.
pub const VECTOR_TRANSFORMS: &[&str] = &["translate", "rotate", "scale", "mirror", "resize"];

/// Characters of previous candidate code echoed back in a correction prompt.
pub const CORRECTION_CODE_ECHO_CHARS: usize = 6_000;
