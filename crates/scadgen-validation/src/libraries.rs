//! Known OpenSCAD libraries: how they are imported and which calls give
//! them away.

pub struct LibrarySignature {
    pub name: &'static str,
    /// Path segments (without `.scad`) that identify an import of the library.
    pub import_markers: &'static [&'static str],
    /// Calls that only make sense with the library loaded.
    pub calls: &'static [&'static str],
    /// Import line suggested in repair prompts.
    pub suggested_import: &'static str,
}

pub const KNOWN_LIBRARIES: &[LibrarySignature] = &[
    LibrarySignature {
        name: "BOSL2",
        import_markers: &["bosl2"],
        calls: &["cuboid", "cyl", "cylindroid", "attach", "spur_gear", "threaded_rod", "prismoid"],
        suggested_import: "include <BOSL2/std.scad>",
    },
    LibrarySignature {
        name: "BOSL",
        import_markers: &["bosl"],
        calls: &["cube_center", "hollow_cylinder", "upcube"],
        suggested_import: "use <BOSL/basics.scad>",
    },
    LibrarySignature {
        name: "Round-Anything",
        import_markers: &["round-anything", "polyround"],
        calls: &["polyround", "polyRound", "round_corners", "beamChain", "polyRoundExtrude"],
        suggested_import: "use <Round-Anything/polyround.scad>",
    },
    LibrarySignature {
        name: "threads-scad",
        import_markers: &["threads", "threads-scad"],
        calls: &["metric_thread", "english_thread", "ScrewThread", "RodStart", "RodEnd"],
        suggested_import: "use <threads.scad>",
    },
    LibrarySignature {
        name: "MCAD",
        import_markers: &["mcad"],
        calls: &["involute_gear", "bevel_gear", "gear"],
        suggested_import: "use <MCAD/involute_gears.scad>",
    },
    LibrarySignature {
        name: "NopSCADlib",
        import_markers: &["nopscadlib"],
        calls: &["pcb", "screw", "nut", "insert"],
        suggested_import: "include <NopSCADlib/lib.scad>",
    },
    LibrarySignature {
        name: "BOLTS_archive",
        import_markers: &["bolts", "bolts_archive"],
        calls: &["ISO4017", "DIN931", "ISO4032"],
        suggested_import: "include <BOLTS/BOLTS.scad>",
    },
    LibrarySignature {
        name: "YAPP_Box",
        import_markers: &["yapp_box", "yappgenerator"],
        calls: &["YAPPgenerate"],
        suggested_import: "include <YAPP_Box/YAPPgenerator_v3.scad>",
    },
    LibrarySignature {
        name: "MarksEnclosureHelper",
        import_markers: &["marksenclosurehelper"],
        calls: &[],
        suggested_import: "use <MarksEnclosureHelper/enclosure.scad>",
    },
    LibrarySignature {
        name: "constructive",
        import_markers: &["constructive"],
        calls: &[],
        suggested_import: "include <constructive/constructive-compiled.scad>",
    },
    LibrarySignature {
        name: "dotSCAD",
        import_markers: &["dotscad"],
        calls: &[],
        suggested_import: "use <dotSCAD/src/...>",
    },
];

pub fn lookup(name: &str) -> Option<&'static LibrarySignature> {
    KNOWN_LIBRARIES
        .iter()
        .find(|lib| lib.name.eq_ignore_ascii_case(name))
}

/// Whether an import path refers to `library`.
///
/// A path segment matches a marker when equal to it, or when it starts
/// with the marker followed by a non-alphanumeric character
/// (`threads-v2`, `yappgenerator_v3`), so `bosl` never matches `BOSL2/`.
pub fn import_matches(path: &str, library: &str) -> bool {
    let lowered_name = library.to_lowercase();
    let markers: Vec<&str> = match lookup(library) {
        Some(sig) => sig.import_markers.to_vec(),
        None => vec![lowered_name.as_str()],
    };
    path.to_lowercase()
        .split(['/', '\\'])
        .map(|segment| segment.strip_suffix(".scad").unwrap_or(segment).to_string())
        .any(|segment| {
            markers.iter().any(|marker| {
                segment == *marker
                    || segment.strip_prefix(*marker).is_some_and(|rest| {
                        rest.chars().next().is_some_and(|c| !c.is_alphanumeric())
                    })
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bosl_does_not_match_bosl2() {
        assert!(import_matches("BOSL2/std.scad", "BOSL2"));
        assert!(!import_matches("BOSL2/std.scad", "BOSL"));
        assert!(import_matches("BOSL/basics.scad", "BOSL"));
    }

    #[test]
    fn file_stem_markers_match() {
        assert!(import_matches("threads.scad", "threads-scad"));
        assert!(import_matches("lib/YAPPgenerator_v3.scad", "YAPP_Box"));
    }

    #[test]
    fn unknown_library_matches_its_own_name() {
        assert!(import_matches("MyLib/parts.scad", "mylib"));
        assert!(!import_matches("Other/parts.scad", "mylib"));
    }
}
