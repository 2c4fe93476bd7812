use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;

/// Manufacturing process a design targets. Drives the constraint checklist
/// injected into the generation prompt.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ManufacturingMethod {
    #[default]
    None,
    Printing,
    Cnc,
    InjectionMolding,
}

impl ManufacturingMethod {
    pub const ALL: [ManufacturingMethod; 4] = [
        Self::None,
        Self::Printing,
        Self::Cnc,
        Self::InjectionMolding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Printing => "printing",
            Self::Cnc => "cnc",
            Self::InjectionMolding => "injection-molding",
        }
    }

    /// Human-readable process name used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "general purpose (no specific process)",
            Self::Printing => "3D printing (FDM/SLA)",
            Self::Cnc => "CNC machining",
            Self::InjectionMolding => "injection molding",
        }
    }

    /// Retrieval keywords describing best practice for this process.
    pub fn best_practice_keywords(&self) -> &'static str {
        match self {
            Self::None => "parametric modular design best practices",
            Self::Printing => "3d printing wall thickness overhang clearance tolerance",
            Self::Cnc => "cnc machining inside corner tool radius fillet pocket",
            Self::InjectionMolding => "draft angle injection molding uniform wall thickness rib",
        }
    }
}

impl fmt::Display for ManufacturingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManufacturingMethod {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "none" | "" => Ok(Self::None),
            "printing" | "print" | "3d-printing" | "3dp" | "fdm" | "sla" => Ok(Self::Printing),
            "cnc" | "machining" | "cnc-machining" | "milling" => Ok(Self::Cnc),
            "injection-molding" | "injection-moulding" | "injection" | "molding" => {
                Ok(Self::InjectionMolding)
            }
            _ => Err(RequestError::UnknownManufacturingMethod {
                value: s.to_string(),
            }),
        }
    }
}
