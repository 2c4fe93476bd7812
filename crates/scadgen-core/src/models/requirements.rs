use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::manufacturing::ManufacturingMethod;

/// Category a requirement was extracted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Dimension,
    Material,
    Feature,
    Connection,
    Tolerance,
}

impl RequirementCategory {
    pub const ALL: [RequirementCategory; 5] = [
        Self::Dimension,
        Self::Material,
        Self::Feature,
        Self::Connection,
        Self::Tolerance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dimension => "dimension",
            Self::Material => "material",
            Self::Feature => "feature",
            Self::Connection => "connection",
            Self::Tolerance => "tolerance",
        }
    }
}

/// Extracted value: a number with a unit, or a keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for RequirementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

/// One extracted (value, unit, confidence) tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub value: RequirementValue,
    pub unit: Option<String>,
    /// Heuristic confidence in [0.0, 1.0].
    pub confidence: f64,
    /// Parameter name found next to a dimension ("height", "diameter", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Requirement {
    pub fn number(value: f64, unit: impl Into<String>, confidence: f64) -> Self {
        Self {
            value: RequirementValue::Number(value),
            unit: Some(unit.into()),
            confidence: confidence.clamp(0.0, 1.0),
            label: None,
        }
    }

    pub fn text(value: impl Into<String>, confidence: f64) -> Self {
        Self {
            value: RequirementValue::Text(value.into()),
            unit: None,
            confidence: confidence.clamp(0.0, 1.0),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            RequirementValue::Number(n) => Some(n),
            RequirementValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            RequirementValue::Text(t) => Some(t),
            RequirementValue::Number(_) => None,
        }
    }

    /// Length converted to millimetres, for length units only.
    pub fn millimetres(&self) -> Option<f64> {
        let value = self.as_number()?;
        let factor = match self.unit.as_deref()? {
            "mm" => 1.0,
            "cm" => 10.0,
            "m" => 1000.0,
            "in" | "inch" | "inches" => 25.4,
            _ => return None,
        };
        Some(value * factor)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label} ")?;
        }
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Structured requirements extracted from a design prompt.
///
/// Every category is always present; a category with nothing recognised
/// holds an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRequirements {
    categories: BTreeMap<RequirementCategory, Vec<Requirement>>,
    /// Manufacturing process named in the prompt text, if any.
    pub detected_method: Option<ManufacturingMethod>,
    /// Libraries suggested by detected component domains, sorted.
    pub suggested_libraries: Vec<String>,
}

impl Default for ExtractedRequirements {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractedRequirements {
    pub fn new() -> Self {
        Self {
            categories: RequirementCategory::ALL
                .iter()
                .map(|c| (*c, Vec::new()))
                .collect(),
            detected_method: None,
            suggested_libraries: Vec::new(),
        }
    }

    /// Requirements of a category, in extraction order.
    pub fn get(&self, category: RequirementCategory) -> &[Requirement] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append a requirement unless an equal value/unit pair is already present.
    pub fn push(&mut self, category: RequirementCategory, requirement: Requirement) {
        let list = self.categories.entry(category).or_default();
        let duplicate = list
            .iter()
            .any(|r| r.value == requirement.value && r.unit == requirement.unit);
        if !duplicate {
            list.push(requirement);
        }
    }

    /// Feature keywords in extraction order.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.get(RequirementCategory::Feature)
            .iter()
            .filter_map(Requirement::as_text)
    }

    pub fn dimensions(&self) -> &[Requirement] {
        self.get(RequirementCategory::Dimension)
    }

    /// Whether nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequirementCategory, &[Requirement])> {
        self.categories.iter().map(|(c, r)| (*c, r.as_slice()))
    }
}
