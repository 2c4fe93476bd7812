use std::collections::BTreeSet;

use regex::Regex;
use scadgen_core::models::{
    DesignRequest, ExtractedRequirements, ManufacturingMethod, Requirement, RequirementCategory,
};
use tracing::debug;

use super::lexicon::{
    libraries_for, CONNECTION_TERMS, FEATURE_TERMS, MATERIAL_TERMS, PARAMETER_WINDOW,
    PARAMETER_WORDS, PROCESS_TERMS,
};
use super::patterns::{
    RE_CLEARANCE_AFTER, RE_CLEARANCE_BEFORE, RE_DIMENSION, RE_METRIC_THREAD, RE_PLUS_MINUS,
    RE_TEETH,
};

/// Extracts structured requirements from a design prompt.
///
/// Pure and infallible: text that matches nothing yields empty categories.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptAnalyzer;

impl PromptAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, request: &DesignRequest) -> ExtractedRequirements {
        let text = request.text();
        let lower = text.to_lowercase();
        let mut reqs = ExtractedRequirements::new();

        for (_, requirement) in extract_dimensions(text) {
            reqs.push(RequirementCategory::Dimension, requirement);
        }
        for (_, requirement) in extract_tolerances(text) {
            reqs.push(RequirementCategory::Tolerance, requirement);
        }
        for (_, requirement) in extract_connections(text, &lower) {
            reqs.push(RequirementCategory::Connection, requirement);
        }

        let features = ordered_terms(&lower, FEATURE_TERMS);
        for feature in &features {
            reqs.push(RequirementCategory::Feature, Requirement::text(*feature, 0.8));
        }
        for material in ordered_terms(&lower, MATERIAL_TERMS) {
            reqs.push(RequirementCategory::Material, Requirement::text(material, 0.9));
        }

        if let Some(method) = detect_process(&lower) {
            reqs.detected_method = Some(method);
            reqs.push(
                RequirementCategory::Material,
                Requirement::text(method.as_str(), 0.7).with_label("process"),
            );
        }

        reqs.suggested_libraries = if request.libraries().is_empty() {
            features
                .iter()
                .flat_map(|f| libraries_for(f).iter().map(|l| l.to_string()))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        } else {
            request.libraries().iter().cloned().collect()
        };

        debug!(
            features = features.len(),
            dimensions = reqs.dimensions().len(),
            detected_method = ?reqs.detected_method,
            libraries = ?reqs.suggested_libraries,
            "analyzed design prompt"
        );
        reqs
    }
}

fn captures<'t>(pattern: &Option<Regex>, text: &'t str) -> Vec<regex::Captures<'t>> {
    pattern
        .as_ref()
        .map(|re| re.captures_iter(text).collect())
        .unwrap_or_default()
}

fn parse_number(caps: &regex::Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse::<f64>().ok()
}

fn canonical_unit(unit: &str) -> String {
    match unit.to_lowercase().as_str() {
        "in" | "inch" | "inches" => "inch".to_string(),
        other => other.to_string(),
    }
}

/// Nearest parameter word in the few characters before `offset`.
fn parameter_label(text: &str, offset: usize) -> Option<&'static str> {
    let before = text.get(..offset)?;
    let skip = before.chars().count().saturating_sub(PARAMETER_WINDOW);
    let window: String = before.chars().skip(skip).collect::<String>().to_lowercase();
    PARAMETER_WORDS
        .iter()
        .filter_map(|word| window.rfind(word).map(|pos| (pos, *word)))
        .max_by_key(|(pos, _)| *pos)
        .map(|(_, word)| word)
}

fn extract_dimensions(text: &str) -> Vec<(usize, Requirement)> {
    let mut found = Vec::new();
    for caps in captures(&RE_DIMENSION, text) {
        let (Some(whole), Some(value), Some(unit)) =
            (caps.get(0), parse_number(&caps, 1), caps.get(2).or_else(|| caps.get(3)))
        else {
            continue;
        };
        let requirement = match parameter_label(text, whole.start()) {
            Some(label) => {
                Requirement::number(value, canonical_unit(unit.as_str()), 0.95).with_label(label)
            }
            None => Requirement::number(value, canonical_unit(unit.as_str()), 0.85),
        };
        found.push((whole.start(), requirement));
    }
    for caps in captures(&RE_TEETH, text) {
        if let (Some(whole), Some(value)) = (caps.get(0), parse_number(&caps, 1)) {
            found.push((whole.start(), Requirement::number(value, "teeth", 0.9)));
        }
    }
    found.sort_by_key(|(pos, _)| *pos);
    found
}

fn extract_tolerances(text: &str) -> Vec<(usize, Requirement)> {
    let mut found = Vec::new();
    for pattern in [&RE_PLUS_MINUS, &RE_CLEARANCE_AFTER, &RE_CLEARANCE_BEFORE] {
        for caps in captures(pattern, text) {
            let (Some(whole), Some(value)) = (caps.get(0), parse_number(&caps, 1)) else {
                continue;
            };
            let unit = caps
                .get(2)
                .map(|u| canonical_unit(u.as_str()))
                .unwrap_or_else(|| "mm".to_string());
            found.push((whole.start(), Requirement::number(value, unit, 0.8)));
        }
    }
    found.sort_by_key(|(pos, _)| *pos);
    found
}

fn extract_connections(text: &str, lower: &str) -> Vec<(usize, Requirement)> {
    let mut found = Vec::new();
    for caps in captures(&RE_METRIC_THREAD, text) {
        let (Some(whole), Some(diameter)) = (caps.get(0), parse_number(&caps, 1)) else {
            continue;
        };
        found.push((
            whole.start(),
            Requirement::number(diameter, "mm", 0.9).with_label("metric thread"),
        ));
        if let Some(pitch) = parse_number(&caps, 2) {
            found.push((
                whole.start(),
                Requirement::number(pitch, "mm", 0.85).with_label("thread pitch"),
            ));
        }
    }
    for (name, terms) in CONNECTION_TERMS {
        if let Some(pos) = first_occurrence(lower, terms) {
            found.push((pos, Requirement::text(*name, 0.75)));
        }
    }
    found.sort_by_key(|(pos, _)| *pos);
    found
}

fn detect_process(lower: &str) -> Option<ManufacturingMethod> {
    PROCESS_TERMS
        .iter()
        .filter_map(|(method, terms)| first_occurrence(lower, terms).map(|pos| (pos, *method)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, method)| method)
}

/// Canonical names whose terms occur in `lower`, ordered by first occurrence.
fn ordered_terms(lower: &str, table: &[(&'static str, &[&str])]) -> Vec<&'static str> {
    let mut hits: Vec<(usize, usize, &'static str)> = table
        .iter()
        .enumerate()
        .filter_map(|(rank, (name, terms))| {
            first_occurrence(lower, terms).map(|pos| (pos, rank, *name))
        })
        .collect();
    hits.sort();
    hits.into_iter().map(|(_, _, name)| name).collect()
}

fn first_occurrence(lower: &str, terms: &[&str]) -> Option<usize> {
    terms.iter().filter_map(|t| find_word(lower, t)).min()
}

/// Position of `term` in `haystack` bounded by non-alphanumeric characters.
fn find_word(haystack: &str, term: &str) -> Option<usize> {
    haystack.match_indices(term).map(|(pos, _)| pos).find(|&pos| {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[pos + term.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}
