//! Multi-query planning: one query per feature, one for the whole prompt,
//! one for the manufacturing method's best practice.

use std::collections::HashSet;

use scadgen_core::config::defaults::{
    FEATURE_QUERY_WEIGHT, MANUFACTURING_QUERY_WEIGHT, PROMPT_QUERY_WEIGHT,
};
use scadgen_core::models::{ExtractedRequirements, ManufacturingMethod, QueryTag, RetrievalQuery};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct QueryPlanner;

impl QueryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Build the ordered query sequence. Deterministic in its inputs.
    ///
    /// Order is feature queries, then the whole-prompt query, then the
    /// manufacturing query. Queries whose text repeats an earlier one are
    /// skipped; `priority` is the final position.
    pub fn plan(
        &self,
        prompt: &str,
        requirements: &ExtractedRequirements,
        method: ManufacturingMethod,
    ) -> Vec<RetrievalQuery> {
        let library_hint = requirements.suggested_libraries.join(" ");
        let mut candidates: Vec<(String, QueryTag, f64)> = requirements
            .features()
            .map(|feature| {
                let mut text = format!("OpenSCAD {feature} module example code");
                if !library_hint.is_empty() {
                    text.push(' ');
                    text.push_str(&library_hint);
                }
                (text, QueryTag::Feature, FEATURE_QUERY_WEIGHT)
            })
            .collect();

        candidates.push((prompt.trim().to_string(), QueryTag::Prompt, PROMPT_QUERY_WEIGHT));
        candidates.push((
            format!("OpenSCAD {}", method.best_practice_keywords()),
            QueryTag::Manufacturing,
            MANUFACTURING_QUERY_WEIGHT,
        ));

        let mut seen = HashSet::new();
        let queries: Vec<RetrievalQuery> = candidates
            .into_iter()
            .filter(|(text, _, _)| !text.is_empty() && seen.insert(text.to_lowercase()))
            .enumerate()
            .map(|(priority, (text, tag, weight))| RetrievalQuery::new(text, tag, weight, priority))
            .collect();

        debug!(count = queries.len(), method = %method, "planned retrieval queries");
        queries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scadgen_core::models::{Requirement, RequirementCategory};

    fn requirements(features: &[&str]) -> ExtractedRequirements {
        let mut reqs = ExtractedRequirements::new();
        for f in features {
            reqs.push(RequirementCategory::Feature, Requirement::text(*f, 0.8));
        }
        reqs
    }

    #[test]
    fn weights_follow_query_kind() {
        let queries = QueryPlanner::new().plan(
            "a gear",
            &requirements(&["gear"]),
            ManufacturingMethod::Printing,
        );
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[0].tag, QueryTag::Feature);
        assert_eq!(queries[0].weight, 1.0);
        assert_eq!(queries[1].tag, QueryTag::Prompt);
        assert_eq!(queries[1].weight, 0.6);
        assert_eq!(queries[2].tag, QueryTag::Manufacturing);
        assert_eq!(queries[2].weight, 0.8);
        assert!(queries[2].text.contains("overhang"));
    }

    #[test]
    fn priorities_are_positions() {
        let queries = QueryPlanner::new().plan(
            "box with vents",
            &requirements(&["enclosure", "ventilation"]),
            ManufacturingMethod::None,
        );
        for (i, q) in queries.iter().enumerate() {
            assert_eq!(q.priority, i);
        }
    }

    #[test]
    fn library_hints_extend_feature_queries() {
        let mut reqs = requirements(&["gear"]);
        reqs.suggested_libraries = vec!["BOSL2".into(), "MCAD".into()];
        let queries = QueryPlanner::new().plan("gear", &reqs, ManufacturingMethod::None);
        assert!(queries[0].text.ends_with("BOSL2 MCAD"));
    }

    #[test]
    fn duplicate_texts_are_dropped() {
        let queries = QueryPlanner::new().plan(
            "OpenSCAD parametric modular design best practices",
            &requirements(&[]),
            ManufacturingMethod::None,
        );
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].tag, QueryTag::Prompt);
    }
}
