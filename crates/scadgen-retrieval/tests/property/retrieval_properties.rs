use proptest::prelude::*;
use scadgen_core::models::{DesignRequest, QueryTag, RetrievalQuery, RetrievedChunk};
use scadgen_retrieval::{ContextRanker, PromptAnalyzer, QueryPlanner};

fn arb_chunk() -> impl Strategy<Value = RetrievedChunk> {
    (
        "[a-e]",
        "[a-z]{0,40}",
        0.0f64..=1.0,
        prop_oneof![Just(1.0f64), Just(0.8), Just(0.6)],
        0usize..5,
    )
        .prop_map(|(id, code, similarity, weight, priority)| RetrievedChunk {
            chunk_id: id,
            library: "lib".to_string(),
            code,
            similarity,
            query: RetrievalQuery::new(format!("q{priority}"), QueryTag::Feature, weight, priority),
        })
}

proptest! {
    #[test]
    fn ranked_context_is_unique_and_sorted(
        chunks in prop::collection::vec(arb_chunk(), 0..30),
        budget in 0usize..400,
    ) {
        let ranked = ContextRanker::new(budget).rank(chunks);
        let ids = ranked.chunk_ids();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert!(ranked.total_chars() <= budget);
        for pair in ranked.entries().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.combined_score > b.combined_score
                    || (a.combined_score == b.combined_score
                        && (a.chunk.query.priority, &a.chunk.chunk_id)
                            <= (b.chunk.query.priority, &b.chunk.chunk_id))
            );
        }
    }

    #[test]
    fn analyzer_and_planner_never_panic(text in "\\PC{1,300}") {
        if let Ok(request) = DesignRequest::new(text) {
            let reqs = PromptAnalyzer::new().analyze(&request);
            let queries = QueryPlanner::new().plan(
                request.text(),
                &reqs,
                reqs.detected_method.unwrap_or_default(),
            );
            prop_assert!(!queries.is_empty());
            for (i, q) in queries.iter().enumerate() {
                prop_assert_eq!(q.priority, i);
            }
        }
    }
}
