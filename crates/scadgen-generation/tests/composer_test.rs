use scadgen_core::models::{
    DesignRequest, ExtractedRequirements, GenerationAttempt, IssueKind, ManufacturingMethod,
    QueryTag, RankedContext, RetrievalQuery, RetrievedChunk, ValidationIssue, ValidationReport,
};
use scadgen_generation::PromptComposer;
use scadgen_retrieval::{ContextRanker, PromptAnalyzer};

fn context() -> RankedContext {
    let chunk = |id: &str, library: &str, code: &str, similarity: f64| RetrievedChunk {
        chunk_id: id.to_string(),
        library: library.to_string(),
        code: code.to_string(),
        similarity,
        query: RetrievalQuery::new("gear", QueryTag::Feature, 1.0, 0),
    };
    ContextRanker::new(10_000).rank(vec![
        chunk("MCAD__involute_gears_3", "MCAD", "module gear() {}", 0.8),
        chunk("BOSL2__gears_12", "BOSL2", "module spur_gear() {}", 0.9),
    ])
}

fn compose(text: &str, method: ManufacturingMethod) -> String {
    let request = DesignRequest::new(text).unwrap();
    let reqs = PromptAnalyzer::new().analyze(&request);
    PromptComposer::new().compose(&request, &reqs, method, &context())
}

#[test]
fn sections_appear_in_fixed_order() {
    let prompt = compose("A parametric gear with 15 teeth", ManufacturingMethod::None);
    let order = [
        "# DESIGN TASK",
        "# MANUFACTURING CONSIDERATIONS",
        "# IMPLEMENTATION REQUIREMENTS",
        "# CODE REFERENCES",
        "\n# IMPLEMENTATION\n",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| prompt.find(marker).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn identical_inputs_give_identical_prompts() {
    let a = compose("A snap fit enclosure in PETG", ManufacturingMethod::Printing);
    let b = compose("A snap fit enclosure in PETG", ManufacturingMethod::Printing);
    assert_eq!(a, b);
}

#[test]
fn checklist_follows_manufacturing_method() {
    assert!(compose("a box", ManufacturingMethod::Printing).contains("45 degrees"));
    assert!(compose("a box", ManufacturingMethod::Cnc).contains("cutting tool radius"));
    assert!(compose("a box", ManufacturingMethod::InjectionMolding).contains("draft angle"));
    let general = compose("a box", ManufacturingMethod::None);
    assert!(general.contains("(general purpose (no specific process))"));
    assert!(!general.contains("draft angle"));
}

#[test]
fn context_chunks_are_labelled_in_rank_order() {
    let prompt = compose("a gear", ManufacturingMethod::None);
    let first = prompt.find("## [1] BOSL2 (BOSL2__gears_12)").unwrap();
    let second = prompt.find("## [2] MCAD (MCAD__involute_gears_3)").unwrap();
    assert!(first < second);
    assert!(prompt.contains("```openscad\nmodule spur_gear() {}\n```"));
}

#[test]
fn empty_context_is_stated() {
    let request = DesignRequest::new("a plain cube").unwrap();
    let prompt = PromptComposer::new().compose(
        &request,
        &ExtractedRequirements::new(),
        ManufacturingMethod::None,
        &RankedContext::default(),
    );
    assert!(prompt.contains("No reference code was retrieved"));
    assert!(prompt.contains("none detected"));
}

#[test]
fn requirements_and_libraries_are_listed() {
    let request = DesignRequest::new("A cylinder with a height of 4 cm")
        .unwrap()
        .with_libraries(["BOSL2", "MCAD"]);
    let reqs = PromptAnalyzer::new().analyze(&request);
    let prompt =
        PromptComposer::new().compose(&request, &reqs, ManufacturingMethod::None, &context());
    assert!(prompt.contains("- dimension: height 4 cm"));
    assert!(prompt.contains("Required libraries (import each one): BOSL2, MCAD"));
}

#[test]
fn correction_lists_issues_and_echoes_code() {
    let report = ValidationReport {
        code: "difference() { cube([1,1,1];".to_string(),
        issues: vec![
            ValidationIssue::new(IssueKind::UnbalancedDelimiter, "`(` opened here is never closed")
                .at_line(1),
            ValidationIssue::new(IssueKind::SyntaxError, "no statement terminator"),
        ],
    };
    let failed = GenerationAttempt::new(1, "base".to_string(), "raw".to_string(), report);
    let prompt = PromptComposer::new().compose_correction("BASE PROMPT", &failed);

    assert!(prompt.starts_with("BASE PROMPT\n"));
    assert!(prompt.contains("Attempt 1 failed validation with 2 issue(s):"));
    assert!(prompt.contains("- [unbalanced-delimiter] line 1: `(` opened here is never closed"));
    assert!(prompt.contains("- [syntax-error] no statement terminator"));
    assert!(prompt.contains("```openscad\ndifference() { cube([1,1,1];\n```"));
    assert!(prompt.trim_end().ends_with("already correct."));
}

#[test]
fn long_previous_code_is_truncated() {
    let code = "cube(1);\n".repeat(1_000);
    let report = ValidationReport {
        code,
        issues: vec![ValidationIssue::new(IssueKind::SyntaxError, "x")],
    };
    let failed = GenerationAttempt::new(2, String::new(), String::new(), report);
    let prompt = PromptComposer::new().compose_correction("p", &failed);
    assert!(prompt.contains("// ... truncated"));
    assert!(prompt.len() < 7_000);
}
