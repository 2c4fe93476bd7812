use std::str::FromStr;

use scadgen_core::errors::RequestError;
use scadgen_core::models::*;

#[test]
fn empty_prompt_rejected() {
    assert!(matches!(
        DesignRequest::new("   \n\t"),
        Err(RequestError::EmptyPrompt)
    ));
}

#[test]
fn request_trims_and_filters_libraries() {
    let request = DesignRequest::new("  a gear  ")
        .unwrap()
        .with_libraries(["BOSL2", " ", "MCAD", "BOSL2", "BOSL2/std.scad", "x>y"]);
    assert_eq!(request.text(), "a gear");
    assert_eq!(request.libraries().len(), 2);
    assert!(request.libraries().contains("MCAD"));
    assert!(request.method().is_none());
}

#[test]
fn overlong_prompt_rejected() {
    let request = DesignRequest::new("x".repeat(50)).unwrap();
    assert!(request.check_length(50).is_ok());
    assert!(matches!(
        request.check_length(49),
        Err(RequestError::PromptTooLong { length: 50, limit: 49 })
    ));
}

#[test]
fn manufacturing_method_parses_aliases() {
    assert_eq!(
        ManufacturingMethod::from_str("3D printing").unwrap(),
        ManufacturingMethod::Printing
    );
    assert_eq!(
        ManufacturingMethod::from_str("injection_molding").unwrap(),
        ManufacturingMethod::InjectionMolding
    );
    assert_eq!(
        ManufacturingMethod::from_str("CNC").unwrap(),
        ManufacturingMethod::Cnc
    );
    assert!(ManufacturingMethod::from_str("welding").is_err());
    for method in ManufacturingMethod::ALL {
        assert_eq!(ManufacturingMethod::from_str(method.as_str()).unwrap(), method);
    }
}

#[test]
fn requirement_unit_conversion() {
    assert_eq!(Requirement::number(2.0, "cm", 0.9).millimetres(), Some(20.0));
    assert_eq!(Requirement::number(1.0, "inch", 0.9).millimetres(), Some(25.4));
    assert_eq!(Requirement::number(15.0, "teeth", 0.9).millimetres(), None);
    assert_eq!(Requirement::text("gear", 0.9).millimetres(), None);
}

#[test]
fn requirement_display_includes_label() {
    let r = Requirement::number(5.0, "mm", 0.9).with_label("thickness");
    assert_eq!(r.to_string(), "thickness 5 mm");
}

#[test]
fn extracted_requirements_have_every_category() {
    let reqs = ExtractedRequirements::new();
    assert!(reqs.is_empty());
    for category in RequirementCategory::ALL {
        assert!(reqs.get(category).is_empty());
    }
}

#[test]
fn extracted_requirements_skip_duplicates() {
    let mut reqs = ExtractedRequirements::new();
    reqs.push(RequirementCategory::Dimension, Requirement::number(5.0, "mm", 0.9));
    reqs.push(RequirementCategory::Dimension, Requirement::number(5.0, "mm", 0.5));
    reqs.push(RequirementCategory::Dimension, Requirement::number(5.0, "cm", 0.9));
    assert_eq!(reqs.dimensions().len(), 2);
}

#[test]
fn chunk_id_strips_directory_and_extension() {
    let meta = ChunkMetadata {
        chunk_file: "chunks/BOSL2__gears_3.scad".into(),
        library: "BOSL2".into(),
        chunk_index: 3,
        source_path: "BOSL2/gears.scad".into(),
    };
    assert_eq!(meta.chunk_id(), "BOSL2__gears_3");
}

#[test]
fn retrieved_chunk_combined_score_applies_weight() {
    let query = RetrievalQuery::new("gear", QueryTag::Prompt, 0.6, 1);
    let hit = StoreHit {
        chunk_id: "c1".into(),
        text: "module gear() {}".into(),
        library: "MCAD".into(),
        score: 0.5,
    };
    let chunk = RetrievedChunk::from_hit(hit, &query);
    assert!((chunk.combined_score() - 0.3).abs() < 1e-9);
}

#[test]
fn attempt_acceptance_follows_issues() {
    let clean = ValidationReport {
        code: "cube(1);".into(),
        issues: vec![],
    };
    let attempt = GenerationAttempt::new(1, "p".into(), "cube(1);".into(), clean);
    assert!(attempt.is_accepted());
    assert_eq!(attempt.prompt_hash.len(), 64);

    let broken = ValidationReport {
        code: String::new(),
        issues: vec![ValidationIssue::new(IssueKind::EmptyOutput, "no code")],
    };
    let attempt = GenerationAttempt::new(2, "p".into(), String::new(), broken);
    assert!(!attempt.is_accepted());
}

#[test]
fn issue_display_includes_location() {
    let issue = ValidationIssue::new(IssueKind::UnbalancedDelimiter, "unclosed `(`").at_line(3);
    assert_eq!(
        issue.to_string(),
        "[unbalanced-delimiter] line 3: unclosed `(`"
    );
}
