use std::collections::BTreeSet;

use scadgen_core::models::IssueKind;
use scadgen_core::traits::ICodeValidator;
use scadgen_validation::Validator;
use serde::Deserialize;

#[derive(Deserialize)]
struct Cases {
    cases: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    libraries: Vec<String>,
    raw: String,
    expected: Vec<IssueKind>,
}

fn no_libraries() -> BTreeSet<String> {
    BTreeSet::new()
}

#[test]
fn golden_validation_cases() {
    let cases: Cases = test_fixtures::load_fixture("validation/cases.json");
    let validator = Validator::new();
    for case in cases.cases {
        let libraries: BTreeSet<String> = case.libraries.into_iter().collect();
        let report = validator.validate(&case.raw, &libraries);
        let found: BTreeSet<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
        let expected: BTreeSet<IssueKind> = case.expected.into_iter().collect();
        assert_eq!(found, expected, "case {}: {:?}", case.name, report.issues);
    }
}

#[test]
fn unbalanced_delimiter_in_difference() {
    let report = Validator::new().validate("difference() { cube([1,1,1];", &no_libraries());
    assert!(!report.is_accepted());
    assert!(report.has(IssueKind::UnbalancedDelimiter));
}

#[test]
fn use_before_declaration_names_variable() {
    let raw = "module base() {\n    cube([10, 10, height]);\n}\nheight = 10;\nbase();";
    let report = Validator::new().validate(raw, &no_libraries());
    let issue = report
        .issues
        .iter()
        .find(|i| i.kind == IssueKind::UndeclaredVariableUse)
        .unwrap();
    assert!(issue.message.contains("`height` is used on line 2"));
    assert_eq!(
        issue.location,
        Some(scadgen_core::models::IssueLocation::Module("base".to_string()))
    );
}

#[test]
fn extracted_code_is_returned_without_narration() {
    let raw = "Here is your cube:\n```openscad\nsize = 10;\ncube(size);\n```\nHave fun!";
    let report = Validator::new().validate(raw, &no_libraries());
    assert_eq!(report.code, "size = 10;\ncube(size);");
    assert!(report.is_accepted());
}

#[test]
fn empty_response_is_empty_output() {
    for raw in ["", "   \n  ", "```openscad\n```", "// only a comment"] {
        let report = Validator::new().validate(raw, &no_libraries());
        assert_eq!(report.issues.len(), 1, "{raw:?}");
        assert_eq!(report.issues[0].kind, IssueKind::EmptyOutput);
    }
}

#[test]
fn every_problem_is_reported_together() {
    let raw = "translate(1, 2, 3) cube([w 2 3]);\nw = 1;\nmetric_thread(8, 1, 10;";
    let report = Validator::new().validate(raw, &no_libraries());
    for kind in [
        IssueKind::SyntaxError,
        IssueKind::UnbalancedDelimiter,
        IssueKind::UndeclaredVariableUse,
        IssueKind::MissingLibraryImport,
    ] {
        assert!(report.has(kind), "missing {kind}: {:?}", report.issues);
    }
}

#[test]
fn gear_repair_fixture_second_response_is_clean() {
    #[derive(Deserialize)]
    struct Responses {
        responses: Vec<String>,
    }
    let fixture: Responses = test_fixtures::load_fixture("responses/gear_repair.json");
    let validator = Validator::new();
    assert!(!validator.validate(&fixture.responses[0], &no_libraries()).is_accepted());
    let second = validator.validate(&fixture.responses[1], &no_libraries());
    assert!(second.is_accepted(), "{:?}", second.issues);
    assert!(second.code.starts_with("// Parametric spur gear blank"));
}
