use proptest::prelude::*;
use scadgen_core::models::{DesignRequest, ManufacturingMethod, RankedContext};
use scadgen_generation::{fallback_template, PromptComposer};
use scadgen_retrieval::PromptAnalyzer;
use scadgen_validation::Validator;

fn arb_method() -> impl Strategy<Value = ManufacturingMethod> {
    prop::sample::select(ManufacturingMethod::ALL.to_vec())
}

fn arb_library() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "BOSL2",
            "BOSL",
            "MCAD",
            "threads-scad",
            "NopSCADlib",
            "YAPP_Box",
        ])
        .prop_map(String::from),
        "[A-Za-z][A-Za-z0-9_-]{0,11}",
    ]
}

proptest! {
    #[test]
    fn fallback_always_validates(
        text in "\\PC{1,200}",
        libraries in prop::collection::vec(arb_library(), 0..4),
    ) {
        if let Ok(request) = DesignRequest::new(text) {
            let request = request.with_libraries(libraries);
            let reqs = PromptAnalyzer::new().analyze(&request);
            let code = fallback_template(request.text(), &reqs, request.libraries());
            let issues = Validator::new().check_code(&code, request.libraries());
            prop_assert!(issues.is_empty(), "issues {:?} in\n{}", issues, code);
        }
    }

    #[test]
    fn composition_is_deterministic(text in "[a-zA-Z0-9 .,]{1,120}", method in arb_method()) {
        if let Ok(request) = DesignRequest::new(text) {
            let reqs = PromptAnalyzer::new().analyze(&request);
            let composer = PromptComposer::new();
            let context = RankedContext::default();
            let a = composer.compose(&request, &reqs, method, &context);
            let b = composer.compose(&request, &reqs, method, &context);
            prop_assert_eq!(&a, &b);
            prop_assert!(a.contains(request.text()));
        }
    }
}
