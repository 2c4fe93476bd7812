use scadgen_core::config::ComplexityConfig;
use scadgen_core::models::RenderBucket;
use scadgen_validation::ComplexityAnalyzer;

const TWO_MODULES: &str = r#"
module a() {
    difference() {
        cube(10);
        sphere(6);
    }
}
module b() {
    union() {
        cylinder(h = 2, r = 1);
    }
}
a();
b();
"#;

#[test]
fn two_modules_three_primitives_two_booleans_is_moderate() {
    let report = ComplexityAnalyzer::default().analyze(TWO_MODULES);
    assert_eq!(report.modules, 2);
    assert_eq!(report.primitives, 3);
    assert_eq!(report.boolean_ops, 2);
    assert_eq!(report.score, 8.0);
    assert_eq!(report.bucket, RenderBucket::Moderate);
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = ComplexityAnalyzer::default();
    assert_eq!(analyzer.analyze(TWO_MODULES), analyzer.analyze(TWO_MODULES));
}

#[test]
fn weights_come_from_config() {
    let config = ComplexityConfig {
        boolean_weight: 4.0,
        ..ComplexityConfig::default()
    };
    let report = ComplexityAnalyzer::new(config).analyze(TWO_MODULES);
    assert_eq!(report.score, 13.0);
}

#[test]
fn empty_and_malformed_input_degrade_to_zero() {
    let analyzer = ComplexityAnalyzer::default();
    for code in ["", "((((", "}}} ]]]", "\"unterminated"] {
        let report = analyzer.analyze(code);
        assert_eq!(report.score, 0.0, "{code:?}");
        assert_eq!(report.bucket, RenderBucket::Quick);
        assert!(report.suggestions.is_empty());
    }
}

#[test]
fn many_booleans_without_render_get_suggestion() {
    let code = "difference() { cube(1); }\n".repeat(6);
    let report = ComplexityAnalyzer::default().analyze(&code);
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.pattern == "boolean-heavy-without-render"));

    let with_render = format!("render(convexity = 4) {{ {code} }}");
    let report = ComplexityAnalyzer::default().analyze(&with_render);
    assert!(!report
        .suggestions
        .iter()
        .any(|s| s.pattern == "boolean-heavy-without-render"));
}

#[test]
fn heavy_model_gets_heavy_and_structure_suggestions() {
    let code = "cube(1); sphere(1); cylinder(h = 1, r = 1, $fn = 500);\n".repeat(8);
    let report = ComplexityAnalyzer::default().analyze(&code);
    assert_eq!(report.primitives, 24);
    assert_eq!(report.bucket, RenderBucket::Heavy);
    let patterns: Vec<&str> = report.suggestions.iter().map(|s| s.pattern.as_str()).collect();
    assert_eq!(patterns, vec!["high-$fn", "few-modules", "heavy-render"]);
}

#[test]
fn nested_difference_is_suggested() {
    let code = "difference() { cube(10); difference() { sphere(4); cube(2); } }";
    let report = ComplexityAnalyzer::default().analyze(code);
    assert_eq!(report.suggestions[0].pattern, "nested-difference");
}
