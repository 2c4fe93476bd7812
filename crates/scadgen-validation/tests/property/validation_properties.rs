use std::collections::BTreeSet;

use proptest::prelude::*;
use scadgen_core::traits::ICodeValidator;
use scadgen_validation::{ComplexityAnalyzer, Validator};

proptest! {
    #[test]
    fn complexity_is_idempotent_and_total(code in "\\PC{0,400}") {
        let analyzer = ComplexityAnalyzer::default();
        let first = analyzer.analyze(&code);
        let second = analyzer.analyze(&code);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.score >= 0.0);
    }

    #[test]
    fn validator_never_panics(raw in "\\PC{0,400}") {
        let report = Validator::new().validate(&raw, &BTreeSet::new());
        if report.code.trim().is_empty() {
            prop_assert!(!report.is_accepted());
        }
    }

    #[test]
    fn balanced_generated_code_has_no_delimiter_issues(depth in 0usize..6, n in 1u32..50) {
        let code = format!(
            "{}cube([{n}, {n}, {n}]);{}",
            "union() { ".repeat(depth),
            " }".repeat(depth)
        );
        let report = Validator::new().validate(&code, &BTreeSet::new());
        prop_assert!(report.is_accepted(), "{:?}", report.issues);
    }
}
