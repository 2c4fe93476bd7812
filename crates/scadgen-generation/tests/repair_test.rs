use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use scadgen_core::config::GenerationConfig;
use scadgen_generation::{CodeGenerator, RepairState, Repairer, RetryPolicy};
use scadgen_validation::Validator;
use test_fixtures::{ScriptStep, ScriptedBackend};

fn generator(backend: Arc<ScriptedBackend>, retries: u32) -> CodeGenerator {
    CodeGenerator::new(
        backend,
        GenerationConfig::default().options(),
        RetryPolicy {
            max_retries: retries,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(2),
        },
    )
}

#[test]
fn transitions_follow_the_state_machine() {
    let backend = Arc::new(test_fixtures::scripted_responses("responses/gear_repair.json"));
    let generator = generator(backend, 0);
    let validator = Validator::new();
    let outcome = Repairer::new(&generator, &validator, 3)
        .run("make a gear", &BTreeSet::new())
        .unwrap();

    assert_eq!(outcome.state, RepairState::Accepted);
    assert_eq!(
        outcome.transitions,
        vec![
            RepairState::Validating,
            RepairState::NeedsRepair,
            RepairState::Generating,
            RepairState::Validating,
            RepairState::Accepted,
        ]
    );
    assert_eq!(outcome.accepted().map(|a| a.index), Some(2));
}

#[test]
fn exhaustion_keeps_every_attempt() {
    let backend = Arc::new(test_fixtures::scripted_responses("responses/always_broken.json"));
    let generator = generator(backend, 0);
    let validator = Validator::new();
    let outcome = Repairer::new(&generator, &validator, 2)
        .run("make a gear", &BTreeSet::new())
        .unwrap();
    assert_eq!(outcome.state, RepairState::Exhausted);
    assert_eq!(outcome.attempts.len(), 2);
    assert!(outcome.accepted().is_none());
    assert_eq!(outcome.transitions.last(), Some(&RepairState::Exhausted));
}

#[test]
fn zero_budget_is_clamped_to_one_attempt() {
    let backend = Arc::new(ScriptedBackend::new(vec!["cube(1);"]));
    let generator = generator(backend, 0);
    let validator = Validator::new();
    let repairer = Repairer::new(&generator, &validator, 0);
    assert_eq!(repairer.max_attempts(), 1);
    let outcome = repairer.run("a cube", &BTreeSet::new()).unwrap();
    assert_eq!(outcome.state, RepairState::Accepted);
}

#[test]
fn requested_library_must_be_imported() {
    let backend = Arc::new(ScriptedBackend::new(vec![
        "cuboid([10, 10, 10]);",
        "include <BOSL2/std.scad>\ncuboid([10, 10, 10]);",
    ]));
    let generator = generator(backend.clone(), 0);
    let validator = Validator::new();
    let libraries: BTreeSet<String> = ["BOSL2".to_string()].into_iter().collect();
    let outcome = Repairer::new(&generator, &validator, 3)
        .run("a rounded block", &libraries)
        .unwrap();
    assert_eq!(outcome.accepted().map(|a| a.index), Some(2));
    assert!(backend.prompts()[1].contains("[missing-library-import]"));
}

#[test]
fn generator_retries_then_succeeds() {
    let backend = Arc::new(ScriptedBackend::from_steps(vec![
        ScriptStep::Timeout,
        ScriptStep::Respond("sphere(r = 2);".to_string()),
    ]));
    let response = generator(backend.clone(), 2).generate("a ball").unwrap();
    assert_eq!(response.text, "sphere(r = 2);");
    assert_eq!(response.transport_failures, 1);
    assert_eq!(response.degradations.len(), 1);
    assert_eq!(backend.calls(), 2);
}

#[test]
fn generator_without_retries_fails_on_first_transport_error() {
    let backend = Arc::new(ScriptedBackend::from_steps(vec![ScriptStep::TransportFailure]));
    let err = generator(backend, 0).generate("a ball").unwrap_err();
    assert!(err.to_string().contains("all 1 transport attempts failed"));
}
