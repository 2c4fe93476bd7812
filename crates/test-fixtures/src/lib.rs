//! Test fixture loader and test doubles for the scadgen workspace.
//!
//! Provides golden JSON loading, a scripted generation backend, and a
//! deterministic in-memory retrieval store.

mod fixture_store;
mod scripted_backend;

pub use fixture_store::{FixtureEntry, FixtureStore};
pub use scripted_backend::{ScriptStep, ScriptedBackend};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The gear store used across retrieval and pipeline tests.
pub fn gear_store() -> FixtureStore {
    load_fixture("retrieval/gear_store.json")
}

/// Scripted responses file: `{ "responses": [..] }`.
pub fn scripted_responses(relative_path: &str) -> ScriptedBackend {
    #[derive(serde::Deserialize)]
    struct Responses {
        responses: Vec<String>,
    }
    let loaded: Responses = load_fixture(relative_path);
    ScriptedBackend::new(loaded.responses)
}
