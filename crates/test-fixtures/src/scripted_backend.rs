use std::collections::VecDeque;
use std::sync::Mutex;

use scadgen_core::errors::BackendError;
use scadgen_core::models::GenerationOptions;
use scadgen_core::traits::IGenerationBackend;

/// One scripted reaction to a `generate` call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Respond(String),
    TransportFailure,
    Timeout,
    Reject(u16),
    /// Body the backend could not decode.
    Garbage,
}

/// Generation backend that replays a fixed script and records every prompt.
///
/// Once the script runs out every call returns an empty response.
pub struct ScriptedBackend {
    steps: Mutex<VecDeque<ScriptStep>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_steps(responses.into_iter().map(|r| ScriptStep::Respond(r.into())))
    }

    pub fn from_steps<I: IntoIterator<Item = ScriptStep>>(steps: I) -> Self {
        Self {
            steps: Mutex::new(steps.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl IGenerationBackend for ScriptedBackend {
    fn generate(&self, prompt: &str, _options: &GenerationOptions) -> Result<String, BackendError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let step = self
            .steps
            .lock()
            .ok()
            .and_then(|mut s| s.pop_front())
            .unwrap_or(ScriptStep::Respond(String::new()));
        match step {
            ScriptStep::Respond(text) => Ok(text),
            ScriptStep::TransportFailure => Err(BackendError::Transport {
                backend: self.name().to_string(),
                reason: "scripted connection reset".to_string(),
            }),
            ScriptStep::Timeout => Err(BackendError::Timeout {
                backend: self.name().to_string(),
                after_ms: 1,
            }),
            ScriptStep::Reject(status) => Err(BackendError::Rejected {
                backend: self.name().to_string(),
                status,
                body: "scripted rejection".to_string(),
            }),
            ScriptStep::Garbage => Err(BackendError::InvalidResponse {
                backend: self.name().to_string(),
                reason: "expected value at line 1 column 1".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
