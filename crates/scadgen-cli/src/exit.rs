//! Error category to process exit code.

use scadgen_core::errors::{ConfigError, RequestError, ScadgenError};

pub const BACKEND_FAILURE: u8 = 1;
pub const BAD_REQUEST: u8 = 2;

/// 2 for malformed requests and configuration, 1 for everything else.
pub fn code_for(err: &anyhow::Error) -> u8 {
    if let Some(scadgen) = err.downcast_ref::<ScadgenError>() {
        return match scadgen {
            ScadgenError::Request(_) | ScadgenError::Config(_) => BAD_REQUEST,
            _ => BACKEND_FAILURE,
        };
    }
    if err.downcast_ref::<RequestError>().is_some() || err.downcast_ref::<ConfigError>().is_some()
    {
        return BAD_REQUEST;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return BAD_REQUEST;
    }
    BACKEND_FAILURE
}

#[cfg(test)]
mod tests {
    use scadgen_core::errors::BackendError;

    use super::*;

    #[test]
    fn categories_map_to_codes() {
        let request = anyhow::Error::new(ScadgenError::from(RequestError::EmptyPrompt));
        assert_eq!(code_for(&request), BAD_REQUEST);

        let backend = anyhow::Error::new(ScadgenError::from(BackendError::Timeout {
            backend: "openai".into(),
            after_ms: 10,
        }));
        assert_eq!(code_for(&backend), BACKEND_FAILURE);

        let config = anyhow::Error::new(ConfigError::Invalid {
            reason: "bad".into(),
        })
        .context("loading config");
        assert_eq!(code_for(&config), BAD_REQUEST);
    }
}
