//! Blocking HTTP plumbing shared by the backends.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use scadgen_core::errors::BackendError;
use scadgen_core::models::BackendKind;
use serde::de::DeserializeOwned;

/// Error bodies echoed into errors are cut to this many characters.
const ERROR_BODY_CHARS: usize = 500;

pub(crate) fn build_client(backend: &str) -> Result<Client, BackendError> {
    Client::builder()
        .gzip(true)
        .build()
        .map_err(|e| BackendError::Transport {
            backend: backend.to_string(),
            reason: format!("client construction failed: {e}"),
        })
}

/// Key from a variable the backend cannot work without.
pub(crate) fn required_key(
    backend: BackendKind,
    variable: Option<&str>,
) -> Result<String, BackendError> {
    let variable = variable.unwrap_or_default();
    std::env::var(variable)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| BackendError::MissingApiKey {
            backend: backend.to_string(),
            variable: variable.to_string(),
        })
}

pub(crate) fn optional_key(variable: Option<&str>) -> Option<String> {
    variable
        .and_then(|var| std::env::var(var).ok())
        .filter(|key| !key.trim().is_empty())
}

/// Send `request` and decode a JSON body.
///
/// 5xx and 429 map to `Transport` so the caller retries them; any other
/// non-success status maps to `Rejected`.
pub(crate) fn send_json<T: DeserializeOwned>(
    backend: &str,
    request: RequestBuilder,
    timeout: Duration,
) -> Result<T, BackendError> {
    let response = request.timeout(timeout).send().map_err(|e| {
        if e.is_timeout() {
            BackendError::Timeout {
                backend: backend.to_string(),
                after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            BackendError::Transport {
                backend: backend.to_string(),
                reason: e.to_string(),
            }
        }
    })?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .map_err(|e| BackendError::InvalidResponse {
                backend: backend.to_string(),
                reason: e.to_string(),
            });
    }

    let body: String = response
        .text()
        .unwrap_or_default()
        .chars()
        .take(ERROR_BODY_CHARS)
        .collect();
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        Err(BackendError::Transport {
            backend: backend.to_string(),
            reason: format!("HTTP {status}: {body}"),
        })
    } else {
        Err(BackendError::Rejected {
            backend: backend.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}
