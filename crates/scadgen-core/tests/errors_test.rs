use scadgen_core::errors::*;

#[test]
fn transport_and_timeout_are_retryable() {
    let transport = BackendError::Transport {
        backend: "openai".into(),
        reason: "connection reset".into(),
    };
    let timeout = BackendError::Timeout {
        backend: "openai".into(),
        after_ms: 120_000,
    };
    assert!(transport.is_retryable());
    assert!(timeout.is_retryable());
}

#[test]
fn rejections_are_not_retryable() {
    let rejected = BackendError::Rejected {
        backend: "anthropic".into(),
        status: 401,
        body: "invalid x-api-key".into(),
    };
    assert!(!rejected.is_retryable());
    assert!(!ScadgenError::from(rejected).is_retryable());
}

#[test]
fn subsystem_errors_convert_into_top_level() {
    let err: ScadgenError = RequestError::EmptyPrompt.into();
    assert!(matches!(err, ScadgenError::Request(_)));
    assert_eq!(err.to_string(), "malformed request: design prompt is empty");

    let err: ScadgenError = RetrievalError::StoreUnavailable {
        store: "chroma".into(),
        reason: "refused".into(),
    }
    .into();
    assert!(err.is_retryable());
}

#[test]
fn messages_carry_context() {
    let err = RequestError::PromptTooLong {
        length: 5000,
        limit: 4000,
    };
    assert!(err.to_string().contains("5000"));
    assert!(err.to_string().contains("4000"));
}
