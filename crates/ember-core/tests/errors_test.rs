use ember_core::errors::*;

#[test]
fn duplicate_key_carries_key() {
    let err = QueueError::DuplicateKey { key: 42 };
    assert!(err.to_string().contains("42"));
}

#[test]
fn empty_queue_names_operation() {
    let err = QueueError::Empty { operation: "pop" };
    assert_eq!(err.to_string(), "cannot pop an empty queue");
}

#[test]
fn validation_failure_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "decay.half_life_ms".into(),
        message: "must be greater than 0".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("decay.half_life_ms"));
    assert!(msg.contains("must be greater than 0"));
}

// --- From impls ---

#[test]
fn queue_error_converts_to_ember_error() {
    let ember_err: EmberError = QueueError::KeyNotFound { key: 7 }.into();
    assert!(matches!(ember_err, EmberError::Queue(_)));
    assert!(ember_err.to_string().contains("7"));
}

#[test]
fn config_error_converts_to_ember_error() {
    let ember_err: EmberError = ConfigError::FileNotFound {
        path: "/missing/ember.toml".into(),
    }
    .into();
    assert!(matches!(ember_err, EmberError::Config(_)));
}

// --- Error codes ---

#[test]
fn queue_errors_map_to_distinct_codes() {
    let codes = [
        QueueError::DuplicateKey { key: 1 }.error_code(),
        QueueError::Empty { operation: "pop" }.error_code(),
        QueueError::KeyNotFound { key: 1 }.error_code(),
        QueueError::CorruptIndex { details: "x".into() }.error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn ember_error_delegates_code_to_source() {
    let err: EmberError = QueueError::Empty { operation: "pop" }.into();
    assert_eq!(err.error_code(), error_code::QUEUE_EMPTY);
    assert_eq!(
        err.coded_string(),
        "[QUEUE_EMPTY] Queue error: cannot pop an empty queue"
    );
}
