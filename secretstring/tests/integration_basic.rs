//! End-to-end tests for the public construction and rendering API.
//!
//! These tests exercise:
//! - masking through `Display`, `ToString` and `Debug`,
//! - masking when the value is nested in containers and derived `Debug`, and
//! - `reveal` as the only way back to the secret.

use std::collections::{BTreeMap, HashMap};

use secretstring::{MaskOptions, SecretString, DEFAULT_MASK};

const SAMPLES: &[&str] = &[
    "",
    "hello world",
    "this_is_a_secret",
    "********",
    "???",
    "  padded  ",
    "line\nbreak",
    "p@$$w0rd!",
];

#[test]
fn test_display_is_always_default_mask() {
    for sample in SAMPLES {
        let value = SecretString::new(*sample);
        assert_eq!(value.to_string(), DEFAULT_MASK, "sample {sample:?}");
        assert_eq!(format!("{value}"), DEFAULT_MASK);
    }
}

#[test]
fn test_reveal_round_trips_exactly() {
    for sample in SAMPLES {
        assert_eq!(SecretString::new(*sample).reveal(), *sample);
    }
}

#[test]
fn test_custom_mask_is_rendered() {
    for mask in ["???", "[hidden]", "x", "🔒"] {
        let options = MaskOptions::new().with_mask(mask);
        let value = SecretString::with_options("hello world", options);
        assert_eq!(value.to_string(), mask);
        assert_eq!(value.reveal(), "hello world");
    }
}

#[test]
fn test_empty_mask_normalizes_to_default() {
    let value = SecretString::with_options("hello world", MaskOptions::new().with_mask(""));
    assert_eq!(value.mask(), DEFAULT_MASK);
    assert_eq!(value.to_string(), DEFAULT_MASK);
}

#[test]
fn test_derived_debug_on_containing_struct() {
    #[derive(Debug)]
    struct Login {
        username: String,
        password: SecretString,
    }

    let login = Login {
        username: "alice".into(),
        password: SecretString::new("hunter2"),
    };

    let compact = format!("{login:?}");
    assert_eq!(
        compact,
        "Login { username: \"alice\", password: \"********\" }"
    );

    let pretty = format!("{login:#?}");
    assert!(pretty.contains("password: \"********\""));
    assert!(!pretty.contains("hunter2"));
}

#[test]
fn test_std_containers_never_print_secret() {
    let list = vec![SecretString::new("first"), SecretString::new("second")];
    assert_eq!(format!("{list:?}"), "[\"********\", \"********\"]");

    let maybe = Some(SecretString::new("maybe"));
    assert_eq!(format!("{maybe:?}"), "Some(\"********\")");

    let mut map = BTreeMap::new();
    map.insert("db", SecretString::new("postgres://u:p@h/db"));
    assert_eq!(format!("{map:?}"), "{\"db\": \"********\"}");

    let mut hashed = HashMap::new();
    hashed.insert("api", SecretString::new("sk_live_abcdef"));
    let rendered = format!("{hashed:?}");
    assert!(!rendered.contains("sk_live_abcdef"));
}

#[test]
fn test_mask_flag_does_not_affect_display() {
    let value = SecretString::with_options(
        "hello world",
        MaskOptions::new()
            .with_mask("???")
            .with_reveal_on_serialize(true),
    );
    assert_eq!(value.to_string(), "???");
    assert_eq!(format!("{value:?}"), "\"???\"");
}

#[test]
fn test_error_messages_stay_masked() {
    let token = SecretString::new("tok_live_123");
    let message = format!("authentication failed for token {token}");
    assert_eq!(message, "authentication failed for token ********");
}

#[test]
fn test_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SecretString>();
    assert_send_sync::<MaskOptions>();
}
