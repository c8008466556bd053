//! # Configuration Tests
//!
//! Defaults, JSON deserialization with partial input, and validation.

use legv8_core::common::error::SimError;
use legv8_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.general.max_steps, 1_000_000);
    assert_eq!(config.memory.size_words, 64);
}

#[test]
fn test_empty_json_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_fill_defaults() {
    let config = Config::from_json(r#"{ "general": { "start_pc": 8 } }"#).unwrap();
    assert_eq!(config.general.start_pc, 8);
    assert_eq!(config.general.max_steps, 1_000_000);
    assert_eq!(config.memory, MemoryConfig::default());
}

#[test]
fn test_malformed_json_is_config_error() {
    assert!(matches!(
        Config::from_json(r#"{ "memory": { "size_words": "lots" } }"#),
        Err(SimError::Config(_))
    ));
    assert!(matches!(Config::from_json("{"), Err(SimError::Config(_))));
}

#[test]
fn test_validate_rejects_unusable_values() {
    for json in [
        r#"{ "memory": { "size_words": 0 } }"#,
        r#"{ "general": { "max_steps": 0 } }"#,
        r#"{ "general": { "start_pc": 6 } }"#,
    ] {
        assert!(
            matches!(Config::from_json(json), Err(SimError::InvalidConfig(_))),
            "{json}"
        );
    }
}
