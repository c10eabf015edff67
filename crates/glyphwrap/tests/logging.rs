//! Tests for logging functionality
//!
//! Only one global subscriber can be installed per process, so repeated
//! initialization may fail; these tests check that nothing panics.

use glyphwrap::core::logging::{init_logging, LogFormat, LoggingConfig};
use std::str::FromStr;

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    for name in variants {
        assert!(LogFormat::from_str(name).is_ok());
    }
    assert_eq!(variants.len(), 3);
}

#[test]
fn test_init_logging_with_levels() {
    for level in ["trace", "debug", "info", "warn", "error", "off"] {
        let _ = init_logging(Some(level), Some("compact"));
    }
}

#[test]
fn test_init_logging_with_formats() {
    for format in LogFormat::variants() {
        let _ = init_logging(Some("info"), Some(*format));
    }
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_logging_with_directives() {
    let _ = init_logging(Some("glyphwrap::core::text=trace"), Some("json"));
}

#[test]
fn test_config_keeps_directives() {
    let config = LoggingConfig::resolve(Some("warn,glyphwrap=debug"), Some("compact")).unwrap();
    assert_eq!(config.level, "warn,glyphwrap=debug");
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
fn test_wrapping_with_logging_enabled() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let lines = glyphwrap::wrap_text_to_lines("logging does not change output", 12).unwrap();
    assert_eq!(lines, vec!["logging", "does not", "change", "output"]);
}
