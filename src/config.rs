//! The single source of truth for harness configuration.
//!
//! `HarnessConfig` is created once at the application boundary (defaults, or a
//! user's JSON file) and passed down by reference; nothing below the binary
//! re-reads configuration from the environment.

use serde::{Deserialize, Serialize};

/// Configuration for one harness run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Interval precision of the arithmetic coder, in bits. Must be between
    /// 2 and 53; validated when the encoder is constructed.
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Maximum context length (k) for the n-gram context model.
    #[serde(default = "default_context_order")]
    pub context_order: usize,

    /// If true, build the context model and include its estimated serialized
    /// size in the report. This is the slowest part of a run on large corpora.
    #[serde(default = "default_true")]
    pub report_context_model: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            context_order: default_context_order(),
            report_context_model: true,
        }
    }
}

/// Helper for `serde` to provide the default arithmetic coder width.
fn default_window_width() -> u32 {
    12
}

/// Helper for `serde` to provide the default context model order.
fn default_context_order() -> usize {
    3
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_missing_fields() {
        let config: HarnessConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.window_width, 12);
        assert_eq!(config.context_order, 3);
        assert!(config.report_context_model);
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config: HarnessConfig =
            serde_json::from_str(r#"{"window_width": 16, "report_context_model": false}"#).unwrap();
        assert_eq!(config.window_width, 16);
        assert_eq!(config.context_order, 3);
        assert!(!config.report_context_model);
    }
}
