//! Orchestration of one harness run.
//!
//! The driver derives the capitalization flag array from the corpus, measures
//! its Shannon entropy, scores it through each of the three encoders, and
//! (optionally) estimates the size of an order-k context model of the corpus.
//! Encoders never interact: each gets the same flag array and its output is
//! only sized, never decoded.

use std::time::Instant;

use serde::Serialize;

use crate::config::HarnessConfig;
use crate::corpus;
use crate::error::OrthopressError;
use crate::kernels::arithmetic::ArithmeticEncoder;
use crate::kernels::delta::DeltaEncoder;
use crate::kernels::huffman::HuffmanEncoder;
use crate::model;
use crate::stats;
use crate::traits::EntropyEncoder;

//==================================================================================
// 1. Report Types
//==================================================================================

/// Compressed size achieved by one encoder.
#[derive(Serialize, Debug, Clone)]
pub struct EncoderScore {
    pub encoder: String,
    pub compressed_bytes: usize,
}

/// The full result of a harness run.
#[derive(Serialize, Debug, Clone)]
pub struct HarnessReport {
    pub corpus_chars: usize,
    pub flag_bytes: usize,
    pub flag_entropy_bits: f64,
    pub scores: Vec<EncoderScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_model_bytes: Option<usize>,
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Runs the full harness over `text`.
pub fn run(text: &str, config: &HarnessConfig) -> Result<HarnessReport, OrthopressError> {
    let chars: Vec<char> = text.chars().collect();

    let flags = corpus::violation_flags(&chars);
    let entropy = stats::shannon_entropy(&flags);
    log::info!(
        "capitalization flag array: {} bytes over {} characters, entropy {:.4} bits/byte",
        flags.len(),
        chars.len(),
        entropy
    );

    let encoders: Vec<Box<dyn EntropyEncoder>> = vec![
        Box::new(DeltaEncoder),
        Box::new(ArithmeticEncoder::new(config.window_width)?),
        Box::new(HuffmanEncoder),
    ];

    let mut scores = Vec::with_capacity(encoders.len());
    for encoder in &encoders {
        let start = Instant::now();
        let compressed = encoder.encode(&flags)?;
        log::info!(
            "  - Encoder: {:<12} | Size: {:>8} | Time: {:.2?}",
            encoder.name(),
            compressed.len(),
            start.elapsed()
        );
        scores.push(EncoderScore {
            encoder: encoder.name().to_string(),
            compressed_bytes: compressed.len(),
        });
    }

    let context_model_bytes = if config.report_context_model {
        let models = model::build_context_models(&chars, config.context_order);
        let size = model::serialized_size(&models);
        log::info!(
            "context model (order {}): {} contexts, ~{} bytes",
            config.context_order,
            models.len(),
            size
        );
        Some(size)
    } else {
        None
    };

    Ok(HarnessReport {
        corpus_chars: chars.len(),
        flag_bytes: flags.len(),
        flag_entropy_bits: entropy,
        scores,
        context_model_bytes,
    })
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "it was Then. A small test Text, with I and a few Odd capitals.\n\
                          New line starts Here and goes oN.";

    #[test]
    fn test_run_produces_consistent_report() {
        let config = HarnessConfig::default();
        let report = run(SAMPLE, &config).unwrap();

        assert_eq!(report.corpus_chars, SAMPLE.chars().count());
        assert_eq!(report.flag_bytes, SAMPLE.chars().count().div_ceil(8));
        assert!(report.flag_entropy_bits >= 0.0);
        assert_eq!(report.scores.len(), 3);
        let names: Vec<&str> = report.scores.iter().map(|s| s.encoder.as_str()).collect();
        assert_eq!(names, ["delta", "arithmetic", "huffman"]);
        assert!(report.scores.iter().all(|s| s.compressed_bytes > 0));
        assert!(report.context_model_bytes.unwrap() > 0);
    }

    #[test]
    fn test_context_model_can_be_disabled() {
        let config = HarnessConfig {
            report_context_model: false,
            ..HarnessConfig::default()
        };
        let report = run(SAMPLE, &config).unwrap();
        assert!(report.context_model_bytes.is_none());
    }

    #[test]
    fn test_invalid_window_width_is_rejected() {
        let config = HarnessConfig {
            window_width: 1,
            ..HarnessConfig::default()
        };
        assert!(matches!(
            run(SAMPLE, &config),
            Err(OrthopressError::InvalidWindowWidth(1))
        ));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = run(SAMPLE, &HarnessConfig::default()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"flag_entropy_bits\""));
        assert!(json.contains("\"arithmetic\""));
    }
}
