//! The `orthopress` binary: reads a text corpus, runs the harness, and prints
//! either a colored summary or the raw JSON report.
//!
//! Usage: `orthopress <corpus.txt> [--config <config.json>] [--json]`
//!
//! Set `RUST_LOG=info` to see the per-encoder scoring lines.

use std::fs;
use std::process::ExitCode;

use colored::Colorize;

use orthopress::config::HarnessConfig;
use orthopress::error::OrthopressError;
use orthopress::harness;

struct Args {
    corpus_path: String,
    config_path: Option<String>,
    json: bool,
}

fn parse_args() -> Result<Args, OrthopressError> {
    let mut corpus_path = None;
    let mut config_path = None;
    let mut json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--json" {
            json = true;
        } else if arg == "--config" {
            config_path = Some(args.next().ok_or_else(|| {
                OrthopressError::Usage("--config requires a file path".to_string())
            })?);
        } else if corpus_path.is_none() {
            corpus_path = Some(arg);
        } else {
            return Err(OrthopressError::Usage(format!(
                "unexpected argument '{}'",
                arg
            )));
        }
    }

    Ok(Args {
        corpus_path: corpus_path.ok_or_else(|| {
            OrthopressError::Usage(
                "usage: orthopress <corpus.txt> [--config <config.json>] [--json]".to_string(),
            )
        })?,
        config_path,
        json,
    })
}

fn run() -> Result<(), OrthopressError> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => HarnessConfig::default(),
    };

    let text = fs::read_to_string(&args.corpus_path)?;
    let report = harness::run(&text, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} characters, {} flag bytes",
        "corpus:".bold(),
        report.corpus_chars,
        report.flag_bytes
    );
    println!(
        "{} {:.4} bits/byte",
        "flag entropy:".bold(),
        report.flag_entropy_bits
    );
    for score in &report.scores {
        println!(
            "  {:<12} {:>8} bytes",
            score.encoder.cyan(),
            score.compressed_bytes
        );
    }
    if let Some(bytes) = report.context_model_bytes {
        println!("{} ~{} bytes", "context model:".bold(), bytes);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
