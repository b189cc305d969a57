//! Inspect command implementation
//!
//! Parses a WAV file's header and reports its format and PCM hash.

use anyhow::{Context, Result};
use bleep_synth::wav::{compute_pcm_hash, WavHeader};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;

use super::json_output::{error_codes, HeaderInfo, InspectOutput, JsonError};
use super::sound::finish_json;

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to a WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let bytes = fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    let header = WavHeader::parse(&bytes)?;
    let info = header_info(&header);

    println!("  {}: {}", "Channels".dimmed(), info.channels);
    println!("  {}: {} Hz", "Sample rate".dimmed(), info.sample_rate);
    println!("  {}: {}", "Bits".dimmed(), info.bits_per_sample);
    println!(
        "  {}: {} ({:.3}s)",
        "Samples".dimmed(),
        info.sample_count,
        info.duration_seconds
    );
    match compute_pcm_hash(&bytes) {
        Some(hash) => println!("  {}: {}", "PCM hash".dimmed(), hash),
        None => println!("  {} data chunk is truncated", "!".yellow()),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str) -> Result<ExitCode> {
    let failure = |error: JsonError| InspectOutput {
        success: false,
        input: input.to_string(),
        header: None,
        pcm_hash: None,
        errors: vec![error],
    };

    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            let error = JsonError::new(error_codes::FILE_READ, e.to_string());
            return finish_json(&failure(error), false);
        }
    };

    let header = match WavHeader::parse(&bytes) {
        Ok(header) => header,
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_CONTAINER, e.to_string());
            return finish_json(&failure(error), false);
        }
    };

    let result = InspectOutput {
        success: true,
        input: input.to_string(),
        header: Some(header_info(&header)),
        pcm_hash: compute_pcm_hash(&bytes),
        errors: Vec::new(),
    };
    finish_json(&result, true)
}

fn header_info(header: &WavHeader) -> HeaderInfo {
    HeaderInfo {
        channels: header.channels,
        sample_rate: header.sample_rate,
        bits_per_sample: header.bits_per_sample,
        data_size: header.data_size,
        sample_count: header.sample_count(),
        duration_seconds: header.duration_seconds(),
    }
}
