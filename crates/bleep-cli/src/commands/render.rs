//! Render command implementation
//!
//! Renders one sound to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, RenderOutput};
use super::sound::{finish_json, render_source, Rendered};
use crate::input::SoundOptions;

/// Run the render command
///
/// # Arguments
/// * `options` - Sound selection
/// * `output` - Path of the WAV file to write
/// * `seed` - Noise seed (default: derived from the parameters)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    options: &SoundOptions,
    output: &str,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(options, output, seed)
    } else {
        run_human(options, output, seed)
    }
}

fn run_human(options: &SoundOptions, output: &str, seed: Option<u32>) -> Result<ExitCode> {
    let source = options.source()?;
    let rendered = render_source(&source, seed)?;

    println!("{} {}", "Rendering:".cyan().bold(), rendered.loaded.label);
    rendered.print_details();

    rendered
        .asset
        .write_to(output)
        .with_context(|| format!("Failed to write WAV file: {}", output))?;

    println!("  {} {}", "SUCCESS".green().bold(), output);
    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &SoundOptions, output: &str, seed: Option<u32>) -> Result<ExitCode> {
    let failure = |error: JsonError| RenderOutput {
        success: false,
        output: None,
        sound: None,
        errors: vec![error],
    };

    let rendered: Rendered = match options.source().and_then(|s| render_source(&s, seed)) {
        Ok(rendered) => rendered,
        Err(e) => {
            let error = JsonError::from_anyhow(&e, error_codes::INVALID_ARGS);
            return finish_json(&failure(error), false);
        }
    };

    if let Err(e) = rendered.asset.write_to(output) {
        let error = JsonError::new(error_codes::FILE_WRITE, e.to_string());
        return finish_json(&failure(error), false);
    }

    let result = RenderOutput {
        success: true,
        output: Some(output.to_string()),
        sound: Some(rendered.summary()),
        errors: Vec::new(),
    };
    finish_json(&result, true)
}
