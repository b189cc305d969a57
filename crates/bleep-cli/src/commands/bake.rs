//! Bake command implementation
//!
//! Renders every sound in a bank into a directory of WAV files.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use super::json_output::{error_codes, BakeOutput, BakedSound, JsonError};
use super::sound::finish_json;
use crate::input::load_bank_or_builtin;

/// Run the bake command
///
/// # Arguments
/// * `bank_path` - Sound bank file (default: built-in presets)
/// * `out_dir` - Output directory, created if missing
/// * `seed` - Base seed; each sound derives its own from it and its name
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    bank_path: Option<&str>,
    out_dir: &str,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        let result = match bake_to_dir(bank_path, out_dir, seed) {
            Ok(sounds) => BakeOutput {
                success: true,
                out_dir: out_dir.to_string(),
                sounds,
                errors: Vec::new(),
            },
            Err(e) => BakeOutput {
                success: false,
                out_dir: out_dir.to_string(),
                sounds: Vec::new(),
                errors: vec![JsonError::from_anyhow(&e, error_codes::FILE_WRITE)],
            },
        };
        let success = result.success;
        return finish_json(&result, success);
    }

    println!(
        "{} {}",
        "Baking:".cyan().bold(),
        bank_path.unwrap_or("built-in presets")
    );
    let sounds = bake_to_dir(bank_path, out_dir, seed)?;
    for sound in &sounds {
        println!(
            "  {} {} ({} samples)",
            "+".green(),
            sound.path,
            sound.samples_written
        );
    }
    println!(
        "  {} Baked {} {}",
        "SUCCESS".green().bold(),
        sounds.len(),
        if sounds.len() == 1 { "sound" } else { "sounds" }
    );
    Ok(ExitCode::SUCCESS)
}

fn bake_to_dir(bank_path: Option<&str>, out_dir: &str, seed: Option<u32>) -> Result<Vec<BakedSound>> {
    let bank = load_bank_or_builtin(bank_path)?;
    for name in bank.names() {
        check_file_stem(name)?;
    }

    let out_root = Path::new(out_dir);
    fs::create_dir_all(out_root)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    let mut sounds = Vec::with_capacity(bank.len());
    for (name, asset) in bleep_synth::bake(&bank, seed) {
        let path: PathBuf = out_root.join(format!("{}.wav", name));
        asset
            .write_to(&path)
            .with_context(|| format!("Failed to write WAV file: {}", path.display()))?;
        info!(sound = %name, path = %path.display(), "wrote baked sound");
        sounds.push(BakedSound {
            name,
            path: path.display().to_string(),
            samples_written: asset.samples_written,
            pcm_hash: asset.pcm_hash,
        });
    }
    Ok(sounds)
}

/// Rejects sound names that would escape the output directory.
fn check_file_stem(name: &str) -> Result<()> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        bail!("sound name '{}' cannot be used as a file name", name);
    }
    Ok(())
}
