//! Shared rendering and reporting helpers for commands.

use std::process::ExitCode;

use anyhow::Result;
use bleep_spec::hash::derive_params_seed;
use bleep_synth::{build_params, RenderedAsset};
use colored::Colorize;
use serde::Serialize;

use super::json_output::SoundSummary;
use crate::input::{LoadedSound, SoundSource};

/// A rendered sound with the inputs that produced it.
pub(crate) struct Rendered {
    pub loaded: LoadedSound,
    pub seed: u32,
    pub asset: RenderedAsset,
}

impl Rendered {
    /// JSON summary of the render.
    pub fn summary(&self) -> SoundSummary {
        SoundSummary {
            source: self.loaded.label.clone(),
            wave_type: self.loaded.params.wave_type.to_string(),
            seed: self.seed,
            sample_count: self.asset.sample_count,
            samples_written: self.asset.samples_written,
            finished_early: self.asset.finished_early(),
            duration_seconds: self.asset.duration_seconds(),
            pcm_hash: self.asset.pcm_hash.clone(),
        }
    }

    /// Prints the render details in human-readable form.
    pub fn print_details(&self) {
        println!(
            "  {}: {}",
            "Wave".dimmed(),
            self.loaded.params.wave_type.as_str()
        );
        println!("  {}: {}", "Seed".dimmed(), self.seed);
        println!(
            "  {}: {} / {} ({:.3}s)",
            "Samples".dimmed(),
            self.asset.samples_written,
            self.asset.sample_count,
            self.asset.duration_seconds()
        );
        if self.asset.finished_early() {
            println!("  {} sound finished early", "!".yellow());
        }
        println!("  {}: {}", "PCM hash".dimmed(), &self.asset.pcm_hash[..16]);
    }
}

/// Loads `source` and renders it, deriving the seed from the parameters when
/// none is given.
pub(crate) fn render_source(source: &SoundSource, seed: Option<u32>) -> Result<Rendered> {
    let loaded = source.load()?;
    let seed = seed.unwrap_or_else(|| derive_params_seed(&loaded.params));
    let asset = build_params(loaded.params.clone(), seed);
    Ok(Rendered {
        loaded,
        seed,
        asset,
    })
}

/// Prints a JSON document to stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Prints a JSON document and maps `success` to an exit code.
pub(crate) fn finish_json<T: Serialize>(value: &T, success: bool) -> Result<ExitCode> {
    print_json(value)?;
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
