//! Resolving command-line sound selections into parameter sets.
//!
//! A sound comes from exactly one of: an inline settings string, a built-in
//! preset name, or a named entry in a JSON sound bank file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bleep_spec::{ParameterSet, SoundBank, SpecError};
use tracing::debug;

/// Where a sound's parameters come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// Comma-separated settings, e.g. `0,,0.1434,,0.1212`.
    Settings(String),
    /// Built-in preset name.
    Preset(String),
    /// Entry `sound` of the bank at `path`.
    Bank {
        /// Bank file path.
        path: PathBuf,
        /// Sound name inside the bank.
        sound: String,
    },
}

/// Raw sound selection options as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundOptions {
    /// Inline settings string.
    pub settings: Option<String>,
    /// Built-in preset name.
    pub preset: Option<String>,
    /// Sound bank file path.
    pub bank: Option<String>,
    /// Sound name inside the bank.
    pub sound: Option<String>,
}

impl SoundOptions {
    /// Validates the combination and returns the selected source.
    pub fn source(&self) -> Result<SoundSource> {
        SoundSource::from_options(
            self.settings.as_deref(),
            self.preset.as_deref(),
            self.bank.as_deref(),
            self.sound.as_deref(),
        )
    }
}

/// A resolved sound ready to render.
#[derive(Debug, Clone)]
pub struct LoadedSound {
    /// Short description of the source, for reports.
    pub label: String,
    /// Normalized parameters.
    pub params: ParameterSet,
}

impl SoundSource {
    /// Builds a source from the mutually exclusive CLI options.
    pub fn from_options(
        settings: Option<&str>,
        preset: Option<&str>,
        bank: Option<&str>,
        sound: Option<&str>,
    ) -> Result<Self> {
        match (settings, preset, bank) {
            (Some(text), None, None) => Ok(Self::Settings(text.to_string())),
            (None, Some(name), None) => Ok(Self::Preset(name.to_string())),
            (None, None, Some(path)) => match sound {
                Some(sound) => Ok(Self::Bank {
                    path: PathBuf::from(path),
                    sound: sound.to_string(),
                }),
                None => bail!("--bank requires --sound to pick an entry"),
            },
            (None, None, None) => bail!("one of --settings, --preset or --bank is required"),
            _ => bail!("--settings, --preset and --bank are mutually exclusive"),
        }
    }

    /// Loads and normalizes the parameters.
    pub fn load(&self) -> Result<LoadedSound> {
        match self {
            Self::Settings(text) => {
                let params = ParameterSet::from_settings(text)
                    .with_context(|| format!("Failed to parse settings: {}", text))?;
                Ok(LoadedSound {
                    label: "settings".to_string(),
                    params,
                })
            }
            Self::Preset(name) => {
                let params = SoundBank::builtin().get(name)?;
                Ok(LoadedSound {
                    label: format!("preset:{}", name),
                    params,
                })
            }
            Self::Bank { path, sound } => {
                let bank = load_bank(path)?;
                let params = bank.get(sound)?;
                Ok(LoadedSound {
                    label: format!("{}:{}", path.display(), sound),
                    params,
                })
            }
        }
    }
}

/// Loads a bank file, or the built-in bank when no path is given.
pub fn load_bank_or_builtin(path: Option<&str>) -> Result<SoundBank> {
    match path {
        Some(path) => load_bank(Path::new(path)),
        None => Ok(SoundBank::builtin()),
    }
}

fn load_bank(path: &Path) -> Result<SoundBank> {
    let bank = SoundBank::from_file(path)
        .with_context(|| format!("Failed to load sound bank: {}", path.display()))?;
    debug!(path = %path.display(), sounds = bank.len(), "loaded sound bank");
    Ok(bank)
}

/// Stable error code for an error chain, if it carries one.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<SpecError>())
        .map(|spec_err| spec_err.error_code().code())
}
