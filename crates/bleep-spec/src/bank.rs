//! Sound banks: named parameter vectors loaded from JSON.
//!
//! A bank file looks like:
//!
//! ```json
//! {
//!   "sounds": {
//!     "jump": [0, null, 0.1434, null, 0.1212, 0.4471]
//!   }
//! }
//! ```
//!
//! `null` entries and missing trailing entries are zero, matching the sparse
//! settings notation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::params::ParameterSet;
use crate::presets::PRESETS;

/// A named collection of parameter vectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundBank {
    /// Sparse parameter vectors keyed by sound name.
    pub sounds: BTreeMap<String, Vec<Option<f64>>>,
}

impl SoundBank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bank of built-in presets.
    pub fn builtin() -> Self {
        let mut bank = Self::new();
        for (name, values) in PRESETS.iter() {
            bank.insert(*name, values);
        }
        bank
    }

    /// Parses a bank from JSON text. A bank with no sounds is rejected.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        let bank: SoundBank = serde_json::from_str(json)?;
        if bank.sounds.is_empty() {
            return Err(SpecError::EmptyBank);
        }
        Ok(bank)
    }

    /// Reads and parses a bank file.
    pub fn from_file(path: impl AsRef<Path>) -> SpecResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serializes the bank to pretty JSON.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds or replaces a dense vector under `name`.
    pub fn insert(&mut self, name: impl Into<String>, values: &[f64]) {
        self.sounds
            .insert(name.into(), values.iter().copied().map(Some).collect());
    }

    /// Returns the normalized parameters for `name`.
    pub fn get(&self, name: &str) -> SpecResult<ParameterSet> {
        self.sounds
            .get(name)
            .map(|values| ParameterSet::from_sparse(values))
            .ok_or_else(|| SpecError::unknown_sound(name))
    }

    /// Sound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sounds.keys().map(String::as_str)
    }

    /// Iterates over `(name, normalized parameters)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ParameterSet)> {
        self.sounds
            .iter()
            .map(|(name, values)| (name.as_str(), ParameterSet::from_sparse(values)))
    }

    /// Number of sounds.
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Whether the bank is empty.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
