//! Sound parameter vectors and their normalization.
//!
//! A bleep sound is described by 24 scalars in a fixed positional order. The
//! vector form is the interchange format (settings strings, sound banks); the
//! named [`ParameterSet`] is what the synthesizer consumes.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Number of positional parameters in a settings vector.
pub const PARAM_COUNT: usize = 24;

/// Shortest allowed sustain stage, before squaring.
pub const MIN_SUSTAIN_TIME: f64 = 0.01;

/// Shortest allowed attack + sustain + decay, before squaring.
pub const MIN_TOTAL_TIME: f64 = 0.18;

/// Field names in positional order.
pub const PARAM_NAMES: [&str; PARAM_COUNT] = [
    "wave_type",
    "attack_time",
    "sustain_time",
    "sustain_punch",
    "decay_time",
    "start_frequency",
    "min_frequency",
    "slide",
    "delta_slide",
    "vibrato_depth",
    "vibrato_speed",
    "change_amount",
    "change_speed",
    "square_duty",
    "duty_sweep",
    "repeat_speed",
    "phaser_offset",
    "phaser_sweep",
    "lp_filter_cutoff",
    "lp_filter_cutoff_sweep",
    "lp_filter_resonance",
    "hp_filter_cutoff",
    "hp_filter_cutoff_sweep",
    "master_volume",
];

/// Oscillator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveType {
    /// Pulse wave with a sweepable duty cycle.
    #[default]
    Square,
    /// Falling ramp.
    Sawtooth,
    /// Polynomial sine approximation.
    Sine,
    /// Per-period random noise.
    Noise,
}

impl WaveType {
    /// Maps a raw parameter value onto a wave type.
    ///
    /// The value is truncated toward zero and clamped into `0..=3`.
    pub fn from_value(value: f64) -> Self {
        match value.trunc() {
            v if v >= 3.0 => WaveType::Noise,
            v if v >= 2.0 => WaveType::Sine,
            v if v >= 1.0 => WaveType::Sawtooth,
            _ => WaveType::Square,
        }
    }

    /// Returns the positional value of this wave type.
    pub fn as_value(self) -> f64 {
        match self {
            WaveType::Square => 0.0,
            WaveType::Sawtooth => 1.0,
            WaveType::Sine => 2.0,
            WaveType::Noise => 3.0,
        }
    }

    /// Returns the lowercase name of this wave type.
    pub fn as_str(self) -> &'static str {
        match self {
            WaveType::Square => "square",
            WaveType::Sawtooth => "sawtooth",
            WaveType::Sine => "sine",
            WaveType::Noise => "noise",
        }
    }
}

impl std::fmt::Display for WaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized synthesis parameters.
///
/// Construct through [`ParameterSet::normalize`] so the envelope invariants
/// hold: `sustain_time >= 0.01` and `attack_time + sustain_time + decay_time >= 0.18`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Oscillator kind.
    pub wave_type: WaveType,
    /// Attack stage duration (squared into samples).
    pub attack_time: f64,
    /// Sustain stage duration (squared into samples).
    pub sustain_time: f64,
    /// Extra loudness at the start of sustain.
    pub sustain_punch: f64,
    /// Decay stage duration (squared into samples).
    pub decay_time: f64,
    /// Seeds the oscillator period.
    pub start_frequency: f64,
    /// Frequency below which the sound stops.
    pub min_frequency: f64,
    /// Linear pitch slide.
    pub slide: f64,
    /// Slide acceleration.
    pub delta_slide: f64,
    /// Vibrato depth.
    pub vibrato_depth: f64,
    /// Vibrato rate.
    pub vibrato_speed: f64,
    /// One-shot pitch jump amount.
    pub change_amount: f64,
    /// One-shot pitch jump trigger time; 1 disables the jump.
    pub change_speed: f64,
    /// Square wave duty cycle.
    pub square_duty: f64,
    /// Square wave duty drift.
    pub duty_sweep: f64,
    /// Repeat period; 0 disables repeating.
    pub repeat_speed: f64,
    /// Phaser tap offset.
    pub phaser_offset: f64,
    /// Phaser tap drift.
    pub phaser_sweep: f64,
    /// Low-pass cutoff; 1 disables the low-pass stage.
    pub lp_filter_cutoff: f64,
    /// Low-pass cutoff drift.
    pub lp_filter_cutoff_sweep: f64,
    /// Low-pass resonance.
    pub lp_filter_resonance: f64,
    /// High-pass cutoff.
    pub hp_filter_cutoff: f64,
    /// High-pass cutoff drift.
    pub hp_filter_cutoff_sweep: f64,
    /// Output gain, squared before use.
    pub master_volume: f64,
}

/// Coerces a raw input value: NaN and negative zero become 0.
fn coerce(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

impl ParameterSet {
    /// Builds a normalized parameter set from a positional vector.
    ///
    /// Missing positions default to 0 and values past position 23 are ignored.
    /// Out-of-range values are kept as given.
    pub fn normalize(values: &[f64]) -> Self {
        let mut raw = [0.0; PARAM_COUNT];
        for (slot, value) in raw.iter_mut().zip(values) {
            *slot = coerce(*value);
        }

        let mut params = Self {
            wave_type: WaveType::from_value(raw[0]),
            attack_time: raw[1],
            sustain_time: raw[2],
            sustain_punch: raw[3],
            decay_time: raw[4],
            start_frequency: raw[5],
            min_frequency: raw[6],
            slide: raw[7],
            delta_slide: raw[8],
            vibrato_depth: raw[9],
            vibrato_speed: raw[10],
            change_amount: raw[11],
            change_speed: raw[12],
            square_duty: raw[13],
            duty_sweep: raw[14],
            repeat_speed: raw[15],
            phaser_offset: raw[16],
            phaser_sweep: raw[17],
            lp_filter_cutoff: raw[18],
            lp_filter_cutoff_sweep: raw[19],
            lp_filter_resonance: raw[20],
            hp_filter_cutoff: raw[21],
            hp_filter_cutoff_sweep: raw[22],
            master_volume: raw[23],
        };

        if params.sustain_time < MIN_SUSTAIN_TIME {
            params.sustain_time = MIN_SUSTAIN_TIME;
        }

        let total = params.attack_time + params.sustain_time + params.decay_time;
        if total < MIN_TOTAL_TIME {
            let multiplier = MIN_TOTAL_TIME / total;
            params.attack_time *= multiplier;
            params.sustain_time *= multiplier;
            params.decay_time *= multiplier;
        }

        params
    }

    /// Builds a normalized parameter set from a sparse vector, where `None`
    /// positions are 0.
    pub fn from_sparse(values: &[Option<f64>]) -> Self {
        let dense: Vec<f64> = values.iter().map(|v| v.unwrap_or(0.0)).collect();
        Self::normalize(&dense)
    }

    /// Parses a settings string and normalizes it.
    pub fn from_settings(text: &str) -> SpecResult<Self> {
        Ok(Self::normalize(&parse_settings(text)?))
    }

    /// Returns the 24 values in positional order.
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.wave_type.as_value(),
            self.attack_time,
            self.sustain_time,
            self.sustain_punch,
            self.decay_time,
            self.start_frequency,
            self.min_frequency,
            self.slide,
            self.delta_slide,
            self.vibrato_depth,
            self.vibrato_speed,
            self.change_amount,
            self.change_speed,
            self.square_duty,
            self.duty_sweep,
            self.repeat_speed,
            self.phaser_offset,
            self.phaser_sweep,
            self.lp_filter_cutoff,
            self.lp_filter_cutoff_sweep,
            self.lp_filter_resonance,
            self.hp_filter_cutoff,
            self.hp_filter_cutoff_sweep,
            self.master_volume,
        ]
    }

    /// Whether the phaser stage runs.
    pub fn phaser_active(&self) -> bool {
        self.phaser_offset != 0.0 || self.phaser_sweep != 0.0
    }

    /// Whether the filter chain runs.
    pub fn filters_active(&self) -> bool {
        self.lp_filter_cutoff != 1.0 || self.hp_filter_cutoff != 0.0
    }
}

/// Parses comma-separated sfxr settings, e.g. `"0,,0.1434,,0.1212"`.
///
/// Empty positions are zero. Whitespace and enclosing brackets are ignored,
/// so a pasted array literal like `[0,,0.5]` parses too. An empty string is
/// an empty vector.
pub fn parse_settings(text: &str) -> SpecResult<Vec<f64>> {
    let trimmed = text
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            if token.is_empty() {
                return Ok(0.0);
            }
            token.parse::<f64>().map_err(|_| SpecError::InvalidNumber {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Formats a vector in the compact settings notation.
///
/// The wave type is always written; other zeros are left empty.
pub fn format_settings(values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| {
            if index > 0 && *v == 0.0 {
                String::new()
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
