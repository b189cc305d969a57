//! Oscillator bank.
//!
//! Phase is an integer sub-sample counter in `[0, period)`. All four waveforms
//! read it against the same integer period.

use bleep_spec::WaveType;
use rand_pcg::Pcg32;

use crate::rng::noise_value;

/// Number of random values held per noise period.
pub const NOISE_BUFFER_LEN: usize = 32;

/// Random values played back across one oscillator period.
#[derive(Debug, Clone)]
pub struct NoiseBuffer {
    values: [f64; NOISE_BUFFER_LEN],
}

impl NoiseBuffer {
    /// Creates a buffer filled from `rng`.
    pub fn new(rng: &mut Pcg32) -> Self {
        let mut buffer = Self {
            values: [0.0; NOISE_BUFFER_LEN],
        };
        buffer.refill(rng);
        buffer
    }

    /// Replaces every value with fresh uniform noise in `[-1, 1]`.
    pub fn refill(&mut self, rng: &mut Pcg32) {
        for value in self.values.iter_mut() {
            *value = noise_value(rng);
        }
    }

    /// Value for the given phase position.
    pub fn at(&self, phase: i64, period: i64) -> f64 {
        let index = (phase as f64 * NOISE_BUFFER_LEN as f64 / period as f64) as usize;
        self.values[index.min(NOISE_BUFFER_LEN - 1)]
    }
}

/// Parabolic sine approximation.
///
/// `position` is the phase as a fraction of the period in `[0, 1)`.
pub fn fast_sine(position: f64) -> f64 {
    let pos = (if position > 0.5 { position - 1.0 } else { position }) * 6.28318531;
    let sign = if pos < 0.0 { 1.0 } else { -1.0 };
    let sample = 1.27323954 * pos + 0.405284735 * pos * pos * sign;
    let sign = if sample < 0.0 { -1.0 } else { 1.0 };
    0.225 * (sign * sample * sample - sample) + sample
}

/// Generates one raw oscillator sub-sample.
pub fn sample(
    wave_type: WaveType,
    phase: i64,
    period: i64,
    duty: f64,
    noise: &NoiseBuffer,
) -> f64 {
    let position = phase as f64 / period as f64;
    match wave_type {
        WaveType::Square => {
            if position < duty {
                0.5
            } else {
                -0.5
            }
        }
        WaveType::Sawtooth => 1.0 - position * 2.0,
        WaveType::Sine => fast_sine(position),
        WaveType::Noise => noise.at(phase, period),
    }
}
