//! Pitch and duty modulation state.
//!
//! This is the part of the synthesizer state that the repeat effect rewinds:
//! period, slide, the one-shot pitch change and the square duty.

use bleep_spec::{ParameterSet, WaveType};

/// Modulation state derived from the parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modulation {
    /// Current oscillator period, in sub-samples.
    pub period: f64,
    /// Period ceiling derived from the minimum frequency.
    pub max_period: f64,
    /// Per-sample period multiplier.
    pub slide: f64,
    /// Per-sample change of `slide`.
    pub delta_slide: f64,
    /// Period multiplier applied once by the pitch change.
    pub change_amount: f64,
    /// Samples since the last reset.
    pub change_time: u64,
    /// Sample count at which the pitch changes; 0 when disarmed.
    pub change_limit: f64,
    /// Square duty threshold in `[0, 0.5]`.
    pub square_duty: f64,
    /// Per-sample change of `square_duty`.
    pub duty_sweep: f64,
}

/// Converts a frequency parameter into an oscillator period.
pub fn frequency_to_period(frequency: f64) -> f64 {
    100.0 / (frequency * frequency + 0.001)
}

impl Modulation {
    /// Creates modulation state from the parameters.
    pub fn new(params: &ParameterSet) -> Self {
        let mut modulation = Self::default();
        modulation.reset(params);
        modulation
    }

    /// Recomputes every field from the parameters.
    ///
    /// The duty fields are only touched for square waves.
    pub fn reset(&mut self, params: &ParameterSet) {
        self.period = frequency_to_period(params.start_frequency);
        self.max_period = frequency_to_period(params.min_frequency);

        self.slide = 1.0 - params.slide * params.slide * params.slide * 0.01;
        self.delta_slide = -params.delta_slide * params.delta_slide * params.delta_slide * 0.000001;

        if params.wave_type == WaveType::Square {
            self.square_duty = 0.5 - params.square_duty / 2.0;
            self.duty_sweep = -params.duty_sweep * 0.00005;
        }

        let amount = params.change_amount;
        let direction = if amount > 0.0 { -0.9 } else { 10.0 };
        self.change_amount = 1.0 + amount * amount * direction;
        self.change_time = 0;
        self.change_limit = if params.change_speed == 1.0 {
            0.0
        } else {
            (1.0 - params.change_speed) * (1.0 - params.change_speed) * 20000.0 + 32.0
        };
    }

    /// Counts toward the pitch change and applies it once when due.
    pub fn apply_change(&mut self) {
        if self.change_limit != 0.0 {
            self.change_time += 1;
            if self.change_time as f64 >= self.change_limit {
                self.change_limit = 0.0;
                self.period *= self.change_amount;
            }
        }
    }

    /// Accelerates the slide and applies it to the period.
    pub fn apply_slide(&mut self) {
        self.slide += self.delta_slide;
        self.period *= self.slide;
    }

    /// Clamps the period to its ceiling. Returns true when it was exceeded.
    pub fn clamp_period(&mut self) -> bool {
        if self.period > self.max_period {
            self.period = self.max_period;
            true
        } else {
            false
        }
    }

    /// Drifts the square duty, clamped to `[0, 0.5]`.
    pub fn sweep_duty(&mut self) {
        self.square_duty += self.duty_sweep;
        if self.square_duty < 0.0 {
            self.square_duty = 0.0;
        } else if self.square_duty > 0.5 {
            self.square_duty = 0.5;
        }
    }
}
