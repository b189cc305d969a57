//! Resonant low-pass and derived high-pass filter chain.
//!
//! The low-pass stage is a damped spring: a velocity pulled toward the input
//! by the cutoff and bled off by the damping. The high-pass stage integrates
//! the low-pass output's per-step change and leaks it by the high-pass cutoff,
//! so it filters the low-pass output rather than the raw oscillator.

use bleep_spec::ParameterSet;

/// Upper bound for both cutoffs.
const MAX_CUTOFF: f64 = 0.1;

/// Lower bound for the high-pass cutoff while it sweeps.
const MIN_HP_CUTOFF: f64 = 0.00001;

/// Upper bound for the low-pass damping before inversion.
const MAX_DAMPING: f64 = 0.8;

/// Filter chain state for one render.
#[derive(Debug, Clone)]
pub struct FilterChain {
    active: bool,
    lp_on: bool,
    lp_cutoff: f64,
    lp_delta_cutoff: f64,
    lp_damping: f64,
    lp_pos: f64,
    lp_delta_pos: f64,
    hp_cutoff: f64,
    hp_delta_cutoff: f64,
    hp_pos: f64,
}

impl FilterChain {
    /// Creates the chain from the parameters.
    pub fn new(params: &ParameterSet) -> Self {
        let cutoff = params.lp_filter_cutoff;
        let lp_cutoff = cutoff * cutoff * cutoff * 0.1;
        let resonance = params.lp_filter_resonance;

        let mut damping = 5.0 / (1.0 + resonance * resonance * 20.0) * (0.01 + lp_cutoff);
        if damping > MAX_DAMPING {
            damping = MAX_DAMPING;
        }

        Self {
            active: params.filters_active(),
            lp_on: cutoff != 1.0,
            lp_cutoff,
            lp_delta_cutoff: 1.0 + params.lp_filter_cutoff_sweep * 0.0001,
            lp_damping: 1.0 - damping,
            lp_pos: 0.0,
            lp_delta_pos: 0.0,
            hp_cutoff: params.hp_filter_cutoff * params.hp_filter_cutoff * 0.1,
            hp_delta_cutoff: 1.0 + params.hp_filter_cutoff_sweep * 0.0003,
            hp_pos: 0.0,
        }
    }

    /// Whether the chain modifies samples at all.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current high-pass cutoff.
    pub fn hp_cutoff(&self) -> f64 {
        self.hp_cutoff
    }

    /// Drifts the high-pass cutoff; called once per output sample.
    pub fn sweep_high_pass(&mut self) {
        if self.active && self.hp_delta_cutoff != 0.0 {
            self.hp_cutoff *= self.hp_delta_cutoff;
            if self.hp_cutoff < MIN_HP_CUTOFF {
                self.hp_cutoff = MIN_HP_CUTOFF;
            } else if self.hp_cutoff > MAX_CUTOFF {
                self.hp_cutoff = MAX_CUTOFF;
            }
        }
    }

    /// Filters one sub-sample. Inactive chains return the input unchanged.
    pub fn process(&mut self, sample: f64) -> f64 {
        if !self.active {
            return sample;
        }

        let lp_old = self.lp_pos;

        self.lp_cutoff *= self.lp_delta_cutoff;
        if self.lp_cutoff < 0.0 {
            self.lp_cutoff = 0.0;
        } else if self.lp_cutoff > MAX_CUTOFF {
            self.lp_cutoff = MAX_CUTOFF;
        }

        if self.lp_on {
            self.lp_delta_pos += (sample - self.lp_pos) * self.lp_cutoff;
            self.lp_delta_pos *= self.lp_damping;
        } else {
            self.lp_pos = sample;
            self.lp_delta_pos = 0.0;
        }

        self.lp_pos += self.lp_delta_pos;

        self.hp_pos += self.lp_pos - lp_old;
        self.hp_pos *= 1.0 - self.hp_cutoff;
        self.hp_pos
    }
}
