//! Attack/sustain/decay volume envelope.
//!
//! Stage lengths are in output samples. A stage ends on the first sample whose
//! time-in-stage exceeds its length, so every stage lasts at least its length.

use bleep_spec::ParameterSet;

/// Samples per unit of squared stage time.
const SAMPLES_PER_UNIT: f64 = 100_000.0;

/// Extra decay samples so even a zero decay has a tail.
const DECAY_TAIL: f64 = 12.0;

/// Envelope stage lengths in samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvelopeLengths {
    /// Attack stage length.
    pub attack: f64,
    /// Sustain stage length.
    pub sustain: f64,
    /// Decay stage length.
    pub decay: f64,
}

impl EnvelopeLengths {
    /// Computes stage lengths from the parameters.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            attack: params.attack_time * params.attack_time * SAMPLES_PER_UNIT,
            sustain: params.sustain_time * params.sustain_time * SAMPLES_PER_UNIT,
            decay: params.decay_time * params.decay_time * SAMPLES_PER_UNIT + DECAY_TAIL,
        }
    }

    /// Sum of all three stages.
    pub fn total(&self) -> f64 {
        self.attack + self.sustain + self.decay
    }
}

/// Envelope stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Linear ramp up.
    Attack,
    /// Punch that fades to full volume.
    Sustain,
    /// Linear ramp down.
    Decay,
    /// Silence; the sound is over.
    Finished,
}

impl Stage {
    fn next(self) -> Self {
        match self {
            Stage::Attack => Stage::Sustain,
            Stage::Sustain => Stage::Decay,
            Stage::Decay | Stage::Finished => Stage::Finished,
        }
    }
}

/// Running envelope for one render.
#[derive(Debug, Clone)]
pub struct Envelope {
    stage: Stage,
    time: u64,
    length: f64,
    lengths: EnvelopeLengths,
    // reciprocals, multiplied rather than divided per sample
    over_attack: f64,
    over_sustain: f64,
    over_decay: f64,
    punch: f64,
}

impl Envelope {
    /// Starts a new envelope at the beginning of the attack stage.
    pub fn new(lengths: EnvelopeLengths, punch: f64) -> Self {
        Self {
            stage: Stage::Attack,
            time: 0,
            length: lengths.attack,
            lengths,
            over_attack: 1.0 / lengths.attack,
            over_sustain: 1.0 / lengths.sustain,
            over_decay: 1.0 / lengths.decay,
            punch,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the envelope has run past its decay stage.
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// Advances by one sample and returns the volume for that sample.
    pub fn advance(&mut self) -> f64 {
        self.time += 1;
        if self.time as f64 > self.length {
            self.time = 0;
            self.stage = self.stage.next();
            match self.stage {
                Stage::Sustain => self.length = self.lengths.sustain,
                Stage::Decay => self.length = self.lengths.decay,
                _ => {}
            }
        }

        let time = self.time as f64;
        match self.stage {
            Stage::Attack => time * self.over_attack,
            Stage::Sustain => 1.0 + (1.0 - time * self.over_sustain) * 2.0 * self.punch,
            Stage::Decay => 1.0 - time * self.over_decay,
            Stage::Finished => 0.0,
        }
    }
}
