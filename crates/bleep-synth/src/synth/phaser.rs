//! Phaser: a swept comb filter over a ring of recent sub-samples.

use bleep_spec::ParameterSet;

/// Ring buffer length in sub-samples.
pub const PHASER_BUFFER_LEN: usize = 1024;

/// Largest usable tap distance.
const MAX_TAP: usize = PHASER_BUFFER_LEN - 1;

/// Phaser state for one render.
#[derive(Debug, Clone)]
pub struct Phaser {
    active: bool,
    offset: f64,
    delta_offset: f64,
    tap: usize,
    pos: usize,
    buffer: Box<[f64; PHASER_BUFFER_LEN]>,
}

impl Phaser {
    /// Creates the phaser from the parameters with an empty ring.
    pub fn new(params: &ParameterSet) -> Self {
        let offset = params.phaser_offset;
        let direction = if offset < 0.0 { -1020.0 } else { 1020.0 };
        let sweep = params.phaser_sweep;

        Self {
            active: params.phaser_active(),
            offset: offset * offset * direction,
            delta_offset: sweep * sweep * sweep * 0.2,
            tap: 0,
            pos: 0,
            buffer: Box::new([0.0; PHASER_BUFFER_LEN]),
        }
    }

    /// Whether the phaser modifies samples at all.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current tap distance into the ring.
    pub fn tap(&self) -> usize {
        self.tap
    }

    /// Drifts the offset and recomputes the tap; called once per output sample.
    pub fn sweep(&mut self) {
        if !self.active {
            return;
        }
        self.offset += self.delta_offset;
        // truncate toward zero; saturates for out-of-range offsets
        let whole = self.offset as i64;
        self.tap = (whole.unsigned_abs() as usize).min(MAX_TAP);
    }

    /// Mixes one sub-sample with the delayed copy. Inactive phasers return the
    /// input unchanged.
    pub fn process(&mut self, sample: f64) -> f64 {
        if !self.active {
            return sample;
        }
        self.buffer[self.pos] = sample;
        let read = (self.pos + PHASER_BUFFER_LEN - self.tap) % PHASER_BUFFER_LEN;
        let mixed = sample + self.buffer[read];
        self.pos = (self.pos + 1) % PHASER_BUFFER_LEN;
        mixed
    }
}
