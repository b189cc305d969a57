//! Waveform synthesizer.
//!
//! A [`Synthesizer`] owns a normalized [`ParameterSet`] and the modulation
//! state the repeat effect rewinds. Everything else a render needs lives in a
//! voice created at the start of [`Synthesizer::render`] and dropped at
//! the end, so renders never share mutable state.

mod envelope;
mod filter;
mod modulation;
mod oscillator;
mod phaser;

pub use envelope::{Envelope, EnvelopeLengths, Stage};
pub use filter::FilterChain;
pub use modulation::{frequency_to_period, Modulation};
pub use oscillator::{fast_sine, NoiseBuffer, NOISE_BUFFER_LEN};
pub use phaser::{Phaser, PHASER_BUFFER_LEN};

use bleep_spec::{ParameterSet, WaveType};
use rand_pcg::Pcg32;
use tracing::trace;

use crate::rng::create_rng;
use crate::wav::quantize;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Oscillator sub-samples averaged into each output sample.
pub const OVERSAMPLING: usize = 8;

/// Largest sample count a single sound may allocate (60 seconds).
pub const MAX_SAMPLE_COUNT: usize = 2_646_000;

/// Shortest oscillator period in sub-samples.
///
/// The vibrato-scaled period is truncated with a saturating cast before this
/// floor applies, so periods beyond the `i64` range clamp instead of wrapping.
const MIN_PERIOD: i64 = 8;

/// Deterministic sfxr-style synthesizer for one parameter set.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    params: ParameterSet,
    modulation: Modulation,
    lengths: EnvelopeLengths,
    seed: u32,
    sample_count: usize,
}

impl Synthesizer {
    /// Creates a synthesizer and performs a total reset.
    ///
    /// `seed` drives the noise oscillator; other wave types ignore it.
    pub fn new(params: ParameterSet, seed: u32) -> Self {
        let mut synth = Self {
            modulation: Modulation::new(&params),
            params,
            lengths: EnvelopeLengths::default(),
            seed,
            sample_count: 0,
        };
        synth.total_reset();
        synth
    }

    /// Parameters this synthesizer renders.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Current modulation state.
    pub fn modulation(&self) -> &Modulation {
        &self.modulation
    }

    /// Envelope stage lengths from the last total reset.
    pub fn lengths(&self) -> EnvelopeLengths {
        self.lengths
    }

    /// Sample count computed by the last total reset.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Recomputes period, slide, pitch change and square duty.
    pub fn reset_modulation(&mut self) {
        self.modulation.reset(&self.params);
        trace!(
            period = self.modulation.period,
            max_period = self.modulation.max_period,
            "modulation reset"
        );
    }

    /// Resets modulation, recomputes the envelope lengths and returns the
    /// sample count: the envelope total rounded down to a multiple of 3 and
    /// capped at [`MAX_SAMPLE_COUNT`].
    pub fn total_reset(&mut self) -> usize {
        self.reset_modulation();
        self.lengths = EnvelopeLengths::from_params(&self.params);

        // float to int casts saturate and map NaN to 0
        let thirds = (self.lengths.total() / 3.0) as usize;
        self.sample_count = thirds.min(MAX_SAMPLE_COUNT / 3) * 3;
        self.sample_count
    }

    /// Renders into `buffer` and returns the number of samples written.
    ///
    /// Rendering stops at the end of the buffer or on the first sample at
    /// which the sound finishes; that sample is written and counted.
    pub fn render(&mut self, buffer: &mut [i16]) -> usize {
        self.reset_modulation();
        let mut rng = create_rng(self.seed);
        let mut voice = Voice::new(&self.params, self.lengths, &mut rng);

        for (i, slot) in buffer.iter_mut().enumerate() {
            let (sample, finished) = self.next_sample(&mut voice, &mut rng);
            *slot = quantize(sample);
            if finished {
                return i + 1;
            }
        }
        buffer.len()
    }

    /// Produces one output sample before quantization, and whether the sound
    /// finished on it.
    fn next_sample(&mut self, voice: &mut Voice, rng: &mut Pcg32) -> (f64, bool) {
        let mut finished = false;

        if voice.repeat_limit != 0 {
            voice.repeat_time += 1;
            if voice.repeat_time >= voice.repeat_limit {
                voice.repeat_time = 0;
                self.reset_modulation();
            }
        }

        let modulation = &mut self.modulation;
        modulation.apply_change();
        modulation.apply_slide();
        if modulation.clamp_period() && self.params.min_frequency > 0.0 {
            finished = true;
        }

        let mut period = modulation.period;
        if voice.vibrato_amplitude > 0.0 {
            voice.vibrato_phase += voice.vibrato_speed;
            period *= 1.0 + voice.vibrato_phase.sin() * voice.vibrato_amplitude;
        }
        let period = (period as i64).max(MIN_PERIOD);

        let wave_type = self.params.wave_type;
        if wave_type == WaveType::Square {
            modulation.sweep_duty();
        }

        let volume = voice.envelope.advance();
        if voice.envelope.is_finished() {
            finished = true;
        }

        voice.phaser.sweep();
        voice.filters.sweep_high_pass();

        let mut super_sample = 0.0;
        for _ in 0..OVERSAMPLING {
            voice.phase += 1;
            if voice.phase >= period {
                voice.phase %= period;
                if wave_type == WaveType::Noise {
                    voice.noise.refill(rng);
                }
            }

            let sample = oscillator::sample(
                wave_type,
                voice.phase,
                period,
                modulation.square_duty,
                &voice.noise,
            );
            let sample = voice.filters.process(sample);
            super_sample += voice.phaser.process(sample);
        }

        super_sample *= 0.125 * volume * voice.master_volume;
        (super_sample, finished)
    }
}

/// Per-render synthesis state.
#[derive(Debug)]
struct Voice {
    envelope: Envelope,
    filters: FilterChain,
    phaser: Phaser,
    noise: NoiseBuffer,
    phase: i64,
    vibrato_phase: f64,
    vibrato_speed: f64,
    vibrato_amplitude: f64,
    repeat_time: u64,
    repeat_limit: u64,
    master_volume: f64,
}

impl Voice {
    fn new(params: &ParameterSet, lengths: EnvelopeLengths, rng: &mut Pcg32) -> Self {
        let repeat = params.repeat_speed;
        let repeat_limit = if repeat != 0.0 {
            (((1.0 - repeat) * (1.0 - repeat) * 20000.0) as u64).saturating_add(32)
        } else {
            0
        };

        Self {
            envelope: Envelope::new(lengths, params.sustain_punch),
            filters: FilterChain::new(params),
            phaser: Phaser::new(params),
            noise: NoiseBuffer::new(rng),
            phase: 0,
            vibrato_phase: 0.0,
            vibrato_speed: params.vibrato_speed * params.vibrato_speed * 0.01,
            vibrato_amplitude: params.vibrato_depth / 2.0,
            repeat_time: 0,
            repeat_limit,
            master_volume: params.master_volume * params.master_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bleep_spec::PARAM_COUNT;

    fn params_with(entries: &[(usize, f64)]) -> ParameterSet {
        let mut values = [0.0; PARAM_COUNT];
        // a zero low-pass cutoff silences everything; start fully open
        values[18] = 1.0;
        for &(index, value) in entries {
            values[index] = value;
        }
        ParameterSet::normalize(&values)
    }

    fn render_all(params: ParameterSet, seed: u32) -> (Vec<i16>, usize) {
        let mut synth = Synthesizer::new(params, seed);
        let mut buffer = vec![0i16; synth.sample_count()];
        let used = synth.render(&mut buffer);
        (buffer, used)
    }

    #[test]
    fn test_sample_count_multiple_of_three() {
        for attack in [0.0, 0.1, 0.33, 0.5] {
            for decay in [0.0, 0.2, 0.41] {
                let synth = Synthesizer::new(params_with(&[(1, attack), (2, 0.3), (4, decay)]), 0);
                assert_eq!(synth.sample_count() % 3, 0);
                assert!(synth.sample_count() as f64 <= synth.lengths().total());
            }
        }
    }

    #[test]
    fn test_total_reset_value() {
        // attack 1000, sustain 4000, decay 9012 samples
        let synth = Synthesizer::new(params_with(&[(1, 0.1), (2, 0.2), (4, 0.3)]), 0);
        assert_eq!(synth.sample_count(), 14010);
    }

    #[test]
    fn test_sample_count_capped() {
        let synth = Synthesizer::new(params_with(&[(1, 100.0), (2, 100.0)]), 0);
        assert_eq!(synth.sample_count(), MAX_SAMPLE_COUNT);

        let synth = Synthesizer::new(params_with(&[(1, f64::INFINITY), (2, 0.5)]), 0);
        assert_eq!(synth.sample_count(), MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_silent_master_volume() {
        let (buffer, used) = render_all(params_with(&[(5, 0.3)]), 1);
        assert!(used > 0);
        assert!(buffer.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_render_respects_buffer_length() {
        let mut synth = Synthesizer::new(params_with(&[(2, 0.5), (5, 0.3), (23, 0.5)]), 1);
        let mut buffer = vec![0i16; 100];
        assert_eq!(synth.render(&mut buffer), 100);

        let mut empty: Vec<i16> = Vec::new();
        assert_eq!(synth.render(&mut empty), 0);
    }

    #[test]
    fn test_min_frequency_stops_immediately() {
        let (buffer, used) = render_all(params_with(&[(5, 0.1), (6, 0.5), (23, 0.5)]), 1);
        assert_eq!(used, 1);
        assert!(buffer.len() > 1);
    }

    #[test]
    fn test_envelope_end_counts_last_sample() {
        // a buffer longer than the envelope stops on the finishing sample
        let mut synth = Synthesizer::new(params_with(&[(5, 0.3), (23, 0.5)]), 1);
        let lengths = synth.lengths();
        let mut buffer = vec![0i16; synth.sample_count() + 1000];
        let used = synth.render(&mut buffer);
        let expected = lengths.attack.floor() + lengths.sustain.floor() + lengths.decay.floor() + 3.0;
        assert_eq!(used, expected as usize);
    }

    #[test]
    fn test_render_is_repeatable() {
        let params = params_with(&[(0, 3.0), (2, 0.2), (5, 0.4), (23, 0.5)]);
        let mut synth = Synthesizer::new(params, 77);
        let mut first = vec![0i16; synth.sample_count()];
        let mut second = vec![0i16; synth.sample_count()];
        synth.render(&mut first);
        synth.render(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_noise_seed_changes_output() {
        let params = params_with(&[(0, 3.0), (2, 0.2), (5, 0.4), (23, 0.5)]);
        let (a, _) = render_all(params.clone(), 1);
        let (b, _) = render_all(params, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_tonal_waves_ignore_seed() {
        for wave in [0.0, 1.0, 2.0] {
            let params = params_with(&[(0, wave), (2, 0.2), (5, 0.4), (23, 0.5)]);
            let (a, _) = render_all(params.clone(), 1);
            let (b, _) = render_all(params, 2);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_repeat_rewinds_pitch() {
        // rising pitch that repeats every (1 - 0.5)^2 * 20000 + 32 = 5032 samples
        let params = params_with(&[(2, 0.5), (5, 0.5), (7, 0.5), (15, 0.5), (23, 0.5)]);
        let repeat_limit = 5032;

        let mut synth = Synthesizer::new(params.clone(), 0);
        let start = synth.modulation().period;
        let slide = synth.modulation().slide;

        // one sample short of the repeat: the slide has compounded
        let mut buffer = vec![0i16; repeat_limit - 1];
        assert_eq!(synth.render(&mut buffer), repeat_limit - 1);
        assert!(synth.modulation().period < start * 0.5);

        // the repeat sample rewinds, then slides once
        let mut synth = Synthesizer::new(params, 0);
        let mut buffer = vec![0i16; repeat_limit];
        assert_eq!(synth.render(&mut buffer), repeat_limit);
        assert!((synth.modulation().period - start * slide).abs() < 1e-9);
    }

    #[test]
    fn test_huge_vibrato_period_saturates() {
        let params = params_with(&[(2, 0.2), (5, 0.4), (9, 1.0e30), (10, 0.5), (23, 0.5)]);
        let (a, used) = render_all(params.clone(), 0);
        assert_eq!(used, a.len());
        let (b, _) = render_all(params, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_loud_square_clips() {
        let params = params_with(&[(2, 0.3), (3, 1.0), (5, 0.3), (23, 2.0)]);
        let (buffer, used) = render_all(params, 0);
        let written = &buffer[..used];
        assert!(written.contains(&32767));
        assert!(written.contains(&-32768));
    }
}
