//! Behavioral properties of the synthesizer.

use bleep_spec::{parse_settings, ParameterSet, PARAM_COUNT};
use bleep_synth::{build, build_with_seed, Synthesizer};

const JUMP_SETTINGS: &str = "0,,0.1434,,0.1212,0.4471,,0.2511,,,,,,0.0426,,,,,0.8862,,,,,0.5";

fn values_with(entries: &[(usize, f64)]) -> Vec<f64> {
    let mut values = vec![0.0; PARAM_COUNT];
    values[18] = 1.0;
    for &(index, value) in entries {
        values[index] = value;
    }
    values
}

#[test]
fn test_jump_renders_full_length() {
    let values = parse_settings(JUMP_SETTINGS).expect("settings");
    let asset = build(&values);
    assert!(asset.sample_count > 0);
    assert_eq!(asset.sample_count % 3, 0);
    assert_eq!(asset.samples_written, asset.sample_count);
    assert!(!asset.finished_early());
}

#[test]
fn test_all_zero_vector_is_silent() {
    let asset = build(&[0.0; PARAM_COUNT]);
    assert_eq!(asset.sample_count % 3, 0);
    assert!(asset.sample_count > 3000);
    assert_eq!(asset.samples_written, asset.sample_count);
    assert!(asset.pcm_samples().iter().all(|&s| s == 0));
}

#[test]
fn test_empty_vector_matches_all_zero() {
    assert_eq!(build(&[]), build(&[0.0; PARAM_COUNT]));
}

#[test]
fn test_identical_vectors_are_byte_identical() {
    let noise = values_with(&[(0, 3.0), (2, 0.2), (5, 0.5), (16, 0.2), (23, 0.5)]);
    assert_eq!(build(&noise), build(&noise));
    assert_eq!(build_with_seed(&noise, 3), build_with_seed(&noise, 3));
    assert_ne!(
        build_with_seed(&noise, 3).pcm_hash,
        build_with_seed(&noise, 4).pcm_hash
    );
}

#[test]
fn test_render_never_exceeds_buffer() {
    let values = parse_settings(JUMP_SETTINGS).expect("settings");
    let mut synth = Synthesizer::new(ParameterSet::normalize(&values), 0);
    for len in [0, 1, 2, 3, 100, 3000] {
        let mut buffer = vec![0i16; len];
        assert_eq!(synth.render(&mut buffer), len);
    }

    let stopping = values_with(&[(2, 0.3), (5, 0.1), (6, 0.5), (23, 0.5)]);
    let mut synth = Synthesizer::new(ParameterSet::normalize(&stopping), 0);
    let mut buffer = vec![0i16; 1000];
    let used = synth.render(&mut buffer);
    assert!(used <= buffer.len());
    assert_eq!(used, 1);
}

#[test]
fn test_inactive_phaser_leaves_signal_untouched() {
    // unfiltered square at full volume: every sub-sample is exactly +-0.5
    let base = values_with(&[(2, 0.5), (5, 0.3), (23, 1.0)]);
    let samples = build(&base).pcm_samples();
    assert_eq!(samples.iter().max(), Some(&16383));
    assert_eq!(samples.iter().min(), Some(&-16383));

    // the slowest sweep keeps a zero tap, which adds each sub-sample to itself
    let mut swept = base.clone();
    swept[17] = 0.01;
    let samples = build(&swept).pcm_samples();
    assert_eq!(samples.iter().max(), Some(&32767));
    assert_eq!(samples.iter().min(), Some(&-32768));
}

#[test]
fn test_out_of_range_inputs_stay_finite() {
    let wild = [
        f64::NAN,
        -5.0,
        f64::INFINITY,
        1e300,
        f64::NEG_INFINITY,
        f64::NAN,
        -1e9,
        1e9,
        -1e9,
        1e9,
        1e9,
        1e9,
        -1e9,
        1e9,
        -1e9,
        1e9,
        -1e9,
        1e9,
        -1e9,
        1e9,
        1e9,
        -1e9,
        1e9,
        1e9,
    ];
    let asset = build(&wild);
    assert!(asset.samples_written <= asset.sample_count);
    assert_eq!(asset.wav_data.len(), 44 + 2 * asset.samples_written);
}
