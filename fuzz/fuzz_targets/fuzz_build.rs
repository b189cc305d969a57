#![no_main]

use bleep_synth::wav::WavHeader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let values: Vec<f64> = data
        .chunks_exact(8)
        .take(bleep_spec::PARAM_COUNT)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();

    let asset = bleep_synth::build(&values);

    assert!(asset.samples_written <= asset.sample_count);
    assert!(asset.sample_count <= bleep_synth::MAX_SAMPLE_COUNT);
    assert_eq!(asset.wav_data.len(), 44 + 2 * asset.samples_written);

    let header = WavHeader::parse(&asset.wav_data).expect("rendered header parses");
    assert_eq!(header.sample_count(), asset.samples_written);
    assert!(asset.data_uri().starts_with(bleep_synth::DATA_URI_PREFIX));
});
