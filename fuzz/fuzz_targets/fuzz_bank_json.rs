#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(bank) = bleep_spec::SoundBank::from_json(text) else {
        return;
    };
    for (_, params) in bank.iter() {
        let values = params.to_vec();
        assert_eq!(values.len(), bleep_spec::PARAM_COUNT);
    }
    let json = bank.to_json_pretty().expect("bank serializes");
    let _ = serde_json::from_str::<serde_json::Value>(&json).expect("output is valid JSON");
});
