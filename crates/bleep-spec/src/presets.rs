//! Built-in sound presets.
//!
//! These are the stock effects of the platformer this synthesizer was written
//! for, baked once at startup by the game shell.

use crate::params::PARAM_COUNT;

/// A named parameter vector.
pub type Preset = (&'static str, [f64; PARAM_COUNT]);

/// Short square blip with an upward slide.
pub const JUMP: [f64; PARAM_COUNT] = [
    0.0, 0.0, 0.1434, 0.0, 0.1212, 0.4471, 0.0, 0.2511, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0426, 0.0,
    0.0, 0.0, 0.0, 0.8862, 0.0, 0.0, 0.0, 0.0, 0.5,
];

/// Falling sawtooth hit.
pub const HIT: [f64; PARAM_COUNT] = [
    1.0, 0.0, 0.0713, 0.0, 0.1467, 0.5483, 0.0, -0.4465, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0, 0.0639, 0.0, 0.5,
];

/// Punchy coin pickup.
pub const PICKUP: [f64; PARAM_COUNT] = [
    0.0, 0.0, 0.0224, 0.441, 0.1886, 0.6932, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5,
];

/// Repeating sine swell with a phaser.
pub const SPAWN: [f64; PARAM_COUNT] = [
    2.0, 0.28, 0.45, 0.0, 0.56, 0.35, 0.0, 0.4088, 0.0, 0.0, 0.0, 0.0, 0.03, 0.1557, 0.0, 0.5565,
    -0.02, -0.02, 1.0, 0.0, 0.0, 0.0, 0.0, 0.5,
];

/// Noise burst with phaser and high-pass sweep.
pub const EXPLOSION: [f64; PARAM_COUNT] = [
    3.0, 0.0, 0.244, 0.6411, 0.2242, 0.7416, 0.0, -0.2717, 0.0, 0.0, 0.0, 0.0171, 0.0346, 0.0,
    0.0, 0.0, -0.0305, 0.0244, 1.0, 0.0, 0.0, 0.0275, -0.0076, 0.5,
];

/// Menu cursor tick.
pub const MENU: [f64; PARAM_COUNT] = [
    0.0, 0.0, 0.1394, 0.0, 0.0864, 0.48, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5326, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0, 0.1, 0.0, 0.5,
];

/// Chattering voice blip used for dialogue.
pub const SAY: [f64; PARAM_COUNT] = [
    2.0, 0.03, 0.1, 0.14, 0.25, 0.54, 0.3167, -0.02, 0.3999, 0.0, 0.05, 0.0, 0.0, 0.1021, 0.0684,
    0.0, 0.1287, -0.1816, 1.0, 0.0, 0.0, 0.0, 0.0, 0.46,
];

/// Soft noise thud.
pub const LAND: [f64; PARAM_COUNT] = [
    3.0, 0.0, 0.0118, 0.03, 0.1681, 0.565, 0.0, -0.2343, 0.0, 0.0, 0.0, 0.26, 0.6855, 0.0, 0.0,
    0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.2,
];

/// Rising repeated square chime.
pub const FIXED: [f64; PARAM_COUNT] = [
    0.0, 0.0, 0.2098, 0.0, 0.4725, 0.3665, 0.0, 0.1895, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0067, 0.0,
    0.5437, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.45,
];

/// All built-in presets, in declaration order.
pub const PRESETS: [Preset; 9] = [
    ("jump", JUMP),
    ("hit", HIT),
    ("pickup", PICKUP),
    ("spawn", SPAWN),
    ("explosion", EXPLOSION),
    ("menu", MENU),
    ("say", SAY),
    ("land", LAND),
    ("fixed", FIXED),
];

/// Looks up a built-in preset by name.
pub fn find(name: &str) -> Option<&'static [f64; PARAM_COUNT]> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, values)| values)
}
