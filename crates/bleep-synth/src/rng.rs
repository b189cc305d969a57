//! Deterministic RNG using PCG32.
//!
//! The noise oscillator is the only consumer of randomness. Routing it through
//! a seeded PCG32 keeps renders byte-identical for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws one uniform noise value in `[-1, 1]`.
pub fn noise_value(rng: &mut Pcg32) -> f64 {
    rng.gen_range(-1.0..=1.0)
}
