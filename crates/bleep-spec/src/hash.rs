//! BLAKE3 hashing and seed derivation for parameter sets.
//!
//! The noise oscillator is the only random part of synthesis. Deriving its
//! seed from the parameters themselves keeps every sound reproducible without
//! the caller having to pick a seed.

use crate::params::ParameterSet;

/// Hashes the normalized positional vector.
///
/// Each value is hashed as its little-endian IEEE 754 bit pattern.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn params_hash(params: &ParameterSet) -> String {
    params_digest(params).to_hex().to_string()
}

/// Derives the noise seed for a parameter set.
///
/// # Example
/// ```
/// use bleep_spec::{hash::derive_params_seed, ParameterSet};
///
/// let a = ParameterSet::normalize(&[3.0, 0.0, 0.2]);
/// let b = ParameterSet::normalize(&[3.0, 0.0, 0.3]);
/// assert_eq!(derive_params_seed(&a), derive_params_seed(&a.clone()));
/// assert_ne!(derive_params_seed(&a), derive_params_seed(&b));
/// ```
pub fn derive_params_seed(params: &ParameterSet) -> u32 {
    let hash = params_digest(params);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Derives an independent seed for a named sound from a base seed.
pub fn derive_sound_seed(base_seed: u32, name: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + name.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(name.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn params_digest(params: &ParameterSet) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for value in params.to_vec() {
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_hash_format() {
        let hash = params_hash(&ParameterSet::normalize(&[]));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_equal_vectors_hash_equal() {
        // trailing zeros and missing entries normalize identically
        let a = ParameterSet::normalize(&[1.0, 0.0, 0.5]);
        let b = ParameterSet::normalize(&[1.0, 0.0, 0.5, 0.0, 0.0]);
        assert_eq!(params_hash(&a), params_hash(&b));
        assert_eq!(derive_params_seed(&a), derive_params_seed(&b));
    }

    #[test]
    fn test_sound_seed_derivation() {
        let jump = derive_sound_seed(42, "jump");
        assert_eq!(jump, derive_sound_seed(42, "jump"));
        assert_ne!(jump, derive_sound_seed(42, "hit"));
        assert_ne!(jump, derive_sound_seed(43, "jump"));
    }
}
