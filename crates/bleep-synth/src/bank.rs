//! Baking sound banks into rendered assets.

use std::collections::BTreeMap;
use std::sync::Arc;

use bleep_spec::hash::{derive_params_seed, derive_sound_seed};
use bleep_spec::SoundBank;
use tracing::debug;

use crate::encode::{build_params, RenderedAsset};
use crate::playback::{PlaybackSink, SoundHandle};

/// Renders every sound in `bank`, keyed by name.
///
/// Without a base seed each sound's noise seed comes from its parameters.
/// With one, each sound gets a seed derived from the base seed and its name.
pub fn bake(bank: &SoundBank, base_seed: Option<u32>) -> BTreeMap<String, RenderedAsset> {
    let assets: BTreeMap<_, _> = bank
        .iter()
        .map(|(name, params)| {
            let seed = match base_seed {
                Some(base) => derive_sound_seed(base, name),
                None => derive_params_seed(&params),
            };
            (name.to_string(), build_params(params, seed))
        })
        .collect();

    debug!(sounds = assets.len(), "baked sound bank");
    assets
}

/// Renders every sound in `bank` and wraps each in a handle playing through
/// `sink`.
pub fn bake_handles(
    bank: &SoundBank,
    base_seed: Option<u32>,
    sink: Arc<dyn PlaybackSink>,
) -> BTreeMap<String, SoundHandle> {
    bake(bank, base_seed)
        .into_iter()
        .map(|(name, asset)| (name, SoundHandle::new(asset, Arc::clone(&sink))))
        .collect()
}
