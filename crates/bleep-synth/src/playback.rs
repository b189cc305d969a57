//! Playable sound handles.
//!
//! The synthesizer never touches an audio device. A [`SoundHandle`] pairs a
//! rendered asset with whatever [`PlaybackSink`] the host platform provides,
//! and exposes the one operation game code needs: play it.

use std::fmt;
use std::sync::Arc;

use crate::encode::RenderedAsset;

/// Platform audio facility that plays rendered assets.
///
/// Implementations decide scheduling, mixing and volume; `play` is
/// fire-and-forget.
pub trait PlaybackSink: Send + Sync {
    /// Starts playing `asset`.
    fn play(&self, asset: &RenderedAsset);
}

/// A shareable, replayable sound.
#[derive(Clone)]
pub struct SoundHandle {
    asset: Arc<RenderedAsset>,
    sink: Arc<dyn PlaybackSink>,
}

impl SoundHandle {
    /// Wraps an asset for playback through `sink`.
    pub fn new(asset: RenderedAsset, sink: Arc<dyn PlaybackSink>) -> Self {
        Self {
            asset: Arc::new(asset),
            sink,
        }
    }

    /// Triggers playback.
    pub fn play(&self) {
        self.sink.play(&self.asset);
    }

    /// The underlying asset.
    pub fn asset(&self) -> &RenderedAsset {
        &self.asset
    }
}

impl fmt::Debug for SoundHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundHandle")
            .field("pcm_hash", &self.asset.pcm_hash)
            .field("samples_written", &self.asset.samples_written)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::build;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        played: Mutex<Vec<String>>,
    }

    impl PlaybackSink for RecordingSink {
        fn play(&self, asset: &RenderedAsset) {
            if let Ok(mut played) = self.played.lock() {
                played.push(asset.pcm_hash.clone());
            }
        }
    }

    #[test]
    fn test_play_hands_asset_to_sink() {
        let sink = Arc::new(RecordingSink::default());
        let asset = build(&[0.0, 0.0, 0.1, 0.0, 0.1, 0.3]);
        let hash = asset.pcm_hash.clone();
        let handle = SoundHandle::new(asset, sink.clone());

        handle.play();
        handle.clone().play();

        let played = sink.played.lock().expect("lock");
        assert_eq!(*played, vec![hash.clone(), hash]);
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SoundHandle>();
        assert_send_sync::<RenderedAsset>();
    }
}
