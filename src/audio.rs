//! Audio output: the playback capability the player drives.
//!
//! `AudioOutput` is the seam between the player state machine and the
//! platform audio engine. `AudioPlayer` implements it on top of `rodio`,
//! running the output stream on a dedicated thread fed by `AudioCmd`s.

mod output;
mod player;
mod sink;
mod thread;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use output::AudioOutput;
pub use player::AudioPlayer;
pub use types::{PlaybackHandle, PlaybackInfo};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    NoOutputDevice(String),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("audio thread is no longer running")]
    Disconnected,
}
