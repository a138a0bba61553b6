use std::path::PathBuf;

use thiserror::Error;

use crate::audio::AudioError;

/// Why an intent could not be carried out. None of these are fatal.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no track loaded")]
    NoTrackLoaded,
    #[error("track {0} is not in the playlist")]
    TrackOutOfRange(usize),
    #[error("favorite {0} does not exist")]
    FavoriteOutOfRange(usize),
    #[error("favorite {0:?} is no longer in the playlist")]
    FavoriteMissing(PathBuf),
    #[error("unsupported speed {0}%")]
    InvalidSpeed(u16),
    #[error(transparent)]
    Audio(#[from] AudioError),
}
