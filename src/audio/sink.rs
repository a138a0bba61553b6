//! Opening and decoding track files for the audio thread.
//!
//! Decoding starts on the caller's thread so that unreadable or
//! undecodable files are reported by `load` instead of the audio thread.

use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, Source};

use crate::library::Track;

use super::AudioError;
use super::types::TrackSource;

/// Open `track` and return its decoder plus its total length.
///
/// The length reported by the decoder wins; the length read from the file's
/// tags at scan time is the fallback.
pub(super) fn open_track(track: &Track) -> Result<(TrackSource, Option<Duration>), AudioError> {
    let file = File::open(&track.path).map_err(|source| AudioError::Open {
        path: track.path.clone(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: track.path.clone(),
        source,
    })?;

    let total = decoder.total_duration().or(track.duration);
    Ok((decoder, total))
}
