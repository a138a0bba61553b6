//! Audio-related small types and handles.
//!
//! This module defines the commands understood by the audio thread and the
//! playback snapshot it shares with the rest of the program.

use std::fs::File;
use std::io::BufReader;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossbeam_channel::Sender;
use rodio::Decoder;

use crate::player::PlayerEvent;

pub(super) type TrackSource = Decoder<BufReader<File>>;

pub(super) enum AudioCmd {
    /// Replace the current sink with a paused one holding `source`.
    Load {
        source: TrackSource,
        total: Option<Duration>,
        generation: u64,
    },
    /// Start or resume the loaded track.
    Play,
    /// Pause without rewinding.
    Pause,
    /// Drop the loaded track.
    Stop,
    /// Jump to an absolute position in the loaded track.
    Seek(Duration),
    /// Playback rate, 1.0 = normal.
    SetSpeed(f32),
    /// Output volume in 0.0..=1.0.
    SetVolume(f32),
    /// Where to report that the loaded track played to its end.
    Subscribe(Sender<PlayerEvent>),
    /// Stop playback and leave the thread.
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Playback snapshot published by the audio thread.
pub struct PlaybackInfo {
    /// Whether a track is loaded into the output.
    pub loaded: bool,
    /// Current position in the loaded track.
    pub elapsed: Duration,
    /// Total length of the loaded track, when known.
    pub total: Option<Duration>,
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
