//! Player state and the UI-visible surface derived from it.

use std::time::Duration;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Transport state owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Index into the playlist; `None` only while the playlist is empty.
    pub current: Option<usize>,
    pub status: PlaybackState,
    /// Speed selection in percent; `None` means normal speed.
    pub speed: Option<u16>,
    /// Volume slider position, 0..=100.
    pub volume: u8,
    pub elapsed: Duration,
    pub total: Option<Duration>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current: None,
            status: PlaybackState::Stopped,
            speed: None,
            volume: 50,
            elapsed: Duration::ZERO,
            total: None,
        }
    }
}

/// What the UI shows. Updated only by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub now_playing: String,
    pub time_text: String,
    /// Progress bar fill, 0.0..=1.0.
    pub progress: f64,
    pub show_tracks: bool,
    pub show_favorites: bool,
    /// Display names of the favorites, in insertion order.
    pub favorites: Vec<String>,
}

impl Surface {
    pub fn new(header_text: &str) -> Self {
        Self {
            now_playing: header_text.to_string(),
            time_text: "00:00 / 00:00".to_string(),
            progress: 0.0,
            show_tracks: false,
            show_favorites: false,
            favorites: Vec::new(),
        }
    }
}
