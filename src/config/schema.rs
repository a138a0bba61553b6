use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/dankira/config.toml` or
/// `~/.config/dankira/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `DANKIRA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory listed at startup. Only its direct children are considered.
    pub dir: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when listing the directory.
    pub follow_links: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,

    /// Which fields to use to build `Track.display`.
    ///
    /// Example: ["artist", "title"] -> "Artist - Title"
    pub display_fields: Vec<TrackDisplayField>,
    /// Separator used to join `display_fields`.
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("music"),
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: true,
            display_fields: vec![TrackDisplayField::Filename],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume slider position at startup, 0..=100.
    pub initial_volume: u8,
    /// Speed selection at startup, as a percentage. Unset means normal speed.
    pub speed: Option<u16>,
    /// What happens when a track plays to its end.
    pub end_of_track: EndOfTrack,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 50,
            speed: None,
            end_of_track: EndOfTrack::Continue,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndOfTrack {
    /// Advance to the next track (wrapping) and keep playing.
    #[serde(alias = "continue_playing", alias = "auto-advance")]
    Continue,
    /// Advance the index only; playback stops until the user presses play.
    #[serde(alias = "advance_only", alias = "stall")]
    AdvanceOnly,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered in the header box before anything has played.
    pub header_text: String,
    /// Period of the progress polling ticker (milliseconds).
    pub progress_poll_ms: u64,
    /// Whether the track list starts visible.
    pub show_tracks: bool,
    /// Whether the favorites list starts visible.
    pub show_favorites: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "MP3 Player".to_string(),
            progress_poll_ms: 1000,
            show_tracks: false,
            show_favorites: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Slider points moved by one press of `-` / `+`.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file path. Defaults to `dankira.log` in the system temp dir.
    pub file: Option<PathBuf>,
    /// `tracing` filter directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    /// File name including its extension.
    #[serde(alias = "file-name", alias = "file_name", alias = "name")]
    Filename,
    /// File name without extension.
    Stem,
    Title,
    Artist,
    Album,
    Path,
}
