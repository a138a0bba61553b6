/// A user action, independent of how it was produced (key, mouse, test).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Play,
    Pause,
    /// Play when not playing, pause otherwise.
    TogglePlay,
    /// Seek the current track back to 0 without changing play/pause state.
    Restart,
    Previous,
    Next,
    /// Load and play the playlist entry at this 0-based index.
    SelectTrack(usize),
    /// Load and play the favorites entry at this 0-based index.
    SelectFavorite(usize),
    AddFavorite,
    /// Speed selection as a percentage; `None` clears it back to normal speed.
    SetSpeed(Option<u16>),
    /// Move the speed selection by this many steps along the fixed list.
    CycleSpeed(i8),
    /// Absolute volume slider position, 0..=100.
    SetVolume(u8),
    /// Relative volume slider move.
    NudgeVolume(i16),
    /// Click at column `x` of a progress bar `width` columns wide.
    SeekClick { x: u16, width: u16 },
    ToggleTrackList,
    ToggleFavorites,
    /// The audio output finished the track loaded under `generation`.
    EndOfTrack { generation: u64 },
    /// Release the audio output and shut down.
    Close,
}
