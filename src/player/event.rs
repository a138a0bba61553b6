use std::time::Duration;

/// One progress reading taken by the ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    /// Identifies the ticker that took the reading.
    pub generation: u64,
    pub elapsed: Duration,
    pub total: Option<Duration>,
}

impl ProgressSnapshot {
    /// True once the reading has reached the end of the track.
    pub fn is_complete(&self) -> bool {
        self.total.is_some_and(|total| self.elapsed >= total)
    }
}

/// Notifications flowing from background threads to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Progress(ProgressSnapshot),
    /// The track loaded under `generation` played to its end.
    EndOfTrack { generation: u64 },
}
