use std::time::Duration;

use crossbeam_channel::Sender;

use crate::library::Track;
use crate::player::PlayerEvent;

use super::AudioError;
use super::types::PlaybackHandle;

/// The playback capability driven by the player.
///
/// Calls are non-blocking requests. Position and length are read from the
/// shared `PlaybackHandle` snapshot, which the implementation keeps current.
pub trait AudioOutput {
    /// Load `track`, replacing whatever was loaded. The new track starts paused.
    ///
    /// End-of-track notices for this load carry `generation`.
    fn load(&mut self, track: &Track, generation: u64) -> Result<(), AudioError>;
    fn play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self) -> Result<(), AudioError>;
    fn stop(&mut self) -> Result<(), AudioError>;
    fn seek(&mut self, position: Duration) -> Result<(), AudioError>;
    fn set_rate(&mut self, rate: f32) -> Result<(), AudioError>;
    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError>;

    /// Register where `PlayerEvent::EndOfTrack` is delivered.
    fn on_end_of_track(&mut self, notify: Sender<PlayerEvent>) -> Result<(), AudioError>;

    /// Shared playback snapshot, readable from any thread.
    fn playback_handle(&self) -> PlaybackHandle;

    /// Release the output. Calls after the first one do nothing.
    fn dispose(&mut self);

    fn elapsed(&self) -> Duration {
        self.playback_handle()
            .lock()
            .map(|info| info.elapsed)
            .unwrap_or_default()
    }

    fn duration(&self) -> Option<Duration> {
        self.playback_handle()
            .lock()
            .ok()
            .filter(|info| info.loaded)
            .and_then(|info| info.total)
    }
}
