use std::time::Duration;

use crossbeam_channel::Sender;

use crate::audio::AudioOutput;
use crate::config::{EndOfTrack, Settings};
use crate::library::Track;

use super::clock::{progress_fraction, time_text};
use super::error::PlayerError;
use super::event::{PlayerEvent, ProgressSnapshot};
use super::intent::Intent;
use super::rate::{
    cycle_speed, is_valid_speed, nudge_volume, output_volume, playback_rate, seek_target,
};
use super::state::{PlaybackState, PlayerState, Surface};
use super::ticker::Ticker;

/// Startup options for a `Player`.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub initial_volume: u8,
    pub speed: Option<u16>,
    pub end_of_track: EndOfTrack,
    pub poll_period: Duration,
    pub header_text: String,
    pub show_tracks: bool,
    pub show_favorites: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PlayerOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            initial_volume: settings.playback.initial_volume,
            speed: settings.playback.speed,
            end_of_track: settings.playback.end_of_track,
            poll_period: Duration::from_millis(settings.ui.progress_poll_ms.max(1)),
            header_text: settings.ui.header_text.clone(),
            show_tracks: settings.ui.show_tracks,
            show_favorites: settings.ui.show_favorites,
        }
    }
}

/// Transport state machine over the playlist and an audio output.
///
/// States are `Stopped`, `Playing` and `Paused`. Selecting, skipping and
/// end-of-track (when continuing) always land in `Playing` on a freshly
/// loaded track. Anything that needs a track on an empty playlist fails
/// with `PlayerError::NoTrackLoaded` and leaves the state untouched.
pub struct Player<O: AudioOutput> {
    output: O,
    tracks: Vec<Track>,
    favorites: Vec<Track>,
    state: PlayerState,
    surface: Surface,
    options: PlayerOptions,
    events: Sender<PlayerEvent>,
    ticker: Option<Ticker>,
    ticker_generation: u64,
    /// Bumped on every load; end-of-track notices from other loads are stale.
    load_generation: u64,
    /// Whether the output holds the track at `state.current`.
    loaded: bool,
    closed: bool,
}

impl<O: AudioOutput> Player<O> {
    pub fn new(
        mut output: O,
        tracks: Vec<Track>,
        options: PlayerOptions,
        events: Sender<PlayerEvent>,
    ) -> Self {
        if let Err(e) = output.on_end_of_track(events.clone()) {
            tracing::warn!(error = %e, "end-of-track notifications unavailable");
        }

        let mut surface = Surface::new(&options.header_text);
        surface.show_tracks = options.show_tracks;
        surface.show_favorites = options.show_favorites;

        let state = PlayerState {
            current: if tracks.is_empty() { None } else { Some(0) },
            speed: options.speed.filter(|&p| is_valid_speed(p)),
            volume: options.initial_volume.min(100),
            ..PlayerState::default()
        };

        Self {
            output,
            tracks,
            favorites: Vec::new(),
            state,
            surface,
            options,
            events,
            ticker: None,
            ticker_generation: 0,
            load_generation: 0,
            loaded: false,
            closed: false,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn favorites(&self) -> &[Track] {
        &self.favorites
    }

    /// Carry out one intent. Returns `Ok(true)` once the player has been closed.
    pub fn dispatch(&mut self, intent: Intent) -> Result<bool, PlayerError> {
        if self.closed {
            return Ok(true);
        }

        match intent {
            Intent::Play => self.play()?,
            Intent::Pause => self.pause()?,
            Intent::TogglePlay => {
                if self.state.status == PlaybackState::Playing {
                    self.pause()?;
                } else {
                    self.play()?;
                }
            }
            Intent::Restart => self.restart()?,
            Intent::Previous => {
                let index = self.previous_index()?;
                self.load_and_play(index)?;
            }
            Intent::Next => {
                let index = self.next_index()?;
                self.load_and_play(index)?;
            }
            Intent::SelectTrack(n) => self.select_track(n)?,
            Intent::SelectFavorite(n) => self.select_favorite(n)?,
            Intent::AddFavorite => self.add_favorite()?,
            Intent::SetSpeed(selection) => self.set_speed(selection)?,
            Intent::CycleSpeed(steps) => self.set_speed(cycle_speed(self.state.speed, steps))?,
            Intent::SetVolume(slider) => self.set_volume(slider)?,
            Intent::NudgeVolume(delta) => self.set_volume(nudge_volume(self.state.volume, delta))?,
            Intent::SeekClick { x, width } => self.seek_click(x, width)?,
            Intent::ToggleTrackList => self.surface.show_tracks = !self.surface.show_tracks,
            Intent::ToggleFavorites => self.surface.show_favorites = !self.surface.show_favorites,
            Intent::EndOfTrack { generation } => self.end_of_track(generation)?,
            Intent::Close => {
                self.close();
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Apply a notification from the ticker or the audio output.
    pub fn apply_event(&mut self, event: PlayerEvent) -> Result<bool, PlayerError> {
        match event {
            PlayerEvent::Progress(snapshot) => {
                self.apply_progress(snapshot);
                Ok(false)
            }
            PlayerEvent::EndOfTrack { generation } => {
                self.dispatch(Intent::EndOfTrack { generation })
            }
        }
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let index = self.state.current.ok_or(PlayerError::NoTrackLoaded)?;
        if !self.loaded {
            self.load(index)?;
        }

        self.output.set_rate(playback_rate(self.state.speed))?;
        self.start_ticker();
        self.output.play()?;
        self.state.status = PlaybackState::Playing;
        self.surface.now_playing = format!("Now Playing: {}", self.tracks[index].display);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        if !self.loaded {
            return Err(PlayerError::NoTrackLoaded);
        }
        self.cancel_ticker();
        self.output.pause()?;
        if self.state.status == PlaybackState::Playing {
            self.state.status = PlaybackState::Paused;
        }
        self.state.elapsed = self.output.elapsed();
        self.refresh_time();
        Ok(())
    }

    fn restart(&mut self) -> Result<(), PlayerError> {
        if !self.loaded {
            return Err(PlayerError::NoTrackLoaded);
        }
        self.output.seek(Duration::ZERO)?;
        self.state.elapsed = Duration::ZERO;
        self.refresh_time();
        Ok(())
    }

    fn previous_index(&self) -> Result<usize, PlayerError> {
        let current = self.state.current.ok_or(PlayerError::NoTrackLoaded)?;
        Ok(if current == 0 {
            self.tracks.len() - 1
        } else {
            current - 1
        })
    }

    fn next_index(&self) -> Result<usize, PlayerError> {
        let current = self.state.current.ok_or(PlayerError::NoTrackLoaded)?;
        Ok(if current + 1 >= self.tracks.len() {
            0
        } else {
            current + 1
        })
    }

    fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if self.tracks.is_empty() {
            return Err(PlayerError::NoTrackLoaded);
        }
        if index >= self.tracks.len() {
            return Err(PlayerError::TrackOutOfRange(index));
        }
        self.load_and_play(index)
    }

    fn select_favorite(&mut self, n: usize) -> Result<(), PlayerError> {
        let favorite = self
            .favorites
            .get(n)
            .ok_or(PlayerError::FavoriteOutOfRange(n))?;
        let index = self
            .tracks
            .iter()
            .position(|t| t.path == favorite.path)
            // Unreachable while the playlist is fixed after startup.
            .ok_or_else(|| PlayerError::FavoriteMissing(favorite.path.clone()))?;
        self.load_and_play(index)
    }

    fn add_favorite(&mut self) -> Result<(), PlayerError> {
        let index = self.state.current.ok_or(PlayerError::NoTrackLoaded)?;
        let track = self.tracks[index].clone();
        tracing::info!(track = %track.name, "added to favorites");
        self.surface.favorites.push(track.display.clone());
        self.favorites.push(track);
        Ok(())
    }

    fn set_speed(&mut self, selection: Option<u16>) -> Result<(), PlayerError> {
        if let Some(percent) = selection {
            if !is_valid_speed(percent) {
                return Err(PlayerError::InvalidSpeed(percent));
            }
        }
        self.state.speed = selection;
        self.output.set_rate(playback_rate(selection))?;
        Ok(())
    }

    fn set_volume(&mut self, slider: u8) -> Result<(), PlayerError> {
        self.state.volume = slider.min(100);
        self.output.set_volume(output_volume(self.state.volume))?;
        Ok(())
    }

    fn seek_click(&mut self, x: u16, width: u16) -> Result<(), PlayerError> {
        if !self.loaded {
            return Err(PlayerError::NoTrackLoaded);
        }
        let Some(total) = self.state.total else {
            return Ok(());
        };
        let Some(target) = seek_target(x, width, total) else {
            return Ok(());
        };

        self.output.seek(target)?;
        self.state.elapsed = target;
        self.refresh_time();
        // A ticker that saw the end has stopped; seeking back needs a new one.
        if self.state.status == PlaybackState::Playing && self.ticker.is_none() {
            self.start_ticker();
        }
        Ok(())
    }

    fn end_of_track(&mut self, generation: u64) -> Result<(), PlayerError> {
        // Late notification for a track the user already moved away from.
        if !self.loaded || generation != self.load_generation {
            tracing::debug!(
                generation,
                live = self.load_generation,
                "dropping stale end of track"
            );
            return Ok(());
        }
        if self.state.status != PlaybackState::Playing {
            return Ok(());
        }
        let next = self.next_index()?;

        match self.options.end_of_track {
            EndOfTrack::Continue => self.load_and_play(next),
            EndOfTrack::AdvanceOnly => {
                self.cancel_ticker();
                self.state.current = Some(next);
                self.state.status = PlaybackState::Stopped;
                self.loaded = false;
                Ok(())
            }
        }
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.cancel_ticker();
        self.output.dispose();
        self.closed = true;
        self.state.status = PlaybackState::Stopped;
        tracing::info!("player closed");
    }

    fn load_and_play(&mut self, index: usize) -> Result<(), PlayerError> {
        self.load(index)?;
        self.play()
    }

    /// Replace the loaded track with playlist entry `index`, paused at 0.
    fn load(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.tracks.len() {
            return Err(PlayerError::TrackOutOfRange(index));
        }
        self.cancel_ticker();
        self.output.stop()?;

        self.loaded = false;
        self.state.current = Some(index);
        self.state.status = PlaybackState::Stopped;
        self.state.elapsed = Duration::ZERO;

        self.load_generation += 1;
        let track = &self.tracks[index];
        self.state.total = track.duration;
        self.output.load(track, self.load_generation)?;
        self.output.set_volume(output_volume(self.state.volume))?;
        self.loaded = true;
        self.state.total = self.output.duration().or(track.duration);
        tracing::info!(index, track = %track.name, "track loaded");

        self.refresh_time();
        Ok(())
    }

    fn apply_progress(&mut self, snapshot: ProgressSnapshot) {
        let live = self.ticker.as_ref().map(Ticker::generation);
        if live != Some(snapshot.generation) {
            tracing::trace!(generation = snapshot.generation, "dropping stale progress");
            return;
        }

        self.state.elapsed = snapshot.elapsed;
        if snapshot.total.is_some() {
            self.state.total = snapshot.total;
        }
        self.refresh_time();

        if snapshot.is_complete() {
            self.cancel_ticker();
        }
    }

    fn refresh_time(&mut self) {
        self.surface.time_text = time_text(self.state.elapsed, self.state.total);
        self.surface.progress = progress_fraction(self.state.elapsed, self.state.total);
    }

    fn start_ticker(&mut self) {
        self.cancel_ticker();
        self.ticker_generation += 1;
        self.ticker = Some(Ticker::spawn(
            self.ticker_generation,
            self.options.poll_period,
            self.output.playback_handle(),
            self.events.clone(),
        ));
    }

    fn cancel_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_polling(&self) -> bool {
        self.ticker.is_some()
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.ticker_generation
    }

    #[cfg(test)]
    pub(crate) fn load_generation(&self) -> u64 {
        self.load_generation
    }
}

impl<O: AudioOutput> Drop for Player<O> {
    fn drop(&mut self) {
        self.close();
    }
}
