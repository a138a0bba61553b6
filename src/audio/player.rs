use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::library::Track;
use crate::player::PlayerEvent;

use super::AudioError;
use super::output::AudioOutput;
use super::sink::open_track;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, PlaybackHandle, PlaybackInfo};

/// `rodio`-backed audio output living on its own thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    playback: PlaybackHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Open the default output device and start the audio thread.
    pub fn new() -> Result<Self, AudioError> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), AudioError>>(1);
        let playback_info: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));

        let audio_handle = spawn_audio_thread(rx, playback_info.clone(), ready_tx);
        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = audio_handle.join();
                return Err(e);
            }
            Err(_) => return Err(AudioError::Disconnected),
        }

        Ok(Self {
            tx,
            playback: playback_info,
            join: Mutex::new(Some(audio_handle)),
        })
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), AudioError> {
        self.tx.send(cmd).map_err(|_| AudioError::Disconnected)
    }
}

impl AudioOutput for AudioPlayer {
    fn load(&mut self, track: &Track, generation: u64) -> Result<(), AudioError> {
        let (source, total) = open_track(track)?;

        // Publish the new track right away so readers never pair the old
        // position with the new length.
        if let Ok(mut info) = self.playback.lock() {
            *info = PlaybackInfo {
                loaded: true,
                elapsed: Duration::ZERO,
                total,
            };
        }
        self.send(AudioCmd::Load {
            source,
            total,
            generation,
        })
    }

    fn play(&mut self) -> Result<(), AudioError> {
        self.send(AudioCmd::Play)
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        self.send(AudioCmd::Pause)
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        self.send(AudioCmd::Stop)
    }

    fn seek(&mut self, position: Duration) -> Result<(), AudioError> {
        self.send(AudioCmd::Seek(position))
    }

    fn set_rate(&mut self, rate: f32) -> Result<(), AudioError> {
        self.send(AudioCmd::SetSpeed(rate))
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        self.send(AudioCmd::SetVolume(volume.clamp(0.0, 1.0)))
    }

    fn on_end_of_track(
        &mut self,
        notify: crossbeam_channel::Sender<PlayerEvent>,
    ) -> Result<(), AudioError> {
        self.send(AudioCmd::Subscribe(notify))
    }

    fn playback_handle(&self) -> PlaybackHandle {
        self.playback.clone()
    }

    fn dispose(&mut self) {
        let Ok(mut j) = self.join.lock() else {
            return;
        };
        if let Some(h) = j.take() {
            let _ = self.tx.send(AudioCmd::Quit);
            let _ = h.join();
            tracing::debug!("audio output released");
        }
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.dispose();
    }
}
