use std::sync::mpsc::{Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Sender;
use rodio::{OutputStreamBuilder, Sink};

use crate::player::PlayerEvent;

use super::AudioError;
use super::types::{AudioCmd, PlaybackHandle};

/// How often the thread wakes up to publish position and check for track end.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spawn the thread owning the output stream.
///
/// The result of opening the default output device is reported once on `ready`
/// before any command is processed.
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    ready: SyncSender<Result<(), AudioError>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(e) => {
                let _ = ready.send(Err(AudioError::NoOutputDevice(e.to_string())));
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which would
        // scribble over the terminal UI.
        stream.log_on_drop(false);
        let _ = ready.send(Ok(()));

        let mut sink: Option<Sink> = None;
        let mut total: Option<Duration> = None;
        let mut playing = false;
        let mut end_reported = false;
        let mut loaded_generation: u64 = 0;
        let mut speed: f32 = 1.0;
        let mut volume: f32 = 0.5;
        let mut notify: Option<Sender<PlayerEvent>> = None;

        loop {
            match rx.recv_timeout(POLL_INTERVAL) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load {
                        source,
                        total: t,
                        generation,
                    } => {
                        if let Some(old) = sink.take() {
                            old.stop();
                        }
                        let new_sink = Sink::connect_new(stream.mixer());
                        new_sink.pause();
                        new_sink.set_speed(speed);
                        new_sink.set_volume(volume);
                        new_sink.append(source);

                        sink = Some(new_sink);
                        total = t;
                        loaded_generation = generation;
                        playing = false;
                        end_reported = false;
                    }
                    AudioCmd::Play => {
                        if let Some(ref s) = sink {
                            s.play();
                            playing = true;
                        }
                    }
                    AudioCmd::Pause => {
                        if let Some(ref s) = sink {
                            s.pause();
                        }
                        playing = false;
                    }
                    AudioCmd::Stop => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        total = None;
                        playing = false;
                        end_reported = false;
                    }
                    AudioCmd::Seek(position) => {
                        if let Some(ref s) = sink {
                            match s.try_seek(position) {
                                Ok(()) => end_reported = false,
                                Err(e) => {
                                    tracing::warn!(error = %e, ?position, "seek failed");
                                }
                            }
                        }
                    }
                    AudioCmd::SetSpeed(rate) => {
                        speed = rate;
                        if let Some(ref s) = sink {
                            s.set_speed(rate);
                        }
                    }
                    AudioCmd::SetVolume(v) => {
                        volume = v;
                        if let Some(ref s) = sink {
                            s.set_volume(v);
                        }
                    }
                    AudioCmd::Subscribe(tx) => {
                        notify = Some(tx);
                    }
                    AudioCmd::Quit => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        if let Ok(mut info) = playback_info.lock() {
                            info.loaded = false;
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // A drained sink while playing means the track reached its end.
            if let Some(ref s) = sink {
                if playing && s.empty() && !end_reported {
                    playing = false;
                    end_reported = true;
                    tracing::debug!(generation = loaded_generation, "track finished");
                    if let Some(ref tx) = notify {
                        let _ = tx.send(PlayerEvent::EndOfTrack {
                            generation: loaded_generation,
                        });
                    }
                }
            }

            if let Ok(mut info) = playback_info.lock() {
                info.loaded = sink.is_some();
                info.total = total;
                info.elapsed = match (&sink, total) {
                    (Some(_), Some(t)) if end_reported => t,
                    (Some(s), Some(t)) => s.get_pos().min(t),
                    (Some(s), None) => s.get_pos(),
                    (None, _) => Duration::ZERO,
                };
            }
        }
    })
}
