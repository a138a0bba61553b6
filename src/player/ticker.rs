//! Periodic progress polling.
//!
//! A `Ticker` owns one thread that reads the shared playback snapshot on a
//! fixed period and pushes `PlayerEvent::Progress` to the UI loop. Dropping
//! or cancelling the ticker stops the thread before returning.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, bounded, select, tick};

use crate::audio::PlaybackHandle;

use super::event::{PlayerEvent, ProgressSnapshot};

pub struct Ticker {
    generation: u64,
    stop: Option<Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start polling `source` every `period`. The first reading is taken immediately.
    pub fn spawn(
        generation: u64,
        period: Duration,
        source: PlaybackHandle,
        events: Sender<PlayerEvent>,
    ) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(0);

        let join = thread::spawn(move || {
            if !publish(generation, &source, &events) {
                return;
            }
            let ticks = tick(period);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticks) -> _ => {
                        if !publish(generation, &source, &events) {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            generation,
            stop: Some(stop_tx),
            join: Some(join),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the polling thread and wait for it to exit.
    pub fn cancel(&mut self) {
        // Dropping the sender disconnects `stop_rx`, which wakes the select.
        self.stop.take();
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Take one reading and send it. Returns false once polling should end.
fn publish(generation: u64, source: &PlaybackHandle, events: &Sender<PlayerEvent>) -> bool {
    let snapshot = match source.lock() {
        Ok(info) => ProgressSnapshot {
            generation,
            elapsed: info.elapsed,
            total: info.total,
        },
        Err(_) => return false,
    };

    if events.send(PlayerEvent::Progress(snapshot)).is_err() {
        return false;
    }
    !snapshot.is_complete()
}
