//! The player controller: a state machine over the playlist, the favorites
//! and an `AudioOutput`.
//!
//! Every user action arrives as an `Intent` and goes through
//! `Player::dispatch`. Progress and end-of-track notifications arrive as
//! `PlayerEvent`s on a channel and go through `Player::apply_event`.

mod clock;
mod controller;
mod error;
mod event;
mod intent;
mod rate;
mod state;
mod ticker;

pub use controller::{Player, PlayerOptions};
pub use event::PlayerEvent;
pub use intent::Intent;
pub use rate::{SPEED_CHOICES, is_valid_speed, speed_label};
pub use state::PlaybackState;
