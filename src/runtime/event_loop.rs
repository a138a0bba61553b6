use std::io::Stdout;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioOutput;
use crate::config;
use crate::player::{Intent, Player, PlayerEvent};
use crate::runtime::keymap::{Action, map_key};
use crate::ui;

/// Main terminal event loop: drains player events, draws, and turns input
/// into intents. Returns `Ok(())` once the player is closed.
pub fn run<O: AudioOutput>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &config::Settings,
    player: &mut Player<O>,
    app: &mut App,
    events: &Receiver<PlayerEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut bar = Rect::default();

    loop {
        while let Ok(ev) = events.try_recv() {
            match player.apply_event(ev) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "player event failed");
                    app.set_message(e.to_string());
                }
            }
        }

        app.follow(player.state().current);
        terminal.draw(|f| bar = ui::draw(f, player, app, &settings.ui, &settings.controls))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let closed = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, &settings.controls) {
                    Some(action) => handle_action(action, player, app),
                    None => false,
                }
            }
            Event::Mouse(mouse) => match seek_click(mouse, bar) {
                Some(intent) => apply_intent(intent, player, app),
                None => false,
            },
            _ => false,
        };
        if closed {
            break;
        }
    }

    Ok(())
}

fn handle_action<O: AudioOutput>(action: Action, player: &mut Player<O>, app: &mut App) -> bool {
    let surface = player.surface();
    let (show_tracks, show_favorites) = (surface.show_tracks, surface.show_favorites);
    let len = app.focused_rows(
        show_tracks.then_some(player.tracks().len()),
        show_favorites.then_some(player.favorites().len()),
    );

    match action {
        Action::Intent(intent) => return apply_intent(intent, player, app),
        Action::CursorDown => app.next(len),
        Action::CursorUp => app.prev(len),
        // Only meaningful while both lists are on screen.
        Action::SwitchPane if show_tracks && show_favorites => app.switch_pane(),
        Action::SwitchPane => {}
        Action::Activate => {
            if let Some(intent) = app.activate(len) {
                return apply_intent(intent, player, app);
            }
        }
    }
    false
}

/// Dispatch `intent`, surfacing failures on the status line. Returns true once closed.
fn apply_intent<O: AudioOutput>(intent: Intent, player: &mut Player<O>, app: &mut App) -> bool {
    match player.dispatch(intent) {
        Ok(closed) => {
            app.clear_message();
            closed
        }
        Err(e) => {
            tracing::warn!(?intent, error = %e, "intent failed");
            app.set_message(e.to_string());
            false
        }
    }
}

/// A left click inside the progress bar becomes a seek.
fn seek_click(mouse: MouseEvent, bar: Rect) -> Option<Intent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if !bar.contains(Position::new(mouse.column, mouse.row)) {
        return None;
    }
    Some(Intent::SeekClick {
        x: mouse.column - bar.x,
        width: bar.width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn click_inside_bar_seeks_relative_to_its_left_edge() {
        let bar = Rect::new(1, 7, 40, 1);
        assert_eq!(
            seek_click(click(11, 7), bar),
            Some(Intent::SeekClick { x: 10, width: 40 })
        );
    }

    #[test]
    fn clicks_outside_bar_or_other_buttons_are_ignored() {
        let bar = Rect::new(1, 7, 40, 1);
        assert_eq!(seek_click(click(0, 7), bar), None);
        assert_eq!(seek_click(click(5, 8), bar), None);

        let mut right = click(5, 7);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(seek_click(right, bar), None);
    }
}
