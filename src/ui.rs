//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. It only
//! reads the player's `Surface` and state; all changes go through intents.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Pane};
use crate::audio::AudioOutput;
use crate::config::{ControlsSettings, UiSettings};
use crate::player::{PlaybackState, Player, speed_label};

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space/p", "play/pause");
    map.insert("P", "pause");
    map.insert("r", "restart");
    map.insert("h/l", "prev/next song");
    map.insert("j/k", "up/down");
    map.insert("enter", "play selected");
    map.insert("tab", "switch list");
    map.insert("f", "add favorite");
    map.insert("t/F", "tracks/favorites");
    map.insert("[/]", "speed");
    map.insert("0", "normal speed");
    // -/+ is filled in from config.
    map.insert("click", "seek");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the volume step.
fn controls_text(volume_step: u8) -> String {
    let order = [
        "space/p", "P", "r", "h/l", "j/k", "enter", "tab", "f", "t/F", "[/]", "0", "-/+",
        "click", "q",
    ];
    order
        .iter()
        .filter_map(|k| {
            if *k == "-/+" {
                Some(format!("[-/+] volume -/+{volume_step}"))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{k}] {v}"))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

fn status_text<O: AudioOutput>(player: &Player<O>, app: &App) -> String {
    let state = player.state();
    let mut parts: Vec<String> = vec![player.surface().time_text.clone()];

    parts.push(
        match state.status {
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
            PlaybackState::Stopped => "Stopped",
        }
        .to_string(),
    );
    parts.push(speed_label(state.speed));
    parts.push(format!("VOL: {}", state.volume));

    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {dir}"));
    }
    if let Some(msg) = &app.message {
        parts.push(msg.clone());
    }

    parts.join(" • ")
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

fn draw_tracks<O: AudioOutput>(frame: &mut Frame, area: Rect, player: &Player<O>, app: &App) {
    let current = player.state().current;
    let items: Vec<ListItem> = player
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if Some(i) == current {
                ListItem::new(format!("♪ {}", t.display)).bold()
            } else {
                ListItem::new(format!("  {}", t.display))
            }
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.track_cursor.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(pane_block(" tracks ", app.focus == Pane::Tracks))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_favorites<O: AudioOutput>(frame: &mut Frame, area: Rect, player: &Player<O>, app: &App) {
    let names = &player.surface().favorites;
    let items: Vec<ListItem> = names.iter().map(|n| ListItem::new(n.as_str())).collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.favorite_cursor.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(pane_block(" favorites ", app.focus == Pane::Favorites))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into `frame`.
///
/// Returns the inner area of the progress bar so mouse clicks can be mapped
/// onto it.
pub fn draw<O: AudioOutput>(
    frame: &mut Frame,
    player: &Player<O>,
    app: &App,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> Rect {
    let surface = player.surface();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(surface.now_playing.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" dankira ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(player, app))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    // Progress bar
    let bar_block = Block::default().borders(Borders::ALL).title(" progress ");
    let bar_area = bar_block.inner(chunks[2]);
    let gauge = Gauge::default()
        .block(bar_block)
        .ratio(surface.progress.clamp(0.0, 1.0))
        .label(surface.time_text.as_str());
    frame.render_widget(gauge, chunks[2]);

    // Lists
    match (surface.show_tracks, surface.show_favorites) {
        (true, true) => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[3]);
            draw_tracks(frame, halves[0], player, app);
            draw_favorites(frame, halves[1], player, app);
        }
        (true, false) => draw_tracks(frame, chunks[3], player, app),
        (false, true) => draw_favorites(frame, chunks[3], player, app),
        (false, false) => {
            let hint = if player.tracks().is_empty() {
                format!("{} (no tracks found)", ui_settings.header_text)
            } else {
                "[t] show tracks | [F] show favorites".to_string()
            };
            let placeholder = Paragraph::new(hint)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, chunks[3]);
        }
    }

    let footer = Paragraph::new(controls_text(controls_settings.volume_step))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    bar_area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_volume_step() {
        let text = controls_text(7);
        assert!(text.starts_with("[space/p] play/pause"));
        assert!(text.contains("[-/+] volume -/+7"));
        assert!(text.ends_with("[q] quit"));
    }
}
