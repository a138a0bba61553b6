use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::ControlsSettings;
use crate::player::Intent;

/// What a key press asks for: a player intent or a view-only change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Intent(Intent),
    CursorDown,
    CursorUp,
    SwitchPane,
    /// Enter on the focused list.
    Activate,
}

pub fn map_key(key: KeyEvent, controls: &ControlsSettings) -> Option<Action> {
    let step = i16::from(controls.volume_step);

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Intent(Intent::Close)),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Intent(Intent::Close),
        KeyCode::Char(' ') | KeyCode::Char('p') => Action::Intent(Intent::TogglePlay),
        KeyCode::Char('P') => Action::Intent(Intent::Pause),
        KeyCode::Char('r') => Action::Intent(Intent::Restart),
        KeyCode::Char('h') | KeyCode::Left => Action::Intent(Intent::Previous),
        KeyCode::Char('l') | KeyCode::Right => Action::Intent(Intent::Next),
        KeyCode::Char('f') => Action::Intent(Intent::AddFavorite),
        KeyCode::Char('t') => Action::Intent(Intent::ToggleTrackList),
        KeyCode::Char('F') => Action::Intent(Intent::ToggleFavorites),
        KeyCode::Char('[') => Action::Intent(Intent::CycleSpeed(-1)),
        KeyCode::Char(']') => Action::Intent(Intent::CycleSpeed(1)),
        KeyCode::Char('0') => Action::Intent(Intent::SetSpeed(None)),
        KeyCode::Char('-') => Action::Intent(Intent::NudgeVolume(-step)),
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Intent(Intent::NudgeVolume(step)),
        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Tab => Action::SwitchPane,
        KeyCode::Enter => Action::Activate,
        _ => return None,
    };
    Some(action)
}
