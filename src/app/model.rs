//! Application model types: `App` and `Pane`.
//!
//! `App` holds the view-only state of the terminal UI: list cursors, which
//! pane has focus and the last diagnostic message. Playback state lives in
//! the player; the app only turns cursor positions into intents.

use crate::player::Intent;

/// The list pane that receives cursor keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Tracks,
    Favorites,
}

/// The main application model.
#[derive(Debug, Default)]
pub struct App {
    pub focus: Pane,
    pub track_cursor: usize,
    pub favorite_cursor: usize,
    pub current_dir: Option<String>,
    /// Last error or notice shown on the status line.
    pub message: Option<String>,

    /// Playlist index the track cursor last followed.
    followed: Option<usize>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Cursor of the focused pane.
    pub fn cursor(&self) -> usize {
        match self.focus {
            Pane::Tracks => self.track_cursor,
            Pane::Favorites => self.favorite_cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Tracks => &mut self.track_cursor,
            Pane::Favorites => &mut self.favorite_cursor,
        }
    }

    /// Move the focused cursor down one row in a list of `len` rows, wrapping.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let c = self.cursor_mut();
        *c = (*c + 1) % len;
    }

    /// Move the focused cursor up one row in a list of `len` rows, wrapping.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let c = self.cursor_mut();
        *c = if *c == 0 { len - 1 } else { (*c - 1).min(len - 1) };
    }

    /// Rows the cursor keys act on. `None` marks a hidden pane.
    ///
    /// When the focused pane is hidden and the other one is shown, focus
    /// moves to the shown one. A hidden pane has no rows, so cursor moves
    /// and Enter do nothing on it.
    pub fn focused_rows(&mut self, tracks: Option<usize>, favorites: Option<usize>) -> usize {
        let (focused, other) = match self.focus {
            Pane::Tracks => (tracks, favorites),
            Pane::Favorites => (favorites, tracks),
        };
        match (focused, other) {
            (Some(rows), _) => rows,
            (None, Some(rows)) => {
                self.switch_pane();
                rows
            }
            (None, None) => 0,
        }
    }

    pub fn switch_pane(&mut self) {
        self.focus = match self.focus {
            Pane::Tracks => Pane::Favorites,
            Pane::Favorites => Pane::Tracks,
        };
    }

    /// The intent for pressing Enter on the focused pane, if its list has rows.
    pub fn activate(&self, len: usize) -> Option<Intent> {
        if len == 0 {
            return None;
        }
        let n = self.cursor().min(len - 1);
        Some(match self.focus {
            Pane::Tracks => Intent::SelectTrack(n),
            Pane::Favorites => Intent::SelectFavorite(n),
        })
    }

    /// Move the track cursor onto the loaded track whenever it changes.
    pub fn follow(&mut self, current: Option<usize>) {
        if current == self.followed {
            return;
        }
        self.followed = current;
        if let Some(idx) = current {
            self.track_cursor = idx;
        }
    }
}
