//! Application module: exposes the view model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds list cursors, pane focus
//! and the status message.

mod model;

pub use model::*;
