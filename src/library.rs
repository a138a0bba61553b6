//! Music library: the `Track` type and the startup directory scan.
//!
//! The playlist is built once from the direct children of the configured
//! music directory and never changes afterwards.

mod display;
mod model;
mod scan;

use std::path::PathBuf;

use thiserror::Error;

pub use model::Track;
pub use scan::scan;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// The music directory is absent or is not a directory.
    #[error("music directory {0:?} does not exist or is not a directory")]
    MissingDir(PathBuf),
}
