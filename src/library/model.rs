use std::path::PathBuf;
use std::time::Duration;

/// One playable audio file. Immutable once enumerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    /// File name including extension, as listed in the directory.
    pub name: String,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Duration read from the file's properties, when available.
    pub duration: Option<Duration>,
    pub display: String,
}
