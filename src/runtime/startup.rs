use crate::config;
use crate::library::{self, Track};

/// Build the playlist from the configured directory.
///
/// A missing or empty directory is not fatal: the player starts with an
/// empty playlist and reports `NoTrackLoaded` on transport keys.
pub fn load_library(settings: &config::Settings) -> Vec<Track> {
    let dir = &settings.library.dir;
    match library::scan(dir, &settings.library) {
        Ok(tracks) => {
            if tracks.is_empty() {
                tracing::warn!(dir = %dir.display(), "no audio files found");
            } else {
                tracing::info!(dir = %dir.display(), count = tracks.len(), "library loaded");
            }
            tracks
        }
        Err(e) => {
            tracing::warn!(error = %e, "starting with an empty playlist");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dir_gives_empty_playlist() {
        let tmp = tempfile::tempdir().unwrap();
        let mut s = config::Settings::default();
        s.library.dir = tmp.path().join("nope");
        assert!(load_library(&s).is_empty());
    }

    #[test]
    fn lists_audio_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("b.mp3"), b"").unwrap();
        std::fs::write(tmp.path().join("a.mp3"), b"").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), b"").unwrap();
        let mut s = config::Settings::default();
        s.library.dir = tmp.path().to_path_buf();

        let names: Vec<_> = load_library(&s).into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a.mp3", "b.mp3"]);
    }
}
