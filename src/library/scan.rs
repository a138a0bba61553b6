use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::LibraryError;
use super::display::{DisplayParts, display_from_fields};
use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// List the direct children of `dir` that look like audio files, in file-name order.
///
/// A directory without any audio file yields an empty playlist; a missing
/// directory is reported as `LibraryError::MissingDir`.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, LibraryError> {
    if !dir.is_dir() {
        return Err(LibraryError::MissingDir(dir.to_path_buf()));
    }

    let mut tracks: Vec<Track> = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !(path.is_file() && is_audio_file(path, settings)) {
            continue;
        }

        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let mut title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let mut artist: Option<String> = None;
        let mut album: Option<String> = None;
        let mut duration: Option<Duration> = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = non_blank(tag.title()) {
                    title = v;
                }
                artist = non_blank(tag.artist());
                album = non_blank(tag.album());
            }
        }

        let display = display_from_fields(
            &DisplayParts {
                path,
                title: &title,
                artist: artist.as_deref(),
                album: album.as_deref(),
            },
            &settings.display_fields,
            &settings.display_separator,
        );

        tracks.push(Track {
            path: path.to_path_buf(),
            name,
            title,
            artist,
            album,
            duration,
            display,
        });
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackDisplayField;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn is_audio_file_matches_configured_extensions_case_insensitive() {
        let settings = LibrarySettings::default();
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.flac"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &settings));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
        assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
    }

    #[test]
    fn scan_missing_dir_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("music");
        let err = scan(&missing, &LibrarySettings::default()).unwrap_err();
        assert!(matches!(err, LibraryError::MissingDir(p) if p == missing));
    }

    #[test]
    fn scan_file_instead_of_dir_is_reported() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("music");
        fs::write(&file, b"not a dir").unwrap();
        assert!(scan(&file, &LibrarySettings::default()).is_err());
    }

    #[test]
    fn scan_empty_dir_yields_empty_playlist() {
        let dir = tempdir().unwrap();
        let tracks = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn scan_filters_non_audio_and_orders_by_file_name() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("a.ogg"), b"not a real ogg").unwrap();
        fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "a.ogg");
        assert_eq!(tracks[0].title, "a");
        assert_eq!(tracks[0].display, "a.ogg");
        assert_eq!(tracks[1].name, "b.MP3");
        assert_eq!(tracks[1].display, "b.MP3");
        assert_eq!(tracks[1].duration, None);
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"not real").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"not real").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            display_fields: vec![TrackDisplayField::Stem],
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings).unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].display, "visible");
    }

    #[test]
    fn scan_does_not_descend_into_subdirectories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("root.mp3"), b"not real").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("child.mp3"), b"not real").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default()).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "root.mp3");
    }
}
