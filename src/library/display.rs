use std::path::Path;

use crate::config::TrackDisplayField;

/// Tag values a display name can be built from.
pub struct DisplayParts<'a> {
    pub path: &'a Path,
    pub title: &'a str,
    pub artist: Option<&'a str>,
    pub album: Option<&'a str>,
}

impl DisplayParts<'_> {
    fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(self.title)
    }

    /// Text for one field; blank values count as missing.
    fn field(&self, field: TrackDisplayField) -> Option<String> {
        let text = match field {
            TrackDisplayField::Filename => Some(self.file_name()),
            TrackDisplayField::Stem => self.path.file_stem().and_then(|s| s.to_str()),
            TrackDisplayField::Title => Some(self.title),
            TrackDisplayField::Artist => self.artist,
            TrackDisplayField::Album => self.album,
            TrackDisplayField::Path => return Some(self.path.display().to_string()),
        };
        text.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Join the configured `fields` with `sep`, falling back to the file name
/// when none of them has a value.
pub fn display_from_fields(
    parts: &DisplayParts<'_>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let texts: Vec<String> = fields.iter().filter_map(|f| parts.field(*f)).collect();
    if texts.is_empty() {
        parts.file_name().to_string()
    } else {
        texts.join(sep)
    }
}
