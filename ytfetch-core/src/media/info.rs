use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreResult;

/// One downloadable encoding of a video, as reported by yt-dlp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormatDescriptor {
    /// yt-dlp format code (e.g. "22", "137", "251")
    pub format_id: String,

    /// Container extension
    #[serde(default)]
    pub ext: Option<String>,

    /// Resolution text (e.g. "1280x720", "audio only")
    #[serde(default)]
    pub resolution: Option<String>,

    /// Free-form note (e.g. "720p", "medium")
    #[serde(default)]
    pub format_note: Option<String>,

    /// Vertical resolution in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl FormatDescriptor {
    /// Height used for ordering; formats without one sort first.
    #[must_use]
    pub fn sort_height(&self) -> u32 {
        self.height.unwrap_or(0)
    }
}

/// Metadata for a video or playlist, from `yt-dlp --dump-single-json`.
///
/// Only the fields ytfetch displays are modelled; everything else in the
/// JSON document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    /// Playlist entries, present only when the URL resolved to a playlist
    #[serde(default)]
    pub entries: Option<Vec<Value>>,

    #[serde(default)]
    pub formats: Option<Vec<FormatDescriptor>>,
}

impl MediaInfo {
    /// Parses yt-dlp's JSON output.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Title, or "Unknown" when yt-dlp did not report one.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown")
    }

    /// Number of playlist entries, if this is a playlist.
    #[must_use]
    pub fn playlist_count(&self) -> Option<usize> {
        self.entries.as_ref().map(Vec::len)
    }

    #[must_use]
    pub fn formats(&self) -> &[FormatDescriptor] {
        self.formats.as_deref().unwrap_or_default()
    }

    /// Formats ordered by ascending height, missing heights first.
    ///
    /// The sort is stable, so yt-dlp's own order is kept among equal heights.
    #[must_use]
    pub fn formats_by_height(&self) -> Vec<FormatDescriptor> {
        let mut formats = self.formats().to_vec();
        formats.sort_by_key(FormatDescriptor::sort_height);
        formats
    }
}
