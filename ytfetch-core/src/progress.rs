// ============================================================================
// ytfetch-core/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: yt-dlp Progress Lines to Progress Events
//
// yt-dlp is asked to print one machine-readable line per progress update via
// `--progress-template`. This module defines that template and parses the
// resulting lines back into ProgressEvent values.
//
// KEY COMPONENTS:
// - PROGRESS_TEMPLATE: Template passed to yt-dlp
// - ProgressStatus / ProgressEvent: Parsed progress update
// - parse_progress_line: Line parser; non-progress lines yield None

// ---- Standard library imports ----
use std::fmt;

/// Marker that starts every progress line.
pub const PROGRESS_MARKER: &str = "ytfetch-progress";

/// Template given to `yt-dlp --progress-template`.
pub const PROGRESS_TEMPLATE: &str = "download:ytfetch-progress|%(progress.status)s|%(progress._percent_str)s|%(progress._speed_str)s|%(progress._eta_str)s";

const MISSING: &str = "N/A";

/// Transfer state reported by yt-dlp's progress hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Downloading,
    /// Transfer done; merging or post-processing may still follow.
    Finished,
    Error,
}

impl ProgressStatus {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "downloading" => Some(ProgressStatus::Downloading),
            "finished" => Some(ProgressStatus::Finished),
            "error" => Some(ProgressStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressStatus::Downloading => write!(f, "downloading"),
            ProgressStatus::Finished => write!(f, "finished"),
            ProgressStatus::Error => write!(f, "error"),
        }
    }
}

/// A single progress update. Fields are display strings as yt-dlp formats them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    pub status: ProgressStatus,
    pub percent: String,
    pub speed: String,
    pub eta: String,
}

/// Parses one line of yt-dlp stdout.
///
/// Returns `None` for anything that is not a progress line.
#[must_use]
pub fn parse_progress_line(line: &str) -> Option<ProgressEvent> {
    let clean = strip_ansi_escapes::strip_str(line);
    let rest = clean.trim().strip_prefix(PROGRESS_MARKER)?.strip_prefix('|')?;

    let mut fields = rest.splitn(4, '|');
    let status = ProgressStatus::parse(fields.next()?.trim())?;
    let percent = display_field(fields.next());
    let speed = display_field(fields.next());
    let eta = display_field(fields.next());

    Some(ProgressEvent {
        status,
        percent,
        speed,
        eta,
    })
}

// yt-dlp prints "NA" for fields it cannot compute yet.
fn display_field(field: Option<&str>) -> String {
    match field.map(str::trim) {
        None | Some("") | Some("NA") | Some("None") => MISSING.to_string(),
        Some(value) => value.to_string(),
    }
}
