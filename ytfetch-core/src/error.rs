// ============================================================================
// ytfetch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Core Error Types and Helpers
//
// This module defines the single error type used throughout ytfetch-core and
// a handful of constructor helpers for process-related failures.
//
// KEY COMPONENTS:
// - CoreError: Error enum covering yt-dlp phases, process and I/O failures
// - CoreResult: Result alias used by every fallible core function
// - label()/kind(): Classification used by the CLI when reporting failures
//
// Extraction and Download are the two failures yt-dlp itself reports; every
// other variant is reported as an unexpected error together with its kind.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by ytfetch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Metadata extraction failed (invalid, private or blocked URL).
    #[error("{0}")]
    Extraction(String),

    /// The transfer or a post-processing step failed.
    #[error("{0}")]
    Download(String),

    #[error("Required dependency '{0}' not found on PATH")]
    DependencyNotFound(String),

    #[error("Failed to start '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Failed to parse yt-dlp output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for ytfetch-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Human-readable label distinguishing the three reported failure kinds.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CoreError::Extraction(_) => "Extractor Error",
            CoreError::Download(_) => "Download Error",
            _ => "Unexpected Error",
        }
    }

    /// Short type name of the variant, shown alongside unexpected errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::Extraction(_) => "Extraction",
            CoreError::Download(_) => "Download",
            CoreError::DependencyNotFound(_) => "DependencyNotFound",
            CoreError::CommandStart(..) => "CommandStart",
            CoreError::CommandWait(..) => "CommandWait",
            CoreError::Json(_) => "Json",
            CoreError::Io(_) => "Io",
            CoreError::PathError(_) => "PathError",
            CoreError::InvalidValue(_) => "InvalidValue",
            CoreError::OperationFailed(_) => "OperationFailed",
        }
    }

    /// Whether this error is one yt-dlp reported for the request itself.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, CoreError::Extraction(_) | CoreError::Download(_))
    }

    /// Full report line: `Label: message`, with the kind for unexpected errors.
    #[must_use]
    pub fn report(&self) -> String {
        if self.is_expected() {
            format!("{}: {}", self.label(), self)
        } else {
            format!("{}: {}: {}", self.label(), self.kind(), self)
        }
    }
}

// ============================================================================
// CONSTRUCTOR HELPERS
// ============================================================================

/// Maps a spawn failure to `DependencyNotFound` or `CommandStart`.
pub fn command_start_error(program: &str, err: io::Error) -> CoreError {
    if err.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(program.to_string())
    } else {
        CoreError::CommandStart(program.to_string(), err)
    }
}

pub fn command_wait_error(program: &str, err: io::Error) -> CoreError {
    CoreError::CommandWait(program.to_string(), err)
}

/// Describes a non-zero exit when the tool printed nothing useful.
#[must_use]
pub fn exit_status_message(program: &str, status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("{program} exited with status {code}"),
        None => format!("{program} was terminated by a signal"),
    }
}
