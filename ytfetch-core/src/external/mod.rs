// ============================================================================
// ytfetch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with yt-dlp and ffmpeg
//
// This module encapsulates everything that touches the two external
// collaborators: the yt-dlp executable, which performs extraction and
// download, and ffmpeg, which yt-dlp calls for post-processing.
//
// KEY COMPONENTS:
// - YtdlpRunner trait and its process-backed implementation
// - YtdlpCommandBuilder for assembling yt-dlp invocations
// - ffmpeg availability probing
//
// Consumers depend on the YtdlpRunner trait so tests can substitute a mock
// runner for the real process.

// ---- Internal crate imports ----
use crate::config::TRANSCODER_PROGRAM;

// ---- Standard library imports ----
use std::ffi::OsStr;
use std::process::Command;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Builder for yt-dlp command lines
pub mod ytdlp_builder;

/// Trait and process implementation for running yt-dlp
pub mod ytdlp_executor;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ytdlp_builder::YtdlpCommandBuilder;
pub use ytdlp_executor::{ProcessRunner, YtdlpRunner};

// ============================================================================
// TRANSCODER PROBING
// ============================================================================

/// Whether ffmpeg can be run from the search path.
///
/// yt-dlp resolves ffmpeg through `PATH` only, so the probe runs the bare
/// program name rather than ffmpeg-sidecar's default lookup, which prefers a
/// binary next to the current executable. Never fails: any problem while
/// probing counts as "unavailable".
#[must_use]
pub fn is_transcoder_available() -> bool {
    transcoder_available_at(TRANSCODER_PROGRAM)
}

/// Whether `program` answers `-version` like ffmpeg does.
#[must_use]
pub fn transcoder_available_at(program: impl AsRef<OsStr>) -> bool {
    let program = program.as_ref();
    match ffmpeg_sidecar::version::ffmpeg_version_with_path(program) {
        Ok(version) => {
            log::debug!("FFmpeg {} found at {}", version, program.to_string_lossy());
            true
        }
        Err(e) => {
            log::debug!("FFmpeg not usable at {}: {}", program.to_string_lossy(), e);
            false
        }
    }
}

/// Logs a command at debug level before it is run.
pub(crate) fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    log::debug!("Executing command: {} {}", program, args.join(" "));
}
