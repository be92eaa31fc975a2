// ytfetch-cli/src/config.rs
//
// Defines configuration constants for the `ytfetch-cli` binaries: the
// environment variables they read and the prompts they show.

/// Overrides the default output directory of `ytfetch`.
pub const OUTPUT_DIR_ENV: &str = "YTFETCH_OUTPUT_DIR";

pub const URL_PROMPT: &str = "Enter video URL: ";

pub const FORMAT_PROMPT: &str =
    "\nEnter the format code you want to download (e.g., 22 for 720p if available): ";

/// `ytfetch-pick` always saves here.
pub const PICK_OUTPUT_DIR: &str = ytfetch_core::config::DEFAULT_OUTPUT_DIR;
