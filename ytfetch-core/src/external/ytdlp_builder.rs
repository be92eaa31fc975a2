//! yt-dlp command builder utilities
//!
//! This module provides a builder for the two kinds of yt-dlp invocation
//! ytfetch performs: a metadata-only extraction that prints JSON, and a
//! download that streams machine-readable progress lines.

use std::path::Path;
use std::process::Command;

use crate::options::YtdlOptions;
use crate::progress::PROGRESS_TEMPLATE;

/// Builder for creating yt-dlp commands
pub struct YtdlpCommandBuilder {
    cmd: Command,
    url: Option<String>,
}

impl YtdlpCommandBuilder {
    /// Creates a builder for the given yt-dlp program
    #[must_use]
    pub fn new(program: &Path) -> Self {
        Self {
            cmd: Command::new(program),
            url: None,
        }
    }

    /// Print the info JSON instead of downloading.
    ///
    /// Playlists are listed flat so only the entry count is fetched. When a
    /// selector is given yt-dlp also checks that it can be satisfied.
    #[must_use]
    pub fn metadata_only(mut self, format: Option<&str>) -> Self {
        self.cmd
            .args(["--dump-single-json", "--flat-playlist", "--no-warnings"]);
        if let Some(format) = format {
            self.cmd.args(["-f", format]);
        }
        self
    }

    /// Adds the download options (selector, template, post-processors).
    #[must_use]
    pub fn with_options(mut self, options: &YtdlOptions) -> Self {
        self.cmd.args(options.to_args());
        self
    }

    /// Requests one progress line per update on stdout.
    #[must_use]
    pub fn with_progress(mut self) -> Self {
        self.cmd
            .args(["--progress", "--newline", "--progress-template", PROGRESS_TEMPLATE]);
        self
    }

    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Builds the command. The URL goes last, after `--`, so it is never
    /// mistaken for an option.
    #[must_use]
    pub fn build(mut self) -> Command {
        if let Some(url) = self.url {
            self.cmd.arg("--").arg(url);
        }
        self.cmd
    }
}
