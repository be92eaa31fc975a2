// ============================================================================
// ytfetch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for DownloadConfig
//
// This module implements the builder pattern for DownloadConfig, providing a
// fluent API for assembling a download request. Only the URL is required;
// every other field falls back to the defaults in the parent module.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{DownloadConfig, OutputFormat, Quality};
use crate::error::{CoreError, CoreResult};

/// Builder for creating DownloadConfig instances.
#[derive(Debug, Clone)]
pub struct DownloadConfigBuilder {
    // Required fields
    url: Option<String>,

    // Optional fields with defaults
    output_dir: PathBuf,
    quality: Quality,
    format: OutputFormat,
    audio_only: bool,
}

impl Default for DownloadConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadConfigBuilder {
    /// Creates a new DownloadConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            url: None,
            output_dir: PathBuf::from(super::DEFAULT_OUTPUT_DIR),
            quality: super::DEFAULT_QUALITY,
            format: super::DEFAULT_FORMAT,
            audio_only: false,
        }
    }

    /// Sets the video or playlist URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the directory downloads are written to.
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn audio_only(mut self, audio_only: bool) -> Self {
        self.audio_only = audio_only;
        self
    }

    /// Builds the DownloadConfig.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` if no URL was set or it is blank.
    pub fn build(self) -> CoreResult<DownloadConfig> {
        let url = self
            .url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| CoreError::InvalidValue("a URL is required".to_string()))?;

        Ok(DownloadConfig {
            url,
            output_dir: self.output_dir,
            quality: self.quality,
            format: self.format,
            audio_only: self.audio_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/watch?v=abc")
            .build()
            .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("./downloads"));
        assert_eq!(config.quality, Quality::Best);
        assert_eq!(config.format, OutputFormat::Mp4);
        assert!(!config.audio_only);
    }

    #[test]
    fn blank_url_is_rejected() {
        let result = DownloadConfigBuilder::new().url("   ").build();
        assert!(matches!(result, Err(CoreError::InvalidValue(_))));
        assert!(DownloadConfigBuilder::new().build().is_err());
    }

    #[test]
    fn url_is_trimmed() {
        let config = DownloadConfigBuilder::new()
            .url("  https://example.com/v  ")
            .audio_only(true)
            .format(OutputFormat::Flac)
            .build()
            .unwrap();
        assert_eq!(config.url, "https://example.com/v");
        assert!(config.audio_only);
        assert_eq!(config.format, OutputFormat::Flac);
    }
}
