//! Configuration structures and constants for the ytfetch-core library.
//!
//! This module provides the download request type and the quality and
//! output-format vocabularies the CLI exposes.

mod builder;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CoreError;

pub use builder::DownloadConfigBuilder;

// Default constants

/// Default directory downloads are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "./downloads";

/// Default quality tier.
pub const DEFAULT_QUALITY: Quality = Quality::Best;

/// Default output format.
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Mp4;

/// yt-dlp output template appended to the output directory.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Program name used to invoke yt-dlp when no override is set.
pub const YTDLP_PROGRAM: &str = "yt-dlp";

/// ffmpeg as yt-dlp finds it: by bare name on the search path.
pub const TRANSCODER_PROGRAM: &str = "ffmpeg";

/// Environment variable that overrides the yt-dlp program path.
pub const YTDLP_ENV_VAR: &str = "YTFETCH_YTDLP";

// ============================================================================
// QUALITY
// ============================================================================

/// Requested video quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Best available streams.
    Best,
    /// Worst available stream, overriding any format preference.
    Worst,
    /// Best streams no taller than the given height in pixels.
    MaxHeight(u32),
}

impl Quality {
    /// Every accepted spelling, in the order shown to users.
    pub const NAMES: [&'static str; 10] = [
        "best", "worst", "144p", "240p", "360p", "480p", "720p", "1080p", "1440p", "2160p",
    ];

    const HEIGHTS: [u32; 8] = [144, 240, 360, 480, 720, 1080, 1440, 2160];
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Best => write!(f, "best"),
            Quality::Worst => write!(f, "worst"),
            Quality::MaxHeight(height) => write!(f, "{height}p"),
        }
    }
}

impl FromStr for Quality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Quality::Best),
            "worst" => Ok(Quality::Worst),
            tier => tier
                .strip_suffix('p')
                .and_then(|digits| digits.parse::<u32>().ok())
                .filter(|height| Self::HEIGHTS.contains(height))
                .map(Quality::MaxHeight)
                .ok_or_else(|| CoreError::InvalidValue(format!("unknown quality '{tier}'"))),
        }
    }
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// Requested output container or audio codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Mp4,
    Webm,
    Flv,
    Ogg,
    Mkv,
    Avi,
    Mp3,
    Aac,
    Flac,
    M4a,
    Wav,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 11] = [
        "mp4", "webm", "flv", "ogg", "mkv", "avi", "mp3", "aac", "flac", "m4a", "wav",
    ];

    /// Lowercase name as passed to yt-dlp.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Webm => "webm",
            OutputFormat::Flv => "flv",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Mkv => "mkv",
            OutputFormat::Avi => "avi",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Aac => "aac",
            OutputFormat::Flac => "flac",
            OutputFormat::M4a => "m4a",
            OutputFormat::Wav => "wav",
        }
    }

    /// The audio codec this format names, if yt-dlp can extract audio to it.
    #[must_use]
    pub fn audio_codec(self) -> Option<AudioCodec> {
        self.as_str().parse().ok()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = match s {
            "mp4" => OutputFormat::Mp4,
            "webm" => OutputFormat::Webm,
            "flv" => OutputFormat::Flv,
            "ogg" => OutputFormat::Ogg,
            "mkv" => OutputFormat::Mkv,
            "avi" => OutputFormat::Avi,
            "mp3" => OutputFormat::Mp3,
            "aac" => OutputFormat::Aac,
            "flac" => OutputFormat::Flac,
            "m4a" => OutputFormat::M4a,
            "wav" => OutputFormat::Wav,
            other => {
                return Err(CoreError::InvalidValue(format!("unknown format '{other}'")));
            }
        };
        Ok(format)
    }
}

/// Codecs accepted by yt-dlp's audio extraction post-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioCodec {
    #[default]
    Mp3,
    Aac,
    Flac,
    M4a,
    Opus,
    Vorbis,
    Wav,
}

impl AudioCodec {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AudioCodec::Mp3 => "mp3",
            AudioCodec::Aac => "aac",
            AudioCodec::Flac => "flac",
            AudioCodec::M4a => "m4a",
            AudioCodec::Opus => "opus",
            AudioCodec::Vorbis => "vorbis",
            AudioCodec::Wav => "wav",
        }
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioCodec {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp3" => Ok(AudioCodec::Mp3),
            "aac" => Ok(AudioCodec::Aac),
            "flac" => Ok(AudioCodec::Flac),
            "m4a" => Ok(AudioCodec::M4a),
            "opus" => Ok(AudioCodec::Opus),
            "vorbis" => Ok(AudioCodec::Vorbis),
            "wav" => Ok(AudioCodec::Wav),
            other => Err(CoreError::InvalidValue(format!("unknown audio codec '{other}'"))),
        }
    }
}

// ============================================================================
// DOWNLOAD CONFIG
// ============================================================================

/// A single download request, built once per invocation.
///
/// # Examples
///
/// ```rust
/// use ytfetch_core::config::{DownloadConfigBuilder, OutputFormat, Quality};
///
/// let config = DownloadConfigBuilder::new()
///     .url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
///     .output_dir("./downloads")
///     .quality(Quality::MaxHeight(720))
///     .format(OutputFormat::Mp4)
///     .build()
///     .unwrap();
/// assert!(!config.audio_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Video or playlist URL
    pub url: String,

    /// Directory downloaded files are written to
    pub output_dir: PathBuf,

    pub quality: Quality,

    pub format: OutputFormat,

    /// Fetch only the best audio stream
    pub audio_only: bool,
}
