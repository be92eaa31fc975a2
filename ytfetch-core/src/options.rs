// ============================================================================
// ytfetch-core/src/options.rs
// ============================================================================
//
// OPTION MAPPING: DownloadConfig to yt-dlp Options
//
// This module translates the user's high-level intent (quality tier, output
// format, audio-only) into the options yt-dlp is run with: a format selector,
// an output template and an optional post-processing directive.
//
// KEY COMPONENTS:
// - YtdlOptions: Typed options, rendered to yt-dlp arguments
// - PostProcessor: Audio extraction or container conversion directive
// - build_options: Pure mapping from (config, transcoder availability)
// - ensure_output_dir: Idempotent creation of the output directory
//
// Post-processing directives require ffmpeg. When it is missing the mapper
// keeps the native container and records a warning instead.

use std::fs;
use std::path::Path;

use crate::config::{AudioCodec, DownloadConfig, OUTPUT_TEMPLATE, OutputFormat, Quality};
use crate::error::{CoreError, CoreResult};

/// Selector for the best audio stream, falling back to the best overall.
pub const AUDIO_SELECTOR: &str = "bestaudio/best";

/// Native mp4 selector: mp4 video plus m4a audio, else best mp4, else best.
pub const MP4_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

/// Selector for formats that are converted after download.
pub const MERGE_SELECTOR: &str = "bestvideo+bestaudio/best";

pub const WORST_SELECTOR: &str = "worst";

/// Instruction for yt-dlp to run ffmpeg after the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostProcessor {
    /// Extract the audio track to the given codec.
    ExtractAudio { codec: AudioCodec },
    /// Convert the downloaded file to the given container.
    VideoConvertor { format: OutputFormat },
}

impl PostProcessor {
    fn to_args(&self) -> Vec<String> {
        match self {
            PostProcessor::ExtractAudio { codec } => vec![
                "--extract-audio".to_string(),
                "--audio-format".to_string(),
                codec.to_string(),
            ],
            PostProcessor::VideoConvertor { format } => {
                vec!["--recode-video".to_string(), format.to_string()]
            }
        }
    }
}

/// Options for a single yt-dlp run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtdlOptions {
    /// Format selector expression (`-f`)
    pub format: String,
    /// Output path template (`-o`)
    pub outtmpl: String,
    pub postprocessors: Vec<PostProcessor>,
    /// Suppress yt-dlp's own console output
    pub quiet: bool,
}

impl YtdlOptions {
    /// Renders the options as yt-dlp command-line arguments.
    #[must_use]
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            self.format.clone(),
            "-o".to_string(),
            self.outtmpl.clone(),
        ];
        if self.quiet {
            args.push("--quiet".to_string());
        }
        for pp in &self.postprocessors {
            args.extend(pp.to_args());
        }
        args
    }

    /// Returns the first post-processing directive, if any.
    #[must_use]
    pub fn postprocessor(&self) -> Option<&PostProcessor> {
        self.postprocessors.first()
    }
}

/// Options together with the warnings produced while building them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPlan {
    pub options: YtdlOptions,
    pub warnings: Vec<String>,
}

/// Output template for `output_dir`: `{dir}/%(title)s.%(ext)s`.
///
/// `%` in the directory is doubled so yt-dlp reads it literally.
#[must_use]
pub fn output_template(output_dir: &Path) -> String {
    let raw = output_dir.to_string_lossy();
    if raw.is_empty() {
        return OUTPUT_TEMPLATE.to_string();
    }
    let dir = raw.trim_end_matches(&['/', '\\'][..]).replace('%', "%%");
    format!("{dir}/{OUTPUT_TEMPLATE}")
}

/// Maps a download request onto yt-dlp options.
///
/// Pure: `transcoder_available` is probed by the caller.
#[must_use]
pub fn build_options(config: &DownloadConfig, transcoder_available: bool) -> OptionPlan {
    let mut warnings = Vec::new();
    let mut postprocessors = Vec::new();

    let format = if config.audio_only {
        if transcoder_available {
            postprocessors.push(PostProcessor::ExtractAudio {
                codec: config.format.audio_codec().unwrap_or_default(),
            });
        } else {
            warnings.push("Downloading in original audio format (no FFmpeg for conversion)".to_string());
        }
        AUDIO_SELECTOR.to_string()
    } else {
        let filter = if config.format == OutputFormat::Mp4 {
            MP4_SELECTOR
        } else {
            MERGE_SELECTOR
        };

        if config.format != OutputFormat::Mp4 {
            if transcoder_available {
                postprocessors.push(PostProcessor::VideoConvertor { format: config.format });
            } else {
                warnings.push(format!(
                    "Cannot convert to {} - FFmpeg not found. Downloading in original format.",
                    config.format
                ));
            }
        }

        match config.quality {
            Quality::Best => filter.to_string(),
            Quality::Worst => WORST_SELECTOR.to_string(),
            Quality::MaxHeight(height) => format!("{filter}[height<={height}]"),
        }
    };

    OptionPlan {
        options: YtdlOptions {
            format,
            outtmpl: output_template(&config.output_dir),
            postprocessors,
            quiet: true,
        },
        warnings,
    }
}

/// Options that download exactly `format_id`, with no post-processing.
#[must_use]
pub fn options_for_format_id(format_id: &str, output_dir: &Path) -> YtdlOptions {
    YtdlOptions {
        format: format_id.trim().to_string(),
        outtmpl: output_template(output_dir),
        postprocessors: Vec::new(),
        quiet: true,
    }
}

/// Creates the output directory if it does not exist yet.
pub fn ensure_output_dir(output_dir: &Path) -> CoreResult<()> {
    if output_dir.is_dir() {
        return Ok(());
    }
    log::debug!("Creating output directory {}", output_dir.display());
    fs::create_dir_all(output_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Failed to create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })
}
