// ytfetch-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use std::path::PathBuf;
use ytfetch_core::config::{DEFAULT_OUTPUT_DIR, OutputFormat, Quality};

use crate::config::OUTPUT_DIR_ENV;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "ytfetch",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ytfetch: Video downloader with format conversion",
    long_about = "Downloads videos, playlists or audio tracks with yt-dlp, optionally converting them with ffmpeg."
)]
pub struct Cli {
    /// Video or playlist URL (prompted for when omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Directory where downloads are saved
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        env = OUTPUT_DIR_ENV
    )]
    pub output_dir: PathBuf,

    /// Maximum video quality
    #[arg(
        short,
        long,
        default_value = "best",
        value_parser = PossibleValuesParser::new(Quality::NAMES).try_map(|s| s.parse::<Quality>())
    )]
    pub quality: Quality,

    /// Output container, or audio codec with --audio-only
    #[arg(
        short,
        long,
        default_value = "mp4",
        value_parser = PossibleValuesParser::new(OutputFormat::NAMES).try_map(|s| s.parse::<OutputFormat>())
    )]
    pub format: OutputFormat,

    /// Download audio only
    #[arg(short, long)]
    pub audio_only: bool,

    /// List available formats and exit
    #[arg(short, long)]
    pub list_formats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments of the interactive format picker.
#[derive(Parser, Debug)]
#[command(
    name = "ytfetch-pick",
    author,
    version,
    about = "Lists the formats of a video and downloads the one you choose"
)]
pub struct PickCli {
    /// Video URL (prompted for when omitted)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
