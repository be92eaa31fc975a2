//! Core library for downloading online video and audio with yt-dlp.
//!
//! This crate maps a download request (URL, quality tier, container or
//! audio codec, audio-only flag) onto yt-dlp options, validates the URL with
//! a metadata-only extraction, runs the download and reports progress
//! through an event dispatcher. It can also list the formats a URL offers.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ytfetch_core::config::{DownloadConfigBuilder, Quality};
//! use ytfetch_core::events::{EventDispatcher, LogEventHandler};
//! use ytfetch_core::{ProcessRunner, run_download};
//!
//! let config = DownloadConfigBuilder::new()
//!     .url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
//!     .output_dir("./downloads")
//!     .quality(Quality::MaxHeight(720))
//!     .build()
//!     .unwrap();
//!
//! let dispatcher = EventDispatcher::with_handler(Arc::new(LogEventHandler));
//! let runner = ProcessRunner::from_env();
//! let outcome = run_download(&runner, &config, &dispatcher).unwrap();
//! println!("Saved {} to {}", outcome.title, outcome.output_dir.display());
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod events;
pub mod external;
pub mod formats;
pub mod media;
pub mod options;
pub mod progress;
pub mod utils;

// Re-exports for public API
pub use config::{AudioCodec, DownloadConfig, DownloadConfigBuilder, OutputFormat, Quality};
pub use download::{DownloadOutcome, download_format_id, download_video, run_download};
pub use error::{CoreError, CoreResult};
pub use events::{Event, EventDispatcher, EventHandler};
pub use external::{ProcessRunner, YtdlpRunner, is_transcoder_available};
pub use formats::{format_line, list_formats};
pub use media::{FormatDescriptor, MediaInfo};
pub use options::{OptionPlan, PostProcessor, YtdlOptions, build_options, options_for_format_id};
pub use progress::{ProgressEvent, ProgressStatus, parse_progress_line};
pub use utils::format_seconds;
