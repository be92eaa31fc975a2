//! Media information module
//!
//! This module provides the data structures yt-dlp's metadata output is
//! parsed into: the extracted media (or playlist) and its stream formats.

pub mod info;

// Re-export commonly used types
pub use info::{FormatDescriptor, MediaInfo};
