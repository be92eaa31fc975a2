//! Formatting helpers shared by the library and the CLI.

/// Renders a yt-dlp duration as a seconds count.
///
/// Whole values print without a fraction ("61"), others keep one decimal
/// place ("12.5"). A missing duration, common for live streams and flat
/// playlists, prints as "unknown".
#[must_use]
pub fn format_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() && s >= 0.0 && s.fract() == 0.0 => format!("{}", s as u64),
        Some(s) if s.is_finite() && s >= 0.0 => format!("{s:.1}"),
        _ => "unknown".to_string(),
    }
}
