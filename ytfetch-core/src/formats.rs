//! Listing the formats available for a URL.

use crate::error::CoreResult;
use crate::external::YtdlpRunner;
use crate::media::FormatDescriptor;

/// Fetches every format yt-dlp reports for `url`, sorted by ascending height.
///
/// Formats without a height sort first. Nothing is downloaded.
pub fn list_formats<R: YtdlpRunner>(runner: &R, url: &str) -> CoreResult<Vec<FormatDescriptor>> {
    log::debug!("Listing formats for {}", url);
    let info = runner.extract_info(url, None)?;
    let formats = info.formats_by_height();
    log::debug!("{} format(s) available", formats.len());
    Ok(formats)
}

/// One display line: `ID: 22 | MP4 | 1280x720 | 720p`.
#[must_use]
pub fn format_line(format: &FormatDescriptor) -> String {
    format!(
        "ID: {} | {} | {} | {}",
        format.format_id,
        format.ext.as_deref().unwrap_or("?").to_uppercase(),
        format.resolution.as_deref().unwrap_or("?"),
        format.format_note.as_deref().unwrap_or("")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::external::mocks::{MockCall, MockRunner};

    #[test]
    fn lists_sorted_formats_without_selector() {
        let runner = MockRunner::with_info(
            r#"{"formats": [
                {"format_id": "22", "ext": "mp4", "height": 720},
                {"format_id": "18", "ext": "mp4", "height": 360},
                {"format_id": "140", "ext": "m4a"}
            ]}"#,
        );

        let formats = list_formats(&runner, "https://example.com/v").unwrap();
        let ids: Vec<_> = formats.iter().map(|f| f.format_id.as_str()).collect();
        assert_eq!(ids, vec!["140", "18", "22"]);
        assert_eq!(
            runner.calls(),
            vec![MockCall::ExtractInfo {
                url: "https://example.com/v".to_string(),
                format: None
            }]
        );
    }

    #[test]
    fn extraction_failure_propagates() {
        let runner = MockRunner::failing_extraction("Unsupported URL");
        let err = list_formats(&runner, "not-a-url").unwrap_err();
        assert!(matches!(err, CoreError::Extraction(_)));
    }

    #[test]
    fn format_line_uppercases_extension_and_fills_gaps() {
        let full = FormatDescriptor {
            format_id: "22".to_string(),
            ext: Some("mp4".to_string()),
            resolution: Some("1280x720".to_string()),
            format_note: Some("720p".to_string()),
            height: Some(720),
        };
        assert_eq!(format_line(&full), "ID: 22 | MP4 | 1280x720 | 720p");

        let sparse = FormatDescriptor {
            format_id: "x".to_string(),
            ext: None,
            resolution: None,
            format_note: None,
            height: None,
        };
        assert_eq!(format_line(&sparse), "ID: x | ? | ? | ");
    }
}
