// ytfetch-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::YtdlpRunner;
use crate::error::{CoreError, CoreResult};
use crate::media::MediaInfo;
use crate::options::YtdlOptions;
use crate::progress::ProgressEvent;
use std::cell::RefCell;

/// Recorded call made against the mock runner.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ExtractInfo { url: String, format: Option<String> },
    Download { url: String, options: YtdlOptions },
}

/// Mock implementation of YtdlpRunner with canned results.
#[derive(Default)]
pub struct MockRunner {
    info_json: Option<String>,
    extract_error: Option<String>,
    download_error: Option<String>,
    progress: Vec<ProgressEvent>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockRunner {
    /// A runner whose extraction returns the given yt-dlp JSON.
    pub fn with_info(json: &str) -> Self {
        Self {
            info_json: Some(json.to_string()),
            ..Default::default()
        }
    }

    pub fn failing_extraction(message: &str) -> Self {
        Self {
            extract_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn fail_download(mut self, message: &str) -> Self {
        self.download_error = Some(message.to_string());
        self
    }

    pub fn emit_progress(mut self, events: Vec<ProgressEvent>) -> Self {
        self.progress = events;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }
}

impl YtdlpRunner for MockRunner {
    fn extract_info(&self, url: &str, format: Option<&str>) -> CoreResult<MediaInfo> {
        self.calls.borrow_mut().push(MockCall::ExtractInfo {
            url: url.to_string(),
            format: format.map(str::to_string),
        });
        if let Some(message) = &self.extract_error {
            return Err(CoreError::Extraction(message.clone()));
        }
        MediaInfo::from_json(self.info_json.as_deref().unwrap_or("{}"))
    }

    fn download<F>(&self, url: &str, options: &YtdlOptions, mut on_progress: F) -> CoreResult<()>
    where
        F: FnMut(ProgressEvent),
    {
        self.calls.borrow_mut().push(MockCall::Download {
            url: url.to_string(),
            options: options.clone(),
        });
        for event in &self.progress {
            on_progress(event.clone());
        }
        match &self.download_error {
            Some(message) => Err(CoreError::Download(message.clone())),
            None => Ok(()),
        }
    }
}
