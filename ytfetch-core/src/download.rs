// ============================================================================
// ytfetch-core/src/download.rs
// ============================================================================
//
// DOWNLOAD EXECUTOR: Validate, Report and Download
//
// This module runs a download request end to end: it prepares the output
// directory, maps the request onto yt-dlp options, performs a metadata-only
// extraction to validate the URL, then runs the real download while
// forwarding progress to the event dispatcher.
//
// KEY COMPONENTS:
// - run_download: Probes ffmpeg, then calls download_video
// - download_video: The executor proper (transcoder availability injected)
// - download_format_id: Fixed-format download used by the format picker
// - DownloadOutcome: Summary returned on success
//
// There is no retry and no cleanup of partial files: the first failure is
// returned to the caller.

use std::path::PathBuf;

use crate::config::DownloadConfig;
use crate::error::CoreResult;
use crate::events::{Event, EventDispatcher};
use crate::external::{YtdlpRunner, is_transcoder_available};
use crate::options::{build_options, ensure_output_dir, options_for_format_id};

/// Summary of a finished download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    pub title: String,
    pub output_dir: PathBuf,
    pub playlist_count: Option<usize>,
    /// Whether a post-processing directive was requested.
    pub converted: bool,
}

/// Probes for ffmpeg and downloads `config`.
pub fn run_download<R: YtdlpRunner>(
    runner: &R,
    config: &DownloadConfig,
    dispatcher: &EventDispatcher,
) -> CoreResult<DownloadOutcome> {
    let transcoder_available = is_transcoder_available();
    download_video(runner, config, transcoder_available, dispatcher)
}

/// Downloads `config` with yt-dlp.
///
/// # Errors
///
/// * `CoreError::Extraction` - The metadata extraction failed
/// * `CoreError::Download` - The transfer or post-processing failed
/// * Any other variant for local failures (output directory, process start)
pub fn download_video<R: YtdlpRunner>(
    runner: &R,
    config: &DownloadConfig,
    transcoder_available: bool,
    dispatcher: &EventDispatcher,
) -> CoreResult<DownloadOutcome> {
    ensure_output_dir(&config.output_dir)?;

    if !transcoder_available {
        dispatcher.emit(Event::TranscoderMissing);
    }

    let plan = build_options(config, transcoder_available);
    for message in plan.warnings {
        dispatcher.emit(Event::Warning { message });
    }
    let options = plan.options;
    log::debug!("yt-dlp options: {:?}", options);

    dispatcher.emit(Event::DownloadStarted {
        url: config.url.clone(),
    });

    let info = runner.extract_info(&config.url, Some(&options.format))?;
    let title = info.display_title().to_string();
    let playlist_count = info.playlist_count();

    dispatcher.emit(Event::MediaInfoExtracted {
        title: title.clone(),
        duration: info.duration,
        quality: config.quality,
        format: config.format,
        playlist_count,
    });

    dispatcher.emit(Event::TransferStarting);
    runner.download(&config.url, &options, |progress| {
        dispatcher.emit(Event::Progress(progress));
    })?;

    dispatcher.emit(Event::DownloadComplete {
        output_dir: config.output_dir.clone(),
    });

    Ok(DownloadOutcome {
        title,
        output_dir: config.output_dir.clone(),
        playlist_count,
        converted: !options.postprocessors.is_empty(),
    })
}

/// Downloads exactly `format_id` from `url` into `output_dir`.
pub fn download_format_id<R: YtdlpRunner>(
    runner: &R,
    url: &str,
    format_id: &str,
    output_dir: &std::path::Path,
    dispatcher: &EventDispatcher,
) -> CoreResult<()> {
    ensure_output_dir(output_dir)?;

    let options = options_for_format_id(format_id, output_dir);
    dispatcher.emit(Event::DownloadStarted {
        url: url.to_string(),
    });
    runner.download(url, &options, |progress| {
        dispatcher.emit(Event::Progress(progress));
    })?;
    dispatcher.emit(Event::DownloadComplete {
        output_dir: output_dir.to_path_buf(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DownloadConfigBuilder, OutputFormat, Quality};
    use crate::error::CoreError;
    use crate::events::EventHandler;
    use crate::external::mocks::{MockCall, MockRunner};
    use crate::options::PostProcessor;
    use crate::progress::{ProgressEvent, ProgressStatus};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Event>>);

    impl EventHandler for Recorder {
        fn handle(&self, event: &Event) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.lock().unwrap().clone()
        }
    }

    fn setup() -> (Arc<Recorder>, EventDispatcher) {
        let recorder = Arc::new(Recorder::default());
        let dispatcher = EventDispatcher::with_handler(recorder.clone());
        (recorder, dispatcher)
    }

    fn progress(status: ProgressStatus, percent: &str) -> ProgressEvent {
        ProgressEvent {
            status,
            percent: percent.to_string(),
            speed: "1.00MiB/s".to_string(),
            eta: "00:01".to_string(),
        }
    }

    #[test]
    fn successful_download_reports_info_progress_and_completion() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("downloads");
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/watch?v=abc")
            .output_dir(&out)
            .quality(Quality::MaxHeight(720))
            .build()
            .unwrap();
        let runner = MockRunner::with_info(r#"{"title": "Clip", "duration": 61}"#).emit_progress(vec![
            progress(ProgressStatus::Downloading, "50.0%"),
            progress(ProgressStatus::Finished, "100.0%"),
        ]);
        let (recorder, dispatcher) = setup();

        let outcome = download_video(&runner, &config, true, &dispatcher).unwrap();

        assert!(out.is_dir());
        assert_eq!(outcome.title, "Clip");
        assert_eq!(outcome.playlist_count, None);
        assert!(!outcome.converted);

        let events = recorder.events();
        assert_eq!(
            events[0],
            Event::DownloadStarted {
                url: config.url.clone()
            }
        );
        assert_eq!(
            events[1],
            Event::MediaInfoExtracted {
                title: "Clip".to_string(),
                duration: Some(61.0),
                quality: Quality::MaxHeight(720),
                format: OutputFormat::Mp4,
                playlist_count: None,
            }
        );
        assert_eq!(events[2], Event::TransferStarting);
        assert!(matches!(events[3], Event::Progress(ref p) if p.percent == "50.0%"));
        assert!(matches!(events[4], Event::Progress(ref p) if p.status == ProgressStatus::Finished));
        assert_eq!(events[5], Event::DownloadComplete { output_dir: out.clone() });

        let expected_format = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best[height<=720]";
        let calls = runner.calls();
        assert_eq!(
            calls[0],
            MockCall::ExtractInfo {
                url: config.url.clone(),
                format: Some(expected_format.to_string())
            }
        );
        match &calls[1] {
            MockCall::Download { options, .. } => {
                assert_eq!(options.format, expected_format);
                assert!(options.postprocessors.is_empty());
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn missing_transcoder_is_announced_before_download() {
        let tmp = tempfile::tempdir().unwrap();
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/v")
            .output_dir(tmp.path())
            .format(OutputFormat::Webm)
            .build()
            .unwrap();
        let runner = MockRunner::with_info("{}");
        let (recorder, dispatcher) = setup();

        download_video(&runner, &config, false, &dispatcher).unwrap();

        let events = recorder.events();
        assert_eq!(events[0], Event::TranscoderMissing);
        assert!(matches!(events[1], Event::Warning { ref message } if message.contains("Cannot convert to webm")));
    }

    #[test]
    fn playlist_count_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/playlist?list=x")
            .output_dir(tmp.path())
            .audio_only(true)
            .format(OutputFormat::Flac)
            .build()
            .unwrap();
        let runner = MockRunner::with_info(r#"{"title": "Mix", "entries": [{}, {}]}"#);
        let (_, dispatcher) = setup();

        let outcome = download_video(&runner, &config, true, &dispatcher).unwrap();
        assert_eq!(outcome.playlist_count, Some(2));
        assert!(outcome.converted);

        match &runner.calls()[1] {
            MockCall::Download { options, .. } => {
                assert_eq!(options.format, "bestaudio/best");
                assert_eq!(
                    options.postprocessors,
                    vec![PostProcessor::ExtractAudio {
                        codec: crate::config::AudioCodec::Flac
                    }]
                );
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn extraction_failure_stops_before_download() {
        let tmp = tempfile::tempdir().unwrap();
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/private")
            .output_dir(tmp.path())
            .build()
            .unwrap();
        let runner = MockRunner::failing_extraction("Private video");
        let (recorder, dispatcher) = setup();

        let err = download_video(&runner, &config, true, &dispatcher).unwrap_err();
        assert!(matches!(err, CoreError::Extraction(ref m) if m == "Private video"));
        assert_eq!(runner.calls().len(), 1);
        assert!(!recorder.events().contains(&Event::TransferStarting));
    }

    #[test]
    fn download_failure_is_reported_without_completion() {
        let tmp = tempfile::tempdir().unwrap();
        let config = DownloadConfigBuilder::new()
            .url("https://example.com/v")
            .output_dir(tmp.path())
            .build()
            .unwrap();
        let runner = MockRunner::with_info("{}").fail_download("HTTP Error 403: Forbidden");
        let (recorder, dispatcher) = setup();

        let err = download_video(&runner, &config, true, &dispatcher).unwrap_err();
        assert_eq!(err.label(), "Download Error");
        assert!(
            !recorder
                .events()
                .iter()
                .any(|e| matches!(e, Event::DownloadComplete { .. }))
        );
    }

    #[test]
    fn format_id_download_uses_literal_selector() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("picked");
        let runner = MockRunner::default();
        let (recorder, dispatcher) = setup();

        download_format_id(&runner, "https://example.com/v", "22", &out, &dispatcher).unwrap();

        assert!(out.is_dir());
        match &runner.calls()[0] {
            MockCall::Download { options, .. } => assert_eq!(options.format, "22"),
            other => panic!("unexpected call {other:?}"),
        }
        assert_eq!(
            recorder.events().last(),
            Some(&Event::DownloadComplete { output_dir: out })
        );
    }
}
