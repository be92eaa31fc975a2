//! Events emitted while a download runs.
//!
//! The executor never writes to the terminal itself; it emits events and the
//! registered handlers decide how to present them.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{OutputFormat, Quality};
use crate::progress::ProgressEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// ffmpeg was not found; conversions will be skipped.
    TranscoderMissing,

    Warning {
        message: String,
    },

    DownloadStarted {
        url: String,
    },

    /// Result of the metadata-only extraction that precedes the transfer.
    MediaInfoExtracted {
        title: String,
        duration: Option<f64>,
        quality: Quality,
        format: OutputFormat,
        playlist_count: Option<usize>,
    },

    TransferStarting,

    Progress(ProgressEvent),

    DownloadComplete {
        output_dir: PathBuf,
    },
}

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &Event);
}

pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Creates a dispatcher with a single handler.
    pub fn with_handler(handler: Arc<dyn EventHandler>) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.add_handler(handler);
        dispatcher
    }

    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&self, event: Event) {
        log::trace!("event: {:?}", event);
        for handler in &self.handlers {
            handler.handle(&event);
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler that forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogEventHandler;

impl EventHandler for LogEventHandler {
    fn handle(&self, event: &Event) {
        match event {
            Event::TranscoderMissing => log::warn!("FFmpeg not found; conversions disabled"),
            Event::Warning { message } => log::warn!("{}", message),
            Event::DownloadStarted { url } => log::info!("Downloading: {}", url),
            Event::MediaInfoExtracted { title, .. } => log::info!("Title: {}", title),
            Event::TransferStarting => log::info!("Starting download..."),
            Event::Progress(progress) => log::debug!(
                "{} {} at {} (ETA {})",
                progress.status,
                progress.percent,
                progress.speed,
                progress.eta
            ),
            Event::DownloadComplete { output_dir } => {
                log::info!("Download complete: {}", output_dir.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Event>>);

    impl EventHandler for Recorder {
        fn handle(&self, event: &Event) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn emit_reaches_every_handler() {
        let first = Arc::new(Recorder::default());
        let second = Arc::new(Recorder::default());
        let mut dispatcher = EventDispatcher::with_handler(first.clone());
        dispatcher.add_handler(second.clone());
        dispatcher.add_handler(Arc::new(LogEventHandler));

        dispatcher.emit(Event::TransferStarting);
        dispatcher.emit(Event::Warning {
            message: "careful".to_string(),
        });

        assert_eq!(first.0.lock().unwrap().len(), 2);
        assert_eq!(second.0.lock().unwrap()[0], Event::TransferStarting);
    }
}
