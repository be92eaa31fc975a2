// ============================================================================
// ytfetch-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Terminal presentation of download events
//
// TerminalEventHandler turns the events emitted by ytfetch-core into the
// lines a user sees: warnings, the media summary, a single progress line
// that is redrawn in place, and the completion message.
//
// The handler keeps no state between events. A progress update always
// overwrites the current line, and every message that follows a progress
// update starts with a newline of its own.

use std::io::{self, Write};

use console::Term;
use ytfetch_core::events::{Event, EventHandler};
use ytfetch_core::progress::{ProgressEvent, ProgressStatus};
use ytfetch_core::utils::format_seconds;

use crate::terminal::{
    write_info, write_plain, write_status_line, write_success, write_warning,
};

/// Prints download events to stdout.
#[derive(Debug, Clone, Copy)]
pub struct TerminalEventHandler {
    report_steps: bool,
}

impl TerminalEventHandler {
    /// Full reporting: warnings, media summary, progress and completion.
    pub fn new() -> Self {
        Self { report_steps: true }
    }

    /// Only the progress line. Used when the caller prints its own messages.
    pub fn progress_only() -> Self {
        Self {
            report_steps: false,
        }
    }

    /// Writes the output for one event.
    pub fn render<W: Write>(&self, out: &mut W, event: &Event) -> io::Result<()> {
        if let Event::Progress(progress) = event {
            return render_progress(out, progress);
        }
        if !self.report_steps {
            return Ok(());
        }

        match event {
            Event::TranscoderMissing => {
                write_warning(
                    out,
                    "\nWarning: FFmpeg not found. Some format conversions may not work properly.",
                )?;
                write_warning(out, "For best results, install FFmpeg and add it to your PATH.")
            }
            Event::Warning { message } => write_warning(out, message),
            Event::DownloadStarted { url } => write_info(out, &format!("\nDownloading: {url}")),
            Event::MediaInfoExtracted {
                title,
                duration,
                quality,
                format,
                playlist_count,
            } => {
                write_info(out, &format!("\nTitle: {title}"))?;
                write_info(out, &format!("Duration: {} seconds", format_seconds(*duration)))?;
                write_info(out, &format!("Quality: {quality}"))?;
                write_info(
                    out,
                    &format!("Requested Format: {}", format.as_str().to_uppercase()),
                )?;
                if let Some(count) = playlist_count {
                    write_info(out, &format!("Videos in playlist: {count}"))?;
                }
                Ok(())
            }
            Event::TransferStarting => write_plain(out, "\nStarting download..."),
            Event::DownloadComplete { output_dir } => {
                write_success(out, "\nDownload complete!")?;
                write_info(out, &format!("Saved to: {}", output_dir.display()))
            }
            Event::Progress(_) => Ok(()),
        }
    }
}

impl Default for TerminalEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for TerminalEventHandler {
    fn handle(&self, event: &Event) {
        if matches!(event, Event::Progress(_)) {
            // A shorter update must not leave the tail of the previous one.
            let term = Term::stdout();
            if term.is_term() {
                let _ = term.clear_line();
            }
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.render(&mut out, event) {
            log::debug!("Failed to write to stdout: {}", e);
        }
    }
}

fn render_progress<W: Write>(out: &mut W, progress: &ProgressEvent) -> io::Result<()> {
    match progress.status {
        ProgressStatus::Downloading => write_status_line(
            out,
            &format!(
                "Progress: {} | Speed: {} | ETA: {}",
                progress.percent, progress.speed, progress.eta
            ),
        ),
        ProgressStatus::Finished => {
            write_status_line(out, "Download complete! Finalizing file...")
        }
        ProgressStatus::Error => Ok(()),
    }
}
