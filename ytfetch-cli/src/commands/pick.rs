// ytfetch-cli/src/commands/pick.rs
//
// The `ytfetch-pick` flow: list the formats of a URL, ask which one to
// fetch, then download exactly that format.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use ytfetch_core::{EventDispatcher, YtdlpRunner, download_format_id, list_formats};

use crate::error::CliResult;
use crate::progress::TerminalEventHandler;
use crate::terminal::{print_error, print_formats, print_plain, print_success};

/// How a pick session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Downloaded,
    /// The user entered an empty format code.
    NoSelection,
    ListingFailed,
    DownloadFailed,
}

impl PickOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            PickOutcome::Downloaded | PickOutcome::NoSelection => ExitCode::SUCCESS,
            PickOutcome::ListingFailed | PickOutcome::DownloadFailed => ExitCode::FAILURE,
        }
    }
}

/// Lists formats for `url`, asks for a format code via `choose` and
/// downloads it into `output_dir`.
///
/// Listing and download failures are printed here and reported through the
/// outcome; only a failure to read the user's choice is returned as `Err`.
pub fn run_pick<R, F>(runner: &R, url: &str, output_dir: &Path, choose: F) -> CliResult<PickOutcome>
where
    R: YtdlpRunner,
    F: FnOnce() -> CliResult<String>,
{
    print_plain(&format!("Listing available formats for: {url}"));
    let formats = match list_formats(runner, url) {
        Ok(formats) => formats,
        Err(e) => {
            print_error(&format!("Error listing formats: {e}"));
            print_plain("Failed to list formats. Exiting.");
            return Ok(PickOutcome::ListingFailed);
        }
    };
    print_formats(&formats);

    let format_id = choose()?;
    if format_id.is_empty() {
        print_plain("No format selected. Exiting.");
        return Ok(PickOutcome::NoSelection);
    }

    print_plain(&format!("Downloading format {format_id} from: {url}"));
    let dispatcher = EventDispatcher::with_handler(Arc::new(TerminalEventHandler::progress_only()));
    match download_format_id(runner, url, &format_id, output_dir, &dispatcher) {
        Ok(()) => {
            print_success("\nDownload complete!");
            Ok(PickOutcome::Downloaded)
        }
        Err(e) => {
            print_error(&format!("\nDownload error: {e}"));
            Ok(PickOutcome::DownloadFailed)
        }
    }
}
