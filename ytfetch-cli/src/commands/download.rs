// ytfetch-cli/src/commands/download.rs
//
// The default `ytfetch` action: download one URL with the requested quality
// and format, reporting progress on the terminal.

use std::sync::Arc;

use log::debug;
use ytfetch_core::{DownloadConfig, DownloadOutcome, EventDispatcher, YtdlpRunner, run_download};

use crate::error::CliResult;
use crate::progress::TerminalEventHandler;

/// Downloads `config` and prints every step to stdout.
///
/// Errors are returned unprinted; the caller reports them with their label.
pub fn run_download_command<R: YtdlpRunner>(
    runner: &R,
    config: &DownloadConfig,
) -> CliResult<DownloadOutcome> {
    debug!(
        "Download requested: url={} output={} quality={} format={} audio_only={}",
        config.url,
        config.output_dir.display(),
        config.quality,
        config.format,
        config.audio_only
    );

    let dispatcher = EventDispatcher::with_handler(Arc::new(TerminalEventHandler::new()));
    let outcome = run_download(runner, config, &dispatcher)?;

    debug!("Finished downloading '{}'", outcome.title);
    Ok(outcome)
}
