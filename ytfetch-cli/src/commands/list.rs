// ytfetch-cli/src/commands/list.rs

use ytfetch_core::{YtdlpRunner, list_formats};

use crate::error::CliResult;
use crate::terminal::print_formats;

/// Prints the formats available for `url`, lowest height first.
///
/// Returns the number of formats listed.
pub fn run_list_formats<R: YtdlpRunner>(runner: &R, url: &str) -> CliResult<usize> {
    let formats = list_formats(runner, url)?;
    print_formats(&formats);
    Ok(formats.len())
}
