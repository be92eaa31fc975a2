// ytfetch-cli/src/input.rs
//
// Line prompts on stdin.

use std::io::{self, BufRead, Write};

use crate::error::{CliErrorContext, CliResult};

/// Writes `message`, reads one line and returns it trimmed.
///
/// End of input yields an empty string.
pub fn prompt<R: BufRead, W: Write>(message: &str, input: &mut R, output: &mut W) -> CliResult<String> {
    write!(output, "{message}").cli_context("Failed to write prompt")?;
    output.flush().cli_context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .cli_context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Prompts on the real terminal.
pub fn prompt_stdin(message: &str) -> CliResult<String> {
    prompt(message, &mut io::stdin().lock(), &mut io::stdout().lock())
}

/// Returns the URL given on the command line, or asks for one.
///
/// Blank answers and end of input produce `None`.
pub fn url_or_prompt<F>(given: Option<String>, ask: F) -> CliResult<Option<String>>
where
    F: FnOnce() -> CliResult<String>,
{
    let url = match given {
        Some(url) => url.trim().to_string(),
        None => ask()?,
    };
    Ok(if url.is_empty() { None } else { Some(url) })
}
