// ytfetch-cli/src/bin/ytfetch-pick.rs
//
// Entry point of `ytfetch-pick`: list the formats of one URL, ask for a
// format code and download exactly that format to ./downloads.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use ytfetch_cli::config::{FORMAT_PROMPT, PICK_OUTPUT_DIR, URL_PROMPT};
use ytfetch_cli::input::{prompt_stdin, url_or_prompt};
use ytfetch_cli::logging::init_logging;
use ytfetch_cli::terminal::{configure_color, print_core_error, print_error, print_plain};
use ytfetch_cli::{PickCli, run_pick};
use ytfetch_core::ProcessRunner;

fn main() -> ExitCode {
    let cli = PickCli::parse();

    configure_color(cli.no_color);
    init_logging(cli.verbose);

    if cli.url.is_none() {
        print_plain("Please provide a video URL");
    }
    let url = match url_or_prompt(cli.url, || prompt_stdin(URL_PROMPT)) {
        Ok(Some(url)) => url,
        Ok(None) => {
            print_error("Error: No URL provided");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            print_core_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let runner = ProcessRunner::from_env();
    match run_pick(&runner, &url, Path::new(PICK_OUTPUT_DIR), || {
        prompt_stdin(FORMAT_PROMPT)
    }) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            print_core_error(&e);
            ExitCode::FAILURE
        }
    }
}
