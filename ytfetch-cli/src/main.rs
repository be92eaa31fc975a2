// ytfetch-cli/src/main.rs
//
// Entry point of `ytfetch`, the flag-driven downloader.
//
// Responsibilities:
// - Parsing arguments and configuring color and logging.
// - Obtaining the URL (argument or prompt).
// - Dispatching to the format listing or the download command.
// - Printing failures with their label and mapping them to exit code 1.

use std::process::ExitCode;

use clap::Parser;
use ytfetch_cli::config::URL_PROMPT;
use ytfetch_cli::input::{prompt_stdin, url_or_prompt};
use ytfetch_cli::logging::init_logging;
use ytfetch_cli::terminal::{configure_color, print_banner, print_core_error, print_error};
use ytfetch_cli::{Cli, run_download_command, run_list_formats};
use ytfetch_core::{DownloadConfigBuilder, ProcessRunner};

fn main() -> ExitCode {
    let cli = Cli::parse();

    configure_color(cli.no_color);
    init_logging(cli.verbose);
    print_banner();

    run(cli)
}

fn run(cli: Cli) -> ExitCode {
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
    log::debug!("Using yt-dlp at {}", runner.program().display());

    if cli.list_formats {
        return match run_list_formats(&runner, &url) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                print_error(&format!("Error listing formats: {e}"));
                ExitCode::FAILURE
            }
        };
    }

    let result = DownloadConfigBuilder::new()
        .url(url)
        .output_dir(cli.output_dir)
        .quality(cli.quality)
        .format(cli.format)
        .audio_only(cli.audio_only)
        .build()
        .and_then(|config| run_download_command(&runner, &config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_core_error(&e);
            ExitCode::FAILURE
        }
    }
}
