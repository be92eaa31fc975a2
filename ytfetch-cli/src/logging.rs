// ============================================================================
// ytfetch-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI binaries
//
// Diagnostics use the standard `log` macros with `env_logger` as the
// backend, writing to stderr so they never mix with the user-facing output
// on stdout.
//
// USAGE:
// - default: info and above
// - --verbose: debug and above (includes every yt-dlp command line)
// - RUST_LOG: overrides both, e.g. RUST_LOG=ytfetch_core=trace

use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use owo_colors::OwoColorize;

use crate::terminal::color_enabled;

/// Initializes the global logger. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_env(Env::default())
        .target(Target::Stderr)
        .format(|buf, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };

            if color_enabled() {
                let level_colored = match record.level() {
                    log::Level::Error => level_str.bright_red().to_string(),
                    log::Level::Warn => level_str.yellow().to_string(),
                    log::Level::Info => level_str.green().to_string(),
                    log::Level::Debug => level_str.blue().to_string(),
                    log::Level::Trace => level_str.dimmed().to_string(),
                };
                writeln!(buf, "[{}] {}", level_colored, record.args())
            } else {
                writeln!(buf, "[{}] {}", level_str, record.args())
            }
        });

    // A logger may already be installed (tests, repeated calls).
    let _ = builder.try_init();
}
