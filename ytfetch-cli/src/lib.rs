// ytfetch-cli/src/lib.rs
//
// Library portion of the ytfetch CLI binaries.
// Contains argument definitions, terminal output and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod progress;
pub mod terminal;

// Re-export items needed by the binaries or integration tests
pub use cli::{Cli, PickCli};
pub use commands::{PickOutcome, run_download_command, run_list_formats, run_pick};
pub use error::{CliErrorContext, CliResult};
