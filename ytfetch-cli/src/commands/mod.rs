// ytfetch-cli/src/commands/mod.rs
//
// One module per thing a user can ask for: a download, a format listing,
// or the interactive pick-then-download flow.

pub mod download;
pub mod list;
pub mod pick;

pub use download::run_download_command;
pub use list::run_list_formats;
pub use pick::{PickOutcome, run_pick};
