// ============================================================================
// ytfetch-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses ytfetch-core's error type so that every failure keeps its
// category (Extractor Error, Download Error, Unexpected Error) all the way
// to the point where it is printed and turned into an exit code.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: Prefix I/O failures with what was being attempted

use std::fmt;
use std::io;

use ytfetch_core::{CoreError, CoreResult};

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Turns an I/O error into `CoreError::OperationFailed` prefixed with
/// `context`, e.g. "Failed to read input: broken pipe".
pub trait CliErrorContext<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T> CliErrorContext<T> for io::Result<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| CoreError::OperationFailed(format!("{context}: {e}")))
    }
}
