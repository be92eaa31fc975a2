// ============================================================================
// ytfetch-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// This module owns everything ytfetch writes to stdout for the user: the
// start-up banner, colored status lines, the single overwritten progress
// line and the format listing. Diagnostics go through the `log` facade and
// end up on stderr instead.
//
// KEY COMPONENTS:
// - styling: Banner text and line control
// - Color control: set_color / configure_color / color_enabled
// - UI component functions: print_banner, print_success, print_error, ...
//
// Every function writes to a generic `Write` in a `write_*` form so the
// output can be checked in tests; the `print_*` wrappers target stdout.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use ytfetch_core::{CoreError, FormatDescriptor, format_line};

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

/// Styling constants for terminal output
pub mod styling {
    pub const BANNER: &str = "\
╔══════════════════════════════════════════════════╗
║                    ytfetch                       ║
║       Video Downloader with Format Conversion    ║
╚══════════════════════════════════════════════════╝";

    /// Carriage return used to redraw the progress line in place.
    pub const LINE_RESET: &str = "\r";
}

// ============================================================================
// COLOR CONTROL
// ============================================================================

// Global color setting
static USE_COLOR: AtomicBool = AtomicBool::new(true);

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

/// Check if color should be used
pub fn color_enabled() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
}

/// Enables color only when allowed by the flag and supported by stdout.
///
/// `supports-color` also honours `NO_COLOR` and `FORCE_COLOR`.
pub fn configure_color(no_color: bool) {
    let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
    set_color(!no_color && supported);
}

// ============================================================================
// TERMINAL COMPONENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Header,
}

fn styled(message: &str, tone: Tone) -> String {
    if !color_enabled() {
        return message.to_string();
    }
    match tone {
        Tone::Plain => message.to_string(),
        Tone::Info => message.blue().to_string(),
        Tone::Success => message.green().to_string(),
        Tone::Warning => message.yellow().to_string(),
        Tone::Error => message.red().to_string(),
        Tone::Header => message.magenta().bold().to_string(),
    }
}

fn write_line<W: Write>(out: &mut W, message: &str, tone: Tone) -> io::Result<()> {
    writeln!(out, "{}", styled(message, tone))
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write_line(out, styling::BANNER, Tone::Header)?;
    writeln!(out)
}

pub fn write_plain<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message, Tone::Plain)
}

pub fn write_info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message, Tone::Info)
}

pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message, Tone::Success)
}

pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message, Tone::Warning)
}

pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_line(out, message, Tone::Error)
}

/// Writes a failure with its category label, e.g. `Download Error: HTTP 403`.
pub fn write_core_error<W: Write>(out: &mut W, error: &CoreError) -> io::Result<()> {
    writeln!(out)?;
    write_error(out, &error.report())
}

/// Overwrites the current line with `message` and leaves the cursor on it.
pub fn write_status_line<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write!(out, "{}{}", styling::LINE_RESET, message)?;
    out.flush()
}

/// Writes the `Available Formats:` header followed by one line per format.
pub fn write_formats<W: Write>(out: &mut W, formats: &[FormatDescriptor]) -> io::Result<()> {
    writeln!(out)?;
    write_line(out, "Available Formats:", Tone::Plain)?;
    for format in formats {
        writeln!(out, "{}", format_line(format))?;
    }
    Ok(())
}

// ---- stdout wrappers ----
// Failed writes to stdout (closed pipe) are ignored.

pub fn print_banner() {
    let _ = write_banner(&mut io::stdout().lock());
}

pub fn print_success(message: &str) {
    let _ = write_success(&mut io::stdout().lock(), message);
}

pub fn print_error(message: &str) {
    let _ = write_error(&mut io::stdout().lock(), message);
}

pub fn print_plain(message: &str) {
    let _ = write_plain(&mut io::stdout().lock(), message);
}

pub fn print_core_error(error: &CoreError) {
    let _ = write_core_error(&mut io::stdout().lock(), error);
}

pub fn print_formats(formats: &[FormatDescriptor]) {
    let _ = write_formats(&mut io::stdout().lock(), formats);
}
