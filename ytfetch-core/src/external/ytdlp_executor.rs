// ============================================================================
// ytfetch-core/src/external/ytdlp_executor.rs
// ============================================================================
//
// YT-DLP EXECUTOR: yt-dlp Process Management and Abstraction
//
// This module provides the trait the rest of the crate uses to talk to
// yt-dlp, and the implementation that runs the real executable.
//
// KEY COMPONENTS:
// - YtdlpRunner: Trait for metadata extraction and downloads
// - ProcessRunner: Concrete implementation spawning the yt-dlp program
//
// ARCHITECTURE:
// Extraction failures map to CoreError::Extraction and download failures to
// CoreError::Download, each carrying yt-dlp's own error line. During a
// download stderr is drained on a helper thread while stdout progress lines
// are parsed on the calling thread.

use std::env;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::thread;

use crate::config::{YTDLP_ENV_VAR, YTDLP_PROGRAM};
use crate::error::{
    CoreError, CoreResult, command_start_error, command_wait_error, exit_status_message,
};
use crate::external::{YtdlpCommandBuilder, log_command};
use crate::media::MediaInfo;
use crate::options::YtdlOptions;
use crate::progress::{ProgressEvent, parse_progress_line};

// --- yt-dlp Execution Abstraction ---

/// Something that can extract metadata and download with yt-dlp semantics.
pub trait YtdlpRunner {
    /// Extracts metadata for `url` without downloading.
    ///
    /// When `format` is given, yt-dlp also verifies the selector can be met.
    fn extract_info(&self, url: &str, format: Option<&str>) -> CoreResult<MediaInfo>;

    /// Downloads `url` with `options`, calling `on_progress` for each update.
    fn download<F>(&self, url: &str, options: &YtdlOptions, on_progress: F) -> CoreResult<()>
    where
        F: FnMut(ProgressEvent);
}

// --- Concrete Implementation using the yt-dlp executable ---

/// Runs the yt-dlp executable as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(YTDLP_PROGRAM)
    }
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `$YTFETCH_YTDLP` when set and non-empty, else `yt-dlp`.
    pub fn from_env() -> Self {
        match env::var_os(YTDLP_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl YtdlpRunner for ProcessRunner {
    fn extract_info(&self, url: &str, format: Option<&str>) -> CoreResult<MediaInfo> {
        let name = self.name();
        let mut cmd = YtdlpCommandBuilder::new(&self.program)
            .metadata_only(format)
            .url(url)
            .build();
        log_command(&cmd);

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_start_error(&name, e))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            log::debug!("yt-dlp: {}", line);
        }

        if !output.status.success() {
            return Err(CoreError::Extraction(failure_message(
                &name,
                output.status,
                stderr.lines(),
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Err(CoreError::Extraction(
                "Could not extract video information".to_string(),
            ));
        }
        MediaInfo::from_json(&stdout)
    }

    fn download<F>(&self, url: &str, options: &YtdlOptions, mut on_progress: F) -> CoreResult<()>
    where
        F: FnMut(ProgressEvent),
    {
        let name = self.name();
        let mut cmd = YtdlpCommandBuilder::new(&self.program)
            .with_options(options)
            .with_progress()
            .url(url)
            .build();
        log_command(&cmd);

        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| command_start_error(&name, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| CoreError::OperationFailed("yt-dlp stdout was not captured".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| CoreError::OperationFailed("yt-dlp stderr was not captured".to_string()))?;

        let stderr_handle = thread::spawn(move || {
            let mut reader = BufReader::new(stderr);
            let mut lines = Vec::new();
            while let Ok(Some(line)) = read_lossy_line(&mut reader) {
                log::debug!("yt-dlp: {}", line);
                lines.push(line);
            }
            lines
        });

        let mut reader = BufReader::new(stdout);
        loop {
            let line = match read_lossy_line(&mut reader) {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CoreError::Io(e));
                }
            };
            match parse_progress_line(&line) {
                Some(event) => on_progress(event),
                None => log::debug!("yt-dlp: {}", line),
            }
        }

        let status = child.wait().map_err(|e| command_wait_error(&name, e))?;
        let stderr_lines = stderr_handle.join().unwrap_or_default();

        if status.success() {
            Ok(())
        } else {
            Err(CoreError::Download(failure_message(
                &name,
                status,
                stderr_lines.iter().map(String::as_str),
            )))
        }
    }
}

/// Reads one line, replacing invalid UTF-8 and dropping the line ending.
///
/// Returns `Ok(None)` at end of stream.
fn read_lossy_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Picks the most useful line from yt-dlp's stderr for a failed run.
///
/// Prefers the last `ERROR:` line (without the prefix), then the last
/// non-empty line, then a description of the exit status.
fn failure_message<'a>(
    program: &str,
    status: ExitStatus,
    stderr: impl Iterator<Item = &'a str>,
) -> String {
    let mut last_error = None;
    let mut last_line = None;
    for line in stderr.map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(message) = line.strip_prefix("ERROR:") {
            last_error = Some(message.trim());
        }
        last_line = Some(line);
    }

    last_error
        .or(last_line)
        .map(str::to_string)
        .unwrap_or_else(|| exit_status_message(program, status))
}
