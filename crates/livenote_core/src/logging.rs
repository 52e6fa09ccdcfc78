//! Diagnostics logging bootstrap.
//!
//! # Responsibility
//! - Start a rolling file backend for the crate's `log` events, once per
//!   process, when the host asks for it.
//! - Keep diagnostic events metadata-only; note bodies are never logged.
//!
//! # Invariants
//! - Initialization is idempotent for the same level and directory.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "livenote";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Accepted level spellings and the `flexi_logger` spec each maps to.
const LEVEL_ALIASES: &[(&str, &str)] = &[
    ("trace", "trace"),
    ("debug", "debug"),
    ("info", "info"),
    ("warn", "warn"),
    ("warning", "warn"),
    ("error", "error"),
];

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes diagnostics logging with `level` into `log_dir`.
///
/// # Errors
/// - Returns an error when `level` is not one of `trace|debug|info|warn|error`.
/// - Returns an error when `log_dir` is empty, relative, or cannot be created.
/// - Returns an error when logging is already active with another config.
/// - Returns an error when the backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = resolve_level(level)?;
    let log_dir = resolve_log_dir(log_dir)?;

    let state = LOGGING_STATE.get_or_try_init(|| start_backend(level, &log_dir))?;
    ensure_same_config(state, level, &log_dir)
}

/// Level and directory the diagnostics backend was started with.
///
/// `None` until `init_logging` has succeeded once in this process.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    let state = LOGGING_STATE.get()?;
    Some((state.level, state.log_dir.clone()))
}

/// Level hosts should pass when they have no preference of their own.
///
/// Debug builds record the `note_log_clear` events; release builds keep
/// only initialization events.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_backend(level: &'static str, log_dir: &Path) -> Result<LoggingState, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=livenote status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    })
}

fn ensure_same_config(state: &LoggingState, level: &str, log_dir: &Path) -> Result<(), String> {
    if state.log_dir.as_path() != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }
    Ok(())
}

fn resolve_level(level: &str) -> Result<&'static str, String> {
    let wanted = level.trim().to_ascii_lowercase();
    LEVEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, spec)| *spec)
        .ok_or_else(|| {
            format!(
                "diagnostics level `{wanted}` is not supported; use trace, debug, info, warn or error"
            )
        })
}

fn resolve_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let candidate = PathBuf::from(log_dir.trim());
    if candidate.as_os_str().is_empty() {
        return Err("diagnostics directory must not be blank".to_string());
    }
    if candidate.is_relative() {
        return Err(format!(
            "diagnostics directory `{}` is not absolute",
            candidate.display()
        ));
    }
    Ok(candidate)
}
