//! fern-backed `log` output shared by both service binaries.
//!
//! Every line carries the service name and process id, since the content and
//! suggestion services usually run side by side and may share a log
//! directory.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, Record, info};

/// Dependencies that log every statement or frame at info/debug
const NOISY_TARGETS: [&str; 3] = ["sqlx", "hyper", "h2"];

/// Where log lines go
enum LogTarget {
    /// Append to a file; warnings and errors are mirrored to stderr
    File(PathBuf),
    Stdout { colored: bool },
}

/// Initialize logger with fern
///
/// # Arguments
/// * `service` - Service name tagged onto every line
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    service: &'static str,
    log_level: cs_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let target = match log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stdout { colored },
    };

    let mut dispatch = Dispatch::new().level(level_filter);
    for noisy in NOISY_TARGETS {
        dispatch = dispatch.level_for(noisy, level_filter.min(LevelFilter::Warn));
    }

    let tag = ServiceTag {
        service,
        pid: std::process::id(),
    };

    dispatch = match &target {
        LogTarget::File(path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;

            dispatch
                .chain(plain(tag).chain(file))
                .chain(plain(tag).level(LevelFilter::Warn).chain(std::io::stderr()))
        }
        LogTarget::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            dispatch.chain(
                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!(
                            "[{} - {}] {} {} [{}]",
                            humantime::format_rfc3339(SystemTime::now()),
                            colors.color(record.level()),
                            tag,
                            message,
                            source_location(record),
                        ))
                    })
                    .chain(std::io::stdout()),
            )
        }
        // Plain output for non-TTY (systemd, docker logs)
        LogTarget::Stdout { colored: false } => dispatch.chain(plain(tag).chain(std::io::stdout())),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match target {
        LogTarget::File(path) => info!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        LogTarget::Stdout { colored } => info!(
            "Logger initialized: level={}, stdout (colored: {})",
            log_level, colored
        ),
    }

    Ok(())
}

/// `[service pid]` prefix
#[derive(Clone, Copy)]
struct ServiceTag {
    service: &'static str,
    pid: u32,
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.service, self.pid)
    }
}

fn plain(tag: ServiceTag) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        out.finish(format_args!(
            "[{} - {}] {} {} [{}]",
            humantime::format_rfc3339(SystemTime::now()),
            record.level(),
            tag,
            message,
            source_location(record),
        ))
    })
}

fn source_location(record: &Record) -> String {
    format!(
        "{}:{}",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}
