//! fern logger bootstrap shared by the server and seed binaries.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::{Arguments, Display};
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::info;

/// Resolve the log file path from the logging config, creating the
/// log directory if needed. `None` means log to stdout.
pub fn log_file_path(
    logging: &kanban_config::LoggingConfig,
) -> ServerErrorResult<Option<PathBuf>> {
    let Some(ref filename) = logging.file else {
        return Ok(None);
    };

    let log_dir = kanban_config::Config::config_dir()?.join(&logging.dir);
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}

fn write_line(out: FormatCallback, level: impl Display, message: &Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ));
}

/// Initialize the global logger.
///
/// Output goes to the given file when one is set, otherwise to stdout,
/// colored or plain. File output is always plain; color escapes would
/// end up as raw bytes in the file.
pub fn initialize(
    log_level: kanban_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let dispatch = Dispatch::new().level(log_level.0);

    let dispatch = if let Some(ref path) = log_file {
        let file = fern::log_file(path).map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })?;
        dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);
        dispatch
            .format(move |out, message, record| {
                write_line(out, colors.color(record.level()), message, record)
            })
            .chain(std::io::stdout())
    } else {
        // Plain stdout for non-TTY consumers (systemd, docker logs)
        dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout())
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            log_level.0,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", log_level.0),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
