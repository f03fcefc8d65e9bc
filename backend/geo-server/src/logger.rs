use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Display;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    /// Append to a file, never colored
    File(PathBuf),
    ColoredStdout,
    /// systemd, docker logs
    PlainStdout,
}

impl LogOutput {
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStdout,
            None => Self::PlainStdout,
        }
    }
}

/// `[<rfc3339> - <LEVEL>] <message> [<target>]`
pub fn render_line(
    timestamp: SystemTime,
    level: impl Display,
    message: impl Display,
    target: &str,
) -> String {
    format!(
        "[{} - {}] {} [{}]",
        humantime::format_rfc3339_seconds(timestamp),
        level,
        message,
        target
    )
}

/// Install the global fern logger
pub fn initialize(log_level: geo_config::LogLevel, output: LogOutput) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let colors = matches!(output, LogOutput::ColoredStdout).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let now = SystemTime::now();
            let line = match colors {
                Some(colors) => {
                    render_line(now, colors.color(record.level()), message, record.target())
                }
                None => render_line(now, record.level(), message, record.target()),
            };
            out.finish(format_args!("{}", line))
        });

    let dispatch = match &output {
        LogOutput::File(path) => {
            let file = fern::log_file(path).map_err(|source| ServerError::Io {
                path: path.clone(),
                source,
            })?;
            dispatch.chain(file)
        }
        LogOutput::ColoredStdout | LogOutput::PlainStdout => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    info!("Logger initialized: level={:?}, output={:?}", level_filter, output);

    Ok(())
}
