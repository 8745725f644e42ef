use anyhow::{Context, Result};
use fern::colors::{Color, ColoredLevelConfig};
use fern::log_file;
use log::{self, info};
use std::path::PathBuf;

/// 0: off, 1: error, 2: warn, 3: info, 4: debug, 5+: trace
pub fn level_from_usize(level: usize) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Config level raised by `-v` count, clamped at trace.
pub fn level_with_verbosity(loglevel: usize, verbose: u8) -> log::LevelFilter {
    level_from_usize(loglevel.saturating_add(verbose as usize))
}

/// Logs go to stderr; stdout is reserved for the per-file confirmations.
pub fn configure_logging(loglevel: log::LevelFilter, logfile: Option<PathBuf>) -> Result<()> {
    let colors = ColoredLevelConfig::new().debug(Color::Magenta);
    let fernlog = fern::Dispatch::new()
        .level(loglevel)
        .chain(
            fern::Dispatch::new()
                // Perform allocation-free log formatting
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                        colors.color(record.level()),
                        record.target(),
                        message
                    ))
                })
                .chain(std::io::stderr()),
        );

    let fernlog = if let Some(logpath) = logfile {
        let file = log_file(&logpath)
            .with_context(|| format!("Could not use log file path {:?}", &logpath))?;
        fernlog.chain(
            fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        humantime::format_rfc3339(std::time::SystemTime::now()),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file),
        )
    } else {
        fernlog
    };

    fernlog.apply()?;
    info!("Logging at {}", loglevel);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(level_from_usize(0), log::LevelFilter::Off);
        assert_eq!(level_from_usize(2), log::LevelFilter::Warn);
        assert_eq!(level_from_usize(4), log::LevelFilter::Debug);
        assert_eq!(level_from_usize(42), log::LevelFilter::Trace);
    }

    #[test]
    fn test_verbosity_saturates() {
        assert_eq!(level_with_verbosity(2, 1), log::LevelFilter::Info);
        assert_eq!(level_with_verbosity(usize::MAX, 3), log::LevelFilter::Trace);
    }
}
