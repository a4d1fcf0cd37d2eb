use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;

// Define where to store logs
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "generator.log";

/// Initializes the global logger.
///
/// Call once at the start of `main`. The level comes from `RUST_LOG`
/// (e.g. `RUST_LOG=debug`); without it the default is `info`, or `debug`
/// when `verbose` is set.
///
/// Progress is written to stderr (colored) and to `logs/generator.log`.
/// Stdout stays reserved for the statistics report.
pub fn init(verbose: bool) {
    let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    let log_level_filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(default_level);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn).chain(console_config);

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let file_logging = match fs::create_dir_all(LOG_DIR).and_then(|_| fern::log_file(&log_file_path)) {
        Ok(log_file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(log_file);
            base_config = base_config.chain(file_config);
            true
        }
        Err(e) => {
            eprintln!("Failed to open log file '{}': {}", log_file_path, e);
            false
        }
    };

    if let Err(e) = base_config.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    if file_logging {
        log::debug!("Logger initialized. Logging to console and '{}'.", log_file_path);
    } else {
        log::debug!("Logger initialized. Logging to console only.");
    }
}
