// src/logging.rs
//
// Minimal stdout backend for the `log` facade, installed by the binary.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

struct StdoutLogger;

static LOGGER: StdoutLogger = StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = std::io::stdout().lock();
        let _ = writeln!(
            out,
            "[{:<5} {}] {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Parses a level name; unknown names fall back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Installs the stdout logger. Calling it twice only updates the level.
pub fn init(level: &str) {
    let filter = parse_level(level);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    if filter >= Level::Info {
        log::info!("logging at {}", filter);
    }
}
