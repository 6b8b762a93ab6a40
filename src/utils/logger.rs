use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::println;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        println!("[{:>5}] {}", level_tag(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Level picked with `LOG=<level>` at build time, `Info` otherwise.
pub fn build_level() -> LevelFilter {
    level_from(option_env!("LOG"))
}

fn level_from(name: Option<&str>) -> LevelFilter {
    match name {
        Some("ERROR") | Some("error") => LevelFilter::Error,
        Some("WARN") | Some("warn") => LevelFilter::Warn,
        Some("INFO") | Some("info") => LevelFilter::Info,
        Some("DEBUG") | Some("debug") => LevelFilter::Debug,
        Some("TRACE") | Some("trace") => LevelFilter::Trace,
        Some("OFF") | Some("off") => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Routes `log` records to the board's debug UART, or drops them on
/// builds without one.
///
/// Only for hosts without a logger of their own; fails if one is
/// already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(build_level());
    Ok(())
}
