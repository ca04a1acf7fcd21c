//! Minimal `log` backend writing to stderr.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `CLUBGRID_LOG` if set and valid, else `debug` when verbose
/// and `warn` otherwise.
pub fn level(verbose: bool, env_value: Option<&str>) -> LevelFilter {
    env_value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
}

pub fn init(verbose: bool) {
    let env_value = std::env::var("CLUBGRID_LOG").ok();
    let level = level(verbose, env_value.as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
