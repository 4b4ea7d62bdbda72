use gloo_console::{debug, error, info, trace, warn};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: Logger = Logger;

/// Installs the console logger. Repeated calls are ignored.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Logger;

impl Log for Logger {
    #[inline]
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    #[inline]
    fn log(&self, record: &Record) {
        let message = record.args().to_string();

        match record.level() {
            Level::Error => error!(message),
            Level::Warn => warn!(message),
            Level::Info => info!(message),
            Level::Debug => debug!(message),
            Level::Trace => trace!(message),
        }
    }

    #[inline]
    fn flush(&self) {}
}
