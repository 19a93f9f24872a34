use log::{LevelFilter, Log, Metadata, Record};
use std::time::SystemTime;

pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);

            let location = match (record.file(), record.line()) {
                (Some(file), Some(line)) => format!("{}:{}", file, line),
                (Some(file), None) => file.to_string(),
                (None, _) => String::from("unknown location"),
            };

            println!(
                "[{timestamp}][{level}][{target}][{location}] {message}",
                timestamp = timestamp,
                level = record.level(),
                target = record.target(),
                location = location,
                message = record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. `level` caps what the generator reports; `Trace` logs
/// every step.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    static LOGGER: SimpleLogger = SimpleLogger;

    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_enabled_follows_max_level() {
        // Installing the global logger would leak into other tests; only the
        // filter is checked here.
        log::set_max_level(LevelFilter::Debug);
        let logger = SimpleLogger;
        let debug = Metadata::builder().level(Level::Debug).target("jassprng").build();
        let trace = Metadata::builder().level(Level::Trace).target("jassprng").build();
        assert!(logger.enabled(&debug));
        assert!(!logger.enabled(&trace));
        log::set_max_level(LevelFilter::Off);
    }
}
