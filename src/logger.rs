use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

pub const LOG_FILE: &str = "flashcards_debug.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the debug log. Safe to call more than once; failures leave logging
/// disabled.
pub fn init() {
    if let Ok(mut logger) = LOGGER.lock()
        && logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_FILE)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_noop() {
        log("dropped on the floor");
    }

    #[test]
    fn test_logger_init_and_log() {
        init();
        init();
        log("Test log message");
    }
}
