use log::{Log, Metadata, Record};
use std::sync::{Arc, Mutex};

const MAX_MESSAGES: usize = 100;

/// Captures `log::` messages into a shared buffer the TUI renders in its
/// log pane. Writing to stdout would fight the alternate screen.
pub struct TuiLogger {
    log_buffer: Arc<Mutex<Vec<String>>>,
}

impl TuiLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let log_buffer = Arc::new(Mutex::new(Vec::new()));
        (
            TuiLogger {
                log_buffer: log_buffer.clone(),
            },
            log_buffer,
        )
    }

    pub fn init() -> Arc<Mutex<Vec<String>>> {
        let (logger, log_buffer) = Self::new();
        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(log::LevelFilter::Info))
            .expect("logger already initialized");
        log_buffer
    }
}

impl Log for TuiLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let msg = format!("{}", record.args());
            if let Ok(mut buffer) = self.log_buffer.lock() {
                buffer.push(msg);
                // Bounded so a long session cannot grow without limit.
                if buffer.len() > MAX_MESSAGES {
                    buffer.remove(0);
                }
            }
        }
    }

    fn flush(&self) {}
}
