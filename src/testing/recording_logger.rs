use std::sync::Mutex;

use crate::ports::{InvokerLogger, LogLevel};

#[derive(Default)]
pub struct RecordingLogger {
    pub entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.entries.lock().unwrap().iter().any(|(_, message)| message.contains(fragment))
    }
}

impl InvokerLogger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.lock().unwrap().push((level, message.to_string()));
    }
}
