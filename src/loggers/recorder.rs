//! In-memory sink for unit tests.

use std::fmt;
use std::sync::Mutex;

use crate::loggers::Logger;

/// Records every `printf` call as one line (trailing newline stripped).
#[derive(Default)]
pub(crate) struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for Recorder {
    fn printf(&self, args: fmt::Arguments<'_>) {
        let line = args.to_string();
        self.lines
            .lock()
            .unwrap()
            .push(line.trim_end_matches('\n').to_string());
    }
}
