//! # LogWriter — stdout sink
//!
//! A minimal sink that prints every line to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! starting daemon poller...
//! connection refused
//! daemon poller failed, restarting...
//! starting daemon poller...
//! daemon poller stopped
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::loggers::Logger;

/// Stdout writer sink.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for LogWriter {
    fn printf(&self, args: fmt::Arguments<'_>) {
        // One locked write per call keeps lines from different units intact.
        let mut out = io::stdout().lock();
        let _ = out.write_fmt(args);
    }
}
