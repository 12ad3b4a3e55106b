//! # TracingLogger — sink backed by `tracing`
//!
//! Forwards every line to the `tracing` facade at `INFO` level under target
//! `daemonvisor`, with the trailing newline stripped. Output ends up wherever the
//! application's subscriber sends it.
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO daemonvisor: starting daemon poller...
//! INFO daemonvisor: connection refused
//! INFO daemonvisor: daemon poller failed, restarting...
//! ```

use std::fmt;

use crate::loggers::Logger;

/// Sink that emits each line as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    /// Construct a new [`TracingLogger`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn printf(&self, args: fmt::Arguments<'_>) {
        let line = args.to_string();
        let line = line.trim_end_matches('\n');
        if !line.is_empty() {
            tracing::info!(target: "daemonvisor", "{line}");
        }
    }
}
