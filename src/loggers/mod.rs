//! # Logging sinks for daemon groups.
//!
//! This module provides the [`Logger`] trait and built-in sinks.
//!
//! ## Architecture
//! ```text
//! unit(daemon 1) ──┐
//! unit(daemon 2) ──┼──► Arc<dyn Logger> ──► printf / print / println
//! unit(daemon N) ──┘      (shared, unsynchronized by the group)
//! ```
//!
//! ## Built-in sinks
//! - [`TracingLogger`] forwards lines to `tracing`
//! - `LogWriter` prints to stdout (feature `logging`)

#[cfg(feature = "logging")]
mod log;
mod logger;
#[cfg(test)]
pub(crate) mod recorder;
mod trace;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use logger::Logger;
pub use trace::TracingLogger;
