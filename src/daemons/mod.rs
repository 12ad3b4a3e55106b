//! # Daemon abstractions.
//!
//! This module provides the worker-side types:
//! - [`Daemon`] - trait every supervised worker implements
//! - [`DaemonRef`] - shared handle (`Arc<dyn Daemon>`)
//! - [`DaemonFn`] - closure-backed async daemon
//! - [`BlockingFn`] - closure-backed daemon for blocking code

mod blocking;
mod daemon;
mod daemon_fn;

pub use blocking::BlockingFn;
pub use daemon::{Daemon, DaemonRef};
pub use daemon_fn::DaemonFn;
