//! # Daemon capability.
//!
//! This module defines the [`Daemon`] trait, the single capability a worker must
//! provide to be supervised, and [`DaemonRef`], the shared handle stored by the
//! group registry.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DaemonError;

/// # Long-running unit of work.
///
/// [`start`](Daemon::start) runs until the daemon is done (`Ok`) or has failed (`Err`).
/// A panic inside `start` is contained by the group and treated like an error.
///
/// The same instance is started again on restart, so per-run state should be
/// created inside `start`; shared state must be synchronized by the implementor.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use daemonvisor::{Daemon, DaemonError};
///
/// struct Heartbeat;
///
/// #[async_trait]
/// impl Daemon for Heartbeat {
///     async fn start(&self) -> Result<(), DaemonError> {
///         // serve until done...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Daemon: Send + Sync + 'static {
    /// Runs the daemon to completion or failure.
    async fn start(&self) -> Result<(), DaemonError>;
}

/// Shared handle to a daemon (`Arc<dyn Daemon>`).
pub type DaemonRef = Arc<dyn Daemon>;
