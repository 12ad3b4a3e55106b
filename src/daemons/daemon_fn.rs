//! # Function-backed daemon (`DaemonFn`)
//!
//! [`DaemonFn`] wraps a closure `F: Fn() -> Fut`, producing a fresh future per start.
//! Restarts never share hidden state; if state must survive a restart, capture an
//! `Arc<...>` explicitly inside the closure.
//!
//! ## Example
//! ```rust
//! use daemonvisor::{DaemonError, DaemonFn, DaemonRef};
//!
//! let d: DaemonRef = DaemonFn::arc(|| async {
//!     // do work...
//!     Ok::<_, DaemonError>(())
//! });
//! # let _ = d;
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::daemons::daemon::Daemon;
use crate::error::DaemonError;

/// Function-backed daemon implementation.
///
/// Wraps a closure that *creates* a new future per start.
#[derive(Debug)]
pub struct DaemonFn<F> {
    f: F,
}

impl<F> DaemonFn<F> {
    /// Creates a new function-backed daemon.
    ///
    /// Prefer [`DaemonFn::arc`] when you immediately need a [`DaemonRef`](crate::DaemonRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the daemon and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Daemon for DaemonFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), DaemonError>> + Send + 'static,
{
    async fn start(&self) -> Result<(), DaemonError> {
        (self.f)().await
    }
}
