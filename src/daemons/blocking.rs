//! # Blocking daemon adapter (`BlockingFn`)
//!
//! Wraps a synchronous closure that blocks the calling thread until the work is
//! done. Every start runs the closure on tokio's blocking pool, so a blocking
//! daemon never stalls the async workers that drive its siblings.
//!
//! A panic inside the closure is caught on the blocking thread together with its
//! panic-site backtrace, then re-raised on the async side, where the group
//! contains it like any other daemon panic.
//!
//! ## Example
//! ```rust
//! use daemonvisor::{BlockingFn, DaemonError, DaemonRef};
//!
//! let d: DaemonRef = BlockingFn::arc(|| {
//!     std::thread::sleep(std::time::Duration::from_millis(10));
//!     Ok::<_, DaemonError>(())
//! });
//! # let _ = d;
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;

use crate::core::fault;
use crate::daemons::daemon::Daemon;
use crate::error::DaemonError;

/// Daemon backed by a blocking closure.
pub struct BlockingFn<F> {
    f: Arc<F>,
}

impl<F> BlockingFn<F> {
    /// Creates a new blocking daemon.
    pub fn new(f: F) -> Self {
        Self { f: Arc::new(f) }
    }

    /// Creates the daemon and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F> Daemon for BlockingFn<F>
where
    F: Fn() -> Result<(), DaemonError> + Send + Sync + 'static,
{
    async fn start(&self) -> Result<(), DaemonError> {
        let f = Arc::clone(&self.f);
        let joined = task::spawn_blocking(move || {
            panic::catch_unwind(AssertUnwindSafe(|| (*f)()))
                .map_err(|payload| (payload, fault::take_backtrace()))
        })
        .await;

        match joined {
            Ok(Ok(res)) => res,
            Ok(Err((payload, bt))) => {
                if let Some(bt) = bt {
                    fault::stash(bt);
                }
                panic::resume_unwind(payload)
            }
            // The blocking pool only cancels jobs while the runtime shuts down.
            Err(je) => Err(DaemonError::fail(je)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[tokio::test]
    async fn test_returns_closure_result() {
        let ok = BlockingFn::new(|| Ok::<_, DaemonError>(()));
        assert!(ok.start().await.is_ok());

        let failing = BlockingFn::new(|| Err(DaemonError::fail("no route")));
        let err = failing.start().await.unwrap_err();
        assert_eq!(err.to_string(), "no route");
    }

    #[tokio::test]
    async fn test_panic_resurfaces_on_async_side() {
        let d = BlockingFn::new(|| -> Result<(), DaemonError> { panic!("blocking boom") });
        let caught = AssertUnwindSafe(d.start()).catch_unwind().await;
        let payload = caught.expect_err("panic must propagate");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"blocking boom"));
    }

    #[inline(never)]
    fn blocking_fault_site() -> Result<(), DaemonError> {
        panic!("blocking fault")
    }

    #[tokio::test]
    async fn test_panic_site_backtrace_follows_the_panic() {
        fault::install_hook();
        let d = BlockingFn::new(blocking_fault_site);
        let caught = AssertUnwindSafe(d.start()).catch_unwind().await;
        assert!(caught.is_err());

        let bt = fault::take_backtrace().expect("backtrace stashed on this thread");
        assert!(bt.to_string().contains("blocking_fault_site"));
    }
}
