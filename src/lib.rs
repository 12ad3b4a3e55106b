//! # daemonvisor
//!
//! **Daemonvisor** runs a group of long-lived in-process daemons concurrently,
//! logs how each one ends, and restarts failed daemons when asked to.
//!
//! A daemon is anything implementing [`Daemon`]: one async `start` that runs until
//! the work is done or has failed. A panic inside a daemon is contained at its own
//! task boundary and handled exactly like a returned error, so one faulty daemon
//! never takes down the group or its siblings.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  DaemonRef   │   │  DaemonRef   │   │  DaemonRef   │
//!     │ "a", restart │   │ "b", never   │   │ "c", restart │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  DaemonGroup                                                      │
//! │  - Registry (ordered registrations, consumed by start)            │
//! │  - Arc<dyn Logger> (shared sink, no serialization imposed)        │
//! │  - GroupConfig                                                    │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ DaemonActor  │   │ DaemonActor  │   │ DaemonActor  │
//!     │(restart loop)│   │(restart loop)│   │(restart loop)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            └──────────────────┼──────────────────┘
//!                               ▼
//!                     JoinSet::join_next() until empty
//! ```
//!
//! ### Lifecycle
//! ```text
//! loop {
//!   ├─► log "starting daemon <name>..."
//!   ├─► run_once(daemon)   (catch_unwind: panic → DaemonError::Panic + stderr backtrace)
//!   │       │
//!   │       ├─ Ok  ──► log "daemon <name> stopped", exit
//!   │       │
//!   │       └─ Err ──► log error
//!   │                  ├─ RestartPolicy::Never     ─► log "daemon <name> stopped", exit
//!   │                  └─ RestartPolicy::OnFailure ─► log "daemon <name> failed, restarting...", continue
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                       |
//! |-------------------|---------------------------------------------------------------|------------------------------------------|
//! | **Daemons**       | Define daemons as trait impls, async closures or blocking fns.| [`Daemon`], [`DaemonFn`], [`BlockingFn`] |
//! | **Supervision**   | Register daemons and run them as one group.                   | [`DaemonGroup`]                          |
//! | **Policies**      | Restart on failure, or never.                                 | [`RestartPolicy`]                        |
//! | **Logging**       | Pluggable text sink.                                          | [`Logger`], [`TracingLogger`]            |
//! | **Errors**        | Typed errors for daemons and the group.                       | [`DaemonError`], [`GroupError`]          |
//! | **Configuration** | Failure reporting and backtrace dumps.                        | [`GroupConfig`]                          |
//!
//! ## Optional features
//! - `logging`: exports a stdout `LogWriter` sink _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use daemonvisor::{DaemonError, DaemonFn, DaemonGroup, TracingLogger};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tries = Arc::new(AtomicUsize::new(0));
//!     let t = tries.clone();
//!     let flaky = DaemonFn::arc(move || {
//!         let t = t.clone();
//!         async move {
//!             if t.fetch_add(1, Ordering::SeqCst) < 3 {
//!                 return Err(DaemonError::fail("not yet"));
//!             }
//!             Ok(())
//!         }
//!     });
//!
//!     let mut group = DaemonGroup::new(Arc::new(TracingLogger::new()));
//!     group.add_daemon(flaky, "flaky", true);
//!     group.start().await?;
//!
//!     assert_eq!(tries.load(Ordering::SeqCst), 4);
//!     Ok(())
//! }
//! ```
mod core;
mod daemons;
mod error;
mod loggers;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{DaemonGroup, GroupConfig};
pub use crate::daemons::{BlockingFn, Daemon, DaemonFn, DaemonRef};
pub use crate::error::{DaemonError, GroupError};
pub use crate::loggers::{Logger, TracingLogger};
pub use crate::policies::RestartPolicy;

// Optional: expose a simple stdout logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use crate::loggers::LogWriter;
