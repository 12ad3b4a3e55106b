//! Restart policies.
//!
//! ## Contents
//! - [`RestartPolicy`] whether a failed daemon is started again (never / on-failure)
//!
//! There is no backoff or retry limit: restarts happen immediately
//! and without bound.

mod restart;

pub use restart::RestartPolicy;
