//! Error types used by the daemonvisor runtime and daemons.
//!
//! This module defines two main error enums:
//!
//! - [`GroupError`] — errors reported by [`DaemonGroup::start`](crate::DaemonGroup::start).
//! - [`DaemonError`] — errors produced by a single daemon run (returned or contained panic).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.

use std::fmt::Display;

use thiserror::Error;

/// # Errors produced by the daemon group itself.
///
/// Only returned when [`GroupConfig::report_failures`](crate::GroupConfig::report_failures)
/// is enabled; by default a group always finishes with `Ok(())`.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GroupError {
    /// Some daemons ended on a failure and were not restarted.
    #[error("daemons failed without restart: {failed:?}; aborted units: {aborted}")]
    DaemonsFailed {
        /// Names of the daemons whose last run failed, in completion order.
        failed: Vec<String>,
        /// Units that died outside failure containment (e.g. a panicking logger).
        aborted: usize,
    },
}

impl GroupError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use daemonvisor::GroupError;
    ///
    /// let err = GroupError::DaemonsFailed { failed: vec!["db".into()], aborted: 0 };
    /// assert_eq!(err.as_label(), "group_daemons_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            GroupError::DaemonsFailed { .. } => "group_daemons_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            GroupError::DaemonsFailed { failed, aborted } => {
                format!("failed daemons={failed:?} aborted={aborted}")
            }
        }
    }
}

/// # Errors produced by a daemon run.
///
/// A daemon reports ordinary failures with [`DaemonError::Fail`]. The runtime
/// converts a panic raised inside [`Daemon::start`](crate::Daemon::start) into
/// [`DaemonError::Panic`]. Both are handled identically by the restart policy.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DaemonError {
    /// The daemon returned an error.
    #[error("{error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The daemon panicked; the panic was contained at the unit boundary.
    #[error("daemon {name} panic: {payload}")]
    Panic {
        /// Registered display name of the daemon.
        name: String,
        /// Panic message, or a placeholder for non-string payloads.
        payload: String,
    },
}

impl DaemonError {
    /// Builds a [`DaemonError::Fail`] from anything printable.
    ///
    /// # Example
    /// ```
    /// use daemonvisor::DaemonError;
    ///
    /// let err = DaemonError::fail("connection refused");
    /// assert_eq!(err.to_string(), "connection refused");
    /// ```
    pub fn fail(error: impl Display) -> Self {
        DaemonError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DaemonError::Fail { .. } => "daemon_failed",
            DaemonError::Panic { .. } => "daemon_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DaemonError::Fail { error } => format!("error: {error}"),
            DaemonError::Panic { name, payload } => format!("panic in {name}: {payload}"),
        }
    }

    /// True if the error came from a contained panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, DaemonError::Panic { .. })
    }
}
