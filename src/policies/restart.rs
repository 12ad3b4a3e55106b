//! # Restart policy for daemon units.
//!
//! [`RestartPolicy`] decides whether a daemon is started again after its run fails.
//!
//! - [`RestartPolicy::Never`] the daemon runs once; a failure is terminal.
//! - [`RestartPolicy::OnFailure`] the daemon is started again after every failure.
//!
//! A successful return is terminal under both policies.
//!
//! ## Restart semantics
//! ```text
//! RestartPolicy::OnFailure   → fail → log error → "restarting..." → start again (no delay, no limit)
//! RestartPolicy::Never       → fail → log error → "stopped"
//! ```
//!
//! A daemon that fails permanently under `OnFailure` is restarted forever, and the
//! owning group never returns from [`DaemonGroup::start`](crate::DaemonGroup::start).
//!
//! The policy also converts from `bool`, so registration accepts a plain flag:
//! ```
//! use daemonvisor::RestartPolicy;
//!
//! assert_eq!(RestartPolicy::from(true), RestartPolicy::OnFailure);
//! assert_eq!(RestartPolicy::from(false), RestartPolicy::Never);
//! ```

/// Policy controlling whether a daemon is restarted after a failed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Never restart: the daemon stops after its first run, whatever the outcome.
    Never,
    /// Restart immediately whenever the run fails (error or panic).
    OnFailure,
}

impl RestartPolicy {
    /// True if a failed run should be followed by another start.
    #[inline]
    pub fn restarts_on_failure(self) -> bool {
        matches!(self, RestartPolicy::OnFailure)
    }
}

impl From<bool> for RestartPolicy {
    fn from(restart: bool) -> Self {
        if restart {
            RestartPolicy::OnFailure
        } else {
            RestartPolicy::Never
        }
    }
}
