//! # Group configuration.
//!
//! Provides [`GroupConfig`], the settings a [`DaemonGroup`](crate::DaemonGroup)
//! is created with via [`DaemonGroup::with_config`](crate::DaemonGroup::with_config).
//!
//! ## Defaults
//! The default configuration reproduces the classic daemon-group contract:
//! `start()` always returns `Ok(())` and contained panics dump a backtrace to stderr
//! (see [`DaemonGroup::with_diagnostics`](crate::DaemonGroup::with_diagnostics)).

/// Configuration for a daemon group.
///
/// ## Field semantics
/// - `report_failures`: surface non-restarted failures through `start()`'s result
/// - `backtrace`: dump the panic-site backtrace when a daemon panic is contained
///
/// ## Notes
/// All fields are public; construct with struct update syntax over `Default`.
#[derive(Clone, Debug)]
pub struct GroupConfig {
    /// Return [`GroupError::DaemonsFailed`](crate::GroupError::DaemonsFailed) when at
    /// least one daemon ended on a failure without being restarted.
    ///
    /// With `false` every failure is visible only through the logger.
    pub report_failures: bool,

    /// Dump the panic-site backtrace when a daemon panic is contained.
    ///
    /// The dump never goes through the group's [`Logger`](crate::Logger).
    pub backtrace: bool,
}

impl Default for GroupConfig {
    /// Default configuration:
    ///
    /// - `report_failures = false` (always `Ok(())`)
    /// - `backtrace = true`
    fn default() -> Self {
        Self {
            report_failures: false,
            backtrace: true,
        }
    }
}
