//! # DaemonGroup: registers daemons, fans them out, and joins on all of them.
//!
//! The [`DaemonGroup`] owns the registry and the shared [`Logger`]. Daemons are
//! added one by one with [`DaemonGroup::add_daemon`]; [`DaemonGroup::start`] then
//! consumes the group, spawns one actor per registration, and waits for every
//! actor to finish.
//!
//! ## High-level architecture
//! ```text
//! add_daemon(d0, "a", false) ─┐
//! add_daemon(d1, "b", true)  ─┼──► Registry [entry0, entry1, ..., entryN-1]
//! add_daemon(dN, "n", ...)   ─┘
//!
//! start():
//!   entry[0]  entry[1]  ...  entry[N-1]
//!      │         │              │
//!      └──► DaemonActor::new(entry, logger, diag)           (one per entry)
//!                └──► set.spawn(actor.run())                 (JoinSet)
//!
//!   while set.join_next() ─► collect ActorExit (or JoinError)
//!   ─► Ok(()) / GroupError::DaemonsFailed (only with report_failures)
//! ```
//!
//! ## Blocking contract
//! - `start()` completes only after **every** actor has stopped.
//! - An actor whose daemon keeps failing under [`RestartPolicy::OnFailure`] never
//!   stops, so `start()` never completes in that case.
//! - There is no cancellation or shutdown request. Dropping the `start()` future
//!   aborts all actors.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use daemonvisor::{DaemonError, DaemonFn, DaemonGroup, TracingLogger};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut group = DaemonGroup::new(Arc::new(TracingLogger::new()));
//!     group
//!         .add_daemon(DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }), "once", false)
//!         .add_daemon(DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }), "twice", true);
//!
//!     group.start().await?;
//!     Ok(())
//! }
//! ```

use std::io::Write;
use std::sync::{Arc, Mutex};

use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::{
    core::{
        actor::{ActorExit, DaemonActor},
        config::GroupConfig,
        fault::{self, DiagWriter},
        registry::{DaemonEntry, Registry},
    },
    daemons::DaemonRef,
    error::GroupError,
    loggers::Logger,
    policies::RestartPolicy,
};

/// Group of daemons supervised together.
pub struct DaemonGroup {
    cfg: GroupConfig,
    registry: Registry,
    logger: Arc<dyn Logger>,
    diag: DiagWriter,
}

impl DaemonGroup {
    /// Creates an empty group writing to `logger`, with [`GroupConfig::default`].
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_config(logger, GroupConfig::default())
    }

    /// Creates an empty group with an explicit configuration.
    pub fn with_config(logger: Arc<dyn Logger>, cfg: GroupConfig) -> Self {
        Self {
            cfg,
            registry: Registry::new(),
            logger,
            diag: fault::stderr(),
        }
    }

    /// Redirects panic backtrace dumps (stderr by default).
    ///
    /// Dumps never go through the group's [`Logger`]. Nothing is written when
    /// [`GroupConfig::backtrace`] is off.
    pub fn with_diagnostics(&mut self, writer: impl Write + Send + 'static) -> &mut Self {
        self.diag = Arc::new(Mutex::new(writer));
        self
    }

    /// Registers a daemon and returns the group for chaining.
    ///
    /// `restart` accepts a [`RestartPolicy`] or a plain `bool`
    /// (`true` = restart on failure). Names are not validated and may repeat.
    pub fn add_daemon(
        &mut self,
        daemon: DaemonRef,
        name: impl Into<Arc<str>>,
        restart: impl Into<RestartPolicy>,
    ) -> &mut Self {
        self.registry.push(DaemonEntry {
            daemon,
            name: name.into(),
            restart: restart.into(),
        });
        self
    }

    /// Number of registered daemons.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no daemon is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Starts every registered daemon concurrently and waits until all of them stop.
    ///
    /// Consumes the group: it cannot be started twice or extended afterwards.
    ///
    /// Returns `Ok(())` once every actor has stopped. With
    /// [`GroupConfig::report_failures`] enabled, returns
    /// [`GroupError::DaemonsFailed`] if any daemon stopped on a failure.
    ///
    /// Never returns while some daemon keeps failing under [`RestartPolicy::OnFailure`].
    pub async fn start(self) -> Result<(), GroupError> {
        let Self {
            cfg,
            registry,
            logger,
            diag,
        } = self;

        debug!(daemons = registry.len(), "starting daemon group");

        let mut set = JoinSet::new();
        for entry in registry.into_entries() {
            let diag = cfg.backtrace.then(|| Arc::clone(&diag));
            let actor = DaemonActor::new(entry, Arc::clone(&logger), diag);
            set.spawn(actor.run());
        }

        let mut failed = Vec::new();
        let mut aborted = 0usize;
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(ActorExit { name, outcome }) => {
                    if outcome.is_err() {
                        failed.push(name.to_string());
                    }
                }
                Err(je) => {
                    error!(error = %je, "daemon unit died outside failure containment");
                    aborted += 1;
                }
            }
        }

        debug!(failed = failed.len(), aborted, "daemon group finished");

        if cfg.report_failures && (!failed.is_empty() || aborted > 0) {
            return Err(GroupError::DaemonsFailed { failed, aborted });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{daemons::DaemonFn, error::DaemonError, loggers::recorder::Recorder};

    #[test]
    fn test_add_daemon_chains_and_records_names() {
        let mut group = DaemonGroup::new(Arc::new(Recorder::default()));
        assert!(group.is_empty());

        group
            .add_daemon(DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }), "a", false)
            .add_daemon(DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }), "a", true)
            .add_daemon(
                DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }),
                String::from("c"),
                RestartPolicy::Never,
            );

        assert_eq!(group.len(), 3);
        assert_eq!(group.names(), vec!["a", "a", "c"]);
    }

    #[tokio::test]
    async fn test_empty_group_returns_immediately() {
        let rec = Arc::new(Recorder::default());
        let group = DaemonGroup::new(rec.clone());
        assert!(group.start().await.is_ok());
        assert!(rec.lines().is_empty());
    }

    #[tokio::test]
    async fn test_report_failures_lists_stopped_failures() {
        let rec = Arc::new(Recorder::default());
        let cfg = GroupConfig {
            report_failures: true,
            ..GroupConfig::default()
        };
        let mut group = DaemonGroup::with_config(rec.clone(), cfg);
        group
            .add_daemon(
                DaemonFn::arc(|| async { Err::<(), _>(DaemonError::fail("nope")) }),
                "broken",
                false,
            )
            .add_daemon(DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }), "fine", false);

        match group.start().await {
            Err(GroupError::DaemonsFailed { failed, aborted }) => {
                assert_eq!(failed, vec!["broken"]);
                assert_eq!(aborted, 0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failures_are_silent_by_default() {
        let rec = Arc::new(Recorder::default());
        let mut group = DaemonGroup::new(rec.clone());
        group.add_daemon(
            DaemonFn::arc(|| async { Err::<(), _>(DaemonError::fail("nope")) }),
            "broken",
            false,
        );

        assert!(group.start().await.is_ok());
        assert!(rec.lines().iter().any(|l| l == "daemon broken stopped"));
    }
}
