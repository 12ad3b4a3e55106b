//! # DaemonActor: supervised-invocation loop for one daemon.
//!
//! Runs a single registered daemon on its own tokio task, logging every step to
//! the group's [`Logger`] and applying the [`RestartPolicy`](crate::RestartPolicy).
//!
//! ## Log protocol
//! For each start, the actor writes (strictly in this order):
//! ```text
//! "starting daemon <name>..."
//!     ├─ Ok(())             → "daemon <name> stopped"                        → exit
//!     └─ Err(e) / panic     → "<e>"
//!           ├─ OnFailure    → "daemon <name> failed, restarting..." → yield → next start
//!           └─ Never        → "daemon <name> stopped"                        → exit
//! ```
//!
//! ## Rules
//! - Starts run **sequentially** within one actor (never parallel).
//! - Restarts are **immediate and unbounded**: no backoff, no delay, no limit.
//! - Between a failure and the next start the actor yields to the scheduler once,
//!   so a permanently failing daemon cannot starve its siblings.
//! - There is no cancellation: an actor ends only when its daemon reaches a terminal outcome.

use std::sync::Arc;

use tokio::task;

use crate::{
    core::{fault::DiagWriter, registry::DaemonEntry, runner::run_once},
    error::DaemonError,
    loggers::Logger,
};

/// Terminal outcome of one actor.
pub(crate) struct ActorExit {
    /// Name of the daemon the actor supervised.
    pub name: Arc<str>,
    /// `Err` holds the last failure when the daemon stopped without being restarted.
    pub outcome: Result<(), DaemonError>,
}

/// Supervises one daemon until it reaches a terminal outcome.
pub(crate) struct DaemonActor {
    /// Registration this actor runs.
    entry: DaemonEntry,
    /// Sink shared with all other actors of the group.
    logger: Arc<dyn Logger>,
    /// Where contained panics dump their backtrace (`None` = no dump).
    diag: Option<DiagWriter>,
}

impl DaemonActor {
    /// Creates a new actor.
    pub fn new(entry: DaemonEntry, logger: Arc<dyn Logger>, diag: Option<DiagWriter>) -> Self {
        Self {
            entry,
            logger,
            diag,
        }
    }

    /// Runs the loop until the daemon stops.
    ///
    /// Never returns while the daemon keeps failing under
    /// [`RestartPolicy::OnFailure`](crate::RestartPolicy::OnFailure).
    pub async fn run(self) -> ActorExit {
        let name = &self.entry.name;

        loop {
            self.logger.printf(format_args!("starting daemon {name}...\n"));

            let res = run_once(self.entry.daemon.as_ref(), name, self.diag.as_ref()).await;

            match res {
                Ok(()) => return self.stopped(Ok(())),
                Err(e) => {
                    self.logger.println(&[&e]);

                    if !self.entry.restart.restarts_on_failure() {
                        return self.stopped(Err(e));
                    }
                    self.logger.printf(format_args!("daemon {name} failed, restarting...\n"));
                    task::yield_now().await;
                }
            }
        }
    }

    fn stopped(&self, outcome: Result<(), DaemonError>) -> ActorExit {
        let name = &self.entry.name;
        self.logger.printf(format_args!("daemon {name} stopped\n"));
        ActorExit {
            name: Arc::clone(name),
            outcome,
        }
    }
}
