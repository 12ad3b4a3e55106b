//! # Daemon registry.
//!
//! Ordered, append-only list of [`DaemonEntry`] records built before the group
//! starts. Insertion order only makes iteration deterministic; it has no effect on
//! scheduling.
//!
//! ## Rules
//! - No validation: duplicate names are allowed.
//! - The registry is consumed when the group starts, so it cannot change afterwards.

use std::sync::Arc;

use crate::daemons::DaemonRef;
use crate::policies::RestartPolicy;

/// One registered daemon.
pub(crate) struct DaemonEntry {
    /// Daemon to run.
    pub daemon: DaemonRef,
    /// Display name, used only in log lines and errors.
    pub name: Arc<str>,
    /// What to do after a failed run.
    pub restart: RestartPolicy,
}

/// Ordered collection of daemon registrations.
#[derive(Default)]
pub(crate) struct Registry {
    entries: Vec<DaemonEntry>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: DaemonEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.to_string()).collect()
    }

    /// Consumes the registry, yielding entries in insertion order.
    pub fn into_entries(self) -> impl Iterator<Item = DaemonEntry> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::daemons::DaemonFn;
    use crate::error::DaemonError;

    fn entry(name: &str, restart: bool) -> DaemonEntry {
        DaemonEntry {
            daemon: DaemonFn::arc(|| async { Ok::<_, DaemonError>(()) }),
            name: name.into(),
            restart: restart.into(),
        }
    }

    #[test]
    fn test_keeps_insertion_order_and_duplicates() {
        let mut reg = Registry::new();
        assert!(reg.is_empty());

        reg.push(entry("b", false));
        reg.push(entry("a", true));
        reg.push(entry("b", true));

        assert_eq!(reg.len(), 3);
        assert_eq!(reg.names(), vec!["b", "a", "b"]);

        let policies: Vec<RestartPolicy> = reg.into_entries().map(|e| e.restart).collect();
        assert_eq!(
            policies,
            vec![
                RestartPolicy::Never,
                RestartPolicy::OnFailure,
                RestartPolicy::OnFailure
            ]
        );
    }
}
