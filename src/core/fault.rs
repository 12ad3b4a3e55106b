//! # Panic-site backtraces for contained daemon faults.
//!
//! By the time `catch_unwind` returns, the daemon's stack is already unwound.
//! A process-wide panic hook (installed once, chained in front of the previous
//! hook) therefore captures the backtrace **at the panic site** and parks it in a
//! thread-local slot; the runner takes it from there after containment.
//!
//! ## Flow
//! ```text
//! daemon panics ──► hook: slot = Backtrace::force_capture() ──► previous hook
//!                                   │
//! catch_unwind returns Err ─────────┴─► take_backtrace() ──► dump(writer, name, bt)
//! ```
//!
//! Panics raised on the blocking pool travel with their backtrace and are
//! [`stash`]ed on the unit's thread before being resumed there.
//!
//! Dumps go to a [`DiagWriter`] (stderr by default), never to the group's logger.

use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::io::{self, Write};
use std::panic;
use std::sync::{Arc, Mutex, Once};

/// Destination for backtrace dumps.
pub(crate) type DiagWriter = Arc<Mutex<dyn Write + Send>>;

static HOOK: Once = Once::new();

thread_local! {
    static LAST_FAULT: RefCell<Option<Backtrace>> = const { RefCell::new(None) };
}

/// Default dump destination.
pub(crate) fn stderr() -> DiagWriter {
    Arc::new(Mutex::new(io::stderr()))
}

/// Installs the capturing hook; later calls are no-ops.
pub(crate) fn install_hook() {
    HOOK.call_once(|| {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            stash(Backtrace::force_capture());
            prev(info);
        }));
    });
}

/// Stores a backtrace as the latest fault of the current thread.
pub(crate) fn stash(bt: Backtrace) {
    LAST_FAULT.with(|slot| *slot.borrow_mut() = Some(bt));
}

/// Takes the latest fault backtrace of the current thread.
pub(crate) fn take_backtrace() -> Option<Backtrace> {
    LAST_FAULT.with(|slot| slot.borrow_mut().take())
}

/// Writes one dump; write errors are ignored.
pub(crate) fn dump(writer: &DiagWriter, name: &str, bt: &Backtrace) {
    let mut w = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _ = writeln!(w, "[daemonvisor] daemon '{name}' panicked; backtrace:\n{bt}");
    let _ = w.flush();
}
