//! # Run a single daemon start under failure containment.
//!
//! Executes one [`Daemon::start`] and turns every way it can end into a
//! `Result<(), DaemonError>`.
//!
//! ## Outcome mapping
//! ```text
//! daemon.start() → Ok(())      → Ok(())
//!                → Err(e)      → Err(e)
//!                → panic!(..)  → panic-site backtrace to the diag writer (optional)
//!                              → Err(DaemonError::Panic { name, payload })
//! ```
//!
//! ## Rules
//! - A panic never leaves this function; siblings and the group are unaffected.
//! - The backtrace goes to the diag writer (stderr by default), never to the group's logger.

use std::any::Any;
use std::backtrace::Backtrace;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::{
    core::fault::{self, DiagWriter},
    daemons::Daemon,
    error::DaemonError,
};

/// Starts `daemon` once, converting a panic into [`DaemonError::Panic`].
///
/// With `diag` set, the backtrace captured where the daemon panicked is written
/// there together with the daemon name.
pub(crate) async fn run_once<D: Daemon + ?Sized>(
    daemon: &D,
    name: &str,
    diag: Option<&DiagWriter>,
) -> Result<(), DaemonError> {
    fault::install_hook();

    match AssertUnwindSafe(daemon.start()).catch_unwind().await {
        Ok(res) => res,
        Err(payload) => {
            let bt = fault::take_backtrace();
            if let Some(w) = diag {
                // Without a captured trace (hook replaced by someone else) fall back to this frame.
                let bt = bt.unwrap_or_else(Backtrace::force_capture);
                fault::dump(w, name, &bt);
            }
            Err(DaemonError::Panic {
                name: name.to_string(),
                payload: panic_message(payload.as_ref()),
            })
        }
    }
}

/// Extracts the message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use crate::daemons::DaemonFn;

    #[derive(Clone, Default)]
    struct Buf(Arc<Mutex<Vec<u8>>>);

    impl Buf {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Buf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[inline(never)]
    fn deep_fault_site(depth: u32) {
        if depth > 0 {
            panic!("fault at depth {depth}");
        }
    }

    #[tokio::test]
    async fn test_passes_through_results() {
        let ok = DaemonFn::new(|| async { Ok::<_, DaemonError>(()) });
        assert!(run_once(&ok, "ok", None).await.is_ok());

        let bad = DaemonFn::new(|| async { Err::<(), _>(DaemonError::fail("refused")) });
        let err = run_once(&bad, "bad", None).await.unwrap_err();
        assert!(!err.is_panic());
        assert_eq!(err.to_string(), "refused");
    }

    #[tokio::test]
    async fn test_contains_str_panic() {
        let d = DaemonFn::new(|| async {
            if true {
                panic!("boom");
            }
            Ok::<_, DaemonError>(())
        });
        let err = run_once(&d, "crashy", None).await.unwrap_err();
        assert_eq!(err.to_string(), "daemon crashy panic: boom");
    }

    #[tokio::test]
    async fn test_contains_formatted_panic() {
        let d = DaemonFn::new(|| async {
            let idx = 7;
            if idx > 0 {
                panic!("bad index {idx}");
            }
            Ok::<_, DaemonError>(())
        });
        let err = run_once(&d, "fmt", Some(&fault::stderr())).await.unwrap_err();
        match err {
            DaemonError::Panic { name, payload } => {
                assert_eq!(name, "fmt");
                assert_eq!(payload, "bad index 7");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_dump_shows_panic_site() {
        let buf = Buf::default();
        let diag: DiagWriter = Arc::new(Mutex::new(buf.clone()));
        let d = DaemonFn::new(|| async {
            deep_fault_site(3);
            Ok::<_, DaemonError>(())
        });

        let err = run_once(&d, "deep", Some(&diag)).await.unwrap_err();
        assert_eq!(err.to_string(), "daemon deep panic: fault at depth 3");

        let dump = buf.text();
        assert!(dump.starts_with("[daemonvisor] daemon 'deep' panicked; backtrace:"));
        assert!(dump.contains("deep_fault_site"), "panic frame missing:\n{dump}");
    }

    #[tokio::test]
    async fn test_no_dump_without_writer() {
        let d = DaemonFn::new(|| async {
            deep_fault_site(1);
            Ok::<_, DaemonError>(())
        });
        assert!(run_once(&d, "quiet", None).await.unwrap_err().is_panic());
    }

    #[test]
    fn test_non_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "Box<dyn Any>");
    }
}
