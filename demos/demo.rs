//! Runs three daemons side by side:
//! - `flaky` fails twice and is restarted until it succeeds,
//! - `crashy` panics once and is not restarted,
//! - `sleeper` blocks a thread for a moment and exits.
//!
//! Run with:
//! ```text
//! RUST_LOG=debug cargo run --example demo --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use daemonvisor::{
    BlockingFn, DaemonError, DaemonFn, DaemonGroup, GroupConfig, LogWriter, RestartPolicy,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tries = Arc::new(AtomicUsize::new(0));
    let t = tries.clone();
    let flaky = DaemonFn::arc(move || {
        let t = t.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            match t.fetch_add(1, Ordering::SeqCst) {
                0 | 1 => Err(DaemonError::fail("upstream not ready")),
                _ => Ok(()),
            }
        }
    });

    let crashy = DaemonFn::arc(|| async {
        let items: Vec<u32> = Vec::new();
        let _first = items[0];
        Ok::<_, DaemonError>(())
    });

    let sleeper = BlockingFn::arc(|| {
        std::thread::sleep(Duration::from_millis(300));
        Ok::<_, DaemonError>(())
    });

    let cfg = GroupConfig {
        report_failures: true,
        ..GroupConfig::default()
    };
    let mut group = DaemonGroup::with_config(Arc::new(LogWriter::new()), cfg);
    group
        .add_daemon(flaky, "flaky", RestartPolicy::OnFailure)
        .add_daemon(crashy, "crashy", false)
        .add_daemon(sleeper, "sleeper", false);

    if let Err(e) = group.start().await {
        println!("[demo] {}: {}", e.as_label(), e.as_message());
    }
    println!("[demo] flaky ran {} times", tries.load(Ordering::SeqCst));
    Ok(())
}
