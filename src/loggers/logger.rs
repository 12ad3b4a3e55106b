//! # Logging sink trait.
//!
//! Provides [`Logger`], the sink every [`DaemonGroup`](crate::DaemonGroup) writes its
//! start/failure/restart/stop lines to. Keeping the sink behind a trait means the
//! crate is not tied to one logging backend.
//!
//! ## Rules
//! - Write-only, fire-and-forget: nothing is returned and sink failures are invisible
//!   to the group.
//! - Every daemon unit calls the sink concurrently and without serialization;
//!   implementations must be safe for concurrent use (`Send + Sync`).
//! - Lines passed through [`Logger::printf`] carry their own trailing `\n`.
//!
//! ## Example
//! ```rust
//! use std::fmt;
//! use std::sync::Mutex;
//! use daemonvisor::Logger;
//!
//! #[derive(Default)]
//! struct Collect(Mutex<String>);
//!
//! impl Logger for Collect {
//!     fn printf(&self, args: fmt::Arguments<'_>) {
//!         self.0.lock().unwrap().push_str(&args.to_string());
//!     }
//! }
//!
//! let sink = Collect::default();
//! sink.println(&[&"a", &1]);
//! sink.printf(format_args!("daemon {} stopped\n", "x"));
//! assert_eq!(*sink.0.lock().unwrap(), "a 1\ndaemon x stopped\n");
//! ```

use std::fmt::{self, Display};

/// Write-only text sink shared by all daemon units of a group.
pub trait Logger: Send + Sync + 'static {
    /// Writes pre-formatted text.
    fn printf(&self, args: fmt::Arguments<'_>);

    /// Writes the values back to back, without separator or newline.
    fn print(&self, values: &[&dyn Display]) {
        self.printf(format_args!("{}", Joined { values, sep: "" }));
    }

    /// Writes the values separated by single spaces, followed by a newline.
    fn println(&self, values: &[&dyn Display]) {
        self.printf(format_args!("{}\n", Joined { values, sep: " " }));
    }
}

/// Displays a list of values with a separator, without allocating.
struct Joined<'a> {
    values: &'a [&'a dyn Display],
    sep: &'static str,
}

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }
            v.fmt(f)?;
        }
        Ok(())
    }
}
