//! Runtime core: registration, supervision loop, and group lifecycle.
//!
//! The public API from this module is [`DaemonGroup`] and its [`GroupConfig`].
//!
//! Internal modules:
//! - [`registry`]: ordered list of daemon registrations;
//! - [`runner`]: runs one daemon start under panic containment;
//! - [`fault`]: panic-site backtrace capture and dump writer;
//! - [`actor`]: per-daemon loop applying the restart policy and writing log lines;
//! - [`group`]: fans out one actor per registration and joins on all of them.

mod actor;
mod config;
pub(crate) mod fault;
mod group;
mod registry;
mod runner;

pub use config::GroupConfig;
pub use group::DaemonGroup;
