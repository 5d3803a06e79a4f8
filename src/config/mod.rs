//! Configuration for context generation.
//!
//! Two distinct sources feed a run:
//!
//! ## config.json - The brain's own configuration (read-only)
//!
//! Located at `<brain>/config.json` and owned by the brain's setup tooling.
//! Contains `profile`, `features`, `auto_behaviors`, `preferences` and `scan_cache`.
//! A brain without this file is "not configured"; a malformed one aborts the run.
//!
//! ## The invocation
//!
//! Positional arguments (`<brain-path> [mode] [zone] [root-path]`) plus the
//! `BIZBRAIN_PATH` environment variable. Use the [`resolver`] module to turn
//! raw arguments into an [`Invocation`].

pub mod resolver;
pub mod schema;

pub use resolver::{
    BRAIN_PATH_ENV, Invocation, InvocationArgs, Resolved, ValueSource, resolve_invocation,
    resolve_invocation_with_env,
};
pub use schema::{
    BEHAVIOR_OFF, BrainConfig, Mode, OutputFormat, Preferences, Profile, ScanCache, WatchdogMode,
    Zone, behaviors, features, humanize,
};
