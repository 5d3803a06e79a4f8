//! Invocation resolution with source tracking.
//!
//! ## Brain Path Precedence (highest to lowest)
//!
//! 1. Positional `<brain-path>` argument
//! 2. `BIZBRAIN_PATH` environment variable
//!
//! There is no default; a missing brain path is a usage error.
//!
//! ## Other Values
//!
//! - `mode`: positional argument, else `compact`
//! - `zone`: positional argument, else `brain` (unknown zones also resolve to `brain`)
//! - `root-path`: positional argument, else the brain path

use std::path::{Path, PathBuf};

use crate::config::{Mode, OutputFormat, Zone};
use crate::{Error, Result};

/// Environment variable naming the brain root.
pub const BRAIN_PATH_ENV: &str = "BIZBRAIN_PATH";

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from a positional CLI argument
    CliArg,
    /// Value from environment variable
    EnvVar(String),
    /// Value copied from the resolved brain path
    BrainPath,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::CliArg => write!(f, "cli"),
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::BrainPath => write!(f, "brain-path"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Raw invocation values as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct InvocationArgs {
    pub brain_path: Option<PathBuf>,
    pub mode: Option<String>,
    pub zone: Option<String>,
    pub root_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

/// Fully resolved invocation.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub brain_path: Resolved<PathBuf>,
    pub mode: Resolved<Mode>,
    pub zone: Resolved<Zone>,
    pub root_path: Resolved<PathBuf>,
    pub output_format: OutputFormat,
}

impl Invocation {
    pub fn brain_path(&self) -> &Path {
        &self.brain_path.value
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path.value
    }

    pub fn mode(&self) -> Mode {
        self.mode.value
    }

    pub fn zone(&self) -> Zone {
        self.zone.value
    }
}

/// Resolve an invocation, consulting `BIZBRAIN_PATH` when no brain path was given.
pub fn resolve_invocation(args: InvocationArgs) -> Result<Invocation> {
    let env_brain = std::env::var(BRAIN_PATH_ENV).ok();
    resolve_invocation_with_env(args, env_brain)
}

/// Resolve an invocation with an explicit environment value (for testing).
pub fn resolve_invocation_with_env(
    args: InvocationArgs,
    env_brain: Option<String>,
) -> Result<Invocation> {
    let brain_path = match args.brain_path.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => Resolved::new(expand_home(&path), ValueSource::CliArg),
        None => match env_brain.filter(|s| !s.is_empty()) {
            Some(path) => Resolved::new(
                expand_home(Path::new(&path)),
                ValueSource::EnvVar(BRAIN_PATH_ENV.to_string()),
            ),
            None => return Err(Error::MissingBrainPath),
        },
    };

    let mode = match args.mode {
        Some(mode) => Resolved::new(Mode::parse(&mode), ValueSource::CliArg),
        None => Resolved::new(Mode::default(), ValueSource::Default),
    };

    let zone = match args.zone {
        Some(zone) => Resolved::new(Zone::parse(&zone), ValueSource::CliArg),
        None => Resolved::new(Zone::default(), ValueSource::Default),
    };

    let root_path = match args.root_path.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => Resolved::new(expand_home(&path), ValueSource::CliArg),
        None => Resolved::new(brain_path.value.clone(), ValueSource::BrainPath),
    };

    tracing::debug!(
        brain_path = %brain_path.value.display(),
        brain_source = %brain_path.source,
        mode = %mode.value,
        mode_source = %mode.source,
        zone = %zone.value,
        zone_source = %zone.source,
        root_path = %root_path.value.display(),
        root_source = %root_path.source,
        "resolved invocation"
    );

    Ok(Invocation {
        brain_path,
        mode,
        zone,
        root_path,
        output_format: args.output_format,
    })
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
