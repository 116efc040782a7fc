//! Configuration for the runtime shell.
//!
//! Read from a JSON file; every field is optional:
//!
//! ```json
//! {
//!   "lifecycle": "single-run",
//!   "capability": "terminfo",
//!   "pacing": "paced",
//!   "seed": 42
//! }
//! ```

use std::fs;
use std::path::Path;

use gr_term::{CapabilityPolicy, Pacing};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lifecycle::LifecycleMode;

/// Configuration for a shell run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ShellConfig {
    /// Exit after one session, or keep starting new ones.
    pub lifecycle: LifecycleMode,
    /// How the terminal's row count is found.
    pub capability: CapabilityPolicy,
    /// Whether output pauses when the screen fills.
    pub pacing: Pacing,
    /// RNG seed for reproducible play.
    pub seed: Option<u64>,
}

impl ShellConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the lifecycle mode.
    pub fn with_lifecycle(mut self, lifecycle: LifecycleMode) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// Set the capability policy.
    pub fn with_capability(mut self, capability: CapabilityPolicy) -> Self {
        self.capability = capability;
        self
    }

    /// Set the pacing mode.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
