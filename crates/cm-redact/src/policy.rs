//! Mask policy configuration.
//!
//! Controls how much of a masked secret stays visible. The reveal
//! threshold is derived from the head and tail widths rather than stored,
//! so a policy cannot disagree with itself.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema version for the policy file.
pub const POLICY_SCHEMA_VERSION: &str = "1.0.0";

/// Mask policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskPolicy {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Characters revealed at the start of a masked secret.
    #[serde(default = "default_keep")]
    pub keep_head: usize,

    /// Characters revealed at the end of a masked secret.
    #[serde(default = "default_keep")]
    pub keep_tail: usize,
}

fn default_schema_version() -> String {
    POLICY_SCHEMA_VERSION.to_string()
}

fn default_keep() -> usize {
    5
}

impl MaskPolicy {
    /// Create a policy with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Secrets at or below this character count are returned unchanged.
    pub fn reveal_limit(&self) -> usize {
        self.keep_head + self.keep_tail
    }

    /// Load a policy from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let policy: MaskPolicy = serde_json::from_str(&content)?;
        Ok(policy)
    }

    /// Save the policy to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for MaskPolicy {
    fn default() -> Self {
        Self {
            schema_version: POLICY_SCHEMA_VERSION.to_string(),
            keep_head: 5,
            keep_tail: 5,
        }
    }
}
