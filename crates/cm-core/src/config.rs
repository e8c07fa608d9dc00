//! Run configuration.
//!
//! Input and output locations plus the mask policy, resolved once from CLI
//! arguments and passed explicitly into the run. Nothing here is global
//! state, so tests drive the pipeline with synthetic paths.

use crate::error::Result;
use cm_redact::MaskPolicy;
use std::path::{Path, PathBuf};

/// Configuration for one masking run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source file, read line by line.
    pub input: PathBuf,

    /// Destination file, created or truncated before writing.
    pub output: PathBuf,

    /// Mask policy applied to every extracted secret.
    pub policy: MaskPolicy,
}

impl RunConfig {
    /// Build a config with the default output path and policy.
    pub fn new(input: PathBuf) -> Self {
        let output = default_output_path(&input);
        Self {
            input,
            output,
            policy: MaskPolicy::default(),
        }
    }

    /// Override the output path.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// Load the mask policy from a JSON file.
    pub fn with_policy_file(mut self, path: &Path) -> Result<Self> {
        self.policy = MaskPolicy::load(path)?;
        Ok(self)
    }
}

/// Derive the default output path from the input path.
///
/// `config.json` becomes `config.masked.json`; an extensionless input gets
/// a `.masked` suffix.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension() {
        Some(ext) => format!("{}.masked.{}", stem, ext.to_string_lossy()),
        None => format!("{}.masked", stem),
    };
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_with_extension() {
        let out = default_output_path(Path::new("/tmp/config.json"));
        assert_eq!(out, PathBuf::from("/tmp/config.masked.json"));
    }

    #[test]
    fn test_default_output_path_without_extension() {
        let out = default_output_path(Path::new("settings"));
        assert_eq!(out, PathBuf::from("settings.masked"));
    }

    #[test]
    fn test_with_output_overrides_default() {
        let config = RunConfig::new(PathBuf::from("in.json"))
            .with_output(PathBuf::from("elsewhere.json"));
        assert_eq!(config.output, PathBuf::from("elsewhere.json"));
    }

    #[test]
    fn test_with_policy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        std::fs::write(&path, r#"{"keep_head": 2, "keep_tail": 2}"#).unwrap();

        let config = RunConfig::new(PathBuf::from("in.json"))
            .with_policy_file(&path)
            .unwrap();
        assert_eq!(config.policy.keep_head, 2);
        assert_eq!(config.policy.reveal_limit(), 4);
    }

    #[test]
    fn test_with_missing_policy_file_fails() {
        let result =
            RunConfig::new(PathBuf::from("in.json")).with_policy_file(Path::new("/nope.json"));
        assert!(result.is_err());
    }
}
