//! Engine configuration, optionally stored as TOML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::tokenizer::{DEFAULT_ESCAPE, DEFAULT_SEPARATOR};

/// Construction-time settings for an [`crate::Engine`].
///
/// Missing fields default to `.` as separator, `\` as escape, and inherited
/// members visible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Segment boundary. May be longer than one character (e.g. `->`).
    pub separator: String,

    /// Prefix that makes the following character literal.
    pub escape: char,

    /// Initial value of the skip-proto-data flag.
    pub skip_proto_data: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            escape: DEFAULT_ESCAPE,
            skip_proto_data: false,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            bail!("separator must be non-empty");
        }
        if self.separator.contains(self.escape) {
            bail!(
                "separator {:?} must not contain the escape character {:?}",
                self.separator,
                self.escape
            );
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: EngineConfig = toml::from_str(contents).context("parse engine config toml")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize to pretty TOML with a trailing newline.
    pub fn to_toml_string(&self) -> Result<String> {
        self.validate()?;
        let mut buf = toml::to_string_pretty(self).context("serialize engine config toml")?;
        buf.push('\n');
        Ok(buf)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `EngineConfig::default()`.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    EngineConfig::from_toml_str(&contents).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn load_reads_partial_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("objpath.toml");
        fs::write(&path, "separator = \"->\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.separator, "->");
        assert_eq!(cfg.escape, '\\');
        assert!(!cfg.skip_proto_data);
    }

    #[test]
    fn toml_round_trips() {
        let cfg = EngineConfig {
            separator: "/".to_string(),
            escape: '~',
            skip_proto_data: true,
        };
        let text = cfg.to_toml_string().expect("serialize");
        assert_eq!(EngineConfig::from_toml_str(&text).expect("parse"), cfg);
    }

    #[test]
    fn rejects_empty_separator() {
        let cfg = EngineConfig {
            separator: String::new(),
            ..EngineConfig::default()
        };
        let err = cfg.validate().expect_err("empty separator");
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn rejects_separator_containing_escape() {
        let err = EngineConfig::from_toml_str("separator = \"#\"\nescape = \"#\"\n")
            .expect_err("escape inside separator");
        assert!(format!("{err:#}").contains("escape character"));
    }

    #[test]
    fn rejects_multi_character_escape() {
        assert!(EngineConfig::from_toml_str("escape = \"ab\"\n").is_err());
    }
}
