//! Helper configuration
//!
//! Parser prefixes are passed explicitly via [`ParserConfig`]. User defaults
//! persist in `~/.config/sxhkhm/config.yaml` as a [`HelperConfig`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default prefix marking a keybind description
pub const DEFAULT_DESCRIPTOR: &str = "# ";

/// Default prefix marking a category header
pub const DEFAULT_CATEGORY_DESCRIPTOR: &str = "### ";

/// Prefixes the block extractor and category resolver look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Starts a description line, e.g. `# Lock screen`
    pub descriptor: String,
    /// Starts a category header, e.g. `### Window management`
    pub category_descriptor: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            descriptor: DEFAULT_DESCRIPTOR.to_string(),
            category_descriptor: DEFAULT_CATEGORY_DESCRIPTOR.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn new(descriptor: impl Into<String>, category_descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            category_descriptor: category_descriptor.into(),
        }
    }
}

/// User defaults that persist across runs
///
/// Every field is optional; command-line flags and environment variables win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    /// sxhkd configuration file to read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sxhkdrc: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_descriptor: Option<String>,
}

impl HelperConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a config from YAML text. An empty document is the default config.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.descriptor, "# ");
        assert_eq!(config.category_descriptor, "### ");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = HelperConfig::from_yaml("descriptor: \"## \"\n").unwrap();
        assert_eq!(config.descriptor.as_deref(), Some("## "));
        assert_eq!(config.sxhkdrc, None);
        assert_eq!(config.category_descriptor, None);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(HelperConfig::from_yaml("").unwrap(), HelperConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(HelperConfig::from_yaml("descriptor: [1, 2").is_err());
    }
}
