//! Highlighting configuration
//!
//! Stores user tag rules in `~/.config/diagwiz/config.yaml`:
//!
//! ```yaml
//! rules:
//!   - selector: "Message/Arrow"
//!     tag: operator
//!   - selector: "Alias/Identifier Message/Identifier"
//!     tag: constant
//! ```
//!
//! User rules are applied after the built-in ones, so a rule for a built-in
//! selector replaces it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::syntax::{HighlightTag, SelectorError, TagRule};

/// A single user rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// One or more whitespace-separated selectors
    pub selector: String,
    pub tag: HighlightTag,
}

/// Highlighting configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Errors that can occur when loading a config file
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    InvalidSelector {
        selector: String,
        error: SelectorError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidSelector { selector, error } => {
                write!(f, "Invalid selector `{}`: {}", selector, error)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl HighlightConfig {
    /// Load config from the user config directory, or return defaults if it
    /// is missing or invalid
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

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse and validate config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every rule's selectors parse
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.rules {
            TagRule::parse_many(&rule.selector, rule.tag).map_err(|error| {
                ConfigError::InvalidSelector {
                    selector: rule.selector.clone(),
                    error,
                }
            })?;
        }
        Ok(())
    }

    /// Save config to the user config directory
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Refuses a config that [`HighlightConfig::load_from`] would reject.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Refusing to save invalid config: {}", e))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// User rules in declaration order. Invalid selectors are logged and
    /// skipped.
    pub fn tag_rules(&self) -> Vec<TagRule> {
        let mut rules = Vec::new();
        for rule in &self.rules {
            match TagRule::parse_many(&rule.selector, rule.tag) {
                Ok(parsed) => rules.extend(parsed),
                Err(e) => {
                    tracing::warn!("Ignoring config rule `{}`: {}", rule.selector, e);
                }
            }
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_reads_rules() {
        let config = HighlightConfig::from_yaml(
            r#"
rules:
  - selector: "Message/Arrow"
    tag: operator
  - selector: "Alias/Identifier Message/Identifier"
    tag: constant
"#,
        )
        .unwrap();

        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].tag, HighlightTag::Operator);
        // The multi-selector entry expands into two rules
        assert_eq!(config.tag_rules().len(), 3);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            HighlightConfig::from_yaml("").unwrap(),
            HighlightConfig::default()
        );
        assert_eq!(
            HighlightConfig::from_yaml("{}").unwrap(),
            HighlightConfig::default()
        );
    }

    #[test]
    fn test_unknown_tag_is_a_parse_error() {
        let err = HighlightConfig::from_yaml(
            r#"
rules:
  - selector: "Alias/String"
    tag: sparkly
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let err = HighlightConfig::from_yaml(
            r#"
rules:
  - selector: "Alias//String"
    tag: string
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSelector { .. }));
        assert!(err.to_string().contains("Alias//String"));
    }

    #[test]
    fn test_tag_rules_skips_invalid_entries() {
        let config = HighlightConfig {
            rules: vec![
                RuleConfig {
                    selector: "".to_string(),
                    tag: HighlightTag::String,
                },
                RuleConfig {
                    selector: "Message/Arrow".to_string(),
                    tag: HighlightTag::Operator,
                },
            ],
        };
        let rules = config.tag_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector.to_string(), "Message/Arrow");
    }
}
