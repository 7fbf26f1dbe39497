//! Traversal configuration.
//!
//! ```toml
//! [functions]
//! enabled = true
//! ```

use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid traversal config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// TraversalConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    pub functions: FunctionsConfig,
}

impl TraversalConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    #[must_use]
    pub const fn with_functions(mut self, enabled: bool) -> Self {
        self.functions.enabled = enabled;
        self
    }
}

///
/// FunctionsConfig
/// Function groups and imports stay out of the traversal unless enabled.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FunctionsConfig {
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_functions_off() {
        assert!(!TraversalConfig::default().functions.enabled);
        assert_eq!(
            TraversalConfig::from_toml_str("").unwrap(),
            TraversalConfig::default()
        );
    }

    #[test]
    fn parses_function_toggle() {
        let config = TraversalConfig::from_toml_str("[functions]\nenabled = true\n").unwrap();

        assert!(config.functions.enabled);
        assert_eq!(config, TraversalConfig::default().with_functions(true));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = TraversalConfig::from_toml_str("[functions]\nenable = true\n").unwrap_err();

        assert!(err.to_string().starts_with("invalid traversal config"));
    }
}
