//! Configuration and fixed console texts.
//!
//! This module contains:
//! - `Config` - top-level TOML configuration
//! - `SessionConfig` - sentinel, prompt and precision for score sessions
//! - Console message constants shared by the interactive loops

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::score::DEFAULT_PRECISION;

/// Upper bound accepted for `session.precision`.
pub const MAX_PRECISION: usize = 12;

/// Texts written by the score collection loop.
pub mod messages {
    /// Printed once before the first prompt.
    pub fn intro(sentinel: &str) -> String {
        format!("Enter scores (one per line). Type '{}' when finished.", sentinel)
    }

    /// Prompt for each score (no trailing newline).
    pub const PROMPT: &str = "Score: ";

    /// Written for each entry that does not parse as a number.
    pub const NOT_A_NUMBER: &str = "Not a number, try again.";

    /// Written when the session ends without any scores.
    pub const NO_SCORES: &str = "No scores entered.";

    /// Default sentinel token.
    pub const SENTINEL: &str = "done";
}

/// Texts written by the menu calculator.
pub mod calculator {
    pub const HEADER: &str = "--- Simple Calculator ---";
    pub const OPTIONS: [&str; 3] = ["1. Add two numbers", "2. Subtract two numbers", "3. Exit"];
    pub const CHOICE_PROMPT: &str = "Choice (1-3): ";
    pub const FIRST_PROMPT: &str = "First number: ";
    pub const SECOND_PROMPT: &str = "Second number: ";
    pub const INVALID_CHOICE: &str = "Invalid choice.";
    pub const OUT_OF_RANGE: &str = "Result out of range.";
    pub const GOODBYE: &str = "Bye!";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
}

/// Score session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Token that ends data entry (matched case-insensitively)
    pub sentinel: String,
    /// Prompt written before each read
    pub prompt: String,
    /// Fractional digits for the average
    pub precision: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: messages::SENTINEL.to_string(),
            prompt: messages::PROMPT.to_string(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// Load and validate a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.session.sentinel.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "session.sentinel must not be empty".to_string(),
            ));
        }
        if self.session.precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "session.precision must be at most {}, got {}",
                MAX_PRECISION, self.session.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session.sentinel, "done");
        assert_eq!(config.session.prompt, "Score: ");
        assert_eq!(config.session.precision, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str("[session]\nprecision = 3\n").unwrap();
        assert_eq!(config.session.precision, 3);
        assert_eq!(config.session.sentinel, "done");
    }

    #[test]
    fn test_rejects_empty_sentinel() {
        let err = Config::from_toml_str("[session]\nsentinel = \"  \"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_large_precision() {
        let err = Config::from_toml_str("[session]\nprecision = 40\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Config::from_toml_str("[session\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_calculator_options() {
        assert_eq!(calculator::OPTIONS.len(), 3);
    }
}
