//! Configuration for railbus
//!
//! Centralized configuration with sensible defaults.

use std::str::FromStr;

use crate::error::{RailbusError, Result};

/// Main configuration for the encoder front end
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Command Configuration
    // -------------------------------------------------------------------------
    /// Identifier used when a command is issued without one
    /// (0 addresses every device on the bus)
    pub default_identifier: i64,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// How encoded bodies are written out
    pub output_format: OutputFormat,

    /// Use upper-case digits for hex output
    pub uppercase_hex: bool,
}

/// Output format for encoded bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Space-separated hex, one body per line
    Hex,

    /// Raw bytes, for piping into a transport
    Raw,
}

impl FromStr for OutputFormat {
    type Err = RailbusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(RailbusError::Config(format!(
                "Unknown output format: {} (expected hex or raw)",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_identifier: 0,
            output_format: OutputFormat::Hex,
            uppercase_hex: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configured values can actually be encoded
    pub fn validate(&self) -> Result<()> {
        if u32::try_from(self.default_identifier).is_err() {
            return Err(RailbusError::Config(format!(
                "Default identifier {} is outside 0..={}",
                self.default_identifier,
                u32::MAX
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the identifier used when none is given
    pub fn default_identifier(mut self, id: i64) -> Self {
        self.config.default_identifier = id;
        self
    }

    /// Set the output format
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Use upper-case hex digits
    pub fn uppercase_hex(mut self, uppercase: bool) -> Self {
        self.config.uppercase_hex = uppercase;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
