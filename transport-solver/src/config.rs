//! Configuration for the transport solver

use serde::{Deserialize, Serialize};

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Input validation limits
    pub validation: ValidationConfig,

    /// Row and column labels for reporting
    pub labels: LabelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "nwcm-solve".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            validation: ValidationConfig::default(),
            labels: LabelConfig::default(),
        }
    }
}

/// Input validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of sources before balancing (None = unlimited)
    pub max_sources: Option<usize>,

    /// Maximum number of destinations before balancing (None = unlimited)
    pub max_destinations: Option<usize>,
}

/// Label configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Prefix for source rows, numbered from 1
    pub source_prefix: String,

    /// Prefix for destination columns, numbered from 1
    pub destination_prefix: String,

    /// Label of the dummy source row
    pub dummy_source: String,

    /// Label of the dummy destination column
    pub dummy_destination: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            source_prefix: "Source".to_string(),
            destination_prefix: "Destination".to_string(),
            dummy_source: "Dummy Source".to_string(),
            dummy_destination: "Dummy Destination".to_string(),
        }
    }
}

impl Config {
    /// Parse from a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(max) = std::env::var("NWCM_MAX_SOURCES") {
            config.validation.max_sources = Some(parse_limit("NWCM_MAX_SOURCES", &max)?);
        }

        if let Ok(max) = std::env::var("NWCM_MAX_DESTINATIONS") {
            config.validation.max_destinations =
                Some(parse_limit("NWCM_MAX_DESTINATIONS", &max)?);
        }

        if let Ok(label) = std::env::var("NWCM_DUMMY_SOURCE_LABEL") {
            config.labels.dummy_source = label;
        }

        if let Ok(label) = std::env::var("NWCM_DUMMY_DESTINATION_LABEL") {
            config.labels.dummy_destination = label;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject limits that no problem could satisfy
    pub fn validate(&self) -> crate::Result<()> {
        if self.validation.max_sources == Some(0) {
            return Err(crate::Error::Config("max_sources must be at least 1".to_string()));
        }
        if self.validation.max_destinations == Some(0) {
            return Err(crate::Error::Config(
                "max_destinations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_limit(name: &str, value: &str) -> crate::Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| crate::Error::Config(format!("{} = {:?}: {}", name, value, e)))
}
