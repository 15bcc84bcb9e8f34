use crate::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FactoryConfig {
    pub door: DoorConfig,
    pub telemetry: TelemetryConfig,
}

impl FactoryConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, FactoryError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FactoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FactoryError::config(format!("cannot read {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loading factory config");
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<(), FactoryError> {
        if self.telemetry.log_level.trim().is_empty() {
            return Err(FactoryError::invalid_config("telemetry.log_level cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DoorConfig {
    pub policy: DimensionPolicy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// How a door factory treats zero or negative dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimensionPolicy {
    /// Any value is accepted as given.
    #[default]
    #[serde(rename = "permissive")]
    Permissive,
    /// Width and height must both be positive.
    #[serde(rename = "strict")]
    Strict,
}

impl DimensionPolicy {
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for DimensionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl TryFrom<&str> for DimensionPolicy {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(FactoryError::invalid_config(format!(
                "Invalid dimension policy: '{}'. Use 'permissive' or 'strict'",
                value
            ))),
        }
    }
}
