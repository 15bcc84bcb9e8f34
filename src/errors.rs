use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Invalid door {dimension}: {value} (must be positive)")]
    InvalidDimension { dimension: Dimension, value: i64 },

    #[error("Invalid door ID: {0}")]
    InvalidId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl FactoryError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn telemetry<S: Into<String>>(msg: S) -> Self {
        Self::Telemetry(msg.into())
    }
}

/// Which side of a door a dimension error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = FactoryError::InvalidDimension {
            dimension: Dimension::Height,
            value: -4,
        };

        assert_eq!(err.to_string(), "Invalid door height: -4 (must be positive)");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: FactoryError = io.into();

        assert!(matches!(err, FactoryError::Io(_)));
    }
}
