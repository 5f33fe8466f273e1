use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Transport '{transport}' failed: {message}")]
    TransportError { transport: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdapterError {
    pub fn transport(transport: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransportError {
            transport: transport.into(),
            message: message.into(),
        }
    }

    pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors raised before anything was handed to a transport.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SerializationError(_) => "Check that the customer record only holds plain values",
            Self::TransportError { .. } => "Check that the receiving system is available and retry",
            Self::IoError(_) => "Check that the output path exists and is writable",
            Self::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            Self::InvalidConfigValueError { .. } => {
                "Fix the reported field in the command line or configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AdapterError>;
