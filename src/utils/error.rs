use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("A file operation failed: {}", e),
            DemoError::SerializationError(e) => format!("Could not encode a message: {}", e),
            DemoError::ConfigError { message } => format!("The configuration is invalid: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the target directory exists and is writable",
            DemoError::SerializationError(_) => "Check the message content for unsupported data",
            DemoError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the named setting in the config file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
