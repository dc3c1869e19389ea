use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KataError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::InvalidArgument { message } => message.clone(),
            KataError::ConfigParse { .. } => {
                format!("Could not read the configuration file ({})", self)
            }
            KataError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            KataError::Io(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::InvalidArgument { .. } => {
                "Pass a collaborator implementation when constructing the component"
            }
            KataError::ConfigParse { .. } => "Check the TOML syntax of the configuration file",
            KataError::InvalidConfigValue { .. } => {
                "Fix the reported field in the configuration file or override it with a CLI flag"
            }
            KataError::Io(_) => "Check that the path exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
