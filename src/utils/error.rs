use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{artifact} summary has no numeric '{field}' value")]
    MissingErrorField {
        artifact: &'static str,
        field: &'static str,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl ResultsError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ResultsError::MissingConfigError { field } => {
                format!("{} is not set; pass --data-path or export DATA_PATH", field)
            }
            ResultsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            ResultsError::ServerError { message } => {
                format!("The results server stopped: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ResultsError::MissingConfigError { .. }
                | ResultsError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ResultsError>;
