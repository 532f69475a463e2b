use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input closed")]
    InputClosed,

    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

// Convert seed file decoding errors to AppError::ConfigError
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// Flatten derived validator errors into a single readable message
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort_unstable();
        AppError::ValidationError(format!("invalid {}", fields.join(", ")))
    }
}

// Define a type alias for the result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Domain rule violations are reported to the user and never end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_) | AppError::NotFound(_) | AppError::Conflict(_)
        )
    }

    // Text shown to the person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }
}
