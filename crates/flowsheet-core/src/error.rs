use thiserror::Error;

/// Core error types for flow-sheet operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid concept: {message}")]
    InvalidConcept { message: String },

    #[error("Invalid search input: {0}")]
    InvalidSearch(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a new InvalidConcept error
    pub fn invalid_concept(message: impl Into<String>) -> Self {
        Self::InvalidConcept {
            message: message.into(),
        }
    }

    /// Create a new InvalidSearch error
    pub fn invalid_search(message: impl Into<String>) -> Self {
        Self::InvalidSearch(message.into())
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error was caused by caller-supplied input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConcept { .. } | Self::InvalidSearch(_) | Self::JsonError(_)
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConcept { .. } | Self::InvalidSearch(_) => ErrorCategory::Validation,
            Self::JsonError(_) => ErrorCategory::Serialization,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Serialization,
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Serialization => write!(f, "serialization"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
