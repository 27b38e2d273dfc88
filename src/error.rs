use std::fmt;

/// Result type for reinforce operations
pub type Result<T> = std::result::Result<T, ReinforceError>;

/// Main error type for the reinforce library
#[derive(Debug, Clone, PartialEq)]
pub enum ReinforceError {
    /// Configuration accessed by a name with no canonical mapping
    UnknownOption {
        name: String,
    },

    /// Hyperparameter outside its valid domain
    InvalidConfiguration {
        name: String,
        reason: String,
    },

    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Numerical computation errors
    NumericalError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Operation not available on this agent variant
    Unsupported(&'static str),
}

impl fmt::Display for ReinforceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReinforceError::UnknownOption { name } => {
                write!(f, "Unknown option '{}'", name)
            }
            ReinforceError::InvalidConfiguration { name, reason } => {
                write!(f, "Invalid configuration '{}': {}", name, reason)
            }
            ReinforceError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ReinforceError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            ReinforceError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ReinforceError::Unsupported(what) => write!(f, "Unsupported operation: {}", what),
        }
    }
}

impl std::error::Error for ReinforceError {}

impl From<serde_json::Error> for ReinforceError {
    fn from(err: serde_json::Error) -> Self {
        ReinforceError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ReinforceError {
    pub fn unknown_option<S: Into<String>>(name: S) -> Self {
        ReinforceError::UnknownOption { name: name.into() }
    }

    pub fn invalid_configuration<S: Into<String>>(name: S, reason: S) -> Self {
        ReinforceError::InvalidConfiguration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
