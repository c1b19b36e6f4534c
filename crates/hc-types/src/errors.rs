use thiserror::Error;

/// Boxed error raised by a fallible objective function.
pub type ObjectiveError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for hillclimb
#[derive(Error, Debug)]
pub enum ClimbError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The objective failed on some point; the run was aborted.
    #[error("Objective evaluation {evaluation} failed: {source}")]
    Objective {
        /// 1-based index of the failing evaluation.
        evaluation: usize,
        #[source]
        source: ObjectiveError,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClimbError {
    pub fn objective(evaluation: usize, source: impl Into<ObjectiveError>) -> Self {
        Self::Objective {
            evaluation,
            source: source.into(),
        }
    }
}

/// Result type alias for hillclimb operations
pub type ClimbResult<T> = Result<T, ClimbError>;

/// Macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::ClimbError::Validation(format!($($arg)*))
    };
}

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::ClimbError::Config(format!($($arg)*))
    };
}
