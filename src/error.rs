use std::fmt;

/// Failure of one of the pure computations (dosage, distance, recommendation).
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Caller supplied a value the computation refuses to work with.
    InvalidInput(String),
    /// A staff member has no project site to be matched against.
    NoSiteAvailable { staff: String },
    /// An intermediate or final value was NaN or infinite.
    Computation(String),
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CoreError::InvalidInput(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        CoreError::Computation(message.into())
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            CoreError::NoSiteAvailable { staff } => {
                write!(f, "No project site available for {}", staff)
            }
            CoreError::Computation(msg) => write!(f, "Computation error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

pub type CoreResult<T> = Result<T, CoreError>;
