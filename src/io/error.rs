//! Error types for parsing user input and producing demo output

use std::fmt;

/// Main error type for all demo operations
///
/// The simulation core never fails; errors only arise at the text boundary
/// (parsing names and `key=value` pairs) and when writing output.
#[derive(Debug)]
pub enum DemoError {
    /// Algorithm name did not match any member of the catalog
    UnknownAlgorithm {
        /// Name as provided by the user
        name: String,
    },

    /// Heuristic name did not match any supported distance function
    UnknownHeuristic {
        /// Name as provided by the user
        name: String,
    },

    /// Parameter key did not match any field of any parameter panel
    UnknownParameter {
        /// Key as provided by the user
        key: String,
    },

    /// Parameter value could not be interpreted
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Writing rendered output failed
    Output {
        /// Description of what was being written
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Serializing a snapshot to JSON failed
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{name}'")
            }
            Self::UnknownHeuristic { name } => {
                write!(
                    f,
                    "Unknown heuristic '{name}' (expected manhattan, euclidean or chebyshev)"
                )
            }
            Self::UnknownParameter { key } => {
                write!(f, "Unknown parameter '{key}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error while writing {operation}: {source}")
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize snapshot: {source}")
            }
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for demo results
pub type Result<T> = std::result::Result<T, DemoError>;

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "output",
            source: err,
        }
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DemoError {
    DemoError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach the operation name to I/O failures
pub trait WithOperation<T> {
    /// Tag an I/O error with the operation that was being performed
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped as [`DemoError::Output`]
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T> WithOperation<T> for std::result::Result<T, std::io::Error> {
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| DemoError::Output { operation, source })
    }
}
