//! The failure value an ORM hands to the query-error entry point

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Either a bare message or a full error object.
///
/// The value is never embedded in the formatted line; it travels to the
/// sink as an auxiliary payload so structured targets can attach it as a
/// field while text targets can append or drop it.
#[derive(Debug, Clone)]
pub enum QueryFailure {
    /// A driver reported the failure as a plain string.
    Message(String),
    /// A real error object, kept shareable so sinks can hold onto it.
    Source(Arc<dyn StdError + Send + Sync>),
}

impl QueryFailure {
    /// Wrap an error object.
    pub fn source(error: impl StdError + Send + Sync + 'static) -> Self {
        QueryFailure::Source(Arc::new(error))
    }

    /// The underlying error object, when there is one.
    pub fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            QueryFailure::Message(_) => None,
            QueryFailure::Source(error) => Some(error.as_ref()),
        }
    }
}

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryFailure::Message(message) => write!(f, "{}", message),
            QueryFailure::Source(error) => write!(f, "{}", error),
        }
    }
}

impl From<String> for QueryFailure {
    fn from(message: String) -> Self {
        QueryFailure::Message(message)
    }
}

impl From<&str> for QueryFailure {
    fn from(message: &str) -> Self {
        QueryFailure::Message(message.to_string())
    }
}
