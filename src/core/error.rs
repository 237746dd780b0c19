//! Error types for the adaptor layer
//!
//! Errors can only arise while building an adaptor from configuration;
//! formatting and dispatch never fail, and an invalid [`LoggerOptions`]
//! value degrades to "nothing enabled" instead of raising.
//!
//! [`LoggerOptions`]: super::category::LoggerOptions

pub type Result<T> = std::result::Result<T, AdaptorError>;

#[derive(Debug, thiserror::Error)]
pub enum AdaptorError {
    /// A severity name from configuration is not in the target library's
    /// level set
    #[error("unknown log level name: '{name}'")]
    UnknownLevel { name: String },
}

impl AdaptorError {
    pub fn unknown_level(name: impl Into<String>) -> Self {
        AdaptorError::UnknownLevel { name: name.into() }
    }
}
