//! Core adaptor types and traits

pub mod category;
pub mod error;
pub mod failure;
pub mod formatter;
#[cfg(feature = "highlight")]
pub mod highlight;
pub mod logger;
pub mod methods;

pub use category::{LogCategory, LoggerOptions};
pub use error::{AdaptorError, Result};
pub use failure::QueryFailure;
pub use formatter::{Formatter, TextFormatter};
pub use logger::{LoggerAdaptorBase, MessageLevel, OrmLogger};
pub use methods::{BasicLoggerMethods, EventPayload, LoggerMethod, LoggerMethods, SinkMethods};
