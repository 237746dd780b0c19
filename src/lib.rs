//! # ORM Logger Adaptor
//!
//! Adaptors that route an ORM's query, schema and migration logging events
//! into a general-purpose logging library, applying formatting and
//! per-category filtering on the way through.
//!
//! ## Features
//!
//! - **Two targets**: the [`log`] facade (plain leveled records) and
//!   [`tracing`] (structured events with fields)
//! - **Category filtering**: enable everything, nothing, or an explicit
//!   list of categories; disabled categories are silent no-ops
//! - **Severity mapping**: per-category level overrides on top of sensible
//!   inheritance defaults
//! - **Stateless**: each adaptor resolves its dispatch table once at
//!   construction and never mutates it
//!
//! ## Example
//!
//! ```
//! use orm_logger_adaptor::prelude::*;
//!
//! let adaptor = LogAdaptor::new(&LoggerOptions::from([LogCategory::Query]));
//! adaptor.log_query("select 1", None);
//! ```

pub mod adaptors;
pub mod core;

pub mod prelude {
    pub use crate::adaptors::{LogAdaptor, LogLevelMapping, TracingAdaptor, TracingLevelMapping};
    pub use crate::core::{
        AdaptorError, BasicLoggerMethods, EventPayload, Formatter, LogCategory, LoggerAdaptorBase,
        LoggerMethod, LoggerMethods, LoggerOptions, MessageLevel, OrmLogger, QueryFailure, Result,
        SinkMethods, TextFormatter,
    };
}

pub use self::adaptors::{LogAdaptor, LogLevelMapping, TracingAdaptor, TracingLevelMapping};
pub use self::core::{
    AdaptorError, BasicLoggerMethods, EventPayload, Formatter, LogCategory, LoggerAdaptorBase,
    LoggerMethod, LoggerMethods, LoggerOptions, MessageLevel, OrmLogger, QueryFailure, Result,
    SinkMethods, TextFormatter,
};
