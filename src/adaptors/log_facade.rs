//! Adaptor targeting the `log` crate facade
//!
//! Events become plain leveled records on the global facade. The failure
//! behind a query error and the elapsed time behind a slow query ride
//! along as structured key-values for backends that understand them; plain
//! text backends just see the formatted message.

use crate::core::{
    AdaptorError, BasicLoggerMethods, EventPayload, Formatter, LoggerAdaptorBase, LoggerMethod,
    LoggerMethods, LoggerOptions, MessageLevel, OrmLogger, QueryFailure, Result, SinkMethods,
    TextFormatter,
};
use serde_json::Value;
use std::sync::Arc;

/// Target string on every record this adaptor emits.
pub const LOG_TARGET: &str = "orm";

/// Parse a [`log::Level`] from a config-supplied name, case-insensitively.
///
/// Accepts the syslog spelling `"warning"` for the warn level, since
/// name-keyed configurations written against syslog level sets have no
/// `"warn"` entry.
pub fn level_from_name(name: &str) -> Result<log::Level> {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Ok(log::Level::Trace),
        "debug" => Ok(log::Level::Debug),
        "info" => Ok(log::Level::Info),
        "warn" | "warning" => Ok(log::Level::Warn),
        "error" => Ok(log::Level::Error),
        _ => Err(AdaptorError::unknown_level(name)),
    }
}

/// Severity assignments for [`LogAdaptor`].
///
/// The four base severities always have a level; the five ORM-specific
/// categories inherit from them (query from info, query-error from error,
/// slow-query from warn, schema-build and migration from log) unless
/// overridden here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevelMapping {
    pub log: log::Level,
    pub info: log::Level,
    pub warn: log::Level,
    pub error: log::Level,
    pub query: Option<log::Level>,
    pub query_error: Option<log::Level>,
    pub query_slow: Option<log::Level>,
    pub schema_build: Option<log::Level>,
    pub migration: Option<log::Level>,
}

impl Default for LogLevelMapping {
    fn default() -> Self {
        Self {
            log: log::Level::Debug,
            info: log::Level::Info,
            warn: log::Level::Warn,
            error: log::Level::Error,
            query: None,
            query_error: None,
            query_slow: None,
            schema_build: None,
            migration: None,
        }
    }
}

impl LogLevelMapping {
    /// Build the base severities from configuration-supplied names.
    pub fn from_names(log: &str, info: &str, warn: &str, error: &str) -> Result<Self> {
        Ok(Self {
            log: level_from_name(log)?,
            info: level_from_name(info)?,
            warn: level_from_name(warn)?,
            error: level_from_name(error)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_query(mut self, level: log::Level) -> Self {
        self.query = Some(level);
        self
    }

    #[must_use]
    pub fn with_query_error(mut self, level: log::Level) -> Self {
        self.query_error = Some(level);
        self
    }

    #[must_use]
    pub fn with_query_slow(mut self, level: log::Level) -> Self {
        self.query_slow = Some(level);
        self
    }

    #[must_use]
    pub fn with_schema_build(mut self, level: log::Level) -> Self {
        self.schema_build = Some(level);
        self
    }

    #[must_use]
    pub fn with_migration(mut self, level: log::Level) -> Self {
        self.migration = Some(level);
        self
    }
}

/// Routes ORM logging events onto the global `log` facade.
pub struct LogAdaptor {
    base: LoggerAdaptorBase,
}

impl LogAdaptor {
    /// Adaptor with the default severity mapping and plain text formatting.
    pub fn new(options: &LoggerOptions) -> Self {
        Self::with_mapping(options, LogLevelMapping::default())
    }

    pub fn with_mapping(options: &LoggerOptions, mapping: LogLevelMapping) -> Self {
        Self::with_formatter(options, mapping, Box::new(TextFormatter::new()))
    }

    pub fn with_formatter(
        options: &LoggerOptions,
        mapping: LogLevelMapping,
        formatter: Box<dyn Formatter + Send + Sync>,
    ) -> Self {
        Self {
            base: LoggerAdaptorBase::new(Self::to_logger_methods(mapping), formatter, options),
        }
    }

    fn to_logger_methods(mapping: LogLevelMapping) -> SinkMethods {
        let mut methods = LoggerMethods::from_basic(BasicLoggerMethods {
            log: sink(mapping.log),
            info: sink(mapping.info),
            warn: sink(mapping.warn),
            error: sink(mapping.error),
        });

        if let Some(level) = mapping.query {
            methods.query = sink(level);
        }
        if let Some(level) = mapping.query_error {
            methods.query_error = sink(level);
        }
        if let Some(level) = mapping.query_slow {
            methods.query_slow = sink(level);
        }
        if let Some(level) = mapping.schema_build {
            methods.schema_build = sink(level);
        }
        if let Some(level) = mapping.migration {
            methods.migration = sink(level);
        }

        SinkMethods::Full(methods)
    }
}

fn sink(level: log::Level) -> LoggerMethod {
    let method: LoggerMethod = Arc::new(move |message, payload| match payload {
        Some(EventPayload::Failure(failure)) => {
            log::log!(target: LOG_TARGET, level, error:% = failure; "{message}");
        }
        Some(EventPayload::SlowQuery { execution_time_ms }) => {
            log::log!(target: LOG_TARGET, level, execution_time_ms = execution_time_ms; "{message}");
        }
        None => {
            log::log!(target: LOG_TARGET, level, "{message}");
        }
    });
    method
}

impl OrmLogger for LogAdaptor {
    fn log_query(&self, query: &str, parameters: Option<&[Value]>) {
        self.base.log_query(query, parameters);
    }

    fn log_query_error(&self, error: &QueryFailure, query: &str, parameters: Option<&[Value]>) {
        self.base.log_query_error(error, query, parameters);
    }

    fn log_query_slow(&self, execution_time_ms: u64, query: &str, parameters: Option<&[Value]>) {
        self.base.log_query_slow(execution_time_ms, query, parameters);
    }

    fn log_schema_build(&self, message: &str) {
        self.base.log_schema_build(message);
    }

    fn log_migration(&self, message: &str) {
        self.base.log_migration(message);
    }

    fn log(&self, level: MessageLevel, message: &str) {
        self.base.log(level, message);
    }
}
