//! Adaptor targeting `tracing`
//!
//! Events become structured `tracing` events. Every ORM-specific category
//! carries a `category` field; a query error with a real source error
//! carries it as an `error` field, while a bare string failure is appended
//! to the message; slow queries carry `execution_time_ms`.

use crate::core::{
    AdaptorError, EventPayload, Formatter, LoggerAdaptorBase, LoggerMethod, LoggerMethods,
    LoggerOptions, MessageLevel, OrmLogger, QueryFailure, Result, SinkMethods, TextFormatter,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::Level;

/// Target string on every event this adaptor emits.
pub const EVENT_TARGET: &str = "orm";

/// `tracing::event!` needs its level at expansion time; this picks the
/// matching expansion for a level held in a variable.
macro_rules! emit {
    ($level:expr, $($arg:tt)+) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::event!(target: EVENT_TARGET, Level::ERROR, $($arg)+)
        } else if level == Level::WARN {
            tracing::event!(target: EVENT_TARGET, Level::WARN, $($arg)+)
        } else if level == Level::INFO {
            tracing::event!(target: EVENT_TARGET, Level::INFO, $($arg)+)
        } else if level == Level::DEBUG {
            tracing::event!(target: EVENT_TARGET, Level::DEBUG, $($arg)+)
        } else {
            tracing::event!(target: EVENT_TARGET, Level::TRACE, $($arg)+)
        }
    }};
}

/// Parse a [`tracing::Level`] from a config-supplied name,
/// case-insensitively, accepting the syslog spelling `"warning"`.
pub fn level_from_name(name: &str) -> Result<Level> {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(AdaptorError::unknown_level(name)),
    }
}

/// Severity assignments for [`TracingAdaptor`], with the same
/// inherit-unless-overridden shape as the `log` facade mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLevelMapping {
    pub log: Level,
    pub info: Level,
    pub warn: Level,
    pub error: Level,
    pub query: Option<Level>,
    pub query_error: Option<Level>,
    pub query_slow: Option<Level>,
    pub schema_build: Option<Level>,
    pub migration: Option<Level>,
}

impl Default for TracingLevelMapping {
    fn default() -> Self {
        Self {
            log: Level::DEBUG,
            info: Level::INFO,
            warn: Level::WARN,
            error: Level::ERROR,
            query: None,
            query_error: None,
            query_slow: None,
            schema_build: None,
            migration: None,
        }
    }
}

impl TracingLevelMapping {
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
    pub fn with_query(mut self, level: Level) -> Self {
        self.query = Some(level);
        self
    }

    #[must_use]
    pub fn with_query_error(mut self, level: Level) -> Self {
        self.query_error = Some(level);
        self
    }

    #[must_use]
    pub fn with_query_slow(mut self, level: Level) -> Self {
        self.query_slow = Some(level);
        self
    }

    #[must_use]
    pub fn with_schema_build(mut self, level: Level) -> Self {
        self.schema_build = Some(level);
        self
    }

    #[must_use]
    pub fn with_migration(mut self, level: Level) -> Self {
        self.migration = Some(level);
        self
    }
}

/// Routes ORM logging events into `tracing` as structured events.
pub struct TracingAdaptor {
    base: LoggerAdaptorBase,
}

impl TracingAdaptor {
    /// Adaptor with the default severity mapping and plain text formatting.
    pub fn new(options: &LoggerOptions) -> Self {
        Self::with_mapping(options, TracingLevelMapping::default())
    }

    pub fn with_mapping(options: &LoggerOptions, mapping: TracingLevelMapping) -> Self {
        Self::with_formatter(options, mapping, Box::new(TextFormatter::new()))
    }

    pub fn with_formatter(
        options: &LoggerOptions,
        mapping: TracingLevelMapping,
        formatter: Box<dyn Formatter + Send + Sync>,
    ) -> Self {
        Self {
            base: LoggerAdaptorBase::new(Self::to_logger_methods(mapping), formatter, options),
        }
    }

    /// The category tag is baked into each slot here rather than attached
    /// per call, so severity inheritance works on levels instead of
    /// sharing sink callbacks.
    fn to_logger_methods(mapping: TracingLevelMapping) -> SinkMethods {
        SinkMethods::Full(LoggerMethods {
            log: basic_sink(mapping.log),
            info: basic_sink(mapping.info),
            warn: basic_sink(mapping.warn),
            error: basic_sink(mapping.error),
            query: category_sink(mapping.query.unwrap_or(mapping.info), "query"),
            query_error: category_sink(mapping.query_error.unwrap_or(mapping.error), "queryError"),
            query_slow: category_sink(mapping.query_slow.unwrap_or(mapping.warn), "querySlow"),
            schema_build: category_sink(
                mapping.schema_build.unwrap_or(mapping.log),
                "schemaBuild",
            ),
            migration: category_sink(mapping.migration.unwrap_or(mapping.log), "migration"),
        })
    }
}

fn basic_sink(level: Level) -> LoggerMethod {
    let method: LoggerMethod = Arc::new(move |message, _payload| {
        emit!(level, "{message}");
    });
    method
}

fn category_sink(level: Level, category: &'static str) -> LoggerMethod {
    let method: LoggerMethod = Arc::new(move |message, payload| match payload {
        Some(EventPayload::Failure(failure)) => match failure.as_error() {
            Some(source) => {
                emit!(level, category = category, error = %source, "{message}");
            }
            None => {
                emit!(level, category = category, "{message}. {failure}");
            }
        },
        Some(EventPayload::SlowQuery { execution_time_ms }) => {
            emit!(
                level,
                category = category,
                execution_time_ms = execution_time_ms,
                "{message}"
            );
        }
        None => {
            emit!(level, category = category, "{message}");
        }
    });
    method
}

impl OrmLogger for TracingAdaptor {
    fn log_query(&self, query: &str, parameters: Option<&[JsonValue]>) {
        self.base.log_query(query, parameters);
    }

    fn log_query_error(&self, error: &QueryFailure, query: &str, parameters: Option<&[JsonValue]>) {
        self.base.log_query_error(error, query, parameters);
    }

    fn log_query_slow(&self, execution_time_ms: u64, query: &str, parameters: Option<&[JsonValue]>) {
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
