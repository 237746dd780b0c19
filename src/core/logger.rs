//! The ORM-facing logging contract and the shared dispatch core

use super::category::LoggerOptions;
use super::failure::QueryFailure;
use super::formatter::Formatter;
use super::methods::{EventPayload, LoggerMethods, SinkMethods};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Severities reachable through the generic [`OrmLogger::log`] entry
/// point. The error severity is intentionally absent: errors only flow
/// through [`OrmLogger::log_query_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Log,
    Info,
    Warn,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageLevel::Log => "log",
            MessageLevel::Info => "info",
            MessageLevel::Warn => "warn",
        };
        write!(f, "{}", name)
    }
}

/// The logging contract an ORM drives: one entry point per event category
/// plus a generic leveled channel.
///
/// Every call is synchronous and results in at most one sink invocation;
/// disabled categories are silent by design.
pub trait OrmLogger {
    /// An executed query, with its bound parameters.
    fn log_query(&self, query: &str, parameters: Option<&[Value]>);

    /// A failed query. The failure value is forwarded to the sink
    /// unmodified as the event payload.
    fn log_query_error(&self, error: &QueryFailure, query: &str, parameters: Option<&[Value]>);

    /// A query that exceeded the ORM's slow threshold.
    fn log_query_slow(&self, execution_time_ms: u64, query: &str, parameters: Option<&[Value]>);

    /// A schema synchronization step, forwarded verbatim.
    fn log_schema_build(&self, message: &str);

    /// A migration step, forwarded verbatim.
    fn log_migration(&self, message: &str);

    /// A free-form message at one of the base severities.
    fn log(&self, level: MessageLevel, message: &str);
}

/// The filtering/dispatch core shared by the concrete adaptors.
///
/// Holds the effective methods table — resolved and filtered exactly once
/// at construction — and a formatter. Each entry point formats its message
/// and invokes the corresponding slot; a disabled slot is a no-op, so
/// callers never check whether logging is enabled.
pub struct LoggerAdaptorBase {
    methods: LoggerMethods,
    formatter: Box<dyn Formatter + Send + Sync>,
}

impl LoggerAdaptorBase {
    pub fn new(
        methods: SinkMethods,
        formatter: Box<dyn Formatter + Send + Sync>,
        options: &LoggerOptions,
    ) -> Self {
        Self {
            methods: LoggerMethods::resolve(methods).filtered(options),
            formatter,
        }
    }
}

impl OrmLogger for LoggerAdaptorBase {
    fn log_query(&self, query: &str, parameters: Option<&[Value]>) {
        let message = self.formatter.format_query(query, parameters);
        (self.methods.query)(&message, None);
    }

    fn log_query_error(&self, error: &QueryFailure, query: &str, parameters: Option<&[Value]>) {
        let message = self.formatter.format_query_error(error, query, parameters);
        (self.methods.query_error)(&message, Some(EventPayload::Failure(error)));
    }

    fn log_query_slow(&self, execution_time_ms: u64, query: &str, parameters: Option<&[Value]>) {
        let message = self
            .formatter
            .format_query_slow(execution_time_ms, query, parameters);
        (self.methods.query_slow)(&message, Some(EventPayload::SlowQuery { execution_time_ms }));
    }

    fn log_schema_build(&self, message: &str) {
        (self.methods.schema_build)(message, None);
    }

    fn log_migration(&self, message: &str) {
        (self.methods.migration)(message, None);
    }

    fn log(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Log => (self.methods.log)(message, None),
            MessageLevel::Info => (self.methods.info)(message, None),
            MessageLevel::Warn => (self.methods.warn)(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formatter::TextFormatter;
    use crate::core::methods::{BasicLoggerMethods, LoggerMethod};
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Recorded = (String, String, Option<String>);

    fn recording_sink(
        records: &Arc<Mutex<Vec<Recorded>>>,
        slot: &'static str,
    ) -> LoggerMethod {
        let records = Arc::clone(records);
        Arc::new(move |message, payload| {
            let payload = payload.map(|p| match p {
                EventPayload::Failure(failure) => format!("failure:{}", failure),
                EventPayload::SlowQuery { execution_time_ms } => {
                    format!("slow:{}", execution_time_ms)
                }
            });
            records.lock().push((slot.to_string(), message.to_string(), payload));
        })
    }

    fn base_with(
        records: &Arc<Mutex<Vec<Recorded>>>,
        options: &LoggerOptions,
    ) -> LoggerAdaptorBase {
        LoggerAdaptorBase::new(
            SinkMethods::Basic(BasicLoggerMethods {
                log: recording_sink(records, "log"),
                info: recording_sink(records, "info"),
                warn: recording_sink(records, "warn"),
                error: recording_sink(records, "error"),
            }),
            Box::new(TextFormatter::new()),
            options,
        )
    }

    #[test]
    fn test_log_query_formats_and_dispatches_once() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::All);

        base.log_query("select 1", None);

        assert_eq!(
            *records.lock(),
            vec![("info".to_string(), "query: select 1".to_string(), None)]
        );
    }

    #[test]
    fn test_log_query_error_carries_failure_payload() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::All);

        let failure = QueryFailure::from("boom");
        base.log_query_error(&failure, "select X from Y", None);

        assert_eq!(
            *records.lock(),
            vec![(
                "error".to_string(),
                "query failed: select X from Y".to_string(),
                Some("failure:boom".to_string())
            )]
        );
    }

    #[test]
    fn test_log_query_slow_carries_elapsed_payload() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::Disabled);

        base.log_query_slow(2000, "select sleep(2)", None);

        assert_eq!(
            *records.lock(),
            vec![(
                "warn".to_string(),
                "query is slow: execution time = 2000, query = select sleep(2)".to_string(),
                Some("slow:2000".to_string())
            )]
        );
    }

    #[test]
    fn test_schema_and_migration_forward_verbatim() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::All);

        base.log_schema_build("creating a new table: memo");
        base.log_migration("(migration message)");

        assert_eq!(
            *records.lock(),
            vec![
                ("log".to_string(), "creating a new table: memo".to_string(), None),
                ("log".to_string(), "(migration message)".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_log_routes_by_level() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::All);

        base.log(MessageLevel::Log, "a");
        base.log(MessageLevel::Info, "b");
        base.log(MessageLevel::Warn, "c");

        let slots: Vec<String> = records.lock().iter().map(|r| r.0.clone()).collect();
        assert_eq!(slots, vec!["log", "info", "warn"]);
    }

    #[test]
    fn test_disabled_categories_are_silent() {
        let records = Arc::new(Mutex::new(Vec::new()));
        let base = base_with(&records, &LoggerOptions::from([crate::core::LogCategory::Query]));

        base.log_query("select 1", None);
        base.log_schema_build("x");
        base.log_migration("y");
        base.log(MessageLevel::Info, "z");

        assert_eq!(
            *records.lock(),
            vec![("info".to_string(), "query: select 1".to_string(), None)]
        );
    }
}
