//! The per-category sink table and its construction rules

use super::category::{LogCategory, LoggerOptions};
use super::failure::QueryFailure;
use std::sync::Arc;

/// Auxiliary event data handed to a sink alongside the formatted message.
///
/// Replaces the original contract's variadic trailing arguments with the
/// one value each event actually carries.
#[derive(Debug, Clone, Copy)]
pub enum EventPayload<'a> {
    /// The failure behind a query-error event.
    Failure(&'a QueryFailure),
    /// Elapsed time behind a slow-query event.
    SlowQuery { execution_time_ms: u64 },
}

/// A single category sink: formatted message plus optional payload.
pub type LoggerMethod = Arc<dyn Fn(&str, Option<EventPayload<'_>>) + Send + Sync>;

fn noop_sink(_message: &str, _payload: Option<EventPayload<'_>>) {}

/// A sink that performs no observable action, bound to disabled slots.
pub(crate) fn noop() -> LoggerMethod {
    Arc::new(noop_sink)
}

/// Sinks for the four base severities only.
#[derive(Clone)]
pub struct BasicLoggerMethods {
    pub log: LoggerMethod,
    pub info: LoggerMethod,
    pub warn: LoggerMethod,
    pub error: LoggerMethod,
}

/// Sinks for all nine categories.
#[derive(Clone)]
pub struct LoggerMethods {
    pub log: LoggerMethod,
    pub info: LoggerMethod,
    pub warn: LoggerMethod,
    pub error: LoggerMethod,
    pub query: LoggerMethod,
    pub query_error: LoggerMethod,
    pub query_slow: LoggerMethod,
    pub schema_build: LoggerMethod,
    pub migration: LoggerMethod,
}

/// What a concrete adaptor supplies: just the base severities, or a full
/// per-category table. Decided once at construction.
pub enum SinkMethods {
    Basic(BasicLoggerMethods),
    Full(LoggerMethods),
}

impl LoggerMethods {
    /// Fill the ORM-specific slots from the base severities: query uses
    /// info's sink, query-error uses error's, slow-query uses warn's, and
    /// schema-build and migration use log's.
    pub fn from_basic(basic: BasicLoggerMethods) -> Self {
        let BasicLoggerMethods {
            log,
            info,
            warn,
            error,
        } = basic;
        Self {
            query: Arc::clone(&info),
            query_error: Arc::clone(&error),
            query_slow: Arc::clone(&warn),
            schema_build: Arc::clone(&log),
            migration: Arc::clone(&log),
            log,
            info,
            warn,
            error,
        }
    }

    pub fn resolve(methods: SinkMethods) -> Self {
        match methods {
            SinkMethods::Basic(basic) => Self::from_basic(basic),
            SinkMethods::Full(full) => full,
        }
    }

    /// Replace the slot of every non-enabled tag with the no-op.
    ///
    /// The slow-query and base error slots have no tag and are left alone:
    /// slow-query logging stays live under any options value, and the base
    /// error slot only serves as the query-error severity default.
    pub(crate) fn filtered(mut self, options: &LoggerOptions) -> Self {
        if !options.enables(LogCategory::Query) {
            self.query = noop();
        }
        if !options.enables(LogCategory::Error) {
            self.query_error = noop();
        }
        if !options.enables(LogCategory::Schema) {
            self.schema_build = noop();
        }
        if !options.enables(LogCategory::Migration) {
            self.migration = noop();
        }
        if !options.enables(LogCategory::Warn) {
            self.warn = noop();
        }
        if !options.enables(LogCategory::Info) {
            self.info = noop();
        }
        if !options.enables(LogCategory::Log) {
            self.log = noop();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn counting_sink(hits: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> LoggerMethod {
        let hits = Arc::clone(hits);
        Arc::new(move |_message, _payload| hits.lock().push(name))
    }

    fn basic(hits: &Arc<Mutex<Vec<&'static str>>>) -> BasicLoggerMethods {
        BasicLoggerMethods {
            log: counting_sink(hits, "log"),
            info: counting_sink(hits, "info"),
            warn: counting_sink(hits, "warn"),
            error: counting_sink(hits, "error"),
        }
    }

    #[test]
    fn test_from_basic_inherits_severities() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let methods = LoggerMethods::from_basic(basic(&hits));

        (methods.query)("q", None);
        (methods.query_error)("qe", None);
        (methods.query_slow)("qs", None);
        (methods.schema_build)("sb", None);
        (methods.migration)("m", None);

        assert_eq!(*hits.lock(), vec!["info", "error", "warn", "log", "log"]);
    }

    #[test]
    fn test_disabled_options_silence_every_tagged_slot() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let methods =
            LoggerMethods::from_basic(basic(&hits)).filtered(&LoggerOptions::Disabled);

        (methods.query)("q", None);
        (methods.schema_build)("sb", None);
        (methods.migration)("m", None);
        (methods.log)("l", None);
        (methods.info)("i", None);
        (methods.warn)("w", None);
        (methods.query_error)("qe", None);
        assert!(hits.lock().is_empty());

        // slow-query and base error are not tag-controlled
        (methods.query_slow)("qs", None);
        (methods.error)("e", None);
        assert_eq!(*hits.lock(), vec!["warn", "error"]);
    }

    #[test]
    fn test_filtered_keeps_listed_tags() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let options = LoggerOptions::from([LogCategory::Query, LogCategory::Warn]);
        let methods = LoggerMethods::from_basic(basic(&hits)).filtered(&options);

        (methods.query)("q", None);
        (methods.warn)("w", None);
        (methods.query_error)("qe", None);
        (methods.info)("i", None);

        assert_eq!(*hits.lock(), vec!["info", "warn"]);
    }

    #[test]
    fn test_all_filters_nothing() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let methods = LoggerMethods::from_basic(basic(&hits)).filtered(&LoggerOptions::All);

        (methods.query)("q", None);
        (methods.query_error)("qe", None);
        (methods.log)("l", None);
        assert_eq!(hits.lock().len(), 3);
    }
}
