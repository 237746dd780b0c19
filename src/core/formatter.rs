//! Message formatting for query events

use super::failure::QueryFailure;
use serde_json::Value;

/// Renders query events into single human-readable lines.
///
/// Formatting never fails; parameter values are JSON-encoded verbatim,
/// best-effort.
pub trait Formatter {
    fn format_query(&self, query: &str, parameters: Option<&[Value]>) -> String;

    /// The failure itself is not embedded in the line; it reaches the sink
    /// separately as the event payload.
    fn format_query_error(
        &self,
        error: &QueryFailure,
        query: &str,
        parameters: Option<&[Value]>,
    ) -> String;

    fn format_query_slow(
        &self,
        execution_time_ms: u64,
        query: &str,
        parameters: Option<&[Value]>,
    ) -> String;
}

/// The default plain-text formatter, with optional SQL highlighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    #[cfg(feature = "highlight")]
    highlight_enabled: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable terminal syntax highlighting of the rendered query.
    #[cfg(feature = "highlight")]
    #[must_use]
    pub fn with_highlighting(mut self, enabled: bool) -> Self {
        self.highlight_enabled = enabled;
        self
    }

    fn render_query(&self, query: &str, parameters: Option<&[Value]>) -> String {
        let rendered = match parameters {
            Some(parameters) if !parameters.is_empty() => {
                format!("{} -- PARAMETERS: {}", query, encode_parameters(parameters))
            }
            _ => query.to_string(),
        };

        #[cfg(feature = "highlight")]
        if self.highlight_enabled {
            return super::highlight::highlight_sql(&rendered);
        }

        rendered
    }
}

impl Formatter for TextFormatter {
    fn format_query(&self, query: &str, parameters: Option<&[Value]>) -> String {
        format!("query: {}", self.render_query(query, parameters))
    }

    fn format_query_error(
        &self,
        _error: &QueryFailure,
        query: &str,
        parameters: Option<&[Value]>,
    ) -> String {
        format!("query failed: {}", self.render_query(query, parameters))
    }

    fn format_query_slow(
        &self,
        execution_time_ms: u64,
        query: &str,
        parameters: Option<&[Value]>,
    ) -> String {
        format!(
            "query is slow: execution time = {}, query = {}",
            execution_time_ms,
            self.render_query(query, parameters)
        )
    }
}

fn encode_parameters(parameters: &[Value]) -> String {
    serde_json::to_string(parameters).unwrap_or_else(|_| format!("{:?}", parameters))
}
