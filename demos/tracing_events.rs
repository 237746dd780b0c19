//! Routing ORM logging events into `tracing` as structured events.
//!
//! Run with: `cargo run --example tracing_events`

use orm_logger_adaptor::prelude::*;
use serde_json::json;
use std::io;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mapping = TracingLevelMapping::default().with_query(tracing::Level::DEBUG);
    let adaptor = TracingAdaptor::with_mapping(&LoggerOptions::All, mapping);

    adaptor.log_query(
        "SELECT * FROM memo WHERE content LIKE ?",
        Some(&[json!("%groceries%")]),
    );
    adaptor.log_query_slow(2000, "SELECT SLEEP(2)", None);
    adaptor.log_schema_build("creating a new table: memo");
    adaptor.log_query_error(
        &QueryFailure::source(io::Error::new(io::ErrorKind::ConnectionReset, "server gone")),
        "SELECT * FROM memo",
        None,
    );
    adaptor.log(MessageLevel::Warn, "connection pool is saturated");
}
