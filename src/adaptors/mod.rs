//! Concrete adaptors binding the dispatch core to a logging library

pub mod log_facade;
pub mod tracing;

pub use self::log_facade::{LogAdaptor, LogLevelMapping};
pub use self::tracing::{TracingAdaptor, TracingLevelMapping};
