//! Routing ORM logging events onto the `log` facade, rendered by
//! env_logger.
//!
//! Run with: `cargo run --example log_facade`

use orm_logger_adaptor::prelude::*;
use serde_json::json;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Trace)
        .init();

    // the shape a config file would supply
    let options: LoggerOptions =
        serde_json::from_str(r#"["query", "error", "schema", "migration"]"#).expect("valid options");

    let adaptor = LogAdaptor::new(&options);

    adaptor.log_query("SELECT * FROM memo WHERE id = ?", Some(&[json!(1)]));
    adaptor.log_schema_build("creating a new table: memo");
    adaptor.log_migration("running migration: AddMemo1600000000000");
    adaptor.log_query_slow(2000, "SELECT SLEEP(2)", None);
    adaptor.log_query_error(
        &QueryFailure::from("Table 'test.memo' doesn't exist"),
        "SELECT * FROM memo",
        None,
    );

    // filtered out: "info" is not in the category list
    adaptor.log(MessageLevel::Info, "this line is suppressed");
}
