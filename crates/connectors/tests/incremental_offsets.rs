use connectors::sql::{
    base::{incremental::IncrementalTracker, params::BoundParam},
    mysql::params::MySqlStatementParams,
    postgres::params::PgStatementParams,
};
use model::{
    core::value::Value,
    pagination::{
        incremental::IncrementalValue, offset::OffsetValue, offset_config::IncrementalConfig,
    },
    records::row::{FieldValue, RowData},
};
use mysql_common::params::Params;

fn orders_row(id: Value, version: Value) -> RowData {
    RowData::new(
        "orders",
        vec![
            FieldValue::new("id", id),
            FieldValue::new("row_version", version),
        ],
    )
}

// Numeric column: classify, bind at position 1, persist as a number.
#[test]
fn integral_offset_binds_and_persists_as_number() {
    let mut tracker = IncrementalTracker::new(IncrementalConfig::new("orders.id"));

    let observed = tracker
        .observe(&orders_row(Value::Int(42), Value::Null))
        .unwrap()
        .cloned();
    assert_eq!(observed, Some(IncrementalValue::Integral(42)));

    let mut stmt = PgStatementParams::new(1);
    assert!(tracker.bind(&mut stmt, 1).unwrap());
    assert_eq!(stmt.slots().get(1), Some(&BoundParam::Int(42)));
    assert_eq!(stmt.to_store().unwrap().len(), 1);

    let stored = tracker.offset().unwrap();
    assert_eq!(stored, OffsetValue::Number(42));
    assert_eq!(serde_json::to_string(&stored).unwrap(), "42");
}

// Binary column: bytes persist as base64 text and survive a restart.
#[test]
fn opaque_offset_round_trips_through_storage() {
    let config = IncrementalConfig::from_json(r#"{ "column": "row_version" }"#).unwrap();
    let mut tracker = IncrementalTracker::new(config.clone());

    tracker
        .observe(&orders_row(Value::Int(1), Value::Bytes(vec![0x00, 0xff])))
        .unwrap();
    let stored = tracker.offset().unwrap();
    assert_eq!(stored, OffsetValue::Text("AP8=".into()));

    let persisted = serde_json::to_string(&stored).unwrap();
    let reloaded: OffsetValue = serde_json::from_str(&persisted).unwrap();

    let mut restarted = IncrementalTracker::new(config);
    restarted.resume(Some(&reloaded)).unwrap();
    assert_eq!(restarted.offset(), Some(OffsetValue::Text("AP8=".into())));

    let mut stmt = MySqlStatementParams::new(2);
    assert!(restarted.bind(&mut stmt, 2).unwrap());
    assert_eq!(stmt.slots().get(2), Some(&BoundParam::Bytes(vec![0x00, 0xff])));
}

#[test]
fn text_column_is_read_as_base64() {
    let mut tracker = IncrementalTracker::new(IncrementalConfig::new("row_version"));
    tracker
        .observe(&orders_row(Value::Int(1), Value::String("AP8=".into())))
        .unwrap();

    let mut stmt = MySqlStatementParams::new(1);
    tracker.bind(&mut stmt, 1).unwrap();
    let store = stmt.to_store().unwrap();
    let Params::Positional(values) = store.params() else {
        panic!("expected positional params");
    };
    assert_eq!(values, vec![mysql_async::Value::Bytes(vec![0x00, 0xff])]);
}

// A lenient encoder may leave unused bits set in the last symbol.
#[test]
fn stored_offset_with_trailing_bits_resumes() {
    let mut tracker = IncrementalTracker::new(IncrementalConfig::new("row_version"));
    tracker
        .resume(Some(&OffsetValue::Text("AP9=".into())))
        .unwrap();

    let mut stmt = PgStatementParams::new(1);
    assert!(tracker.bind(&mut stmt, 1).unwrap());
    assert_eq!(stmt.slots().get(1), Some(&BoundParam::Bytes(vec![0x00, 0xff])));
    assert_eq!(tracker.offset(), Some(OffsetValue::Text("AP8=".into())));
}

#[test]
fn first_poll_binds_nothing() {
    let tracker = IncrementalTracker::new(IncrementalConfig::new("id"));
    let mut stmt = PgStatementParams::new(1);
    assert!(!tracker.bind(&mut stmt, 1).unwrap());
    assert!(stmt.to_store().is_err());
    assert_eq!(tracker.offset(), None);
}
