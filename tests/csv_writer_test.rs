use confirmd::application::ports::OutputWriter;
use confirmd::domain::TransactionRecord;
use confirmd::infrastructure::output::CsvOutputWriter;
use serde_json::{json, Value};

fn record(pairs: &[(&str, Value)]) -> TransactionRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[tokio::test]
async fn given_records_when_written_then_header_follows_first_record_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.csv");

    let records = vec![
        record(&[
            ("symbol", json!("AAPL")),
            ("quantity", json!(10)),
            ("price", json!(187.5)),
        ]),
        record(&[
            ("symbol", json!("MSFT")),
            ("quantity", json!(3)),
            ("price", json!(402.0)),
        ]),
    ];

    CsvOutputWriter::new().write(&records, &dest).await.unwrap();

    let contents = tokio::fs::read_to_string(&dest).await.unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines[0], "symbol,quantity,price");
    assert_eq!(lines[1], "AAPL,10,187.5");
    assert_eq!(lines[2], "MSFT,3,402.0");
}

#[tokio::test]
async fn given_field_with_comma_when_written_then_it_is_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.csv");

    let records = vec![record(&[
        ("action", json!("Buy, limit order")),
        ("symbol", json!("VTI")),
    ])];

    CsvOutputWriter::new().write(&records, &dest).await.unwrap();

    let contents = tokio::fs::read_to_string(&dest).await.unwrap();
    assert_eq!(contents.lines().nth(1), Some("\"Buy, limit order\",VTI"));
}

#[tokio::test]
async fn given_record_with_missing_field_when_written_then_cell_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.csv");

    let records = vec![
        record(&[("symbol", json!("AAPL")), ("price", json!(187.5))]),
        record(&[("symbol", json!("MSFT"))]),
    ];

    CsvOutputWriter::new().write(&records, &dest).await.unwrap();

    let contents = tokio::fs::read_to_string(&dest).await.unwrap();
    assert_eq!(contents.lines().nth(2), Some("MSFT,"));
}

#[tokio::test]
async fn given_no_records_when_written_then_file_is_created_empty() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.csv");

    CsvOutputWriter::new().write(&[], &dest).await.unwrap();

    let contents = tokio::fs::read_to_string(&dest).await.unwrap();
    assert!(contents.is_empty());
}

#[tokio::test]
async fn given_unwritable_destination_when_written_then_io_error_is_returned() {
    let records = vec![record(&[("symbol", json!("AAPL"))])];
    let result = CsvOutputWriter::new()
        .write(&records, std::path::Path::new("/nonexistent/dir/out.csv"))
        .await;
    assert!(result.is_err());
}
