use std::str::FromStr;

use confirmd::domain::{Broker, JobId, JobStatus, TransactionRecord};
use serde_json::Value;

fn record(pairs: &[(&str, &str)]) -> TransactionRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[test]
fn given_fidelity_first_page_when_detecting_then_returns_fidelity() {
    let text = "FIDELITY INVESTMENTS\nConfirmation of trade";
    assert_eq!(Broker::detect(text), Some(Broker::Fidelity));
}

#[test]
fn given_robinhood_first_page_when_detecting_then_returns_robinhood() {
    let text = "Robinhood Securities, LLC\nTrade confirmation";
    assert_eq!(Broker::detect(text), Some(Broker::Robinhood));
}

#[test]
fn given_unrelated_first_page_when_detecting_then_returns_none() {
    assert_eq!(Broker::detect("Some other brokerage statement"), None);
}

#[test]
fn given_robinhood_records_when_naming_output_then_trade_date_slashes_become_underscores() {
    let records = vec![
        record(&[("symbol", "AAPL"), ("trade_date", "04/01/2025")]),
        record(&[("symbol", "MSFT"), ("trade_date", "04/02/2025")]),
    ];
    let name = Broker::Robinhood.output_filename(&records, JobId::new());
    assert_eq!(name, "rh_04_01_2025.csv");
}

#[test]
fn given_fidelity_records_when_naming_output_then_date_dashes_become_underscores() {
    let records = vec![record(&[("symbol", "VTI"), ("date", "2025-04-01")])];
    let name = Broker::Fidelity.output_filename(&records, JobId::new());
    assert_eq!(name, "fidelity_2025_04_01.csv");
}

#[test]
fn given_no_records_when_naming_output_then_falls_back_to_job_id() {
    let job_id = JobId::new();
    let name = Broker::Robinhood.output_filename(&[], job_id);
    assert_eq!(name, format!("{}.csv", job_id.as_uuid()));
}

#[test]
fn given_record_without_date_field_when_naming_output_then_falls_back_to_job_id() {
    let job_id = JobId::new();
    let records = vec![record(&[("symbol", "AAPL")])];
    let name = Broker::Robinhood.output_filename(&records, job_id);
    assert_eq!(name, format!("{}.csv", job_id.as_uuid()));
}

#[test]
fn given_status_strings_when_parsed_then_round_trip() {
    for status in [
        JobStatus::Queuing,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Failed,
        JobStatus::Downloaded,
    ] {
        assert_eq!(JobStatus::from_str(status.as_str()), Ok(status));
    }
    assert!(JobStatus::from_str("paused").is_err());
}

#[test]
fn given_statuses_when_checking_terminality_then_only_end_states_are_terminal() {
    assert!(!JobStatus::Queuing.is_terminal());
    assert!(!JobStatus::Processing.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
    assert!(JobStatus::Downloaded.is_terminal());
}

#[test]
fn given_broker_strings_when_parsed_then_round_trip() {
    assert_eq!(Broker::from_str("robinhood"), Ok(Broker::Robinhood));
    assert_eq!(Broker::from_str("fidelity"), Ok(Broker::Fidelity));
    assert!(Broker::from_str("etrade").is_err());
}
