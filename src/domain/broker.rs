use std::fmt;
use std::str::FromStr;

use super::{JobId, TransactionRecord};

/// Issuing institution of a trade-confirmation document. Closed set:
/// a document that matches none of the variants is rejected at
/// submission time rather than carried as an "unknown" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Broker {
    Robinhood,
    Fidelity,
}

/// Per-broker rule for naming the output CSV.
struct CsvNaming {
    prefix: &'static str,
    date_field: &'static str,
    replace_from: char,
    replace_to: &'static str,
}

impl Broker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Broker::Robinhood => "robinhood",
            Broker::Fidelity => "fidelity",
        }
    }

    /// Sniff the broker from the text of a document's first page.
    pub fn detect(first_page_text: &str) -> Option<Self> {
        let text = first_page_text.to_lowercase();
        if text.contains("fidelity") {
            Some(Broker::Fidelity)
        } else if text.contains("robinhood") {
            Some(Broker::Robinhood)
        } else {
            None
        }
    }

    fn csv_naming(&self) -> CsvNaming {
        match self {
            Broker::Robinhood => CsvNaming {
                prefix: "rh",
                date_field: "trade_date",
                replace_from: '/',
                replace_to: "_",
            },
            Broker::Fidelity => CsvNaming {
                prefix: "fidelity",
                date_field: "date",
                replace_from: '-',
                replace_to: "_",
            },
        }
    }

    /// Derive the output CSV filename from the first parsed record's
    /// date field, falling back to the raw job id when no record is
    /// available or the field is missing.
    pub fn output_filename(&self, records: &[TransactionRecord], job_id: JobId) -> String {
        let naming = self.csv_naming();
        let date = records
            .first()
            .and_then(|record| record.get(naming.date_field))
            .and_then(|value| value.as_str());

        match date {
            Some(date) => format!(
                "{}_{}.csv",
                naming.prefix,
                date.replace(naming.replace_from, naming.replace_to)
            ),
            None => format!("{}.csv", job_id.as_uuid()),
        }
    }
}

impl fmt::Display for Broker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Broker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "robinhood" => Ok(Broker::Robinhood),
            "fidelity" => Ok(Broker::Fidelity),
            other => Err(format!("Unknown broker: {}", other)),
        }
    }
}
