use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs::File;

use crate::application::ports::{OutputWriter, OutputWriterError};
use crate::domain::TransactionRecord;

/// CSV serializer for parsed transaction records.
///
/// The header row is the first record's key order; subsequent records
/// are projected onto those columns, with missing fields left empty.
/// An empty record set produces an empty file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOutputWriter;

impl CsvOutputWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for CsvOutputWriter {
    async fn write(
        &self,
        records: &[TransactionRecord],
        dest: &Path,
    ) -> Result<(), OutputWriterError> {
        let file = File::create(dest).await?;
        let mut writer = csv_async::AsyncWriter::from_writer(file);

        if let Some(first) = records.first() {
            let columns: Vec<&str> = first.keys().map(String::as_str).collect();
            writer
                .write_record(&columns)
                .await
                .map_err(|e| OutputWriterError::Serialization(e.to_string()))?;

            for record in records {
                let row: Vec<String> = columns
                    .iter()
                    .map(|column| render_field(record.get(*column)))
                    .collect();
                writer
                    .write_record(&row)
                    .await
                    .map_err(|e| OutputWriterError::Serialization(e.to_string()))?;
            }
        }

        writer
            .flush()
            .await
            .map_err(|e| OutputWriterError::Serialization(e.to_string()))?;
        Ok(())
    }
}

fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
