//! Ledger row codec on top of `csv_async`.
//!
//! Rows are written with RFC 4180 quoting and a `\n` terminator. Reading is
//! flexible about field counts so the ledger can report (or recover from) a
//! bad row itself, with the line it starts on.

use std::io;

use csv_async::{AsyncReaderBuilder, AsyncWriterBuilder, StringRecord, Terminator};
use futures::StreamExt;

/// Ledger header row, in column order
pub const HEADER: [&str; 3] = ["Timestamp", "Username", "Email"];

/// Parse failure with the 1-based line on which the offending row starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

/// A parsed row with the line and byte offset it starts at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: u64,
    pub byte: u64,
    pub fields: Vec<String>,
}

impl Row {
    fn from_record(record: StringRecord) -> Self {
        let (line, byte) = record
            .position()
            .map(|p| (p.line(), p.byte()))
            .unwrap_or((0, 0));

        Self {
            line,
            byte,
            fields: record.iter().map(str::to_string).collect(),
        }
    }
}

/// Encode one row, including the trailing newline
pub async fn encode_row<S: AsRef<str>>(fields: &[S]) -> io::Result<Vec<u8>> {
    let mut writer = AsyncWriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .create_writer(Vec::new());

    writer
        .write_record(fields.iter().map(AsRef::<str>::as_ref))
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    writer
        .into_inner()
        .await
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Parse the whole file into rows. Blank lines are skipped.
pub async fn parse_rows(content: &str) -> Result<Vec<Row>, RowError> {
    let mut reader = AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(content.as_bytes());

    let mut records = reader.records();
    let mut rows = Vec::new();

    while let Some(record) = records.next().await {
        match record {
            Ok(record) => rows.push(Row::from_record(record)),
            Err(e) => {
                return Err(RowError {
                    line: e.position().map(|p| p.line()).unwrap_or(0),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(rows)
}
