//! CSV reading
//!
//! Turns uploaded CSV bytes into [`Row`] mappings. The first record is the
//! header and becomes the key set of every row. Content checks (required
//! columns, duplicates, hierarchy shape) are the validator's job; this module
//! only rejects input the CSV format itself cannot represent, such as ragged
//! records.

use std::io::Read;

use crate::error::Result;
use crate::row::Row;

/// Read CSV data into rows keyed by the header record.
///
/// Empty input and header-only input both yield an empty row list; the
/// validator reports those as "CSV data is empty".
pub fn read_rows<R: Read>(input: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(input);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "parsed CSV input");
    Ok(rows)
}
