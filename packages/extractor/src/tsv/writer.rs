//! TSV writer for extracted records.
//!
//! Each record renders as one record line followed by one line per
//! author: the record's five-field default line as prefix, then the five
//! author sub-fields, all tab-joined.

use std::io::Write;

use crate::config::FIELD_CONNECTOR;
use crate::error::Result;
use crate::record::Record;

/// Render one record as its output lines.
///
/// With `full`, the record line carries the whole field set instead of
/// the five-field default; author lines always use the default prefix.
#[must_use]
pub fn format_record(record: &Record, full: bool) -> String {
    let prefix = record.to_line();

    let mut lines: Vec<String> = Vec::with_capacity(1 + record.authors.len());
    if full {
        lines.push(record.to_full_line());
    } else {
        lines.push(prefix.clone());
    }

    for author in &record.authors {
        lines.push(format!(
            "{prefix}{FIELD_CONNECTOR}{}",
            author.fields().join(FIELD_CONNECTOR)
        ));
    }

    lines.join("\n")
}

/// Write all records to `writer`, one line group per record.
///
/// Returns the number of records written.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: impl IntoIterator<Item = Record>,
    full: bool,
) -> Result<usize> {
    let mut count = 0;
    for record in records {
        writeln!(writer, "{}", format_record(&record, full))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
