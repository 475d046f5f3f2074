//! Tabular reader for the extraction table.
//!
//! The first row is a header and is skipped without inspection. Every data
//! row must carry exactly [`Record::WIDTH`] columns in the order
//! `simpleName, kind, fullyQualifiedName, definition, javadoc, parent,
//! importBody, body`.

use crate::core::{EntityKind, Error, QualifiedName, Record, Result, ResultExt};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info_span};

/// Read every record from the file at `path`.
pub fn read_records_from_path(path: &Path) -> Result<Vec<Record>> {
    let _span = info_span!("read", path = %path.display()).entered();
    if !path.is_file() {
        return Err(Error::input_missing(path));
    }
    let file = File::open(path).resource_context("Failed to open input file", path)?;
    read_records(file)
}

/// Read every record from a tabular source.
///
/// Either all rows load or none do: the first malformed row aborts the read
/// and no partial list is returned.
pub fn read_records<R: Read>(source: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut records = Vec::with_capacity(32);
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(parse_row(index + 1, &row)?);
    }

    debug!(count = records.len(), "loaded records");
    Ok(records)
}

fn parse_row(row_number: usize, row: &csv::StringRecord) -> Result<Record> {
    if row.len() != Record::WIDTH {
        return Err(Error::schema(
            row_number,
            format!("Must be {} columns, found {}", Record::WIDTH, row.len()),
        ));
    }

    let column = |i: usize| row.get(i).unwrap_or_default().to_string();
    let kind: EntityKind = row
        .get(1)
        .unwrap_or_default()
        .parse()
        .map_err(|e: crate::core::UnknownKind| Error::schema(row_number, e.to_string()))?;

    Ok(Record {
        simple_name: column(0),
        kind,
        name: QualifiedName::new(column(2)),
        definition: column(3),
        javadoc: column(4),
        parent: QualifiedName::parent_of(row.get(5).unwrap_or_default()),
        import_body: column(6),
        body: column(7),
    })
}
