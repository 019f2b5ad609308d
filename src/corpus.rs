//! Corpus ingestion from the five-column couplet CSV.
//!
//! The source file is a header-first CSV with the columns `NUMBER`,
//! `TAMIL_VERSE`, `ENGLISH_VERSE`, `ENGLISH_EXPLANATION` and
//! `TAMIL_EXPLANATION`, in any order, extra columns ignored. Header
//! validation happens up front so a malformed export fails with the name of
//! the missing column instead of a confusing row error half-way through.
//!
//! Explanation cells may be blank; they load as empty strings, never as a
//! missing field. A blank or unparseable `NUMBER` cell is an error - the
//! numbering invariant (`Corpus::from_records`) depends on every row having
//! one.

use crate::types::{Corpus, CorpusError, KuralRecord};
use std::io;
use std::path::Path;

/// Required header columns, in the order they are reported when absent.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "NUMBER",
    "TAMIL_VERSE",
    "ENGLISH_VERSE",
    "ENGLISH_EXPLANATION",
    "TAMIL_EXPLANATION",
];

/// Column positions resolved from the header row.
struct ColumnMap {
    number: usize,
    tamil_verse: usize,
    english_verse: usize,
    english_explanation: usize,
    tamil_explanation: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CorpusError> {
        let position = |column: &str| -> Result<usize, CorpusError> {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| CorpusError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(ColumnMap {
            number: position(REQUIRED_COLUMNS[0])?,
            tamil_verse: position(REQUIRED_COLUMNS[1])?,
            english_verse: position(REQUIRED_COLUMNS[2])?,
            english_explanation: position(REQUIRED_COLUMNS[3])?,
            tamil_explanation: position(REQUIRED_COLUMNS[4])?,
        })
    }
}

/// Load a corpus from a CSV file on disk.
pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path).map_err(|e| CorpusError::Csv {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    read_corpus(reader, &path.display().to_string())
}

/// Load a corpus from any reader (tests feed in-memory CSV through this).
pub fn from_reader<R: io::Read>(reader: R, origin: &str) -> Result<Corpus, CorpusError> {
    read_corpus(csv::Reader::from_reader(reader), origin)
}

fn read_corpus<R: io::Read>(
    mut reader: csv::Reader<R>,
    origin: &str,
) -> Result<Corpus, CorpusError> {
    let headers = reader
        .headers()
        .map_err(|e| CorpusError::Csv {
            path: origin.to_string(),
            detail: e.to_string(),
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CorpusError::Csv {
            path: origin.to_string(),
            detail: e.to_string(),
        })?;
        // Header is line 1, first data row line 2.
        let line = records.len() + 2;
        records.push(decode_row(&row, &columns, line)?);
    }

    Corpus::from_records(records)
}

fn decode_row(
    row: &csv::StringRecord,
    columns: &ColumnMap,
    line: usize,
) -> Result<KuralRecord, CorpusError> {
    let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

    let number_cell = cell(columns.number);
    let number: u32 = number_cell.parse().map_err(|_| CorpusError::Row {
        line,
        detail: format!("NUMBER cell {:?} is not an integer", number_cell),
    })?;

    Ok(KuralRecord {
        number,
        tamil_verse: cell(columns.tamil_verse).to_string(),
        english_verse: cell(columns.english_verse).to_string(),
        // Explanation columns are nullable in the source data: blank -> "".
        english_explanation: cell(columns.english_explanation).to_string(),
        tamil_explanation: cell(columns.tamil_explanation).to_string(),
    })
}
