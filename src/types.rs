// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the retrieval engine.
//!
//! These types define how couplet records, the corpus, and the error surface
//! fit together. Everything here is immutable after construction - the engine
//! is built once at startup and only ever read afterwards.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Corpus**: the `number` values of its records form exactly `1..=len()`.
//!   Checked at construction; keyed lookup relies on it to stay total.
//!
//! - **Corpus**: row position need not equal `number - 1`. Lookups by number
//!   go through `row_of`, never through positional indexing. The two views
//!   (keyed map, ordered rows) are kept explicit on purpose.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// CORPUS RECORD
// =============================================================================

/// One Thirukkural couplet: a unique number plus four text fields.
///
/// Explanation fields may be empty strings (the source CSV has blank cells),
/// but they are never absent - callers can format any record without
/// null-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KuralRecord {
    /// Couplet number, unique within the corpus, `1..=corpus_len`.
    pub number: u32,
    /// The verse in Tamil script.
    pub tamil_verse: String,
    /// The verse translated into English.
    pub english_verse: String,
    /// Prose explanation in English (may be empty).
    pub english_explanation: String,
    /// Prose explanation in Tamil (may be empty).
    pub tamil_explanation: String,
}

// =============================================================================
// CORPUS
// =============================================================================

/// The fixed, ordered collection of couplet records.
///
/// Holds two views of the same data: the ordered rows (aligned with the
/// index's row order for similarity lookups) and a `number -> row` map for
/// exact numeric lookups. Neither view assumes the other - a corpus whose
/// rows arrive shuffled relative to their numbers still resolves correctly.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<KuralRecord>,
    by_number: HashMap<u32, usize>,
}

impl Corpus {
    /// Build a corpus from records, validating the numbering invariant.
    ///
    /// The record numbers must form exactly `1..=records.len()` in any order.
    /// Duplicates and gaps are rejected so that every in-range numeric query
    /// is guaranteed to resolve.
    pub fn from_records(records: Vec<KuralRecord>) -> Result<Self, CorpusError> {
        let mut by_number = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if record.number == 0 || record.number as usize > records.len() {
                return Err(CorpusError::Numbering {
                    detail: format!(
                        "couplet number {} outside 1..={}",
                        record.number,
                        records.len()
                    ),
                });
            }
            if by_number.insert(record.number, row).is_some() {
                return Err(CorpusError::Numbering {
                    detail: format!("duplicate couplet number {}", record.number),
                });
            }
        }
        // len() distinct values, all within 1..=len(): the set is contiguous.
        Ok(Corpus { records, by_number })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the corpus holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The ordered rows, aligned with the index's row order.
    pub fn records(&self) -> &[KuralRecord] {
        &self.records
    }

    /// Row position of the record with the given couplet number.
    pub fn row_of(&self, number: u32) -> Option<usize> {
        self.by_number.get(&number).copied()
    }

    /// The record with the given couplet number (exact match, not positional).
    pub fn by_number(&self, number: u32) -> Option<&KuralRecord> {
        self.row_of(number).map(|row| &self.records[row])
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Corpus loading failures. All of these are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The CSV file could not be opened or read.
    Csv { path: String, detail: String },
    /// A required column is missing from the header row.
    MissingColumn { column: String },
    /// A data row could not be decoded (bad number cell, short row, ...).
    Row { line: usize, detail: String },
    /// The couplet numbers are not a permutation of `1..=len`.
    Numbering { detail: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Csv { path, detail } => {
                write!(f, "failed to read corpus {}: {}", path, detail)
            }
            CorpusError::MissingColumn { column } => {
                write!(f, "corpus is missing required column {}", column)
            }
            CorpusError::Row { line, detail } => {
                write!(f, "corpus row at line {}: {}", line, detail)
            }
            CorpusError::Numbering { detail } => {
                write!(f, "corpus numbering: {}", detail)
            }
        }
    }
}

impl std::error::Error for CorpusError {}

/// Index construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// `build` was handed zero documents. Cannot happen after a valid corpus
    /// load, but the constructor refuses to produce an unsearchable index.
    EmptyCorpus,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::EmptyCorpus => write!(f, "cannot build an index from zero documents"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Startup umbrella: anything that prevents the engine from being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Corpus(CorpusError),
    Index(IndexError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Corpus(e) => write!(f, "{}", e),
            EngineError::Index(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Corpus(e) => Some(e),
            EngineError::Index(e) => Some(e),
        }
    }
}

impl From<CorpusError> for EngineError {
    fn from(e: CorpusError) -> Self {
        EngineError::Corpus(e)
    }
}

impl From<IndexError> for EngineError {
    fn from(e: IndexError) -> Self {
        EngineError::Index(e)
    }
}

/// Per-query failures. The only recoverable error in the crate: the request
/// completes normally, the caller renders the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Numeric query outside `[1, corpus_len]`.
    OutOfRange { number: u64, corpus_len: usize },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::OutOfRange { number, corpus_len } => {
                write!(
                    f,
                    "couplet number {} is out of range (valid: 1 to {})",
                    number, corpus_len
                )
            }
        }
    }
}

impl std::error::Error for LookupError {}
