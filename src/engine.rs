// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lookup dispatcher: one query string in, one couplet record out.
//!
//! An [`Engine`] owns the three immutable pieces built at startup - the
//! corpus, the normalized documents, and the TF-IDF index - and routes each
//! query through a fixed state machine:
//!
//! ```text
//! query ──trim──▶ all ASCII digits? ──yes──▶ range check ──▶ keyed lookup
//!                      │no
//!                      ▼
//!               detect language ──▶ normalize ──▶ index search ──▶ row -> record
//! ```
//!
//! The numeric path resolves by couplet `number`, never by row position.
//! The text path normalizes the query alone, in its own language - the index
//! documents mix two languages per row, but a query never does. That
//! asymmetry is part of the corpus convention and must not be "fixed" here.
//!
//! Everything is borrowed read-only after construction; an `Engine` is
//! `Send + Sync` and any number of threads may resolve queries against it
//! concurrently. Several independent engines can coexist in one process.

use crate::corpus;
use crate::normalize::{detect_language, normalize, QueryLanguage};
use crate::tfidf::TfidfIndex;
use crate::types::{Corpus, EngineError, KuralRecord, LookupError};
use std::path::Path;

/// The retrieval engine: corpus + cached normalized documents + index.
#[derive(Debug, Clone)]
pub struct Engine {
    corpus: Corpus,
    documents: Vec<String>,
    index: TfidfIndex,
}

/// The text the index sees for one record: the normalized English
/// explanation followed by the normalized Tamil verse, space-joined.
///
/// Mixing the explanation of one language with the verse of the other is a
/// fixed corpus convention, not a general bilingual merge - English queries
/// land on explanation terms, Tamil queries on verse terms, in the same row.
pub fn indexed_document(record: &KuralRecord) -> String {
    let english = normalize(&record.english_explanation, QueryLanguage::English);
    let tamil = normalize(&record.tamil_verse, QueryLanguage::Tamil);
    format!("{} {}", english, tamil)
}

impl Engine {
    /// Build an engine from an already-validated corpus.
    ///
    /// This is the startup phase: normalize every record, build the index.
    /// If it fails, nothing is served.
    pub fn new(corpus: Corpus) -> Result<Self, EngineError> {
        let documents: Vec<String> = corpus.records().iter().map(indexed_document).collect();
        let index = TfidfIndex::build_parallel(&documents)?;
        Ok(Engine {
            corpus,
            documents,
            index,
        })
    }

    /// Load the corpus CSV and build an engine in one step.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        Self::new(corpus::from_csv_path(path)?)
    }

    /// Resolve a query to exactly one record, or exactly one error.
    ///
    /// A trimmed all-digit query is a couplet number; anything else is text.
    /// `OutOfRange` is the only failure - text queries always resolve, even
    /// when no query term is in the vocabulary (the first-max row comes back,
    /// an arbitrary low-confidence match by design).
    pub fn resolve(&self, query: &str) -> Result<&KuralRecord, LookupError> {
        let trimmed = query.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            self.resolve_number(trimmed)
        } else {
            Ok(self.resolve_text(query))
        }
    }

    fn resolve_number(&self, digits: &str) -> Result<&KuralRecord, LookupError> {
        // Digit strings too long for u64 cannot possibly be in range.
        let number = digits.parse::<u64>().unwrap_or(u64::MAX);
        let corpus_len = self.corpus.len();
        let out_of_range = LookupError::OutOfRange { number, corpus_len };
        if number < 1 || number > corpus_len as u64 {
            return Err(out_of_range);
        }
        // Exact match on `number`, not positional: the corpus numbering
        // invariant makes this total for every in-range number.
        let row = self.corpus.row_of(number as u32).ok_or(out_of_range)?;
        Ok(&self.corpus.records()[row])
    }

    fn resolve_text(&self, query: &str) -> &KuralRecord {
        let lang = detect_language(query);
        let cleaned = normalize(query, lang);
        let row = self.index.search(&cleaned);
        &self.corpus.records()[row]
    }

    /// The corpus this engine serves.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The normalized documents, aligned with the index's rows.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// The underlying term-weight index.
    pub fn index(&self) -> &TfidfIndex {
        &self.index
    }
}
