// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF index construction and nearest-match search.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **ROW_NORMALIZED**: every non-empty row has L2 norm 1, so the dot
//!    product of two rows IS their cosine similarity. Empty documents keep
//!    an empty row (norm 0).
//! 2. **ROW_SORTED**: the `(term, weight)` entries of each row are sorted by
//!    term id - the sparse dot product is a linear merge and depends on it.
//! 3. **ALIGNED**: `idf.len() == vocabulary.len()`, and `rows` is in the same
//!    order as the documents handed to `build`.
//!
//! The weighting scheme follows the classic smoothed formulation:
//! `idf = ln((1 + n_docs) / (1 + doc_freq)) + 1`, term frequency is the raw
//! in-document count, rows are L2-normalized after weighting. The smoothing
//! keeps terms that appear in every document at a positive weight instead of
//! zeroing them out.
//!
//! Vocabulary terms are word n-grams: every contiguous run of 1 to 3 tokens
//! observed anywhere in the collection. Tokens shorter than two characters
//! are dropped before n-gram extraction.

use crate::types::IndexError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Tokens shorter than this many characters never enter the vocabulary.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Longest word n-gram admitted to the vocabulary.
pub const MAX_NGRAM_WORDS: usize = 3;

/// A sparse weight vector: `(term id, weight)` pairs sorted by term id.
type SparseRow = Vec<(u32, f64)>;

/// The term-weight index: one L2-normalized sparse row per document.
///
/// Immutable after `build`. Searching is a linear scan over all rows - at
/// corpus scale (~1,330 documents) the scan IS the whole cost of a query and
/// nothing fancier pays for itself.
#[derive(Debug, Clone)]
pub struct TfidfIndex {
    /// Term -> column id. Ids are assigned in lexicographic term order.
    vocabulary: HashMap<String, u32>,
    /// Smoothed inverse document frequency per column.
    idf: Vec<f64>,
    /// One sparse weight row per document, aligned with build order.
    rows: Vec<SparseRow>,
}

/// Split into indexable tokens: whitespace-separated, at least
/// [`MIN_TOKEN_CHARS`] characters long.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .collect()
}

/// Count every 1..=3-gram in a document.
fn term_counts(text: &str) -> HashMap<String, u32> {
    let tokens = tokenize(text);
    let mut counts = HashMap::new();
    for n in 1..=MAX_NGRAM_WORDS {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}

/// Scale counts by IDF, sort by term id, L2-normalize.
fn weighted_row(counts: &HashMap<String, u32>, vocabulary: &HashMap<String, u32>, idf: &[f64]) -> SparseRow {
    let mut row: SparseRow = counts
        .iter()
        .filter_map(|(term, count)| {
            vocabulary
                .get(term.as_str())
                .map(|&id| (id, f64::from(*count) * idf[id as usize]))
        })
        .collect();
    // INVARIANT: ROW_SORTED
    row.sort_unstable_by_key(|entry| entry.0);
    l2_normalize(&mut row);
    row
}

/// Normalize in place to unit L2 norm; all-zero rows are left untouched.
fn l2_normalize(row: &mut SparseRow) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for entry in row.iter_mut() {
            entry.1 /= norm;
        }
    }
}

/// Dot product of two sorted sparse vectors (linear merge).
fn sparse_dot(a: &[(u32, f64)], b: &[(u32, f64)]) -> f64 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

impl TfidfIndex {
    /// Build the index over an ordered document collection.
    ///
    /// Row `i` of the result corresponds to `documents[i]`. Fails only on an
    /// empty collection; empty *documents* are fine and produce zero rows.
    pub fn build(documents: &[String]) -> Result<Self, IndexError> {
        let per_doc: Vec<HashMap<String, u32>> =
            documents.iter().map(|doc| term_counts(doc)).collect();
        Self::assemble(documents.len(), per_doc)
    }

    /// Parallel build: per-document term counting fans out over rayon.
    ///
    /// Bit-identical to [`TfidfIndex::build`] - the reduce phase (vocabulary
    /// assignment, document frequencies) stays sequential and deterministic.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(documents: &[String]) -> Result<Self, IndexError> {
        // MAP PHASE: one counting task per document
        let per_doc: Vec<HashMap<String, u32>> =
            documents.par_iter().map(|doc| term_counts(doc)).collect();
        Self::assemble(documents.len(), per_doc)
    }

    /// Sequential fallback so callers can use one name regardless of features.
    #[cfg(not(feature = "parallel"))]
    pub fn build_parallel(documents: &[String]) -> Result<Self, IndexError> {
        Self::build(documents)
    }

    /// REDUCE PHASE: merge per-document counts into vocabulary, IDF and rows.
    fn assemble(
        doc_count: usize,
        per_doc: Vec<HashMap<String, u32>>,
    ) -> Result<Self, IndexError> {
        if doc_count == 0 {
            return Err(IndexError::EmptyCorpus);
        }

        // Document frequencies, accumulated into a BTreeMap so that term ids
        // come out in lexicographic order and rebuilds are reproducible.
        let mut doc_freq: BTreeMap<&str, u32> = BTreeMap::new();
        for counts in &per_doc {
            for term in counts.keys() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = doc_count as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (term, df) in &doc_freq {
            vocabulary.insert((*term).to_string(), idf.len() as u32);
            // Smoothed IDF: a term in every document keeps weight 1, not 0.
            idf.push(((1.0 + n_docs) / (1.0 + f64::from(*df))).ln() + 1.0);
        }

        #[cfg(feature = "parallel")]
        let rows: Vec<SparseRow> = per_doc
            .par_iter()
            .map(|counts| weighted_row(counts, &vocabulary, &idf))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rows: Vec<SparseRow> = per_doc
            .iter()
            .map(|counts| weighted_row(counts, &vocabulary, &idf))
            .collect();

        Ok(TfidfIndex {
            vocabulary,
            idf,
            rows,
        })
    }

    /// Project a query into the index's vector space.
    ///
    /// Same tokenization, same vocabulary, same IDF as at build time. Terms
    /// unseen at build time contribute nothing; a query with no recognized
    /// terms comes back as the empty vector.
    pub fn query_vector(&self, text: &str) -> SparseRow {
        let counts = term_counts(text);
        weighted_row(&counts, &self.vocabulary, &self.idf)
    }

    /// Find the row most similar to `text` under cosine similarity.
    ///
    /// Total function: always returns a row index. Ties (including the
    /// all-zero query vector, which scores 0 against every row) resolve to
    /// the first row achieving the maximum.
    pub fn search(&self, text: &str) -> usize {
        let query = self.query_vector(text);
        let mut best_row = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let score = sparse_dot(&query, row);
            if score > best_score {
                best_score = score;
                best_row = row_idx;
            }
        }
        best_row
    }

    /// Number of indexed documents (rows).
    pub fn doc_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of vocabulary terms (columns).
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// How many documents normalized to nothing and carry a zero row.
    pub fn empty_row_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_empty()).count()
    }

    /// L2 norm of a row: 1 for every non-empty document, 0 for empty ones.
    pub fn row_norm(&self, row: usize) -> f64 {
        self.rows[row]
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// IDF of a term, if it is in the vocabulary.
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .get(term)
            .map(|&id| self.idf[id as usize])
    }
}

/// Check the structural invariants of an index (debug assertion).
#[cfg(any(debug_assertions, test))]
#[allow(dead_code)]
pub fn check_index_well_formed(index: &TfidfIndex) -> bool {
    if index.idf.len() != index.vocabulary.len() {
        return false;
    }

    for row in &index.rows {
        // ROW_SORTED, and every id within the vocabulary
        for i in 0..row.len() {
            if row[i].0 as usize >= index.idf.len() {
                return false;
            }
            if i > 0 && row[i - 1].0 >= row[i].0 {
                return false;
            }
        }
        // ROW_NORMALIZED
        let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if !row.is_empty() && (norm - 1.0).abs() > 1e-9 {
            return false;
        }
    }

    true
}
