//! Shared test utilities and fixtures.

#![allow(dead_code)]

use kural::{Corpus, Engine, KuralRecord};

// Re-export canonical test fixtures from kural::testing
pub use kural::testing::{make_record, sample_corpus, sample_engine, sample_records};

/// The corpus CSV header, in canonical column order.
pub const CSV_HEADER: &str =
    "NUMBER,TAMIL_VERSE,ENGLISH_VERSE,ENGLISH_EXPLANATION,TAMIL_EXPLANATION";

/// Render records as CSV text, quoting every cell.
pub fn to_csv(records: &[KuralRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},\"{}\",\"{}\",\"{}\",\"{}\"\n",
            r.number, r.tamil_verse, r.english_verse, r.english_explanation, r.tamil_explanation
        ));
    }
    out
}

/// A synthetic corpus of `n` records with distinctive per-record terms.
///
/// Record `k` talks about "topic{k}" in English and carries a unique Tamil
/// marker word, so both query paths have an unambiguous best match.
pub fn synthetic_records(n: usize) -> Vec<KuralRecord> {
    (1..=n as u32)
        .map(|k| KuralRecord {
            number: k,
            tamil_verse: format!("குறள் வரி எண்வகை{}", k),
            english_verse: format!("Verse number {} of the collection", k),
            english_explanation: format!(
                "This couplet speaks of topic{} and the conduct it demands",
                k
            ),
            tamil_explanation: format!("விளக்கம் {}", k),
        })
        .collect()
}

/// A ready engine over `n` synthetic records.
pub fn synthetic_engine(n: usize) -> Engine {
    Engine::new(Corpus::from_records(synthetic_records(n)).unwrap()).unwrap()
}

/// Assert that an engine's index satisfies the row-norm contract.
pub fn assert_rows_normalized(engine: &Engine) {
    let index = engine.index();
    for row in 0..index.doc_count() {
        let norm = index.row_norm(row);
        assert!(
            norm == 0.0 || (norm - 1.0).abs() < 1e-9,
            "row {} has norm {}",
            row,
            norm
        );
    }
}
