//! Bilingual TF-IDF retrieval for the 1,330 Thirukkural couplets.
//!
//! One query string in - a couplet number, or free text in English or Tamil -
//! one couplet record out. The engine is built once at startup from a
//! five-column CSV and is immutable (and freely shared across threads)
//! afterwards.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│ normalize.rs │────▶│  tfidf.rs   │
//! │ (CSV load,  │     │ (stopwords,  │     │ (n-grams,   │
//! │  Corpus)    │     │  variants)   │     │  cosine)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     engine.rs                        │
//! │   (Engine::resolve - numeric vs. text dispatch,      │
//! │    language detection, row -> record mapping)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use kural::Engine;
//!
//! let engine = Engine::from_csv_path("data/kural.csv")?;
//!
//! let record = engine.resolve("42")?;                  // by couplet number
//! let record = engine.resolve("rain gives life")?;     // English text
//! let record = engine.resolve("அறம் செய விரும்பு")?;    // Tamil text
//! ```

// Module declarations
pub mod corpus;
mod engine;
mod normalize;
pub mod testing;
mod tfidf;
mod types;

// Re-exports for public API
pub use corpus::{from_csv_path, from_reader, REQUIRED_COLUMNS};
pub use engine::{indexed_document, Engine};
pub use normalize::{detect_language, is_stop_word, is_tamil_char, normalize, QueryLanguage};
pub use tfidf::{TfidfIndex, MAX_NGRAM_WORDS, MIN_TOKEN_CHARS};
pub use types::{Corpus, CorpusError, EngineError, IndexError, KuralRecord, LookupError};

#[cfg(test)]
mod tests {
    //! Crate-level integration and property tests.
    //!
    //! Unit tests live in their modules; these cover the seams - the full
    //! resolve pipeline and the properties that hold across components.

    use super::*;
    use crate::testing::{sample_engine, sample_records};
    use proptest::prelude::*;

    #[test]
    fn every_number_resolves_to_its_own_record() {
        let engine = sample_engine();
        for k in 1..=engine.corpus().len() {
            let record = engine.resolve(&k.to_string()).unwrap();
            assert_eq!(record.number as usize, k);
        }
    }

    #[test]
    fn text_and_numeric_paths_agree() {
        let engine = sample_engine();
        let by_text = engine.resolve("rain ambrosia wide world").unwrap();
        let by_number = engine.resolve(&by_text.number.to_string()).unwrap();
        assert_eq!(by_text, by_number);
    }

    #[test]
    fn tamil_queries_never_touch_english_stopwords() {
        // "it" is an English stopword; inside a Tamil query it must survive
        // normalization because the Tamil variant applies.
        let query = "அறம் it";
        assert_eq!(detect_language(query), QueryLanguage::Tamil);
        assert!(normalize(query, QueryLanguage::Tamil).contains("it"));
    }

    #[test]
    fn sample_corpus_self_match_is_exact() {
        let engine = sample_engine();
        for (row, record) in engine.corpus().records().iter().enumerate() {
            let document = indexed_document(record);
            assert_eq!(engine.index().search(&document), row);
        }
    }

    fn corpus_text_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("([a-zA-Z0-9 ,.!']{0,40})").unwrap()
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in corpus_text_strategy()) {
            for lang in [QueryLanguage::English, QueryLanguage::Tamil] {
                let once = normalize(&text, lang);
                prop_assert_eq!(normalize(&once, lang), once);
            }
        }

        #[test]
        fn normalize_is_deterministic(text in corpus_text_strategy()) {
            let first = normalize(&text, QueryLanguage::English);
            prop_assert_eq!(normalize(&text, QueryLanguage::English), first);
        }

        #[test]
        fn normalize_output_is_single_spaced(text in corpus_text_strategy()) {
            let out = normalize(&text, QueryLanguage::English);
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn resolve_is_total_over_text_queries(text in corpus_text_strategy()) {
            // Whatever the query normalizes to, a record comes back unless
            // the trimmed input is a pure digit string out of range.
            let engine = sample_engine();
            let trimmed = text.trim();
            let numeric = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());
            if !numeric {
                prop_assert!(engine.resolve(&text).is_ok());
            }
        }
    }

    #[test]
    fn shuffled_corpus_keeps_keyed_lookup_straight() {
        let mut records = sample_records();
        records.swap(0, 4);
        records.swap(1, 3);
        let engine = Engine::new(Corpus::from_records(records).unwrap()).unwrap();

        // Position 0 now holds number 5; "1" must still find number 1.
        assert_eq!(engine.corpus().records()[0].number, 5);
        assert_eq!(engine.resolve("1").unwrap().number, 1);
        assert_eq!(engine.resolve("5").unwrap().number, 5);
    }
}
