//! End-to-end tests for the resolve pipeline: CSV in, record out.

mod common;

use common::{sample_engine, synthetic_engine, to_csv, CSV_HEADER};
use kural::{
    detect_language, from_reader, normalize, CorpusError, Engine, KuralRecord, LookupError,
    QueryLanguage,
};
use std::io::Write;

// ============================================================================
// NUMERIC PATH
// ============================================================================

#[test]
fn query_42_returns_couplet_42() {
    let engine = synthetic_engine(1330);
    let record = engine.resolve("42").unwrap();
    assert_eq!(record.number, 42);
}

#[test]
fn query_9999_is_out_of_range_on_the_full_corpus() {
    let engine = synthetic_engine(1330);
    let err = engine.resolve("9999").unwrap_err();
    assert_eq!(
        err,
        LookupError::OutOfRange {
            number: 9999,
            corpus_len: 1330
        }
    );
}

#[test]
fn range_boundaries_are_inclusive() {
    let engine = synthetic_engine(1330);
    assert_eq!(engine.resolve("1").unwrap().number, 1);
    assert_eq!(engine.resolve("1330").unwrap().number, 1330);
    assert!(engine.resolve("0").is_err());
    assert!(engine.resolve("1331").is_err());
}

#[test]
fn out_of_range_message_names_the_bounds() {
    let engine = synthetic_engine(1330);
    let message = engine.resolve("9999").unwrap_err().to_string();
    assert!(message.contains("9999"));
    assert!(message.contains("1330"));
}

#[test]
fn numeric_lookup_survives_a_shuffled_corpus_file() {
    // The CSV rows arrive in descending number order; lookups must still
    // resolve by NUMBER, not by row position.
    let mut records = common::synthetic_records(10);
    records.reverse();
    let corpus = from_reader(to_csv(&records).as_bytes(), "shuffled.csv").unwrap();
    let engine = Engine::new(corpus).unwrap();

    for k in 1..=10u32 {
        assert_eq!(engine.resolve(&k.to_string()).unwrap().number, k);
    }
}

// ============================================================================
// TEXT PATH
// ============================================================================

#[test]
fn english_text_query_end_to_end() {
    let engine = synthetic_engine(200);
    let record = engine.resolve("the couplet about topic157").unwrap();
    assert_eq!(record.number, 157);
}

#[test]
fn tamil_text_query_end_to_end() {
    let engine = synthetic_engine(200);
    // A single Tamil character routes the whole query through the Tamil
    // variant; the unique verse marker pins the match.
    let query = "எண்வகை73";
    assert_eq!(detect_language(query), QueryLanguage::Tamil);
    assert_eq!(engine.resolve(query).unwrap().number, 73);
}

#[test]
fn all_tamil_query_is_never_english_filtered() {
    // Tamil queries are filtered by the Tamil list only; these verse words
    // survive normalization and pin the match.
    let engine = sample_engine();
    let record = engine.resolve("வான்நின்று உலகம்").unwrap();
    assert_eq!(record.number, 2);
}

#[test]
fn stopword_only_query_returns_first_row_record() {
    let engine = sample_engine();
    assert_eq!(normalize("the a an", QueryLanguage::English), "");
    let record = engine.resolve("the a an").unwrap();
    assert_eq!(record.number, engine.corpus().records()[0].number);
}

#[test]
fn gibberish_query_still_resolves() {
    let engine = sample_engine();
    assert!(engine.resolve("zzyzx qwfp vxkj").is_ok());
}

#[test]
fn mixed_digit_text_takes_the_text_path() {
    let engine = synthetic_engine(50);
    // Not all-digits after trimming, so this is a text query even though it
    // contains a number.
    assert!(engine.resolve("couplet 42 please").is_ok());
}

// ============================================================================
// CSV LOADING
// ============================================================================

#[test]
fn engine_builds_from_a_csv_file_on_disk() {
    let records = common::synthetic_records(25);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(to_csv(&records).as_bytes()).unwrap();

    let engine = Engine::from_csv_path(file.path()).unwrap();
    assert_eq!(engine.corpus().len(), 25);
    assert_eq!(engine.resolve("7").unwrap().number, 7);
}

#[test]
fn missing_required_column_aborts_startup() {
    let csv = "NUMBER,TAMIL_VERSE,ENGLISH_VERSE,TAMIL_EXPLANATION\n1,a,b,c";
    let err = from_reader(csv.as_bytes(), "broken.csv").unwrap_err();
    assert_eq!(
        err,
        CorpusError::MissingColumn {
            column: "ENGLISH_EXPLANATION".to_string()
        }
    );
}

#[test]
fn blank_explanations_load_as_empty_strings() {
    let csv = format!("{CSV_HEADER}\n1,அகரம்,First verse,,");
    let corpus = from_reader(csv.as_bytes(), "blanks.csv").unwrap();
    let record = corpus.by_number(1).unwrap();
    assert_eq!(record.english_explanation, "");
    assert_eq!(record.tamil_explanation, "");

    // A record with empty explanations still indexes (to an empty or
    // verse-only document) and never breaks engine construction.
    let engine = Engine::new(corpus).unwrap();
    assert!(engine.resolve("1").is_ok());
}

#[test]
fn empty_csv_fails_before_serving() {
    // Header only, zero records: the numbering invariant holds trivially but
    // the index build must refuse an empty collection.
    let corpus = from_reader(CSV_HEADER.as_bytes(), "empty.csv").unwrap();
    assert!(Engine::new(corpus).is_err());
}

// ============================================================================
// RECORD SERIALIZATION (JSON output contract)
// ============================================================================

#[test]
fn record_round_trips_through_json() {
    let record = common::sample_records().remove(1);
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"tamilVerse\""));
    let back: KuralRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
