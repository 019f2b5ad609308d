//! Language-aware text normalization.
//!
//! Both index documents and incoming queries pass through [`normalize`]
//! before any scoring happens, so the transformation has to be deterministic
//! and idempotent: same input and variant, same output, every time. No
//! external state is consulted - the stopword tables are compiled in.
//!
//! The pipeline per variant:
//!
//! 1. English only: NFD-decompose and drop combining diacritical marks
//!    ("café" → "cafe"). The Tamil block is never touched by this step.
//! 2. Replace every character that is not a word character (alphanumeric,
//!    `_`, or anything in the Tamil block) with a space.
//! 3. Lowercase (a no-op for Tamil, which has no case).
//! 4. Split on whitespace and drop the variant's stopwords.
//! 5. Rejoin the survivors with single spaces.
//!
//! Empty or all-stopword input normalizes to `""`. Callers downstream must
//! tolerate the all-zero query vector that falls out of that.

use std::collections::HashSet;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Which normalization variant to apply.
///
/// Queries are single-language; the dispatcher picks the variant by scanning
/// for Tamil-block characters. Index documents use both variants, one per
/// field, before being joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryLanguage {
    Tamil,
    English,
}

/// Is this character in the Tamil Unicode block (U+0B80 to U+0BFF)?
///
/// This is the whole language-detection story: one fixed, documented range.
/// Grantha digits, Latin text quoting a Tamil word, etc. all hinge on this
/// single predicate, so it stays a named function rather than an inline scan.
#[inline]
pub fn is_tamil_char(c: char) -> bool {
    matches!(c, '\u{0B80}'..='\u{0BFF}')
}

/// Detect the query language: any Tamil-block character makes it Tamil,
/// otherwise it is treated as English.
pub fn detect_language(text: &str) -> QueryLanguage {
    if text.chars().any(is_tamil_char) {
        QueryLanguage::Tamil
    } else {
        QueryLanguage::English
    }
}

/// General-purpose English stopword list, embedded from data/stopwords_en.txt.
static ENGLISH_STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| parse_stop_words(include_str!("../data/stopwords_en.txt")));

/// Curated Tamil stopword list, embedded from data/stopwords_ta.txt.
static TAMIL_STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| parse_stop_words(include_str!("../data/stopwords_ta.txt")));

/// Parse a stopword file: one token per line, `#` starts a comment line.
fn parse_stop_words(data: &'static str) -> HashSet<&'static str> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Check a (lowercased) token against the variant's stopword set.
///
/// The sets never cross-apply: an English query is only ever filtered by the
/// English list, a Tamil query only by the Tamil list.
#[inline]
pub fn is_stop_word(token: &str, lang: QueryLanguage) -> bool {
    match lang {
        QueryLanguage::Tamil => TAMIL_STOP_WORDS.contains(token),
        QueryLanguage::English => ENGLISH_STOP_WORDS.contains(token),
    }
}

/// Word characters survive normalization; everything else becomes a space.
///
/// The Tamil block is included wholesale: the virama (pulli, U+0BCD) is not
/// `Alphabetic` in the Unicode tables, but it is part of the letter it marks.
/// Without this, every word-final `க்`-style consonant would split its word.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_tamil_char(c)
}

/// Check if a character is a combining mark (diacritic).
///
/// Covers the combining ranges that occur in Latin-script text. The Tamil
/// block is deliberately absent: Tamil vowel signs are part of the word and
/// must not be stripped.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Normalize a string for indexing or querying under the given variant.
///
/// Pure and idempotent: `normalize(&normalize(x, v), v) == normalize(x, v)`.
pub fn normalize(text: &str, lang: QueryLanguage) -> String {
    let cleaned: String = match lang {
        QueryLanguage::English => text.nfd().filter(|c| !is_combining_mark(*c)).collect(),
        QueryLanguage::Tamil => text.to_string(),
    };

    let spaced: String = cleaned
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    spaced
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !is_stop_word(token, lang))
        .collect::<Vec<_>>()
        .join(" ")
}
