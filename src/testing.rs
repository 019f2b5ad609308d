//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::engine::Engine;
use crate::types::{Corpus, KuralRecord};

/// Create a minimal record whose text fields are derived from a seed word.
pub fn make_record(number: u32, seed: &str) -> KuralRecord {
    KuralRecord {
        number,
        tamil_verse: format!("குறள் {}", seed),
        english_verse: format!("Verse {}", seed),
        english_explanation: format!("Explanation about {}", seed),
        tamil_explanation: format!("விளக்கம் {}", seed),
    }
}

/// A five-couplet corpus with distinctive bilingual content per record.
///
/// Each record's English explanation and Tamil verse carry terms that appear
/// nowhere else, so text queries have an unambiguous best match.
pub fn sample_records() -> Vec<KuralRecord> {
    vec![
        KuralRecord {
            number: 1,
            tamil_verse: "அகர முதல எழுத்தெல்லாம் ஆதி பகவன் முதற்றே உலகு".to_string(),
            english_verse: "A, as its first of letters, every speech maintains".to_string(),
            english_explanation:
                "As the letter A is the first of all letters, so the eternal God is first in the world"
                    .to_string(),
            tamil_explanation: "எழுத்துக்கள் எல்லாம் அகரத்தில் தொடங்குகின்றன".to_string(),
        },
        KuralRecord {
            number: 2,
            tamil_verse: "வான்நின்று உலகம் வழங்கி வருதலால் தான்அமிழ்தம் என்றுணரற் பாற்று".to_string(),
            english_verse: "The falling rain sustains the world; it is ambrosia".to_string(),
            english_explanation:
                "The rain keeps the wide world alive and deserves to be called ambrosia".to_string(),
            tamil_explanation: "மழையே உலகை வாழ்விக்கிறது".to_string(),
        },
        KuralRecord {
            number: 3,
            tamil_verse: "அறத்தினூஉங்கு ஆக்கமும் இல்லை அதனை மறத்தலின் ஊங்கில்லை கேடு".to_string(),
            english_verse: "No greater gain than virtue, no greater loss than forgetting it"
                .to_string(),
            english_explanation:
                "Virtue yields the greatest wealth; forgetting virtue brings the greatest ruin"
                    .to_string(),
            tamil_explanation: "அறம் செய்வதே ஆக்கம் தரும்".to_string(),
        },
        KuralRecord {
            number: 4,
            tamil_verse: "கண்ணுடையர் என்பவர் கற்றோர் முகத்திரண்டு புண்ணுடையர் கல்லா தவர்".to_string(),
            english_verse: "The learned alone have eyes; the unlearned bear open sores".to_string(),
            english_explanation:
                "Learning gives a man eyes; without learning his face carries two sores".to_string(),
            tamil_explanation: "கற்றவர்களே கண்ணுடையவர்கள்".to_string(),
        },
        KuralRecord {
            number: 5,
            tamil_verse: "அன்பிலார் எல்லாம் தமக்குரியர் அன்புடையார் என்பும் உரியர் பிறர்க்கு".to_string(),
            english_verse: "The loveless keep all for themselves; the loving give their very bones"
                .to_string(),
            english_explanation:
                "Those without love live for themselves alone; the loving belong to others to their bones"
                    .to_string(),
            tamil_explanation: "அன்பு உடையவர் பிறருக்காக வாழ்வர்".to_string(),
        },
    ]
}

/// The sample records as a validated corpus.
pub fn sample_corpus() -> Corpus {
    Corpus::from_records(sample_records()).expect("sample records satisfy the numbering invariant")
}

/// A ready-to-query engine over the sample corpus.
pub fn sample_engine() -> Engine {
    Engine::new(sample_corpus()).expect("sample corpus builds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_record() {
        let record = make_record(42, "rain");
        assert_eq!(record.number, 42);
        assert!(record.english_explanation.contains("rain"));
    }

    #[test]
    fn test_sample_corpus_shape() {
        let corpus = sample_corpus();
        assert_eq!(corpus.len(), 5);
        assert_eq!(corpus.by_number(5).unwrap().number, 5);
    }
}
