//! Productivity thresholds for root candidates.
//!
//! A parent only qualifies as a root if it has at least N distinct derived
//! children. N is calibrated per language from the MorphyNet distributions,
//! with a separate value for verbs.

use serde::{Deserialize, Serialize};

use crate::model::{Language, PartOfSpeech, PosBucket};

/// Calibrated (verb, other) minimum productivity for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductivityPolicy {
    pub min_verb: usize,
    pub min_other: usize,
}

impl ProductivityPolicy {
    /// Thresholds for a supported language.
    pub fn for_language(language: Language) -> Self {
        let (min_verb, min_other) = match language {
            Language::English => (5, 9),
            Language::French => (4, 5),
            Language::German => (4, 3),
            Language::Italian => (4, 5),
            Language::Spanish => (3, 4),
            Language::Portuguese => (3, 4),
            Language::Russian => (3, 2),
            Language::Polish => (3, 3),
            Language::Czech => (3, 3),
            Language::SerboCroatian => (3, 3),
            Language::Hungarian => (3, 3),
            Language::Finnish => (3, 3),
            Language::Swedish => (3, 4),
            Language::Catalan => (3, 4),
            Language::Mongolian => (3, 3),
        };
        Self { min_verb, min_other }
    }

    /// Explicit thresholds, for calibration experiments and fixtures.
    pub fn custom(min_verb: usize, min_other: usize) -> Self {
        Self { min_verb, min_other }
    }

    pub fn threshold(&self, bucket: PosBucket) -> usize {
        match bucket {
            PosBucket::Verb => self.min_verb,
            PosBucket::Other => self.min_other,
        }
    }

    pub fn meets_threshold(&self, pos: PartOfSpeech, productivity: usize) -> bool {
        productivity >= self.threshold(pos.bucket())
    }
}
