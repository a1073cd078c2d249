//! Part-of-speech tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse part of speech attached to every morphology node.
///
/// MorphyNet uses short tags (`V`, `N`, `ADJ`, ...). Anything that is not a
/// verb, noun or adjective collapses into [`PartOfSpeech::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
    #[default]
    Other,
}

impl PartOfSpeech {
    /// Parse a MorphyNet / UniMorph POS tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "V" | "VERB" => PartOfSpeech::Verb,
            "N" | "NOUN" => PartOfSpeech::Noun,
            "ADJ" | "A" | "J" | "ADJECTIVE" => PartOfSpeech::Adjective,
            _ => PartOfSpeech::Other,
        }
    }

    /// Short tag as it appears in the source data.
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Other => "X",
        }
    }

    /// Threshold bucket used by the productivity policy.
    pub fn bucket(self) -> PosBucket {
        match self {
            PartOfSpeech::Verb => PosBucket::Verb,
            PartOfSpeech::Noun | PartOfSpeech::Adjective | PartOfSpeech::Other => PosBucket::Other,
        }
    }

    /// Score bonus applied to root candidates. Lower scores win.
    pub fn root_bonus(self) -> i32 {
        match self {
            PartOfSpeech::Verb => -10,
            PartOfSpeech::Noun => -5,
            PartOfSpeech::Adjective | PartOfSpeech::Other => 0,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Productivity threshold bucket: verbs are calibrated separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosBucket {
    Verb,
    Other,
}
