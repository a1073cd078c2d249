//! Derivational relationships between word-forms.

use serde::{Deserialize, Serialize};

use super::PartOfSpeech;

/// Traversal direction over derivation edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow DERIVED_FROM edges (towards the root).
    Parents,
    /// Follow DERIVES_TO edges (towards derived forms).
    Children,
    Both,
}

/// Which way a derivation points relative to the queried word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DerivationRelation {
    /// The related word is derived from the queried word.
    DerivesTo,
    /// The queried word is derived from the related word.
    DerivedFrom,
}

/// Affix annotation on a derivation edge (`-ation`, `re-`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Affix {
    pub affix: String,
    /// `prefix` or `suffix` as reported by the source data.
    pub affix_type: String,
}

impl Affix {
    pub fn new(affix: impl Into<String>, affix_type: impl Into<String>) -> Self {
        Self { affix: affix.into(), affix_type: affix_type.into() }
    }
}

/// One derivationally related word, as reported by `get_derivations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub form: String,
    pub pos: PartOfSpeech,
    pub relation: DerivationRelation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affix: Option<Affix>,
}
