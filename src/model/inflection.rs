//! Inflectional paradigm entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PartOfSpeech;

/// One grammatical reading of a surface form, e.g. `V|V.PTCP;PRS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormAnalysis {
    pub pos: PartOfSpeech,
    /// Raw UniMorph feature string.
    pub features: String,
}

impl FormAnalysis {
    pub fn new(pos: PartOfSpeech, features: impl Into<String>) -> Self {
        Self { pos, features: features.into() }
    }

    /// Individual feature tags (`PRS`, `3`, `SG`, ...), POS prefix included.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.features.split(['|', ';']).map(str::trim).filter(|t| !t.is_empty())
    }
}

/// A lemma and every attested surface form with its readings.
///
/// Invariants: every form has at least one reading, and the lemma is a member
/// of its own form set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflectionEntry {
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub forms: BTreeMap<String, SmallVec<[FormAnalysis; 1]>>,
}

impl InflectionEntry {
    pub fn new(lemma: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self { lemma: lemma.into(), pos, forms: BTreeMap::new() }
    }

    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn analyses(&self, form: &str) -> &[FormAnalysis] {
        self.forms.get(form).map(|a| a.as_slice()).unwrap_or(&[])
    }
}
