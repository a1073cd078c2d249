//! Lemma ↔ surface-form table for one language.
//!
//! Indexed both ways: lemma → entry, and surface form → lemma(s), so callers
//! may enter with either the lemma or any attested inflected form.

use std::collections::BTreeSet;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use crate::model::*;
use super::normalize;

/// One inflected form of a lemma, as supplied by the data-loading collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionRecord {
    pub lemma: String,
    pub form: String,
    pub pos: PartOfSpeech,
    /// UniMorph feature string, e.g. `V|PRS;3;SG`.
    pub features: String,
}

impl InflectionRecord {
    pub fn new(
        lemma: impl Into<String>,
        form: impl Into<String>,
        pos: PartOfSpeech,
        features: impl Into<String>,
    ) -> Self {
        Self { lemma: lemma.into(), form: form.into(), pos, features: features.into() }
    }
}

/// Immutable inflection lookup table.
#[derive(Debug, Clone)]
pub struct InflectionTable {
    language: Language,
    entries: Vec<InflectionEntry>,
    by_lemma: HashMap<String, usize>,
    /// surface form → entry indices, in insertion order
    by_form: HashMap<String, SmallVec<[usize; 1]>>,
}

impl InflectionTable {
    pub fn builder(language: Language) -> InflectionTableBuilder {
        InflectionTableBuilder::new(language)
    }

    /// A table with no entries. Every lookup degrades to "unknown word".
    pub fn empty(language: Language) -> Self {
        InflectionTableBuilder::new(language).build()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, lemma: &str) -> Option<&InflectionEntry> {
        self.by_lemma.get(normalize(lemma).as_ref()).map(|&i| &self.entries[i])
    }

    fn entry_for(&self, word: &str) -> Option<&InflectionEntry> {
        let key = normalize(word);
        if let Some(&i) = self.by_lemma.get(key.as_ref()) {
            return Some(&self.entries[i]);
        }
        self.by_form
            .get(key.as_ref())
            .and_then(|ids| ids.first())
            .map(|&i| &self.entries[i])
    }

    /// The lemma of `word`, preferring `word` itself when it is a lemma.
    pub fn lemma_of(&self, word: &str) -> Option<&str> {
        self.entry_for(word).map(|e| e.lemma.as_str())
    }

    /// Every lemma that lists `word` as a surface form (`saw` → `see`, `saw`).
    pub fn lemmas_of(&self, word: &str) -> Vec<&str> {
        self.by_form
            .get(normalize(word).as_ref())
            .map(|ids| ids.iter().map(|&i| self.entries[i].lemma.as_str()).collect())
            .unwrap_or_default()
    }

    /// Canonical lemma, or the word itself if it is unknown.
    pub fn get_lemma(&self, word: &str) -> String {
        self.lemma_of(word).map_or_else(|| word.to_string(), str::to_string)
    }

    /// All surface forms of the word's lemma, lemma included. Empty if unknown.
    pub fn get_inflections(&self, word: &str) -> BTreeSet<String> {
        self.entry_for(word)
            .map(|e| e.surface_forms().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn get_pos(&self, word: &str) -> Option<PartOfSpeech> {
        self.entry_for(word).map(|e| e.pos)
    }

    /// Grammatical readings of this exact surface form under its lemma.
    pub fn analyses(&self, word: &str) -> &[FormAnalysis] {
        match self.entry_for(word) {
            Some(entry) => entry.analyses(normalize(word).as_ref()),
            None => &[],
        }
    }

    /// True when both words resolve to the same known lemma.
    pub fn are_inflections(&self, a: &str, b: &str) -> bool {
        match (self.lemma_of(a), self.lemma_of(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug)]
pub struct InflectionTableBuilder {
    language: Language,
    entries: Vec<InflectionEntry>,
    by_lemma: HashMap<String, usize>,
}

impl InflectionTableBuilder {
    pub fn new(language: Language) -> Self {
        Self { language, entries: Vec::new(), by_lemma: HashMap::new() }
    }

    /// Declare a lemma with its canonical POS. Returns `None` for blank input.
    pub fn lemma(&mut self, lemma: &str, pos: PartOfSpeech) -> Option<usize> {
        let key = normalize(lemma.trim());
        if key.is_empty() {
            return None;
        }
        if let Some(&i) = self.by_lemma.get(key.as_ref()) {
            return Some(i);
        }
        let i = self.entries.len();
        let key = key.into_owned();
        self.entries.push(InflectionEntry::new(key.clone(), pos));
        self.by_lemma.insert(key, i);
        Some(i)
    }

    pub fn add(&mut self, record: InflectionRecord) -> &mut Self {
        let form = normalize(record.form.trim()).into_owned();
        if form.is_empty() {
            return self;
        }
        let Some(i) = self.lemma(&record.lemma, record.pos) else {
            return self;
        };

        let reading = FormAnalysis::new(record.pos, record.features);
        let readings = self.entries[i].forms.entry(form).or_default();
        if !readings.contains(&reading) {
            readings.push(reading);
        }
        self
    }

    /// Shorthand for [`add`](Self::add).
    pub fn inflect(&mut self, lemma: &str, form: &str, pos: PartOfSpeech, features: &str) -> &mut Self {
        self.add(InflectionRecord::new(lemma, form, pos, features))
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = InflectionRecord>) -> &mut Self {
        for record in records {
            self.add(record);
        }
        self
    }

    pub fn build(self) -> InflectionTable {
        let mut entries = self.entries;
        let mut by_form: HashMap<String, SmallVec<[usize; 1]>> = HashMap::new();

        for (i, entry) in entries.iter_mut().enumerate() {
            // a lemma is always one of its own surface forms
            if !entry.forms.contains_key(&entry.lemma) {
                let reading = FormAnalysis::new(entry.pos, entry.pos.tag());
                entry.forms.insert(entry.lemma.clone(), SmallVec::from_elem(reading, 1));
            }
            for form in entry.forms.keys() {
                by_form.entry(form.clone()).or_default().push(i);
            }
        }

        let table = InflectionTable {
            language: self.language,
            entries,
            by_lemma: self.by_lemma,
            by_form,
        };
        info!(language = %table.language, lemmas = table.len(), "built inflection table");
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use PartOfSpeech::*;

    fn english() -> InflectionTable {
        let mut b = InflectionTable::builder(Language::English);
        b.inflect("run", "runs", Verb, "V|PRS;3;SG")
            .inflect("run", "running", Verb, "V|V.PTCP;PRS")
            .inflect("run", "ran", Verb, "V|PST")
            .inflect("see", "saw", Verb, "V|PST")
            .inflect("saw", "saws", Noun, "N|PL");
        b.build()
    }

    #[test]
    fn test_inflections_include_lemma() {
        let t = english();
        let expected: BTreeSet<String> =
            ["ran", "run", "running", "runs"].iter().map(|s| s.to_string()).collect();
        assert_eq!(t.get_inflections("run"), expected);
        assert_eq!(t.get_inflections("running"), expected);
        assert_eq!(t.get_inflections("RAN"), expected);
    }

    #[test]
    fn test_unknown_word() {
        let t = english();
        assert!(t.get_inflections("florp").is_empty());
        assert_eq!(t.get_lemma("Florp"), "Florp");
        assert_eq!(t.get_pos("florp"), None);
        assert!(t.analyses("florp").is_empty());
    }

    #[test]
    fn test_lemma_resolution() {
        let t = english();
        assert_eq!(t.get_lemma("running"), "run");
        assert_eq!(t.get_lemma("run"), "run");
        // "saw" is a lemma in its own right and wins over the inflected reading
        assert_eq!(t.get_lemma("saw"), "saw");
        assert_eq!(t.lemmas_of("saw"), vec!["see", "saw"]);
    }

    #[test]
    fn test_readings_and_pos() {
        let t = english();
        let readings = t.analyses("running");
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].features, "V|V.PTCP;PRS");
        assert_eq!(t.get_pos("ran"), Some(Verb));

        // the implicit lemma reading carries the POS tag
        assert_eq!(t.analyses("run")[0].features, "V");
    }

    #[test]
    fn test_are_inflections() {
        let t = english();
        assert!(t.are_inflections("running", "ran"));
        assert!(!t.are_inflections("running", "saws"));
        assert!(!t.are_inflections("florp", "florp"));
    }

    #[test]
    fn test_every_form_has_a_reading() {
        let t = english();
        for lemma in ["run", "see", "saw"] {
            let entry = t.entry(lemma).unwrap();
            assert!(entry.forms.contains_key(lemma));
            assert!(entry.forms.values().all(|r| !r.is_empty()));
        }
    }
}
