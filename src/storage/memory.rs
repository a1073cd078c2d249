//! In-memory data source.
//!
//! This is the reference implementation of `DataSource`. Records are added
//! in code; each `load_*` call builds a fresh store from them.
//!
//! Use this source for:
//! - Unit and integration tests with hand-made fixtures
//! - Embedding crosstem with data obtained elsewhere (a database, a network
//!   fetch done by the caller, ...)

use hashbrown::HashMap;

use crate::model::*;
use crate::{Error, Result};
use super::{
    DataSource, DerivationRecord, EtymologyGraph, EtymologyRecord, InflectionRecord,
    InflectionTable, MorphologyGraph,
};

/// Records held in memory until a store is requested.
///
/// A language is "backed" once at least one derivation record, or an explicit
/// [`declare`](Self::declare), has been registered for it.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    derivations: HashMap<Language, Vec<DerivationRecord>>,
    inflections: HashMap<Language, Vec<InflectionRecord>>,
    etymology: Option<Vec<EtymologyRecord>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a language as backed even if it has no derivations yet.
    pub fn declare(&mut self, language: Language) -> &mut Self {
        self.derivations.entry(language).or_default();
        self
    }

    pub fn add_derivation(&mut self, language: Language, record: DerivationRecord) -> &mut Self {
        self.derivations.entry(language).or_default().push(record);
        self
    }

    pub fn add_inflection(&mut self, language: Language, record: InflectionRecord) -> &mut Self {
        self.inflections.entry(language).or_default().push(record);
        self
    }

    /// Add an etymology record. The first call makes etymology available.
    pub fn add_etymology(&mut self, record: EtymologyRecord) -> &mut Self {
        self.etymology.get_or_insert_with(Vec::new).push(record);
        self
    }

    /// Make etymology available with no records.
    pub fn provision_etymology(&mut self) -> &mut Self {
        self.etymology.get_or_insert_with(Vec::new);
        self
    }

    pub fn with_derivations(
        mut self,
        language: Language,
        records: impl IntoIterator<Item = DerivationRecord>,
    ) -> Self {
        self.derivations.entry(language).or_default().extend(records);
        self
    }

    pub fn with_inflections(
        mut self,
        language: Language,
        records: impl IntoIterator<Item = InflectionRecord>,
    ) -> Self {
        self.inflections.entry(language).or_default().extend(records);
        self
    }

    pub fn with_etymology(mut self, records: impl IntoIterator<Item = EtymologyRecord>) -> Self {
        self.etymology.get_or_insert_with(Vec::new).extend(records);
        self
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<_> = self.derivations.keys().copied().collect();
        langs.sort();
        langs
    }

    fn backed(&self, language: Language) -> Result<&[DerivationRecord]> {
        self.derivations
            .get(&language)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::language_not_supported(language.code()))
    }
}

impl DataSource for MemorySource {
    fn load_morphology(&self, language: Language) -> Result<MorphologyGraph> {
        let records = self.backed(language)?;
        let mut builder = MorphologyGraph::builder(language);
        builder.extend(records.iter().cloned());
        Ok(builder.build())
    }

    /// Languages with derivations but no inflection records get an empty table.
    fn load_inflections(&self, language: Language) -> Result<InflectionTable> {
        self.backed(language)?;
        let mut builder = InflectionTable::builder(language);
        if let Some(records) = self.inflections.get(&language) {
            builder.extend(records.iter().cloned());
        }
        Ok(builder.build())
    }

    fn etymology_available(&self) -> bool {
        self.etymology.is_some()
    }

    fn load_etymology(&self) -> Result<EtymologyGraph> {
        let records = self.etymology.as_ref().ok_or_else(Error::etymology_unavailable)?;
        let mut builder = EtymologyGraph::builder();
        builder.extend(records.iter().cloned());
        Ok(builder.build())
    }
}

// ============================================================================
// Tests
// ============================================================================
