//! JSON directory data source.
//!
//! Reads the artifacts produced by the preprocessing pipeline:
//!
//! ```text
//! <data_dir>/<code>_derivations.json   {word: {pos, derives_to: {...}, derived_from: {...}}}
//! <data_dir>/<code>_inflections.json   {lemma: {pos, forms: {form: [{pos, features}]}}}
//! <data_dir>/etymology.json            [{term, lang, reltype, related_term, related_lang}]
//! ```
//!
//! The files are treated as opaque key/value dumps; nothing here writes them.
//! Object order is significant: parent lists and the lemma that owns an
//! ambiguous form follow the order of the file (`serde_json` is built with
//! `preserve_order`).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::model::*;
use crate::{Error, Result};
use super::{
    DataConfig, DataSource, DerivationRecord, EtymologyGraph, EtymologyRecord, InflectionRecord,
    InflectionTable, MorphologyGraph,
};

const ETYMOLOGY_FILE: &str = "etymology.json";

// ============================================================================
// Raw file shapes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct RawDerivationEntry {
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    derives_to: Map<String, Value>,
    #[serde(default)]
    derived_from: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLink {
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    affix: Option<String>,
    #[serde(default)]
    affix_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawInflectionEntry {
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    forms: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawReading {
    #[serde(default)]
    pos: Option<String>,
    #[serde(default)]
    features: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEtymologyRecord {
    term: String,
    lang: String,
    reltype: String,
    related_term: String,
    related_lang: String,
}

/// Deserialize the values of a JSON object, keeping its key order.
fn ordered<T: DeserializeOwned>(object: &Map<String, Value>) -> Result<Vec<(&str, T)>> {
    object
        .iter()
        .map(|(key, value)| Ok((key.as_str(), T::deserialize(value)?)))
        .collect()
}

fn pos_of(tag: &Option<String>) -> PartOfSpeech {
    tag.as_deref().map_or(PartOfSpeech::Other, PartOfSpeech::from_tag)
}

fn link_record(
    source: &str,
    source_pos: PartOfSpeech,
    target: &str,
    target_pos: PartOfSpeech,
    link: &RawLink,
) -> DerivationRecord {
    let record = DerivationRecord::new(source, source_pos, target, target_pos);
    match &link.affix {
        Some(affix) if !affix.is_empty() => {
            record.with_affix(affix.as_str(), link.affix_type.as_deref().unwrap_or_default())
        }
        _ => record,
    }
}

// ============================================================================
// JsonSource
// ============================================================================

/// Loads stores from a directory of preprocessed JSON files.
#[derive(Debug, Clone)]
pub struct JsonSource {
    config: DataConfig,
}

impl JsonSource {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(DataConfig::new(data_dir))
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    pub fn derivations_path(&self, language: Language) -> PathBuf {
        self.config.data_dir.join(format!("{}_derivations.json", language.code()))
    }

    pub fn inflections_path(&self, language: Language) -> PathBuf {
        self.config.data_dir.join(format!("{}_inflections.json", language.code()))
    }

    pub fn etymology_path(&self) -> PathBuf {
        self.config.data_dir.join(ETYMOLOGY_FILE)
    }

    /// Read a JSON file. A missing file is reported as an unsupported language.
    fn read<T: DeserializeOwned>(&self, path: &Path, language: Language) -> Result<T> {
        if !path.exists() {
            debug!(path = %path.display(), "data file missing");
            return Err(Error::language_not_supported(language.code()));
        }
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for JsonSource {
    fn default() -> Self {
        Self::new(DataConfig::default())
    }
}

impl DataSource for JsonSource {
    fn load_morphology(&self, language: Language) -> Result<MorphologyGraph> {
        let path = self.derivations_path(language);
        let raw: Map<String, Value> = self.read(&path, language)?;
        let entries: Vec<(&str, RawDerivationEntry)> = ordered(&raw)?;
        info!(language = %language, path = %path.display(), words = entries.len(), "loading derivations");

        let mut builder = MorphologyGraph::builder(language);
        // a word's own tag takes precedence over the tags its neighbours give it
        for (word, entry) in &entries {
            builder.add_word(word, pos_of(&entry.pos));
        }
        // derived_from first, so each parent list keeps the order of the file
        for (word, entry) in &entries {
            let pos = pos_of(&entry.pos);
            for (source, link) in ordered::<RawLink>(&entry.derived_from)? {
                builder.add(link_record(source, pos_of(&link.pos), word, pos, &link));
            }
        }
        // normally mirrors derived_from; merged so one-sided data still links up
        for (word, entry) in &entries {
            let pos = pos_of(&entry.pos);
            for (target, link) in ordered::<RawLink>(&entry.derives_to)? {
                builder.add(link_record(word, pos, target, pos_of(&link.pos), &link));
            }
        }
        Ok(builder.build())
    }

    fn load_inflections(&self, language: Language) -> Result<InflectionTable> {
        let path = self.inflections_path(language);
        let raw: Map<String, Value> = self.read(&path, language)?;
        let entries: Vec<(&str, RawInflectionEntry)> = ordered(&raw)?;
        info!(language = %language, path = %path.display(), lemmas = entries.len(), "loading inflections");

        let mut builder = InflectionTable::builder(language);
        for (lemma, entry) in &entries {
            builder.lemma(lemma, pos_of(&entry.pos));
            for (form, readings) in ordered::<Vec<RawReading>>(&entry.forms)? {
                for reading in readings {
                    builder.add(InflectionRecord::new(
                        *lemma,
                        form,
                        pos_of(&reading.pos),
                        reading.features.unwrap_or_default(),
                    ));
                }
            }
        }
        Ok(builder.build())
    }

    fn etymology_available(&self) -> bool {
        self.config.load_etymology && self.etymology_path().exists()
    }

    fn load_etymology(&self) -> Result<EtymologyGraph> {
        if !self.etymology_available() {
            return Err(Error::etymology_unavailable());
        }
        let path = self.etymology_path();
        let reader = BufReader::new(File::open(&path)?);
        let raw: Vec<RawEtymologyRecord> = serde_json::from_reader(reader)?;
        info!(path = %path.display(), records = raw.len(), "loading etymology");

        let mut builder = EtymologyGraph::builder();
        let mut skipped = 0usize;
        for record in raw {
            match EdgeKind::from_reltype(&record.reltype) {
                Some(kind) => {
                    builder.add(EtymologyRecord::new(
                        record.lang,
                        record.term,
                        kind,
                        record.related_lang,
                        record.related_term,
                    ));
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped, "etymology records with unmodelled relation types");
        }
        Ok(builder.build())
    }
}
