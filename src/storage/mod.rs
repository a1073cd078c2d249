//! # Data Sources and Stores
//!
//! The stores in this module are built once from collaborator-supplied
//! records and are read-only afterwards. `DataSource` is the contract between
//! the core and whatever loads those records.
//!
//! ## Implementations
//!
//! | Source | Module | Description |
//! |--------|--------|-------------|
//! | `MemorySource` | `memory` | Records supplied in code, for tests and embedding |
//! | `JsonSource` | `json` | Preprocessed `*_derivations.json` / `*_inflections.json` / `etymology.json` |

pub mod morphology;
pub mod inflection;
pub mod etymology;
pub mod memory;
pub mod json;

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::Language;
use crate::Result;

pub use morphology::{DerivationRecord, MorphologyGraph, MorphologyGraphBuilder};
pub use inflection::{InflectionRecord, InflectionTable, InflectionTableBuilder};
pub use etymology::{EtymologyGraph, EtymologyGraphBuilder, EtymologyRecord};
pub use memory::MemorySource;
pub use json::JsonSource;

// ============================================================================
// Configuration
// ============================================================================

/// Where preprocessed data lives and whether to load etymology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    /// Etymology data is large and optional; skip it when false.
    pub load_etymology: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), load_etymology: true }
    }
}

impl DataConfig {
    pub const DATA_DIR_ENV: &'static str = "CROSSTEM_DATA_DIR";
    pub const LOAD_ETYMOLOGY_ENV: &'static str = "CROSSTEM_LOAD_ETYMOLOGY";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    pub fn without_etymology(mut self) -> Self {
        self.load_etymology = false;
        self
    }

    /// Defaults overridden by `CROSSTEM_DATA_DIR` and `CROSSTEM_LOAD_ETYMOLOGY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(Self::DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(flag) = std::env::var(Self::LOAD_ETYMOLOGY_ENV) {
            config.load_etymology = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        config
    }
}

// ============================================================================
// DataSource trait
// ============================================================================

/// The data-loading collaborator.
///
/// Each call returns a complete store or fails; there are no partial stores.
/// A language without backing data fails with
/// [`Error::LanguageNotSupported`](crate::Error::LanguageNotSupported).
pub trait DataSource: Send + Sync {
    /// Load the derivational graph for a language.
    fn load_morphology(&self, language: Language) -> Result<MorphologyGraph>;

    /// Load the inflection table for a language.
    fn load_inflections(&self, language: Language) -> Result<InflectionTable>;

    /// Whether etymology data has been provisioned.
    fn etymology_available(&self) -> bool;

    /// Load the shared etymology graph.
    ///
    /// Fails with [`Error::EtymologyDataUnavailable`](crate::Error::EtymologyDataUnavailable)
    /// when [`etymology_available`](Self::etymology_available) is false.
    fn load_etymology(&self) -> Result<EtymologyGraph>;
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn load_morphology(&self, language: Language) -> Result<MorphologyGraph> {
        (**self).load_morphology(language)
    }

    fn load_inflections(&self, language: Language) -> Result<InflectionTable> {
        (**self).load_inflections(language)
    }

    fn etymology_available(&self) -> bool {
        (**self).etymology_available()
    }

    fn load_etymology(&self) -> Result<EtymologyGraph> {
        (**self).load_etymology()
    }
}

/// Lowercase lookup key. Borrows when the word is already lowercase.
pub(crate) fn normalize(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
