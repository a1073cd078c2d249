//! # Registry
//!
//! Lazily builds one [`Analyzer`] per language from a shared [`DataSource`]
//! and caches it. The etymology graph is loaded at most once and shared by
//! every analyzer.
//!
//! The cache is guarded by a `parking_lot::RwLock`; the stores themselves
//! are immutable and need no locking. Store construction runs outside the
//! cache lock, so two threads may build the same language concurrently; the
//! first instance inserted is the one every caller gets.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use crate::analyzer::Analyzer;
use crate::etymology::EtymologyLinker;
use crate::model::Language;
use crate::storage::{DataConfig, DataSource, JsonSource};
use crate::Result;

pub struct Registry {
    source: Box<dyn DataSource>,
    analyzers: RwLock<HashMap<Language, Arc<Analyzer>>>,
    etymology: Mutex<Option<EtymologyLinker>>,
}

impl Registry {
    pub fn new<S: DataSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            analyzers: RwLock::new(HashMap::new()),
            etymology: Mutex::new(None),
        }
    }

    /// JSON data under `CROSSTEM_DATA_DIR` (default `./data`).
    pub fn from_env() -> Self {
        Self::new(JsonSource::new(DataConfig::from_env()))
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    /// The analyzer for `code`, built on first use.
    pub fn analyzer(&self, code: &str) -> Result<Arc<Analyzer>> {
        let language = Language::from_code(code)?;
        if let Some(analyzer) = self.analyzers.read().get(&language) {
            return Ok(Arc::clone(analyzer));
        }

        debug!(language = %language, "building analyzer");
        let analyzer = Analyzer::load(language, self.source.as_ref(), self.etymology()?)?;
        let mut analyzers = self.analyzers.write();
        Ok(Arc::clone(analyzers.entry(language).or_insert_with(|| Arc::new(analyzer))))
    }

    /// The shared etymology linker. Unavailable data is cached as such, so the
    /// source is asked only once.
    pub fn etymology(&self) -> Result<EtymologyLinker> {
        let mut slot = self.etymology.lock();
        if let Some(linker) = slot.as_ref() {
            return Ok(linker.clone());
        }
        let linker = if self.source.etymology_available() {
            EtymologyLinker::new(Arc::new(self.source.load_etymology()?))
        } else {
            info!("etymology data not provisioned");
            EtymologyLinker::unavailable()
        };
        *slot = Some(linker.clone());
        Ok(linker)
    }

    /// Languages with a cached analyzer, ordered by code.
    pub fn loaded(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self.analyzers.read().keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.analyzers.read().contains_key(&language)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("loaded", &self.loaded())
            .field("etymology", &self.etymology.lock().as_ref().map(EtymologyLinker::is_available))
            .finish()
    }
}
