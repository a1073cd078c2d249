//! # Analyzer
//!
//! One language's stores bundled behind a single handle: the derivational
//! graph, the inflection table, the calibrated productivity policy and an
//! optional etymology linker. Every query is synchronous and read-only.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::etymology::{EtymologyLinker, RelatedTerms, DEFAULT_CHAIN_DEPTH};
use crate::model::*;
use crate::policy::ProductivityPolicy;
use crate::storage::{DataSource, InflectionTable, MorphologyGraph};
use crate::traversal::{FamilyCollector, RootFinder, RootSearch};
use crate::Result;

/// Default depth for the word family reported by [`Analyzer::analyze`].
pub const DEFAULT_FAMILY_DEPTH: usize = 2;

// ============================================================================
// Result types
// ============================================================================

/// How two words are related.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Derivational,
    Inflectional,
    Both,
}

/// Outcome of [`Analyzer::are_related`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relatedness {
    pub related: bool,
    pub relationship: Option<RelationshipKind>,
    pub common_root: Option<String>,
}

impl Relatedness {
    fn unrelated() -> Self {
        Self { related: false, relationship: None, common_root: None }
    }

    fn of(kind: RelationshipKind, common_root: String) -> Self {
        Self { related: true, relationship: Some(kind), common_root: Some(common_root) }
    }
}

/// Etymology section of an [`Analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologySummary {
    pub origin: ChainLink,
    pub chain: Vec<ChainLink>,
    pub related_languages: RelatedTerms,
}

/// Everything known about one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub word: String,
    pub language: Language,
    pub derivational_stem: String,
    pub full_stem: String,
    pub word_family: BTreeSet<String>,
    pub derivations: Vec<Derivation>,
    pub inflectional_lemma: Option<String>,
    pub pos: Option<PartOfSpeech>,
    pub grammatical_features: Vec<FormAnalysis>,
    pub inflections: BTreeSet<String>,
    /// `None` when etymology is not loaded or the word has no recorded origin.
    pub etymology: Option<EtymologySummary>,
}

// ============================================================================
// Analyzer
// ============================================================================

#[derive(Debug, Clone)]
pub struct Analyzer {
    language: Language,
    morphology: MorphologyGraph,
    inflections: InflectionTable,
    policy: ProductivityPolicy,
    etymology: EtymologyLinker,
}

impl Analyzer {
    /// Load every store for `code` from `source`.
    ///
    /// Etymology is attached when the source reports it available; a source
    /// without etymology still yields a working analyzer.
    pub fn open<S: DataSource + ?Sized>(code: &str, source: &S) -> Result<Self> {
        let language = Language::from_code(code)?;
        let etymology = if source.etymology_available() {
            EtymologyLinker::new(Arc::new(source.load_etymology()?))
        } else {
            EtymologyLinker::unavailable()
        };
        Self::load(language, source, etymology)
    }

    /// Load the per-language stores and attach an already loaded linker.
    pub fn load<S: DataSource + ?Sized>(
        language: Language,
        source: &S,
        etymology: EtymologyLinker,
    ) -> Result<Self> {
        let morphology = source.load_morphology(language)?;
        let inflections = source.load_inflections(language)?;
        Ok(Self::from_parts(morphology, inflections, etymology))
    }

    pub fn from_parts(
        morphology: MorphologyGraph,
        inflections: InflectionTable,
        etymology: EtymologyLinker,
    ) -> Self {
        let language = morphology.language();
        let analyzer = Self {
            language,
            policy: ProductivityPolicy::for_language(language),
            morphology,
            inflections,
            etymology,
        };
        info!(
            language = %language,
            words = analyzer.morphology.len(),
            lemmas = analyzer.inflections.len(),
            etymology = analyzer.etymology.is_available(),
            "analyzer ready"
        );
        analyzer
    }

    /// Override the calibrated thresholds.
    pub fn with_policy(mut self, policy: ProductivityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn policy(&self) -> ProductivityPolicy {
        self.policy
    }

    pub fn morphology(&self) -> &MorphologyGraph {
        &self.morphology
    }

    pub fn inflections(&self) -> &InflectionTable {
        &self.inflections
    }

    pub fn etymology(&self) -> &EtymologyLinker {
        &self.etymology
    }

    fn roots(&self) -> RootFinder<'_> {
        RootFinder::new(&self.morphology, self.policy)
    }

    fn families(&self) -> FamilyCollector<'_> {
        FamilyCollector::new(&self.morphology)
    }

    // ------------------------------------------------------------------------
    // Derivational
    // ------------------------------------------------------------------------

    pub fn find_root(&self, word: &str) -> String {
        self.roots().find_root(word)
    }

    pub fn explain_root(&self, word: &str) -> RootSearch {
        self.roots().explain_root(word)
    }

    pub fn word_family(&self, word: &str) -> BTreeSet<String> {
        self.families().word_family(word)
    }

    pub fn word_family_within(&self, word: &str, max_depth: usize) -> BTreeSet<String> {
        self.families().word_family_within(word, max_depth)
    }

    pub fn get_derivations(&self, word: &str) -> Vec<Derivation> {
        self.morphology.derivations(word)
    }

    /// Same root, or overlapping one-hop families.
    pub fn are_derivationally_related(&self, a: &str, b: &str) -> bool {
        if self.find_root(a).to_lowercase() == self.find_root(b).to_lowercase() {
            return true;
        }
        let family = self.word_family_within(a, 1);
        self.word_family_within(b, 1).iter().any(|w| family.contains(w))
    }

    // ------------------------------------------------------------------------
    // Inflectional
    // ------------------------------------------------------------------------

    pub fn get_inflections(&self, word: &str) -> BTreeSet<String> {
        self.inflections.get_inflections(word)
    }

    pub fn get_lemma(&self, word: &str) -> String {
        self.inflections.get_lemma(word)
    }

    pub fn get_pos(&self, word: &str) -> Option<PartOfSpeech> {
        self.inflections.get_pos(word)
    }

    pub fn are_inflections(&self, a: &str, b: &str) -> bool {
        self.inflections.are_inflections(a, b)
    }

    // ------------------------------------------------------------------------
    // Combined
    // ------------------------------------------------------------------------

    /// Lemmatize, then find the derivational root of the lemma.
    pub fn full_stem(&self, word: &str) -> String {
        self.find_root(&self.get_lemma(word))
    }

    pub fn are_related(&self, a: &str, b: &str) -> Relatedness {
        let derivational = self.are_derivationally_related(a, b);
        let inflectional = self.are_inflections(a, b);
        match (derivational, inflectional) {
            (true, true) => Relatedness::of(RelationshipKind::Both, self.full_stem(a)),
            (true, false) => Relatedness::of(RelationshipKind::Derivational, self.find_root(a)),
            (false, true) => Relatedness::of(RelationshipKind::Inflectional, self.get_lemma(a)),
            (false, false) => Relatedness::unrelated(),
        }
    }

    pub fn analyze(&self, word: &str, depth: usize) -> Analysis {
        let lemma = self.inflections.lemma_of(word).map(str::to_string);
        let etymology = self.etymology_summary(word);
        Analysis {
            word: word.to_string(),
            language: self.language,
            derivational_stem: self.find_root(word),
            full_stem: self.full_stem(word),
            word_family: self.word_family_within(word, depth),
            derivations: self.get_derivations(word),
            pos: self.get_pos(word),
            grammatical_features: self.inflections.analyses(word).to_vec(),
            inflections: self.get_inflections(word),
            inflectional_lemma: lemma,
            etymology,
        }
    }

    fn etymology_summary(&self, word: &str) -> Option<EtymologySummary> {
        let name = self.language.name();
        let origin = self.etymology.get_origin(name, word).ok().flatten()?;
        Some(EtymologySummary {
            origin,
            chain: self.etymology.trace_ancestry(name, word, DEFAULT_CHAIN_DEPTH).ok()?,
            related_languages: self.etymology.find_related_across_languages(name, word).ok()?,
        })
    }

    // ------------------------------------------------------------------------
    // Etymology, keyed by this analyzer's language name
    // ------------------------------------------------------------------------

    pub fn trace_origin_chain(&self, term: &str, max_depth: usize) -> Result<Vec<Term>> {
        self.etymology.trace_origin_chain(self.language.name(), term, max_depth)
    }

    pub fn trace_ancestry(&self, term: &str, max_depth: usize) -> Result<Vec<ChainLink>> {
        self.etymology.trace_ancestry(self.language.name(), term, max_depth)
    }

    pub fn get_origin(&self, term: &str) -> Result<Option<ChainLink>> {
        self.etymology.get_origin(self.language.name(), term)
    }

    pub fn get_cognates(&self, term: &str) -> Result<Vec<Term>> {
        self.etymology.get_cognates(self.language.name(), term)
    }

    pub fn find_related_across_languages(&self, term: &str) -> Result<RelatedTerms> {
        self.etymology.find_related_across_languages(self.language.name(), term)
    }

    /// Words of this language borrowed from `source_language` (full name).
    pub fn get_borrowed_words(&self, source_language: &str) -> Result<BTreeSet<String>> {
        self.etymology.get_borrowed_words(self.language.name(), source_language)
    }

    pub fn language_statistics(&self) -> Result<BTreeMap<String, usize>> {
        self.etymology.language_statistics()
    }
}
