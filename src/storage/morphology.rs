//! Derivational morphology graph for one language.
//!
//! Nodes live in an arena (`Vec<MorphNode>`) and are addressed by [`WordId`].
//! A hash index maps lowercased word-forms to ids. Both edge directions are
//! stored on every node so parent and child expansion are O(degree).
//!
//! The graph is built once through [`MorphologyGraphBuilder`] and is
//! read-only afterwards.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::*;
use super::normalize;

// ============================================================================
// Input records
// ============================================================================

/// One derivation as supplied by the data-loading collaborator:
/// `target` is derived from `source` (`organize` → `organization`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationRecord {
    pub source: String,
    pub source_pos: PartOfSpeech,
    pub target: String,
    pub target_pos: PartOfSpeech,
    #[serde(default)]
    pub affix: Option<Affix>,
}

impl DerivationRecord {
    pub fn new(
        source: impl Into<String>,
        source_pos: PartOfSpeech,
        target: impl Into<String>,
        target_pos: PartOfSpeech,
    ) -> Self {
        Self {
            source: source.into(),
            source_pos,
            target: target.into(),
            target_pos,
            affix: None,
        }
    }

    pub fn with_affix(mut self, affix: impl Into<String>, affix_type: impl Into<String>) -> Self {
        self.affix = Some(Affix::new(affix, affix_type));
        self
    }
}

// ============================================================================
// MorphologyGraph
// ============================================================================

/// Immutable word → node store with parent and child adjacency.
#[derive(Debug, Clone)]
pub struct MorphologyGraph {
    language: Language,
    nodes: Vec<MorphNode>,
    index: HashMap<String, WordId>,
    /// (parent, child) → affix annotation
    affixes: HashMap<(WordId, WordId), Affix>,
}

impl MorphologyGraph {
    pub fn builder(language: Language) -> MorphologyGraphBuilder {
        MorphologyGraphBuilder::new(language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a word-form. `None` means "not attested", which is a normal outcome.
    pub fn lookup(&self, word: &str) -> Option<&MorphNode> {
        self.id_of(word).map(|id| self.node(id))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.id_of(word).is_some()
    }

    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.index.get(normalize(word).as_ref()).copied()
    }

    pub fn get(&self, id: WordId) -> Option<&MorphNode> {
        self.nodes.get(id.index())
    }

    /// Ids handed out by this graph are always valid arena indices.
    pub(crate) fn node(&self, id: WordId) -> &MorphNode {
        &self.nodes[id.index()]
    }

    pub fn word(&self, id: WordId) -> &str {
        &self.node(id).word
    }

    pub fn nodes(&self) -> impl Iterator<Item = &MorphNode> {
        self.nodes.iter()
    }

    pub fn parents(&self, id: WordId) -> &[WordId] {
        &self.node(id).parents
    }

    pub fn children(&self, id: WordId) -> &[WordId] {
        &self.node(id).children
    }

    /// Adjacent word ids in the given direction. `Both` yields parents first.
    pub fn neighbors(&self, id: WordId, dir: Direction) -> impl Iterator<Item = WordId> + '_ {
        let node = self.node(id);
        let parents = matches!(dir, Direction::Parents | Direction::Both)
            .then_some(node.parents.iter())
            .into_iter()
            .flatten();
        let children = matches!(dir, Direction::Children | Direction::Both)
            .then_some(node.children.iter())
            .into_iter()
            .flatten();
        parents.chain(children).copied()
    }

    pub fn affix(&self, parent: WordId, child: WordId) -> Option<&Affix> {
        self.affixes.get(&(parent, child))
    }

    /// Every directly related word: derived forms first, then sources.
    /// Empty for unknown words.
    pub fn derivations(&self, word: &str) -> Vec<Derivation> {
        let Some(node) = self.lookup(word) else {
            return Vec::new();
        };

        let derived = node.children.iter().map(|&child| Derivation {
            form: self.word(child).to_string(),
            pos: self.node(child).pos,
            relation: DerivationRelation::DerivesTo,
            affix: self.affix(node.id, child).cloned(),
        });
        let sources = node.parents.iter().map(|&parent| Derivation {
            form: self.word(parent).to_string(),
            pos: self.node(parent).pos,
            relation: DerivationRelation::DerivedFrom,
            affix: self.affix(parent, node.id).cloned(),
        });
        derived.chain(sources).collect()
    }

    /// Total number of derivation edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates derivation records, then freezes them into a [`MorphologyGraph`].
#[derive(Debug)]
pub struct MorphologyGraphBuilder {
    language: Language,
    nodes: Vec<MorphNode>,
    index: HashMap<String, WordId>,
    affixes: HashMap<(WordId, WordId), Affix>,
}

impl MorphologyGraphBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            nodes: Vec::new(),
            index: HashMap::new(),
            affixes: HashMap::new(),
        }
    }

    /// Register a word without edges. Returns `None` for blank input.
    pub fn add_word(&mut self, word: &str, pos: PartOfSpeech) -> Option<WordId> {
        let key = normalize(word.trim());
        if key.is_empty() {
            return None;
        }
        if let Some(&id) = self.index.get(key.as_ref()) {
            // first concrete tag wins
            let node = &mut self.nodes[id.index()];
            if node.pos == PartOfSpeech::Other {
                node.pos = pos;
            }
            return Some(id);
        }

        let id = WordId(self.nodes.len() as u32);
        let key = key.into_owned();
        self.nodes.push(MorphNode::new(id, key.clone(), pos));
        self.index.insert(key, id);
        Some(id)
    }

    /// Add one derivation edge. Blank words are ignored; duplicate edges are merged.
    pub fn add(&mut self, record: DerivationRecord) -> &mut Self {
        let Some(source) = self.add_word(&record.source, record.source_pos) else {
            return self;
        };
        let Some(target) = self.add_word(&record.target, record.target_pos) else {
            return self;
        };

        let child = &mut self.nodes[target.index()];
        if !child.parents.contains(&source) {
            child.parents.push(source);
        }
        let parent = &mut self.nodes[source.index()];
        if !parent.children.contains(&target) {
            parent.children.push(target);
        }
        if let Some(affix) = record.affix {
            self.affixes.entry((source, target)).or_insert(affix);
        }
        self
    }

    /// Shorthand for [`add`](Self::add) without an affix.
    pub fn derive(
        &mut self,
        source: &str,
        source_pos: PartOfSpeech,
        target: &str,
        target_pos: PartOfSpeech,
    ) -> &mut Self {
        self.add(DerivationRecord::new(source, source_pos, target, target_pos))
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = DerivationRecord>) -> &mut Self {
        for record in records {
            self.add(record);
        }
        self
    }

    pub fn build(self) -> MorphologyGraph {
        let mut nodes = self.nodes;
        for node in &mut nodes {
            node.productivity = node.children.len();
        }

        let graph = MorphologyGraph {
            language: self.language,
            nodes,
            index: self.index,
            affixes: self.affixes,
        };
        info!(
            language = %graph.language,
            words = graph.len(),
            edges = graph.edge_count(),
            "built morphology graph"
        );
        graph
    }
}

// ============================================================================
// Tests
// ============================================================================
