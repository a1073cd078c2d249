//! Multilingual etymology graph.
//!
//! Keyed by (full language name, lowercased term). Language names are
//! interned so each node carries a small integer instead of a string.
//! Every forward edge added through the builder also records its inverse on
//! the target node; targets that never appear as a record subject are kept as
//! dangling leaves (attested ancestors without their own etymology).

use std::collections::{BTreeMap, BTreeSet};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use crate::model::*;
use super::normalize;

/// One etymology relation as supplied by the data-loading collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyRecord {
    pub language: String,
    pub term: String,
    pub kind: EdgeKind,
    pub related_language: String,
    pub related_term: String,
}

impl EtymologyRecord {
    pub fn new(
        language: impl Into<String>,
        term: impl Into<String>,
        kind: EdgeKind,
        related_language: impl Into<String>,
        related_term: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            term: term.into(),
            kind,
            related_language: related_language.into(),
            related_term: related_term.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct LangId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TermId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EtymologyEdge {
    kind: EdgeKind,
    target: TermId,
}

#[derive(Debug, Clone)]
struct EtymologyNode {
    language: LangId,
    /// Display form as first seen in the data.
    term: String,
    edges: SmallVec<[EtymologyEdge; 2]>,
    /// False for nodes only ever referenced as a relation target.
    attested: bool,
}

/// Immutable etymology store.
#[derive(Debug, Clone)]
pub struct EtymologyGraph {
    languages: Vec<String>,
    language_ids: HashMap<String, LangId>,
    nodes: Vec<EtymologyNode>,
    /// lowercased term → node, one map per interned language
    index: Vec<HashMap<String, TermId>>,
    /// attested terms per language, in insertion order
    by_language: Vec<Vec<TermId>>,
    /// (borrowing language, source language) → borrowing terms
    borrowed: HashMap<(LangId, LangId), Vec<TermId>>,
}

impl EtymologyGraph {
    pub fn builder() -> EtymologyGraphBuilder {
        EtymologyGraphBuilder::default()
    }

    /// Number of (language, term) nodes, dangling leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    pub(crate) fn resolve(&self, language: &str, term: &str) -> Option<TermId> {
        let lang = *self.language_ids.get(language)?;
        self.index[lang.0 as usize].get(normalize(term).as_ref()).copied()
    }

    fn node(&self, id: TermId) -> &EtymologyNode {
        &self.nodes[id.0 as usize]
    }

    pub(crate) fn term_ref(&self, id: TermId) -> TermRef<'_> {
        let node = self.node(id);
        TermRef {
            language: &self.languages[node.language.0 as usize],
            term: &node.term,
        }
    }

    pub(crate) fn targets(&self, id: TermId, kind: EdgeKind) -> impl Iterator<Item = TermId> + '_ {
        self.node(id)
            .edges
            .iter()
            .filter(move |e| e.kind == kind)
            .map(|e| e.target)
    }

    pub fn contains(&self, language: &str, term: &str) -> bool {
        self.resolve(language, term).is_some()
    }

    /// True for terms referenced by some relation but without records of their own.
    pub fn is_dangling(&self, language: &str, term: &str) -> bool {
        self.resolve(language, term).is_some_and(|id| !self.node(id).attested)
    }

    /// Targets of `kind` edges from (language, term), in stored order.
    /// Unknown keys yield an empty list.
    pub fn get_edges(&self, language: &str, term: &str, kind: EdgeKind) -> Vec<TermRef<'_>> {
        match self.resolve(language, term) {
            Some(id) => self.targets(id, kind).map(|t| self.term_ref(t)).collect(),
            None => Vec::new(),
        }
    }

    /// Every edge from (language, term), any kind, in stored order.
    pub fn edges(&self, language: &str, term: &str) -> Vec<(EdgeKind, TermRef<'_>)> {
        match self.resolve(language, term) {
            Some(id) => self
                .node(id)
                .edges
                .iter()
                .map(|e| (e.kind, self.term_ref(e.target)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Attested terms recorded for a language.
    pub fn terms_in(&self, language: &str) -> Vec<&str> {
        let Some(lang) = self.language_ids.get(language) else {
            return Vec::new();
        };
        self.by_language[lang.0 as usize]
            .iter()
            .map(|&id| self.node(id).term.as_str())
            .collect()
    }

    /// Terms of `target_language` with a BORROWED_FROM edge into `source_language`.
    pub fn borrowed_words(&self, target_language: &str, source_language: &str) -> BTreeSet<String> {
        let (Some(&target), Some(&source)) = (
            self.language_ids.get(target_language),
            self.language_ids.get(source_language),
        ) else {
            return BTreeSet::new();
        };
        self.borrowed
            .get(&(target, source))
            .map(|ids| ids.iter().map(|&id| self.node(id).term.clone()).collect())
            .unwrap_or_default()
    }

    /// Attested term count per language name.
    pub fn language_statistics(&self) -> BTreeMap<String, usize> {
        self.languages
            .iter()
            .zip(&self.by_language)
            .filter(|(_, terms)| !terms.is_empty())
            .map(|(name, terms)| (name.clone(), terms.len()))
            .collect()
    }
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug, Default)]
pub struct EtymologyGraphBuilder {
    languages: Vec<String>,
    language_ids: HashMap<String, LangId>,
    nodes: Vec<EtymologyNode>,
    index: Vec<HashMap<String, TermId>>,
}

impl EtymologyGraphBuilder {
    fn language(&mut self, name: &str) -> LangId {
        if let Some(&id) = self.language_ids.get(name) {
            return id;
        }
        let id = LangId(self.languages.len() as u32);
        self.languages.push(name.to_string());
        self.index.push(HashMap::new());
        self.language_ids.insert(name.to_string(), id);
        id
    }

    fn term(&mut self, language: &str, term: &str, attested: bool) -> Option<TermId> {
        let language = language.trim();
        let term = term.trim();
        if language.is_empty() || term.is_empty() {
            return None;
        }
        let lang = self.language(language);
        let key = normalize(term);
        if let Some(&id) = self.index[lang.0 as usize].get(key.as_ref()) {
            self.nodes[id.0 as usize].attested |= attested;
            return Some(id);
        }
        let id = TermId(self.nodes.len() as u32);
        self.nodes.push(EtymologyNode {
            language: lang,
            term: term.to_string(),
            edges: SmallVec::new(),
            attested,
        });
        self.index[lang.0 as usize].insert(key.into_owned(), id);
        Some(id)
    }

    fn push_edge(&mut self, from: TermId, kind: EdgeKind, target: TermId) {
        let edge = EtymologyEdge { kind, target };
        let edges = &mut self.nodes[from.0 as usize].edges;
        if !edges.contains(&edge) {
            edges.push(edge);
        }
    }

    /// Add a relation. Records with blank fields are ignored.
    pub fn add(&mut self, record: EtymologyRecord) -> &mut Self {
        let Some(from) = self.term(&record.language, &record.term, true) else {
            return self;
        };
        let Some(to) = self.term(&record.related_language, &record.related_term, false) else {
            return self;
        };
        self.push_edge(from, record.kind, to);
        self.push_edge(to, record.kind.inverse(), from);
        self
    }

    /// Shorthand for [`add`](Self::add).
    pub fn relate(
        &mut self,
        language: &str,
        term: &str,
        kind: EdgeKind,
        related_language: &str,
        related_term: &str,
    ) -> &mut Self {
        self.add(EtymologyRecord::new(language, term, kind, related_language, related_term))
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = EtymologyRecord>) -> &mut Self {
        for record in records {
            self.add(record);
        }
        self
    }

    pub fn build(self) -> EtymologyGraph {
        let mut by_language = vec![Vec::new(); self.languages.len()];
        let mut borrowed: HashMap<(LangId, LangId), Vec<TermId>> = HashMap::new();

        for (i, node) in self.nodes.iter().enumerate() {
            let id = TermId(i as u32);
            if node.attested {
                by_language[node.language.0 as usize].push(id);
            }
            for edge in node.edges.iter().filter(|e| e.kind == EdgeKind::BorrowedFrom) {
                let source_lang = self.nodes[edge.target.0 as usize].language;
                let terms = borrowed.entry((node.language, source_lang)).or_default();
                if terms.last() != Some(&id) {
                    terms.push(id);
                }
            }
        }

        let graph = EtymologyGraph {
            languages: self.languages,
            language_ids: self.language_ids,
            nodes: self.nodes,
            index: self.index,
            by_language,
            borrowed,
        };
        info!(
            terms = graph.len(),
            edges = graph.edge_count(),
            languages = graph.languages.len(),
            "built etymology graph"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> EtymologyGraph {
        let mut b = EtymologyGraph::builder();
        b.relate("English", "portmanteau", EdgeKind::BorrowedFrom, "Middle French", "portemanteau")
            .relate("English", "chef", EdgeKind::BorrowedFrom, "French", "chef")
            .relate("English", "ballet", EdgeKind::BorrowedFrom, "French", "ballet")
            .relate("English", "ballet", EdgeKind::BorrowedFrom, "Italian", "balletto")
            .relate("English", "mother", EdgeKind::InheritedFrom, "Middle English", "moder")
            .relate("English", "mother", EdgeKind::CognateOf, "German", "Mutter");
        b.build()
    }

    #[test]
    fn test_get_edges() {
        let g = sample();
        let edges = g.get_edges("English", "portmanteau", EdgeKind::BorrowedFrom);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0], Term::new("Middle French", "portemanteau"));

        assert!(g.get_edges("English", "portmanteau", EdgeKind::InheritedFrom).is_empty());
        assert!(g.get_edges("English", "nonexistent", EdgeKind::BorrowedFrom).is_empty());
        assert!(g.get_edges("Klingon", "portmanteau", EdgeKind::BorrowedFrom).is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive_on_term() {
        let g = sample();
        assert!(g.contains("English", "Portmanteau"));
        assert!(!g.contains("english", "portmanteau"), "language names are exact");
    }

    #[test]
    fn test_inverse_edges_are_materialized() {
        let g = sample();
        let borrowers = g.get_edges("French", "chef", EdgeKind::BorrowedBy);
        assert_eq!(borrowers, vec![TermRef { language: "English", term: "chef" }]);

        // symmetric kinds mirror themselves
        let cognates = g.get_edges("German", "Mutter", EdgeKind::CognateOf);
        assert_eq!(cognates[0].term, "mother");
    }

    #[test]
    fn test_dangling_leaves() {
        let g = sample();
        assert!(g.is_dangling("Middle English", "moder"));
        assert!(!g.is_dangling("English", "mother"));
        assert!(!g.is_dangling("English", "absent"));
    }

    #[test]
    fn test_borrowed_words_index() {
        let g = sample();
        let from_french: Vec<_> = g.borrowed_words("English", "French").into_iter().collect();
        assert_eq!(from_french, vec!["ballet".to_string(), "chef".to_string()]);
        assert_eq!(g.borrowed_words("English", "Italian").len(), 1);
        assert!(g.borrowed_words("English", "Klingon").is_empty());
        assert!(g.borrowed_words("French", "English").is_empty());
    }

    #[test]
    fn test_language_statistics_count_attested_terms() {
        let g = sample();
        let stats = g.language_statistics();
        assert_eq!(stats.get("English"), Some(&4));
        assert_eq!(stats.get("French"), None, "French only appears as a target");
    }

    #[test]
    fn test_resolve_is_scoped_per_language() {
        let g = sample();
        let english = g.resolve("English", "chef").unwrap();
        let french = g.resolve("French", "CHEF").unwrap();
        assert_ne!(english, french);
        assert_eq!(g.term_ref(french), TermRef { language: "French", term: "chef" });
        assert_eq!(g.resolve("Italian", "chef"), None);
        assert_eq!(g.resolve("Klingon", "chef"), None);
    }

    #[test]
    fn test_duplicate_records_collapse() {
        let mut b = EtymologyGraph::builder();
        b.relate("English", "chef", EdgeKind::BorrowedFrom, "French", "chef")
            .relate("English", "Chef", EdgeKind::BorrowedFrom, "French", "chef");
        let g = b.build();
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 2);
    }
}
