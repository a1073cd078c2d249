//! # Etymology Linker
//!
//! Cross-language queries over the shared [`EtymologyGraph`]. The graph is
//! optional: when no etymology data was provisioned every query fails with
//! [`Error::EtymologyDataUnavailable`] instead of returning empty results.
//!
//! Chain walks only ever follow forward edges (towards the source of a term).
//! Inverse edges such as `BorrowedBy` are used for reverse lookups only.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ChainLink, EdgeKind, Term};
use crate::storage::etymology::TermId;
use crate::storage::EtymologyGraph;
use crate::{Error, Result};

/// Default hop limit for chain walks.
pub const DEFAULT_CHAIN_DEPTH: usize = 5;

/// Origin priority used by [`EtymologyLinker::get_origin`] and ancestry walks.
pub const ORIGIN_PRIORITY: [EdgeKind; 3] =
    [EdgeKind::BorrowedFrom, EdgeKind::InheritedFrom, EdgeKind::RelatedTo];

/// Direct relations of a term, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTerms {
    pub borrowed_from: Vec<Term>,
    pub inherited_from: Vec<Term>,
    pub derived_from: Vec<Term>,
    pub cognates: Vec<Term>,
    pub related: Vec<Term>,
    pub roots: Vec<Term>,
    pub affixes: Vec<Term>,
}

impl RelatedTerms {
    pub fn is_empty(&self) -> bool {
        self.borrowed_from.is_empty()
            && self.inherited_from.is_empty()
            && self.derived_from.is_empty()
            && self.cognates.is_empty()
            && self.related.is_empty()
            && self.roots.is_empty()
            && self.affixes.is_empty()
    }

    fn bucket(&mut self, kind: EdgeKind) -> Option<&mut Vec<Term>> {
        match kind {
            EdgeKind::BorrowedFrom => Some(&mut self.borrowed_from),
            EdgeKind::InheritedFrom => Some(&mut self.inherited_from),
            EdgeKind::DerivedFrom => Some(&mut self.derived_from),
            EdgeKind::CognateOf => Some(&mut self.cognates),
            EdgeKind::RelatedTo => Some(&mut self.related),
            EdgeKind::HasRoot => Some(&mut self.roots),
            EdgeKind::HasAffix => Some(&mut self.affixes),
            EdgeKind::InheritedBy
            | EdgeKind::BorrowedBy
            | EdgeKind::DerivesTo
            | EdgeKind::RootOf
            | EdgeKind::AffixOf => None,
        }
    }
}

/// Handle over an optional, shared etymology graph.
#[derive(Debug, Clone, Default)]
pub struct EtymologyLinker {
    graph: Option<Arc<EtymologyGraph>>,
}

impl EtymologyLinker {
    pub fn new(graph: Arc<EtymologyGraph>) -> Self {
        Self { graph: Some(graph) }
    }

    /// A linker without data. Every query fails with `EtymologyDataUnavailable`.
    pub fn unavailable() -> Self {
        Self { graph: None }
    }

    pub fn from_option(graph: Option<Arc<EtymologyGraph>>) -> Self {
        Self { graph }
    }

    pub fn is_available(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph(&self) -> Result<&EtymologyGraph> {
        self.graph.as_deref().ok_or_else(Error::etymology_unavailable)
    }

    /// Follow the first `InheritedFrom` edge from (language, term) for up to
    /// `max_depth` hops. The input pair always comes first, spelled as given.
    pub fn trace_origin_chain(&self, language: &str, term: &str, max_depth: usize) -> Result<Vec<Term>> {
        self.trace_chain(language, term, EdgeKind::InheritedFrom, max_depth)
    }

    /// Same walk as [`trace_origin_chain`](Self::trace_origin_chain) over any
    /// forward edge kind.
    pub fn trace_chain(
        &self,
        language: &str,
        term: &str,
        kind: EdgeKind,
        max_depth: usize,
    ) -> Result<Vec<Term>> {
        let graph = self.graph()?;
        let links = walk_chain(graph, language, term, max_depth, |id| {
            graph.targets(id, kind).next().map(|t| (kind, t))
        });
        Ok(links.into_iter().map(|link| link.term).collect())
    }

    /// Ancestry walk that picks the best origin at each step
    /// (BorrowedFrom, then InheritedFrom, then RelatedTo) and records which
    /// relation was followed.
    pub fn trace_ancestry(&self, language: &str, term: &str, max_depth: usize) -> Result<Vec<ChainLink>> {
        let graph = self.graph()?;
        Ok(walk_chain(graph, language, term, max_depth, |id| origin_of(graph, id)))
    }

    /// The direct origin of a term by [`ORIGIN_PRIORITY`], if any.
    pub fn get_origin(&self, language: &str, term: &str) -> Result<Option<ChainLink>> {
        let graph = self.graph()?;
        Ok(graph.resolve(language, term).and_then(|id| origin_of(graph, id)).map(
            |(kind, target)| ChainLink::via(graph.term_ref(target).to_term(), kind),
        ))
    }

    pub fn get_cognates(&self, language: &str, term: &str) -> Result<Vec<Term>> {
        let graph = self.graph()?;
        Ok(graph
            .get_edges(language, term, EdgeKind::CognateOf)
            .into_iter()
            .map(|t| t.to_term())
            .collect())
    }

    /// Words of `target_language` borrowed from `source_language`.
    pub fn get_borrowed_words(&self, target_language: &str, source_language: &str) -> Result<BTreeSet<String>> {
        Ok(self.graph()?.borrowed_words(target_language, source_language))
    }

    /// Forward relations of a term grouped by kind.
    pub fn find_related_across_languages(&self, language: &str, term: &str) -> Result<RelatedTerms> {
        let graph = self.graph()?;
        let mut related = RelatedTerms::default();
        for (kind, target) in graph.edges(language, term) {
            if let Some(bucket) = related.bucket(kind) {
                bucket.push(target.to_term());
            }
        }
        Ok(related)
    }

    pub fn language_statistics(&self) -> Result<BTreeMap<String, usize>> {
        Ok(self.graph()?.language_statistics())
    }
}

fn origin_of(graph: &EtymologyGraph, id: TermId) -> Option<(EdgeKind, TermId)> {
    ORIGIN_PRIORITY
        .iter()
        .find_map(|&kind| graph.targets(id, kind).next().map(|t| (kind, t)))
}

/// Shared chain walk. `step` picks the next hop from a node; the walk stops
/// at `max_depth` hops, when `step` yields nothing, or before a revisit.
fn walk_chain<F>(
    graph: &EtymologyGraph,
    language: &str,
    term: &str,
    max_depth: usize,
    mut step: F,
) -> Vec<ChainLink>
where
    F: FnMut(TermId) -> Option<(EdgeKind, TermId)>,
{
    let mut chain = vec![ChainLink::start(Term::new(language, term))];
    let Some(mut current) = graph.resolve(language, term) else {
        debug!(language, term, "etymology lookup on unknown term");
        return chain;
    };

    let mut visited: HashSet<TermId> = HashSet::new();
    visited.insert(current);

    while chain.len() <= max_depth {
        let Some((kind, next)) = step(current) else {
            break;
        };
        if !visited.insert(next) {
            debug!(language, term, "etymology cycle");
            break;
        }
        chain.push(ChainLink::via(graph.term_ref(next).to_term(), kind));
        current = next;
    }
    chain
}
