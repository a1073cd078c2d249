//! Word families: everything derivationally connected to a word.

use std::collections::BTreeSet;

use crate::model::Direction;
use crate::storage::MorphologyGraph;
use super::bfs::walk;

/// Collects the weakly connected component around a word.
#[derive(Debug, Clone, Copy)]
pub struct FamilyCollector<'g> {
    graph: &'g MorphologyGraph,
}

impl<'g> FamilyCollector<'g> {
    pub fn new(graph: &'g MorphologyGraph) -> Self {
        Self { graph }
    }

    /// Every word reachable over derivation edges in either direction,
    /// input included. An unknown word yields `{word}`.
    pub fn word_family(&self, word: &str) -> BTreeSet<String> {
        self.collect(word, None)
    }

    /// Same as [`word_family`](Self::word_family), limited to `max_depth` hops.
    pub fn word_family_within(&self, word: &str, max_depth: usize) -> BTreeSet<String> {
        self.collect(word, Some(max_depth))
    }

    fn collect(&self, word: &str, max_depth: Option<usize>) -> BTreeSet<String> {
        let Some(start) = self.graph.id_of(word) else {
            return BTreeSet::from([word.to_string()]);
        };
        let mut family = BTreeSet::new();
        walk(self.graph, start, Direction::Both, max_depth, |id, _| {
            family.insert(self.graph.word(id).to_string());
        });
        family
    }
}
