//! Productivity-gated root finding.
//!
//! Walks DERIVED_FROM edges upward from the input for at most
//! [`MAX_ROOT_DEPTH`] hops. Every parent whose productivity meets the
//! language's threshold for its POS becomes a candidate; the candidate with
//! the lowest score wins:
//!
//! ```text
//! score = pos_bonus + 2 * depth     (Verb -10, Noun -5, otherwise 0)
//! ```
//!
//! Ties keep the first candidate discovered. Parents that fail the threshold
//! are still expanded, so a productive grandparent can be reached through an
//! unproductive parent.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Direction, PartOfSpeech, WordId};
use crate::policy::ProductivityPolicy;
use crate::storage::MorphologyGraph;
use super::bfs::walk;

/// Hop limit for the upward search.
pub const MAX_ROOT_DEPTH: usize = 3;

/// A parent that passed the productivity threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootCandidate {
    pub word: String,
    pub pos: PartOfSpeech,
    pub depth: usize,
    pub productivity: usize,
    pub score: i32,
}

/// Outcome of a root search, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSearch {
    pub root: String,
    /// Passing candidates in discovery order.
    pub candidates: Vec<RootCandidate>,
    /// Distinct nodes visited, input included. Zero when the input is unknown.
    pub visited: usize,
}

impl RootSearch {
    /// True when no candidate replaced the input.
    pub fn is_unchanged(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub fn score(pos: PartOfSpeech, depth: usize) -> i32 {
    pos.root_bonus() + 2 * depth as i32
}

/// Root finder over one language's graph.
#[derive(Debug, Clone, Copy)]
pub struct RootFinder<'g> {
    graph: &'g MorphologyGraph,
    policy: ProductivityPolicy,
}

impl<'g> RootFinder<'g> {
    pub fn new(graph: &'g MorphologyGraph, policy: ProductivityPolicy) -> Self {
        Self { graph, policy }
    }

    /// Calibrated for the graph's own language.
    pub fn for_graph(graph: &'g MorphologyGraph) -> Self {
        Self::new(graph, ProductivityPolicy::for_language(graph.language()))
    }

    pub fn policy(&self) -> ProductivityPolicy {
        self.policy
    }

    /// The productive root of `word`, or `word` unchanged.
    pub fn find_root(&self, word: &str) -> String {
        self.explain_root(word).root
    }

    pub fn explain_root(&self, word: &str) -> RootSearch {
        let Some(start) = self.graph.id_of(word) else {
            trace!(word, "root search on unknown word");
            return RootSearch { root: word.to_string(), candidates: Vec::new(), visited: 0 };
        };

        let mut candidates = Vec::new();
        let mut best: Option<(i32, WordId)> = None;
        let visited = walk(
            self.graph,
            start,
            Direction::Parents,
            Some(MAX_ROOT_DEPTH),
            |id, depth| {
                if depth == 0 {
                    return;
                }
                let node = self.graph.node(id);
                if !self.policy.meets_threshold(node.pos, node.productivity) {
                    trace!(word = %node.word, depth, productivity = node.productivity, "below threshold");
                    return;
                }
                let score = score(node.pos, depth);
                trace!(word = %node.word, depth, score, "root candidate");
                if best.is_none_or(|(s, _)| score < s) {
                    best = Some((score, id));
                }
                candidates.push(RootCandidate {
                    word: node.word.clone(),
                    pos: node.pos,
                    depth,
                    productivity: node.productivity,
                    score,
                });
            },
        );

        let root = match best {
            Some((_, id)) => self.graph.word(id).to_string(),
            None => word.to_string(),
        };
        debug!(word, root = %root, candidates = candidates.len(), visited, "root search");
        RootSearch { root, candidates, visited }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, PartOfSpeech::*};
    use pretty_assertions::assert_eq;

    /// `base` (V) has five children, `hub` (N) has two.
    fn graph() -> MorphologyGraph {
        let mut b = MorphologyGraph::builder(Language::English);
        for child in ["c1", "c2", "c3", "c4"] {
            b.derive("base", Verb, child, Noun);
        }
        b.derive("base", Verb, "hub", Noun)
            .derive("hub", Noun, "leaf", Adjective)
            .derive("hub", Noun, "twig", Noun)
            .derive("leaf", Adjective, "leafy", Adjective);
        b.build()
    }

    #[test]
    fn test_score() {
        assert_eq!(score(Verb, 1), -8);
        assert_eq!(score(Noun, 1), -3);
        assert_eq!(score(Adjective, 3), 6);
    }

    #[test]
    fn test_unproductive_parent_is_expanded() {
        let g = graph();
        let finder = RootFinder::new(&g, ProductivityPolicy::custom(5, 9));
        let search = finder.explain_root("leaf");
        assert_eq!(search.root, "base");
        assert_eq!(search.candidates.len(), 1);
        assert_eq!(search.candidates[0].depth, 2);
        assert_eq!(search.visited, 3);
    }

    #[test]
    fn test_lowest_score_wins() {
        let g = graph();
        // both hub (N, depth 1, score -3) and base (V, depth 2, score -6) pass
        let finder = RootFinder::new(&g, ProductivityPolicy::custom(1, 1));
        let search = finder.explain_root("leaf");
        assert_eq!(search.root, "base");
        assert_eq!(
            search.candidates.iter().map(|c| c.word.as_str()).collect::<Vec<_>>(),
            vec!["hub", "base"]
        );
    }

    #[test]
    fn test_depth_limit() {
        let g = graph();
        let finder = RootFinder::new(&g, ProductivityPolicy::custom(5, 9));
        // leafy -> leaf -> hub -> base is exactly three hops
        assert_eq!(finder.find_root("leafy"), "base");

        let mut b = MorphologyGraph::builder(Language::English);
        for child in ["x1", "x2", "x3", "x4", "w1"] {
            b.derive("far", Verb, child, Noun);
        }
        b.derive("w1", Noun, "w2", Noun)
            .derive("w2", Noun, "w3", Noun)
            .derive("w3", Noun, "w4", Noun);
        let deep = b.build();
        let finder = RootFinder::new(&deep, ProductivityPolicy::custom(5, 9));
        assert_eq!(finder.find_root("w3"), "far");
        assert_eq!(finder.find_root("w4"), "w4", "four hops is out of reach");
    }

    #[test]
    fn test_unknown_and_rootless_words() {
        let g = graph();
        let finder = RootFinder::new(&g, ProductivityPolicy::custom(5, 9));
        let search = finder.explain_root("Neologism123");
        assert_eq!(search.root, "Neologism123");
        assert_eq!(search.visited, 0);
        assert!(search.is_unchanged());

        assert_eq!(finder.find_root("base"), "base");
    }

    #[test]
    fn test_first_discovered_wins_ties() {
        let mut b = MorphologyGraph::builder(Language::English);
        b.derive("alpha", Noun, "kid", Noun).derive("beta", Noun, "kid", Noun);
        let g = b.build();
        let finder = RootFinder::new(&g, ProductivityPolicy::custom(1, 1));
        assert_eq!(finder.find_root("kid"), "alpha");
    }
}
