//! Bounded breadth-first walk over the morphology graph.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::model::{Direction, WordId};
use crate::storage::MorphologyGraph;

/// Breadth-first walk from `start`.
///
/// `visit` is called once per distinct node, in discovery order, with the
/// node's hop distance from `start` (the start itself is visited at depth 0).
/// Nodes at `max_depth` are visited but never expanded, so no node deeper
/// than `max_depth` is ever discovered. `None` walks the whole component.
///
/// Returns the number of distinct nodes visited.
pub fn walk<F>(
    graph: &MorphologyGraph,
    start: WordId,
    dir: Direction,
    max_depth: Option<usize>,
    mut visit: F,
) -> usize
where
    F: FnMut(WordId, usize),
{
    let mut visited: HashSet<WordId> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    visit(start, 0);
    queue.push_back((start, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for next in graph.neighbors(current, dir) {
            if visited.insert(next) {
                visit(next, depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }

    visited.len()
}
