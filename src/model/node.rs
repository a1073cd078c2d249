//! Node in the derivational morphology graph.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::PartOfSpeech;

/// Arena index of a word-form inside one [`MorphologyGraph`](crate::storage::MorphologyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub u32);

impl WordId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A word-form and its derivational neighbourhood.
///
/// Edges are plain [`WordId`]s into the owning graph's arena, so cycles and
/// shared parents need no ownership juggling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphNode {
    pub id: WordId,
    pub word: String,
    pub pos: PartOfSpeech,
    /// Words this one derives from, in first-seen order, without duplicates.
    pub parents: SmallVec<[WordId; 2]>,
    /// Words derived from this one, without duplicates.
    pub children: Vec<WordId>,
    /// Number of distinct children. Fixed at build time.
    pub productivity: usize,
}

impl MorphNode {
    pub fn new(id: WordId, word: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            id,
            word: word.into(),
            pos,
            parents: SmallVec::new(),
            children: Vec::new(),
            productivity: 0,
        }
    }

    pub fn has_parent(&self, id: WordId) -> bool {
        self.parents.contains(&id)
    }

    pub fn has_child(&self, id: WordId) -> bool {
        self.children.contains(&id)
    }
}
