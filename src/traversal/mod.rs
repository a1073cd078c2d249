//! # Morphology Traversals
//!
//! Read-only queries over a [`MorphologyGraph`](crate::storage::MorphologyGraph).
//! All of them share one bounded, visited-set breadth-first walk
//! ([`bfs::walk`]), so they terminate on cyclic data.

pub mod bfs;
pub mod root;
pub mod family;

pub use bfs::walk;
pub use root::{RootCandidate, RootFinder, RootSearch, MAX_ROOT_DEPTH};
pub use family::FamilyCollector;
