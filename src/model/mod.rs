//! # Morphology Model
//!
//! Plain data types shared by the stores, the traversals and callers.
//!
//! Design rule: no I/O, no interior mutability, no graph logic here.
//! This module is pure data.

pub mod language;
pub mod pos;
pub mod node;
pub mod relationship;
pub mod inflection;
pub mod edge_kind;
pub mod path;

pub use language::Language;
pub use pos::{PartOfSpeech, PosBucket};
pub use node::{MorphNode, WordId};
pub use relationship::{Affix, Derivation, DerivationRelation, Direction};
pub use inflection::{FormAnalysis, InflectionEntry};
pub use edge_kind::EdgeKind;
pub use path::{ChainLink, Term, TermRef};
