//! # crosstem: Multilingual Morphology and Etymology Graphs
//!
//! In-memory derivational graphs, inflection tables and a cross-language
//! etymology graph, with bounded traversals over them.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `DataSource` is the contract between the core and data loading
//! 2. **Arena graphs**: words are integer ids into a `Vec`, so cycles cost nothing
//! 3. **Build once, read forever**: stores are immutable and `Send + Sync`
//! 4. **Absence is not an error**: unknown words come back unchanged
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crosstem::{JsonSource, Registry};
//!
//! # fn example() -> crosstem::Result<()> {
//! let registry = Registry::new(JsonSource::open("data"));
//! let english = registry.analyzer("eng")?;
//!
//! assert_eq!(english.find_root("organizational"), "organize");
//! for form in english.get_inflections("run") {
//!     println!("{form}");
//! }
//!
//! if english.etymology().is_available() {
//!     for term in english.trace_origin_chain("mother", 5)? {
//!         println!("{} ({})", term.term, term.language);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Data Sources
//!
//! | Source | Description |
//! |--------|-------------|
//! | `MemorySource` | Records supplied in code, for tests and embedding |
//! | `JsonSource` | Preprocessed MorphyNet / UniMorph / etymology JSON |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod policy;
pub mod storage;
pub mod traversal;
pub mod etymology;
pub mod analyzer;
pub mod registry;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Language, PartOfSpeech, MorphNode, WordId, Direction,
    Derivation, DerivationRelation, Affix,
    FormAnalysis, InflectionEntry,
    EdgeKind, Term, TermRef, ChainLink,
};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{
    DataSource, DataConfig, MemorySource, JsonSource,
    MorphologyGraph, InflectionTable, EtymologyGraph,
    DerivationRecord, InflectionRecord, EtymologyRecord,
};

// ============================================================================
// Re-exports: Queries
// ============================================================================

pub use policy::ProductivityPolicy;
pub use traversal::{RootFinder, RootSearch, RootCandidate, FamilyCollector, MAX_ROOT_DEPTH};
pub use etymology::{EtymologyLinker, RelatedTerms};
pub use analyzer::{Analyzer, Analysis, Relatedness, RelationshipKind};
pub use registry::Registry;

// ============================================================================
// Error Types
// ============================================================================

const ETYMOLOGY_INSTRUCTIONS: &str = "\
Etymology data is not included by default (it is roughly 1 GB).

Download etymology.json into the data directory (see CROSSTEM_DATA_DIR),
then reload. Morphology and inflection queries work without it.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Language '{code}' not supported. Available: {available}")]
    LanguageNotSupported { code: String, available: String },

    #[error("Etymology data not found.\n\n{0}")]
    EtymologyDataUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn language_not_supported(code: &str) -> Self {
        Error::LanguageNotSupported {
            code: code.to_string(),
            available: Language::available_codes(),
        }
    }

    pub fn etymology_unavailable() -> Self {
        Error::EtymologyDataUnavailable(ETYMOLOGY_INSTRUCTIONS.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
