//! Terms and ancestry chains in the etymology graph.

use serde::{Deserialize, Serialize};

use super::EdgeKind;

/// An owned (language, term) pair. Language is the full name, e.g. `"Middle French"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term {
    pub language: String,
    pub term: String,
}

impl Term {
    pub fn new(language: impl Into<String>, term: impl Into<String>) -> Self {
        Self { language: language.into(), term: term.into() }
    }
}

/// Borrowed view of a term stored in an [`EtymologyGraph`](crate::storage::EtymologyGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermRef<'g> {
    pub language: &'g str,
    pub term: &'g str,
}

impl TermRef<'_> {
    pub fn to_term(self) -> Term {
        Term::new(self.language, self.term)
    }
}

impl PartialEq<Term> for TermRef<'_> {
    fn eq(&self, other: &Term) -> bool {
        self.language == other.language && self.term == other.term
    }
}

/// One step of an ancestry chain: the term reached and the relation followed
/// to reach it. The first link of a chain has no relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(flatten)]
    pub term: Term,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<EdgeKind>,
}

impl ChainLink {
    pub fn start(term: Term) -> Self {
        Self { term, via: None }
    }

    pub fn via(term: Term, kind: EdgeKind) -> Self {
        Self { term, via: Some(kind) }
    }
}
