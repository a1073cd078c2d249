//! Typed etymology relations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of etymology edge kinds.
///
/// Forward kinds point from a term to its source. Each forward kind has an
/// inverse that is materialized on the target at build time; inverse edges
/// answer reverse queries ("what was borrowed from this?") and are never
/// walked as if they were ancestry. `CognateOf` and `RelatedTo` are their own
/// inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    InheritedFrom,
    BorrowedFrom,
    DerivedFrom,
    HasRoot,
    HasAffix,
    CognateOf,
    RelatedTo,

    InheritedBy,
    BorrowedBy,
    DerivesTo,
    RootOf,
    AffixOf,
}

impl EdgeKind {
    pub const FORWARD: [EdgeKind; 7] = [
        EdgeKind::InheritedFrom,
        EdgeKind::BorrowedFrom,
        EdgeKind::DerivedFrom,
        EdgeKind::HasRoot,
        EdgeKind::HasAffix,
        EdgeKind::CognateOf,
        EdgeKind::RelatedTo,
    ];

    /// Parse a `reltype` value from the etymology dataset.
    ///
    /// Returns `None` for relation types this crate does not model.
    pub fn from_reltype(reltype: &str) -> Option<Self> {
        let kind = match reltype.trim() {
            "inherited_from" => EdgeKind::InheritedFrom,
            "borrowed_from" | "learned_borrowing_from" | "semi_learned_borrowing_from"
            | "orthographic_borrowing_from" => EdgeKind::BorrowedFrom,
            "derived_from" => EdgeKind::DerivedFrom,
            "has_root" => EdgeKind::HasRoot,
            "has_affix" | "has_prefix" | "has_suffix" | "has_confix" | "has_interfix" => {
                EdgeKind::HasAffix
            }
            "cognate_of" => EdgeKind::CognateOf,
            "etymologically_related_to" => EdgeKind::RelatedTo,
            _ => return None,
        };
        Some(kind)
    }

    /// The kind recorded on the target when this edge is added.
    pub fn inverse(self) -> EdgeKind {
        match self {
            EdgeKind::InheritedFrom => EdgeKind::InheritedBy,
            EdgeKind::BorrowedFrom => EdgeKind::BorrowedBy,
            EdgeKind::DerivedFrom => EdgeKind::DerivesTo,
            EdgeKind::HasRoot => EdgeKind::RootOf,
            EdgeKind::HasAffix => EdgeKind::AffixOf,
            EdgeKind::CognateOf => EdgeKind::CognateOf,
            EdgeKind::RelatedTo => EdgeKind::RelatedTo,
            EdgeKind::InheritedBy => EdgeKind::InheritedFrom,
            EdgeKind::BorrowedBy => EdgeKind::BorrowedFrom,
            EdgeKind::DerivesTo => EdgeKind::DerivedFrom,
            EdgeKind::RootOf => EdgeKind::HasRoot,
            EdgeKind::AffixOf => EdgeKind::HasAffix,
        }
    }

    pub fn is_forward(self) -> bool {
        Self::FORWARD.contains(&self)
    }

    pub fn is_symmetric(self) -> bool {
        self.inverse() == self
    }

    /// Dataset spelling of the relation.
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::InheritedFrom => "inherited_from",
            EdgeKind::BorrowedFrom => "borrowed_from",
            EdgeKind::DerivedFrom => "derived_from",
            EdgeKind::HasRoot => "has_root",
            EdgeKind::HasAffix => "has_affix",
            EdgeKind::CognateOf => "cognate_of",
            EdgeKind::RelatedTo => "etymologically_related_to",
            EdgeKind::InheritedBy => "inherited_by",
            EdgeKind::BorrowedBy => "borrowed_by",
            EdgeKind::DerivesTo => "derives_to",
            EdgeKind::RootOf => "root_of",
            EdgeKind::AffixOf => "affix_of",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
