//! Canonical link module - the edge vocabulary of the rendered family tree

use crate::PersonId;
use std::fmt;

/// Type of a canonical link
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Directed parent → child
    Parent,

    /// Marriage, undirected
    Spouse,

    /// Siblings with no known shared parent, undirected
    Sibling,

    /// Grandparent → grandson, as claimed (never chained)
    Grandson,

    /// Grandparent → granddaughter, as claimed (never chained)
    Granddaughter,

    /// Fallback for labels outside the catalog (lowercased label)
    Generic(String),
}

impl LinkKind {
    /// Get the link type as written in the output document
    pub fn as_str(&self) -> &str {
        match self {
            LinkKind::Parent => "parent",
            LinkKind::Spouse => "spouse",
            LinkKind::Sibling => "sibling",
            LinkKind::Grandson => "grandson",
            LinkKind::Granddaughter => "granddaughter",
            LinkKind::Generic(label) => label,
        }
    }

    /// Whether endpoint order is significant for deduplication
    pub fn is_directed(&self) -> bool {
        matches!(
            self,
            LinkKind::Parent | LinkKind::Grandson | LinkKind::Granddaughter
        )
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplication key of a link
///
/// Endpoints are order-normalized (`first <= second`) for undirected kinds
/// and kept as-is for directed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    /// First endpoint
    pub first: PersonId,

    /// Second endpoint
    pub second: PersonId,

    /// Link type
    pub kind: LinkKind,
}

/// A canonical link of the output graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalLink {
    /// Source endpoint (the parent for `Parent` links)
    pub source: PersonId,

    /// Target endpoint (the child for `Parent` links)
    pub target: PersonId,

    /// Link type
    pub kind: LinkKind,
}

impl CanonicalLink {
    /// Create a link with the endpoints exactly as given
    pub fn new(source: PersonId, target: PersonId, kind: LinkKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// `parent` is a parent of `child`
    pub fn parent(parent: PersonId, child: PersonId) -> Self {
        Self::new(parent, child, LinkKind::Parent)
    }

    /// Marriage between `a` and `b`, stored as a sorted pair
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::{CanonicalLink, PersonId};
    ///
    /// let link = CanonicalLink::spouse(PersonId::new(9), PersonId::new(2));
    /// assert_eq!(link.source, PersonId::new(2));
    /// assert_eq!(link, CanonicalLink::spouse(PersonId::new(2), PersonId::new(9)));
    /// ```
    pub fn spouse(a: PersonId, b: PersonId) -> Self {
        Self::new(a.min(b), a.max(b), LinkKind::Spouse)
    }

    /// Siblings `a` and `b`, stored as a sorted pair
    pub fn sibling(a: PersonId, b: PersonId) -> Self {
        Self::new(a.min(b), a.max(b), LinkKind::Sibling)
    }

    /// Fallback link carrying the lowercased claim label
    pub fn generic(from: PersonId, to: PersonId, label: &str) -> Self {
        Self::new(from, to, LinkKind::Generic(label.trim().to_lowercase()))
    }

    /// Deduplication key for this link
    pub fn key(&self) -> LinkKey {
        let (first, second) = if self.kind.is_directed() {
            (self.source, self.target)
        } else {
            (self.source.min(self.target), self.source.max(self.target))
        };

        LinkKey {
            first,
            second,
            kind: self.kind.clone(),
        }
    }

    /// True if both endpoints are the same person
    pub fn is_self_link(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for CanonicalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.kind, self.source, self.target)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: undirected keys are symmetric in their endpoints
        #[test]
        fn test_undirected_key_symmetry(a: u64, b: u64) {
            let (a, b) = (PersonId::new(a), PersonId::new(b));

            prop_assert_eq!(CanonicalLink::spouse(a, b).key(), CanonicalLink::spouse(b, a).key());
            prop_assert_eq!(CanonicalLink::sibling(a, b).key(), CanonicalLink::sibling(b, a).key());
            prop_assert_eq!(
                CanonicalLink::generic(a, b, "friend").key(),
                CanonicalLink::generic(b, a, "friend").key()
            );
        }

        /// Property: sorted constructors always produce source <= target
        #[test]
        fn test_sorted_pairs(a: u64, b: u64) {
            let link = CanonicalLink::spouse(PersonId::new(a), PersonId::new(b));
            prop_assert!(link.source <= link.target);
        }
    }
}
