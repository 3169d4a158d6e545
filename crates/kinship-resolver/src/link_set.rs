//! Link deduplicator
//!
//! Keeps emitted links in insertion order and rejects any link whose
//! canonical key is already present. Dedup happens on insert so later
//! phases always read a duplicate-free set.

use kinship_domain::{CanonicalLink, LinkKey, LinkKind, PersonId};
use std::collections::{HashMap, HashSet};

/// Outcome of offering a link to the set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insert {
    /// The link was new and has been kept
    Added,

    /// A link with the same key is already present
    Duplicate,

    /// Both endpoints are the same person; not kept
    SelfLink,
}

/// Deduplicated, insertion-ordered link list
///
/// Also maintains the reverse parent index (child → parents) that
/// uncle/aunt chaining and co-parent inference read.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    links: Vec<CanonicalLink>,
    keys: HashSet<LinkKey>,
    parents_of: HashMap<PersonId, Vec<PersonId>>,
}

impl LinkSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a link
    pub fn insert(&mut self, link: CanonicalLink) -> Insert {
        if link.is_self_link() {
            return Insert::SelfLink;
        }
        if !self.keys.insert(link.key()) {
            return Insert::Duplicate;
        }

        if link.kind == LinkKind::Parent {
            self.parents_of
                .entry(link.target)
                .or_default()
                .push(link.source);
        }
        self.links.push(link);
        Insert::Added
    }

    /// True if a link with the same key is present
    pub fn contains(&self, link: &CanonicalLink) -> bool {
        self.keys.contains(&link.key())
    }

    /// Resolved parents of `child`, in the order their links were added
    pub fn parents_of(&self, child: PersonId) -> &[PersonId] {
        self.parents_of
            .get(&child)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every child with its resolved parents, ordered by child id
    pub fn families(&self) -> Vec<(PersonId, &[PersonId])> {
        let mut families: Vec<_> = self
            .parents_of
            .iter()
            .map(|(child, parents)| (*child, parents.as_slice()))
            .collect();
        families.sort_by_key(|(child, _)| *child);
        families
    }

    /// Number of links kept
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if no link has been kept
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterate links in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CanonicalLink> {
        self.links.iter()
    }

    /// Consume the set, returning links in insertion order
    pub fn into_links(self) -> Vec<CanonicalLink> {
        self.links
    }
}
