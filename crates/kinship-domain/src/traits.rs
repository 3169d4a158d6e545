//! Trait definitions for external interactions
//!
//! The resolution engine never talks to storage itself. Whatever owns the
//! person directory implements [`FamilySource`] and hands the records over.

use crate::{ParentEdge, Person, RelationshipClaim};

/// Trait for supplying the records a resolution run works on
///
/// Implemented by the collaborator that owns the directory (a database
/// layer, a JSON document on disk, a test fixture).
pub trait FamilySource {
    /// Error type for fetch operations
    type Error;

    /// All person records
    fn persons(&self) -> Result<Vec<Person>, Self::Error>;

    /// Materialized parent/child pairs, if the store keeps any
    fn parent_edges(&self) -> Result<Vec<ParentEdge>, Self::Error> {
        Ok(Vec::new())
    }

    /// All relationship claims, in the store's iteration order
    fn claims(&self) -> Result<Vec<RelationshipClaim>, Self::Error>;
}
