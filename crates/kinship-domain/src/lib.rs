//! Kinship Domain Layer
//!
//! This crate contains the value types shared by every other Kinship crate.
//! It carries no resolution logic; it only defines what a person, a
//! relationship claim and a canonical family-tree link are.
//!
//! ## Key Concepts
//!
//! - **Person**: A record owned by the external directory store
//! - **Claim**: "from says to is their <relation type>", a directed, typed assertion
//! - **Relation Type Catalog**: Static classification of every claim label into a category
//! - **Canonical Link**: A deduplicated `parent`/`spouse`/`sibling`/generic edge of the tree
//!
//! ## Architecture
//!
//! - Serde derives only, no other external dependencies
//! - Trait definitions for the store boundary live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod link;
pub mod person;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use claim::{ParentEdge, RelationshipClaim};
pub use link::{CanonicalLink, LinkKey, LinkKind};
pub use person::{Gender, Person, PersonId};
pub use relation::{Category, Lineage, RelationType};
