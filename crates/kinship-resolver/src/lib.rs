//! Kinship Resolver
//!
//! Turns a flat list of relationship claims into a deduplicated family-tree
//! graph ready for visualization.
//!
//! # Overview
//!
//! Each claim says "`from` says `to` is their <relation type>". The resolver
//! is responsible for:
//! - **Parent index**: Deriving everyone's father and mother from Father/Mother claims
//! - **Link resolution**: Rewriting each claim into at most one canonical link
//!   (`parent`, `spouse`, `sibling`, `grandson`, `granddaughter` or a generic label)
//! - **Deduplication**: Keeping one link per canonical key
//! - **Co-parent inference**: Marrying two people who share a child
//! - **Graph assembly**: Producing the `{nodes, links}` document
//!
//! # Resolution Rules
//!
//! | Category | Labels | Link |
//! |----------|--------|------|
//! | direct-parent | Father, Mother | `parent(to, from)` |
//! | direct-child | Son, Daughter | `parent(from, to)` |
//! | grandparent | (Paternal/Maternal) Grandfather/Grandmother | `parent(to, parent of from)` |
//! | grandchild | Grandson, Granddaughter | `grandson/granddaughter(from, to)` |
//! | spouse | Spouse | `spouse(from, to)` |
//! | sibling | Brother, Sister | `parent(parent of from, to)`, else `sibling(from, to)` |
//! | in-law-sibling-spouse | Sister-in-law, Brother-in-law | `spouse(from's brother/sister, to)` |
//! | uncle-aunt | Uncle, Aunt | `parent(from's grandparent, to)` |
//! | cousin | Cousin | `parent(from's uncle/aunt, to)` |
//! | parent-in-law | Father-in-law, Mother-in-law | `parent(to, from's spouse)` |
//! | child-in-law | Son-in-law, Daughter-in-law | `spouse(from's child, to)` |
//! | nephew-niece | Nephew, Niece | `parent(from's sibling, to)` |
//! | unclassified | anything else | `<label>(from, to)` |
//!
//! # Usage
//!
//! ```
//! use kinship_resolver::{FamilyInput, Resolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = FamilyInput::from_json(
//!     r#"{
//!         "persons": [
//!             {"id": 1, "name": "Joseph", "gender": "M"},
//!             {"id": 2, "name": "Mary", "gender": "F"},
//!             {"id": 3, "name": "Tom", "gender": "M"}
//!         ],
//!         "claims": [
//!             {"fromId": 3, "toId": 1, "relationType": "Father"},
//!             {"fromId": 3, "toId": 2, "relationType": "Mother"}
//!         ]
//!     }"#,
//! )?;
//!
//! let resolution = Resolver::default_config().resolve(&input)?;
//!
//! // Two parent links plus the inferred marriage of the co-parents
//! assert_eq!(resolution.links.len(), 3);
//! println!("{}", resolution.tree.to_json(true)?);
//! println!("{}", resolution.metrics.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration Presets
//!
//! ```
//! use kinship_resolver::ResolverConfig;
//!
//! // Default: prerequisites must precede the dependent claim
//! let config = ResolverConfig::default();
//!
//! // Strict: also rejects repeated claims
//! let config = ResolverConfig::strict();
//!
//! // Permissive: prerequisites may appear anywhere in the claim list
//! let config = ResolverConfig::permissive();
//! ```
//!
//! # Configuration
//!
//! The resolver can be configured via TOML:
//!
//! ```toml
//! [resolver]
//! prerequisite_scope = "preceding"
//! infer_co_parents = true
//! emit_generic_links = true
//! reject_duplicate_claims = false
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod claim_index;
mod config;
mod coparent;
mod error;
mod graph;
mod input;
mod link_set;
mod metrics;
mod parent_index;
mod resolver;

pub use claim_index::ClaimIndex;
pub use config::{PrerequisiteScope, ResolverConfig};
pub use coparent::infer_co_parents;
pub use error::ResolveError;
pub use graph::{FamilyTree, TreeLink, TreeNode};
pub use input::FamilyInput;
pub use link_set::{Insert, LinkSet};
pub use metrics::ResolutionMetrics;
pub use parent_index::ParentIndex;
pub use resolver::{Resolution, Resolver};
