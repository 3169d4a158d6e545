//! Error types for resolution runs

use kinship_domain::PersonId;
use thiserror::Error;

/// Errors that can stop a resolution run before it starts
///
/// Only the input's shape can fail a run. Contradictory or incomplete
/// relationship data degrades to a partial graph instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Malformed document or a record missing a required field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two person records share an id
    #[error("Duplicate person record: {0}")]
    DuplicatePerson(PersonId),

    /// A person record has a blank name
    #[error("Person {0} has an empty name")]
    EmptyName(PersonId),

    /// The same claim triple appears twice (strict mode only)
    #[error("Duplicate claim: {from} -> {relation} -> {to}")]
    DuplicateClaim {
        /// Claimant
        from: PersonId,
        /// Described person
        to: PersonId,
        /// Relation label
        relation: String,
    },

    /// The record source failed to deliver
    #[error("Source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
