//! Resolver configuration

use crate::ResolveError;
use serde::{Deserialize, Serialize};

/// Which claims a dependent category may consult
///
/// Cousin, in-law and nephew/niece claims resolve through another claim
/// from the same claimant (an uncle, a spouse, a sibling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrerequisiteScope {
    /// Only claims earlier in input order; a prerequisite that arrives later
    /// leaves the dependent claim unresolved
    Preceding,

    /// Any claim of the run
    Complete,
}

impl Default for PrerequisiteScope {
    fn default() -> Self {
        PrerequisiteScope::Preceding
    }
}

/// Configuration for a resolution run
///
/// # Examples
///
/// ```
/// use kinship_resolver::{PrerequisiteScope, ResolverConfig};
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.prerequisite_scope, PrerequisiteScope::Preceding);
///
/// let config = ResolverConfig::from_toml("prerequisite_scope = \"complete\"").unwrap();
/// assert_eq!(config.prerequisite_scope, PrerequisiteScope::Complete);
/// assert!(config.infer_co_parents);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Claims visible to dependent categories
    /// Default: preceding
    pub prerequisite_scope: PrerequisiteScope,

    /// Add spouse links between two parents of the same child
    /// Default: true
    pub infer_co_parents: bool,

    /// Keep links for labels outside the catalog
    /// Default: true
    pub emit_generic_links: bool,

    /// Fail the run when a `(from, to, relation)` triple repeats
    /// Default: false (duplicates collapse during deduplication)
    pub reject_duplicate_claims: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prerequisite_scope: PrerequisiteScope::Preceding,
            infer_co_parents: true,
            emit_generic_links: true,
            reject_duplicate_claims: false,
        }
    }
}

impl ResolverConfig {
    /// Strict preset: repeated claim triples are rejected at the boundary
    pub fn strict() -> Self {
        Self {
            reject_duplicate_claims: true,
            ..Self::default()
        }
    }

    /// Permissive preset: dependent categories see every claim of the run
    pub fn permissive() -> Self {
        Self {
            prerequisite_scope: PrerequisiteScope::Complete,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys take their default values.
    pub fn from_toml(toml_str: &str) -> Result<Self, ResolveError> {
        toml::from_str(toml_str)
            .map_err(|e| ResolveError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ResolveError> {
        toml::to_string_pretty(self)
            .map_err(|e| ResolveError::Config(format!("Failed to serialize TOML: {}", e)))
    }
}
