//! Claim lookup by claimant and relation type
//!
//! Dependent categories ask "the first claim from X of type Y". The index
//! answers that without rescanning the claim list.

use crate::PrerequisiteScope;
use kinship_domain::{PersonId, RelationType, RelationshipClaim};
use std::collections::HashMap;

/// Positions of every classified claim, keyed by claimant and relation type
#[derive(Debug)]
pub struct ClaimIndex<'a> {
    claims: &'a [RelationshipClaim],
    positions: HashMap<(PersonId, RelationType), Vec<usize>>,
}

impl<'a> ClaimIndex<'a> {
    /// Index a claim list; positions refer to this list's order
    pub fn build(claims: &'a [RelationshipClaim]) -> Self {
        let mut positions: HashMap<(PersonId, RelationType), Vec<usize>> = HashMap::new();

        for (pos, claim) in claims.iter().enumerate() {
            if let Some(relation) = claim.relation() {
                positions
                    .entry((claim.from_id, relation))
                    .or_default()
                    .push(pos);
            }
        }

        Self { claims, positions }
    }

    /// First claim from `from` with one of `relations`
    ///
    /// Under [`PrerequisiteScope::Preceding`] only claims before position
    /// `current` qualify.
    pub fn first_from(
        &self,
        from: PersonId,
        relations: &[RelationType],
        current: usize,
        scope: PrerequisiteScope,
    ) -> Option<&'a RelationshipClaim> {
        let claims = self.claims;

        relations
            .iter()
            .filter_map(|relation| self.positions.get(&(from, *relation)))
            .filter_map(|positions| positions.first().copied())
            .filter(|&pos| match scope {
                PrerequisiteScope::Preceding => pos < current,
                PrerequisiteScope::Complete => true,
            })
            .min()
            .map(|pos| &claims[pos])
    }
}
