//! Parent index - first pass over the claims
//!
//! Collects explicit Father/Mother claims so that grandparent, sibling and
//! uncle/aunt claims can chain through a known parent. Built once from the
//! complete claim set and read-only afterwards.

use kinship_domain::{Lineage, PersonId, RelationType, RelationshipClaim};
use std::collections::HashMap;
use tracing::debug;

/// Claimed father and mother per person
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    father_of: HashMap<PersonId, PersonId>,
    mother_of: HashMap<PersonId, PersonId>,
    overwrites: usize,
}

impl ParentIndex {
    /// Build the index from claims in input order
    ///
    /// A second Father (or Mother) claim from the same person replaces the
    /// first one.
    pub fn build<'a>(claims: impl IntoIterator<Item = &'a RelationshipClaim>) -> Self {
        let mut index = Self::default();

        for claim in claims {
            let map = match claim.relation() {
                Some(RelationType::Father) => &mut index.father_of,
                Some(RelationType::Mother) => &mut index.mother_of,
                _ => continue,
            };

            if let Some(previous) = map.insert(claim.from_id, claim.to_id) {
                if previous != claim.to_id {
                    debug!(
                        person = %claim.from_id,
                        previous = %previous,
                        replacement = %claim.to_id,
                        relation = %claim.relation_type,
                        "Parent claim overwritten"
                    );
                    index.overwrites += 1;
                }
            }
        }

        index
    }

    /// Claimed father of `person`
    pub fn father_of(&self, person: PersonId) -> Option<PersonId> {
        self.father_of.get(&person).copied()
    }

    /// Claimed mother of `person`
    pub fn mother_of(&self, person: PersonId) -> Option<PersonId> {
        self.mother_of.get(&person).copied()
    }

    /// Father if known, else mother
    pub fn any_parent_of(&self, person: PersonId) -> Option<PersonId> {
        self.father_of(person).or_else(|| self.mother_of(person))
    }

    /// Parent a grandparent claim of the given lineage chains through
    pub fn chaining_parent(&self, person: PersonId, lineage: Lineage) -> Option<PersonId> {
        match lineage {
            Lineage::Paternal => self.father_of(person),
            Lineage::Maternal => self.mother_of(person),
            Lineage::Either => self.any_parent_of(person),
        }
    }

    /// Number of Father/Mother claims that replaced a different earlier one
    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u64) -> PersonId {
        PersonId::new(value)
    }

    #[test]
    fn test_collects_fathers_and_mothers() {
        let claims = vec![
            RelationshipClaim::new(3, 1, "Father"),
            RelationshipClaim::new(3, 2, "Mother"),
            RelationshipClaim::new(3, 4, "Brother"),
        ];
        let index = ParentIndex::build(&claims);

        assert_eq!(index.father_of(id(3)), Some(id(1)));
        assert_eq!(index.mother_of(id(3)), Some(id(2)));
        assert_eq!(index.father_of(id(4)), None);
    }

    #[test]
    fn test_last_claim_wins() {
        let claims = vec![
            RelationshipClaim::new(3, 1, "Father"),
            RelationshipClaim::new(3, 5, "Father"),
        ];
        let index = ParentIndex::build(&claims);

        assert_eq!(index.father_of(id(3)), Some(id(5)));
        assert_eq!(index.overwrites(), 1);
    }

    #[test]
    fn test_repeated_identical_claim_is_not_an_overwrite() {
        let claims = vec![
            RelationshipClaim::new(3, 1, "Father"),
            RelationshipClaim::new(3, 1, "father"),
        ];
        let index = ParentIndex::build(&claims);

        assert_eq!(index.overwrites(), 0);
    }

    #[test]
    fn test_chaining_parent_by_lineage() {
        let claims = vec![RelationshipClaim::new(3, 2, "Mother")];
        let index = ParentIndex::build(&claims);

        assert_eq!(index.chaining_parent(id(3), Lineage::Paternal), None);
        assert_eq!(index.chaining_parent(id(3), Lineage::Maternal), Some(id(2)));
        assert_eq!(index.chaining_parent(id(3), Lineage::Either), Some(id(2)));
    }

    #[test]
    fn test_either_prefers_father() {
        let claims = vec![
            RelationshipClaim::new(3, 2, "Mother"),
            RelationshipClaim::new(3, 1, "Father"),
        ];
        let index = ParentIndex::build(&claims);

        assert_eq!(index.any_parent_of(id(3)), Some(id(1)));
    }
}
