//! Input document and boundary validation

use crate::{ResolveError, ResolverConfig};
use kinship_domain::traits::FamilySource;
use kinship_domain::{ParentEdge, Person, PersonId, RelationshipClaim};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything a resolution run consumes
///
/// Wire format:
///
/// ```json
/// {
///   "persons": [{"id": 1, "name": "Anna", "gender": "F"}],
///   "parentEdges": [{"parentId": 1, "childId": 2}],
///   "claims": [{"fromId": 2, "toId": 1, "relationType": "Mother"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyInput {
    /// Person records
    pub persons: Vec<Person>,

    /// Already materialized parent/child pairs
    #[serde(default)]
    pub parent_edges: Vec<ParentEdge>,

    /// Relationship claims, in store order
    #[serde(default)]
    pub claims: Vec<RelationshipClaim>,
}

impl FamilyInput {
    /// Create an input with persons only
    pub fn new(persons: Vec<Person>) -> Self {
        Self {
            persons,
            parent_edges: Vec::new(),
            claims: Vec::new(),
        }
    }

    /// Replace the claims
    pub fn with_claims(mut self, claims: Vec<RelationshipClaim>) -> Self {
        self.claims = claims;
        self
    }

    /// Replace the parent edges
    pub fn with_parent_edges(mut self, parent_edges: Vec<ParentEdge>) -> Self {
        self.parent_edges = parent_edges;
        self
    }

    /// Parse an input document
    ///
    /// A missing required field on any record is an
    /// [`ResolveError::InvalidInput`].
    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        serde_json::from_str(json).map_err(|e| ResolveError::InvalidInput(e.to_string()))
    }

    /// Fetch all records from a source
    pub fn from_source<S: FamilySource>(source: &S) -> Result<Self, ResolveError>
    where
        S::Error: std::fmt::Display,
    {
        let map_err = |e: S::Error| ResolveError::Source(e.to_string());

        Ok(Self {
            persons: source.persons().map_err(map_err)?,
            parent_edges: source.parent_edges().map_err(map_err)?,
            claims: source.claims().map_err(map_err)?,
        })
    }

    /// Ids of every person record
    pub fn person_ids(&self) -> HashSet<PersonId> {
        self.persons.iter().map(|p| p.id).collect()
    }

    /// Check the record shapes before any resolution starts
    ///
    /// Rejects duplicate person ids, blank names and blank relation labels;
    /// with `reject_duplicate_claims` also repeated claim triples. Claims that
    /// point at unknown persons are not an error here.
    pub fn validate(&self, config: &ResolverConfig) -> Result<(), ResolveError> {
        let mut seen = HashSet::with_capacity(self.persons.len());
        for person in &self.persons {
            if !seen.insert(person.id) {
                return Err(ResolveError::DuplicatePerson(person.id));
            }
            if person.name.trim().is_empty() {
                return Err(ResolveError::EmptyName(person.id));
            }
        }

        for (idx, claim) in self.claims.iter().enumerate() {
            if claim.relation_type.trim().is_empty() {
                return Err(ResolveError::InvalidInput(format!(
                    "claim {} ({} -> {}) has an empty relationType",
                    idx, claim.from_id, claim.to_id
                )));
            }
        }

        if config.reject_duplicate_claims {
            let mut triples = HashSet::with_capacity(self.claims.len());
            for claim in &self.claims {
                if !triples.insert((claim.from_id, claim.to_id, claim.relation_type.as_str())) {
                    return Err(ResolveError::DuplicateClaim {
                        from: claim.from_id,
                        to: claim.to_id,
                        relation: claim.relation_type.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::Gender;

    fn persons() -> Vec<Person> {
        vec![
            Person::new(1, "Anna", Gender::Female),
            Person::new(2, "Ben", Gender::Male),
        ]
    }

    #[test]
    fn test_from_json_defaults_optional_sections() {
        let input = FamilyInput::from_json(r#"{"persons": [{"id": 1, "name": "Anna", "gender": "F"}]}"#)
            .unwrap();

        assert_eq!(input.persons.len(), 1);
        assert!(input.claims.is_empty());
        assert!(input.parent_edges.is_empty());
    }

    #[test]
    fn test_from_json_missing_field() {
        let result = FamilyInput::from_json(
            r#"{"persons": [], "claims": [{"fromId": 1, "relationType": "Father"}]}"#,
        );
        assert!(matches!(result, Err(ResolveError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_duplicate_person() {
        let mut people = persons();
        people.push(Person::new(1, "Anna again", Gender::Female));

        let result = FamilyInput::new(people).validate(&ResolverConfig::default());
        assert!(matches!(result, Err(ResolveError::DuplicatePerson(id)) if id == PersonId::new(1)));
    }

    #[test]
    fn test_validate_empty_name() {
        let people = vec![Person::new(4, "  ", Gender::Other)];

        let result = FamilyInput::new(people).validate(&ResolverConfig::default());
        assert!(matches!(result, Err(ResolveError::EmptyName(_))));
    }

    #[test]
    fn test_validate_empty_relation_label() {
        let input = FamilyInput::new(persons()).with_claims(vec![RelationshipClaim::new(1, 2, "")]);

        let result = input.validate(&ResolverConfig::default());
        assert!(matches!(result, Err(ResolveError::InvalidInput(_))));
    }

    #[test]
    fn test_dangling_claim_passes_validation() {
        let input =
            FamilyInput::new(persons()).with_claims(vec![RelationshipClaim::new(1, 99, "Father")]);

        assert!(input.validate(&ResolverConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_claims_only_rejected_when_strict() {
        let claim = RelationshipClaim::new(1, 2, "Spouse");
        let input = FamilyInput::new(persons()).with_claims(vec![claim.clone(), claim]);

        assert!(input.validate(&ResolverConfig::default()).is_ok());
        assert!(matches!(
            input.validate(&ResolverConfig::strict()),
            Err(ResolveError::DuplicateClaim { .. })
        ));
    }

    struct FailingSource;

    impl FamilySource for FailingSource {
        type Error = String;

        fn persons(&self) -> Result<Vec<Person>, Self::Error> {
            Err("connection refused".to_string())
        }

        fn claims(&self) -> Result<Vec<RelationshipClaim>, Self::Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_from_source_error() {
        let result = FamilyInput::from_source(&FailingSource);
        assert!(matches!(result, Err(ResolveError::Source(msg)) if msg == "connection refused"));
    }
}
