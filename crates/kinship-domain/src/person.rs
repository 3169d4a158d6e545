//! Person module - directory records as supplied by the external store

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a person record in the external directory store
///
/// Identifiers are assigned by the store; the engine never mints them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    /// Create a PersonId from the raw store value
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PersonId;
    ///
    /// let id = PersonId::new(42);
    /// assert_eq!(id.value(), 42);
    /// ```
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recorded gender of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    #[serde(rename = "M")]
    Male,

    /// Female
    #[serde(rename = "F")]
    Female,

    /// Other / unspecified
    #[serde(rename = "O")]
    Other,
}

impl Gender {
    /// Get the single-letter code used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other => "O",
        }
    }
}

/// A person record
///
/// Owned by the external store and immutable for the duration of a
/// resolution run. Only `id`, `name` and `gender` are required; everything
/// else is demographic detail that is projected into the output node as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Store identifier
    pub id: PersonId,

    /// Display name
    pub name: String,

    /// Recorded gender
    pub gender: Gender,

    /// Date of birth as recorded (ISO date string)
    #[serde(default)]
    pub date_of_birth: Option<String>,

    /// Age in years, if recorded
    #[serde(default)]
    pub age: Option<u32>,

    /// Occupation
    #[serde(default)]
    pub occupation: Option<String>,

    /// Education
    #[serde(default)]
    pub education: Option<String>,

    /// Place of work
    #[serde(default)]
    pub place_of_work: Option<String>,

    /// Location (address if different from the family's)
    #[serde(default)]
    pub location: Option<String>,

    /// Blood group
    #[serde(default)]
    pub blood_group: Option<String>,

    /// Photo reference (URL or media path)
    #[serde(default)]
    pub photo_url: Option<String>,

    /// Committee role title, if the person sits on a committee
    #[serde(default)]
    pub role: Option<String>,

    /// Default relation label recorded for the member (e.g. "Head")
    #[serde(default)]
    pub relation: Option<String>,

    /// Login name of the linked user account, if any
    #[serde(default)]
    pub username: Option<String>,

    /// Whether the person is deceased
    #[serde(default)]
    pub is_deceased: bool,
}

impl Person {
    /// Create a person with only the required fields set
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender,
            date_of_birth: None,
            age: None,
            occupation: None,
            education: None,
            place_of_work: None,
            location: None,
            blood_group: None,
            photo_url: None,
            role: None,
            relation: None,
            username: None,
            is_deceased: false,
        }
    }

    /// Label shown for the person in the tree
    ///
    /// The committee role wins; otherwise the recorded relation label, and
    /// `"Other"` when neither is set.
    pub fn display_role(&self) -> &str {
        self.role
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(self.relation.as_deref())
            .unwrap_or("Other")
    }

    /// True if the person holds a committee role
    pub fn is_committee(&self) -> bool {
        self.role.as_deref().is_some_and(|r| !r.is_empty())
    }
}
