//! Relation type catalog - static classification of claim labels
//!
//! Every label a claim can carry maps to exactly one [`Category`]. Labels
//! outside the catalog are [`Category::Unclassified`]; the lookup is total.

use crate::Gender;
use std::fmt;

/// Which parent a grandparent claim chains through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    /// Father's side
    Paternal,

    /// Mother's side
    Maternal,

    /// Unspecified side: father if known, else mother
    Either,
}

/// Resolution category of a relation label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Father / Mother
    DirectParent,

    /// Son / Daughter
    DirectChild,

    /// Grandfather / Grandmother and their paternal/maternal variants
    Grandparent(Lineage),

    /// Grandson / Granddaughter
    Grandchild,

    /// Spouse
    Spouse,

    /// Brother / Sister
    Sibling,

    /// Sister-in-law / Brother-in-law (a sibling's spouse)
    InLawSiblingSpouse,

    /// Uncle / Aunt
    UncleAunt,

    /// Cousin
    Cousin,

    /// Father-in-law / Mother-in-law
    ParentInLaw,

    /// Son-in-law / Daughter-in-law
    ChildInLaw,

    /// Nephew / Niece
    NephewNiece,

    /// Anything else, including the explicit "Other" label
    Unclassified,
}

impl Category {
    /// Classify a raw label
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::{Category, Lineage};
    ///
    /// assert_eq!(Category::of("Maternal Grandmother"), Category::Grandparent(Lineage::Maternal));
    /// assert_eq!(Category::of("Godparent"), Category::Unclassified);
    /// ```
    pub fn of(label: &str) -> Self {
        RelationType::parse(label).map_or(Category::Unclassified, |r| r.category())
    }

    /// Short name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DirectParent => "direct-parent",
            Category::DirectChild => "direct-child",
            Category::Grandparent(_) => "grandparent",
            Category::Grandchild => "grandchild",
            Category::Spouse => "spouse",
            Category::Sibling => "sibling",
            Category::InLawSiblingSpouse => "in-law-sibling-spouse",
            Category::UncleAunt => "uncle-aunt",
            Category::Cousin => "cousin",
            Category::ParentInLaw => "parent-in-law",
            Category::ChildInLaw => "child-in-law",
            Category::NephewNiece => "nephew-niece",
            Category::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation label known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationType {
    /// Father
    Father,
    /// Mother
    Mother,
    /// Son
    Son,
    /// Daughter
    Daughter,
    /// Spouse
    Spouse,
    /// Brother
    Brother,
    /// Sister
    Sister,
    /// Grandfather (side unspecified)
    Grandfather,
    /// Grandmother (side unspecified)
    Grandmother,
    /// Father's father
    PaternalGrandfather,
    /// Father's mother
    PaternalGrandmother,
    /// Mother's father
    MaternalGrandfather,
    /// Mother's mother
    MaternalGrandmother,
    /// Grandson
    Grandson,
    /// Granddaughter
    Granddaughter,
    /// Uncle
    Uncle,
    /// Aunt
    Aunt,
    /// Nephew
    Nephew,
    /// Niece
    Niece,
    /// Cousin
    Cousin,
    /// Spouse's father
    FatherInLaw,
    /// Spouse's mother
    MotherInLaw,
    /// Child's husband
    SonInLaw,
    /// Child's wife
    DaughterInLaw,
    /// Sister's husband
    BrotherInLaw,
    /// Brother's wife
    SisterInLaw,
    /// Explicitly unclassified relation
    Other,
}

impl RelationType {
    /// Every catalog entry, in catalog order
    pub const ALL: [RelationType; 27] = [
        RelationType::Father,
        RelationType::Mother,
        RelationType::Son,
        RelationType::Daughter,
        RelationType::Spouse,
        RelationType::Brother,
        RelationType::Sister,
        RelationType::Grandfather,
        RelationType::Grandmother,
        RelationType::PaternalGrandfather,
        RelationType::PaternalGrandmother,
        RelationType::MaternalGrandfather,
        RelationType::MaternalGrandmother,
        RelationType::Grandson,
        RelationType::Granddaughter,
        RelationType::Uncle,
        RelationType::Aunt,
        RelationType::Nephew,
        RelationType::Niece,
        RelationType::Cousin,
        RelationType::FatherInLaw,
        RelationType::MotherInLaw,
        RelationType::SonInLaw,
        RelationType::DaughterInLaw,
        RelationType::BrotherInLaw,
        RelationType::SisterInLaw,
        RelationType::Other,
    ];

    /// Get the label as recorded by the store
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Father => "Father",
            RelationType::Mother => "Mother",
            RelationType::Son => "Son",
            RelationType::Daughter => "Daughter",
            RelationType::Spouse => "Spouse",
            RelationType::Brother => "Brother",
            RelationType::Sister => "Sister",
            RelationType::Grandfather => "Grandfather",
            RelationType::Grandmother => "Grandmother",
            RelationType::PaternalGrandfather => "Paternal Grandfather",
            RelationType::PaternalGrandmother => "Paternal Grandmother",
            RelationType::MaternalGrandfather => "Maternal Grandfather",
            RelationType::MaternalGrandmother => "Maternal Grandmother",
            RelationType::Grandson => "Grandson",
            RelationType::Granddaughter => "Granddaughter",
            RelationType::Uncle => "Uncle",
            RelationType::Aunt => "Aunt",
            RelationType::Nephew => "Nephew",
            RelationType::Niece => "Niece",
            RelationType::Cousin => "Cousin",
            RelationType::FatherInLaw => "Father-in-law",
            RelationType::MotherInLaw => "Mother-in-law",
            RelationType::SonInLaw => "Son-in-law",
            RelationType::DaughterInLaw => "Daughter-in-law",
            RelationType::BrotherInLaw => "Brother-in-law",
            RelationType::SisterInLaw => "Sister-in-law",
            RelationType::Other => "Other",
        }
    }

    /// Parse a label (surrounding whitespace and ASCII case are ignored)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
    }

    /// Resolution category of this relation
    pub fn category(&self) -> Category {
        use RelationType::*;

        match self {
            Father | Mother => Category::DirectParent,
            Son | Daughter => Category::DirectChild,
            Grandfather | Grandmother => Category::Grandparent(Lineage::Either),
            PaternalGrandfather | PaternalGrandmother => Category::Grandparent(Lineage::Paternal),
            MaternalGrandfather | MaternalGrandmother => Category::Grandparent(Lineage::Maternal),
            Grandson | Granddaughter => Category::Grandchild,
            Spouse => Category::Spouse,
            Brother | Sister => Category::Sibling,
            SisterInLaw | BrotherInLaw => Category::InLawSiblingSpouse,
            Uncle | Aunt => Category::UncleAunt,
            Cousin => Category::Cousin,
            FatherInLaw | MotherInLaw => Category::ParentInLaw,
            SonInLaw | DaughterInLaw => Category::ChildInLaw,
            Nephew | Niece => Category::NephewNiece,
            Other => Category::Unclassified,
        }
    }

    /// Gender implied by the label, used to pre-fill new member records
    pub fn implied_gender(&self) -> Option<Gender> {
        use RelationType::*;

        match self {
            Father | Son | Brother | Grandfather | PaternalGrandfather | MaternalGrandfather
            | Grandson | Uncle | Nephew | FatherInLaw | SonInLaw | BrotherInLaw => {
                Some(Gender::Male)
            }
            Mother | Daughter | Sister | Grandmother | PaternalGrandmother
            | MaternalGrandmother | Granddaughter | Aunt | Niece | MotherInLaw
            | DaughterInLaw | SisterInLaw => Some(Gender::Female),
            Spouse | Cousin | Other => None,
        }
    }

    /// Sibling label an in-law of this kind is married to
    ///
    /// A sister-in-law is a brother's wife; a brother-in-law is a sister's
    /// husband.
    pub fn married_sibling(&self) -> Option<RelationType> {
        match self {
            RelationType::SisterInLaw => Some(RelationType::Brother),
            RelationType::BrotherInLaw => Some(RelationType::Sister),
            _ => None,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown relation type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_parses_back() {
        for relation in RelationType::ALL {
            assert_eq!(RelationType::parse(relation.as_str()), Some(relation));
        }
    }

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!(RelationType::parse("  father-IN-law "), Some(RelationType::FatherInLaw));
        assert_eq!(RelationType::parse("paternal grandmother"), Some(RelationType::PaternalGrandmother));
        assert_eq!(RelationType::parse("Father in law"), None);
    }

    #[test]
    fn test_grandparent_lineage() {
        assert_eq!(
            RelationType::PaternalGrandfather.category(),
            Category::Grandparent(Lineage::Paternal)
        );
        assert_eq!(
            RelationType::MaternalGrandfather.category(),
            Category::Grandparent(Lineage::Maternal)
        );
        assert_eq!(
            RelationType::Grandmother.category(),
            Category::Grandparent(Lineage::Either)
        );
    }

    #[test]
    fn test_other_is_unclassified() {
        assert_eq!(RelationType::Other.category(), Category::Unclassified);
        assert_eq!(Category::of("Other"), Category::Unclassified);
        assert_eq!(Category::of(""), Category::Unclassified);
    }

    #[test]
    fn test_implied_gender() {
        assert_eq!(RelationType::Father.implied_gender(), Some(Gender::Male));
        assert_eq!(RelationType::SisterInLaw.implied_gender(), Some(Gender::Female));
        assert_eq!(RelationType::Spouse.implied_gender(), None);
        assert_eq!(RelationType::Cousin.implied_gender(), None);
    }

    #[test]
    fn test_married_sibling() {
        assert_eq!(RelationType::SisterInLaw.married_sibling(), Some(RelationType::Brother));
        assert_eq!(RelationType::BrotherInLaw.married_sibling(), Some(RelationType::Sister));
        assert_eq!(RelationType::Brother.married_sibling(), None);
    }

    #[test]
    fn test_from_str() {
        let parsed: RelationType = "Niece".parse().unwrap();
        assert_eq!(parsed, RelationType::Niece);
        assert!("Godparent".parse::<RelationType>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: classification is total and agrees with parsing
        #[test]
        fn test_category_total(label in ".{0,24}") {
            let category = Category::of(&label);
            match RelationType::parse(&label) {
                Some(relation) => prop_assert_eq!(category, relation.category()),
                None => prop_assert_eq!(category, Category::Unclassified),
            }
        }

        /// Property: a known label keeps its category under any ASCII casing
        #[test]
        fn test_category_case_insensitive(idx in 0usize..27, upper in any::<bool>()) {
            let relation = RelationType::ALL[idx];
            let label = if upper {
                relation.as_str().to_ascii_uppercase()
            } else {
                relation.as_str().to_ascii_lowercase()
            };
            prop_assert_eq!(Category::of(&label), relation.category());
        }
    }
}
