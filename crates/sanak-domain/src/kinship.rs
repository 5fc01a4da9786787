//! Kinship terms and the blood-relationship classifier
//!
//! Classification works on `Kinship` values; text is only produced at the
//! locale boundary (see [`crate::locale`]).

use crate::locale::Locale;
use crate::Gender;
use std::fmt;

/// A kinship term describing a target person from a POV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// The POV itself
    Myself,

    // Ancestors
    /// Mother
    Mother,
    /// Father
    Father,
    /// Parent of unknown gender
    Parent,
    /// Foster mother
    FosterMother,
    /// Foster father
    FosterFather,
    /// Foster parent of unknown gender
    FosterParent,
    /// Grandmother
    Grandmother,
    /// Grandfather
    Grandfather,
    /// Grandparent of unknown gender
    Grandparent,
    /// Three generations up
    GreatGrandparent,
    /// Four generations up
    GreatGreatGrandparent,
    /// Five generations up
    GreatGreatGreatGrandparent,

    // Descendants
    /// Daughter
    Daughter,
    /// Son
    Son,
    /// Child of unknown gender
    Child,
    /// Foster child
    FosterChild,
    /// Granddaughter
    Granddaughter,
    /// Grandson
    Grandson,
    /// Grandchild of unknown gender
    Grandchild,
    /// Three generations down
    GreatGrandchild,

    // Collateral
    /// Sister
    Sister,
    /// Brother
    Brother,
    /// Sibling of unknown gender
    Sibling,
    /// Aunt
    Aunt,
    /// Uncle
    Uncle,
    /// Aunt or uncle of unknown gender
    AuntOrUncle,
    /// Niece
    Niece,
    /// Nephew
    Nephew,
    /// Niece or nephew of unknown gender
    NieceOrNephew,
    /// Child of a niece or nephew
    GrandnieceOrGrandnephew,
    /// Cousin
    Cousin,

    // Partners
    /// Husband
    Husband,
    /// Wife
    Wife,
    /// Spouse of unknown gender
    Spouse,
    /// Former husband
    ExHusband,
    /// Former wife
    ExWife,
    /// Former spouse of unknown gender
    ExSpouse,

    // In-laws
    /// Parent of one's spouse
    ParentInLaw,
    /// Spouse of one's child
    ChildInLaw,
    /// Sibling of one's spouse, or spouse of one's sibling
    SiblingInLaw,
    /// Cousin of one's spouse, or spouse of one's cousin
    CousinInLaw,
    /// Grandmother of one's spouse
    GrandmotherInLaw,
    /// Grandfather of one's spouse
    GrandfatherInLaw,
    /// Grandparent of one's spouse, gender unknown
    GrandparentInLaw,
    /// Spouse of one's grandchild
    GrandchildInLaw,
    /// Spouse of one's great-grandchild
    GreatGrandchildInLaw,
    /// Parent or close relative of one's child's spouse
    CoParentInLaw,

    /// Generic fallback
    Relative,
}

/// Pick a gendered variant, falling back to the neutral one
pub(crate) fn gendered(gender: Option<Gender>, female: Kinship, male: Kinship, neutral: Kinship) -> Kinship {
    match gender {
        Some(Gender::Female) => female,
        Some(Gender::Male) => male,
        None => neutral,
    }
}

/// Classify a blood relationship from its `(up, down)` coordinate
///
/// Coordinates outside the table resolve to [`Kinship::Relative`]; removed
/// cousins beyond what is listed are not named.
///
/// # Examples
///
/// ```
/// use sanak_domain::{classify_blood, Gender, Kinship};
///
/// assert_eq!(classify_blood(2, 1, Some(Gender::Male)), Kinship::Uncle);
/// assert_eq!(classify_blood(4, 4, None), Kinship::Relative);
/// ```
pub fn classify_blood(up: u32, down: u32, gender: Option<Gender>) -> Kinship {
    use Kinship::*;

    match (up, down) {
        (0, 0) => Myself,
        (1, 0) => gendered(gender, Mother, Father, Parent),
        (2, 0) => gendered(gender, Grandmother, Grandfather, Grandparent),
        (3, 0) => GreatGrandparent,
        (4, 0) => GreatGreatGrandparent,
        (5, 0) => GreatGreatGreatGrandparent,
        (0, 1) => gendered(gender, Daughter, Son, Child),
        (0, 2) => gendered(gender, Granddaughter, Grandson, Grandchild),
        (0, 3) => GreatGrandchild,
        (1, 1) => gendered(gender, Sister, Brother, Sibling),
        (2, 1) | (3, 2) => gendered(gender, Aunt, Uncle, AuntOrUncle),
        (1, 2) | (2, 3) => gendered(gender, Niece, Nephew, NieceOrNephew),
        (2, 2) | (3, 3) => Cousin,
        // Great-aunts and great-uncles are addressed as grandparents
        (3, 1) => gendered(gender, Grandmother, Grandfather, Grandparent),
        (1, 3) => GrandnieceOrGrandnephew,
        _ => Relative,
    }
}

impl Kinship {
    /// Generations of the target above (positive) or below (negative) the POV
    ///
    /// `None` for [`Kinship::Relative`], which carries no generational claim.
    pub fn generation(&self) -> Option<i32> {
        use Kinship::*;

        let generation = match self {
            GreatGreatGreatGrandparent => 5,
            GreatGreatGrandparent => 4,
            GreatGrandparent => 3,
            Grandmother | Grandfather | Grandparent | GrandmotherInLaw | GrandfatherInLaw
            | GrandparentInLaw => 2,
            Mother | Father | Parent | FosterMother | FosterFather | FosterParent | Aunt | Uncle
            | AuntOrUncle | ParentInLaw => 1,
            Myself | Sister | Brother | Sibling | Cousin | Husband | Wife | Spouse | ExHusband
            | ExWife | ExSpouse | SiblingInLaw | CousinInLaw | CoParentInLaw => 0,
            Daughter | Son | Child | FosterChild | Niece | Nephew | NieceOrNephew | ChildInLaw => -1,
            Granddaughter | Grandson | Grandchild | GrandnieceOrGrandnephew | GrandchildInLaw => -2,
            GreatGrandchild | GreatGrandchildInLaw => -3,
            Relative => return None,
        };
        Some(generation)
    }

    /// Whether the term describes kinship by marriage
    pub fn is_in_law(&self) -> bool {
        use Kinship::*;

        matches!(
            self,
            ParentInLaw
                | ChildInLaw
                | SiblingInLaw
                | CousinInLaw
                | GrandmotherInLaw
                | GrandfatherInLaw
                | GrandparentInLaw
                | GrandchildInLaw
                | GreatGrandchildInLaw
                | CoParentInLaw
        )
    }

    /// Whether the term names a sibling
    pub fn is_sibling(&self) -> bool {
        matches!(self, Kinship::Sister | Kinship::Brother | Kinship::Sibling)
    }

    /// Render the term in the given locale
    pub fn label(&self, locale: Locale) -> &'static str {
        locale.term(*self)
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}
