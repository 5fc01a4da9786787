//! Locale module - display strings for kinship terms

use crate::Kinship;

/// Language used to render kinship terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,

    /// Indonesian
    Id,
}

impl Locale {
    /// Get the locale code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Parse a locale from its code
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "id" => Some(Locale::Id),
            _ => None,
        }
    }

    /// Render a kinship term
    pub fn term(&self, kinship: Kinship) -> &'static str {
        match self {
            Locale::En => english(kinship),
            Locale::Id => indonesian(kinship),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid locale: {}", s))
    }
}

fn english(kinship: Kinship) -> &'static str {
    use Kinship::*;

    match kinship {
        Myself => "Self",
        Mother => "Mother",
        Father => "Father",
        Parent => "Parent",
        FosterMother => "Foster Mother",
        FosterFather => "Foster Father",
        FosterParent => "Foster Parent",
        Grandmother => "Grandmother",
        Grandfather => "Grandfather",
        Grandparent => "Grandparent",
        GreatGrandparent => "Great-Grandparent",
        GreatGreatGrandparent => "Great-Great-Grandparent",
        GreatGreatGreatGrandparent => "Great-Great-Great-Grandparent",
        Daughter => "Daughter",
        Son => "Son",
        Child => "Child",
        FosterChild => "Foster Child",
        Granddaughter => "Granddaughter",
        Grandson => "Grandson",
        Grandchild => "Grandchild",
        GreatGrandchild => "Great-Grandchild",
        Sister => "Sister",
        Brother => "Brother",
        Sibling => "Sibling",
        Aunt => "Aunt",
        Uncle => "Uncle",
        AuntOrUncle => "Aunt/Uncle",
        Niece => "Niece",
        Nephew => "Nephew",
        NieceOrNephew => "Niece/Nephew",
        GrandnieceOrGrandnephew => "Grandniece/Grandnephew",
        Cousin => "Cousin",
        Husband => "Husband",
        Wife => "Wife",
        Spouse => "Spouse",
        ExHusband => "Ex-Husband",
        ExWife => "Ex-Wife",
        ExSpouse => "Ex-Spouse",
        ParentInLaw => "Parent-in-Law",
        ChildInLaw => "Son/Daughter-in-Law",
        SiblingInLaw => "Sibling-in-Law",
        CousinInLaw => "Cousin-in-Law",
        GrandmotherInLaw => "Grandmother-in-Law",
        GrandfatherInLaw => "Grandfather-in-Law",
        GrandparentInLaw => "Grandparent-in-Law",
        GrandchildInLaw => "Grandchild-in-Law",
        GreatGrandchildInLaw => "Great-Grandchild-in-Law",
        CoParentInLaw => "Co-Parent-in-Law",
        Relative => "Relative",
    }
}

fn indonesian(kinship: Kinship) -> &'static str {
    use Kinship::*;

    match kinship {
        Myself => "Diri Sendiri",
        Mother => "Ibu",
        Father => "Ayah",
        Parent => "Orang Tua",
        FosterMother => "Ibu Angkat",
        FosterFather => "Ayah Angkat",
        FosterParent => "Orang Tua Angkat",
        Grandmother => "Nenek",
        Grandfather => "Kakek",
        Grandparent => "Kakek/Nenek",
        GreatGrandparent => "Buyut",
        GreatGreatGrandparent => "Canggah",
        GreatGreatGreatGrandparent => "Wareng",
        Daughter => "Putri",
        Son => "Putra",
        Child => "Anak",
        FosterChild => "Anak Angkat",
        Granddaughter => "Cucu Perempuan",
        Grandson => "Cucu Laki-laki",
        Grandchild => "Cucu",
        GreatGrandchild => "Cicit",
        Sister => "Saudara Perempuan",
        Brother => "Saudara Laki-laki",
        Sibling => "Saudara Kandung",
        Aunt => "Bibi",
        Uncle => "Paman",
        AuntOrUncle => "Paman/Bibi",
        Niece => "Keponakan Perempuan",
        Nephew => "Keponakan Laki-laki",
        NieceOrNephew => "Keponakan",
        GrandnieceOrGrandnephew => "Cucu Keponakan",
        Cousin => "Sepupu",
        Husband => "Suami",
        Wife => "Istri",
        Spouse => "Pasangan",
        ExHusband => "Mantan Suami",
        ExWife => "Mantan Istri",
        ExSpouse => "Mantan Pasangan",
        ParentInLaw => "Mertua",
        ChildInLaw => "Menantu",
        SiblingInLaw => "Ipar",
        CousinInLaw => "Sepupu Ipar",
        GrandmotherInLaw => "Nenek Mertua",
        GrandfatherInLaw => "Kakek Mertua",
        GrandparentInLaw => "Kakek/Nenek Mertua",
        GrandchildInLaw => "Cucu Menantu",
        GreatGrandchildInLaw => "Cicit Menantu",
        CoParentInLaw => "Besan",
        Relative => "Kerabat",
    }
}
