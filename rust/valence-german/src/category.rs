//! Agreement and case categories of German and their canonical encodings.
//!
//! The unification engine compares feature values as plain strings, so every
//! category value has exactly one encoding. The encodings here are the shared
//! vocabulary: word-form generators annotate constituents with the same
//! strings.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    /// Canonical feature value.
    pub const fn feature_value(self) -> &'static str {
        match self {
            Person::First => "1",
            Person::Second => "2",
            Person::Third => "3",
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genus {
    Masculine,
    Feminine,
    Neuter,
}

impl Genus {
    pub const ALL: [Genus; 3] = [Genus::Masculine, Genus::Feminine, Genus::Neuter];

    /// Canonical feature value.
    pub const fn feature_value(self) -> &'static str {
        match self {
            Genus::Masculine => "m",
            Genus::Feminine => "f",
            Genus::Neuter => "n",
        }
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numerus {
    Singular,
    Plural,
}

impl Numerus {
    pub const ALL: [Numerus; 2] = [Numerus::Singular, Numerus::Plural];

    /// Canonical feature value.
    pub const fn feature_value(self) -> &'static str {
        match self {
            Numerus::Singular => "sg",
            Numerus::Plural => "pl",
        }
    }
}

/// Grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kasus {
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Kasus {
    pub const ALL: [Kasus; 4] = [
        Kasus::Nominative,
        Kasus::Genitive,
        Kasus::Dative,
        Kasus::Accusative,
    ];

    /// Canonical feature value.
    pub const fn feature_value(self) -> &'static str {
        match self {
            Kasus::Nominative => "nom",
            Kasus::Genitive => "gen",
            Kasus::Dative => "dat",
            Kasus::Accusative => "akk",
        }
    }
}

/// Canonical encoding of boolean features, politeness included.
pub const fn flag_value(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

macro_rules! display_feature_value {
    ($($category:ty),*) => {
        $(
            impl Display for $category {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.feature_value())
                }
            }
        )*
    };
}

display_feature_value!(Person, Genus, Numerus, Kasus);
