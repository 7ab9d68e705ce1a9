//! Feature and grammar-category names shared with the unification engine.
//!
//! These names are domain data. The engine annotates candidate constituents
//! with features under exactly these names; changing one here without the
//! engine silently turns a constraint into one that never matches.

use crate::category::{Numerus, Person};

/// Names of the features tested by slot conditions.
pub mod name {
    pub const KASUS: &str = "kasus";
    pub const PERSON: &str = "person";
    pub const GENUS: &str = "genus";
    pub const NUMERUS: &str = "numerus";
    pub const HOEFLICHKEIT: &str = "hoeflichkeit";

    /// Whether the constituent is (or may be) the expletive "es".
    pub const ALS_EXPLETIVUM_GEEIGNET: &str = "als-expletivum-geeignet";
    /// Whether a nominal phrase may serve as a predicate nominal.
    pub const PRAEDIKATIV_GEEIGNET: &str = "praedikativ-geeignet";
    /// Whether a genitive or accusative phrase may be used adverbially
    /// ("eines Tages", "den ganzen Tag").
    pub const ADVERBIAL_VERWENDBAR: &str = "adverbial-verwendbar";
    /// Whether the constituent is the clause's subject itself.
    pub const IST_SUBJEKT: &str = "ist-subjekt";
    /// Exactly one reflexively used pronoun: no coordination, no "selbst".
    pub const EINZELNES_REFLEXIVES_PRONOMEN: &str = "einzelnes-reflexives-pronomen";

    /// Agreement features derived from the reflexively used conjuncts of a
    /// constituent. Constituents without a reflexive pronoun leave them open.
    pub const REFLEXIVPRONOMEN_PERSON: &str = "reflexivpronomen-person";
    pub const REFLEXIVPRONOMEN_GENUS: &str = "reflexivpronomen-genus";
    pub const REFLEXIVPRONOMEN_NUMERUS: &str = "reflexivpronomen-numerus";
    pub const REFLEXIVPRONOMEN_HOEFLICHKEIT: &str = "reflexivpronomen-hoeflichkeit";

    pub const IRREFLEXIV_1_SG: &str = "enthaelt-irreflexives-personalpronomen-1-sg";
    pub const IRREFLEXIV_2_SG: &str = "enthaelt-irreflexives-personalpronomen-2-sg";
    pub const IRREFLEXIV_1_PL: &str = "enthaelt-irreflexives-personalpronomen-1-pl";
    pub const IRREFLEXIV_2_PL: &str = "enthaelt-irreflexives-personalpronomen-2-pl";
    pub const IRREFLEXIV_3_PL_HOEFLICH: &str =
        "enthaelt-irreflexives-personalpronomen-3-pl-hoeflich";
}

/// Names of the grammar categories slot requirements refer to.
pub mod phrase {
    /// Noun phrases and pronouns, coordinations included.
    pub const NOMINALPHRASE: &str = "nominalphrase";
    pub const PRAEPOSITIONALPHRASE: &str = "praepositionalphrase";
    pub const ADVERBPHRASE: &str = "adverbphrase";
    pub const UNFLEKTIERTE_ADJEKTIVPHRASE: &str = "unflektierte-adjektivphrase";
    /// A bare infinitive together with its own complements.
    pub const INFINITIVKONSTRUKTION: &str = "infinitivkonstruktion";
}

/// The five derived "contains an irreflexive personal pronoun of exactly this
/// person and number" features, in table order.
pub const IRREFLEXIVE_PRONOUN_FEATURES: [&str; 5] = [
    name::IRREFLEXIV_1_SG,
    name::IRREFLEXIV_2_SG,
    name::IRREFLEXIV_1_PL,
    name::IRREFLEXIV_2_PL,
    name::IRREFLEXIV_3_PL_HOEFLICH,
];

/// Names the irreflexive-pronoun feature for a subject of the given person,
/// number and politeness.
///
/// Third person is only covered for the polite plural ("Sie"): a plain third
/// person pronoun can refer to someone other than the subject. Politeness only
/// matters there, so an unset politeness makes the third person plural case
/// undecidable and yields `None`.
pub fn irreflexive_pronoun_feature(
    person: Person,
    numerus: Numerus,
    politeness: Option<bool>,
) -> Option<&'static str> {
    match (person, numerus, politeness) {
        (Person::First, Numerus::Singular, _) => Some(name::IRREFLEXIV_1_SG),
        (Person::Second, Numerus::Singular, _) => Some(name::IRREFLEXIV_2_SG),
        (Person::First, Numerus::Plural, _) => Some(name::IRREFLEXIV_1_PL),
        (Person::Second, Numerus::Plural, _) => Some(name::IRREFLEXIV_2_PL),
        (Person::Third, Numerus::Plural, Some(true)) => Some(name::IRREFLEXIV_3_PL_HOEFLICH),
        (Person::Third, _, _) => None,
    }
}

/// The feature names a context's agreement dimensions are tested under.
///
/// The same subject agreement is checked against different features depending
/// on the position: a subject's own features, a predicate's features, or the
/// features derived from reflexive conjuncts of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgreementFeatures {
    pub person: &'static str,
    pub genus: &'static str,
    pub numerus: &'static str,
    /// `None` if the position does not agree in politeness.
    pub politeness: Option<&'static str>,
}

impl AgreementFeatures {
    /// Subjects agree in person, gender and number only.
    pub const SUBJECT: Self = AgreementFeatures {
        person: name::PERSON,
        genus: name::GENUS,
        numerus: name::NUMERUS,
        politeness: None,
    };

    /// The constituent's own agreement features, politeness included.
    pub const PLAIN: Self = AgreementFeatures {
        person: name::PERSON,
        genus: name::GENUS,
        numerus: name::NUMERUS,
        politeness: Some(name::HOEFLICHKEIT),
    };

    /// Features derived from the reflexively used conjuncts.
    pub const REFLEXIVE_CONJUNCTS: Self = AgreementFeatures {
        person: name::REFLEXIVPRONOMEN_PERSON,
        genus: name::REFLEXIVPRONOMEN_GENUS,
        numerus: name::REFLEXIVPRONOMEN_NUMERUS,
        politeness: Some(name::REFLEXIVPRONOMEN_HOEFLICHKEIT),
    };
}
