//! Complement types
//!
//! A [`Complement`] is the configuration of one position a predicate
//! subcategorizes for (or, for adjuncts, admits). It is a plain value: two
//! complements with the same configuration are equal and hash equally, which
//! is what pattern derivations and classifications look them up by.
//!
//! A [`ComplementType`] pairs a complement with its restriction slot, the slot
//! built for an unknown subject. That slot is computed once, when the type is
//! constructed, and shared by every pattern using the type.

pub mod adjunct;
pub mod infinitive;
pub mod object;
pub mod predicative;
pub mod subject;

pub use adjunct::{AdjunctUsage, AdverbialAdjunct};
pub use infinitive::BareInfinitive;
pub use object::Object;
pub use predicative::Predicative;
pub use subject::Subject;

use crate::agreement::AgreementContext;
use crate::category::{Kasus, flag_value};
use crate::feature::name;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use valence_constraint::{Cardinality, FeatureCondition, Slot};

/// Whether a position must, must not, or may be filled by the expletive "es".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expletive {
    #[default]
    Unconstrained,
    /// "*Es* regnet", "er hat *es* eilig".
    Required,
    Excluded,
}

impl Expletive {
    /// The expletive-suitability test, if any.
    pub fn condition(self) -> Option<FeatureCondition> {
        match self {
            Expletive::Unconstrained => None,
            Expletive::Required => Some(FeatureCondition::equals(
                name::ALS_EXPLETIVUM_GEEIGNET,
                flag_value(true),
            )),
            Expletive::Excluded => Some(FeatureCondition::equals(
                name::ALS_EXPLETIVUM_GEEIGNET,
                flag_value(false),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Complement {
    Subject(Subject),
    Object(Object),
    Predicative(Predicative),
    AdverbialAdjunct(AdverbialAdjunct),
    BareInfinitive(BareInfinitive),
}

impl Complement {
    pub fn slot_name(&self) -> &'static str {
        match self {
            Complement::Subject(subject) => subject.slot_name(),
            Complement::Object(object) => object.slot_name(),
            Complement::Predicative(_) => Predicative::SLOT,
            Complement::AdverbialAdjunct(_) => AdverbialAdjunct::SLOT,
            Complement::BareInfinitive(_) => BareInfinitive::SLOT,
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        match self {
            Complement::Subject(subject) => subject.cardinality(),
            Complement::Object(object) => object.cardinality(),
            Complement::Predicative(_) | Complement::BareInfinitive(_) => Cardinality::EXACTLY_ONE,
            Complement::AdverbialAdjunct(_) => Cardinality::ANY,
        }
    }

    /// Builds the slot for a concrete subject.
    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        match self {
            Complement::Subject(subject) => subject.build_slot(context),
            Complement::Object(object) => object.build_slot(context),
            Complement::Predicative(predicative) => predicative.build_slot(context),
            Complement::AdverbialAdjunct(adjunct) => adjunct.build_slot(context),
            Complement::BareInfinitive(infinitive) => infinitive.build_slot(context),
        }
    }

    pub fn is_subject(&self) -> bool {
        matches!(self, Complement::Subject(_))
    }

    pub fn is_adjunct(&self) -> bool {
        matches!(self, Complement::AdverbialAdjunct(_))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Complement::Object(object) => Some(object),
            _ => None,
        }
    }

    /// See [`Object::is_plain`].
    pub fn is_plain_object(&self, kasus: Kasus) -> bool {
        self.as_object().is_some_and(|object| object.is_plain(kasus))
    }

    /// See [`Object::is_reflexive`].
    pub fn is_reflexive_object(&self, kasus: Kasus) -> bool {
        self.as_object().is_some_and(|object| object.is_reflexive(kasus))
    }

    /// See [`Object::is_expletive`].
    pub fn is_expletive_object(&self, kasus: Kasus) -> bool {
        self.as_object().is_some_and(|object| object.is_expletive(kasus))
    }

    /// The expletive setting of subjects and objects; other positions never
    /// constrain it.
    pub fn expletive(&self) -> Expletive {
        match self {
            Complement::Subject(subject) => subject.expletive(),
            Complement::Object(object) => object.expletive(),
            _ => Expletive::Unconstrained,
        }
    }

    /// Any object of the given case.
    pub fn is_object(&self, kasus: Kasus) -> bool {
        self.as_object().is_some_and(|object| object.kasus() == kasus)
    }
}

impl From<Subject> for Complement {
    fn from(subject: Subject) -> Self {
        Complement::Subject(subject)
    }
}

impl From<Object> for Complement {
    fn from(object: Object) -> Self {
        Complement::Object(object)
    }
}

impl From<Predicative> for Complement {
    fn from(predicative: Predicative) -> Self {
        Complement::Predicative(predicative)
    }
}

impl From<AdverbialAdjunct> for Complement {
    fn from(adjunct: AdverbialAdjunct) -> Self {
        Complement::AdverbialAdjunct(adjunct)
    }
}

impl From<BareInfinitive> for Complement {
    fn from(infinitive: BareInfinitive) -> Self {
        Complement::BareInfinitive(infinitive)
    }
}

impl Display for Complement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.slot_name(), self.cardinality())?;
        if let Some(object) = self.as_object() {
            write!(f, " {}", object.kasus())?;
            if object.is_reflexive_only() {
                write!(f, " reflexiv")?;
            }
        }
        match self.expletive() {
            Expletive::Required => write!(f, " expletiv")?,
            Expletive::Excluded => write!(f, " nicht-expletiv")?,
            Expletive::Unconstrained => {}
        }
        if let Complement::AdverbialAdjunct(adjunct) = self {
            if adjunct.usage() == AdjunctUsage::AdjectivalForm {
                write!(f, " adjektivisch")?;
            }
        }
        Ok(())
    }
}

/// A complement together with its cached restriction slot.
#[derive(Debug, Clone)]
pub struct ComplementType {
    complement: Complement,
    restriction: Slot,
}

impl ComplementType {
    pub fn new(complement: impl Into<Complement>) -> Self {
        let complement = complement.into();
        let restriction = complement.build_slot(&AgreementContext::UNCONSTRAINED);
        ComplementType {
            complement,
            restriction,
        }
    }

    pub fn complement(&self) -> &Complement {
        &self.complement
    }

    pub fn slot_name(&self) -> &'static str {
        self.complement.slot_name()
    }

    /// Builds the slot for a concrete subject.
    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        self.complement.build_slot(context)
    }

    /// The slot for an unknown subject, computed at construction.
    pub fn restriction_slot(&self) -> &Slot {
        &self.restriction
    }
}

impl PartialEq for ComplementType {
    fn eq(&self, other: &Self) -> bool {
        self.complement == other.complement
    }
}

impl Eq for ComplementType {}

impl PartialEq<Complement> for ComplementType {
    fn eq(&self, other: &Complement) -> bool {
        &self.complement == other
    }
}

impl Hash for ComplementType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.complement.hash(state);
    }
}

impl From<Complement> for ComplementType {
    fn from(complement: Complement) -> Self {
        ComplementType::new(complement)
    }
}

impl Display for ComplementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.complement, f)
    }
}
