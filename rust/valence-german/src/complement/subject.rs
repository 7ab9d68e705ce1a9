//! The subject position.

use super::Expletive;
use crate::agreement::AgreementContext;
use crate::category::Kasus;
use crate::feature::{AgreementFeatures, name, phrase};
use serde::Serialize;
use valence_constraint::{Cardinality, FeatureCondition, NonEmpty, Slot, SlotRequirement};

/// A nominative subject agreeing with the context in person, gender and
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    slot: &'static str,
    optional: bool,
    expletive: Expletive,
}

impl Subject {
    pub const SLOT: &'static str = "subjekt";

    /// An obligatory subject with no expletive requirement.
    pub const fn new() -> Self {
        Subject {
            slot: Self::SLOT,
            optional: false,
            expletive: Expletive::Unconstrained,
        }
    }

    /// The subject may stay unrealized (`[0, 1]`).
    pub const fn optional(self) -> Self {
        Subject {
            optional: true,
            ..self
        }
    }

    pub const fn with_expletive(self, expletive: Expletive) -> Self {
        Subject { expletive, ..self }
    }

    pub const fn slot_name(&self) -> &'static str {
        self.slot
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn expletive(&self) -> Expletive {
        self.expletive
    }

    pub const fn cardinality(&self) -> Cardinality {
        if self.optional {
            Cardinality::OPTIONAL
        } else {
            Cardinality::EXACTLY_ONE
        }
    }

    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        let mut conditions = vec![FeatureCondition::equals(
            name::KASUS,
            Kasus::Nominative.feature_value(),
        )];
        conditions.extend(self.expletive.condition());
        conditions.extend(context.agreement_conditions(&AgreementFeatures::SUBJECT));

        Slot::of(
            self.slot,
            self.cardinality(),
            NonEmpty::new(SlotRequirement::of(
                phrase::NOMINALPHRASE,
                Some(FeatureCondition::and(conditions)),
            )),
        )
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Genus, Numerus, Person};
    use pretty_assertions::assert_eq;

    #[test]
    fn agrees_in_person_gender_and_number() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_genus(Genus::Neuter)
            .with_numerus(Numerus::Singular)
            .with_politeness(false);

        let slot = Subject::new().build_slot(&context);
        assert_eq!(slot.name(), "subjekt");
        assert_eq!(slot.cardinality(), Cardinality::EXACTLY_ONE);
        assert!(!slot.is_disjunctive());

        let requirement = slot.requirement();
        assert_eq!(requirement.category(), phrase::NOMINALPHRASE);
        assert_eq!(
            requirement.condition(),
            &FeatureCondition::and([
                FeatureCondition::equals(name::KASUS, "nom"),
                FeatureCondition::equals(name::PERSON, "3"),
                FeatureCondition::equals(name::GENUS, "n"),
                FeatureCondition::equals(name::NUMERUS, "sg"),
            ])
        );
        assert!(!requirement.condition().mentions(name::HOEFLICHKEIT));
    }

    #[test]
    fn expletive_subject_is_pinned() {
        let slot = Subject::new()
            .with_expletive(Expletive::Required)
            .build_slot(&AgreementContext::UNCONSTRAINED);

        assert_eq!(
            slot.requirement().condition(),
            &FeatureCondition::and([
                FeatureCondition::equals(name::KASUS, "nom"),
                FeatureCondition::equals(name::ALS_EXPLETIVUM_GEEIGNET, "true"),
            ])
        );
    }

    #[test]
    fn optional_subject_may_stay_empty() {
        let slot = Subject::new()
            .optional()
            .build_slot(&AgreementContext::UNCONSTRAINED);
        assert_eq!(slot.min_fillings(), 0);
        assert_eq!(slot.max_fillings(), Some(1));
        assert_eq!(
            slot.requirement().condition(),
            &FeatureCondition::equals(name::KASUS, "nom")
        );
    }
}
