//! Case-marked objects
//!
//! An object position either accepts only a single reflexively used pronoun
//! ("sich freuen": *sich* and nothing else), or accepts reflexive and
//! irreflexive fillers alike, coordinations included ("er wäscht sich und
//! die Kinder"). In both cases a reflexive filler must agree with the
//! subject; in the mixed case only the reflexive conjuncts are checked.

use super::Expletive;
use crate::agreement::AgreementContext;
use crate::category::{Kasus, flag_value};
use crate::error::{ValenceError, ValenceResult};
use crate::feature::{AgreementFeatures, name, phrase};
use serde::Serialize;
use valence_constraint::{Cardinality, FeatureCondition, NonEmpty, Slot, SlotRequirement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Object {
    slot: &'static str,
    kasus: Kasus,
    cardinality: Cardinality,
    reflexive_only: bool,
    expletive: Expletive,
}

impl Object {
    /// An obligatory, non-expletive object accepting mixed fillers.
    pub const fn new(slot: &'static str, kasus: Kasus) -> Self {
        Object {
            slot,
            kasus,
            cardinality: Cardinality::EXACTLY_ONE,
            reflexive_only: false,
            expletive: Expletive::Unconstrained,
        }
    }

    /// Only a single reflexively used pronoun fills this object.
    pub const fn reflexive(self) -> Self {
        Object {
            reflexive_only: true,
            ..self
        }
    }

    pub const fn with_expletive(self, expletive: Expletive) -> Self {
        Object { expletive, ..self }
    }

    pub const fn with_cardinality(self, cardinality: Cardinality) -> Self {
        Object {
            cardinality,
            ..self
        }
    }

    /// Validating form of [`Object::with_cardinality`].
    pub fn with_fillings(self, min: usize, max: usize) -> ValenceResult<Self> {
        let cardinality =
            Cardinality::new(min, max).map_err(|source| ValenceError::InvalidCardinality {
                slot: self.slot.to_string(),
                source,
            })?;
        Ok(self.with_cardinality(cardinality))
    }

    pub const fn slot_name(&self) -> &'static str {
        self.slot
    }

    pub const fn kasus(&self) -> Kasus {
        self.kasus
    }

    pub const fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub const fn is_reflexive_only(&self) -> bool {
        self.reflexive_only
    }

    pub const fn expletive(&self) -> Expletive {
        self.expletive
    }

    /// A plain object of the given case: neither reflexive-only nor a forced
    /// expletive.
    pub fn is_plain(&self, kasus: Kasus) -> bool {
        self.kasus == kasus && !self.reflexive_only && self.expletive != Expletive::Required
    }

    /// A reflexive-only object of the given case.
    pub fn is_reflexive(&self, kasus: Kasus) -> bool {
        self.kasus == kasus && self.reflexive_only
    }

    /// A forced-expletive object of the given case.
    pub fn is_expletive(&self, kasus: Kasus) -> bool {
        self.kasus == kasus && self.expletive == Expletive::Required
    }

    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        let condition = if self.reflexive_only {
            self.reflexive_condition(context)
        } else {
            self.mixed_condition(context)
        };

        Slot::of(
            self.slot,
            self.cardinality,
            NonEmpty::new(SlotRequirement::of(phrase::NOMINALPHRASE, Some(condition))),
        )
    }

    fn reflexive_condition(&self, context: &AgreementContext) -> FeatureCondition {
        let mut conditions = vec![FeatureCondition::equals(
            name::EINZELNES_REFLEXIVES_PRONOMEN,
            flag_value(true),
        )];
        conditions.extend(context.agreement_conditions(&AgreementFeatures::PLAIN));
        conditions.push(FeatureCondition::equals(
            name::KASUS,
            self.kasus.feature_value(),
        ));
        conditions.push(FeatureCondition::equals(
            name::IST_SUBJEKT,
            flag_value(false),
        ));
        conditions.extend(self.expletive.condition());

        FeatureCondition::and(conditions)
    }

    fn mixed_condition(&self, context: &AgreementContext) -> FeatureCondition {
        let mut conditions = vec![FeatureCondition::equals(
            name::KASUS,
            self.kasus.feature_value(),
        )];
        conditions.extend(self.expletive.condition());
        conditions.push(FeatureCondition::equals(
            name::IST_SUBJEKT,
            flag_value(false),
        ));
        conditions.extend(context.irreflexive_exclusion());
        conditions.extend(context.agreement_conditions(&AgreementFeatures::REFLEXIVE_CONJUNCTS));

        FeatureCondition::and(conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Genus, Numerus, Person};
    use pretty_assertions::assert_eq;

    const ACCUSATIVE: Object = Object::new("akkusativobjekt", Kasus::Accusative);

    #[test]
    fn reflexive_only_object_for_third_person_masculine() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_genus(Genus::Masculine)
            .with_numerus(Numerus::Singular);

        let slot = ACCUSATIVE.reflexive().build_slot(&context);
        assert!(!slot.is_disjunctive());

        let requirement = slot.requirement();
        assert_eq!(requirement.required_value(name::PERSON), Some("3"));
        assert_eq!(requirement.required_value(name::GENUS), Some("m"));
        assert_eq!(requirement.required_value(name::NUMERUS), Some("sg"));
        assert_eq!(requirement.required_value(name::KASUS), Some("akk"));
        assert_eq!(requirement.required_value(name::IST_SUBJEKT), Some("false"));
        assert_eq!(
            requirement.required_value(name::EINZELNES_REFLEXIVES_PRONOMEN),
            Some("true")
        );
        assert!(!requirement.condition().mentions(name::HOEFLICHKEIT));
    }

    #[test]
    fn reflexive_only_object_rejects_other_persons() {
        let context = AgreementContext::new()
            .with_person(Person::First)
            .with_numerus(Numerus::Singular);

        let requirement = ACCUSATIVE.reflexive().build_slot(&context).requirement().clone();
        // "ich freue sich" would need person=3, which the condition excludes
        assert_eq!(requirement.required_value(name::PERSON), Some("1"));
        assert!(!requirement.condition().mentions(name::IRREFLEXIV_1_SG));
    }

    #[test]
    fn mixed_object_checks_reflexive_conjuncts_only() {
        let context = AgreementContext::new()
            .with_person(Person::First)
            .with_numerus(Numerus::Singular)
            .with_politeness(false);

        let slot = ACCUSATIVE.build_slot(&context);
        assert_eq!(
            slot.requirement().condition(),
            &FeatureCondition::and([
                FeatureCondition::equals(name::KASUS, "akk"),
                FeatureCondition::equals(name::IST_SUBJEKT, "false"),
                FeatureCondition::equals(name::IRREFLEXIV_1_SG, "false"),
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_PERSON, "1"),
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_NUMERUS, "sg"),
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_HOEFLICHKEIT, "false"),
            ])
        );
        assert!(!slot.requirement().condition().mentions(name::PERSON));
    }

    #[test]
    fn mixed_object_without_context_only_tests_case() {
        let slot = Object::new("dativobjekt", Kasus::Dative)
            .build_slot(&AgreementContext::UNCONSTRAINED);

        assert_eq!(
            slot.requirement().condition(),
            &FeatureCondition::and([
                FeatureCondition::equals(name::KASUS, "dat"),
                FeatureCondition::equals(name::IST_SUBJEKT, "false"),
            ])
        );
    }

    #[test]
    fn expletive_object_is_pinned() {
        let object = ACCUSATIVE.with_expletive(Expletive::Required);
        let slot = object.build_slot(&AgreementContext::UNCONSTRAINED);

        assert_eq!(
            slot.requirement().required_value(name::ALS_EXPLETIVUM_GEEIGNET),
            Some("true")
        );
        assert!(object.is_expletive(Kasus::Accusative));
        assert!(!object.is_plain(Kasus::Accusative));
    }

    #[test]
    fn fillings_are_validated() {
        let object = ACCUSATIVE.with_fillings(1, 2).unwrap();
        let slot = object.build_slot(&AgreementContext::UNCONSTRAINED);
        assert_eq!(slot.max_fillings(), Some(2));

        assert!(matches!(
            ACCUSATIVE.with_fillings(2, 1),
            Err(ValenceError::InvalidCardinality { .. })
        ));
    }

    #[test]
    fn classification_helpers() {
        assert!(ACCUSATIVE.is_plain(Kasus::Accusative));
        assert!(!ACCUSATIVE.is_plain(Kasus::Dative));
        assert!(ACCUSATIVE.reflexive().is_reflexive(Kasus::Accusative));
        assert!(!ACCUSATIVE.reflexive().is_plain(Kasus::Accusative));
    }
}
