//! Subject agreement
//!
//! An [`AgreementContext`] describes the subject of a clause as far as other
//! constituents have to agree with it. Any dimension may be unset: a plural
//! subject has no gender, a weather verb has no agreement-bearing subject at
//! all. An unset dimension never produces a constraint.

use crate::category::{Genus, Numerus, Person, flag_value};
use crate::feature::{AgreementFeatures, irreflexive_pronoun_feature};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use valence_constraint::FeatureCondition;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgreementContext {
    pub person: Option<Person>,
    pub genus: Option<Genus>,
    pub numerus: Option<Numerus>,
    /// Whether the subject is the polite "Sie".
    pub politeness: Option<bool>,
}

impl AgreementContext {
    /// No subject agreement at all.
    pub const UNCONSTRAINED: Self = AgreementContext {
        person: None,
        genus: None,
        numerus: None,
        politeness: None,
    };

    pub const fn new() -> Self {
        Self::UNCONSTRAINED
    }

    pub const fn with_person(self, person: Person) -> Self {
        AgreementContext {
            person: Some(person),
            ..self
        }
    }

    pub const fn with_genus(self, genus: Genus) -> Self {
        AgreementContext {
            genus: Some(genus),
            ..self
        }
    }

    pub const fn with_numerus(self, numerus: Numerus) -> Self {
        AgreementContext {
            numerus: Some(numerus),
            ..self
        }
    }

    pub const fn with_politeness(self, politeness: bool) -> Self {
        AgreementContext {
            politeness: Some(politeness),
            ..self
        }
    }

    /// Returns `true` if no dimension is set.
    pub const fn is_unconstrained(&self) -> bool {
        self.person.is_none()
            && self.genus.is_none()
            && self.numerus.is_none()
            && self.politeness.is_none()
    }

    /// Equality tests on the given features, one per set dimension, in the
    /// order person, genus, number, politeness.
    ///
    /// Politeness is only tested if the position agrees in politeness at all
    /// (see [`AgreementFeatures::SUBJECT`]).
    pub fn agreement_conditions(&self, features: &AgreementFeatures) -> Vec<FeatureCondition> {
        let mut conditions = Vec::with_capacity(4);

        if let Some(person) = self.person {
            conditions.push(FeatureCondition::equals(
                features.person,
                person.feature_value(),
            ));
        }
        if let Some(genus) = self.genus {
            conditions.push(FeatureCondition::equals(
                features.genus,
                genus.feature_value(),
            ));
        }
        if let Some(numerus) = self.numerus {
            conditions.push(FeatureCondition::equals(
                features.numerus,
                numerus.feature_value(),
            ));
        }
        if let (Some(politeness), Some(feature)) = (self.politeness, features.politeness) {
            conditions.push(FeatureCondition::equals(feature, flag_value(politeness)));
        }

        conditions
    }

    /// The condition that a constituent contains no *irreflexively* used
    /// personal pronoun referring to this subject ("*ich wasche mich" read
    /// as two different people is impossible, so an irreflexive "mich" next
    /// to a first person singular subject must be rejected).
    ///
    /// `None` if the context does not determine such a pronoun, i.e. when
    /// person or number is unset, for plain third person, and for third
    /// person plural with unset politeness.
    pub fn irreflexive_exclusion(&self) -> Option<FeatureCondition> {
        let feature = irreflexive_pronoun_feature(self.person?, self.numerus?, self.politeness)?;
        Some(FeatureCondition::equals(feature, flag_value(false)))
    }

    /// Every context with person and number set, over all genders and
    /// politeness values that apply (gender only in the singular, politeness
    /// only in the third person).
    pub fn complete_contexts() -> impl Iterator<Item = AgreementContext> {
        Person::ALL.into_iter().flat_map(|person| {
            Numerus::ALL.into_iter().flat_map(move |numerus| {
                let genera: Vec<Option<Genus>> = match (person, numerus) {
                    (Person::Third, Numerus::Singular) => {
                        Genus::ALL.into_iter().map(Some).collect()
                    }
                    _ => vec![None],
                };
                let politeness: Vec<bool> = match person {
                    Person::Third => vec![false, true],
                    _ => vec![false],
                };

                genera.into_iter().flat_map(move |genus| {
                    politeness.clone().into_iter().map(move |polite| AgreementContext {
                        person: Some(person),
                        genus,
                        numerus: Some(numerus),
                        politeness: Some(polite),
                    })
                })
            })
        })
    }
}

impl Display for AgreementContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dimension<T: Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "_".to_string())
        }

        write!(
            f,
            "{{person={}, genus={}, numerus={}, hoeflich={}}}",
            dimension(&self.person),
            dimension(&self.genus),
            dimension(&self.numerus),
            dimension(&self.politeness)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::name;
    use pretty_assertions::assert_eq;

    #[test]
    fn unset_dimensions_produce_no_tests() {
        let context = AgreementContext::new().with_person(Person::First);
        assert_eq!(
            context.agreement_conditions(&AgreementFeatures::PLAIN),
            vec![FeatureCondition::equals(name::PERSON, "1")]
        );
        assert!(
            AgreementContext::UNCONSTRAINED
                .agreement_conditions(&AgreementFeatures::PLAIN)
                .is_empty()
        );
    }

    #[test]
    fn subject_features_skip_politeness() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_numerus(Numerus::Plural)
            .with_politeness(true);

        assert_eq!(
            context.agreement_conditions(&AgreementFeatures::SUBJECT),
            vec![
                FeatureCondition::equals(name::PERSON, "3"),
                FeatureCondition::equals(name::NUMERUS, "pl"),
            ]
        );
        assert_eq!(
            context.agreement_conditions(&AgreementFeatures::REFLEXIVE_CONJUNCTS),
            vec![
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_PERSON, "3"),
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_NUMERUS, "pl"),
                FeatureCondition::equals(name::REFLEXIVPRONOMEN_HOEFLICHKEIT, "true"),
            ]
        );
    }

    #[test]
    fn exclusion_for_first_person_singular() {
        let context = AgreementContext::new()
            .with_person(Person::First)
            .with_numerus(Numerus::Singular);

        assert_eq!(
            context.irreflexive_exclusion(),
            Some(FeatureCondition::equals(name::IRREFLEXIV_1_SG, "false"))
        );
    }

    #[test]
    fn no_exclusion_for_third_person_plural_without_politeness() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_numerus(Numerus::Plural);

        assert_eq!(context.irreflexive_exclusion(), None);
    }

    #[test]
    fn no_exclusion_without_person_or_number() {
        assert_eq!(AgreementContext::UNCONSTRAINED.irreflexive_exclusion(), None);
        assert_eq!(
            AgreementContext::new()
                .with_person(Person::First)
                .irreflexive_exclusion(),
            None
        );
        assert_eq!(
            AgreementContext::new()
                .with_numerus(Numerus::Singular)
                .irreflexive_exclusion(),
            None
        );
    }

    #[test]
    fn complete_contexts_are_complete() {
        let contexts: Vec<_> = AgreementContext::complete_contexts().collect();
        // 1/2 person: 2 numbers each; 3 sg: 3 genders x 2; 3 pl: 2
        assert_eq!(contexts.len(), 2 + 2 + 6 + 2);
        assert!(
            contexts
                .iter()
                .all(|c| c.person.is_some() && c.numerus.is_some() && c.politeness.is_some())
        );
    }

    #[test]
    fn displays_unset_dimensions() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_genus(Genus::Feminine);
        assert_eq!(
            context.to_string(),
            "{person=3, genus=f, numerus=_, hoeflich=_}"
        );
    }
}
