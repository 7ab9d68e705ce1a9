//! The predicative complement of copula verbs ("sein", "werden", "bleiben").

use crate::agreement::AgreementContext;
use crate::category::{Kasus, Numerus, flag_value};
use crate::feature::{AgreementFeatures, name, phrase};
use serde::Serialize;
use valence_constraint::{Cardinality, FeatureCondition, Slot, SlotRequirement, nonempty};

/// Either a predicate nominal ("sie ist Lehrerin") or an unflected adjective
/// phrase ("sie ist stolz auf sich").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Predicative;

impl Predicative {
    pub const SLOT: &'static str = "praedikativ";

    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        Slot::of(
            Self::SLOT,
            Cardinality::EXACTLY_ONE,
            nonempty![
                Self::nominal_requirement(context),
                Self::adjectival_requirement(context)
            ],
        )
    }

    fn nominal_requirement(context: &AgreementContext) -> SlotRequirement {
        let mut conditions = vec![
            FeatureCondition::equals(name::KASUS, Kasus::Nominative.feature_value()),
            FeatureCondition::equals(name::PRAEDIKATIV_GEEIGNET, flag_value(true)),
        ];
        // A plural subject may take a singular predicate nominal
        // ("die beiden sind ein gutes Team"), so only singular is enforced.
        if context.numerus == Some(Numerus::Singular) {
            conditions.push(FeatureCondition::equals(
                name::NUMERUS,
                Numerus::Singular.feature_value(),
            ));
        }

        SlotRequirement::of(phrase::NOMINALPHRASE, Some(FeatureCondition::and(conditions)))
    }

    fn adjectival_requirement(context: &AgreementContext) -> SlotRequirement {
        let mut conditions = context.agreement_conditions(&AgreementFeatures::PLAIN);
        conditions.extend(context.irreflexive_exclusion());

        SlotRequirement::of(
            phrase::UNFLEKTIERTE_ADJEKTIVPHRASE,
            Some(FeatureCondition::and(conditions)),
        )
    }
}
