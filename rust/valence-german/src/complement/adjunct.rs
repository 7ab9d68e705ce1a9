//! Adverbial adjuncts
//!
//! Adjuncts are not subcategorized: every predicate admits any number of
//! them. A valence pattern therefore never stores an adjunct; instantiation
//! appends one adjunct slot to every pattern.

use crate::agreement::AgreementContext;
use crate::category::{Kasus, flag_value};
use crate::feature::{AgreementFeatures, name, phrase};
use serde::{Deserialize, Serialize};
use valence_constraint::{Cardinality, FeatureCondition, Slot, SlotRequirement, nonempty};

/// Which kind of form the adjunct slot is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjunctUsage {
    /// Finite verb forms and infinitives. The irreflexive-pronoun exclusion
    /// applies to every alternative.
    #[default]
    FiniteVerb,
    /// Participles and other adjectival forms ("der für mich arbeitende
    /// Mann"). The agreement context comes from the modified noun, not from
    /// a clause subject, so the exclusion is never added.
    AdjectivalForm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AdverbialAdjunct {
    usage: AdjunctUsage,
}

impl AdverbialAdjunct {
    pub const SLOT: &'static str = "adverbiale-angabe";

    pub const fn new(usage: AdjunctUsage) -> Self {
        AdverbialAdjunct { usage }
    }

    pub const fn usage(&self) -> AdjunctUsage {
        self.usage
    }

    /// Always optional and repeatable, with exactly five alternatives:
    /// prepositional phrase, adverb phrase, unflected adjective phrase,
    /// adverbial genitive and adverbial accusative.
    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        let exclusion = match self.usage {
            AdjunctUsage::FiniteVerb => context.irreflexive_exclusion(),
            AdjunctUsage::AdjectivalForm => None,
        };

        let prepositional = SlotRequirement::of(phrase::PRAEPOSITIONALPHRASE, exclusion.clone());
        let adverbial = SlotRequirement::unconditioned(phrase::ADVERBPHRASE);

        let mut agreement = context.agreement_conditions(&AgreementFeatures::PLAIN);
        agreement.extend(exclusion.clone());
        let adjectival = SlotRequirement::of(
            phrase::UNFLEKTIERTE_ADJEKTIVPHRASE,
            Some(FeatureCondition::and(agreement)),
        );

        Slot::of(
            Self::SLOT,
            Cardinality::ANY,
            nonempty![
                prepositional,
                adverbial,
                adjectival,
                Self::adverbial_case(Kasus::Genitive, exclusion.clone()),
                Self::adverbial_case(Kasus::Accusative, exclusion)
            ],
        )
    }

    fn adverbial_case(kasus: Kasus, exclusion: Option<FeatureCondition>) -> SlotRequirement {
        let mut conditions = vec![
            FeatureCondition::equals(name::KASUS, kasus.feature_value()),
            FeatureCondition::equals(name::ADVERBIAL_VERWENDBAR, flag_value(true)),
        ];
        conditions.extend(exclusion);

        SlotRequirement::of(phrase::NOMINALPHRASE, Some(FeatureCondition::and(conditions)))
    }
}
