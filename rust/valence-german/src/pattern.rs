//! Valence patterns
//!
//! A [`ValencePattern`] is the ordered list of complements one variant of a
//! predicate takes. Instantiating it for a subject yields the slots a parser
//! has to fill, always followed by one adjunct slot. Removing implicit
//! complements yields the patterns of non-finite forms: an infinitive has no
//! subject of its own, a passive participle has neither subject nor
//! accusative object.

use crate::agreement::AgreementContext;
use crate::category::Kasus;
use crate::complement::{AdjunctUsage, AdverbialAdjunct, Complement, ComplementType};
use crate::error::{ValenceError, ValenceResult};
use crate::registry;
use std::fmt::{self, Display};
use std::sync::Arc;
use valence_constraint::Slot;

#[derive(Debug, Clone)]
pub struct ValencePattern {
    name: Option<&'static str>,
    complements: Vec<Arc<ComplementType>>,
    restriction_frame: Vec<Slot>,
}

impl ValencePattern {
    /// Creates an anonymous pattern. Adjuncts are rejected: every pattern
    /// admits them implicitly.
    pub fn new(complements: impl IntoIterator<Item = Arc<ComplementType>>) -> ValenceResult<Self> {
        let complements: Vec<_> = complements.into_iter().collect();
        if let Some(adjunct) = complements.iter().find(|each| each.complement().is_adjunct()) {
            return Err(ValenceError::AdjunctInPattern {
                slot: adjunct.slot_name().to_string(),
            });
        }

        Ok(Self::from_complements(None, complements))
    }

    /// Creates a named pattern.
    pub fn named(
        name: &'static str,
        complements: impl IntoIterator<Item = Arc<ComplementType>>,
    ) -> ValenceResult<Self> {
        let mut pattern = Self::new(complements)?;
        pattern.name = Some(name);
        Ok(pattern)
    }

    fn from_complements(name: Option<&'static str>, complements: Vec<Arc<ComplementType>>) -> Self {
        let finite_adjunct = AdverbialAdjunct::new(AdjunctUsage::FiniteVerb);
        let restriction_frame = complements
            .iter()
            .map(|complement| complement.restriction_slot().clone())
            .chain(std::iter::once(
                finite_adjunct.build_slot(&AgreementContext::UNCONSTRAINED),
            ))
            .collect();

        ValencePattern {
            name,
            complements,
            restriction_frame,
        }
    }

    /// The registered name. Derived patterns are anonymous.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn complement_types(&self) -> &[Arc<ComplementType>] {
        &self.complements
    }

    pub fn complements(&self) -> impl Iterator<Item = &Complement> {
        self.complements.iter().map(|each| each.complement())
    }

    pub fn len(&self) -> usize {
        self.complements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complements.is_empty()
    }

    /// The slots for a concrete subject: one per complement in order, then
    /// the adjunct slot for the given usage.
    pub fn instantiate(&self, context: &AgreementContext, usage: AdjunctUsage) -> Vec<Slot> {
        self.complements
            .iter()
            .map(|complement| complement.build_slot(context))
            .chain(std::iter::once(
                AdverbialAdjunct::new(usage).build_slot(context),
            ))
            .collect()
    }

    /// The agreement-independent slots used to filter candidates before the
    /// subject is known. Computed once, at construction.
    pub fn restriction_frame(&self) -> &[Slot] {
        &self.restriction_frame
    }

    /// Removes one matching complement per requested type, comparing by
    /// value and taking the first match. Requesting a type twice removes two
    /// occurrences.
    ///
    /// Returns `None` when a requested type has no remaining match: the
    /// derived form does not exist for this pattern and callers skip it.
    pub fn with_implicit_complements<'a>(
        &self,
        implicit: impl IntoIterator<Item = &'a Complement>,
    ) -> Option<ValencePattern> {
        let mut remaining = self.complements.clone();

        for complement in implicit {
            let Some(position) = remaining
                .iter()
                .position(|each| each.complement() == complement)
            else {
                tracing::debug!(
                    pattern = self.name.unwrap_or("<derived>"),
                    implicit = complement.slot_name(),
                    "implicit complement not in pattern, derivation does not apply"
                );
                return None;
            };
            remaining.remove(position);
        }

        Some(Self::from_complements(None, remaining))
    }

    /// The pattern of an infinitive or imperative: the subject is implicit.
    pub fn with_implicit_subject(&self) -> Option<ValencePattern> {
        self.with_implicit_complements([&registry::SUBJECT])
    }

    /// The pattern of a passive participle: subject and accusative object
    /// are implicit ("der gelesene Brief").
    pub fn with_implicit_subject_and_accusative_object(&self) -> Option<ValencePattern> {
        self.with_implicit_complements([&registry::SUBJECT, &registry::ACCUSATIVE_OBJECT])
    }

    /// Passive participle of a double-accusative verb, where the secondary
    /// accusative becomes implicit ("die abgefragten Vokabeln").
    pub fn with_implicit_subject_and_secondary_accusative_object(&self) -> Option<ValencePattern> {
        self.with_implicit_complements([
            &registry::SUBJECT,
            &registry::SECONDARY_ACCUSATIVE_OBJECT,
        ])
    }

    /// Stative participle of a reflexive verb ("der verliebte Mann" from
    /// "sich verlieben").
    pub fn with_implicit_subject_and_reflexive_accusative_object(&self) -> Option<ValencePattern> {
        self.with_implicit_complements([
            &registry::SUBJECT,
            &registry::REFLEXIVE_ACCUSATIVE_OBJECT,
        ])
    }

    fn any(&self, predicate: impl Fn(&Complement) -> bool) -> bool {
        self.complements().any(predicate)
    }

    pub fn has_subject(&self) -> bool {
        self.any(Complement::is_subject)
    }

    /// Subject plus a plain accusative object. Reflexive and expletive
    /// accusatives do not count.
    pub fn is_transitive(&self) -> bool {
        self.has_subject() && self.any(|c| c.is_plain_object(Kasus::Accusative))
    }

    /// Subject and no accusative object of any sort.
    pub fn is_intransitive(&self) -> bool {
        self.has_subject()
            && !self.any(|c| {
                c.is_plain_object(Kasus::Accusative)
                    || c.is_expletive_object(Kasus::Accusative)
                    || c.is_reflexive_object(Kasus::Accusative)
            })
    }

    /// Subject plus a reflexive-only dative or accusative object.
    pub fn is_reflexive(&self) -> bool {
        self.has_subject()
            && self.any(|c| {
                c.is_reflexive_object(Kasus::Dative) || c.is_reflexive_object(Kasus::Accusative)
            })
    }

    /// Whether an adjectival stative participle may be derived: subject and
    /// reflexive accusative, but no genitive object ("sich einer Sache
    /// schämen" yields no "*der geschämte Mann").
    ///
    /// Like the other classifications this errs towards `true`.
    pub fn forms_stative_reflexive_participle(&self) -> bool {
        self.has_subject()
            && self.any(|c| c.is_reflexive_object(Kasus::Accusative))
            && !self.any(|c| c.is_object(Kasus::Genitive))
    }
}

impl PartialEq for ValencePattern {
    fn eq(&self, other: &Self) -> bool {
        self.complements == other.complements
    }
}

impl Eq for ValencePattern {}

impl Display for ValencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "[")?;
        for (index, complement) in self.complements.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", complement.slot_name())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Genus, Numerus, Person};
    use crate::complement::{Object, Subject};
    use crate::feature::{IRREFLEXIVE_PRONOUN_FEATURES, name, phrase};
    use crate::registry::{
        ACCUSATIVE_OBJECT, DATIVE_OBJECT, FINITE_VERB_ADJUNCT, GENITIVE_OBJECT,
        REFLEXIVE_ACCUSATIVE_OBJECT, SUBJECT,
    };
    use pretty_assertions::assert_eq;
    use valence_constraint::{Cardinality, FeatureCondition, SlotRequirement};

    fn pattern(complements: &[Complement]) -> ValencePattern {
        ValencePattern::new(complements.iter().map(|c| Arc::new(ComplementType::new(*c))))
            .unwrap()
    }

    fn slot_names(pattern: &ValencePattern) -> Vec<&'static str> {
        pattern.complements().map(Complement::slot_name).collect()
    }

    #[test]
    fn rejects_adjuncts() {
        let result = ValencePattern::new([Arc::new(ComplementType::new(FINITE_VERB_ADJUNCT))]);
        assert_eq!(
            result,
            Err(ValenceError::AdjunctInPattern {
                slot: "adverbiale-angabe".into()
            })
        );
    }

    #[test]
    fn instantiation_appends_one_adjunct() {
        let ditransitive = pattern(&[SUBJECT, DATIVE_OBJECT, ACCUSATIVE_OBJECT]);
        let context = AgreementContext::new()
            .with_person(Person::First)
            .with_numerus(Numerus::Plural);

        let finite = ditransitive.instantiate(&context, AdjunctUsage::FiniteVerb);
        let names: Vec<&str> = finite.iter().map(Slot::name).collect();
        assert_eq!(
            names,
            vec!["subjekt", "dativobjekt", "akkusativobjekt", "adverbiale-angabe"]
        );
        assert_eq!(
            finite[3],
            AdverbialAdjunct::new(AdjunctUsage::FiniteVerb).build_slot(&context)
        );

        let adjectival = ditransitive.instantiate(&context, AdjunctUsage::AdjectivalForm);
        assert_eq!(
            adjectival[3],
            AdverbialAdjunct::new(AdjunctUsage::AdjectivalForm).build_slot(&context)
        );
        assert_ne!(finite[3], adjectival[3]);
    }

    #[test]
    fn restriction_frame_is_computed_once() {
        let transitive = pattern(&[SUBJECT, ACCUSATIVE_OBJECT]);
        let first = transitive.restriction_frame();
        let second = transitive.restriction_frame();
        assert!(std::ptr::eq(first, second));

        assert_eq!(first.len(), 3);
        assert_eq!(
            first.to_vec(),
            transitive.instantiate(&AgreementContext::UNCONSTRAINED, AdjunctUsage::FiniteVerb)
        );
    }

    #[test]
    fn removing_an_absent_type_yields_none() {
        let transitive = pattern(&[SUBJECT, ACCUSATIVE_OBJECT]);
        assert_eq!(transitive.with_implicit_complements([&DATIVE_OBJECT]), None);
        assert_eq!(
            transitive.with_implicit_complements([&SUBJECT, &SUBJECT]),
            None
        );
    }

    #[test]
    fn removal_preserves_order() {
        let ditransitive = pattern(&[SUBJECT, DATIVE_OBJECT, ACCUSATIVE_OBJECT]);
        let derived = ditransitive.with_implicit_subject().unwrap();

        assert_eq!(derived.len(), ditransitive.len() - 1);
        assert_eq!(slot_names(&derived), vec!["dativobjekt", "akkusativobjekt"]);
        assert_eq!(derived.name(), None);
    }

    #[test]
    fn removal_is_multiset_removal() {
        let doubled = pattern(&[SUBJECT, ACCUSATIVE_OBJECT, DATIVE_OBJECT, ACCUSATIVE_OBJECT]);
        let derived = doubled
            .with_implicit_complements([&ACCUSATIVE_OBJECT, &ACCUSATIVE_OBJECT])
            .unwrap();

        assert_eq!(derived.len(), doubled.len() - 2);
        assert_eq!(slot_names(&derived), vec!["subjekt", "dativobjekt"]);
        assert_eq!(derived.restriction_frame().len(), derived.len() + 1);
    }

    #[test]
    fn removal_compares_by_value() {
        let reflexive = pattern(&[SUBJECT, REFLEXIVE_ACCUSATIVE_OBJECT]);
        assert_eq!(
            reflexive.with_implicit_subject_and_accusative_object(),
            None
        );

        let derived = reflexive
            .with_implicit_subject_and_reflexive_accusative_object()
            .unwrap();
        assert!(derived.is_empty());

        let rebuilt = Complement::from(Object::new("akkusativobjekt", Kasus::Accusative));
        let transitive = pattern(&[SUBJECT, ACCUSATIVE_OBJECT]);
        assert_eq!(transitive.with_implicit_complements([&rebuilt]).unwrap().len(), 1);
    }

    #[test]
    fn derived_patterns_share_complement_types() {
        let transitive = pattern(&[SUBJECT, ACCUSATIVE_OBJECT]);
        let derived = transitive.with_implicit_subject().unwrap();
        assert!(Arc::ptr_eq(
            &transitive.complement_types()[1],
            &derived.complement_types()[0]
        ));
    }

    #[test]
    fn classification() {
        let transitive = pattern(&[SUBJECT, ACCUSATIVE_OBJECT]);
        assert!(transitive.has_subject());
        assert!(transitive.is_transitive());
        assert!(!transitive.is_intransitive());
        assert!(!transitive.is_reflexive());

        let reflexive = pattern(&[SUBJECT, REFLEXIVE_ACCUSATIVE_OBJECT]);
        assert!(!reflexive.is_transitive());
        assert!(!reflexive.is_intransitive());
        assert!(reflexive.is_reflexive());
        assert!(reflexive.forms_stative_reflexive_participle());

        let reflexive_genitive =
            pattern(&[SUBJECT, REFLEXIVE_ACCUSATIVE_OBJECT, GENITIVE_OBJECT]);
        assert!(reflexive_genitive.is_reflexive());
        assert!(!reflexive_genitive.forms_stative_reflexive_participle());

        let dative = pattern(&[SUBJECT, DATIVE_OBJECT]);
        assert!(dative.is_intransitive());

        let subjectless = pattern(&[DATIVE_OBJECT]);
        assert!(!subjectless.has_subject());
        assert!(!subjectless.is_intransitive());
    }

    #[test]
    fn optional_subject_counts_as_subject() {
        let optional = pattern(&[Complement::from(Subject::new().optional())]);
        assert!(optional.has_subject());
        assert!(optional.is_intransitive());
    }

    #[test]
    fn end_to_end_third_person_feminine() {
        let context = AgreementContext::new()
            .with_person(Person::Third)
            .with_genus(Genus::Feminine)
            .with_numerus(Numerus::Singular)
            .with_politeness(false);
        let ditransitive = pattern(&[SUBJECT, DATIVE_OBJECT, ACCUSATIVE_OBJECT]);

        let slots = ditransitive.instantiate(&context, AdjunctUsage::FiniteVerb);
        let names: Vec<&str> = slots.iter().map(Slot::name).collect();
        assert_eq!(
            names,
            vec!["subjekt", "dativobjekt", "akkusativobjekt", "adverbiale-angabe"]
        );

        assert_eq!(
            slots[0].requirement(),
            &SlotRequirement::of(
                phrase::NOMINALPHRASE,
                Some(FeatureCondition::and([
                    FeatureCondition::equals(name::KASUS, "nom"),
                    FeatureCondition::equals(name::PERSON, "3"),
                    FeatureCondition::equals(name::GENUS, "f"),
                    FeatureCondition::equals(name::NUMERUS, "sg"),
                ])),
            )
        );

        for (slot, kasus) in [(&slots[1], "dat"), (&slots[2], "akk")] {
            assert_eq!(slot.cardinality(), Cardinality::EXACTLY_ONE);
            assert_eq!(
                slot.requirement(),
                &SlotRequirement::of(
                    phrase::NOMINALPHRASE,
                    Some(FeatureCondition::and([
                        FeatureCondition::equals(name::KASUS, kasus),
                        FeatureCondition::equals(name::IST_SUBJEKT, "false"),
                        FeatureCondition::equals(name::REFLEXIVPRONOMEN_PERSON, "3"),
                        FeatureCondition::equals(name::REFLEXIVPRONOMEN_GENUS, "f"),
                        FeatureCondition::equals(name::REFLEXIVPRONOMEN_NUMERUS, "sg"),
                        FeatureCondition::equals(name::REFLEXIVPRONOMEN_HOEFLICHKEIT, "false"),
                    ])),
                )
            );
        }

        let adjunct = &slots[3];
        assert_eq!(adjunct.cardinality(), Cardinality::ANY);
        assert_eq!(adjunct.alternatives().len(), 5);
        assert!(adjunct.alternatives().iter().all(|alternative| {
            IRREFLEXIVE_PRONOUN_FEATURES
                .iter()
                .all(|feature| !alternative.condition().mentions(feature))
        }));
        assert_eq!(
            adjunct.alternatives()[2],
            SlotRequirement::of(
                phrase::UNFLEKTIERTE_ADJEKTIVPHRASE,
                Some(FeatureCondition::and([
                    FeatureCondition::equals(name::PERSON, "3"),
                    FeatureCondition::equals(name::GENUS, "f"),
                    FeatureCondition::equals(name::NUMERUS, "sg"),
                    FeatureCondition::equals(name::HOEFLICHKEIT, "false"),
                ])),
            )
        );
    }

    #[test]
    fn displays_slot_names() {
        let transitive = ValencePattern::named(
            "transitiv",
            [SUBJECT, ACCUSATIVE_OBJECT].map(|c| Arc::new(ComplementType::new(c))),
        )
        .unwrap();
        assert_eq!(transitive.to_string(), "transitiv: [subjekt, akkusativobjekt]");
    }
}
