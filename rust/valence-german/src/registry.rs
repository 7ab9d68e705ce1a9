//! Named complements and valence patterns of German.
//!
//! The constants here are the vocabulary lexicon entries refer to. Patterns
//! are registered once, in definition order, and complement types are
//! interned: every pattern mentioning [`SUBJECT`] shares the same
//! [`ComplementType`] and therefore the same cached restriction slot.

use crate::category::Kasus;
use crate::complement::{
    AdjunctUsage, AdverbialAdjunct, BareInfinitive, Complement, ComplementType, Expletive,
    Object, Predicative, Subject,
};
use crate::error::{ValenceError, ValenceResult};
use crate::pattern::ValencePattern;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use valence_constraint::{Cardinality, Slot};

pub const SUBJECT: Complement = Complement::Subject(Subject::new());

/// "(Er) kommt heute", imperatives with a dropped subject.
pub const OPTIONAL_SUBJECT: Complement = Complement::Subject(Subject::new().optional());

/// "*Es* regnet."
pub const EXPLETIVE_SUBJECT: Complement =
    Complement::Subject(Subject::new().with_expletive(Expletive::Required));

pub const ACCUSATIVE_OBJECT: Complement =
    Complement::Object(Object::new("akkusativobjekt", Kasus::Accusative));

pub const OPTIONAL_ACCUSATIVE_OBJECT: Complement = Complement::Object(
    Object::new("akkusativobjekt", Kasus::Accusative).with_cardinality(Cardinality::OPTIONAL),
);

/// The second accusative of "jemanden etwas lehren".
pub const SECONDARY_ACCUSATIVE_OBJECT: Complement =
    Complement::Object(Object::new("zweites-akkusativobjekt", Kasus::Accusative));

pub const REFLEXIVE_ACCUSATIVE_OBJECT: Complement =
    Complement::Object(Object::new("reflexives-akkusativobjekt", Kasus::Accusative).reflexive());

/// "Er hat *es* eilig."
pub const EXPLETIVE_ACCUSATIVE_OBJECT: Complement = Complement::Object(
    Object::new("akkusativobjekt", Kasus::Accusative).with_expletive(Expletive::Required),
);

pub const DATIVE_OBJECT: Complement =
    Complement::Object(Object::new("dativobjekt", Kasus::Dative));

pub const OPTIONAL_DATIVE_OBJECT: Complement = Complement::Object(
    Object::new("dativobjekt", Kasus::Dative).with_cardinality(Cardinality::OPTIONAL),
);

pub const REFLEXIVE_DATIVE_OBJECT: Complement =
    Complement::Object(Object::new("reflexives-dativobjekt", Kasus::Dative).reflexive());

pub const GENITIVE_OBJECT: Complement =
    Complement::Object(Object::new("genitivobjekt", Kasus::Genitive));

pub const PREDICATIVE: Complement = Complement::Predicative(Predicative);

pub const BARE_INFINITIVE: Complement = Complement::BareInfinitive(BareInfinitive);

/// Adjuncts of finite verbs and infinitives. Never part of a pattern.
pub const FINITE_VERB_ADJUNCT: Complement =
    Complement::AdverbialAdjunct(AdverbialAdjunct::new(AdjunctUsage::FiniteVerb));

/// Adjuncts of participles and other adjectival forms. Never part of a
/// pattern.
pub const ADJECTIVAL_FORM_ADJUNCT: Complement =
    Complement::AdverbialAdjunct(AdverbialAdjunct::new(AdjunctUsage::AdjectivalForm));

/// Names of the built-in patterns.
pub mod names {
    pub const INTRANSITIVE: &str = "intransitiv";
    pub const TRANSITIVE: &str = "transitiv";
    pub const DITRANSITIVE: &str = "ditransitiv";
    pub const DOUBLE_ACCUSATIVE: &str = "doppelter-akkusativ";
    pub const DATIVE: &str = "dativ";
    pub const GENITIVE: &str = "genitiv";
    pub const ACCUSATIVE_GENITIVE: &str = "akkusativ-genitiv";
    pub const REFLEXIVE_ACCUSATIVE: &str = "reflexiv-akkusativ";
    pub const REFLEXIVE_DATIVE_ACCUSATIVE: &str = "reflexiv-dativ-akkusativ";
    pub const REFLEXIVE_ACCUSATIVE_GENITIVE: &str = "reflexiv-akkusativ-genitiv";
    pub const PREDICATIVE: &str = "praedikativ";
    pub const EXPLETIVE_SUBJECT: &str = "expletives-subjekt";
    pub const EXPLETIVE_SUBJECT_ACCUSATIVE: &str = "expletives-subjekt-akkusativ";
    pub const EXPLETIVE_ACCUSATIVE: &str = "expletiver-akkusativ";
    pub const SUBJECTLESS_DATIVE: &str = "subjektlos-dativ";
    pub const MODAL: &str = "modal";
    pub const ACCUSATIVE_BARE_INFINITIVE: &str = "akkusativ-infinitiv";
}

/// Patterns by name, plus the interned complement types they share.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    complements: IndexMap<Complement, Arc<ComplementType>>,
    patterns: IndexMap<&'static str, ValencePattern>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The built-in patterns of German.
    pub fn german() -> ValenceResult<Registry> {
        let registry = Registry::builder()
            .pattern(names::INTRANSITIVE, [SUBJECT])?
            .pattern(names::TRANSITIVE, [SUBJECT, ACCUSATIVE_OBJECT])?
            .pattern(
                names::DITRANSITIVE,
                [SUBJECT, DATIVE_OBJECT, ACCUSATIVE_OBJECT],
            )?
            .pattern(
                names::DOUBLE_ACCUSATIVE,
                [SUBJECT, ACCUSATIVE_OBJECT, SECONDARY_ACCUSATIVE_OBJECT],
            )?
            .pattern(names::DATIVE, [SUBJECT, DATIVE_OBJECT])?
            .pattern(names::GENITIVE, [SUBJECT, GENITIVE_OBJECT])?
            .pattern(
                names::ACCUSATIVE_GENITIVE,
                [SUBJECT, ACCUSATIVE_OBJECT, GENITIVE_OBJECT],
            )?
            .pattern(
                names::REFLEXIVE_ACCUSATIVE,
                [SUBJECT, REFLEXIVE_ACCUSATIVE_OBJECT],
            )?
            .pattern(
                names::REFLEXIVE_DATIVE_ACCUSATIVE,
                [SUBJECT, REFLEXIVE_DATIVE_OBJECT, ACCUSATIVE_OBJECT],
            )?
            .pattern(
                names::REFLEXIVE_ACCUSATIVE_GENITIVE,
                [SUBJECT, REFLEXIVE_ACCUSATIVE_OBJECT, GENITIVE_OBJECT],
            )?
            .pattern(names::PREDICATIVE, [SUBJECT, PREDICATIVE])?
            .pattern(names::EXPLETIVE_SUBJECT, [EXPLETIVE_SUBJECT])?
            .pattern(
                names::EXPLETIVE_SUBJECT_ACCUSATIVE,
                [EXPLETIVE_SUBJECT, ACCUSATIVE_OBJECT],
            )?
            .pattern(
                names::EXPLETIVE_ACCUSATIVE,
                [SUBJECT, EXPLETIVE_ACCUSATIVE_OBJECT],
            )?
            .pattern(names::SUBJECTLESS_DATIVE, [DATIVE_OBJECT])?
            .pattern(names::MODAL, [SUBJECT, BARE_INFINITIVE])?
            .pattern(
                names::ACCUSATIVE_BARE_INFINITIVE,
                [SUBJECT, ACCUSATIVE_OBJECT, BARE_INFINITIVE],
            )?
            .build();

        tracing::debug!(
            patterns = registry.patterns.len(),
            complements = registry.complements.len(),
            "registered german valence patterns"
        );

        Ok(registry)
    }

    pub fn pattern(&self, name: &str) -> Option<&ValencePattern> {
        self.patterns.get(name)
    }

    /// The interned type for a complement, if any registered pattern uses it.
    pub fn complement_type(&self, complement: &Complement) -> Option<&Arc<ComplementType>> {
        self.complements.get(complement)
    }

    /// Patterns in definition order.
    pub fn patterns(&self) -> impl Iterator<Item = &ValencePattern> {
        self.patterns.values()
    }

    /// Complement types in order of first use.
    pub fn complement_types(&self) -> impl Iterator<Item = &Arc<ComplementType>> {
        self.complements.values()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn describe(&self) -> Vec<PatternDescription> {
        self.patterns
            .iter()
            .map(|(name, pattern)| PatternDescription::of(*name, pattern))
            .collect()
    }
}

/// The process-wide registry of built-in patterns, built on first use.
pub fn registry() -> &'static Registry {
    static GERMAN: OnceLock<Registry> = OnceLock::new();
    GERMAN.get_or_init(|| Registry::german().expect("built-in valence patterns are consistent"))
}

/// Assembles a [`Registry`], interning complement types as patterns are
/// added.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Returns the shared type for a complement, creating it on first use.
    pub fn intern(&mut self, complement: Complement) -> Arc<ComplementType> {
        self.registry
            .complements
            .entry(complement)
            .or_insert_with(|| Arc::new(ComplementType::new(complement)))
            .clone()
    }

    pub fn pattern(
        mut self,
        name: &'static str,
        complements: impl IntoIterator<Item = Complement>,
    ) -> ValenceResult<Self> {
        if self.registry.patterns.contains_key(name) {
            return Err(ValenceError::DuplicatePattern {
                name: name.to_string(),
            });
        }

        let types: Vec<_> = complements
            .into_iter()
            .map(|complement| self.intern(complement))
            .collect();
        let pattern = ValencePattern::named(name, types)?;

        tracing::trace!(%pattern, "registered valence pattern");
        self.registry.patterns.insert(name, pattern);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

/// A serializable summary of one registered pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternDescription {
    pub name: &'static str,
    pub complements: Vec<&'static str>,
    /// The full configuration of each complement, in pattern order.
    pub configuration: Vec<Complement>,
    pub has_subject: bool,
    pub transitive: bool,
    pub intransitive: bool,
    pub reflexive: bool,
    pub stative_reflexive_participle: bool,
    pub restriction_frame: Vec<Slot>,
}

impl PatternDescription {
    fn of(name: &'static str, pattern: &ValencePattern) -> Self {
        PatternDescription {
            name,
            complements: pattern.complements().map(Complement::slot_name).collect(),
            configuration: pattern.complements().copied().collect(),
            has_subject: pattern.has_subject(),
            transitive: pattern.is_transitive(),
            intransitive: pattern.is_intransitive(),
            reflexive: pattern.is_reflexive(),
            stative_reflexive_participle: pattern.forms_stative_reflexive_participle(),
            restriction_frame: pattern.restriction_frame().to_vec(),
        }
    }
}
