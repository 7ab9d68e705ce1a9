//! # valence-german
//!
//! The valence patterns of German predicates, compiled into the slot
//! constraints a unification parser fills.
//!
//! A [`ValencePattern`] lists the complements a predicate takes. Once the
//! subject's person, genus, numerus and politeness are known, each complement
//! builds a [`Slot`] whose conditions make objects, predicatives and adjuncts
//! agree with the subject. Reflexive pronouns must match it ("ich wasche
//! *mich*", "er wäscht *sich*"), and a first or second person pronoun that
//! could refer back to the subject is only ever read as a reflexive.
//!
//! ```
//! use valence_german::{AdjunctUsage, AgreementContext, Genus, Numerus, Person};
//! use valence_german::feature::name;
//! use valence_german::registry::{names, registry};
//!
//! let transitive = registry().pattern(names::TRANSITIVE).unwrap();
//! let context = AgreementContext::new()
//!     .with_person(Person::Third)
//!     .with_genus(Genus::Feminine)
//!     .with_numerus(Numerus::Singular);
//!
//! let slots = transitive.instantiate(&context, AdjunctUsage::FiniteVerb);
//! assert_eq!(slots.len(), 3);
//! assert_eq!(slots[0].requirement().required_value(name::PERSON), Some("3"));
//!
//! // infinitives have no subject of their own
//! let infinitive = transitive.with_implicit_subject().unwrap();
//! assert_eq!(infinitive.restriction_frame().len(), 2);
//! ```

pub mod agreement;
pub mod category;
pub mod complement;
pub mod error;
pub mod feature;
pub mod pattern;
pub mod registry;

pub use agreement::AgreementContext;
pub use category::{Genus, Kasus, Numerus, Person};
pub use complement::{
    AdjunctUsage, AdverbialAdjunct, BareInfinitive, Complement, ComplementType, Expletive,
    Object, Predicative, Subject,
};
pub use error::{ValenceError, ValenceResult};
pub use pattern::ValencePattern;
pub use registry::{PatternDescription, Registry, RegistryBuilder, registry};
pub use valence_constraint::{Cardinality, FeatureCondition, Slot, SlotRequirement};
