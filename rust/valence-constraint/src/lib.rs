//! # valence-constraint
//!
//! The constraint vocabulary shared between the valence model and the
//! unification engine that consumes it.
//!
//! The valence model only *produces* these values: a [`Slot`] per grammatical
//! position, each holding one or more alternative [`SlotRequirement`]s, each
//! pairing a grammar category with a [`FeatureCondition`]. Whether a candidate
//! constituent satisfies a condition is decided elsewhere.
//!
//! ```
//! use valence_constraint::{FeatureCondition, Slot, SlotRequirement};
//!
//! let slot = Slot::exactly_one(
//!     "subjekt",
//!     SlotRequirement::of(
//!         "nominalphrase",
//!         Some(FeatureCondition::and([
//!             FeatureCondition::equals("kasus", "nom"),
//!             FeatureCondition::equals("person", "3"),
//!         ])),
//!     ),
//! );
//!
//! assert_eq!(slot.to_string(), "subjekt [1, 1]: nominalphrase where (kasus=nom & person=3)");
//! ```

pub mod cardinality;
pub mod condition;
pub mod error;
pub mod requirement;
pub mod slot;

pub use cardinality::Cardinality;
pub use condition::FeatureCondition;
pub use error::{SlotError, SlotResult};
pub use nonempty::{NonEmpty, nonempty};
pub use requirement::SlotRequirement;
pub use slot::Slot;
