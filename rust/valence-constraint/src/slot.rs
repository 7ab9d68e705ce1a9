//! Slot specifications
//!
//! A [`Slot`] names a grammatical position, bounds how often it is filled and
//! lists the alternative requirements a filler may satisfy. A filled position
//! must satisfy exactly one alternative.

use crate::{Cardinality, SlotRequirement};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    name: String,
    cardinality: Cardinality,
    alternatives: NonEmpty<SlotRequirement>,
}

impl Slot {
    /// Creates a slot with the given cardinality and alternatives.
    pub fn of(
        name: impl Into<String>,
        cardinality: Cardinality,
        alternatives: NonEmpty<SlotRequirement>,
    ) -> Self {
        Slot {
            name: name.into(),
            cardinality,
            alternatives,
        }
    }

    /// Creates a slot filled exactly once, with a single requirement.
    pub fn exactly_one(name: impl Into<String>, requirement: SlotRequirement) -> Self {
        Self::of(name, Cardinality::EXACTLY_ONE, NonEmpty::new(requirement))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn min_fillings(&self) -> usize {
        self.cardinality.min()
    }

    /// `None` means unbounded.
    pub fn max_fillings(&self) -> Option<usize> {
        self.cardinality.max()
    }

    pub fn alternatives(&self) -> &NonEmpty<SlotRequirement> {
        &self.alternatives
    }

    /// The first alternative. For single-requirement slots this is the
    /// requirement.
    pub fn requirement(&self) -> &SlotRequirement {
        self.alternatives.first()
    }

    pub fn is_disjunctive(&self) -> bool {
        self.alternatives.len() > 1
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.name, self.cardinality)?;
        for (index, alternative) in self.alternatives.iter().enumerate() {
            if index > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{alternative}")?;
        }
        Ok(())
    }
}
