//! How often a slot may be filled.

use crate::{SlotError, SlotResult};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Lower and upper bound on the number of fillers of a slot.
///
/// The upper bound is `None` for repeatable positions such as adjuncts.
/// Construction guarantees `min <= max` and `max >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCardinality", into = "RawCardinality")]
pub struct Cardinality {
    min: usize,
    max: Option<usize>,
}

impl Cardinality {
    /// Exactly one filler.
    pub const EXACTLY_ONE: Self = Self::between(1, 1);
    /// At most one filler.
    pub const OPTIONAL: Self = Self::between(0, 1);
    /// Any number of fillers, including none.
    pub const ANY: Self = Self::at_least(0);

    /// Validating constructor for bounded cardinalities.
    pub fn new(min: usize, max: usize) -> SlotResult<Self> {
        if max == 0 {
            Err(SlotError::ClosedCardinality)
        } else if min > max {
            Err(SlotError::InvertedCardinality { min, max })
        } else {
            Ok(Cardinality {
                min,
                max: Some(max),
            })
        }
    }

    /// `const` constructor for named constants: an invalid range fails
    /// compilation of the constant that uses it.
    pub const fn between(min: usize, max: usize) -> Self {
        assert!(max >= 1, "maximum fillings must be at least one");
        assert!(min <= max, "minimum fillings exceed maximum fillings");
        Cardinality {
            min,
            max: Some(max),
        }
    }

    /// Unbounded cardinality with the given lower bound.
    pub const fn at_least(min: usize) -> Self {
        Cardinality { min, max: None }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    /// `None` means unbounded.
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns `true` if the slot may stay empty.
    pub const fn is_optional(&self) -> bool {
        self.min == 0
    }

    /// Returns `true` if the slot takes more than one filler.
    pub const fn is_repeatable(&self) -> bool {
        match self.max {
            Some(max) => max > 1,
            None => true,
        }
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::EXACTLY_ONE
    }
}

impl Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}, {}]", self.min, max),
            None => write!(f, "[{}, *]", self.min),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawCardinality {
    min: usize,
    max: Option<usize>,
}

impl TryFrom<RawCardinality> for Cardinality {
    type Error = SlotError;

    fn try_from(raw: RawCardinality) -> Result<Self, Self::Error> {
        match raw.max {
            Some(max) => Cardinality::new(raw.min, max),
            None => Ok(Cardinality::at_least(raw.min)),
        }
    }
}

impl From<Cardinality> for RawCardinality {
    fn from(cardinality: Cardinality) -> Self {
        RawCardinality {
            min: cardinality.min,
            max: cardinality.max,
        }
    }
}
