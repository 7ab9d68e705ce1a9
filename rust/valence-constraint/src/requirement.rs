//! A single way of filling a slot.

use crate::FeatureCondition;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// One alternative of a [`Slot`](crate::Slot): a candidate must belong to the
/// named grammar category and satisfy the condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRequirement {
    category: String,
    #[serde(default)]
    condition: FeatureCondition,
}

impl SlotRequirement {
    /// Creates a requirement. A missing condition is trivially true.
    pub fn of(category: impl Into<String>, condition: Option<FeatureCondition>) -> Self {
        SlotRequirement {
            category: category.into(),
            condition: condition.unwrap_or_default(),
        }
    }

    /// Creates a requirement on the category alone.
    pub fn unconditioned(category: impl Into<String>) -> Self {
        Self::of(category, None)
    }

    /// The grammar category a filler must belong to.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn condition(&self) -> &FeatureCondition {
        &self.condition
    }

    /// Shorthand for [`FeatureCondition::required_value`].
    pub fn required_value(&self, feature: &str) -> Option<&str> {
        self.condition.required_value(feature)
    }
}

impl Display for SlotRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.condition.is_trivially_true() {
            write!(f, "{}", self.category)
        } else {
            write!(f, "{} where {}", self.category, self.condition)
        }
    }
}
