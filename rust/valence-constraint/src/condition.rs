//! Boolean formulas over named feature tests
//!
//! A [`FeatureCondition`] describes what a candidate constituent must look like
//! to fill a slot. The formula is data only: evaluating it against a candidate
//! is the unification engine's job. Leaves compare a named feature with an
//! explicit string value; inner nodes combine leaves with AND / OR.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A boolean formula over feature equality tests.
///
/// An [`FeatureCondition::And`] over an empty list is trivially true. This is
/// how an unconditioned requirement is expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureCondition {
    /// The named feature must carry exactly this value.
    Equals { feature: String, value: String },
    /// Every member must hold.
    And { all: Vec<FeatureCondition> },
    /// At least one member must hold.
    Or { any: Vec<FeatureCondition> },
}

impl FeatureCondition {
    /// Creates a leaf test `feature = value`.
    pub fn equals(feature: impl Into<String>, value: impl Into<String>) -> Self {
        FeatureCondition::Equals {
            feature: feature.into(),
            value: value.into(),
        }
    }

    /// The trivially true condition.
    pub fn always() -> Self {
        FeatureCondition::And { all: Vec::new() }
    }

    /// Conjunction of the given conditions.
    ///
    /// Nested conjunctions are flattened and a single member is returned as
    /// is, so building a requirement piecewise never produces `AND(AND(..))`.
    pub fn and(conditions: impl IntoIterator<Item = FeatureCondition>) -> Self {
        let mut all = Vec::new();
        for condition in conditions {
            match condition {
                FeatureCondition::And { all: nested } => all.extend(nested),
                other => all.push(other),
            }
        }

        if all.len() == 1 {
            all.pop().unwrap_or_else(Self::always)
        } else {
            FeatureCondition::And { all }
        }
    }

    /// Disjunction of the given conditions.
    ///
    /// Nested disjunctions are flattened. A single member is returned as is.
    pub fn or(conditions: impl IntoIterator<Item = FeatureCondition>) -> Self {
        let mut any = Vec::new();
        for condition in conditions {
            match condition {
                FeatureCondition::Or { any: nested } => any.extend(nested),
                other => any.push(other),
            }
        }

        if any.len() == 1 {
            any.pop().unwrap_or_else(Self::always)
        } else {
            FeatureCondition::Or { any }
        }
    }

    /// Returns `true` for an empty conjunction.
    pub fn is_trivially_true(&self) -> bool {
        matches!(self, FeatureCondition::And { all } if all.is_empty())
    }

    /// All leaf tests in the formula, depth first.
    pub fn equalities(&self) -> Vec<(&str, &str)> {
        let mut leaves = Vec::new();
        self.collect_equalities(&mut leaves);
        leaves
    }

    fn collect_equalities<'a>(&'a self, leaves: &mut Vec<(&'a str, &'a str)>) {
        match self {
            FeatureCondition::Equals { feature, value } => {
                leaves.push((feature.as_str(), value.as_str()))
            }
            FeatureCondition::And { all } => {
                for each in all {
                    each.collect_equalities(leaves);
                }
            }
            FeatureCondition::Or { any } => {
                for each in any {
                    each.collect_equalities(leaves);
                }
            }
        }
    }

    /// The value a feature is required to carry, if the formula pins it
    /// unconditionally (through a leaf reachable via conjunctions only).
    pub fn required_value(&self, feature: &str) -> Option<&str> {
        match self {
            FeatureCondition::Equals {
                feature: name,
                value,
            } if name == feature => Some(value.as_str()),
            FeatureCondition::Equals { .. } | FeatureCondition::Or { .. } => None,
            FeatureCondition::And { all } => {
                all.iter().find_map(|each| each.required_value(feature))
            }
        }
    }

    /// Returns `true` if any leaf mentions the feature.
    pub fn mentions(&self, feature: &str) -> bool {
        self.equalities().iter().any(|(name, _)| *name == feature)
    }
}

impl Default for FeatureCondition {
    fn default() -> Self {
        Self::always()
    }
}

impl Display for FeatureCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureCondition::Equals { feature, value } => write!(f, "{feature}={value}"),
            FeatureCondition::And { all } if all.is_empty() => write!(f, "true"),
            FeatureCondition::Or { any } if any.is_empty() => write!(f, "false"),
            FeatureCondition::And { all } => write_joined(f, all, " & "),
            FeatureCondition::Or { any } => write_joined(f, any, " | "),
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    members: &[FeatureCondition],
    separator: &str,
) -> fmt::Result {
    write!(f, "(")?;
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            write!(f, "{separator}")?;
        }
        write!(f, "{member}")?;
    }
    write!(f, ")")
}
