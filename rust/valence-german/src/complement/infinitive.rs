//! Bare infinitive frames ("sie will *schwimmen*", "er lässt sie *arbeiten*").
//!
//! The infinitive and its own complements form one discontinuous constituent
//! that is treated here as a single opaque slot.

use crate::agreement::AgreementContext;
use crate::feature::phrase;
use serde::Serialize;
use valence_constraint::{Slot, SlotRequirement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct BareInfinitive;

impl BareInfinitive {
    pub const SLOT: &'static str = "infinitivkonstruktion";

    /// Whether the slot carries real constraints. Agreement between the
    /// subject and reflexives inside the infinitive frame ("ich will mich
    /// waschen") is not modelled yet, so the slot only names the category.
    pub const REFINED: bool = false;

    pub fn build_slot(&self, context: &AgreementContext) -> Slot {
        if !context.is_unconstrained() {
            tracing::trace!(
                slot = Self::SLOT,
                %context,
                "bare infinitive slot ignores subject agreement"
            );
        }

        Slot::exactly_one(
            Self::SLOT,
            SlotRequirement::unconditioned(phrase::INFINITIVKONSTRUKTION),
        )
    }
}
