//! Acceptance policies for decks.
//!
//! A deck delegates two questions to its policy:
//! - may this candidate become the new top, given the current top?
//! - how many cards must always stay in the deck (the removal floor)?
//!
//! Capacity and duplicate checks are handled by the deck itself and apply
//! regardless of policy.

use std::fmt::Debug;

use crate::cards::Card;

/// Policy deciding which cards a deck accepts.
pub trait AcceptancePolicy: Debug + Send + Sync {
    /// May `candidate` be placed on top of a deck whose current top is `top`?
    fn accepts(&self, top: Option<&Card>, candidate: &Card) -> bool;

    /// Cards that must remain in the deck. `pop` fails at this size.
    fn floor(&self) -> usize {
        0
    }
}

/// Accept any card while capacity allows.
///
/// Used by source and help decks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unrestricted;

impl AcceptancePolicy for Unrestricted {
    fn accepts(&self, _top: Option<&Card>, _candidate: &Card) -> bool {
        true
    }
}

/// Accept a card only if it matches the current top, and never give up the
/// bottom (anchor) card.
///
/// Used by target decks.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchesTop;

impl AcceptancePolicy for MatchesTop {
    fn accepts(&self, top: Option<&Card>, candidate: &Card) -> bool {
        top.map_or(true, |top| candidate.matches(top))
    }

    fn floor(&self) -> usize {
        1
    }
}
