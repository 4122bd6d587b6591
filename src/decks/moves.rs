//! Move protocol: transfer the top card of a donor deck onto a target.
//!
//! A move is all-or-nothing. Every precondition is checked before either
//! deck is touched, so a failed move leaves both decks exactly as they were.

use log::{debug, trace};

use super::deck::CardDeck;
use crate::error::{Result, StateViolation};

impl CardDeck {
    /// Move this deck's top card onto `target`.
    ///
    /// Preconditions, checked in order:
    /// 1. this deck is non-empty;
    /// 2. this deck may give up its top (not an anchor);
    /// 3. `target.can_have_as_top(top)`.
    pub fn move_top(&mut self, target: &mut CardDeck) -> Result<()> {
        if let Err(violation) = self.check_move(target) {
            trace!("move {} -> {} rejected: {}", self.id(), target.id(), violation);
            return Err(violation.into());
        }

        let card = self.take_top().ok_or(StateViolation::Empty)?;
        debug!("move {} from {} to {}", card, self.id(), target.id());
        target.push_unchecked(card);
        Ok(())
    }

    /// Would `move_top(target)` succeed? Does not mutate either deck.
    #[must_use]
    pub fn top_matches_on(&self, target: &CardDeck) -> bool {
        self.check_move(target).is_ok()
    }

    pub(crate) fn check_move(&self, target: &CardDeck) -> std::result::Result<(), StateViolation> {
        self.check_release()?;
        let top = self.cards().last().ok_or(StateViolation::Empty)?;
        target.check_top(top)
    }
}
