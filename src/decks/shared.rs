//! Decks shared between threads.
//!
//! Each [`SharedDeck`] guards its deck with its own mutex. A move spans two
//! decks, so both locks are taken in ascending [`DeckId`] order; two threads
//! moving in opposite directions between the same pair cannot deadlock.

use std::sync::{Arc, Mutex, MutexGuard};

use log::trace;

use super::deck::{CardDeck, DeckId, DeckSnapshot};
use crate::cards::Card;
use crate::error::{DeckError, PushError, Result, StateViolation};

/// A deck behind an `Arc<Mutex<_>>`. Cloning shares the same deck.
#[derive(Clone, Debug)]
pub struct SharedDeck {
    id: DeckId,
    inner: Arc<Mutex<CardDeck>>,
}

impl SharedDeck {
    /// Wrap a deck for shared use.
    #[must_use]
    pub fn new(deck: CardDeck) -> Self {
        Self {
            id: deck.id(),
            inner: Arc::new(Mutex::new(deck)),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    fn lock(&self) -> Result<MutexGuard<'_, CardDeck>> {
        self.inner
            .lock()
            .map_err(|_| StateViolation::Poisoned(self.id).into())
    }

    /// Push a card under this deck's lock. A poisoned lock hands the card
    /// back like any other refusal.
    pub fn push(&self, card: Card) -> std::result::Result<(), PushError> {
        match self.lock() {
            Ok(mut deck) => deck.push(card),
            Err(err) => Err(PushError::new(card, err)),
        }
    }

    /// Pop the top card under this deck's lock.
    pub fn pop(&self) -> Result<Card> {
        self.lock()?.pop()
    }

    /// Number of cards currently in the deck.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn snapshot(&self) -> Result<DeckSnapshot> {
        Ok(self.lock()?.snapshot())
    }

    /// Run `f` with exclusive access to the deck.
    pub fn with<R>(&self, f: impl FnOnce(&mut CardDeck) -> R) -> Result<R> {
        let mut deck = self.lock()?;
        Ok(f(&mut deck))
    }

    /// Would moving this deck's top onto `target` succeed right now?
    pub fn top_matches_on(&self, target: &SharedDeck) -> Result<bool> {
        if self.id == target.id {
            return Ok(false);
        }
        let (donor, target) = self.lock_pair(target)?;
        Ok(donor.top_matches_on(&target))
    }

    /// Move this deck's top card onto `target`, holding both locks.
    ///
    /// Fails without touching either deck on a self-move, a poisoned lock,
    /// or any ordinary move precondition.
    pub fn move_top_to(&self, target: &SharedDeck) -> Result<()> {
        if self.id == target.id {
            trace!("move {} onto itself rejected", self.id);
            return Err(StateViolation::SameDeck(self.id).into());
        }
        let (mut donor, mut target) = self.lock_pair(target)?;
        donor.move_top(&mut target)
    }

    /// Lock `self` and `other` in id order, returning guards as
    /// `(self, other)`.
    fn lock_pair<'a>(
        &'a self,
        other: &'a SharedDeck,
    ) -> std::result::Result<(MutexGuard<'a, CardDeck>, MutexGuard<'a, CardDeck>), DeckError>
    {
        if self.id < other.id {
            let first = self.lock()?;
            let second = other.lock()?;
            Ok((first, second))
        } else {
            let first = other.lock()?;
            let second = self.lock()?;
            Ok((second, first))
        }
    }
}

impl From<CardDeck> for SharedDeck {
    fn from(deck: CardDeck) -> Self {
        Self::new(deck)
    }
}
