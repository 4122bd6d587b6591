//! Bounded card stacks.
//!
//! A [`CardDeck`] is a LIFO stack of cards with a fixed capacity. Index 0 is
//! the bottom; the last card is the top. What the deck accepts beyond
//! capacity and uniqueness is decided by its [`AcceptancePolicy`]:
//!
//! - Source and help decks accept anything ([`Unrestricted`]).
//! - Target decks start with an anchor card, accept only cards matching the
//!   current top, and never give up the anchor ([`MatchesTop`]).
//!
//! ```
//! use patience_engine::cards::Card;
//! use patience_engine::decks::CardDeck;
//!
//! let mut source = CardDeck::source(5);
//! source.push(Card::numbered(7).unwrap()).unwrap();
//!
//! let mut target = CardDeck::target(10, Card::numbered(6).unwrap()).unwrap();
//! assert!(source.top_matches_on(&target));
//!
//! source.move_top(&mut target).unwrap();
//! assert_eq!(source.len(), 0);
//! assert_eq!(target.len(), 2);
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::policy::{AcceptancePolicy, MatchesTop, Unrestricted};
use crate::cards::{Card, CardId, Face};
use crate::error::{DeckError, PushError, Result, StateViolation};

static NEXT_DECK_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for a deck.
///
/// Ids are minted in creation order and give decks a stable total order,
/// which [`SharedDeck`](super::SharedDeck) uses to acquire locks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeckId(pub u32);

impl DeckId {
    fn fresh() -> Self {
        Self(NEXT_DECK_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}

/// Role a deck plays on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    /// Draw pile. Donor in moves.
    Source,
    /// Auxiliary pile. Donor in moves.
    Help,
    /// Anchored pile that only accepts matching cards.
    Target,
    /// Deck with a caller-supplied policy.
    Custom,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckKind::Source => "source",
            DeckKind::Help => "help",
            DeckKind::Target => "target",
            DeckKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// Serializable view of a card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub face: Face,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            face: card.face(),
        }
    }
}

/// Point-in-time copy of a deck's contents, bottom first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub id: DeckId,
    pub kind: DeckKind,
    pub capacity: usize,
    pub cards: SmallVec<[CardView; 8]>,
}

impl DeckSnapshot {
    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardView> {
        self.cards.last()
    }
}

/// A capacity-bounded stack of cards.
#[derive(Debug)]
pub struct CardDeck {
    id: DeckId,
    kind: DeckKind,
    capacity: usize,
    cards: SmallVec<[Card; 8]>,
    policy: Box<dyn AcceptancePolicy>,
}

impl CardDeck {
    fn build(kind: DeckKind, capacity: usize, policy: Box<dyn AcceptancePolicy>) -> Self {
        Self {
            id: DeckId::fresh(),
            kind,
            capacity,
            cards: SmallVec::new(),
            policy,
        }
    }

    /// Create an empty deck with a custom acceptance policy.
    ///
    /// An empty deck cannot satisfy a policy with a non-zero floor, so such
    /// policies are refused with an argument error; use [`CardDeck::seeded`].
    pub fn with_policy(
        kind: DeckKind,
        capacity: usize,
        policy: impl AcceptancePolicy + 'static,
    ) -> Result<Self> {
        Self::seeded(kind, capacity, policy, std::iter::empty())
    }

    /// Create a deck whose bottom cards are `base`, bottom first.
    ///
    /// `base` must hold exactly `policy.floor()` cards and fit in
    /// `capacity`. Base cards are placed without consulting the policy and
    /// can never be removed.
    pub fn seeded(
        kind: DeckKind,
        capacity: usize,
        policy: impl AcceptancePolicy + 'static,
        base: impl IntoIterator<Item = Card>,
    ) -> Result<Self> {
        let floor = policy.floor();
        let mut deck = Self::build(kind, capacity, Box::new(policy));
        deck.cards.extend(base);

        if deck.cards.len() != floor {
            return Err(DeckError::argument(format!(
                "{} deck with floor {} was given {} base cards",
                kind,
                floor,
                deck.cards.len()
            )));
        }
        if floor > capacity {
            return Err(DeckError::argument(format!(
                "{} deck capacity {} cannot hold {} base cards",
                kind, capacity, floor
            )));
        }
        Ok(deck)
    }

    /// Create an empty source (draw) deck.
    #[must_use]
    pub fn source(capacity: usize) -> Self {
        Self::build(DeckKind::Source, capacity, Box::new(Unrestricted))
    }

    /// Create an empty help (auxiliary) deck.
    #[must_use]
    pub fn help(capacity: usize) -> Self {
        Self::build(DeckKind::Help, capacity, Box::new(Unrestricted))
    }

    /// Create a target deck holding `anchor` as its permanent bottom card.
    ///
    /// Fails with an argument error if `capacity` cannot hold the anchor.
    pub fn target(capacity: usize, anchor: Card) -> Result<Self> {
        if capacity < 1 {
            return Err(DeckError::argument(format!(
                "target deck capacity {} cannot hold an anchor card",
                capacity
            )));
        }
        Self::seeded(DeckKind::Target, capacity, MatchesTop, [anchor])
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate cards bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// The anchor card of a target deck (its bottom card).
    #[must_use]
    pub fn anchor(&self) -> Option<&Card> {
        if self.policy.floor() > 0 {
            self.cards.first()
        } else {
            None
        }
    }

    /// Place `card` on top.
    ///
    /// Refused when the deck is full, already holds this card, or its
    /// policy rejects the card against the current top. The refused card is
    /// returned inside the error.
    pub fn push(&mut self, card: Card) -> std::result::Result<(), PushError> {
        match self.check_top(&card) {
            Ok(()) => {
                self.cards.push(card);
                Ok(())
            }
            Err(violation) => {
                trace!("{} refused {}: {}", self.id, card, violation);
                Err(PushError::new(card, violation.into()))
            }
        }
    }

    /// Remove and return the top card.
    ///
    /// Fails when the deck is empty or only the anchor is left.
    pub fn pop(&mut self) -> Result<Card> {
        self.check_release()?;
        self.cards.pop().ok_or_else(|| StateViolation::Empty.into())
    }

    /// The top card.
    pub fn top(&self) -> Result<&Card> {
        self.cards.last().ok_or_else(|| StateViolation::Empty.into())
    }

    /// The card at `index`, counting from the bottom.
    pub fn card_at(&self, index: usize) -> Result<&Card> {
        self.cards.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Is this card instance in the deck?
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.contains_id(card.id())
    }

    /// Is a card with this id in the deck?
    #[must_use]
    pub fn contains_id(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    /// Is the deck at capacity?
    #[must_use]
    pub fn has_maximal_size(&self) -> bool {
        self.cards.len() == self.capacity
    }

    /// Is the deck at its floor? Empty for source and help decks, anchor
    /// only for target decks.
    #[must_use]
    pub fn has_minimal_size(&self) -> bool {
        self.cards.len() == self.policy.floor()
    }

    /// Could `card` be pushed right now?
    #[must_use]
    pub fn can_have_as_top(&self, card: &Card) -> bool {
        self.check_top(card).is_ok()
    }

    /// Copy the deck's contents into a serializable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            id: self.id,
            kind: self.kind,
            capacity: self.capacity,
            cards: self.cards.iter().map(CardView::from).collect(),
        }
    }

    pub(crate) fn check_top(&self, card: &Card) -> std::result::Result<(), StateViolation> {
        if self.cards.len() >= self.capacity {
            return Err(StateViolation::Full {
                capacity: self.capacity,
            });
        }
        if self.contains(card) {
            return Err(StateViolation::DuplicateCard(card.id()));
        }
        let top = self.cards.last();
        if !self.policy.accepts(top, card) {
            return Err(StateViolation::Rejected {
                card: card.face(),
                top: top.map(Card::face),
            });
        }
        Ok(())
    }

    pub(crate) fn check_release(&self) -> std::result::Result<(), StateViolation> {
        if self.cards.is_empty() {
            return Err(StateViolation::Empty);
        }
        if self.cards.len() <= self.policy.floor() {
            return Err(StateViolation::AnchorProtected);
        }
        Ok(())
    }

    /// Remove the top without consulting the floor. Callers must have run
    /// `check_release` or be reversing their own push.
    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Push a card already validated by `check_top`.
    pub(crate) fn push_unchecked(&mut self, card: Card) {
        debug_assert!(self.cards.len() < self.capacity);
        self.cards.push(card);
    }

    /// Put a card back on top without consulting the policy. Capacity is
    /// still enforced.
    pub(crate) fn restore_top(&mut self, card: Card) -> std::result::Result<(), PushError> {
        if self.cards.len() >= self.capacity {
            let capacity = self.capacity;
            return Err(PushError::new(card, StateViolation::Full { capacity }.into()));
        }
        self.cards.push(card);
        Ok(())
    }
}
