//! The table: a set of decks the game loop plays on.
//!
//! The `Table` owns its decks, tracks which deck every card is in, enumerates
//! legal moves, and keeps a history of applied moves that can be undone.
//!
//! ## Usage
//!
//! ```
//! use patience_engine::cards::{Card, Face};
//! use patience_engine::table::{Move, Table, TableConfig};
//!
//! let config = TableConfig::new().source(5).target(10, Face::Joker);
//! let mut table = Table::from_config(&config).unwrap();
//! let ids: Vec<_> = table.deck_ids().collect();
//!
//! table.place(ids[0], Card::numbered(4).unwrap()).unwrap();
//! assert_eq!(table.legal_moves(), vec![Move::new(ids[0], ids[1])]);
//!
//! let record = table.apply(Move::new(ids[0], ids[1])).unwrap();
//! assert_eq!(table.location_of(record.card), Some(ids[1]));
//!
//! table.undo().unwrap();
//! assert_eq!(table.location_of(record.card), Some(ids[0]));
//! ```

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::TableConfig;
use super::record::{Move, MoveRecord};
use crate::cards::{Card, CardId};
use crate::decks::{CardDeck, DeckId, DeckSnapshot};
use crate::error::{PushError, Result, StateViolation};

/// Point-in-time copy of every deck on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Decks in table order.
    pub decks: Vec<DeckSnapshot>,

    /// Number of moves in the history.
    pub moves: usize,
}

/// A collection of decks with card-location tracking and move history.
#[derive(Debug, Default)]
pub struct Table {
    /// Decks in insertion order.
    decks: Vec<CardDeck>,

    /// deck id -> position in `decks`
    index: FxHashMap<DeckId, usize>,

    /// Card locations: card id -> deck id
    locations: FxHashMap<CardId, DeckId>,

    history: Vec<MoveRecord>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a layout configuration.
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let mut table = Self::new();
        for spec in &config.decks {
            table.add_deck(spec.build()?);
        }
        Ok(table)
    }

    /// Add a deck, returning its id.
    pub fn add_deck(&mut self, deck: CardDeck) -> DeckId {
        let id = deck.id();
        for card in deck.iter() {
            self.locations.insert(card.id(), id);
        }
        self.index.insert(id, self.decks.len());
        self.decks.push(deck);
        id
    }

    /// Place a new card on top of a deck, subject to the deck's rules.
    pub fn place(&mut self, deck: DeckId, card: Card) -> std::result::Result<(), PushError> {
        let Some(&pos) = self.index.get(&deck) else {
            return Err(PushError::new(card, StateViolation::MissingDeck(deck).into()));
        };
        let id = card.id();
        self.decks[pos].push(card)?;
        self.locations.insert(id, deck);
        Ok(())
    }

    #[must_use]
    pub fn deck(&self, id: DeckId) -> Option<&CardDeck> {
        self.index.get(&id).map(|&pos| &self.decks[pos])
    }

    /// Decks in insertion order.
    pub fn decks(&self) -> impl Iterator<Item = &CardDeck> + '_ {
        self.decks.iter()
    }

    /// Deck ids in insertion order.
    pub fn deck_ids(&self) -> impl Iterator<Item = DeckId> + '_ {
        self.decks.iter().map(CardDeck::id)
    }

    /// Number of decks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// The deck a card is in.
    #[must_use]
    pub fn location_of(&self, card: CardId) -> Option<DeckId> {
        self.locations.get(&card).copied()
    }

    /// Would `apply(mv)` succeed?
    #[must_use]
    pub fn can_move(&self, mv: Move) -> bool {
        if mv.from == mv.to {
            return false;
        }
        match (self.deck(mv.from), self.deck(mv.to)) {
            (Some(donor), Some(target)) => donor.top_matches_on(target),
            _ => false,
        }
    }

    /// Every legal move, donors in table order, targets in table order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (i, donor) in self.decks.iter().enumerate() {
            for (j, target) in self.decks.iter().enumerate() {
                if i != j && donor.top_matches_on(target) {
                    moves.push(Move::new(donor.id(), target.id()));
                }
            }
        }
        moves
    }

    /// No legal move is left.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        !self.decks.iter().enumerate().any(|(i, donor)| {
            self.decks
                .iter()
                .enumerate()
                .any(|(j, target)| i != j && donor.top_matches_on(target))
        })
    }

    /// Apply a move and record it in the history.
    ///
    /// Unknown decks and self-moves fail with an invalid-state error, as do
    /// all move-protocol violations. A failed move changes nothing.
    pub fn apply(&mut self, mv: Move) -> Result<MoveRecord> {
        let (donor, target) = pair_mut(&mut self.decks, &self.index, mv)?;
        let top = donor.top()?;
        let (card, face) = (top.id(), top.face());

        donor.move_top(target)?;

        self.locations.insert(card, mv.to);
        let record = MoveRecord::new(self.history.len(), mv, card, face);
        debug!("applied #{} {} ({})", record.sequence, mv, face);
        self.history.push(record.clone());
        Ok(record)
    }

    /// Undo the most recent move. The card goes back on its donor without
    /// consulting the donor's acceptance policy.
    ///
    /// Returns `Ok(None)` when the history is empty. Fails with an
    /// invalid-state error when the moved card is no longer on top of its
    /// target (`Covered`) or the donor has filled up since (`Full`); the
    /// table and its history are left unchanged.
    pub fn undo(&mut self) -> Result<Option<MoveRecord>> {
        let Some(record) = self.history.last().cloned() else {
            return Ok(None);
        };
        let (donor, target) = pair_mut(&mut self.decks, &self.index, record.mv)?;

        match target.cards().last() {
            Some(top) if top.id() == record.card => {}
            _ => return Err(StateViolation::Covered(record.card).into()),
        }
        let card = target.take_top().ok_or(StateViolation::Empty)?;
        if let Err(err) = donor.restore_top(card) {
            let (card, err) = err.into_parts();
            target.push_unchecked(card);
            trace!("undo of #{} {} refused: {}", record.sequence, record.mv, err);
            return Err(err);
        }

        self.history.pop();
        self.locations.insert(record.card, record.mv.from);
        debug!("undid #{} {}", record.sequence, record.mv);
        Ok(Some(record))
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            decks: self.decks.iter().map(CardDeck::snapshot).collect(),
            moves: self.history.len(),
        }
    }
}

/// Borrow the donor and target of `mv` mutably at the same time.
fn pair_mut<'a>(
    decks: &'a mut [CardDeck],
    index: &FxHashMap<DeckId, usize>,
    mv: Move,
) -> Result<(&'a mut CardDeck, &'a mut CardDeck)> {
    let from = *index.get(&mv.from).ok_or(StateViolation::MissingDeck(mv.from))?;
    let to = *index.get(&mv.to).ok_or(StateViolation::MissingDeck(mv.to))?;
    if from == to {
        return Err(StateViolation::SameDeck(mv.from).into());
    }

    if from < to {
        let (low, high) = decks.split_at_mut(to);
        Ok((&mut low[from], &mut high[0]))
    } else {
        let (low, high) = decks.split_at_mut(from);
        Ok((&mut high[0], &mut low[to]))
    }
}
