//! Move requests and the records left by applied moves.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Face};
use crate::decks::DeckId;

/// A request to move the top card of `from` onto `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: DeckId,
    pub to: DeckId,
}

impl Move {
    #[must_use]
    pub const fn new(from: DeckId, to: DeckId) -> Self {
        Self { from, to }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An applied move, kept in the table history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Position in the history, starting at 0.
    pub sequence: usize,

    /// The move that was applied.
    pub mv: Move,

    /// The card that moved.
    pub card: CardId,

    /// Face of the card that moved.
    pub face: Face,
}

impl MoveRecord {
    #[must_use]
    pub fn new(sequence: usize, mv: Move, card: CardId, face: Face) -> Self {
        Self {
            sequence,
            mv,
            card,
            face,
        }
    }
}
