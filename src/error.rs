//! Error taxonomy for the rule core.
//!
//! Every precondition violation surfaces as a [`DeckError`]. Callers that only
//! care about the broad category can match on [`DeckError::kind`]:
//!
//! - `InvalidState`: the deck's current state forbids the operation
//!   (empty, full, anchor protected, move rejected by the target).
//! - `Argument`: a constructor received a structurally invalid argument.
//! - `IndexOutOfRange`: positional lookup outside `[0, len)`.

use thiserror::Error;

use crate::cards::{Card, CardId, Face};
use crate::decks::DeckId;

/// Broad error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidState,
    Argument,
    IndexOutOfRange,
}

/// Why a deck refused an operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("deck is empty")]
    Empty,

    #[error("deck is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("{0} is already in this deck")]
    DuplicateCard(CardId),

    #[error("the anchor card cannot be removed")]
    AnchorProtected,

    #[error("{card} cannot be stacked on {}", describe_top(.top))]
    Rejected { card: Face, top: Option<Face> },

    #[error("{0} is covered by a later card")]
    Covered(CardId),

    #[error("no deck with id {0}")]
    MissingDeck(DeckId),

    #[error("cannot move {0} onto itself")]
    SameDeck(DeckId),

    #[error("lock for {0} is poisoned")]
    Poisoned(DeckId),
}

fn describe_top(top: &Option<Face>) -> String {
    match top {
        Some(face) => face.to_string(),
        None => "an empty deck".to_string(),
    }
}

/// Crate-wide error type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("invalid state: {0}")]
    InvalidState(#[from] StateViolation),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

impl DeckError {
    /// Create an argument error.
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Broad category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::InvalidArgument(_) => ErrorKind::Argument,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    /// The state violation, if this is an `InvalidState` error.
    #[must_use]
    pub fn violation(&self) -> Option<&StateViolation> {
        match self {
            Self::InvalidState(v) => Some(v),
            _ => None,
        }
    }
}

/// A refused push. Carries the card back to the caller so it is not lost.
#[derive(Debug, Error)]
#[error("push of {card} refused: {source}")]
pub struct PushError {
    card: Card,
    source: DeckError,
}

impl PushError {
    pub(crate) fn new(card: Card, source: DeckError) -> Self {
        Self { card, source }
    }

    /// The card that was refused.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// The reason for the refusal.
    #[must_use]
    pub fn error(&self) -> &DeckError {
        &self.source
    }

    /// Take the card back, discarding the error.
    #[must_use]
    pub fn into_card(self) -> Card {
        self.card
    }

    /// Split into the card and the error.
    #[must_use]
    pub fn into_parts(self) -> (Card, DeckError) {
        (self.card, self.source)
    }
}

impl From<PushError> for DeckError {
    fn from(err: PushError) -> Self {
        err.source
    }
}

pub type Result<T, E = DeckError> = std::result::Result<T, E>;
