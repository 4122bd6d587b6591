//! Card values and card instances.
//!
//! A [`Face`] is what a card shows: a Joker, a Jack, or a numbered card with a
//! [`Pip`] value. A [`Card`] is a specific physical card: a face plus a unique
//! [`CardId`]. Two cards showing the same face are still different cards.
//!
//! ```
//! use patience_engine::cards::{Card, Face};
//!
//! let six = Card::numbered(6).unwrap();
//! let other_six = Card::numbered(6).unwrap();
//!
//! assert_eq!(six.face(), other_six.face());
//! assert_ne!(six.id(), other_six.id());
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(0);

/// Unique identifier for a card instance.
///
/// Minted from a process-wide counter, so ids are never reused while the
/// process runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    fn fresh() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Value of a numbered card, guaranteed to lie in `Pip::MIN..=Pip::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pip(u8);

impl Pip {
    /// Lowest numbered value.
    pub const MIN: u8 = 1;
    /// Highest numbered value.
    pub const MAX: u8 = 10;

    /// Create a pip value.
    ///
    /// Fails with an argument error outside `MIN..=MAX`.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DeckError::argument(format!(
                "numbered card value {} outside {}..={}",
                value,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every valid pip, lowest first.
    pub fn all() -> impl Iterator<Item = Pip> {
        (Self::MIN..=Self::MAX).map(Pip)
    }
}

impl TryFrom<u8> for Pip {
    type Error = DeckError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Pip> for u8 {
    fn from(pip: Pip) -> u8 {
        pip.0
    }
}

impl std::fmt::Display for Pip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a card shows. The set of faces is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Wild card: matches anything.
    Joker,
    /// Face card, ranked just above the highest numbered card.
    Jack,
    /// Numbered card.
    Numbered(Pip),
}

impl Face {
    /// Numbered face, validating the value.
    pub fn numbered(value: u8) -> Result<Self> {
        Pip::new(value).map(Face::Numbered)
    }

    /// Rank used by the matching rules. Jokers have no rank.
    #[must_use]
    pub fn rank(self) -> Option<u8> {
        match self {
            Face::Joker => None,
            Face::Jack => Some(super::matching::JACK_RANK),
            Face::Numbered(pip) => Some(pip.value()),
        }
    }

    /// Is this the wild card?
    #[must_use]
    pub fn is_wild(self) -> bool {
        matches!(self, Face::Joker)
    }

    /// Every face, Joker and Jack first, then numbered cards lowest first.
    pub fn all() -> impl Iterator<Item = Face> {
        [Face::Joker, Face::Jack]
            .into_iter()
            .chain(Pip::all().map(Face::Numbered))
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Joker => write!(f, "Joker"),
            Face::Jack => write!(f, "Jack"),
            Face::Numbered(pip) => write!(f, "{}", pip),
        }
    }
}

/// A card instance.
///
/// Cards are immutable and not `Clone`: a card lives in exactly one place at
/// a time and changes deck by being moved.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    id: CardId,
    face: Face,
}

impl Card {
    /// Create a new card instance with a fresh id.
    #[must_use]
    pub fn new(face: Face) -> Self {
        Self {
            id: CardId::fresh(),
            face,
        }
    }

    /// Create a Joker.
    #[must_use]
    pub fn joker() -> Self {
        Self::new(Face::Joker)
    }

    /// Create a Jack.
    #[must_use]
    pub fn jack() -> Self {
        Self::new(Face::Jack)
    }

    /// Create a numbered card. Fails with an argument error for values
    /// outside `Pip::MIN..=Pip::MAX`.
    pub fn numbered(value: u8) -> Result<Self> {
        Face::numbered(value).map(Self::new)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    /// Can `other` be stacked directly on this card?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.face.matches(other.face)
    }

    /// Is this the same card instance as `other`?
    #[must_use]
    pub fn is(&self, other: &Card) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.face, self.id.0)
    }
}
