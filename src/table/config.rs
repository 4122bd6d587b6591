//! Table layout configuration.
//!
//! A game loop describes its table as a list of [`DeckSpec`]s and builds it
//! with [`Table::from_config`](super::Table::from_config). The engine never
//! hardcodes how many decks exist or how large they are.
//!
//! ```
//! use patience_engine::cards::Face;
//! use patience_engine::table::{Table, TableConfig};
//!
//! let config = TableConfig::new()
//!     .source(5)
//!     .help(3)
//!     .target(10, Face::Joker);
//!
//! let table = Table::from_config(&config).unwrap();
//! assert_eq!(table.len(), 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Face};
use crate::decks::{CardDeck, DeckKind};
use crate::error::{DeckError, Result};

/// Configuration for a single deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Role of the deck.
    pub kind: DeckKind,

    /// Maximum number of cards, anchor included.
    pub capacity: usize,

    /// Anchor face. Required for target decks, forbidden otherwise.
    #[serde(default)]
    pub anchor: Option<Face>,

    /// Initial cards above the anchor, bottom first.
    #[serde(default)]
    pub cards: Vec<Face>,
}

impl DeckSpec {
    /// Create a spec with no anchor and no initial cards.
    #[must_use]
    pub fn new(kind: DeckKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            anchor: None,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn source(capacity: usize) -> Self {
        Self::new(DeckKind::Source, capacity)
    }

    #[must_use]
    pub fn help(capacity: usize) -> Self {
        Self::new(DeckKind::Help, capacity)
    }

    #[must_use]
    pub fn target(capacity: usize, anchor: Face) -> Self {
        Self::new(DeckKind::Target, capacity).with_anchor(anchor)
    }

    /// Set the anchor face.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Face) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the initial cards, bottom first.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Face>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// Build the deck, minting a fresh card for every face.
    ///
    /// Fails with an argument error when a target has no anchor, a non-target
    /// has one, the kind is `Custom`, or an initial card is refused.
    pub fn build(&self) -> Result<CardDeck> {
        let mut deck = match (self.kind, self.anchor) {
            (DeckKind::Target, Some(anchor)) => CardDeck::target(self.capacity, Card::new(anchor))?,
            (DeckKind::Target, None) => {
                return Err(DeckError::argument("target deck requires an anchor card"));
            }
            (DeckKind::Source | DeckKind::Help, Some(_)) => {
                return Err(DeckError::argument(format!(
                    "{} deck cannot have an anchor card",
                    self.kind
                )));
            }
            (DeckKind::Source, None) => CardDeck::source(self.capacity),
            (DeckKind::Help, None) => CardDeck::help(self.capacity),
            (DeckKind::Custom, _) => {
                return Err(DeckError::argument(
                    "custom decks need a policy and cannot be built from configuration",
                ));
            }
        };

        for &face in &self.cards {
            deck.push(Card::new(face)).map_err(|err| {
                DeckError::argument(format!("initial {} rejected: {}", face, err.error()))
            })?;
        }

        Ok(deck)
    }
}

/// Configuration for a whole table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Decks in table order.
    pub decks: Vec<DeckSpec>,
}

impl TableConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deck spec.
    #[must_use]
    pub fn deck(mut self, spec: DeckSpec) -> Self {
        self.decks.push(spec);
        self
    }

    /// Add an empty source deck.
    #[must_use]
    pub fn source(self, capacity: usize) -> Self {
        self.deck(DeckSpec::source(capacity))
    }

    /// Add an empty help deck.
    #[must_use]
    pub fn help(self, capacity: usize) -> Self {
        self.deck(DeckSpec::help(capacity))
    }

    /// Add a target deck anchored by `anchor`.
    #[must_use]
    pub fn target(self, capacity: usize, anchor: Face) -> Self {
        self.deck(DeckSpec::target(capacity, anchor))
    }
}
