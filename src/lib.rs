//! # patience-engine
//!
//! Rule core for a patience-style solitaire.
//!
//! ## Design Principles
//!
//! 1. **Closed card set**: `Joker`, `Jack` and numbered cards. Matching is a
//!    single case analysis over pairs of faces.
//!
//! 2. **One deck type, pluggable rules**: Source, help and target decks are
//!    the same `CardDeck` with a different `AcceptancePolicy`.
//!
//! 3. **Atomic moves**: A move checks every precondition before touching
//!    either deck. A failed move changes nothing.
//!
//! 4. **Exclusive card ownership**: Cards are not `Clone`. A card changes
//!    deck only by being moved, so no two decks can hold the same card.
//!
//! ## Modules
//!
//! - `cards`: Faces, card instances, and the matching relation
//! - `decks`: Bounded stacks, acceptance policies, move protocol, shared decks
//! - `table`: Deck collections with location tracking, legal moves, and undo
//! - `error`: Error taxonomy

pub mod cards;
pub mod decks;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Face, Pip, JACK_RANK, JACK_THRESHOLD};

pub use crate::decks::{
    AcceptancePolicy, CardDeck, CardView, DeckId, DeckKind, DeckSnapshot,
    MatchesTop, SharedDeck, Unrestricted,
};

pub use crate::error::{DeckError, ErrorKind, PushError, StateViolation};

pub use crate::table::{DeckSpec, Move, MoveRecord, Table, TableConfig, TableSnapshot};
