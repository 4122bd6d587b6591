//! Deck system: bounded stacks, acceptance policies, and the move protocol.
//!
//! ## Key Types
//!
//! - `CardDeck`: Capacity-bounded LIFO stack of cards
//! - `DeckKind`: Role of a deck (source, help, target, custom)
//! - `AcceptancePolicy`: Decides which cards a deck accepts and its floor
//! - `SharedDeck`: A deck behind a mutex, with lock-ordered moves
//!
//! ## Deck Roles
//!
//! Source and help decks accept any card while capacity allows and act as
//! donors. Target decks are seeded with an anchor card that never leaves and
//! only accept cards matching their current top.

pub mod deck;
pub mod moves;
pub mod policy;
pub mod shared;

pub use deck::{CardDeck, CardView, DeckId, DeckKind, DeckSnapshot};
pub use policy::{AcceptancePolicy, MatchesTop, Unrestricted};
pub use shared::SharedDeck;
