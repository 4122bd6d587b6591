//! Table of decks for a game loop to drive.
//!
//! ## Key Types
//!
//! - `TableConfig` / `DeckSpec`: Layout configuration (serde-serializable)
//! - `Table`: Owns the decks, tracks card locations, applies and undoes moves
//! - `Move` / `MoveRecord`: Move requests and history entries

pub mod config;
pub mod layout;
pub mod record;

pub use config::{DeckSpec, TableConfig};
pub use layout::{Table, TableSnapshot};
pub use record::{Move, MoveRecord};
