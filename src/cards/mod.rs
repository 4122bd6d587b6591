//! Card system: faces, card instances, and the matching relation.
//!
//! ## Key Types
//!
//! - `Face`: Closed set of card kinds (`Joker`, `Jack`, `Numbered`)
//! - `Pip`: Range-checked value of a numbered card
//! - `Card`: A specific card instance with a unique `CardId`
//!
//! Matching rules live in [`matching`].

pub mod card;
pub mod matching;

pub use card::{Card, CardId, Face, Pip};
pub use matching::{matches, JACK_RANK, JACK_THRESHOLD};
