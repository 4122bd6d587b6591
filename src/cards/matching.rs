//! The pairwise matching relation.
//!
//! `first.matches(second)` decides whether `second` may be stacked directly
//! on `first`. The relation is evaluated by case analysis on both faces:
//!
//! | First       | Second      | Match                      |
//! |-------------|-------------|----------------------------|
//! | Joker       | any         | always                     |
//! | any         | Joker       | always                     |
//! | Jack        | Jack        | never                      |
//! | Jack        | Numbered(v) | `v >= JACK_THRESHOLD`      |
//! | Numbered(v) | Jack        | `v >= JACK_THRESHOLD`      |
//! | Numbered(a) | Numbered(b) | `abs(a - b) <= 1`          |
//!
//! The relation is not transitive, so it must always be checked pair by pair.

use super::card::Face;

/// Rank a Jack takes when compared against numbered cards.
pub const JACK_RANK: u8 = 11;

/// Lowest numbered value that matches a Jack.
///
/// A Jack matches numbered cards within one rank of `JACK_RANK`.
pub const JACK_THRESHOLD: u8 = JACK_RANK - 1;

/// Can `second` be stacked directly on `first`?
#[must_use]
pub fn matches(first: Face, second: Face) -> bool {
    match (first, second) {
        (Face::Joker, _) | (_, Face::Joker) => true,
        (Face::Jack, Face::Jack) => false,
        (Face::Jack, Face::Numbered(pip)) | (Face::Numbered(pip), Face::Jack) => {
            pip.value() >= JACK_THRESHOLD
        }
        (Face::Numbered(a), Face::Numbered(b)) => a.value().abs_diff(b.value()) <= 1,
    }
}

impl Face {
    /// Can `other` be stacked directly on this face?
    #[must_use]
    pub fn matches(self, other: Face) -> bool {
        matches(self, other)
    }
}
