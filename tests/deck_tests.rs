//! Deck integration tests.
//!
//! These tests walk through the deck scenarios a game loop relies on:
//! pushing onto source decks, capacity limits, anchored target decks, and
//! the matching rules as seen through deck legality.

use patience_engine::cards::{Card, Face};
use patience_engine::decks::{AcceptancePolicy, CardDeck, DeckKind};
use patience_engine::error::{ErrorKind, StateViolation};

// =============================================================================
// Source Deck Tests
// =============================================================================

/// Test pushing three jokers onto a source deck.
#[test]
fn test_source_push_three_jokers() {
    let mut deck = CardDeck::source(5);

    let mut last_id = None;
    for _ in 0..3 {
        let joker = Card::joker();
        last_id = Some(joker.id());
        deck.push(joker).unwrap();
    }

    assert_eq!(deck.len(), 3);
    assert_eq!(Some(deck.top().unwrap().id()), last_id);
}

/// Test that a zero-capacity deck refuses every card.
#[test]
fn test_source_zero_capacity() {
    let mut deck = CardDeck::source(0);

    let err = deck.push(Card::joker()).unwrap_err();
    assert_eq!(err.error().kind(), ErrorKind::InvalidState);
    assert!(deck.has_minimal_size());
    assert!(deck.has_maximal_size());
}

/// Test that equal faces are still distinct cards.
#[test]
fn test_equal_faces_are_distinct_cards() {
    let mut deck = CardDeck::help(4);
    let a = Card::numbered(6).unwrap();
    let b = Card::numbered(6).unwrap();
    let (a_id, b_id) = (a.id(), b.id());

    deck.push(a).unwrap();
    deck.push(b).unwrap();

    assert_eq!(deck.len(), 2);
    assert!(deck.contains_id(a_id));
    assert!(deck.contains_id(b_id));
    assert_eq!(deck.card_at(0).unwrap().id(), a_id);
    assert_eq!(deck.card_at(1).unwrap().id(), b_id);
}

/// Test positional lookup bounds.
#[test]
fn test_card_at_out_of_range() {
    let deck = CardDeck::source(3);

    let err = deck.card_at(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

// =============================================================================
// Target Deck Tests
// =============================================================================

/// Test that the anchor of a target deck cannot be removed.
#[test]
fn test_target_anchor_cannot_be_removed() {
    let mut target = CardDeck::target(2, Card::joker()).unwrap();

    let err = target.pop().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.violation(), Some(&StateViolation::AnchorProtected));
    assert_eq!(target.len(), 1);
}

/// Test that a target deck returns to minimal size after popping back down.
#[test]
fn test_target_minimal_size_tracks_baseline() {
    let anchor = Card::numbered(5).unwrap();
    let anchor_id = anchor.id();
    let mut target = CardDeck::target(4, anchor).unwrap();
    assert!(target.has_minimal_size());

    target.push(Card::numbered(4).unwrap()).unwrap();
    target.push(Card::joker()).unwrap();
    assert!(!target.has_minimal_size());

    target.pop().unwrap();
    target.pop().unwrap();
    assert!(target.has_minimal_size());
    assert_eq!(target.card_at(0).unwrap().id(), anchor_id);
}

/// Test that target decks only accept cards matching the current top.
#[test]
fn test_target_follows_top() {
    let mut target = CardDeck::target(10, Card::numbered(3).unwrap()).unwrap();

    target.push(Card::numbered(4).unwrap()).unwrap();
    target.push(Card::numbered(5).unwrap()).unwrap();

    // 3 matched the anchor but no longer matches the 5 on top
    let refused = target.push(Card::numbered(3).unwrap()).unwrap_err();
    assert_eq!(refused.card().face(), Face::numbered(3).unwrap());

    // a joker on top accepts anything, even a Jack
    target.push(Card::joker()).unwrap();
    target.push(Card::jack()).unwrap();
    assert_eq!(target.len(), 5);
}

/// Test that a Jack anchor accepts only high numbered cards.
#[test]
fn test_jack_anchor_threshold() {
    let target = CardDeck::target(3, Card::jack()).unwrap();

    assert!(target.can_have_as_top(&Card::numbered(10).unwrap()));
    assert!(!target.can_have_as_top(&Card::numbered(9).unwrap()));
    assert!(!target.can_have_as_top(&Card::numbered(8).unwrap()));
    assert!(!target.can_have_as_top(&Card::jack()));
    assert!(target.can_have_as_top(&Card::joker()));
}

// =============================================================================
// Matching Scenarios
// =============================================================================

/// Test numbered adjacency from the six's point of view.
#[test]
fn test_six_matches_seven_not_eight() {
    let six = Card::numbered(6).unwrap();

    assert!(!six.matches(&Card::numbered(8).unwrap()));
    assert!(six.matches(&Card::numbered(7).unwrap()));
}

// =============================================================================
// Custom Policies
// =============================================================================

/// Only accepts cards strictly higher than the current top.
#[derive(Debug)]
struct Ascending;

impl AcceptancePolicy for Ascending {
    fn accepts(&self, top: Option<&Card>, candidate: &Card) -> bool {
        match (top.and_then(|c| c.face().rank()), candidate.face().rank()) {
            (None, _) => true,
            (Some(top), Some(next)) => next > top,
            (Some(_), None) => false,
        }
    }
}

/// Test a deck built with a caller-supplied policy.
#[test]
fn test_custom_policy() {
    let mut deck = CardDeck::with_policy(DeckKind::Custom, 5, Ascending).unwrap();

    deck.push(Card::numbered(2).unwrap()).unwrap();
    deck.push(Card::numbered(7).unwrap()).unwrap();
    deck.push(Card::jack()).unwrap();
    assert!(deck.push(Card::numbered(10).unwrap()).is_err());
    assert!(deck.push(Card::joker()).is_err());

    assert_eq!(deck.kind(), DeckKind::Custom);
    assert!(deck.anchor().is_none());
    // floor defaults to zero
    while deck.pop().is_ok() {}
    assert!(deck.is_empty());
}
