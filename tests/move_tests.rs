//! Move protocol integration tests.
//!
//! These tests verify that moves are all-or-nothing across plain decks and
//! shared (mutex-guarded) decks.

use std::thread;

use patience_engine::cards::{Card, Face};
use patience_engine::decks::{CardDeck, SharedDeck};
use patience_engine::error::{ErrorKind, StateViolation};

// =============================================================================
// Direct Moves
// =============================================================================

/// Test moving a joker from a source onto a joker-anchored target.
#[test]
fn test_source_joker_onto_target() {
    let mut source = CardDeck::source(5);
    source.push(Card::joker()).unwrap();
    let mut target = CardDeck::target(10, Card::joker()).unwrap();

    assert!(source.top_matches_on(&target));
    source.move_top(&mut target).unwrap();

    assert_eq!(source.len(), 0);
    assert_eq!(target.len(), 2);
}

/// Test that a successful move shifts exactly one card.
#[test]
fn test_move_effect() {
    let mut help = CardDeck::help(4);
    help.push(Card::numbered(2).unwrap()).unwrap();
    help.push(Card::numbered(9).unwrap()).unwrap();
    let mut target = CardDeck::target(4, Card::numbered(10).unwrap()).unwrap();

    let moved = help.top().unwrap().id();
    let (help_before, target_before) = (help.len(), target.len());

    help.move_top(&mut target).unwrap();

    assert_eq!(help.len(), help_before - 1);
    assert_eq!(target.len(), target_before + 1);
    assert_eq!(target.top().unwrap().id(), moved);
    assert!(!help.contains_id(moved));
}

/// Test that every failure mode leaves both decks unchanged.
#[test]
fn test_failed_moves_are_atomic() {
    // mismatch
    let mut source = CardDeck::source(3);
    source.push(Card::jack()).unwrap();
    let mut target = CardDeck::target(3, Card::jack()).unwrap();
    let (s, t) = (source.snapshot(), target.snapshot());
    assert!(source.move_top(&mut target).is_err());
    assert_eq!((source.snapshot(), target.snapshot()), (s, t));

    // full target
    let mut full = CardDeck::target(1, Card::joker()).unwrap();
    let (s, t) = (source.snapshot(), full.snapshot());
    assert!(source.move_top(&mut full).is_err());
    assert_eq!((source.snapshot(), full.snapshot()), (s, t));

    // empty donor
    let mut empty = CardDeck::help(3);
    let mut help = CardDeck::help(3);
    let (s, t) = (empty.snapshot(), help.snapshot());
    assert!(empty.move_top(&mut help).is_err());
    assert_eq!((empty.snapshot(), help.snapshot()), (s, t));
}

/// Test that a target deck can donate cards above its anchor but not the anchor.
#[test]
fn test_target_as_donor() {
    let mut donor = CardDeck::target(3, Card::numbered(9).unwrap()).unwrap();
    donor.push(Card::numbered(10).unwrap()).unwrap();
    let mut help = CardDeck::help(3);

    donor.move_top(&mut help).unwrap();
    assert_eq!(help.top().unwrap().face(), Face::numbered(10).unwrap());

    let err = donor.move_top(&mut help).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert_eq!(err.violation(), Some(&StateViolation::AnchorProtected));
    assert!(!donor.top_matches_on(&help));
}

/// Test a chain of moves through a help deck.
#[test]
fn test_help_deck_staging() {
    let mut source = CardDeck::source(5);
    source.push(Card::numbered(6).unwrap()).unwrap();
    source.push(Card::numbered(2).unwrap()).unwrap();
    let mut help = CardDeck::help(2);
    let mut target = CardDeck::target(5, Card::numbered(5).unwrap()).unwrap();

    // the 2 blocks the 6; park it on the help deck
    assert!(!source.top_matches_on(&target));
    source.move_top(&mut help).unwrap();

    assert!(source.top_matches_on(&target));
    source.move_top(&mut target).unwrap();

    assert!(source.is_empty());
    assert_eq!(help.len(), 1);
    assert_eq!(target.len(), 2);
}

// =============================================================================
// Shared Decks
// =============================================================================

/// Test that opposite-direction moves between two shared decks do not deadlock.
#[test]
fn test_shared_opposite_directions() {
    let a = SharedDeck::new(CardDeck::help(100));
    let b = SharedDeck::new(CardDeck::help(100));
    for _ in 0..50 {
        a.push(Card::joker()).unwrap();
        b.push(Card::joker()).unwrap();
    }

    let (a2, b2) = (a.clone(), b.clone());
    let forward = thread::spawn(move || {
        for _ in 0..500 {
            let _ = a2.move_top_to(&b2);
        }
    });
    let (a3, b3) = (a.clone(), b.clone());
    let backward = thread::spawn(move || {
        for _ in 0..500 {
            let _ = b3.move_top_to(&a3);
        }
    });

    forward.join().unwrap();
    backward.join().unwrap();

    assert_eq!(a.len().unwrap() + b.len().unwrap(), 100);
}

/// Test that a shared target keeps its anchor under contention.
#[test]
fn test_shared_target_keeps_anchor() {
    let target = SharedDeck::new(CardDeck::target(50, Card::joker()).unwrap());
    let anchor = target.snapshot().unwrap().cards[0].id;
    let sinks: Vec<_> = (0..4).map(|_| SharedDeck::new(CardDeck::help(50))).collect();

    for _ in 0..20 {
        target.push(Card::joker()).unwrap();
    }

    let handles: Vec<_> = sinks
        .iter()
        .cloned()
        .map(|sink| {
            let target = target.clone();
            thread::spawn(move || while target.move_top_to(&sink).is_ok() {})
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = target.snapshot().unwrap();
    assert_eq!(snapshot.cards.len(), 1);
    assert_eq!(snapshot.cards[0].id, anchor);

    let moved: usize = sinks.iter().map(|s| s.len().unwrap()).sum();
    assert_eq!(moved, 20);
}

/// Test running a mutation through `with`.
#[test]
fn test_shared_with() {
    let deck = SharedDeck::new(CardDeck::source(3));
    deck.with(|d| d.push(Card::jack())).unwrap().unwrap();

    let top = deck.with(|d| d.top().map(Card::face)).unwrap().unwrap();
    assert_eq!(top, Face::Jack);
}
