// Host-side integration tests for the flip session controller.
// The main crate is wasm-only, so we include the pure-Rust modules directly;
// `session` resolves its sibling through `super::coin`.

#![allow(dead_code)]
mod coin {
    include!("../src/core/coin.rs");
}
mod session {
    include!("../src/core/session.rs");
}

use coin::FlipOutcome;
use session::{FaceLabels, Session, HISTORY_CAP, LABEL_MAX_CHARS};

fn session(seed: u64) -> Session {
    Session::new(FaceLabels::new("HEADS", "TAILS"), seed)
}

#[test]
fn fresh_session_is_idle_with_empty_history() {
    let s = session(0);
    assert!(!s.is_flipping());
    assert!(s.history().is_empty());
}

#[test]
fn flip_round_trip_records_outcome_and_label() {
    let mut s = session(42);
    let outcome = s.request_flip().unwrap();
    assert!(s.is_flipping());

    let record = s.complete_flip(1000.0).unwrap().clone();
    assert_eq!(record.outcome, outcome);
    assert_eq!(
        record.label,
        match outcome {
            FlipOutcome::Heads => "HEADS",
            FlipOutcome::Tails => "TAILS",
        }
    );
    assert_eq!(record.timestamp_ms, 1000.0);
    assert!(!s.is_flipping());
    assert_eq!(s.history().len(), 1);
}

#[test]
fn request_while_in_flight_is_a_noop() {
    let mut s = session(1);
    let first = s.request_flip();
    assert!(first.is_some());
    assert!(s.request_flip().is_none());

    // Only the first request produces a record.
    s.complete_flip(0.0);
    assert_eq!(s.history().len(), 1);
}

#[test]
fn complete_without_request_is_a_noop() {
    let mut s = session(2);
    assert!(s.complete_flip(0.0).is_none());
    assert!(s.history().is_empty());
}

#[test]
fn history_is_capped_and_newest_first() {
    let mut s = session(9);
    for i in 0..13 {
        s.request_flip().unwrap();
        s.complete_flip(i as f64);
    }
    assert_eq!(s.history().len(), HISTORY_CAP);

    // Prepend order: descending ids, the latest flip at index 0.
    let ids: Vec<u64> = s.history().iter().map(|r| r.id).collect();
    assert_eq!(ids[0], 13);
    for pair in ids.windows(2) {
        assert!(pair[0] > pair[1]);
    }
    assert_eq!(s.history()[0].timestamp_ms, 12.0);
}

#[test]
fn record_label_snapshots_at_launch_not_landing() {
    let mut s = Session::new(FaceLabels::new("GOLDEN CROWN", "SILVER EAGLE"), 42);
    let outcome = s.request_flip().unwrap();
    let expected = s.labels().for_outcome(outcome).to_string();

    // Mid-flight edits retexture the coin but must not rewrite the record.
    s.labels_mut().set_heads("NEW HEADS");
    s.labels_mut().set_tails("NEW TAILS");

    let record = s.complete_flip(500.0).unwrap();
    assert_eq!(record.label, expected);
}

#[test]
fn labels_truncate_by_characters() {
    let mut labels = FaceLabels::new("ABCDEFGHIJKLMNOPQRST", "TAILS");
    assert_eq!(labels.heads(), "ABCDEFGHIJKLMNO");
    assert_eq!(labels.heads().chars().count(), LABEL_MAX_CHARS);

    // Multi-byte text counts characters, not bytes.
    labels.set_tails("가나다라마바사아자차카타파하거너");
    assert_eq!(labels.tails().chars().count(), LABEL_MAX_CHARS);
    assert_eq!(labels.tails(), "가나다라마바사아자차카타파하거");
}

#[test]
fn same_seed_draws_the_same_outcome_sequence() {
    let mut a = session(1234);
    let mut b = session(1234);
    for _ in 0..20 {
        let oa = a.request_flip().unwrap();
        let ob = b.request_flip().unwrap();
        assert_eq!(oa, ob);
        a.complete_flip(0.0);
        b.complete_flip(0.0);
    }
}

#[test]
fn outcomes_are_not_constant() {
    let mut s = session(7);
    let mut seen_heads = false;
    let mut seen_tails = false;
    for _ in 0..64 {
        match s.request_flip().unwrap() {
            FlipOutcome::Heads => seen_heads = true,
            FlipOutcome::Tails => seen_tails = true,
        }
        s.complete_flip(0.0);
    }
    assert!(seen_heads && seen_tails);
}
