// Host-side integration tests for the face texture cache.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod face {
    include!("../src/core/face.rs");
}

use face::{CoinFace, FaceTextureCache};

#[test]
fn first_label_always_rasterizes() {
    let mut cache = FaceTextureCache::default();
    assert!(cache.refresh(CoinFace::Heads, "HEADS"));
    assert!(cache.refresh(CoinFace::Tails, "TAILS"));
}

#[test]
fn identical_label_skips_the_rerender() {
    let mut cache = FaceTextureCache::default();
    cache.refresh(CoinFace::Heads, "HEADS");
    // Same text again, e.g. a keystroke that was immediately undone.
    assert!(!cache.refresh(CoinFace::Heads, "HEADS"));
    assert!(!cache.refresh(CoinFace::Heads, "HEADS"));
}

#[test]
fn changed_label_rerenders_and_sticks() {
    let mut cache = FaceTextureCache::default();
    cache.refresh(CoinFace::Heads, "HEADS");
    assert!(cache.refresh(CoinFace::Heads, "CROWN"));
    assert!(!cache.refresh(CoinFace::Heads, "CROWN"));
    // Reverting to an earlier label still counts as a change.
    assert!(cache.refresh(CoinFace::Heads, "HEADS"));
}

#[test]
fn faces_are_cached_independently() {
    let mut cache = FaceTextureCache::default();
    cache.refresh(CoinFace::Heads, "SAME");
    // The tails slot has not seen this text yet.
    assert!(cache.refresh(CoinFace::Tails, "SAME"));
    assert!(cache.refresh(CoinFace::Heads, "OTHER"));
    assert!(!cache.refresh(CoinFace::Tails, "SAME"));
}
