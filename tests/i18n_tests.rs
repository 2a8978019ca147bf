// Host-side integration tests for the localization tables.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod i18n {
    include!("../src/core/i18n.rs");
}

use i18n::{default_labels, detect, strings, Language};

#[test]
fn detect_maps_primary_subtags() {
    assert_eq!(detect("ko"), Language::Ko);
    assert_eq!(detect("ko-KR"), Language::Ko);
    assert_eq!(detect("en-US"), Language::En);
    assert_eq!(detect("ja"), Language::Ja);
    assert_eq!(detect("zh-CN"), Language::Zh);
    assert_eq!(detect("zh_TW"), Language::Zh);
    assert_eq!(detect("es-419"), Language::Es);
    assert_eq!(detect("de-AT"), Language::De);
    assert_eq!(detect("fr-CA"), Language::Fr);
}

#[test]
fn detect_is_case_insensitive() {
    assert_eq!(detect("KO-kr"), Language::Ko);
    assert_eq!(detect("De"), Language::De);
}

#[test]
fn detect_falls_back_to_english() {
    assert_eq!(detect(""), Language::En);
    assert_eq!(detect("pt-BR"), Language::En);
    assert_eq!(detect("xx-YY"), Language::En);
}

#[test]
fn every_language_has_a_complete_table() {
    for lang in Language::ALL {
        let s = strings(lang);
        for text in [
            s.app_title,
            s.settings,
            s.heads_text,
            s.tails_text,
            s.recent_tosses,
            s.no_history,
            s.flip,
            s.heads,
            s.tails,
        ] {
            assert!(!text.is_empty(), "{:?} has an empty string", lang);
        }
    }
}

#[test]
fn default_labels_fit_the_face() {
    // Faces allow at most 15 characters, so every default must already fit.
    for lang in Language::ALL {
        let (heads, tails) = default_labels(lang);
        assert!(heads.chars().count() <= 15);
        assert!(tails.chars().count() <= 15);
        assert_ne!(heads, tails);
    }
}
