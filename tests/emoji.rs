// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitmoji::domain::{is_emoji_character, is_emoji_code};
use proptest::prelude::*;

#[test]
fn accepts_shortcodes() {
    for code in [":sparkles:", ":bug:", ":white_check_mark:", ":100:"] {
        assert!(is_emoji_code(code), "expected {code:?} to be accepted");
    }
}

#[test]
fn rejects_malformed_shortcodes() {
    for code in ["sparkles", ":sparkles", "sparkles:", "::", ":two words:", ":+1:", " :bug: "] {
        assert!(!is_emoji_code(code), "expected {code:?} to be rejected");
    }
}

#[test]
fn accepts_single_emoji() {
    let accepted = [
        "✨",         // plain pictograph
        "🐛",         // astral plane
        "⚡️",         // with variation selector
        "👍🏽",         // skin tone
        "🧑‍💻",        // ZWJ sequence
        "🇳🇱",         // flag pair
        "1️⃣",          // keycap
    ];
    for character in accepted {
        assert!(is_emoji_character(character), "expected {character:?} to be accepted");
    }
}

#[test]
fn rejects_non_emoji() {
    for character in ["", "a", "1", ":bug:", "✨✨", "✨ ", "bug 🐛"] {
        assert!(!is_emoji_character(character), "expected {character:?} to be rejected");
    }
}

proptest! {
    #[test]
    fn predicates_never_panic(input in ".*") {
        let _ = is_emoji_code(&input);
        let _ = is_emoji_character(&input);
    }
}
