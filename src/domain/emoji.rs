// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub character: String,
    pub code: String,
    pub name: String,
}

static EMOJI_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:\w+:$").unwrap());

// One emoji: a flag pair, a keycap, or a pictographic base with optional
// variation selector / skin tone, ZWJ-joined into a sequence.
static EMOJI_CHARACTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?:
            [\x{1F1E6}-\x{1F1FF}]{2}
          | [0-9\#*]\x{FE0F}?\x{20E3}
          | \p{Extended_Pictographic}[\x{FE0E}\x{FE0F}]?[\x{1F3FB}-\x{1F3FF}]?
            (?:\x{200D}\p{Extended_Pictographic}[\x{FE0E}\x{FE0F}]?[\x{1F3FB}-\x{1F3FF}]?)*
        )$",
    )
    .unwrap()
});

/// Whether `code` has the `:shortcode:` shape
pub fn is_emoji_code(code: &str) -> bool {
    EMOJI_CODE.is_match(code)
}

/// Whether `character` is exactly one emoji (possibly a ZWJ sequence)
pub fn is_emoji_character(character: &str) -> bool {
    EMOJI_CHARACTER.is_match(character)
}
