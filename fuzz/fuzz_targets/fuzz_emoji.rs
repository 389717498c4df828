// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitmoji::domain::{is_emoji_character, is_emoji_code};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = is_emoji_code(data);
    let _ = is_emoji_character(data);
});
