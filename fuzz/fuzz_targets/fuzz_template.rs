// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitmoji::Template;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let (pattern, value) = data.split_once('\0').unwrap_or((data, ""));
    let template = Template::with_defaults(pattern, [("type", "feat")]);

    let _ = template.render([("subject", value)]);
    let partial = template.partial_render([("subject", value)]);
    assert_eq!(template.as_str(), pattern);
    let _ = partial.render([("scope", value)]);
});
