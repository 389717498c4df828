// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitmoji::services::resolver::from_json_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(config) = from_json_str(data) {
        assert_eq!(config.order().len(), config.type_count());
        assert!(config.types().contains_key(config.fallback()));
        for (i, key) in config.order().iter().enumerate() {
            assert_eq!(config.types()[key].index, i);
        }
    }
});
