// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

/// A commit type record as it appears on disk
#[allow(dead_code)]
pub fn type_record(name: &str, code: &str, character: &str) -> Value {
    json!({
        "type": name,
        "title": format!("{name} title"),
        "description": format!("{name} description"),
        "semver": null,
        "changelog": false,
        "emoji": { "character": character, "code": code, "name": name }
    })
}

/// An alias record as it appears on disk
#[allow(dead_code)]
pub fn alias_record(name: &str, target: &str, code: &str, character: &str) -> Value {
    json!({
        "type": target,
        "name": name,
        "description": format!("{name} alias"),
        "semver": "patch",
        "changelog": true,
        "emoji": { "character": character, "code": code, "name": name }
    })
}

/// Small but complete defaults document
#[allow(dead_code)]
pub fn defaults_document() -> Value {
    json!({
        "types": {
            "feat": {
                "type": "feat",
                "title": "Features",
                "description": "A new feature",
                "semver": "minor",
                "changelog": true,
                "emoji": { "character": "✨", "code": ":sparkles:", "name": "sparkles" }
            },
            "fix": type_record("fix", ":bug:", "🐛"),
            "build": type_record("build", ":package:", "📦️"),
            "chore": type_record("chore", ":broom:", "🧹")
        },
        "aliases": {
            "dependencies": alias_record("dependencies", "build", ":heavy_plus_sign:", "➕"),
            "hotfix": alias_record("hotfix", "fix", ":ambulance:", "🚑️")
        },
        "fallback": "chore",
        "order": ["fix", "feat", "build", "chore"],
        "scopes": { "feat": ["cli", "core"] }
    })
}

/// Write `document` to `name` inside a fresh temp dir
#[allow(dead_code)]
pub fn write_json(dir: &TempDir, name: &str, document: &Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}
