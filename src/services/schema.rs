// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! Shape checks for a raw configuration document.
//!
//! [`validate`] walks the whole document and reports every violation it
//! finds instead of stopping at the first one. It does no ordering or
//! indexing; that is the resolver's job.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::{CommitAlias, Emoji, SemverKind, is_emoji_character, is_emoji_code};
use crate::error::{Error, Result, Violation};

/// A commit type as written in the file, before it has an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommitType {
    pub commit_type: String,
    pub title: String,
    pub description: String,
    pub semver: Option<SemverKind>,
    pub changelog: bool,
    pub emoji: Emoji,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawConfiguration {
    pub types: IndexMap<String, RawCommitType>,
    pub aliases: IndexMap<String, CommitAlias>,
    pub fallback: String,
    pub order: Vec<String>,
    pub scopes: IndexMap<String, Vec<String>>,
}

/// Check `document` against the configuration shape
pub fn validate(document: &Value) -> Result<RawConfiguration> {
    let mut checker = Checker::default();
    let config = checker.configuration(document);

    match config {
        Some(config) if checker.violations.is_empty() => Ok(config),
        _ => Err(Error::Validation {
            violations: checker.violations,
        }),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn report(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.report(path, format!("expected an object, found {}", kind(other)));
                None
            }
        }
    }

    fn coerce<T: DeserializeOwned>(&mut self, value: &Value, path: &str) -> Option<T> {
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                self.report(path, e.to_string());
                None
            }
        }
    }

    fn required<T: DeserializeOwned>(
        &mut self,
        map: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<T> {
        let path = join(path, key);
        match map.get(key) {
            Some(value) => self.coerce(value, &path),
            None => {
                self.report(path, "is required");
                None
            }
        }
    }

    /// Absent and `null` both read as `Some(None)`; `None` means invalid
    fn optional<T: DeserializeOwned>(
        &mut self,
        map: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<Option<T>> {
        match map.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(value) => self.coerce(value, &join(path, key)).map(Some),
        }
    }

    fn configuration(&mut self, document: &Value) -> Option<RawConfiguration> {
        let root = self.object(document, "")?;

        let types = match root.get("types") {
            Some(value) => self.entries(value, "types", Self::commit_type),
            None => {
                self.report("types", "is required");
                None
            }
        };

        let aliases = match root.get("aliases") {
            None | Some(Value::Null) => Some(IndexMap::new()),
            Some(value) => self.entries(value, "aliases", Self::commit_alias),
        };

        let fallback: Option<String> = self.required(root, "fallback", "");
        if let (Some(fallback), Some(Value::Object(raw_types))) = (&fallback, root.get("types")) {
            if !raw_types.contains_key(fallback) {
                self.report("fallback", format!("`{fallback}` is not a key of `types`"));
            }
        }

        let order: Option<Option<Vec<String>>> = self.optional(root, "order", "");

        let scopes = match root.get("scopes") {
            None | Some(Value::Null) => Some(IndexMap::new()),
            Some(value) => self.entries(value, "scopes", |checker, value, path| {
                checker.coerce::<Vec<String>>(value, path)
            }),
        };

        Some(RawConfiguration {
            types: types?,
            aliases: aliases?,
            fallback: fallback?,
            order: order?.unwrap_or_default(),
            scopes: scopes?,
        })
    }

    /// Check every entry of an object-valued field, even after a failure
    fn entries<T>(
        &mut self,
        value: &Value,
        path: &str,
        check: impl Fn(&mut Self, &Value, &str) -> Option<T>,
    ) -> Option<IndexMap<String, T>> {
        let map = self.object(value, path)?;
        let mut out = IndexMap::with_capacity(map.len());
        let mut complete = true;

        for (key, entry) in map {
            match check(self, entry, &join(path, key)) {
                Some(parsed) => {
                    out.insert(key.clone(), parsed);
                }
                None => complete = false,
            }
        }

        complete.then_some(out)
    }

    fn type_name(&mut self, map: &Map<String, Value>, path: &str) -> Option<String> {
        let raw: String = self.required(map, "type", path)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.report(join(path, "type"), "must not be empty");
            return None;
        }
        Some(trimmed.to_owned())
    }

    fn emoji(&mut self, map: &Map<String, Value>, path: &str) -> Option<Emoji> {
        let path = join(path, "emoji");
        let Some(value) = map.get("emoji") else {
            self.report(path, "is required");
            return None;
        };
        let emoji = self.object(value, &path)?;

        let character: Option<String> = self.required(emoji, "character", &path);
        let code: Option<String> = self.required(emoji, "code", &path);
        let name: Option<String> = self.required(emoji, "name", &path);

        let character = character.filter(|character| {
            let ok = is_emoji_character(character);
            if !ok {
                self.report(
                    join(&path, "character"),
                    format!("`{character}` is not a single emoji"),
                );
            }
            ok
        });
        let code = code.filter(|code| {
            let ok = is_emoji_code(code);
            if !ok {
                self.report(join(&path, "code"), format!("`{code}` does not match ^:\\w+:$"));
            }
            ok
        });

        Some(Emoji {
            character: character?,
            code: code?,
            name: name?,
        })
    }

    fn commit_type(&mut self, value: &Value, path: &str) -> Option<RawCommitType> {
        let map = self.object(value, path)?;

        let commit_type = self.type_name(map, path);
        let title = self.required(map, "title", path);
        let description = self.required(map, "description", path);
        let semver = self.optional(map, "semver", path);
        let changelog = self.required(map, "changelog", path);
        let emoji = self.emoji(map, path);

        Some(RawCommitType {
            commit_type: commit_type?,
            title: title?,
            description: description?,
            semver: semver?,
            changelog: changelog?,
            emoji: emoji?,
        })
    }

    fn commit_alias(&mut self, value: &Value, path: &str) -> Option<CommitAlias> {
        let map = self.object(value, path)?;

        let commit_type = self.type_name(map, path);
        let name = self.required(map, "name", path);
        let description = self.required(map, "description", path);
        let semver = self.optional(map, "semver", path);
        let changelog = self.required(map, "changelog", path);
        let emoji = self.emoji(map, path);

        Some(CommitAlias {
            commit_type: commit_type?,
            name: name?,
            description: description?,
            semver: semver?,
            changelog: changelog?,
            emoji: emoji?,
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
