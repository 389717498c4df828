// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! Loading, layering and resolving commit-type configuration documents.
//!
//! Resolution runs in fixed steps: read each source, layer custom over
//! defaults, [`schema::validate`], then complete `order` and build the
//! indexed [`Configuration`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use super::schema::{self, RawCommitType, RawConfiguration};
use crate::domain::{CommitAlias, CommitType, Configuration};
use crate::error::{Error, Result};

/// The bundled commit-type catalogue
pub const BUILTIN_JSON: &str = include_str!("../../assets/default.json");

/// Reads a configuration source into a string
pub trait SourceReader {
    fn read(&self, path: &Path) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| Error::NotFound {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct Resolver<R = FsReader> {
    reader: R,
}

impl Resolver<FsReader> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: SourceReader> Resolver<R> {
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Resolve a single configuration file
    pub fn load_single(&self, path: &Path) -> Result<Configuration> {
        let document = self.read_json(path)?;
        resolve_value(document)
    }

    /// Resolve `custom` layered over `defaults`
    pub fn load_layered(&self, defaults: &Path, custom: &Path) -> Result<Configuration> {
        let defaults = self.read_json(defaults)?;
        let custom = self.read_json(custom)?;
        resolve_value(layer(defaults, custom))
    }

    /// Resolve `custom` layered over the built-in catalogue
    pub fn load_over_builtin(&self, custom: &Path) -> Result<Configuration> {
        let defaults = builtin_document()?;
        let custom = self.read_json(custom)?;
        resolve_value(layer(defaults, custom))
    }

    fn read_json(&self, path: &Path) -> Result<Value> {
        let content = self.reader.read(path)?;
        debug!(path = %path.display(), bytes = content.len(), "configuration source read");
        serde_json::from_str(&content).map_err(|source| Error::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve a single file from disk
pub fn load_single(path: impl AsRef<Path>) -> Result<Configuration> {
    Resolver::new().load_single(path.as_ref())
}

/// Resolve two files from disk, `custom` overriding `defaults`
pub fn load_layered(defaults: impl AsRef<Path>, custom: impl AsRef<Path>) -> Result<Configuration> {
    Resolver::new().load_layered(defaults.as_ref(), custom.as_ref())
}

/// Resolve the built-in catalogue
pub fn load_builtin() -> Result<Configuration> {
    resolve_value(builtin_document()?)
}

fn builtin_document() -> Result<Value> {
    serde_json::from_str(BUILTIN_JSON).map_err(|source| Error::InvalidJson {
        path: "<builtin>".into(),
        source,
    })
}

/// Resolve a JSON document held in memory
pub fn from_json_str(json: &str) -> Result<Configuration> {
    let document = serde_json::from_str(json).map_err(|source| Error::InvalidJson {
        path: "<memory>".into(),
        source,
    })?;
    resolve_value(document)
}

/// Validate a parsed document and build the indexed configuration
pub fn resolve_value(document: Value) -> Result<Configuration> {
    let raw = schema::validate(&document)?;
    Ok(build(raw))
}

/// Layer `custom` over `defaults`: a recursive merge where `custom` wins,
/// then `order` taken wholesale from `custom` when it has one.
pub fn layer(defaults: Value, custom: Value) -> Value {
    let custom_order = custom.get("order").cloned();

    let mut merged = defaults;
    deep_merge(&mut merged, custom);

    if let (Some(order), Value::Object(map)) = (custom_order, &mut merged) {
        map.insert("order".into(), order);
    }

    debug!("configuration layers merged");
    merged
}

/// Objects merge key by key; anything else in `other` replaces `base`
fn deep_merge(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                match base_map.get_mut(&key) {
                    Some(base_val) => deep_merge(base_val, other_val),
                    None => {
                        base_map.insert(key, other_val);
                    }
                }
            }
        }
        (base, other) => *base = other,
    }
}

/// Deduplicate the requested order, drop unknown keys, append missing ones
/// in `types` order
fn complete_order(types: &IndexMap<String, RawCommitType>, requested: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(types.len());
    let mut order = Vec::with_capacity(types.len());

    for key in requested {
        if !types.contains_key(&key) {
            warn!(key = %key, "order names an unknown type, ignoring");
            continue;
        }
        if seen.insert(key.clone()) {
            order.push(key);
        }
    }

    for key in types.keys() {
        if seen.insert(key.clone()) {
            order.push(key.clone());
        }
    }

    order
}

fn index_types(
    types: IndexMap<String, RawCommitType>,
    order: &[String],
) -> IndexMap<String, CommitType> {
    let positions: IndexMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(index, key)| (key.as_str(), index))
        .collect();

    // `order` covers every key of `types` after `complete_order`
    types
        .into_iter()
        .map(|(key, raw)| {
            let commit_type = CommitType {
                commit_type: raw.commit_type,
                title: raw.title,
                description: raw.description,
                semver: raw.semver,
                changelog: raw.changelog,
                emoji: raw.emoji,
                index: positions[key.as_str()],
            };
            (key, commit_type)
        })
        .collect()
}

fn report_ambiguities(types: &IndexMap<String, CommitType>, aliases: &IndexMap<String, CommitAlias>) {
    for (key, alias) in aliases {
        if !types.contains_key(&alias.commit_type) {
            warn!(alias = %key, target = %alias.commit_type, "alias points at an unknown type");
        }
    }

    let mut codes = HashSet::new();
    for code in types.values().map(|t| &t.emoji.code) {
        if !codes.insert(code) {
            warn!(code = %code, "emoji code shared by several types, first one wins");
        }
    }
    codes.clear();
    for code in aliases.values().map(|a| &a.emoji.code) {
        if !codes.insert(code) {
            warn!(code = %code, "emoji code shared by several aliases, first one wins");
        }
    }
}

fn build(raw: RawConfiguration) -> Configuration {
    let RawConfiguration {
        types,
        aliases,
        fallback,
        order,
        mut scopes,
    } = raw;

    let order = complete_order(&types, order);
    let types = index_types(types, &order);
    report_ambiguities(&types, &aliases);

    for key in types.keys().chain(aliases.keys()) {
        scopes.entry(key.clone()).or_default();
    }

    debug!(
        types = types.len(),
        aliases = aliases.len(),
        fallback = %fallback,
        "configuration resolved"
    );

    Configuration::new(types, aliases, fallback, order, scopes)
}
