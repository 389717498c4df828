// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use indexmap::IndexMap;
use serde::Serialize;

use super::{CommitAlias, CommitType};

/// A resolved, validated commit-type catalogue.
///
/// Built only by [`crate::services::resolver`], which guarantees that
/// `fallback` names a type, that `order` lists every type key exactly once,
/// that each type's `index` is its position in `order`, and that `scopes`
/// has an entry for every type and alias key. Read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    types: IndexMap<String, CommitType>,
    aliases: IndexMap<String, CommitAlias>,
    fallback: String,
    order: Vec<String>,
    scopes: IndexMap<String, Vec<String>>,
}

impl Configuration {
    pub(crate) fn new(
        types: IndexMap<String, CommitType>,
        aliases: IndexMap<String, CommitAlias>,
        fallback: String,
        order: Vec<String>,
        scopes: IndexMap<String, Vec<String>>,
    ) -> Self {
        Self {
            types,
            aliases,
            fallback,
            order,
            scopes,
        }
    }

    pub fn types(&self) -> &IndexMap<String, CommitType> {
        &self.types
    }

    pub fn aliases(&self) -> &IndexMap<String, CommitAlias> {
        &self.aliases
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn scopes(&self) -> &IndexMap<String, Vec<String>> {
        &self.scopes
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// The fallback type; always present in a resolved configuration
    pub fn fallback_type(&self) -> &CommitType {
        &self.types[self.fallback.as_str()]
    }

    /// Permitted scopes for a type or alias key, empty when none are listed
    pub fn scopes_for(&self, key: &str) -> &[String] {
        self.scopes.get(key).map_or(&[], Vec::as_slice)
    }

    /// Types in configured order
    pub fn types_in_order(&self) -> impl Iterator<Item = &CommitType> {
        self.order.iter().filter_map(|key| self.types.get(key))
    }

    pub fn find_type_by_name(&self, name: &str) -> Option<&CommitType> {
        self.types.get(name)
    }

    pub fn find_type_by_alias_name(&self, name: &str) -> Option<&CommitType> {
        let alias = self.aliases.get(name)?;
        self.types.get(&alias.commit_type)
    }

    /// First type (in insertion order) carrying `code`
    pub fn find_type_by_emoji_code(&self, code: &str) -> Option<&CommitType> {
        for commit_type in self.types.values() {
            if commit_type.emoji.code == code {
                return Some(commit_type);
            }
        }
        None
    }

    pub fn find_alias_by_name(&self, name: &str) -> Option<&CommitAlias> {
        self.aliases.get(name)
    }

    /// First alias (in insertion order) carrying `code`
    pub fn find_alias_by_emoji_code(&self, code: &str) -> Option<&CommitAlias> {
        for alias in self.aliases.values() {
            if alias.emoji.code == code {
                return Some(alias);
            }
        }
        None
    }

    /// Look `name` up as a type name, then an alias name, then an emoji code.
    /// Does not fall back; callers decide what a miss means.
    pub fn resolve(&self, name: &str) -> Option<&CommitType> {
        self.find_type_by_name(name)
            .or_else(|| self.find_type_by_alias_name(name))
            .or_else(|| self.find_type_by_emoji_code(name))
            .or_else(|| {
                let alias = self.find_alias_by_emoji_code(name)?;
                self.types.get(&alias.commit_type)
            })
    }
}
