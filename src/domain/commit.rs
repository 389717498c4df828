// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Emoji;
use crate::services::template::TemplateValue;

/// Which part of a semantic version a commit type bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverKind {
    Major,
    Minor,
    Patch,
}

impl SemverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for SemverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved commit type. `index` is its position in the configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub title: String,
    pub description: String,
    pub semver: Option<SemverKind>,
    pub changelog: bool,
    pub emoji: Emoji,
    pub index: usize,
}

/// An alternate name bound to a commit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAlias {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub name: String,
    pub description: String,
    pub semver: Option<SemverKind>,
    pub changelog: bool,
    pub emoji: Emoji,
}

fn semver_value(semver: Option<SemverKind>) -> TemplateValue {
    semver.map_or_else(|| TemplateValue::from(""), |s| TemplateValue::from(s.as_str()))
}

impl CommitType {
    /// Values for rendering a message template against this type
    pub fn template_values(&self) -> IndexMap<String, TemplateValue> {
        let mut values = IndexMap::new();
        values.insert("type".into(), self.commit_type.as_str().into());
        values.insert("title".into(), self.title.as_str().into());
        values.insert("description".into(), self.description.as_str().into());
        values.insert("emoji".into(), self.emoji.character.as_str().into());
        values.insert("code".into(), self.emoji.code.as_str().into());
        values.insert("emoji_name".into(), self.emoji.name.as_str().into());
        values.insert("semver".into(), semver_value(self.semver));
        values.insert("changelog".into(), self.changelog.into());
        values.insert("index".into(), self.index.into());
        values
    }
}

impl CommitAlias {
    /// Values for rendering a message template against this alias.
    /// `title` is not set; aliases carry only a description.
    pub fn template_values(&self) -> IndexMap<String, TemplateValue> {
        let mut values = IndexMap::new();
        values.insert("type".into(), self.commit_type.as_str().into());
        values.insert("name".into(), self.name.as_str().into());
        values.insert("description".into(), self.description.as_str().into());
        values.insert("emoji".into(), self.emoji.character.as_str().into());
        values.insert("code".into(), self.emoji.code.as_str().into());
        values.insert("emoji_name".into(), self.emoji.name.as_str().into());
        values.insert("semver".into(), semver_value(self.semver));
        values.insert("changelog".into(), self.changelog.into());
        values
    }
}
