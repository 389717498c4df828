// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

//! Flat `{name}` placeholder substitution.
//!
//! A [`Template`] never changes after construction. [`Template::render`]
//! needs a value or default for every placeholder;
//! [`Template::partial_render`] fills only the given values and hands back a
//! new template with the rest still open.
//! Substituted text is not scanned again, so values may contain braces.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use indexmap::{IndexMap, IndexSet};
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// A scalar replacement value.
///
/// Floats print without a trailing `.0` for whole numbers; non-finite floats
/// print as `NaN`, `Infinity` and `-Infinity`.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) if n.is_nan() => f.write_str("NaN"),
            Self::Float(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for TemplateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for TemplateValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for TemplateValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for TemplateValue {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u32> for TemplateValue {
    fn from(n: u32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<usize> for TemplateValue {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Float(n as f64),
        }
    }
}

impl From<f64> for TemplateValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for TemplateValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&TemplateValue> for TemplateValue {
    fn from(v: &TemplateValue) -> Self {
        v.clone()
    }
}

pub type Values = IndexMap<String, TemplateValue>;

fn collect_values<I, K, V>(values: I) -> Values
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<TemplateValue>,
{
    values
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

struct Substitution {
    text: String,
    resolved: IndexSet<String>,
    missing: IndexSet<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Template {
    source: String,
    defaults: Values,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            defaults: Values::new(),
        }
    }

    pub fn with_defaults<I, K, V>(source: impl Into<String>, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TemplateValue>,
    {
        Self {
            source: source.into(),
            defaults: collect_values(defaults),
        }
    }

    /// The pattern exactly as constructed
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn defaults(&self) -> &Values {
        &self.defaults
    }

    /// Distinct placeholder names, in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: IndexSet<&str> = IndexSet::new();
        for caps in PLACEHOLDER.captures_iter(&self.source) {
            if let Some(name) = caps.get(1) {
                names.insert(name.as_str());
            }
        }
        names.into_iter().collect()
    }

    /// Substitute every placeholder. Fails with [`Error::MissingPlaceholder`]
    /// if any placeholder has neither a value nor a default.
    pub fn render<I, K, V>(&self, values: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TemplateValue>,
    {
        let sub = self.substitute(&collect_values(values), true);
        if !sub.missing.is_empty() {
            return Err(Error::MissingPlaceholder {
                names: sub.missing.into_iter().collect(),
            });
        }
        Ok(sub.text)
    }

    /// Substitute the placeholders given in `values` and return a new
    /// template holding the rest. Defaults are not applied here: they carry
    /// over to the new template for every placeholder `values` left open,
    /// and are dropped for the ones it filled.
    pub fn partial_render<I, K, V>(&self, values: I) -> Template
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TemplateValue>,
    {
        let sub = self.substitute(&collect_values(values), false);
        let defaults = self
            .defaults
            .iter()
            .filter(|(name, _)| !sub.resolved.contains(name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Template {
            source: sub.text,
            defaults,
        }
    }

    fn lookup<'a>(
        &'a self,
        values: &'a Values,
        name: &str,
        use_defaults: bool,
    ) -> Option<&'a TemplateValue> {
        values
            .get(name)
            .or_else(|| use_defaults.then(|| self.defaults.get(name)).flatten())
    }

    fn substitute(&self, values: &Values, use_defaults: bool) -> Substitution {
        let mut resolved = IndexSet::new();
        let mut missing = IndexSet::new();

        let text = PLACEHOLDER.replace_all(&self.source, |caps: &Captures<'_>| {
            let name = &caps[1];
            match self.lookup(values, name, use_defaults) {
                Some(value) => {
                    resolved.insert(name.to_owned());
                    Cow::Owned(value.to_string())
                }
                None => {
                    missing.insert(name.to_owned());
                    Cow::Owned(caps[0].to_owned())
                }
            }
        });

        Substitution {
            text: text.into_owned(),
            resolved,
            missing,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.source
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}
