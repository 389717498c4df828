// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A single schema violation, located by a dotted path into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

fn list_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Configuration file not found or unreadable: {}", path.display())]
    #[diagnostic(
        code(commitmoji::config::not_found),
        help("Check the path, or run `commitmoji init` to write the built-in catalogue")
    )]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file is not valid JSON: {}", path.display())]
    #[diagnostic(code(commitmoji::config::invalid_json))]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration failed validation ({} violation(s)):\n{}", violations.len(), list_violations(violations))]
    #[diagnostic(
        code(commitmoji::config::validation),
        help("Fix every listed field; emoji codes look like :sparkles:")
    )]
    Validation { violations: Vec<Violation> },

    #[error("Missing value for placeholder(s): {}", names.join(", "))]
    #[diagnostic(
        code(commitmoji::template::missing_placeholder),
        help("Pass a value for each placeholder or give the template a default")
    )]
    MissingPlaceholder { names: Vec<String> },

    #[error("Settings error: {0}")]
    #[diagnostic(code(commitmoji::settings::error))]
    Settings(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
