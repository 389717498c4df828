// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitmoji")]
#[command(version)]
#[command(about = "Emoji commit types and message templates", long_about = None)]
pub struct Cli {
    /// Defaults catalogue (JSON); the built-in one when omitted
    #[arg(long, global = true)]
    pub defaults: Option<PathBuf>,

    /// Custom catalogue (JSON) layered over the defaults
    #[arg(long, global = true)]
    pub custom: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List commit types in configured order
    List,
    /// Show a commit type by type name, alias or emoji code
    Show {
        /// Type name, alias name or :emoji_code:
        name: String,
    },
    /// Render a message template for a commit type
    Render {
        /// Pattern with {placeholders}; the configured template when omitted
        pattern: Option<String>,

        /// Type name, alias name or :emoji_code: to take values from
        #[arg(short = 't', long = "type")]
        commit_type: Option<String>,

        /// Extra placeholder values, KEY=VALUE (repeatable)
        #[arg(short, long = "set", value_parser = parse_key_value)]
        set: Vec<(String, String)>,

        /// Leave unresolved placeholders in place instead of failing
        #[arg(long)]
        partial: bool,
    },
    /// Write the built-in catalogue to .commitmoji.json for editing
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
    /// Show current settings
    Config,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_owned(), value.to_owned()))
}
