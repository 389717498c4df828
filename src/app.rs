// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;
use std::path::Path;

use console::style;
use dialoguer::Confirm;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::{PROJECT_CATALOGUE, Settings};
use crate::domain::{CommitType, Configuration};
use crate::error::{Error, Result};
use crate::services::resolver::{self, BUILTIN_JSON, Resolver};
use crate::services::template::{Template, Values};

pub struct App {
    cli: Cli,
    settings: Settings,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let settings = Settings::load(&cli)?;
        debug!(
            defaults = ?settings.defaults_path,
            custom = ?settings.custom_path,
            template = %settings.template,
            "settings loaded"
        );
        Ok(Self { cli, settings })
    }

    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List => self.list(),
            Commands::Show { name } => self.show(name),
            Commands::Render {
                pattern,
                commit_type,
                set,
                partial,
            } => self.render(pattern.as_deref(), commit_type.as_deref(), set, *partial),
            Commands::Init { force } => self.init(*force),
            Commands::Config => {
                println!("Defaults: {}", describe_path(self.settings.defaults_path.as_deref()));
                println!("Custom: {}", describe_path(self.settings.custom_path.as_deref()));
                println!("Template: {}", self.settings.template);
                if let Some(path) = Settings::settings_path() {
                    println!("Settings file: {}", path.display());
                }
                Ok(())
            }
        }
    }

    /// Resolve the catalogue the settings point at
    fn configuration(&self) -> Result<Configuration> {
        let resolver = Resolver::new();
        match (&self.settings.defaults_path, &self.settings.custom_path) {
            (Some(defaults), Some(custom)) => resolver.load_layered(defaults, custom),
            (Some(defaults), None) => resolver.load_single(defaults),
            (None, Some(custom)) => resolver.load_over_builtin(custom),
            (None, None) => resolver::load_builtin(),
        }
    }

    fn list(&self) -> Result<()> {
        let config = self.configuration()?;
        let fallback = config.fallback_type().index;
        for commit_type in config.types_in_order() {
            let marker = if commit_type.index == fallback {
                style("*").dim().to_string()
            } else {
                " ".to_owned()
            };
            println!(
                "{:>2} {} {}{:<10} {}",
                commit_type.index,
                commit_type.emoji.character,
                marker,
                style(&commit_type.commit_type).bold(),
                commit_type.title
            );
        }
        Ok(())
    }

    /// Look `name` up, falling back to the configured fallback type on a miss
    fn pick<'c>(&self, config: &'c Configuration, name: &str) -> &'c CommitType {
        match config.resolve(name) {
            Some(commit_type) => commit_type,
            None => {
                self.print_warning(&format!(
                    "Unknown commit type '{}', using fallback '{}'",
                    name,
                    config.fallback()
                ));
                config.fallback_type()
            }
        }
    }

    fn show(&self, name: &str) -> Result<()> {
        let config = self.configuration()?;
        let commit_type = self.pick(&config, name);

        println!(
            "{} {}",
            commit_type.emoji.character,
            style(&commit_type.commit_type).bold()
        );
        println!("  title:       {}", commit_type.title);
        println!("  description: {}", commit_type.description);
        println!("  emoji:       {} ({})", commit_type.emoji.code, commit_type.emoji.name);
        println!(
            "  semver:      {}",
            commit_type.semver.map_or("none", |s| s.as_str())
        );
        println!("  changelog:   {}", commit_type.changelog);
        println!("  index:       {}", commit_type.index);

        if let Some(alias) = config.find_alias_by_name(name) {
            println!("  alias:       {} ({})", alias.name, alias.description);
        }

        let scopes = config.scopes_for(&commit_type.commit_type);
        if !scopes.is_empty() {
            println!("  scopes:      {}", scopes.join(", "));
        }
        Ok(())
    }

    fn render(
        &self,
        pattern: Option<&str>,
        commit_type: Option<&str>,
        set: &[(String, String)],
        partial: bool,
    ) -> Result<()> {
        let template = Template::new(pattern.unwrap_or(&self.settings.template));

        let mut values = Values::new();
        if let Some(name) = commit_type {
            let config = self.configuration()?;
            let commit_type = self.pick(&config, name);
            values.extend(commit_type.template_values());

            // An alias keeps the type's values but shows its own emoji
            if let Some(alias) = config
                .find_alias_by_name(name)
                .or_else(|| config.find_alias_by_emoji_code(name))
            {
                values.extend(alias.template_values());
            }
        }
        values.extend(set.iter().map(|(k, v)| (k.clone(), v.into())));

        debug!(
            placeholders = ?template.placeholders(),
            values = values.len(),
            "rendering template"
        );

        if partial {
            println!("{}", template.partial_render(&values));
        } else {
            println!("{}", template.render(&values)?);
        }
        Ok(())
    }

    fn init(&self, force: bool) -> Result<()> {
        let path = std::env::current_dir()?.join(PROJECT_CATALOGUE);

        if path.exists() && !force {
            let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
            if !is_interactive {
                self.print_warning(&format!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                ));
                return Err(Error::Cancelled);
            }

            let overwrite = Confirm::new()
                .with_prompt(format!("Overwrite {}?", path.display()))
                .default(false)
                .interact()?;
            if !overwrite {
                return Err(Error::Cancelled);
            }
        }

        std::fs::write(&path, BUILTIN_JSON)?;
        eprintln!("{} Wrote {}", style("✓").green().bold(), path.display());
        self.print_info("Edit it to add types, aliases, order and scopes");
        Ok(())
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

fn describe_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "(built-in)".to_owned(), |p| p.display().to_string())
}
