// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Project-level commit-type overrides picked up from the working directory
pub const PROJECT_CATALOGUE: &str = ".commitmoji.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Defaults layer. `None` uses the built-in catalogue.
    #[serde(default)]
    pub defaults_path: Option<PathBuf>,

    /// Custom layer. `None` uses `.commitmoji.json` when it exists.
    #[serde(default)]
    pub custom_path: Option<PathBuf>,

    /// Commit message pattern, rendered against the chosen type
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "{emoji} {type}: {title}".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            defaults_path: None,
            custom_path: None,
            template: default_template(),
        }
    }
}

impl Settings {
    /// Load with priority: CLI > ENV > project settings > user settings > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        // User-level settings
        if let Some(path) = Self::settings_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Project-level settings (.commitmoji.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_settings = cwd.join(".commitmoji.toml");
            if project_settings.exists() {
                figment = figment.merge(Toml::file(&project_settings));
            }
        }

        // Environment variables (COMMITMOJI_TEMPLATE, COMMITMOJI_CUSTOM_PATH, etc.)
        figment = figment.merge(Env::prefixed("COMMITMOJI_").split("__"));

        let mut settings: Settings = figment
            .extract()
            .map_err(|e| Error::Settings(e.to_string()))?;

        if settings.custom_path.is_none() {
            if let Ok(cwd) = std::env::current_dir() {
                let project_catalogue = cwd.join(PROJECT_CATALOGUE);
                if project_catalogue.exists() {
                    settings.custom_path = Some(project_catalogue);
                }
            }
        }

        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn settings_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitmoji").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn settings_path() -> Option<PathBuf> {
        Self::settings_dir().map(|d| d.join("settings.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref p) = cli.defaults {
            self.defaults_path = Some(p.clone());
        }
        if let Some(ref p) = cli.custom {
            self.custom_path = Some(p.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.template.trim().is_empty() {
            return Err(Error::Settings("template cannot be empty".into()));
        }

        for (name, path) in [
            ("defaults_path", &self.defaults_path),
            ("custom_path", &self.custom_path),
        ] {
            if let Some(path) = path {
                if !is_json(path) {
                    return Err(Error::Settings(format!(
                        "{name} must point at a .json file, got '{}'",
                        path.display()
                    )));
                }
            }
        }

        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
