pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use app::App;
pub use cli::Cli;
pub use config::Settings;
pub use domain::{CommitAlias, CommitType, Configuration};
pub use error::{Error, Result};
pub use services::resolver::Resolver;
pub use services::template::{Template, TemplateValue};
