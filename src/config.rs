//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `PUBLIC_DIR`: directory holding the résumé and other static files,
//!   default `public`
//!
//! Leptos options (site root, pkg dir, output name) come from the
//! cargo-leptos environment via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use leptos::config::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but is not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let public_dir = std::env::var("PUBLIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from);
        Ok(Self { port, public_dir })
    }

    /// Where the résumé linked from the page is expected on disk.
    pub fn resume_path(&self) -> PathBuf {
        resume_path(&self.public_dir, client::data::LINKS.resume)
    }
}

/// Load Leptos options from the cargo-leptos environment.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the configuration cannot be loaded.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    leptos::config::get_configuration(None)
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}

/// Map a root-relative link path onto `public_dir`.
pub fn resume_path(public_dir: &Path, link: &str) -> PathBuf {
    public_dir.join(link.trim_start_matches('/'))
}
