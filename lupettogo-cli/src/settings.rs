//! User defaults for `init`
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults
//! 2. `~/.config/lupettogo/config.toml` (platform config directory)
//! 3. `./lupettogo.toml`
//! 4. `LUPETTOGO_*` environment variables (`__` separates nested keys)
//!
//! Command-line flags override all of these.
//!
//! ```toml
//! database = "mysql"
//! with_auth = true
//! module_prefix = "github.com/acme"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::config::{DatabaseDriver, ProjectConfiguration};
use crate::error::Result;

const APP_DIR: &str = "lupettogo";
const LOCAL_FILE: &str = "lupettogo.toml";
const ENV_PREFIX: &str = "LUPETTOGO_";

/// Defaults applied to every new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Database driver
    pub database: DatabaseDriver,
    /// Generate authentication files
    pub with_auth: bool,
    /// Generate Docker files
    pub with_docker: bool,
    /// Generate Go test files
    pub with_tests: bool,
    /// Prefix for Go module paths, e.g. `github.com/acme`
    pub module_prefix: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseDriver::Postgres,
            with_auth: false,
            with_docker: true,
            with_tests: true,
            module_prefix: None,
        }
    }
}

impl Settings {
    /// Load settings from every standard source
    ///
    /// # Errors
    ///
    /// Returns an error if a config file contains invalid TOML or a value has
    /// the wrong type (e.g. an unknown database driver).
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Self::defaults()?;

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                tracing::debug!(path = %user_config.display(), "loading user settings");
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let local_config = PathBuf::from(LOCAL_FILE);
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading local settings");
            figment = figment.merge(Toml::file(&local_config));
        }

        Ok(figment.merge(Self::env()).extract()?)
    }

    /// Load settings from one file, with environment overrides
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let settings = Self::defaults()?
            .merge(Toml::file(path.as_ref()))
            .merge(Self::env())
            .extract()?;
        Ok(settings)
    }

    /// Per-user settings file, if the platform has a config directory
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Go module path for a project called `name`
    #[must_use]
    pub fn module_path_for(&self, name: &str) -> String {
        match self.module_prefix.as_deref().map(|p| p.trim_end_matches('/')) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}/{name}"),
            _ => name.to_string(),
        }
    }

    /// Project configuration seeded from these settings
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`](crate::GenerationError::InvalidInput)
    /// if the name or derived module path is invalid.
    pub fn project(&self, name: &str) -> Result<ProjectConfiguration> {
        ProjectConfiguration::new(name)?
            .with_database(self.database)
            .with_auth(self.with_auth)
            .with_docker(self.with_docker)
            .with_tests(self.with_tests)
            .with_module_path(self.module_path_for(name))
    }

    fn defaults() -> anyhow::Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lupettogo.toml");
        fs::write(
            &path,
            "database = \"mysql\"\nwith_auth = true\nmodule_prefix = \"github.com/acme/\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.database, DatabaseDriver::Mysql);
        assert!(settings.with_auth);
        assert!(settings.with_docker);
        assert_eq!(settings.module_path_for("shopapi"), "github.com/acme/shopapi");
    }

    #[test]
    fn test_unknown_driver_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lupettogo.toml");
        fs::write(&path, "database = \"oracle\"\n").unwrap();

        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_project_seeded_from_settings() {
        let settings = Settings {
            database: DatabaseDriver::Mysql,
            with_docker: false,
            ..Settings::default()
        };
        let config = settings.project("shopapi").unwrap();

        assert_eq!(config.database(), DatabaseDriver::Mysql);
        assert!(!config.include_docker());
        assert_eq!(config.module_path(), "shopapi");
    }
}
