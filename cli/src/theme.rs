//! # Folio Theme Preference
//!
//! File: cli/src/theme.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Light/dark theme preference, persisted between runs in a small TOML state
//! file (`theme.toml`). The state directory is `$FOLIO_STATE_DIR` when set,
//! otherwise the platform data directory for Folio.
//!
//! Until a preference is saved, `load` returns the configured default theme.
//!
use crate::core::config::env_dir;
use crate::core::error::{FolioError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Environment variable overriding where the theme preference is stored.
pub const STATE_DIR_ENV: &str = "FOLIO_STATE_DIR";

const STATE_FILENAME: &str = "theme.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(FolioError::UnknownTheme { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeState {
    theme: Theme,
}

/// Reads and writes the persisted theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    fallback: Theme,
}

impl ThemeStore {
    /// Store backed by `dir/theme.toml`.
    pub fn new(dir: impl Into<PathBuf>, fallback: Theme) -> Self {
        Self {
            path: dir.into().join(STATE_FILENAME),
            fallback,
        }
    }

    /// # Locate Store (`locate`)
    ///
    /// Finds where the preference lives: `$FOLIO_STATE_DIR` when it is set and
    /// non-empty, otherwise the platform data directory for Folio.
    ///
    /// ## Arguments
    ///
    /// * `fallback`: theme reported by `load` until one has been saved.
    ///
    /// ## Returns
    ///
    /// * `Err`: no override is set and the platform has no data directory.
    pub fn locate(fallback: Theme) -> Result<Self> {
        if let Some(dir) = env_dir(STATE_DIR_ENV) {
            debug!(
                "Using theme state directory from {}: {}",
                STATE_DIR_ENV,
                dir.display()
            );
            return Ok(Self::new(dir, fallback));
        }
        let dirs = ProjectDirs::from("com", "Folio", "folio").ok_or_else(|| {
            anyhow!(FolioError::ThemeState(
                "could not determine a data directory".into()
            ))
        })?;
        Ok(Self::new(dirs.data_dir(), fallback))
    }

    /// Location of the state file, whether or not it exists yet.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Load Theme (`load`)
    ///
    /// Reads the saved preference.
    ///
    /// ## Returns
    ///
    /// * `Ok(Theme)`: the saved theme, or the fallback when nothing has been saved yet.
    /// * `Err`: the state file exists but cannot be read or is not a valid theme file.
    pub fn load(&self) -> Result<Theme> {
        if !self.path.exists() {
            debug!(
                "No saved theme at {}, using '{}'",
                self.path.display(),
                self.fallback
            );
            return Ok(self.fallback);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read theme state: {}", self.path.display()))?;
        let state: ThemeState = toml::from_str(&content).map_err(|e| {
            anyhow!(FolioError::ThemeState(format!(
                "{} is not a valid theme file: {}",
                self.path.display(),
                e
            )))
        })?;
        Ok(state.theme)
    }

    /// # Save Theme (`save`)
    ///
    /// Writes `theme` to the state file, creating the state directory if needed.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string(&ThemeState { theme })
            .context("Failed to serialize theme state")?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write theme state: {}", self.path.display()))?;
        info!("Saved theme '{}' to {}", theme, self.path.display());
        Ok(())
    }

    /// # Toggle Theme (`toggle`)
    ///
    /// Loads the current theme, saves the other one and returns it.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" LIGHT ".parse::<Theme>().unwrap(), Theme::Light);
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown theme 'sepia'. Expected 'light' or 'dark'."
        );
    }

    #[test]
    fn test_load_without_state_uses_fallback() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path(), Theme::Dark);
        assert_eq!(store.load().unwrap(), Theme::Dark);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("nested"), Theme::Light);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Theme::Dark);

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("theme = \"dark\""));
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_store_file_lives_in_given_dir() {
        let store = ThemeStore::new("/var/lib/folio", Theme::Light);
        assert_eq!(store.path(), Path::new("/var/lib/folio/theme.toml"));
    }

    #[test]
    fn test_corrupt_state_is_an_error() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::new(dir.path(), Theme::Light);
        fs::write(store.path(), "theme = \"neon\"\n").unwrap();
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("is not a valid theme file"));
    }
}
