//! # Folio Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates Folio's configuration. It combines
//! built-in defaults, user settings and project-specific overrides.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.folio.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config directory
//!    (or `$FOLIO_CONFIG_DIR/config.toml` when that variable is set)
//! 3. Default values defined in the code
//!
//! ## Architecture
//!
//! Each file is parsed into a `FileConfig` whose fields are all optional, so
//! "not written" and "written with the default value" stay distinguishable.
//! Files are merged field by field (project over user), and only then are the
//! remaining gaps filled with defaults to produce the final `Config`.
//!
//! Relative paths inside a file are resolved against the directory holding
//! that file, so a project config keeps working from any subdirectory.
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Portfolio Assistant"
//! reply_delay_ms = 250
//! seed = 7
//! knowledge_file = "~/portfolio/knowledge.toml"
//!
//! [theme]
//! default = "dark"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! let responder = Responder::new(cfg.assistant.knowledge_base()?);
//! ```
//!
use crate::core::error::{FolioError, Result};
use crate::responder::KnowledgeBase;
use crate::theme::Theme;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Environment variable overriding the user configuration directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

const PROJECT_CONFIG_FILENAME: &str = ".folio.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";
const MAX_REPLY_DELAY_MS: u64 = 10_000;

/// The effective configuration after merging every source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub theme: ThemeConfig,
}

/// Settings for the chat assistant (`folio chat`, `folio ask`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Display name shown before assistant replies.
    pub name: String,
    /// First message in every conversation.
    pub welcome: String,
    /// Simulated typing delay before each reply in `folio chat`.
    pub reply_delay_ms: u64,
    /// Fixed seed for reply selection. Random when unset.
    pub seed: Option<u64>,
    /// Optional TOML file overriding built-in topics. Already expanded and absolute
    /// when it came from a config file.
    pub knowledge_file: Option<String>,
}

/// Settings for the theme preference.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme used until the visitor picks one.
    pub default: Theme,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            welcome: default_welcome(),
            reply_delay_ms: default_reply_delay_ms(),
            seed: None,
            knowledge_file: None,
        }
    }
}

impl AssistantConfig {
    /// # Knowledge Base (`knowledge_base`)
    ///
    /// Builds the table the responder routes over.
    ///
    /// ## Returns
    ///
    /// * `Ok(KnowledgeBase)`: the built-in table, or the configured knowledge
    ///   file applied on top of it.
    /// * `Err`: the knowledge file could not be read or violates the table rules.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge_file {
            Some(path) => KnowledgeBase::load_file(Path::new(path)),
            None => Ok(KnowledgeBase::builtin()),
        }
    }
}

/// One configuration file as written. Absent keys stay `None`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    assistant: FileAssistantConfig,
    #[serde(default)]
    theme: FileThemeConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileAssistantConfig {
    name: Option<String>,
    welcome: Option<String>,
    reply_delay_ms: Option<u64>,
    seed: Option<u64>,
    /// Can use `~`, and may be relative to the file's directory.
    knowledge_file: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileThemeConfig {
    default: Option<Theme>,
}

fn default_assistant_name() -> String {
    "Portfolio Assistant".to_string()
}
fn default_welcome() -> String {
    "Hi! I'm Adam's portfolio assistant. Feel free to ask me about his experience, skills, or projects!"
        .to_string()
}
fn default_reply_delay_ms() -> u64 {
    1000
}

/// # Load Configuration (`load_config`)
///
/// Loads the user and project files, merges them over the defaults and
/// validates the result.
///
/// ## Returns
///
/// * `Ok(Config)`: the effective configuration.
/// * `Err`: a file could not be read or parsed, or validation failed.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = resolve_config(merge_configs(user_config, project_config));
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

/// # Directory From Environment (`env_dir`)
///
/// Reads a directory override from the environment variable `name`.
/// Unset and empty values both count as "no override".
pub(crate) fn env_dir(name: &str) -> Option<PathBuf> {
    non_empty_dir(env::var(name).ok())
}

fn non_empty_dir(value: Option<String>) -> Option<PathBuf> {
    value.filter(|dir| !dir.trim().is_empty()).map(PathBuf::from)
}

fn user_config_dir() -> Option<PathBuf> {
    if let Some(dir) = env_dir(CONFIG_DIR_ENV) {
        return Some(dir);
    }
    ProjectDirs::from("com", "Folio", "folio").map(|dirs| dirs.config_dir().to_path_buf())
}

fn load_user_config() -> Result<Option<FileConfig>> {
    let Some(config_dir) = user_config_dir() else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = config_dir.join(USER_CONFIG_FILENAME);
    if config_path.exists() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<FileConfig>> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.folio.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    expand_config_paths(&mut config, base_dir);
    Ok(config)
}

/// Project values win over user values, key by key.
fn merge_configs(user: Option<FileConfig>, project: Option<FileConfig>) -> FileConfig {
    let user = user.unwrap_or_default();
    let Some(project) = project else {
        return user;
    };
    FileConfig {
        assistant: FileAssistantConfig {
            name: project.assistant.name.or(user.assistant.name),
            welcome: project.assistant.welcome.or(user.assistant.welcome),
            reply_delay_ms: project
                .assistant
                .reply_delay_ms
                .or(user.assistant.reply_delay_ms),
            seed: project.assistant.seed.or(user.assistant.seed),
            knowledge_file: project
                .assistant
                .knowledge_file
                .or(user.assistant.knowledge_file),
        },
        theme: FileThemeConfig {
            default: project.theme.default.or(user.theme.default),
        },
    }
}

/// Fills every key no file set with its default.
fn resolve_config(file: FileConfig) -> Config {
    Config {
        assistant: AssistantConfig {
            name: file.assistant.name.unwrap_or_else(default_assistant_name),
            welcome: file.assistant.welcome.unwrap_or_else(default_welcome),
            reply_delay_ms: file
                .assistant
                .reply_delay_ms
                .unwrap_or_else(default_reply_delay_ms),
            seed: file.assistant.seed,
            knowledge_file: file.assistant.knowledge_file,
        },
        theme: ThemeConfig {
            default: file.theme.default.unwrap_or_default(),
        },
    }
}

/// Expands `~` and anchors relative paths at `base_dir`, the directory of the
/// file that declared them.
fn expand_config_paths(config: &mut FileConfig, base_dir: &Path) {
    if let Some(path) = &mut config.assistant.knowledge_file {
        let expanded = PathBuf::from(shellexpand::tilde(path.as_str()).into_owned());
        let anchored = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *path = anchored.to_string_lossy().into_owned();
        debug!("Expanded knowledge file path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let assistant = &config.assistant;
    if assistant.name.trim().is_empty() {
        return Err(anyhow!(FolioError::Config(
            "Assistant name cannot be empty.".to_string()
        )));
    }
    if assistant.welcome.trim().is_empty() {
        return Err(anyhow!(FolioError::Config(
            "Welcome message cannot be empty.".to_string()
        )));
    }
    if assistant.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(FolioError::Config(format!(
            "reply_delay_ms = {} exceeds the maximum of {} ms.",
            assistant.reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }
    if let Some(file) = &assistant.knowledge_file {
        let path = Path::new(file);
        if !path.exists() {
            return Err(anyhow!(FolioError::Config(format!(
                "Configured knowledge file '{}' does not exist.",
                path.display()
            ))));
        }
        if !path.is_file() {
            return Err(anyhow!(FolioError::Config(format!(
                "Configured knowledge path '{}' exists but is not a file.",
                path.display()
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
