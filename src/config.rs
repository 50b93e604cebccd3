use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub const CONFIG_FILE_NAME: &str = "lastseen.toml";
const DEFAULT_EVENTS_FILE: &str = "test_events.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding saved API responses.
    pub resource_dir: PathBuf,
    /// Events feed; relative paths resolve against `resource_dir`.
    pub events_file: PathBuf,
    /// Render the verb fallback as "updating" instead of "update".
    pub participles: bool,
    pub repo_names: RepoNameConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RepoNameConfig {
    /// Owners whose name is dropped in `user` truncation mode.
    pub base_users: Vec<String>,
    pub truncate: TruncateMode,
    /// Tried in order; the first matching pattern wins.
    pub substitutions: Vec<Substitution>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: String,
    /// May reference capture groups as `$1` or `${name}`.
    pub replacement: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
pub enum TruncateMode {
    /// Strip the owner only for the configured base users.
    #[default]
    #[serde(rename = "user")]
    BaseUser,
    /// Always strip the owner.
    #[serde(rename = "all")]
    All,
    /// Keep `owner/name`.
    #[serde(rename = "none")]
    Never,
}

impl TruncateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruncateMode::BaseUser => "user",
            TruncateMode::All => "all",
            TruncateMode::Never => "none",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "user" => Some(TruncateMode::BaseUser),
            "all" => Some(TruncateMode::All),
            "none" => Some(TruncateMode::Never),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    resource_dir: Option<PathBuf>,
    events_file: Option<PathBuf>,
    participles: Option<bool>,
    #[serde(default)]
    repo_names: RepoNameConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resource_dir: PathBuf::from("."),
            events_file: PathBuf::from(DEFAULT_EVENTS_FILE),
            participles: false,
            repo_names: RepoNameConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `lastseen.toml` from the workspace (if present) and applies
    /// `LASTSEEN_*` environment overrides on top.
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let mut config = Self::from_file(&workspace_hint.join(CONFIG_FILE_NAME))?;
        if config.resource_dir.is_relative() {
            config.resource_dir = workspace_hint.join(&config.resource_dir);
        }
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(AppError::Io(err)),
        };
        Self::from_toml(&contents)
            .map_err(|err| AppError::Configuration(format!("{}: {err}", path.display())))
    }

    fn from_toml(contents: &str) -> AppResult<Self> {
        let file: FileConfig = toml::from_str(contents)
            .map_err(|err| AppError::Configuration(format!("invalid config file: {err}")))?;
        let defaults = Self::default();
        Ok(Self {
            resource_dir: file.resource_dir.unwrap_or(defaults.resource_dir),
            events_file: file.events_file.unwrap_or(defaults.events_file),
            participles: file.participles.unwrap_or(defaults.participles),
            repo_names: file.repo_names,
        })
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<()> {
        if let Some(dir) = lookup("LASTSEEN_RESOURCE_DIR") {
            self.resource_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("LASTSEEN_EVENTS_FILE") {
            self.events_file = PathBuf::from(file);
        }
        if let Some(users) = lookup("LASTSEEN_BASE_USER") {
            self.repo_names.base_users = users
                .split(',')
                .map(|user| user.trim().to_string())
                .filter(|user| !user.is_empty())
                .collect();
        }
        if let Some(mode) = lookup("LASTSEEN_TRUNCATE") {
            self.repo_names.truncate = TruncateMode::from_str(&mode).ok_or_else(|| {
                AppError::Configuration(format!(
                    "LASTSEEN_TRUNCATE must be one of user, all, none (got '{mode}')"
                ))
            })?;
        }
        if let Some(flag) = lookup("LASTSEEN_PARTICIPLES") {
            self.participles = match flag.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(AppError::Configuration(format!(
                        "LASTSEEN_PARTICIPLES must be true or false (got '{other}')"
                    )));
                }
            };
        }
        Ok(())
    }

    pub fn events_path(&self) -> PathBuf {
        self.resource_dir.join(&self.events_file)
    }
}
