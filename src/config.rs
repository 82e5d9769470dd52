use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use directories_next::ProjectDirs;
use serde::Deserialize;

use crate::format::DEFAULT_DATE_FORMAT;
use crate::store::IdStrategy;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: Storage,
    pub ids: IdStrategy,
    pub display: Display,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub kind: StorageKind,
    pub file: FileStorage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileStorage {
    /// Defaults to the platform data directory.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Display {
    pub date_format: String,
    /// Show times in UTC instead of the local time zone.
    pub utc: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            utc: false,
        }
    }
}

impl Config {
    /// Load from `path`, or from the platform config directory if no path is
    /// given. A missing default config file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match project_dirs() {
                Some(dirs) if dirs.config_dir().join(CONFIG_FILE).is_file() => {
                    Self::from_file(&dirs.config_dir().join(CONFIG_FILE))
                }
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn parse(source: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Directory used by file storage.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.storage.file.dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_owned())
            .ok_or_else(|| anyhow!("no home directory found, set storage.file.dir"))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "save-text")
}
