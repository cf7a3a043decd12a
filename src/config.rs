use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Optional user configuration, read from the platform config directory
/// (e.g. `~/.config/taskpal/config.toml`). The only setting today is where
/// the task file lives; everything else has defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| anyhow::anyhow!("no config directory"))?;
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    fn config_path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "taskpal", "taskpal")?;
        Some(proj.config_dir().join("config.toml"))
    }

    /// Resolves the task-file path: env override first (test isolation),
    /// then the config setting, then the platform data directory.
    pub fn data_path(&self) -> PathBuf {
        if let Ok(path) = env::var("TASKPAL_DATA_FILE") {
            return PathBuf::from(path);
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        if let Some(proj) = ProjectDirs::from("com", "taskpal", "taskpal") {
            return proj.data_dir().join("tasks.txt");
        }
        PathBuf::from("data/tasks.txt")
    }
}
