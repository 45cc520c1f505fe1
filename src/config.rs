use crate::free_time::{
    WorkingHours, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR, DEFAULT_HORIZON_DAYS,
};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE_NAME: &str = "tasks.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub horizon_days: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl ScheduleConfig {
    pub fn working_hours(&self) -> Result<WorkingHours> {
        WorkingHours::from_hours(self.day_start_hour, self.day_end_hour, self.horizon_days).ok_or_else(|| {
            anyhow!(
                "Invalid schedule: need day_start_hour < day_end_hour <= 23 and horizon_days >= 1 (got {}..{}, {} days)",
                self.day_start_hour,
                self.day_end_hour,
                self.horizon_days
            )
        })
    }
}

impl Config {
    /// Load from the platform config directory, writing a default file on first run
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        // If config doesn't exist, create default
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.schedule.working_hours()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Where tasks are stored: the configured file, else `tasks.txt` in the
    /// platform data directory, else `./data/tasks.txt`
    pub fn data_file(&self) -> PathBuf {
        if let Some(path) = &self.storage.data_file {
            return path.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from("data").join(DATA_FILE_NAME))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "taskmate", "taskmate")
}

fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = project_dirs().context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
