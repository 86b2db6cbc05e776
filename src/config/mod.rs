use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rows per page on every list except enterprises.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_enterprise_page_size")]
    pub enterprise_page_size: usize,
    /// Pages shown on each side of the current one in the page bar.
    #[serde(default = "default_window_delta")]
    pub window_delta: usize,
    /// Clamp an out-of-range page instead of showing an empty one.
    #[serde(default)]
    pub clamp_page: bool,
    /// Events shown verbatim in a calendar cell before "+N more".
    #[serde(default = "default_max_events_per_day")]
    pub max_events_per_day: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_page_size() -> usize {
    10
}
fn default_enterprise_page_size() -> usize {
    15
}
fn default_window_delta() -> usize {
    crate::core::pager::DEFAULT_WINDOW_DELTA
}
fn default_max_events_per_day() -> usize {
    crate::core::calendar::DEFAULT_PREVIEW_LIMIT
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            enterprise_page_size: default_enterprise_page_size(),
            window_delta: default_window_delta(),
            clamp_page: false,
            max_events_per_day: default_max_events_per_day(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rhiredesk")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rhiredesk")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rhiredesk.conf")
    }

    /// Load the configuration at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)?
        };
        cfg.validate()?;

        tracing::debug!(path = %path.display(), ?cfg, "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.enterprise_page_size == 0 {
            return Err(AppError::Config(
                "enterprise_page_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Write the default configuration to `path`, creating its directory.
    /// An existing file is kept unless `force` is set.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        success(format!("Config file: {}", path.display()));
        Ok(true)
    }
}
