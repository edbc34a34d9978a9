use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 7] = [
    "api_url",
    "poll_interval_secs",
    "page_size",
    "request_timeout_secs",
    "default_confidence",
    "hourly_start",
    "hourly_end",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_confidence")]
    pub default_confidence: f64,
    #[serde(default = "default_hourly_start")]
    pub hourly_start: u32,
    #[serde(default = "default_hourly_end")]
    pub hourly_end: u32,
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_poll_interval() -> u64 {
    5
}
fn default_page_size() -> usize {
    10
}
fn default_request_timeout() -> u64 {
    10
}
fn default_confidence() -> f64 {
    98.0
}
fn default_hourly_start() -> u32 {
    9
}
fn default_hourly_end() -> u32 {
    23
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            poll_interval_secs: default_poll_interval(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout(),
            default_confidence: default_confidence(),
            hourly_start: default_hourly_start(),
            hourly_end: default_hourly_end(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rattendance`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rattendance")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Resolve the config path, honouring a `--config` override.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(PathBuf::from).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be greater than 0".into()));
        }
        if self.poll_interval_secs == 0 {
            return Err(AppError::Config(
                "poll_interval_secs must be greater than 0".into(),
            ));
        }
        if self.hourly_start >= self.hourly_end || self.hourly_end > 24 {
            return Err(AppError::Config(format!(
                "invalid hourly window {}..{}",
                self.hourly_start, self.hourly_end
            )));
        }
        Ok(())
    }

    /// Return the known keys absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml.as_mapping();

        Ok(KNOWN_KEYS
            .iter()
            .filter(|k| {
                map.map(|m| !m.contains_key(serde_yaml::Value::String((*k).to_string())))
                    .unwrap_or(true)
            })
            .copied()
            .collect())
    }

    /// Write a default configuration file at `path`.
    ///
    /// Fails when the file already exists and `force` is false.
    pub fn init_file(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
