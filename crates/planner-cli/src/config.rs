//! Configuration file management for the planner.
//!
//! Provides a TOML-based config file at `~/.config/course-planner/config.toml`
//! and a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use planner_core::PlannerConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub planner: PlannerSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Maximum number of courses per planner.
    pub capacity: usize,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the planner config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/course-planner` or
/// `~/.config/course-planner`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("course-planner");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("course-planner")
}

/// Return the path to the planner config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct AppConfig {
    pub planner: PlannerConfig,
}

impl AppConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// Capacity: `cli_capacity` > `PLANNER_CAPACITY` env > `config_file.planner.capacity`
    /// > `PlannerConfig::DEFAULT_CAPACITY`. A zero capacity is rejected, and a
    /// config file that exists but cannot be read or parsed is an error.
    pub fn resolve(cli_capacity: Option<usize>) -> Result<Self> {
        let capacity = if let Some(n) = cli_capacity {
            n
        } else if let Ok(raw) = std::env::var(PlannerConfig::CAPACITY_ENV) {
            raw.trim().parse::<usize>().with_context(|| {
                format!("{} is not a valid capacity: {raw:?}", PlannerConfig::CAPACITY_ENV)
            })?
        } else if config_path().exists() {
            load_config()?.planner.capacity
        } else {
            PlannerConfig::DEFAULT_CAPACITY
        };

        if capacity == 0 {
            bail!("planner capacity must be at least 1");
        }

        Ok(Self {
            planner: PlannerConfig::new(capacity),
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
