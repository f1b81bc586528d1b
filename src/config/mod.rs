use anyhow::{Context, Result};
use chrono::Weekday;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::schedule::{is_valid_interval, slot_markers, ClockTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    Hour24,      // "14:30"
    Hour12,      // "2:30pm"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeekStart {
    Monday,
    #[default]
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
    #[serde(default)]
    pub clock_format: ClockFormat,
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Fixed seed for entry colors; random per launch when unset
    #[serde(default)]
    pub color_seed: Option<u64>,
}

fn default_font_scale() -> f32 {
    1.0
}

fn default_slot_minutes() -> u32 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_scale: default_font_scale(),
            clock_format: ClockFormat::Hour24,
            week_start: WeekStart::Sunday,
            slot_minutes: default_slot_minutes(),
            color_seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            Self::parse(&contents)
        } else {
            Ok(Config::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .context("Failed to parse config file")
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "daygrid", "daygrid")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Grid markers for the configured slot size, hourly if the size is unusable
    pub fn markers(&self) -> Vec<ClockTime> {
        if !is_valid_interval(self.slot_minutes) {
            tracing::warn!(slot_minutes = self.slot_minutes, "unsupported slot size, using hourly slots");
        }
        slot_markers(self.slot_minutes)
    }
}
