use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{error::WeatherError, forecast::Locale};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHERY_API_KEY";

const DEFAULT_CITIES: [&str; 4] = ["Москва", "Тюмень", "Калуга", "Черногория"];

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// locale = "ru"
/// cities = ["Москва", "Калуга"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Weekday labels and the provider's `lang` parameter.
    pub locale: Locale,

    /// Override for the OpenWeather host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    pub cities: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            locale: Locale::default(),
            base_url: None,
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from the platform config dir, or defaults on first run.
    pub fn load() -> Result<Self, WeatherError> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, WeatherError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            WeatherError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            WeatherError::Config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<(), WeatherError> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), WeatherError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                WeatherError::Config(format!(
                    "Failed to create config directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let toml = toml::to_string_pretty(self).map_err(|e| {
            WeatherError::Config(format!("Failed to serialize configuration to TOML: {e}"))
        })?;

        fs::write(path, toml).map_err(|e| {
            WeatherError::Config(format!("Failed to write config file {}: {e}", path.display()))
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, WeatherError> {
        let dirs = ProjectDirs::from("dev", "weathery", "weathery").ok_or_else(|| {
            WeatherError::Config("Could not determine platform config directory".into())
        })?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from `WEATHERY_API_KEY`, falling back to the stored one.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.position(city).is_some()
    }

    /// Append a city unless it is already listed (case-insensitive).
    /// Returns whether the list changed.
    pub fn add_city(&mut self, city: &str) -> bool {
        let city = city.trim();
        if city.is_empty() || self.has_city(city) {
            return false;
        }
        self.cities.push(city.to_string());
        true
    }

    /// Returns whether the city was present.
    pub fn remove_city(&mut self, city: &str) -> bool {
        match self.position(city) {
            Some(idx) => {
                self.cities.remove(idx);
                true
            }
            None => false,
        }
    }

    fn position(&self, city: &str) -> Option<usize> {
        let needle = city.trim().to_lowercase();
        self.cities.iter().position(|c| c.to_lowercase() == needle)
    }
}
