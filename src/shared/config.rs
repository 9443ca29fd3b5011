use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Theme options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

fn default_host_url() -> String {
    "http://localhost:8090".to_string()
}

fn default_finishem_url() -> String {
    "http://localhost:8089/graphql".to_string()
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the local editor bridge
    #[serde(default = "default_host_url")]
    pub host_url: String,
    /// Finish Em GraphQL endpoint
    #[serde(default = "default_finishem_url")]
    pub finishem_url: String,
    /// Theme mode selection
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the debug pane with per-item sync outcomes
    #[serde(default)]
    pub debug_pane: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_url: default_host_url(),
            finishem_url: default_finishem_url(),
            theme_mode: ThemeMode::default(),
            debug_pane: false,
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            serde_json::from_str(&content).unwrap_or_else(|_| {
                // If parsing fails, use default and save it
                let default_config = Config::default();
                let _ = default_config.save();
                default_config
            })
        } else {
            // Create and save default config
            let default_config = Config::default();
            let _ = default_config.save();
            default_config
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Directory holding the config file and the log file
    pub fn config_dir() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        // Use XDG config directory standard or fallback to ~/.config
        let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg_config)
        } else {
            home_dir.join(".config")
        };

        let app_config_dir = config_dir.join("finishem-bridge");
        fs::create_dir_all(&app_config_dir)?;

        Ok(app_config_dir)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Flip between dark and light mode
    pub fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
    }

    /// Toggle the debug pane
    pub fn toggle_debug_pane(&mut self) {
        self.debug_pane = !self.debug_pane;
    }

    /// Get theme display string
    pub fn theme_display(&self) -> &str {
        match self.theme_mode {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }
}
