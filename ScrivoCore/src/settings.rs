//! Persisted user settings (window size, recent files, last directory)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Maximum number of recent files to track
pub const MAX_RECENT_FILES: usize = 10;

pub const MIN_WINDOW_WIDTH: f64 = 640.0;
pub const MIN_WINDOW_HEIGHT: f64 = 480.0;

// Default value functions for serde
fn default_window_width() -> f64 {
    800.0
}
fn default_window_height() -> f64 {
    600.0
}

/// Window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: f64,
    #[serde(default = "default_window_height")]
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl WindowSettings {
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Raise the size to at least the minimum window size
    pub fn clamp(&mut self) {
        self.width = self.width.max(MIN_WINDOW_WIDTH);
        self.height = self.height.max(MIN_WINDOW_HEIGHT);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub window: WindowSettings,
    /// Most recent first
    #[serde(default)]
    pub recent_files: Vec<PathBuf>,
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl Settings {
    /// `<config dir>/Scrivo/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("Scrivo").join("settings.json"))
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&content)?;
        settings.window.clamp();
        settings.recent_files.truncate(MAX_RECENT_FILES);
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Move `path` to the front of the recent list and remember its directory
    pub fn add_recent_file(&mut self, path: &Path) {
        // Remove if already in list (we'll re-add at front)
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_path_buf());
        self.recent_files.truncate(MAX_RECENT_FILES);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }
}
