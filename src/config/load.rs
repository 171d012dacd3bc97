use crate::config::types::{Config, ImageExtensionTable, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use rust_i18n::t;
use std::fs;
use std::path::Path;

/// 編譯時嵌入的圖片副檔名表
const IMAGE_EXTENSIONS_JSON: &str = include_str!("../data/image_extensions.json");

const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let image_extensions = Self::load_embedded_image_extensions()?;
        let settings = match Self::load_settings(Path::new(SETTINGS_FILE)) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Ignoring settings file: {e:#}");
                UserSettings::default()
            }
        };

        Ok(Self {
            image_extensions,
            settings,
        })
    }

    /// Settings are read-only; nothing writes them back.
    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    fn load_embedded_image_extensions() -> Result<ImageExtensionTable> {
        serde_json::from_str(IMAGE_EXTENSIONS_JSON)
            .with_context(|| t!("errors.embedded_extensions").to_string())
    }
}
