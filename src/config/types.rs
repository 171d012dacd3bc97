use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ImageExtensionTable {
    #[serde(rename = "IMAGE_FILE")]
    pub image_file: Vec<String>,
}

impl ImageExtensionTable {
    /// 副檔名比對不分大小寫，以完整檔名結尾判斷
    #[must_use]
    pub fn is_image_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                let lower = name.to_lowercase();
                self.image_file
                    .iter()
                    .any(|ext| lower.ends_with(&ext.to_lowercase()))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[default]
    #[serde(rename = "id")]
    Id,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Id => "id",
        }
    }
}

pub const DEFAULT_PREFIX: &str = "Foto";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_prefix: default_prefix(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub image_extensions: ImageExtensionTable,
    pub settings: UserSettings,
}
