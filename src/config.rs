//! Game configuration
//!
//! Everything has a built-in default, so the game runs without any config
//! file. When present, `assets/config/game.json` is read first and
//! `<user config dir>/hangman/config.json` is layered on top of it key by
//! key, so a user file only needs the values it changes.

use crate::error::ConfigError;
use crate::states::topics::MAX_TOPICS;
use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    /// Every topic offered on the topics screen, in display order
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Clear color as `[r, g, b]`
    pub background: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub font: String,
    pub small_font_size: u16,
    pub large_font_size: u16,
    pub sprite: String,
    pub words_dir: String,
    pub word_delimiter: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            topics: ["Computer", "English", "Physics", "Chemistry"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Hangman".to_string(),
            width: 800,
            height: 600,
            fps: 60,
            background: [245, 245, 220],
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            root: PathBuf::from("assets"),
            font: "fonts/RobotoMono-Regular.ttf".to_string(),
            small_font_size: 24,
            large_font_size: 32,
            sprite: "sprites/hangman.png".to_string(),
            words_dir: "words".to_string(),
            word_delimiter: crate::words::WORD_DELIMITER,
        }
    }
}

impl AssetConfig {
    pub fn font_path(&self) -> PathBuf {
        self.root.join(&self.font)
    }

    pub fn sprite_path(&self) -> PathBuf {
        self.root.join(&self.sprite)
    }

    /// Word list file for a topic: `<root>/<words_dir>/<topic>.csv`
    pub fn word_list_path(&self, topic: &str) -> PathBuf {
        self.root.join(&self.words_dir).join(format!("{}.csv", topic))
    }
}

impl GameConfig {
    /// Load the project config overlaid with the user config
    pub fn discover() -> Result<Self, ConfigError> {
        let user_path = dirs::config_dir().map(|dir| dir.join("hangman").join("config.json"));

        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_PATH)];
        paths.extend(user_path);

        Self::load_layered(&paths)
    }

    /// Load a single config file
    #[cfg(test)]
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        Self::load_layered(&[path.to_path_buf()])
    }

    /// Merge every existing file in order (later files win), then fill the
    /// gaps with defaults. Missing files are skipped.
    pub fn load_layered(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        let mut merged = Value::Object(Default::default());

        for path in paths {
            if !path.exists() {
                continue;
            }

            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let layer: Value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

            info!("Loaded config layer {}", path.display());
            merge_json(&mut merged, layer);
        }

        let config: GameConfig = serde_json::from_value(merged).map_err(|source| ConfigError::Parse {
            path: paths.last().cloned().unwrap_or_default(),
            source,
        })?;
        config.validate_topics()?;

        Ok(config)
    }

    /// Topics must be non-empty and unique, one per topics-screen toggle
    fn validate_topics(&self) -> Result<(), ConfigError> {
        if self.topics.is_empty() {
            return Err(ConfigError::Topics("no topics listed".to_string()));
        }
        if self.topics.len() > MAX_TOPICS {
            return Err(ConfigError::Topics(format!(
                "{} topics listed, at most {} fit the topics screen",
                self.topics.len(),
                MAX_TOPICS
            )));
        }
        for (index, topic) in self.topics.iter().enumerate() {
            if self.topics[..index].contains(topic) {
                return Err(ConfigError::Topics(format!("'{}' is listed twice", topic)));
            }
        }

        Ok(())
    }
}

/// Recursively merge `overlay` into `base`; objects merge per key, anything
/// else is replaced
fn merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
