//! Error types for Hangman
//!
//! Every fallible layer has its own enum:
//! - [`AssetError`]: fonts, sprites and word lists that fail to load (fatal at startup)
//! - [`GuiError`]: widget construction and drawing
//! - [`ConfigError`]: the JSON configuration files
//! - [`HangmanError`]: what the state machine and the host loop see

use crate::render::{FontId, SpriteId};
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading assets during the Load state
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load font '{}': {}", .path.display(), .reason)]
    Font { path: PathBuf, reason: String },

    #[error("failed to load image '{}': {}", .path.display(), .reason)]
    Image { path: PathBuf, reason: String },

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Word list rows must be exactly `word|hint`
    #[error("word list '{topic}' row {row} has {fields} fields, expected 2")]
    MalformedRow {
        topic: String,
        row: usize,
        fields: usize,
    },

    #[error("word list '{0}' has no words")]
    EmptyWordList(String),
}

/// Failures while building or drawing widgets
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("unknown font handle {0:?}")]
    UnknownFont(FontId),

    #[error("unknown sprite handle {0:?}")]
    UnknownSprite(SpriteId),

    /// An SDL2 call failed (SDL reports errors as strings)
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Failures while reading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The topic list cannot be shown on the topics screen
    #[error("invalid topic list: {0}")]
    Topics(String),
}

/// Top-level error for the game
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Gui(#[from] GuiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A state was entered without what it needs (e.g. no topics selected)
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl From<HangmanError> for String {
    fn from(error: HangmanError) -> Self {
        error.to_string()
    }
}
