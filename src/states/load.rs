use super::{StateRequest, Transition};
use crate::config::AssetConfig;
use crate::context::GameContext;
use crate::error::{AssetError, HangmanError};
use crate::gui::StyleRegistry;
use crate::render::{FontBook, FontId, SpriteId};
use crate::words;
use log::info;
use std::collections::BTreeMap;
use std::path::Path;

/// Source of fonts, images and word tables
///
/// Only the load screen uses it; every other state works from the handles
/// it stored in the context.
pub trait AssetLoader: FontBook {
    fn load_font(&mut self, path: &Path, size: u16) -> Result<FontId, AssetError>;

    fn load_image(&mut self, path: &Path) -> Result<SpriteId, AssetError>;

    fn read_delimited_table(&mut self, path: &Path, delimiter: char) -> Result<Vec<Vec<String>>, AssetError>;
}

/// First state: loads every asset, then goes straight to the menu
pub struct LoadState {
    assets: AssetConfig,
}

impl LoadState {
    pub fn new(assets: AssetConfig) -> Self {
        LoadState { assets }
    }

    /// Fill the context with fonts, sprite sheet, styles and word lists.
    /// Any failure aborts startup.
    pub fn load<L: AssetLoader + ?Sized>(
        &self,
        context: &mut GameContext,
        loader: &mut L,
    ) -> Result<Transition, HangmanError> {
        let font_path = self.assets.font_path();
        context.small_font = loader.load_font(&font_path, self.assets.small_font_size)?;
        context.large_font = loader.load_font(&font_path, self.assets.large_font_size)?;
        context.hangman_sprite = loader.load_image(&self.assets.sprite_path())?;

        let mut word_lists = BTreeMap::new();
        for topic in &context.all_topics {
            let path = self.assets.word_list_path(topic);
            let rows = loader.read_delimited_table(&path, self.assets.word_delimiter)?;
            let entries = words::entries_from_rows(topic, rows)?;

            info!("Loaded {} words for '{}'", entries.len(), topic);
            word_lists.insert(topic.clone(), entries);
        }
        context.word_lists = word_lists;

        context.styles = StyleRegistry::new(context.small_font);

        info!("Assets loaded from {}", self.assets.root.display());
        Ok(Transition::Switch(StateRequest::Home))
    }
}
