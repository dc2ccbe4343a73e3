// Shared game context
//
// Owned by the state machine and lent to every state. Handles and word lists
// are filled in once by the load screen and only read afterwards; the topic
// selection is the one thing that changes during a session.

use crate::gui::{StyleRegistry, Toolkit};
use crate::render::{FontBook, FontId, SpriteId};
use crate::words::WordEntry;
use std::collections::BTreeMap;

pub struct GameContext {
    pub small_font: FontId,
    pub large_font: FontId,
    pub hangman_sprite: SpriteId,
    pub styles: StyleRegistry,
    pub word_lists: BTreeMap<String, Vec<WordEntry>>,
    /// Every topic, in display order
    pub all_topics: Vec<String>,
    /// Topics words are drawn from; an ordered subset of `all_topics`
    pub current_topics: Vec<String>,
}

impl GameContext {
    /// Empty context offering `topics`, all of them selected
    pub fn new(topics: Vec<String>) -> Self {
        GameContext {
            small_font: FontId::default(),
            large_font: FontId::default(),
            hangman_sprite: SpriteId::default(),
            styles: StyleRegistry::default(),
            word_lists: BTreeMap::new(),
            current_topics: topics.clone(),
            all_topics: topics,
        }
    }

    /// Widget factory bound to this context's styles
    pub fn toolkit<'a>(&'a self, fonts: &'a dyn FontBook) -> Toolkit<'a> {
        Toolkit::new(&self.styles, fonts)
    }

    /// Replace the selection, keeping `all_topics` order
    pub fn select_topics<'t>(&mut self, selected: impl IntoIterator<Item = &'t str>) {
        let selected: Vec<&str> = selected.into_iter().collect();
        self.current_topics = self
            .all_topics
            .iter()
            .filter(|topic| selected.contains(&topic.as_str()))
            .cloned()
            .collect();
    }

    pub fn words(&self, topic: &str) -> Option<&[WordEntry]> {
        self.word_lists.get(topic).map(Vec::as_slice)
    }
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext::new(
            ["Computer", "English", "Physics", "Chemistry"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        )
    }
}
