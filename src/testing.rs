//! Test doubles for running widgets and screens without SDL2

use crate::context::GameContext;
use crate::error::{AssetError, GuiError};
use crate::gui::StyleRegistry;
use crate::input_system::InputEvent;
use crate::render::{FontBook, FontId, SpriteId, Surface};
use crate::states::AssetLoader;
use crate::words::WordEntry;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fixed-width font metrics: every glyph is 10x20 pixels
pub struct MonoFonts {
    pub known: usize,
}

pub const GLYPH_WIDTH: u32 = 10;
pub const LINE_HEIGHT: u32 = 20;

impl MonoFonts {
    /// Knows fonts 0 (small) and 1 (large)
    pub fn new() -> Self {
        MonoFonts { known: 2 }
    }
}

impl FontBook for MonoFonts {
    fn text_size(&self, font: FontId, text: &str) -> Result<(u32, u32), GuiError> {
        if font.0 >= self.known {
            return Err(GuiError::UnknownFont(font));
        }
        Ok((text.chars().count() as u32 * GLYPH_WIDTH, LINE_HEIGHT))
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill(Rect, Color),
    Outline(Rect, Color),
    Line(Point, Point, Color, u32),
    Sprite(SpriteId, Rect, Rect),
    Text {
        font: FontId,
        text: String,
        color: Color,
        position: Point,
        clip: Option<Rect>,
    },
}

/// Surface that records every draw call in order
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<(SpriteId, Rect, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Sprite(id, src, dst) => Some((*id, *src, *dst)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line(..))).count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError> {
        self.ops.push(DrawOp::Fill(rect, color));
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError> {
        self.ops.push(DrawOp::Outline(rect, color));
        Ok(())
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Color, width: u32) -> Result<(), GuiError> {
        self.ops.push(DrawOp::Line(start, end, color, width));
        Ok(())
    }

    fn blit_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) -> Result<(), GuiError> {
        self.ops.push(DrawOp::Sprite(sprite, src, dst));
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        position: Point,
        clip: Option<Rect>,
    ) -> Result<(), GuiError> {
        self.ops.push(DrawOp::Text {
            font,
            text: text.to_string(),
            color,
            position,
            clip,
        });
        Ok(())
    }
}

/// Asset loader backed by in-memory tables
///
/// Fonts and images always load; a word list loads only if a table was
/// registered for its path.
pub struct MemoryAssets {
    pub fonts: MonoFonts,
    pub tables: HashMap<PathBuf, Vec<Vec<String>>>,
    pub loaded_fonts: Vec<(PathBuf, u16)>,
    pub loaded_images: Vec<PathBuf>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        MemoryAssets {
            fonts: MonoFonts { known: 0 },
            tables: HashMap::new(),
            loaded_fonts: Vec::new(),
            loaded_images: Vec::new(),
        }
    }

    pub fn with_table(mut self, path: impl Into<PathBuf>, rows: &[(&str, &str)]) -> Self {
        let rows = rows
            .iter()
            .map(|(word, hint)| vec![word.to_string(), hint.to_string()])
            .collect();
        self.tables.insert(path.into(), rows);
        self
    }
}

impl FontBook for MemoryAssets {
    fn text_size(&self, font: FontId, text: &str) -> Result<(u32, u32), GuiError> {
        self.fonts.text_size(font, text)
    }
}

impl AssetLoader for MemoryAssets {
    fn load_font(&mut self, path: &Path, size: u16) -> Result<FontId, AssetError> {
        self.loaded_fonts.push((path.to_path_buf(), size));
        self.fonts.known += 1;
        Ok(FontId(self.fonts.known - 1))
    }

    fn load_image(&mut self, path: &Path) -> Result<SpriteId, AssetError> {
        self.loaded_images.push(path.to_path_buf());
        Ok(SpriteId(self.loaded_images.len() - 1))
    }

    fn read_delimited_table(&mut self, path: &Path, _delimiter: char) -> Result<Vec<Vec<String>>, AssetError> {
        self.tables.get(path).cloned().ok_or_else(|| AssetError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such table"),
        })
    }
}

/// A loaded context: small font 0, large font 1, sprite 0, and the given
/// word lists
pub fn loaded_context(word_lists: &[(&str, &[(&str, &str)])]) -> GameContext {
    let mut context = GameContext::new(word_lists.iter().map(|(topic, _)| topic.to_string()).collect());
    context.small_font = FontId(0);
    context.large_font = FontId(1);
    context.hangman_sprite = SpriteId(0);
    context.styles = StyleRegistry::new(FontId(0));

    for (topic, entries) in word_lists {
        context.word_lists.insert(
            topic.to_string(),
            entries.iter().map(|(word, hint)| WordEntry::new(*word, *hint)).collect(),
        );
    }

    context
}

/// Events for a full click (move, press, release) at `point`
pub fn click_at(point: Point) -> [InputEvent; 3] {
    [
        InputEvent::PointerMove(point),
        InputEvent::PointerDown(point),
        InputEvent::PointerUp(point),
    ]
}

/// Center of a rectangle, for aiming clicks
pub fn center(rect: Rect) -> Point {
    rect.center()
}
