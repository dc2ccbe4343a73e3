//! Drawing and text measurement seams
//!
//! The widgets and states never touch SDL2 directly. They draw through a
//! [`Surface`] and measure text through a [`FontBook`], both of which are
//! implemented by the SDL2 backend in `backend/` and by in-memory fakes in
//! tests.
//!
//! Fonts and sprites are referred to by small copyable handles ([`FontId`],
//! [`SpriteId`]) handed out by the asset loader. A handle that was never
//! handed out fails to resolve with [`GuiError::UnknownFont`] /
//! [`GuiError::UnknownSprite`].

use crate::error::GuiError;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Handle to a loaded font face at a fixed point size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub usize);

/// Handle to a loaded image (sprite sheet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub usize);

/// Measures rendered text
pub trait FontBook {
    /// Width and height in pixels of `text` rendered in `font`.
    ///
    /// Empty text has zero width and the font's line height.
    fn text_size(&self, font: FontId, text: &str) -> Result<(u32, u32), GuiError>;
}

/// An abstract 2D drawing target
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError>;

    /// One pixel rectangle outline
    #[allow(dead_code)] // Reserved for focus outlines
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError>;

    fn draw_line(&mut self, start: Point, end: Point, color: Color, width: u32)
    -> Result<(), GuiError>;

    /// Copy the `src` region of a sprite sheet onto `dst`
    fn blit_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) -> Result<(), GuiError>;

    /// Render `text` with its top-left corner at `position`.
    ///
    /// `clip` selects a region of the rendered text (in text-local
    /// coordinates) to draw instead of the whole string.
    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        position: Point,
        clip: Option<Rect>,
    ) -> Result<(), GuiError>;
}

/// Grow a rectangle by `amount` pixels in total on each axis, keeping its center
pub fn inflate(rect: Rect, amount: u32) -> Rect {
    let half = (amount / 2) as i32;
    Rect::new(
        rect.x() - half,
        rect.y() - half,
        rect.width() + amount,
        rect.height() + amount,
    )
}
