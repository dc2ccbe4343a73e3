use super::SdlAssets;
use crate::error::GuiError;
use crate::render::{FontId, SpriteId, Surface};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::collections::HashMap;

/// Rendered strings kept between frames
const TEXT_CACHE_LIMIT: usize = 256;

type TextKey = (FontId, String, (u8, u8, u8, u8));

/// Text textures by (font, text, color)
///
/// Labels and buttons redraw the same strings every frame, so each one is
/// rasterized once. The cache is dropped wholesale when it fills up.
#[derive(Default)]
pub struct TextCache<'tc> {
    textures: HashMap<TextKey, Texture<'tc>>,
}

impl TextCache<'_> {
    pub fn new() -> Self {
        TextCache {
            textures: HashMap::new(),
        }
    }
}

/// One frame's drawing target: the window canvas plus the loaded assets
pub struct SdlScreen<'a, 'ttf, 'tc> {
    canvas: &'a mut Canvas<Window>,
    assets: &'a SdlAssets<'ttf, 'tc>,
    text_cache: &'a mut TextCache<'tc>,
}

impl<'a, 'ttf, 'tc> SdlScreen<'a, 'ttf, 'tc> {
    pub fn new(
        canvas: &'a mut Canvas<Window>,
        assets: &'a SdlAssets<'ttf, 'tc>,
        text_cache: &'a mut TextCache<'tc>,
    ) -> Self {
        SdlScreen {
            canvas,
            assets,
            text_cache,
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Rasterize `text` into the cache unless it is already there
    fn cache_text(&mut self, key: &TextKey, text: &str) -> Result<(), GuiError> {
        if self.text_cache.textures.contains_key(key) {
            return Ok(());
        }
        if self.text_cache.textures.len() >= TEXT_CACHE_LIMIT {
            self.text_cache.textures.clear();
        }

        let (font, _, (r, g, b, a)) = *key;
        let surface = self
            .assets
            .font(font)?
            .render(text)
            .blended(Color::RGBA(r, g, b, a))
            .map_err(|e| GuiError::Backend(e.to_string()))?;
        let texture = self
            .assets
            .texture_creator()
            .create_texture_from_surface(&surface)
            .map_err(|e| GuiError::Backend(e.to_string()))?;

        self.text_cache.textures.insert(key.clone(), texture);
        Ok(())
    }
}

impl Surface for SdlScreen<'_, '_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect).map_err(GuiError::Backend)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), GuiError> {
        self.canvas.set_draw_color(color);
        self.canvas.draw_rect(rect).map_err(GuiError::Backend)
    }

    fn draw_line(&mut self, start: Point, end: Point, color: Color, width: u32) -> Result<(), GuiError> {
        self.canvas.set_draw_color(color);

        // Thick lines are drawn as parallel one-pixel lines
        let vertical = start.x() == end.x();
        let half = width as i32 / 2;
        for step in 0..width.max(1) as i32 {
            let shift = step - half;
            let (dx, dy) = if vertical { (shift, 0) } else { (0, shift) };
            self.canvas
                .draw_line(start.offset(dx, dy), end.offset(dx, dy))
                .map_err(GuiError::Backend)?;
        }

        Ok(())
    }

    fn blit_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) -> Result<(), GuiError> {
        let texture = self.assets.texture(sprite)?;
        self.canvas.copy(texture, src, dst).map_err(GuiError::Backend)
    }

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        color: Color,
        position: Point,
        clip: Option<Rect>,
    ) -> Result<(), GuiError> {
        // SDL2_ttf refuses to render an empty string
        if text.is_empty() {
            return Ok(());
        }

        let key = (font, text.to_string(), color.rgba());
        self.cache_text(&key, text)?;

        let texture = self
            .text_cache
            .textures
            .get(&key)
            .ok_or_else(|| GuiError::Backend(format!("text texture for '{}' missing", text)))?;

        let (src, dst) = match clip {
            Some(clip) => (Some(clip), Rect::new(position.x(), position.y(), clip.width(), clip.height())),
            None => {
                let query = texture.query();
                (None, Rect::new(position.x(), position.y(), query.width, query.height))
            }
        };

        self.canvas.copy(texture, src, dst).map_err(GuiError::Backend)
    }
}
