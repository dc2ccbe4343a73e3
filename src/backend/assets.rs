use crate::error::{AssetError, GuiError};
use crate::render::{FontBook, FontId, SpriteId};
use crate::states::AssetLoader;
use crate::words;
use log::debug;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use std::path::Path;

/// Owns every loaded font and texture; handles index into these lists
pub struct SdlAssets<'ttf, 'tc> {
    ttf: &'ttf Sdl2TtfContext,
    texture_creator: &'tc TextureCreator<WindowContext>,
    fonts: Vec<Font<'ttf, 'static>>,
    textures: Vec<Texture<'tc>>,
}

impl<'ttf, 'tc> SdlAssets<'ttf, 'tc> {
    pub fn new(ttf: &'ttf Sdl2TtfContext, texture_creator: &'tc TextureCreator<WindowContext>) -> Self {
        SdlAssets {
            ttf,
            texture_creator,
            fonts: Vec::new(),
            textures: Vec::new(),
        }
    }

    pub fn font(&self, font: FontId) -> Result<&Font<'ttf, 'static>, GuiError> {
        self.fonts.get(font.0).ok_or(GuiError::UnknownFont(font))
    }

    pub fn texture(&self, sprite: SpriteId) -> Result<&Texture<'tc>, GuiError> {
        self.textures.get(sprite.0).ok_or(GuiError::UnknownSprite(sprite))
    }

    pub fn texture_creator(&self) -> &'tc TextureCreator<WindowContext> {
        self.texture_creator
    }
}

impl FontBook for SdlAssets<'_, '_> {
    fn text_size(&self, font: FontId, text: &str) -> Result<(u32, u32), GuiError> {
        let font = self.font(font)?;

        // SDL2_ttf reports no height for an empty string
        if text.is_empty() {
            return Ok((0, font.height().max(0) as u32));
        }

        font.size_of(text).map_err(|e| GuiError::Backend(e.to_string()))
    }
}

impl AssetLoader for SdlAssets<'_, '_> {
    fn load_font(&mut self, path: &Path, size: u16) -> Result<FontId, AssetError> {
        let font = self.ttf.load_font(path, size).map_err(|reason| AssetError::Font {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!("Loaded font {} at {}pt", path.display(), size);
        self.fonts.push(font);
        Ok(FontId(self.fonts.len() - 1))
    }

    fn load_image(&mut self, path: &Path) -> Result<SpriteId, AssetError> {
        let texture = self.texture_creator.load_texture(path).map_err(|reason| AssetError::Image {
            path: path.to_path_buf(),
            reason,
        })?;

        debug!("Loaded image {}", path.display());
        self.textures.push(texture);
        Ok(SpriteId(self.textures.len() - 1))
    }

    fn read_delimited_table(&mut self, path: &Path, delimiter: char) -> Result<Vec<Vec<String>>, AssetError> {
        words::read_delimited_table(path, delimiter)
    }
}
