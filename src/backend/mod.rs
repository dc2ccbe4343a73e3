// SDL2 backend
//
// This module contains:
// - assets.rs: fonts, sprite sheets and word tables loaded through SDL2_ttf and SDL2_image
// - screen.rs: the window canvas as a drawing surface, with a text texture cache

pub mod assets;
pub mod screen;

pub use assets::SdlAssets;
pub use screen::{SdlScreen, TextCache};
