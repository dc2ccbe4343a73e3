//! Retained-mode widget toolkit
//!
//! Screens are built from a small closed set of widgets that own their
//! rectangle, their resolved style and their interaction state:
//!
//! - [`Label`] - static centered text
//! - [`Button`] - clickable, with a latched `clicked` flag
//! - [`ToggleButton`] - a button that flips on every click
//! - [`Textbox`] - single-line text entry
//!
//! # Architecture
//!
//! Widgets are built through a [`Toolkit`], which carries the style registry
//! and the font book. Text is measured once at construction (and again on
//! `set_text`), so a widget whose font cannot be resolved fails to build.
//! Each frame the owning screen feeds input events to `update` and draws with
//! `render`.
//!
//! # Example Usage
//!
//! ```rust
//! let toolkit = Toolkit::new(&context.styles, fonts);
//! let mut play = toolkit.button(Rect::new(225, 450, 150, 50), "Play", StyleOverrides::new())?;
//!
//! // Per event
//! play.update(&event, fonts)?;
//! if play.is_clicked() {
//!     play.click_handled();
//!     // ...
//! }
//!
//! // Per frame
//! play.render(surface)?;
//! ```

pub mod button;
pub mod label;
pub mod style;
#[allow(dead_code)] // Reserved for text entry screens
pub mod textbox;
pub mod toggle_button;

pub use button::Button;
pub use label::Label;
pub use style::{Style, StyleOverrides, StyleRegistry, WidgetKind};
pub use textbox::Textbox;
pub use toggle_button::ToggleButton;

use crate::error::GuiError;
use crate::input_system::InputEvent;
use crate::render::{FontBook, FontId, Surface, inflate};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Common capability set of every widget
pub trait Widget {
    /// React to one input event
    fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<(), GuiError>;

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError>;
}

/// What widget constructors need: default styles and text metrics
#[derive(Clone, Copy)]
pub struct Toolkit<'a> {
    pub styles: &'a StyleRegistry,
    pub fonts: &'a dyn FontBook,
}

impl<'a> Toolkit<'a> {
    pub fn new(styles: &'a StyleRegistry, fonts: &'a dyn FontBook) -> Self {
        Toolkit { styles, fonts }
    }

    pub fn label(&self, rect: Rect, text: &str, overrides: StyleOverrides) -> Result<Label, GuiError> {
        Label::new(*self, rect, text, &overrides)
    }

    pub fn button(&self, rect: Rect, text: &str, overrides: StyleOverrides) -> Result<Button, GuiError> {
        Button::new(*self, rect, text, &overrides)
    }

    pub fn toggle_button(
        &self,
        rect: Rect,
        text: &str,
        overrides: StyleOverrides,
    ) -> Result<ToggleButton, GuiError> {
        ToggleButton::new(*self, rect, text, &overrides)
    }

    #[allow(dead_code)] // Reserved for text entry screens
    pub fn textbox(&self, rect: Rect, text: &str, overrides: StyleOverrides) -> Result<Textbox, GuiError> {
        Textbox::new(*self, rect, text, &overrides)
    }
}

/// Text measured in a given font, cached until the text changes
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub text: String,
    pub width: u32,
    pub height: u32,
}

impl TextLayout {
    pub fn measure(fonts: &dyn FontBook, font: FontId, text: &str) -> Result<Self, GuiError> {
        let (width, height) = fonts.text_size(font, text)?;
        Ok(TextLayout {
            text: text.to_string(),
            width,
            height,
        })
    }

    /// Top-left position that centers this text in `rect`
    pub fn centered_in(&self, rect: Rect) -> Point {
        let center = rect.center();
        Point::new(
            center.x() - self.width as i32 / 2,
            center.y() - self.height as i32 / 2,
        )
    }
}

/// Border (when the style has one) then background fill
pub(crate) fn draw_frame(surface: &mut dyn Surface, rect: Rect, style: &Style, fill: Color) -> Result<(), GuiError> {
    if style.border_size > 0 {
        surface.fill_rect(inflate(rect, style.border_size), style.border_color)?;
    }
    surface.fill_rect(rect, fill)
}
