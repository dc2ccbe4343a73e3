//! Static text label

use super::{draw_frame, Style, StyleOverrides, TextLayout, Toolkit, Widget, WidgetKind};
use crate::error::GuiError;
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};
use sdl2::rect::{Point, Rect};

/// Text centered in a fixed rectangle, with optional border
pub struct Label {
    rect: Rect,
    style: Style,
    layout: TextLayout,
    text_position: Point,
}

impl Label {
    pub fn new(toolkit: Toolkit, rect: Rect, text: &str, overrides: &StyleOverrides) -> Result<Self, GuiError> {
        let style = toolkit.styles.resolve(WidgetKind::Label, overrides);
        let layout = TextLayout::measure(toolkit.fonts, style.font, text)?;
        let text_position = layout.centered_in(rect);

        Ok(Label {
            rect,
            style,
            layout,
            text_position,
        })
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.layout.text
    }

    /// Replace the text and re-center it
    pub fn set_text(&mut self, fonts: &dyn FontBook, text: &str) -> Result<(), GuiError> {
        self.layout = TextLayout::measure(fonts, self.style.font, text)?;
        self.text_position = self.layout.centered_in(self.rect);
        Ok(())
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[cfg(test)]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[cfg(test)]
    pub fn text_position(&self) -> Point {
        self.text_position
    }
}

impl Widget for Label {
    fn update(&mut self, _event: &InputEvent, _fonts: &dyn FontBook) -> Result<(), GuiError> {
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        draw_frame(surface, self.rect, &self.style, self.style.background)?;
        surface.draw_text(
            self.style.font,
            &self.layout.text,
            self.style.foreground,
            self.text_position,
            None,
        )
    }
}
