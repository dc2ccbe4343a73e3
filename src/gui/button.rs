//! Clickable button
//!
//! A click is press and release both inside the button. The result is
//! latched in `clicked` until the owner calls [`Button::click_handled`], so a
//! single press is consumed exactly once.

use super::{draw_frame, Style, StyleOverrides, TextLayout, Toolkit, Widget, WidgetKind};
use crate::error::GuiError;
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};

/// Overlay drawn over a disabled button
pub const DISABLED_OVERLAY: Color = Color::RGB(100, 100, 100);

pub struct Button {
    rect: Rect,
    style: Style,
    layout: TextLayout,
    text_position: Point,
    enabled: bool,
    hovered: bool,
    pressed: bool,
    clicked: bool,
}

impl Button {
    pub fn new(toolkit: Toolkit, rect: Rect, text: &str, overrides: &StyleOverrides) -> Result<Self, GuiError> {
        Self::with_kind(toolkit, WidgetKind::Button, rect, text, overrides)
    }

    /// Build with the default style of another kind (toggle buttons share
    /// the button state machine)
    pub(super) fn with_kind(
        toolkit: Toolkit,
        kind: WidgetKind,
        rect: Rect,
        text: &str,
        overrides: &StyleOverrides,
    ) -> Result<Self, GuiError> {
        let style = toolkit.styles.resolve(kind, overrides);
        let layout = TextLayout::measure(toolkit.fonts, style.font, text)?;
        let text_position = layout.centered_in(rect);

        Ok(Button {
            rect,
            style,
            layout,
            text_position,
            enabled: true,
            hovered: false,
            pressed: false,
            clicked: false,
        })
    }

    /// Apply the pointer transition rules; disabled buttons ignore input
    pub fn handle_event(&mut self, event: &InputEvent) {
        if !self.enabled {
            return;
        }

        match event {
            InputEvent::PointerMove(point) => {
                self.hovered = self.rect.contains_point(*point);
            }
            InputEvent::PointerDown(_) => {
                self.pressed = self.hovered;
                self.clicked = false;
            }
            InputEvent::PointerUp(_) => {
                self.clicked = self.hovered && self.pressed;
                self.pressed = false;
            }
            _ => {}
        }
    }

    /// Clear the latched click. Calling it again is harmless.
    pub fn click_handled(&mut self) {
        self.clicked = false;
    }

    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[allow(dead_code)] // Reserved for screens that grey out a choice
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn text(&self) -> &str {
        &self.layout.text
    }

    #[allow(dead_code)] // Reserved for buttons that relabel themselves
    pub fn set_text(&mut self, fonts: &dyn FontBook, text: &str) -> Result<(), GuiError> {
        self.layout = TextLayout::measure(fonts, self.style.font, text)?;
        self.text_position = self.layout.centered_in(self.rect);
        Ok(())
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Fill color: pressed, then hovered, then plain background
    pub fn fill_color(&self) -> Color {
        if self.pressed {
            self.style.press()
        } else if self.hovered {
            self.style.hover()
        } else {
            self.style.background
        }
    }

    /// Draw with the given fill (toggle buttons pick their own)
    pub(super) fn render_with_fill(&self, surface: &mut dyn Surface, fill: Color) -> Result<(), GuiError> {
        draw_frame(surface, self.rect, &self.style, fill)?;

        if !self.enabled {
            surface.fill_rect(self.rect, DISABLED_OVERLAY)?;
        }

        surface.draw_text(
            self.style.font,
            &self.layout.text,
            self.style.foreground,
            self.text_position,
            None,
        )
    }
}

impl Widget for Button {
    fn update(&mut self, event: &InputEvent, _fonts: &dyn FontBook) -> Result<(), GuiError> {
        self.handle_event(event);
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.render_with_fill(surface, self.fill_color())
    }
}
