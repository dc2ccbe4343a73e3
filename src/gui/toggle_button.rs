//! On/off switch built on [`Button`]
//!
//! Unlike a plain button, a toggle button consumes its own clicks: after an
//! update, `is_clicked()` is always false.

use super::{Button, StyleOverrides, Toolkit, Widget, WidgetKind};
use crate::error::GuiError;
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

pub struct ToggleButton {
    button: Button,
    toggled: bool,
}

impl ToggleButton {
    pub fn new(toolkit: Toolkit, rect: Rect, text: &str, overrides: &StyleOverrides) -> Result<Self, GuiError> {
        Ok(ToggleButton {
            button: Button::with_kind(toolkit, WidgetKind::ToggleButton, rect, text, overrides)?,
            toggled: false,
        })
    }

    /// Run the button rules, then flip on a completed click
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.button.handle_event(event);

        if self.button.is_clicked() {
            self.toggled = !self.toggled;
            self.button.click_handled();
        }
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    pub fn set_toggled(&mut self, toggled: bool) {
        self.toggled = toggled;
    }

    #[cfg(test)]
    pub fn is_clicked(&self) -> bool {
        self.button.is_clicked()
    }

    pub fn text(&self) -> &str {
        self.button.text()
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        self.button.rect()
    }

    #[cfg(test)]
    pub fn style(&self) -> &super::Style {
        self.button.style()
    }

    #[allow(dead_code)] // Reserved for screens that grey out a choice
    pub fn set_enabled(&mut self, enabled: bool) {
        self.button.set_enabled(enabled);
    }

    /// Fill color: pressed, then toggled, then hovered, then background
    pub fn fill_color(&self) -> Color {
        let style = self.button.style();
        if self.button.is_pressed() {
            style.press()
        } else if self.toggled {
            style.toggle()
        } else if self.button.is_hovered() {
            style.hover()
        } else {
            style.background
        }
    }
}

impl Widget for ToggleButton {
    fn update(&mut self, event: &InputEvent, _fonts: &dyn FontBook) -> Result<(), GuiError> {
        self.handle_event(event);
        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.button.render_with_fill(surface, self.fill_color())
    }
}
