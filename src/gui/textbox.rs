//! Single-line text entry
//!
//! Text is append/remove-at-end only: there is no cursor positioning, so the
//! arrow keys are ignored. When the text grows wider than the box it scrolls
//! left, showing only its rightmost part.

use super::{draw_frame, Style, StyleOverrides, TextLayout, Toolkit, Widget, WidgetKind};
use crate::error::GuiError;
use crate::input_system::{InputEvent, Key};
use crate::render::{FontBook, Surface};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use std::time::{Duration, Instant};

/// Gap between the box edge and the text, on each side
pub const TEXT_PADDING: u32 = 5;

/// How long the cursor stays on (and then off)
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

const CURSOR_COLOR: Color = Color::RGB(0, 0, 0);
const CURSOR_WIDTH: u32 = 2;

/// Characters a textbox accepts: ASCII letters, digits, punctuation and space
pub fn is_accepted(character: char) -> bool {
    character.is_ascii_alphanumeric() || character.is_ascii_punctuation() || character == ' '
}

pub struct Textbox {
    rect: Rect,
    style: Style,
    buffer: Vec<char>,
    layout: TextLayout,
    text_changed: bool,
    text_position: Point,
    /// Pixels of text hidden off the left edge
    visible_offset: u32,
    visible_width: u32,
    focused: bool,
    blink_epoch: Instant,
}

impl Textbox {
    pub fn new(toolkit: Toolkit, rect: Rect, text: &str, overrides: &StyleOverrides) -> Result<Self, GuiError> {
        let style = toolkit.styles.resolve(WidgetKind::Textbox, overrides);
        let layout = TextLayout::measure(toolkit.fonts, style.font, text)?;

        let mut textbox = Textbox {
            rect,
            style,
            buffer: text.chars().collect(),
            layout,
            text_changed: false,
            text_position: Point::new(rect.x(), rect.y()),
            visible_offset: 0,
            visible_width: 0,
            focused: false,
            blink_epoch: Instant::now(),
        };
        textbox.place_text();

        Ok(textbox)
    }

    pub fn text(&self) -> &str {
        &self.layout.text
    }

    pub fn set_text(&mut self, fonts: &dyn FontBook, text: &str) -> Result<(), GuiError> {
        self.buffer = text.chars().collect();
        self.recreate(fonts)
    }

    /// Whether the most recent edit changed the text
    pub fn text_changed(&self) -> bool {
        self.text_changed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            self.blink_epoch = Instant::now();
        }
        self.focused = focused;
    }

    pub fn visible_offset(&self) -> u32 {
        self.visible_offset
    }

    pub fn visible_width(&self) -> u32 {
        self.visible_width
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Cursor blink phase at `now`: on for one interval, off for the next
    pub fn cursor_visible_at(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.blink_epoch);
        (elapsed.as_millis() / BLINK_INTERVAL.as_millis()) % 2 == 0
    }

    fn recreate(&mut self, fonts: &dyn FontBook) -> Result<(), GuiError> {
        let text: String = self.buffer.iter().collect();
        self.text_changed = text != self.layout.text;
        self.layout = TextLayout::measure(fonts, self.style.font, &text)?;
        self.place_text();
        Ok(())
    }

    /// Left-align the text inside the padding and pick the visible window
    fn place_text(&mut self) {
        self.text_position = Point::new(
            self.rect.left() + TEXT_PADDING as i32,
            self.rect.center().y() - self.layout.height as i32 / 2,
        );

        let room = self.rect.width().saturating_sub(2 * TEXT_PADDING);
        if self.layout.width > room {
            self.visible_offset = self.layout.width - room;
            self.visible_width = room;
        } else {
            self.visible_offset = 0;
            self.visible_width = self.layout.width;
        }
    }

    fn render_cursor(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        let x = self.text_position.x() + self.visible_width as i32;
        let top = self.text_position.y();
        surface.draw_line(
            Point::new(x, top),
            Point::new(x, top + self.layout.height as i32),
            CURSOR_COLOR,
            CURSOR_WIDTH,
        )
    }
}

impl Widget for Textbox {
    fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<(), GuiError> {
        match event {
            InputEvent::KeyDown { key, character } if self.focused => {
                if key.is_arrow() {
                    return Ok(());
                }

                if *key == Key::Backspace {
                    if self.buffer.pop().is_some() {
                        self.recreate(fonts)?;
                    }
                } else if let Some(character) = character.filter(|c| is_accepted(*c)) {
                    self.buffer.push(character);
                    self.recreate(fonts)?;
                }
            }
            InputEvent::PointerDown(point) => {
                self.set_focused(self.rect.contains_point(*point));
            }
            _ => {}
        }

        Ok(())
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        draw_frame(surface, self.rect, &self.style, self.style.background)?;

        let clip = (self.visible_offset > 0).then(|| {
            Rect::new(
                self.visible_offset as i32,
                0,
                self.visible_width,
                self.layout.height,
            )
        });
        surface.draw_text(
            self.style.font,
            &self.layout.text,
            self.style.foreground,
            self.text_position,
            clip,
        )?;

        if self.focused && self.cursor_visible_at(Instant::now()) {
            self.render_cursor(surface)?;
        }

        Ok(())
    }
}
