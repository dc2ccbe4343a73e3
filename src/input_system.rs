use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::rect::Point;
use sdl2::EventPump;

/// Keys the widgets care about
///
/// Everything else arrives as `Other`; printable characters are carried
/// separately in [`InputEvent::KeyDown::character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Other,
}

impl Key {
    /// Arrow keys move nothing in this toolkit, so widgets skip them
    pub fn is_arrow(self) -> bool {
        matches!(self, Key::Left | Key::Right | Key::Up | Key::Down)
    }
}

/// Input events consumed by widgets and states
///
/// This decouples the game screens from SDL2's event type so screens can be
/// driven directly in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove(Point),
    PointerDown(Point),
    PointerUp(Point),
    KeyDown {
        key: Key,
        character: Option<char>,
    },
    /// Window close or the force-quit chord; handled by the host loop
    Quit,
}

impl InputEvent {
    /// Event for a single typed character
    pub fn typed(character: char) -> Self {
        InputEvent::KeyDown {
            key: Key::Other,
            character: Some(character),
        }
    }

    /// Event for a key press that produces no text
    pub fn key(key: Key) -> Self {
        InputEvent::KeyDown {
            key,
            character: None,
        }
    }
}

/// InputSystem turns SDL2 events into [`InputEvent`]s
///
/// Text arrives through SDL's `TextInput` events (one `KeyDown` per
/// character), named keys through `KeyDown`. Only the left mouse button acts
/// as the pointer.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Poll all pending SDL2 events and translate them
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in event_pump.poll_iter() {
            self.translate(event, &mut events);
        }

        events
    }

    fn translate(&self, event: Event, events: &mut Vec<InputEvent>) {
        match event {
            Event::Quit { .. } => events.push(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(key),
                keymod,
                ..
            } => {
                if let Some(event) = translate_key(key, keymod) {
                    events.push(event);
                }
            }
            Event::TextInput { text, .. } => {
                events.extend(text.chars().map(InputEvent::typed));
            }
            Event::MouseMotion { x, y, .. } => {
                events.push(InputEvent::PointerMove(Point::new(x, y)));
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                events.push(InputEvent::PointerDown(Point::new(x, y)));
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                events.push(InputEvent::PointerUp(Point::new(x, y)));
            }
            _ => {}
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a key press, intercepting the Alt+F4 force-quit chord
pub fn translate_key(key: Keycode, keymod: Mod) -> Option<InputEvent> {
    let key = match key {
        Keycode::F4 if keymod.intersects(Mod::LALTMOD | Mod::RALTMOD) => {
            return Some(InputEvent::Quit);
        }
        Keycode::Backspace => Key::Backspace,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        _ => return None,
    };

    Some(InputEvent::key(key))
}
