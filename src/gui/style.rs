//! Widget styles
//!
//! Each widget kind has a default [`Style`] held by the [`StyleRegistry`].
//! A widget is built with a [`StyleOverrides`] whose set fields win over the
//! kind's defaults. Resolution happens once, when the widget is constructed.

use crate::render::FontId;
use sdl2::pixels::Color;

/// The closed set of widget kinds, used to pick default styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    Button,
    ToggleButton,
    Textbox,
}

/// A fully resolved widget style
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: Color,
    pub foreground: Color,
    pub font: FontId,
    pub border_color: Color,
    /// Border thickness in pixels (0 = no border)
    pub border_size: u32,
    pub hover_background: Option<Color>,
    pub press_background: Option<Color>,
    pub toggle_background: Option<Color>,
}

impl Style {
    /// Apply every set override on top of this style
    pub fn with_overrides(&self, overrides: &StyleOverrides) -> Style {
        Style {
            background: overrides.background.unwrap_or(self.background),
            foreground: overrides.foreground.unwrap_or(self.foreground),
            font: overrides.font.unwrap_or(self.font),
            border_color: overrides.border_color.unwrap_or(self.border_color),
            border_size: overrides.border_size.unwrap_or(self.border_size),
            hover_background: overrides.hover_background.or(self.hover_background),
            press_background: overrides.press_background.or(self.press_background),
            toggle_background: overrides.toggle_background.or(self.toggle_background),
        }
    }

    /// Hover fill, falling back to the plain background
    pub fn hover(&self) -> Color {
        self.hover_background.unwrap_or(self.background)
    }

    pub fn press(&self) -> Color {
        self.press_background.unwrap_or(self.background)
    }

    pub fn toggle(&self) -> Color {
        self.toggle_background.unwrap_or(self.background)
    }
}

/// Caller-supplied style values; unset fields take the kind default
///
/// # Example
///
/// ```rust
/// let title_style = StyleOverrides::new().font(context.large_font);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub font: Option<FontId>,
    pub border_color: Option<Color>,
    pub border_size: Option<u32>,
    pub hover_background: Option<Color>,
    pub press_background: Option<Color>,
    pub toggle_background: Option<Color>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn border_size(mut self, size: u32) -> Self {
        self.border_size = Some(size);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn hover_background(mut self, color: Color) -> Self {
        self.hover_background = Some(color);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn press_background(mut self, color: Color) -> Self {
        self.press_background = Some(color);
        self
    }

    #[allow(dead_code)] // Reserved for per-widget color overrides
    pub fn toggle_background(mut self, color: Color) -> Self {
        self.toggle_background = Some(color);
        self
    }
}

/// Default style for every widget kind
///
/// Built once when the fonts are loaded and shared by reference with every
/// widget factory.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRegistry {
    label: Style,
    button: Style,
    toggle_button: Style,
    textbox: Style,
}

impl StyleRegistry {
    /// Creates the built-in defaults using `default_font` for all kinds
    pub fn new(default_font: FontId) -> Self {
        let base = Style {
            background: Color::RGB(255, 255, 255),
            foreground: Color::RGB(0, 0, 0),
            font: default_font,
            border_color: Color::RGB(0, 0, 0),
            border_size: 4,
            hover_background: None,
            press_background: None,
            toggle_background: None,
        };

        let button = Style {
            hover_background: Some(Color::RGB(200, 200, 200)),
            press_background: Some(Color::RGB(100, 100, 100)),
            ..base.clone()
        };

        StyleRegistry {
            label: base,
            toggle_button: Style {
                toggle_background: Some(Color::RGB(150, 150, 150)),
                ..button.clone()
            },
            textbox: button.clone(),
            button,
        }
    }

    /// Default style for a kind
    pub fn defaults(&self, kind: WidgetKind) -> &Style {
        match kind {
            WidgetKind::Label => &self.label,
            WidgetKind::Button => &self.button,
            WidgetKind::ToggleButton => &self.toggle_button,
            WidgetKind::Textbox => &self.textbox,
        }
    }

    /// Replace the default style for a kind
    #[allow(dead_code)] // Reserved for themed screens
    pub fn set_defaults(&mut self, kind: WidgetKind, style: Style) {
        match kind {
            WidgetKind::Label => self.label = style,
            WidgetKind::Button => self.button = style,
            WidgetKind::ToggleButton => self.toggle_button = style,
            WidgetKind::Textbox => self.textbox = style,
        }
    }

    /// Resolve a widget's style: overrides first, then the kind default
    pub fn resolve(&self, kind: WidgetKind, overrides: &StyleOverrides) -> Style {
        self.defaults(kind).with_overrides(overrides)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(FontId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [WidgetKind; 4] = [
        WidgetKind::Label,
        WidgetKind::Button,
        WidgetKind::ToggleButton,
        WidgetKind::Textbox,
    ];

    #[test]
    fn test_defaults_per_kind() {
        let registry = StyleRegistry::new(FontId(3));

        for kind in KINDS {
            let style = registry.defaults(kind);
            assert_eq!(style.font, FontId(3));
            assert_eq!(style.border_size, 4);
            assert_eq!(style.background, Color::RGB(255, 255, 255));
        }

        assert_eq!(registry.defaults(WidgetKind::Label).hover_background, None);
        assert_eq!(
            registry.defaults(WidgetKind::Button).press_background,
            Some(Color::RGB(100, 100, 100))
        );
        assert_eq!(registry.defaults(WidgetKind::Button).toggle_background, None);
        assert_eq!(
            registry.defaults(WidgetKind::ToggleButton).toggle_background,
            Some(Color::RGB(150, 150, 150))
        );
    }

    #[test]
    fn test_override_wins_per_key() {
        let registry = StyleRegistry::new(FontId(0));
        let overrides = StyleOverrides::new()
            .font(FontId(1))
            .background(Color::RGB(1, 2, 3))
            .border_size(0);

        for kind in KINDS {
            let style = registry.resolve(kind, &overrides);
            let defaults = registry.defaults(kind);

            // Overridden keys
            assert_eq!(style.font, FontId(1));
            assert_eq!(style.background, Color::RGB(1, 2, 3));
            assert_eq!(style.border_size, 0);

            // Omitted keys keep the kind default
            assert_eq!(style.foreground, defaults.foreground);
            assert_eq!(style.border_color, defaults.border_color);
            assert_eq!(style.hover_background, defaults.hover_background);
            assert_eq!(style.press_background, defaults.press_background);
            assert_eq!(style.toggle_background, defaults.toggle_background);
        }
    }

    #[test]
    fn test_empty_overrides_yield_defaults() {
        let registry = StyleRegistry::new(FontId(0));
        for kind in KINDS {
            assert_eq!(&registry.resolve(kind, &StyleOverrides::new()), registry.defaults(kind));
        }
    }

    #[test]
    fn test_set_defaults() {
        let mut registry = StyleRegistry::new(FontId(0));
        let custom = Style {
            border_size: 1,
            ..registry.defaults(WidgetKind::Label).clone()
        };
        registry.set_defaults(WidgetKind::Label, custom);

        assert_eq!(registry.defaults(WidgetKind::Label).border_size, 1);
        assert_eq!(registry.defaults(WidgetKind::Button).border_size, 4);
    }

    #[test]
    fn test_fill_fallbacks() {
        let registry = StyleRegistry::new(FontId(0));
        let label = registry.defaults(WidgetKind::Label);
        assert_eq!(label.hover(), label.background);

        let button = registry.defaults(WidgetKind::Button);
        assert_eq!(button.hover(), Color::RGB(200, 200, 200));
    }
}
