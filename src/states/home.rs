use super::{StateRequest, Transition};
use crate::context::GameContext;
use crate::error::GuiError;
use crate::gui::{Button, Label, StyleOverrides, Widget};
use crate::input_system::InputEvent;
use crate::render::{FontBook, SpriteId, Surface};
use crate::sprite::{HangmanFrame, MAX_MISTAKES};
use sdl2::rect::Rect;

/// Main menu: title, the complete gallows, Play and Topics
pub struct HomeState {
    title: Label,
    play: Button,
    topics: Button,
    sprite: SpriteId,
}

impl HomeState {
    pub fn load(context: &GameContext, fonts: &dyn FontBook) -> Result<Self, GuiError> {
        let toolkit = context.toolkit(fonts);

        Ok(HomeState {
            title: toolkit.label(
                Rect::new(300, 75, 200, 75),
                "Hangman",
                StyleOverrides::new().font(context.large_font),
            )?,
            play: toolkit.button(Rect::new(225, 450, 150, 50), "Play", StyleOverrides::new())?,
            topics: toolkit.button(Rect::new(425, 450, 150, 50), "Topics", StyleOverrides::new())?,
            sprite: context.hangman_sprite,
        })
    }

    pub fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<Transition, GuiError> {
        self.play.update(event, fonts)?;
        self.topics.update(event, fonts)?;

        if self.play.is_clicked() {
            self.play.click_handled();
            return Ok(Transition::Switch(StateRequest::Game));
        }
        if self.topics.is_clicked() {
            self.topics.click_handled();
            return Ok(Transition::Switch(StateRequest::Topics));
        }

        Ok(Transition::Stay)
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.title.render(surface)?;
        self.play.render(surface)?;
        self.topics.render(surface)?;

        let frame = HangmanFrame::Stage(MAX_MISTAKES);
        surface.blit_sprite(self.sprite, frame.source_rect(), HangmanFrame::dest_rect(350, 200))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FontId;
    use crate::testing::{click_at, loaded_context, MonoFonts, RecordingSurface};
    use sdl2::rect::Point;

    fn home() -> HomeState {
        let context = loaded_context(&[("Computer", &[("cpu", "The brain")])]);
        HomeState::load(&context, &MonoFonts::new()).unwrap()
    }

    fn click(home: &mut HomeState, point: Point) -> Transition {
        let fonts = MonoFonts::new();
        let mut last = Transition::Stay;
        for event in click_at(point) {
            last = home.update(&event, &fonts).unwrap();
        }
        last
    }

    #[test]
    fn test_title_uses_large_font() {
        assert_eq!(home().title.style().font, FontId(1));
    }

    #[test]
    fn test_play_goes_to_game() {
        let mut home = home();
        assert_eq!(click(&mut home, Point::new(300, 475)), Transition::Switch(StateRequest::Game));
        assert!(!home.play.is_clicked());
    }

    #[test]
    fn test_topics_goes_to_topics() {
        let mut home = home();
        assert_eq!(click(&mut home, Point::new(500, 475)), Transition::Switch(StateRequest::Topics));
    }

    #[test]
    fn test_click_elsewhere_stays() {
        let mut home = home();
        assert_eq!(click(&mut home, Point::new(20, 20)), Transition::Stay);
    }

    #[test]
    fn test_render_draws_full_gallows() {
        let mut surface = RecordingSurface::new();
        home().render(&mut surface).unwrap();

        assert_eq!(surface.texts(), vec!["Hangman", "Play", "Topics"]);
        assert_eq!(
            surface.sprites(),
            vec![(SpriteId(0), Rect::new(720, 0, 120, 180), Rect::new(350, 200, 120, 180))]
        );
    }
}
