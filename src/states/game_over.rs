use super::{StateRequest, Transition};
use crate::context::GameContext;
use crate::error::GuiError;
use crate::gui::{Button, Label, StyleOverrides, Widget};
use crate::input_system::InputEvent;
use crate::render::{FontBook, SpriteId, Surface};
use crate::sprite::HangmanFrame;
use sdl2::rect::Rect;

/// Round result with the answer, and the way back
pub struct GameOverState {
    won: bool,
    result: Label,
    answer: Label,
    back: Button,
    play_again: Button,
    sprite: SpriteId,
}

impl GameOverState {
    pub fn load(context: &GameContext, fonts: &dyn FontBook, word: &str, won: bool) -> Result<Self, GuiError> {
        let toolkit = context.toolkit(fonts);
        let headline = if won { "You won!" } else { "You lose!" };

        Ok(GameOverState {
            won,
            result: toolkit.label(
                Rect::new(200, 50, 400, 50),
                headline,
                StyleOverrides::new().font(context.large_font),
            )?,
            answer: toolkit.label(
                Rect::new(150, 120, 500, 50),
                &format!("The word was '{}'", word),
                StyleOverrides::new(),
            )?,
            back: toolkit.button(Rect::new(325, 450, 175, 50), "Main menu", StyleOverrides::new())?,
            play_again: toolkit.button(Rect::new(325, 510, 175, 50), "Play again", StyleOverrides::new())?,
            sprite: context.hangman_sprite,
        })
    }

    pub fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<Transition, GuiError> {
        self.play_again.update(event, fonts)?;
        self.back.update(event, fonts)?;

        if self.play_again.is_clicked() {
            self.play_again.click_handled();
            return Ok(Transition::Switch(StateRequest::Game));
        }
        if self.back.is_clicked() {
            self.back.click_handled();
            return Ok(Transition::Switch(StateRequest::Home));
        }

        Ok(Transition::Stay)
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.result.render(surface)?;
        self.answer.render(surface)?;
        self.back.render(surface)?;
        self.play_again.render(surface)?;

        let frame = if self.won { HangmanFrame::Alive } else { HangmanFrame::Dead };
        surface.blit_sprite(self.sprite, frame.source_rect(), HangmanFrame::dest_rect(350, 220))
    }

    #[cfg(test)]
    pub fn won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FontId;
    use crate::testing::{click_at, loaded_context, MonoFonts, RecordingSurface};
    use sdl2::rect::Point;

    fn game_over(won: bool) -> GameOverState {
        let context = loaded_context(&[("Computer", &[("cpu", "The brain")])]);
        GameOverState::load(&context, &MonoFonts::new(), "cpu", won).unwrap()
    }

    fn click(state: &mut GameOverState, point: Point) -> Transition {
        let fonts = MonoFonts::new();
        let mut last = Transition::Stay;
        for event in click_at(point) {
            last = state.update(&event, &fonts).unwrap();
        }
        last
    }

    #[test]
    fn test_texts() {
        let won = game_over(true);
        assert_eq!(won.result.text(), "You won!");
        assert_eq!(won.result.style().font, FontId(1));
        assert_eq!(won.answer.text(), "The word was 'cpu'");

        assert_eq!(game_over(false).result.text(), "You lose!");
    }

    #[test]
    fn test_play_again() {
        let mut state = game_over(true);
        assert_eq!(click(&mut state, Point::new(400, 535)), Transition::Switch(StateRequest::Game));
    }

    #[test]
    fn test_main_menu() {
        let mut state = game_over(false);
        assert_eq!(click(&mut state, Point::new(400, 475)), Transition::Switch(StateRequest::Home));
    }

    #[test]
    fn test_sprite_frame_follows_result() {
        let mut surface = RecordingSurface::new();
        game_over(true).render(&mut surface).unwrap();
        assert_eq!(surface.sprites()[0].1, Rect::new(960, 0, 120, 180));

        let mut surface = RecordingSurface::new();
        game_over(false).render(&mut surface).unwrap();
        assert_eq!(surface.sprites()[0].1, Rect::new(840, 0, 120, 180));
        assert_eq!(surface.sprites()[0].2, Rect::new(350, 220, 120, 180));
    }
}
