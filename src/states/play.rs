use super::{StateRequest, Transition};
use crate::context::GameContext;
use crate::error::{GuiError, HangmanError};
use crate::gui::{Button, Label, StyleOverrides, Toolkit, Widget};
use crate::input_system::InputEvent;
use crate::render::{FontBook, SpriteId, Surface};
use crate::sprite::{HangmanFrame, MAX_MISTAKES};
use crate::words::WordEntry;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use sdl2::rect::Rect;

const HIDDEN: char = '_';

// Letter grid: two rows of 13 from (50, 350)
const LETTERS_ORIGIN: (i32, i32) = (50, 350);
const LETTERS_PER_ROW: usize = 13;
const LETTER_SIZE: u32 = 50;
const LETTER_PADDING: i32 = 5;

// Word and hint labels grow with their text, centered on this x
const LABEL_CENTER_X: f64 = 500.0;
const LABEL_BASE_WIDTH: u32 = 50;
const LABEL_CHAR_WIDTH: u32 = 15;
const LABEL_HEIGHT: u32 = 50;

/// One round: guess the word one letter at a time
pub struct GameState {
    word: Vec<char>,
    guessed: Vec<char>,
    mistakes: u32,
    guess_label: Label,
    hint_label: Label,
    letters: Vec<Button>,
    sprite: SpriteId,
}

impl GameState {
    /// Start a round with a random word: first a topic, uniformly from the
    /// selected ones, then an entry from that topic's list
    pub fn load<R: Rng + ?Sized>(
        context: &GameContext,
        fonts: &dyn FontBook,
        rng: &mut R,
    ) -> Result<Self, HangmanError> {
        let topic = context
            .current_topics
            .choose(rng)
            .ok_or_else(|| HangmanError::InvalidState("no topics selected".to_string()))?;

        let entry = context
            .words(topic)
            .and_then(|words| words.choose(rng))
            .ok_or_else(|| HangmanError::InvalidState(format!("no words for topic '{}'", topic)))?;

        debug!("New round from '{}' ({} letters)", topic, entry.word.chars().count());
        Ok(Self::with_entry(context, fonts, entry)?)
    }

    /// Start a round with a known word
    pub fn with_entry(context: &GameContext, fonts: &dyn FontBook, entry: &WordEntry) -> Result<Self, GuiError> {
        let toolkit = context.toolkit(fonts);

        let word: Vec<char> = entry.word.chars().collect();
        let guessed: Vec<char> = word.iter().map(|&c| if c == ' ' { ' ' } else { HIDDEN }).collect();
        let guessed_text: String = guessed.iter().collect();

        Ok(GameState {
            guess_label: toolkit.label(
                sized_label_rect(word.len(), 100),
                &guessed_text,
                StyleOverrides::new(),
            )?,
            hint_label: toolkit.label(
                sized_label_rect(entry.hint.chars().count(), 200),
                &entry.hint,
                StyleOverrides::new(),
            )?,
            letters: letter_buttons(toolkit)?,
            word,
            guessed,
            mistakes: 0,
            sprite: context.hangman_sprite,
        })
    }

    pub fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<Transition, GuiError> {
        let mut chosen = None;
        for button in &mut self.letters {
            button.update(event, fonts)?;
            if button.is_clicked() {
                button.click_handled();
                chosen = button.text().chars().next();
            }
        }

        match chosen {
            Some(letter) => self.guess(letter, fonts),
            None => Ok(Transition::Stay),
        }
    }

    /// Play one letter. Its button goes away for the rest of the round; a
    /// letter that was already played (or has no button) is ignored.
    pub fn guess(&mut self, letter: char, fonts: &dyn FontBook) -> Result<Transition, GuiError> {
        let before = self.letters.len();
        self.letters.retain(|button| !button.text().starts_with(letter));
        if self.letters.len() == before {
            return Ok(Transition::Stay);
        }

        if self.word.contains(&letter) {
            for (slot, c) in self.guessed.iter_mut().zip(&self.word) {
                if *c == letter {
                    *slot = letter;
                }
            }
            let text = self.guessed();
            self.guess_label.set_text(fonts, &text)?;
            debug!("Guessed '{}': {}", letter, text);
        } else {
            self.mistakes += 1;
            debug!("Missed '{}': {} of {} mistakes", letter, self.mistakes, MAX_MISTAKES);
        }

        let word: String = self.word.iter().collect();
        if self.guessed == self.word {
            Ok(Transition::Switch(StateRequest::GameOver { word, won: true }))
        } else if self.mistakes == MAX_MISTAKES {
            Ok(Transition::Switch(StateRequest::GameOver { word, won: false }))
        } else {
            Ok(Transition::Stay)
        }
    }

    /// The word so far, `_` for each hidden letter
    pub fn guessed(&self) -> String {
        self.guessed.iter().collect()
    }

    #[cfg(test)]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[cfg(test)]
    pub fn letters(&self) -> &[Button] {
        &self.letters
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        for button in &self.letters {
            button.render(surface)?;
        }
        self.guess_label.render(surface)?;
        self.hint_label.render(surface)?;

        let frame = HangmanFrame::Stage(self.mistakes);
        surface.blit_sprite(self.sprite, frame.source_rect(), HangmanFrame::dest_rect(100, 100))
    }
}

/// Label rect sized for `chars` characters, centered on [`LABEL_CENTER_X`]
fn sized_label_rect(chars: usize, y: i32) -> Rect {
    let width = LABEL_BASE_WIDTH + LABEL_CHAR_WIDTH * chars as u32;
    let x = (LABEL_CENTER_X - width as f64 / 2.0) as i32;
    Rect::new(x, y, width, LABEL_HEIGHT)
}

fn letter_buttons(toolkit: Toolkit) -> Result<Vec<Button>, GuiError> {
    let step = LETTER_SIZE as i32 + LETTER_PADDING;

    ('a'..='z')
        .enumerate()
        .map(|(index, letter)| {
            let column = (index % LETTERS_PER_ROW) as i32;
            let row = (index / LETTERS_PER_ROW) as i32;
            let rect = Rect::new(
                LETTERS_ORIGIN.0 + column * step,
                LETTERS_ORIGIN.1 + row * step,
                LETTER_SIZE,
                LETTER_SIZE,
            );
            toolkit.button(rect, &letter.to_string(), StyleOverrides::new())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{center, click_at, loaded_context, MonoFonts, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn round(word: &str, hint: &str) -> GameState {
        let context = loaded_context(&[("Computer", &[("cpu", "The brain")])]);
        GameState::with_entry(&context, &MonoFonts::new(), &WordEntry::new(word, hint)).unwrap()
    }

    #[test]
    fn test_round_layout() {
        let game = round("cat", "Pet");

        assert_eq!(game.guessed(), "___");
        assert_eq!(game.mistakes(), 0);
        // 50 + 15 * 3 = 95 wide, left edge at 500 - 47.5
        assert_eq!(game.guess_label.rect(), Rect::new(452, 100, 95, 50));
        assert_eq!(game.hint_label.rect(), Rect::new(452, 200, 95, 50));

        let letters = game.letters();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters[0].rect(), Rect::new(50, 350, 50, 50));
        assert_eq!(letters[12].rect(), Rect::new(710, 350, 50, 50));
        assert_eq!(letters[13].text(), "n");
        assert_eq!(letters[13].rect(), Rect::new(50, 405, 50, 50));
        assert_eq!(letters[25].text(), "z");
    }

    #[test]
    fn test_spaces_are_revealed() {
        assert_eq!(round("hard disk", "Storage").guessed(), "____ ____");
    }

    #[test]
    fn test_cat_win_progression() {
        let fonts = MonoFonts::new();
        let mut game = round("cat", "Pet");

        assert_eq!(game.guess('c', &fonts).unwrap(), Transition::Stay);
        assert_eq!(game.guessed(), "c__");
        assert_eq!(game.guess('a', &fonts).unwrap(), Transition::Stay);
        assert_eq!(game.guessed(), "ca_");
        assert_eq!(game.guess_label.text(), "ca_");

        assert_eq!(
            game.guess('t', &fonts).unwrap(),
            Transition::Switch(StateRequest::GameOver {
                word: "cat".to_string(),
                won: true
            })
        );
        assert_eq!(game.mistakes(), 0);
        assert_eq!(game.letters().len(), 23);
    }

    #[test]
    fn test_dog_loss_at_six() {
        let fonts = MonoFonts::new();
        let mut game = round("dog", "Pet");

        for letter in ['a', 'b', 'c', 'e', 'f'] {
            assert_eq!(game.guess(letter, &fonts).unwrap(), Transition::Stay);
        }
        assert_eq!(game.mistakes(), 5);

        assert_eq!(
            game.guess('h', &fonts).unwrap(),
            Transition::Switch(StateRequest::GameOver {
                word: "dog".to_string(),
                won: false
            })
        );
        assert_eq!(game.mistakes(), 6);
        assert_eq!(game.guessed(), "___");
    }

    #[test]
    fn test_repeated_letter_is_ignored() {
        let fonts = MonoFonts::new();
        let mut game = round("dog", "Pet");

        game.guess('x', &fonts).unwrap();
        game.guess('x', &fonts).unwrap();

        assert_eq!(game.mistakes(), 1);
        assert_eq!(game.letters().len(), 25);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let fonts = MonoFonts::new();
        let mut game = round("Ada", "Language");

        game.guess('a', &fonts).unwrap();
        assert_eq!(game.guessed(), "__a");
    }

    #[test]
    fn test_clicking_a_letter_guesses_it() {
        let fonts = MonoFonts::new();
        let mut game = round("cat", "Pet");
        let point = center(game.letters()[2].rect());

        let mut last = Transition::Stay;
        for event in click_at(point) {
            last = game.update(&event, &fonts).unwrap();
        }

        assert_eq!(last, Transition::Stay);
        assert_eq!(game.guessed(), "c__");
        assert!(game.letters().iter().all(|button| button.text() != "c"));
    }

    #[test]
    fn test_render_shows_current_stage() {
        let fonts = MonoFonts::new();
        let mut game = round("dog", "Pet");
        game.guess('z', &fonts).unwrap();
        game.guess('y', &fonts).unwrap();

        let mut surface = RecordingSurface::new();
        game.render(&mut surface).unwrap();

        assert_eq!(
            surface.sprites(),
            vec![(SpriteId(0), Rect::new(240, 0, 120, 180), Rect::new(100, 100, 120, 180))]
        );
        assert_eq!(surface.texts().len(), 24 + 2);
    }

    #[test]
    fn test_load_picks_from_selected_topics() {
        let mut context = loaded_context(&[
            ("Computer", &[("cpu", "The brain")]),
            ("English", &[("noun", "A naming word"), ("verb", "A doing word")]),
        ]);
        context.select_topics(["English"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            let game = GameState::load(&context, &MonoFonts::new(), &mut rng).unwrap();
            assert_eq!(game.guessed(), "____");
        }
    }

    #[test]
    fn test_load_without_topics_is_invalid() {
        let mut context = loaded_context(&[("Computer", &[("cpu", "The brain")])]);
        context.current_topics.clear();
        let mut rng = StdRng::seed_from_u64(1);

        let result = GameState::load(&context, &MonoFonts::new(), &mut rng);
        assert!(matches!(result, Err(HangmanError::InvalidState(_))));
    }

    #[test]
    fn test_load_with_missing_list_is_invalid() {
        let mut context = loaded_context(&[("Computer", &[("cpu", "The brain")])]);
        context.current_topics = vec!["Physics".to_string()];
        let mut rng = StdRng::seed_from_u64(1);

        let result = GameState::load(&context, &MonoFonts::new(), &mut rng);
        assert!(matches!(result, Err(HangmanError::InvalidState(_))));
    }
}
