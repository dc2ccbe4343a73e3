// Game screens
//
// This module contains:
// - load.rs: asset loading, the first state
// - home.rs: main menu
// - topics.rs: topic selection
// - play.rs: a round of hangman
// - game_over.rs: round result
//
// A state never touches the machine. It requests a change by returning a
// `Transition` from `update` (or from its load hook), and the machine builds
// the next state from the `StateRequest`.

pub mod game_over;
pub mod home;
pub mod load;
pub mod play;
pub mod topics;

pub use game_over::GameOverState;
pub use home::HomeState;
pub use load::{AssetLoader, LoadState};
pub use play::GameState;
pub use topics::TopicsState;

use crate::context::GameContext;
use crate::error::{GuiError, HangmanError};
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};

/// The state to build next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateRequest {
    Home,
    Topics,
    Game,
    GameOver { word: String, won: bool },
}

/// What a state wants after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(StateRequest),
}

/// The active screen
pub enum State {
    Load(LoadState),
    Home(HomeState),
    Topics(TopicsState),
    Game(GameState),
    GameOver(GameOverState),
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Load(_) => "Load",
            State::Home(_) => "Home",
            State::Topics(_) => "Topics",
            State::Game(_) => "Game",
            State::GameOver(_) => "GameOver",
        }
    }

    pub fn update(
        &mut self,
        event: &InputEvent,
        context: &mut GameContext,
        fonts: &dyn FontBook,
    ) -> Result<Transition, HangmanError> {
        let transition = match self {
            State::Load(_) => Transition::Stay,
            State::Home(home) => home.update(event, fonts)?,
            State::Topics(topics) => topics.update(event, context, fonts)?,
            State::Game(game) => game.update(event, fonts)?,
            State::GameOver(game_over) => game_over.update(event, fonts)?,
        };

        Ok(transition)
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        match self {
            State::Load(_) => Ok(()),
            State::Home(home) => home.render(surface),
            State::Topics(topics) => topics.render(surface),
            State::Game(game) => game.render(surface),
            State::GameOver(game_over) => game_over.render(surface),
        }
    }
}

impl StateRequest {
    pub fn name(&self) -> &'static str {
        match self {
            StateRequest::Home => "Home",
            StateRequest::Topics => "Topics",
            StateRequest::Game => "Game",
            StateRequest::GameOver { .. } => "GameOver",
        }
    }
}
