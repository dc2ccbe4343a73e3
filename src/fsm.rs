//! Screen sequencing
//!
//! The machine owns the shared [`GameContext`] and exactly one active
//! [`State`]. Switching builds the requested state from scratch (its load
//! hook) and drops the old one; there is no stack and no history.

use crate::config::AssetConfig;
use crate::context::GameContext;
use crate::error::{GuiError, HangmanError};
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};
use crate::states::{
    AssetLoader, GameOverState, GameState, HomeState, LoadState, State, StateRequest, TopicsState, Transition,
};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct StateMachine {
    context: GameContext,
    current: State,
    rng: StdRng,
}

impl StateMachine {
    /// New machine in the load state, with an entropy-seeded word picker
    pub fn new(context: GameContext, assets: AssetConfig) -> Self {
        Self::with_rng(context, assets, StdRng::from_entropy())
    }

    pub fn with_rng(context: GameContext, assets: AssetConfig, rng: StdRng) -> Self {
        StateMachine {
            context,
            current: State::Load(LoadState::new(assets)),
            rng,
        }
    }

    /// Run the load state and follow it to the menu
    pub fn start<L: AssetLoader>(&mut self, loader: &mut L) -> Result<(), HangmanError> {
        let transition = match &self.current {
            State::Load(load) => load.load(&mut self.context, loader)?,
            other => {
                return Err(HangmanError::InvalidState(format!(
                    "start called in the {} state",
                    other.name()
                )));
            }
        };

        if let Transition::Switch(request) = transition {
            self.switch(request, &*loader)?;
        }
        Ok(())
    }

    /// Replace the active state with a freshly loaded one
    pub fn switch(&mut self, request: StateRequest, fonts: &dyn FontBook) -> Result<(), HangmanError> {
        debug!("Switching state: {} -> {}", self.current.name(), request.name());

        self.current = match request {
            StateRequest::Home => State::Home(HomeState::load(&self.context, fonts)?),
            StateRequest::Topics => State::Topics(TopicsState::load(&self.context, fonts)?),
            StateRequest::Game => State::Game(GameState::load(&self.context, fonts, &mut self.rng)?),
            StateRequest::GameOver { word, won } => {
                State::GameOver(GameOverState::load(&self.context, fonts, &word, won)?)
            }
        };

        Ok(())
    }

    /// Feed one event to the active state and perform any switch it asks for
    pub fn update(&mut self, event: &InputEvent, fonts: &dyn FontBook) -> Result<(), HangmanError> {
        let transition = self.current.update(event, &mut self.context, fonts)?;

        if let Transition::Switch(request) = transition {
            self.switch(request, fonts)?;
        }
        Ok(())
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.current.render(surface)
    }

    #[cfg(test)]
    pub fn current(&self) -> &State {
        &self.current
    }

    #[cfg(test)]
    pub fn context(&self) -> &GameContext {
        &self.context
    }
}
