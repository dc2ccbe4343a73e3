use super::{StateRequest, Transition};
use crate::context::GameContext;
use crate::error::GuiError;
use crate::gui::{Button, Label, StyleOverrides, ToggleButton, Widget};
use crate::input_system::InputEvent;
use crate::render::{FontBook, Surface};
use log::warn;
use sdl2::rect::Rect;

// Top-left corners of the topic toggles, in topic order
const TOGGLE_POSITIONS: [(i32, i32); 4] = [(175, 225), (475, 225), (175, 325), (475, 325)];
const TOGGLE_WIDTH: u32 = 150;
const TOGGLE_HEIGHT: u32 = 50;

/// Most topics the screen has toggles for
pub const MAX_TOPICS: usize = TOGGLE_POSITIONS.len();

/// Topic selection: one toggle per topic and a Done button
///
/// Done only takes effect with at least one topic toggled on. Otherwise the
/// click stays latched and is re-checked on every event until the next
/// press clears it.
pub struct TopicsState {
    instructions: Label,
    done: Button,
    toggles: Vec<ToggleButton>,
}

impl TopicsState {
    pub fn load(context: &GameContext, fonts: &dyn FontBook) -> Result<Self, GuiError> {
        let toolkit = context.toolkit(fonts);

        let mut toggles = Vec::with_capacity(TOGGLE_POSITIONS.len());
        for (topic, (x, y)) in context.all_topics.iter().zip(TOGGLE_POSITIONS) {
            let mut toggle = toolkit.toggle_button(
                Rect::new(x, y, TOGGLE_WIDTH, TOGGLE_HEIGHT),
                topic,
                StyleOverrides::new(),
            )?;
            toggle.set_toggled(context.current_topics.contains(topic));
            toggles.push(toggle);
        }

        Ok(TopicsState {
            instructions: toolkit.label(
                Rect::new(150, 80, 500, 50),
                "Select the topics for the words:",
                StyleOverrides::new(),
            )?,
            done: toolkit.button(Rect::new(350, 475, 100, 50), "Done", StyleOverrides::new())?,
            toggles,
        })
    }

    pub fn update(
        &mut self,
        event: &InputEvent,
        context: &mut GameContext,
        fonts: &dyn FontBook,
    ) -> Result<Transition, GuiError> {
        self.done.update(event, fonts)?;
        for toggle in &mut self.toggles {
            toggle.update(event, fonts)?;
        }

        if !self.done.is_clicked() {
            return Ok(Transition::Stay);
        }

        let selected: Vec<&str> = self
            .toggles
            .iter()
            .filter(|toggle| toggle.is_toggled())
            .map(|toggle| toggle.text())
            .collect();

        if selected.is_empty() {
            if matches!(event, InputEvent::PointerUp(_)) {
                warn!("Done ignored: no topic selected");
            }
            return Ok(Transition::Stay);
        }

        context.select_topics(selected);
        self.done.click_handled();

        Ok(Transition::Switch(StateRequest::Home))
    }

    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), GuiError> {
        self.instructions.render(surface)?;
        self.done.render(surface)?;
        for toggle in &self.toggles {
            toggle.render(surface)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn toggles(&self) -> &[ToggleButton] {
        &self.toggles
    }

    #[cfg(test)]
    pub fn is_done_latched(&self) -> bool {
        self.done.is_clicked()
    }
}
