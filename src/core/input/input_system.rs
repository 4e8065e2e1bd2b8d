//=========================================================================
// Input System
//=========================================================================
//
// Maps discrete inputs to game actions with per-frame edge detection.
//
// Architecture:
//   InputEvent[] → StateTracker → bindings (DiscreteInput → A) → actions
//
// An action is "pressed" on the frame one of its bound inputs goes down,
// unless another binding held it down without interruption since the
// previous frame. Releasing and re-pressing within one frame is a press.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{DiscreteInput, InputEvent},
    state_tracker::StateTracker,
    ActionSource,
};
use crate::config::InteractionConfig;

//=== InputSystem =========================================================

/// Action-level input state for one frame.
///
/// Feed it the frame's events with [`process_frame`](Self::process_frame),
/// then query [`is_action_pressed`](ActionSource::is_action_pressed).
///
/// ```
/// use aetheric_interaction::prelude::*;
///
/// let mut input = InputSystem::new();
/// input.bind(KeyCode::KeyE, InteractAction::Interact);
///
/// input.process_frame(&[InputEvent::KeyDown(KeyCode::KeyE)]);
/// assert!(input.is_action_pressed(InteractAction::Interact));
///
/// input.process_frame(&[]); // still held
/// assert!(!input.is_action_pressed(InteractAction::Interact));
/// assert!(input.is_action_down(InteractAction::Interact));
/// ```
#[derive(Debug)]
pub struct InputSystem<A: Action> {
    tracker: StateTracker,
    bindings: HashMap<DiscreteInput, A>,
    actions_pressed: HashSet<A>,
    actions_down: HashSet<A>,
}

impl<A: Action> InputSystem<A> {
    /// Creates an input system with no bindings.
    pub fn new() -> Self {
        Self {
            tracker: StateTracker::new(),
            bindings: HashMap::new(),
            actions_pressed: HashSet::new(),
            actions_down: HashSet::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds an input to an action. An input maps to at most one action;
    /// several inputs may map to the same action.
    pub fn bind(&mut self, input: impl Into<DiscreteInput>, action: A) {
        let input = input.into();
        if let Some(previous) = self.bindings.insert(input, action) {
            if previous != action {
                warn!("{} was bound to {:?} and is now bound to {:?}", input, previous, action);
            }
        }
    }

    /// Binds every input listed in the configuration to `action`.
    pub fn bind_from_config(&mut self, config: &InteractionConfig, action: A) {
        for input in &config.bindings {
            self.bind(*input, action);
        }
        debug!("Bound {} input(s) to {:?}", config.bindings.len(), action);
    }

    /// Removes the binding for an input, returning the action it mapped to.
    pub fn unbind(&mut self, input: impl Into<DiscreteInput>) -> Option<A> {
        self.bindings.remove(&input.into())
    }

    /// Removes every binding.
    pub fn clear_bindings(&mut self) {
        self.bindings.clear();
    }

    /// Returns the inputs currently bound to `action`.
    pub fn bindings_for(&self, action: A) -> Vec<DiscreteInput> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(input, _)| *input)
            .collect()
    }

    //--- Frame Processing -------------------------------------------------

    /// Advances one frame: applies the frame's events and recomputes action
    /// state.
    pub fn process_frame(&mut self, events: &[InputEvent]) {
        let held_before: HashSet<DiscreteInput> = self
            .bindings
            .keys()
            .copied()
            .filter(|input| self.tracker.is_down(*input))
            .collect();

        self.tracker.clear();
        self.tracker.process_events(events);

        self.actions_down.clear();
        self.actions_pressed.clear();

        // Actions kept down across the frame boundary by a binding that
        // never went up during this frame.
        let mut held_through = HashSet::new();
        for (input, action) in &self.bindings {
            if self.tracker.is_down(*input) {
                self.actions_down.insert(*action);
            }
            if held_before.contains(input) && !self.tracker.is_released(*input) {
                held_through.insert(*action);
            }
        }

        for (input, action) in &self.bindings {
            if self.tracker.is_pressed(*input) && !held_through.contains(action) {
                self.actions_pressed.insert(*action);
            }
        }

        if !self.actions_pressed.is_empty() {
            trace!("Actions pressed this frame: {:?}", self.actions_pressed);
        }
    }

    //--- Query API --------------------------------------------------------

    /// Returns `true` while any input bound to `action` is held.
    pub fn is_action_down(&self, action: A) -> bool {
        self.actions_down.contains(&action)
    }

    /// Raw access to the discrete input state.
    pub fn state(&self) -> &StateTracker {
        &self.tracker
    }
}

impl<A: Action> Default for InputSystem<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ActionSource<A> for InputSystem<A> {
    fn is_action_pressed(&self, action: A) -> bool {
        self.actions_pressed.contains(&action)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
