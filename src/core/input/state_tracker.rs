//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level discrete input state with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (inputs held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{DiscreteInput, InputEvent};

//=== StateTracker ========================================================

/// Tracks persistent state (inputs held) and per-frame deltas
/// (inputs pressed/released this frame).
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    down: HashSet<DiscreteInput>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    pressed_this_frame: HashSet<DiscreteInput>,
    released_this_frame: HashSet<DiscreteInput>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub(super) fn clear(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }

    /// Processes input events, updating internal state.
    pub(super) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            let Some((input, went_down)) = event.transition() else {
                continue;
            };

            if went_down {
                // Only mark as pressed if it wasn't already down
                if self.down.insert(input) {
                    self.pressed_this_frame.insert(input);
                }
            } else if self.down.remove(&input) {
                self.released_this_frame.insert(input);
            }
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if the input transitioned UP → DOWN this frame.
    pub fn is_pressed(&self, input: DiscreteInput) -> bool {
        self.pressed_this_frame.contains(&input)
    }

    /// Returns `true` while the input is held.
    pub fn is_down(&self, input: DiscreteInput) -> bool {
        self.down.contains(&input)
    }

    /// Returns `true` if the input transitioned DOWN → UP this frame.
    pub fn is_released(&self, input: DiscreteInput) -> bool {
        self.released_this_frame.contains(&input)
    }

    /// Returns an iterator over all inputs pressed this frame.
    pub fn pressed(&self) -> impl Iterator<Item = &DiscreteInput> {
        self.pressed_this_frame.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, MouseButton};

    //--- Test Helpers -----------------------------------------------------

    const E: DiscreteInput = DiscreteInput::Key(KeyCode::KeyE);
    const LEFT: DiscreteInput = DiscreteInput::Button(MouseButton::Left);

    fn frame(tracker: &mut StateTracker, events: &[InputEvent]) {
        tracker.clear();
        tracker.process_events(events);
    }

    //=====================================================================
    // Transitions
    //=====================================================================

    #[test]
    fn pressed_only_on_transition_frame() {
        let mut tracker = StateTracker::new();

        // Frame 1: Key down
        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyE)]);
        assert!(tracker.is_pressed(E));
        assert!(tracker.is_down(E));

        // Frame 2: Still held
        frame(&mut tracker, &[]);
        assert!(!tracker.is_pressed(E));
        assert!(tracker.is_down(E));

        // Frame 3: Released
        frame(&mut tracker, &[InputEvent::KeyUp(KeyCode::KeyE)]);
        assert!(!tracker.is_pressed(E));
        assert!(!tracker.is_down(E));
        assert!(tracker.is_released(E));
    }

    #[test]
    fn fast_tap_both_transitions_captured() {
        let mut tracker = StateTracker::new();

        frame(
            &mut tracker,
            &[InputEvent::KeyDown(KeyCode::KeyE), InputEvent::KeyUp(KeyCode::KeyE)],
        );

        assert!(tracker.is_pressed(E), "Should register press");
        assert!(tracker.is_released(E), "Should register release");
        assert!(!tracker.is_down(E), "Should end up not down");
    }

    #[test]
    fn repeated_key_down_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyE)]);
        assert!(tracker.is_pressed(E));

        // OS key repeat delivers KeyDown again while held
        frame(&mut tracker, &[InputEvent::KeyDown(KeyCode::KeyE)]);
        assert!(!tracker.is_pressed(E), "Repeat should not trigger");
        assert!(tracker.is_down(E));
    }

    #[test]
    fn release_without_press_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseButtonUp(MouseButton::Left)]);
        assert!(!tracker.is_released(LEFT));
    }

    #[test]
    fn mouse_buttons_tracked_like_keys() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::MouseButtonDown(MouseButton::Left)]);
        assert!(tracker.is_pressed(LEFT));
        assert!(!tracker.is_pressed(E));

        let pressed: Vec<_> = tracker.pressed().copied().collect();
        assert_eq!(pressed, vec![LEFT]);
    }

    #[test]
    fn unidentified_events_ignored() {
        let mut tracker = StateTracker::new();

        frame(&mut tracker, &[InputEvent::Unidentified]);
        assert_eq!(tracker.pressed().count(), 0);
    }
}
