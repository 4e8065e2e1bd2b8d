//=========================================================================
// Input
//=========================================================================
//
// Logical action layer the dispatcher polls.
//
// Architecture:
//   InputEvent → StateTracker → InputSystem<A> ──ActionSource<A>──> consumers
//
// Consumers depend only on `ActionSource`, so any host input layer can be
// plugged in without going through `InputSystem`.
//
//=========================================================================

//=== Module Declarations =================================================

mod action;
mod event;
mod input_system;
mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, InteractAction};
pub use event::{DiscreteInput, InputEvent, KeyCode, MouseButton};
pub use input_system::InputSystem;
pub use state_tracker::StateTracker;

//=== ActionSource ========================================================

/// Edge-triggered action poll.
///
/// `is_action_pressed` must return `true` only on the tick the action goes
/// from inactive to active (button-down semantics, not "held").
///
/// Closures implement it too, which keeps hosts and tests lightweight:
///
/// ```
/// use aetheric_interaction::prelude::*;
///
/// let always = |_: InteractAction| true;
/// assert!(always.is_action_pressed(InteractAction::Interact));
/// ```
pub trait ActionSource<A: Action> {
    /// Returns `true` if `action` went down this tick.
    fn is_action_pressed(&self, action: A) -> bool;
}

impl<A, F> ActionSource<A> for F
where
    A: Action,
    F: Fn(A) -> bool,
{
    fn is_action_pressed(&self, action: A) -> bool {
        self(action)
    }
}
