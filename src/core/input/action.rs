//=========================================================================
// Action Trait & Interact Action
//=========================================================================
//
// Game-defined action trait and the built-in logical "Interact" action.
//
// Actions: Opaque identifiers routed by the input system, interpreted by
// the game. The dispatcher only ever asks about one of them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for game-defined action enums.
///
/// Actions represent high-level commands (Interact, Jump, OpenMenu)
/// mapped from raw inputs.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `'static`: Stored in long-lived bindings tables
///
/// # Example
///
/// ```
/// use aetheric_interaction::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum GameAction { Interact, Jump }
///
/// impl Action for GameAction {}
///
/// let dispatcher = InteractionDispatcher::new(GameAction::Interact);
/// assert_eq!(dispatcher.interact_action(), GameAction::Interact);
/// ```
pub trait Action: 'static + Copy + Eq + Hash + Debug {}

//=== InteractAction ======================================================

/// The built-in logical action polled by the dispatcher.
///
/// Games with their own action enum can use that instead; this type exists
/// so the common case needs no extra definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractAction {
    /// The player asked to interact with the current target.
    #[default]
    Interact,
}

impl Action for InteractAction {}

impl InteractAction {
    /// Logical name of the action, as seen in logs and configuration.
    pub const NAME: &'static str = "Interact";
}

impl Display for InteractAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
