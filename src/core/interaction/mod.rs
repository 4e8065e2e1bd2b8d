//=========================================================================
// Interaction
//=========================================================================
//
// The interactable capability and the dispatcher that drives it.
//
// Ownership:
//   Entity ──owns──> InteractableRef (Rc<RefCell<dyn Interactable>>)
//   Dispatcher ──observes──> WeakInteractable
//
// The dispatcher never keeps a target alive; a target dropped by its owner
// simply reads as "no target".
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec3;

//=== Module Declarations =================================================

mod debug_draw;
mod dispatcher;

//=== Public API ==========================================================

pub use debug_draw::{DebugColor, DebugDraw};
pub use dispatcher::{DispatchOutcome, InteractionDispatcher};

//=== Interactable ========================================================

/// Capability of a game object that the player can interact with.
///
/// # Example
///
/// ```
/// use aetheric_interaction::prelude::*;
///
/// struct Door { open: bool, at: Vec3 }
///
/// impl Interactable for Door {
///     fn interact(&mut self) {
///         self.open = !self.open;
///     }
///
///     fn position(&self) -> Vec3 {
///         self.at
///     }
/// }
///
/// let door = interactable(Door { open: false, at: Vec3::ZERO });
/// door.borrow_mut().interact();
/// ```
pub trait Interactable {
    /// Performs the object's interaction. What that means is entirely up to
    /// the implementor.
    fn interact(&mut self);

    /// World-space position of the object.
    fn position(&self) -> Vec3;

    /// Human-readable name used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Owning handle to an interactable, held by the entity that owns it.
pub type InteractableRef = Rc<RefCell<dyn Interactable>>;

/// Non-owning handle to an interactable.
pub type WeakInteractable = Weak<RefCell<dyn Interactable>>;

/// Wraps a value into an [`InteractableRef`].
pub fn interactable<T: Interactable + 'static>(value: T) -> InteractableRef {
    Rc::new(RefCell::new(value))
}

//=========================================================================
// Unit Tests
//=========================================================================
