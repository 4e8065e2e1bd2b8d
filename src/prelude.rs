//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_interaction::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Interaction
pub use crate::core::interaction::{
    interactable, DebugColor, DebugDraw, DispatchOutcome, Interactable, InteractableRef,
    InteractionDispatcher, WeakInteractable,
};

// Notification channels
pub use crate::core::notify::{DetectorChannels, Subscription, TargetChannel, TargetPublisher};

// Input
pub use crate::core::input::{
    Action, ActionSource, DiscreteInput, InputEvent, InputSystem, InteractAction, KeyCode,
    MouseButton,
};

// Configuration
pub use crate::config::{ConfigError, InteractionConfig};

// Math
pub use glam::Vec3;
