//=========================================================================
// Aetheric Interaction: Library Root
//
// This crate routes the player's "Interact" input to whichever object the
// target providers currently report as the best interaction candidate.
//
// Responsibilities:
// - Expose the `Interactable` capability implemented by game objects
// - Expose named target channels that providers publish through
// - Expose the `InteractionDispatcher` that bridges channel notifications
//   to per-frame, edge-triggered input polling
//
// Typical usage:
// ```
// use aetheric_interaction::prelude::*;
//
// let channels = DetectorChannels::new();
// let mut dispatcher = InteractionDispatcher::new(InteractAction::Interact)
//     .listen_to_detectors(&channels);
// dispatcher.activate();
//
// // Each frame
// let outcome = dispatcher.on_frame_update(&|_: InteractAction| false);
// assert_eq!(outcome, DispatchOutcome::Idle);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the interaction, notification and input subsystems.
// `config` holds the TOML-backed configuration layer.
//
pub mod config;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

#[cfg(test)]
pub(crate) mod test_support;

//--- Public Exports ------------------------------------------------------

pub use crate::config::{ConfigError, InteractionConfig};
pub use crate::core::interaction::{DispatchOutcome, Interactable, InteractionDispatcher};
