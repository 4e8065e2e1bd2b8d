//=========================================================================
// Core Systems
//
// Subsystems the interaction layer is built from.
//
// Architecture:
// ```text
//   Target Provider(s) ──notify()──> TargetChannel ──callback──┐
//                                                              ↓
//   InputSystem ──is_action_pressed()──> InteractionDispatcher ──> Interactable::interact()
// ```
//
// Notes:
// Everything here runs on a single, externally ticked thread. Channels
// deliver synchronously, and the dispatcher is advanced once per frame by
// its owner.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod interaction;
pub mod notify;
