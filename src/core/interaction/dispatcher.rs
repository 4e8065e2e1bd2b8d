//=========================================================================
// Interaction Dispatcher
//=========================================================================
//
// Bridges "target changed" notifications to per-frame "Interact" polling.
//
// Architecture:
// ```text
//   TargetChannel(s) ──callback──> TargetSlot (last write wins)
//                                      │
//   on_frame_update(input) ── pressed? ┴─> target.interact()
//                                       └─> info!("No Interactable Detected")
// ```
//
// Lifecycle: new() → listen_to()… → activate() → on_frame_update()… →
// deactivate(). Subscriptions are guards owned by the dispatcher, so they
// are released on every exit path, including drop during unwinding.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use glam::Vec3;
use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{DebugColor, DebugDraw, InteractableRef, WeakInteractable};
use crate::config::InteractionConfig;
use crate::core::input::{Action, ActionSource};
use crate::core::notify::{DetectorChannels, Subscription, TargetChannel};

//=== DispatchOutcome =====================================================

/// What a single [`InteractionDispatcher::on_frame_update`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// The dispatcher is deactivated; input was not polled.
    Inactive,

    /// The interact action was not pressed this frame.
    Idle,

    /// `interact()` was invoked on the current target.
    Interacted,

    /// The action was pressed with no current target.
    NoTarget,

    /// The current target was already mutably borrowed (re-entrant
    /// dispatch); nothing was invoked.
    TargetBusy,
}

//=== TargetSlot ==========================================================

/// The single cached target reference shared with subscription callbacks.
type TargetSlot = RefCell<Option<WeakInteractable>>;

fn store_target(slot: &TargetSlot, target: Option<&InteractableRef>) {
    *slot.borrow_mut() = target.map(Rc::downgrade);
}

fn subscribe_slot(channel: &TargetChannel, slot: &Rc<TargetSlot>) -> Subscription {
    let slot: Weak<TargetSlot> = Rc::downgrade(slot);
    channel.subscribe(move |target| {
        if let Some(slot) = slot.upgrade() {
            store_target(&slot, target);
        }
    })
}

//=== InteractionDispatcher ===============================================

/// Forwards the interact action to the currently targeted interactable.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use aetheric_interaction::prelude::*;
///
/// struct Lamp { lit: Rc<Cell<bool>> }
///
/// impl Interactable for Lamp {
///     fn interact(&mut self) { self.lit.set(!self.lit.get()); }
///     fn position(&self) -> Vec3 { Vec3::new(0.0, 1.0, 4.0) }
/// }
///
/// let channels = DetectorChannels::new();
/// let mut dispatcher = InteractionDispatcher::new(InteractAction::Interact)
///     .listen_to_detectors(&channels);
/// dispatcher.activate();
///
/// let lit = Rc::new(Cell::new(false));
/// let lamp = interactable(Lamp { lit: Rc::clone(&lit) });
/// channels.primary.notify(Some(&lamp));
///
/// let pressed = |_: InteractAction| true;
/// assert_eq!(dispatcher.on_frame_update(&pressed), DispatchOutcome::Interacted);
/// assert!(lit.get());
/// ```
pub struct InteractionDispatcher<A: Action> {
    interact_action: A,
    sources: Vec<TargetChannel>,
    slot: Rc<TargetSlot>,
    subscriptions: Vec<Subscription>,
    active: bool,
    origin: Vec3,
    log_missing_target: bool,

    //--- Debug Overlay (debug builds only) -------------------------------
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    debug_rays: bool,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    ray_color: DebugColor,
    #[cfg_attr(not(debug_assertions), allow(dead_code))]
    debug_draw: Option<Box<dyn DebugDraw>>,
}

impl<A: Action> InteractionDispatcher<A> {
    //--- Construction -----------------------------------------------------

    /// Creates an inactive dispatcher polling `interact_action`, with no
    /// sources and default diagnostics.
    pub fn new(interact_action: A) -> Self {
        Self::from_config(interact_action, &InteractionConfig::default())
    }

    /// Creates an inactive dispatcher with diagnostics taken from `config`.
    pub fn from_config(interact_action: A, config: &InteractionConfig) -> Self {
        Self {
            interact_action,
            sources: Vec::new(),
            slot: Rc::new(RefCell::new(None)),
            subscriptions: Vec::new(),
            active: false,
            origin: Vec3::ZERO,
            log_missing_target: config.log_missing_target,
            debug_rays: config.debug_rays,
            ray_color: config.ray_color,
            debug_draw: None,
        }
    }

    /// Adds a target source (builder form of [`add_source`](Self::add_source)).
    pub fn listen_to(mut self, channel: &TargetChannel) -> Self {
        self.add_source(channel);
        self
    }

    /// Adds both standard detector channels.
    pub fn listen_to_detectors(mut self, channels: &DetectorChannels) -> Self {
        for channel in channels.iter() {
            self.add_source(channel);
        }
        self
    }

    /// Sets the dispatcher's world position (builder form).
    ///
    /// # Panics
    ///
    /// Panics if any component of `origin` is not finite.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.set_origin(origin);
        self
    }

    /// Attaches a sink for the debug ray.
    pub fn with_debug_draw(mut self, draw: impl DebugDraw + 'static) -> Self {
        self.debug_draw = Some(Box::new(draw));
        self
    }

    //--- Sources ----------------------------------------------------------

    /// Adds a target source. When the dispatcher is already active the new
    /// source is subscribed immediately. Adding the same channel twice is
    /// ignored.
    pub fn add_source(&mut self, channel: &TargetChannel) {
        if self.sources.iter().any(|source| source.same_channel(channel)) {
            warn!("Dispatcher already listens to '{}'", channel.name());
            return;
        }

        if self.active {
            self.subscriptions.push(subscribe_slot(channel, &self.slot));
        }
        self.sources.push(channel.clone());
    }

    /// Channels this dispatcher listens to while active.
    pub fn sources(&self) -> &[TargetChannel] {
        &self.sources
    }

    //--- Lifecycle --------------------------------------------------------

    /// Subscribes to every source and resets the cached target to absent.
    ///
    /// Calling this while already active does nothing.
    pub fn activate(&mut self) {
        if self.active {
            warn!("Interaction dispatcher is already active");
            return;
        }

        if self.sources.is_empty() {
            warn!("Interaction dispatcher activated without target sources");
        }

        store_target(&self.slot, None);
        self.subscriptions = self
            .sources
            .iter()
            .map(|channel| subscribe_slot(channel, &self.slot))
            .collect();
        self.active = true;

        debug!(
            "Interaction dispatcher activated for {:?} ({} source(s))",
            self.interact_action,
            self.subscriptions.len()
        );
    }

    /// Releases every subscription. Calling this while inactive does nothing.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.subscriptions.clear();
        self.active = false;
        debug!("Interaction dispatcher deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    //--- Target -----------------------------------------------------------

    /// Overwrites the cached target. This is what every source delivers
    /// into; no comparison with the previous value is made.
    pub fn on_target_changed(&self, target: Option<&InteractableRef>) {
        store_target(&self.slot, target);
    }

    /// Returns the cached target if it is present and still alive.
    pub fn current_target(&self) -> Option<InteractableRef> {
        self.slot.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub fn has_target(&self) -> bool {
        self.current_target().is_some()
    }

    //--- Frame Update -----------------------------------------------------

    /// Runs one frame: polls the interact action and dispatches.
    ///
    /// In debug builds, also draws a ray from the origin to the current
    /// target when a [`DebugDraw`] sink is attached.
    pub fn on_frame_update<I>(&mut self, input: &I) -> DispatchOutcome
    where
        I: ActionSource<A> + ?Sized,
    {
        if !self.active {
            return DispatchOutcome::Inactive;
        }

        let outcome = if input.is_action_pressed(self.interact_action) {
            self.dispatch()
        } else {
            DispatchOutcome::Idle
        };

        #[cfg(debug_assertions)]
        self.draw_debug_ray();

        outcome
    }

    fn dispatch(&self) -> DispatchOutcome {
        // The slot borrow ends here, so interact() may trigger notifications.
        let Some(target) = self.current_target() else {
            if self.log_missing_target {
                info!("No Interactable Detected");
            }
            return DispatchOutcome::NoTarget;
        };

        let Ok(mut target) = target.try_borrow_mut() else {
            warn!("Interaction target is already borrowed; skipping interact()");
            return DispatchOutcome::TargetBusy;
        };

        trace!("Interacting with {}", target.name());
        target.interact();
        DispatchOutcome::Interacted
    }

    #[cfg(debug_assertions)]
    fn draw_debug_ray(&mut self) {
        if !self.debug_rays {
            return;
        }

        let Some(target) = self.current_target() else {
            return;
        };
        let Ok(target_position) = target.try_borrow().map(|target| target.position()) else {
            return;
        };

        if let Some(draw) = self.debug_draw.as_mut() {
            draw.draw_ray(self.origin, target_position - self.origin, self.ray_color);
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn interact_action(&self) -> A {
        self.interact_action
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Updates the dispatcher's world position (e.g. the camera).
    ///
    /// # Panics
    ///
    /// Panics if any component of `origin` is not finite.
    pub fn set_origin(&mut self, origin: Vec3) {
        assert!(origin.is_finite(), "Dispatcher origin must be finite, got {}", origin);
        self.origin = origin;
    }

    /// Replaces (or removes) the debug ray sink.
    pub fn set_debug_draw(&mut self, draw: Option<Box<dyn DebugDraw>>) {
        self.debug_draw = draw;
    }
}

impl<A: Action> fmt::Debug for InteractionDispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources: Vec<_> = self.sources.iter().map(TargetChannel::name).collect();

        f.debug_struct("InteractionDispatcher")
            .field("interact_action", &self.interact_action)
            .field("active", &self.active)
            .field("sources", &sources)
            .field("has_target", &self.has_target())
            .field("origin", &self.origin)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
