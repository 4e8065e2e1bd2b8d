//=========================================================================
// Target Publisher
//=========================================================================
//
// Provider-side helper that only notifies when the selected target's
// identity changes.
//
// Detectors usually re-evaluate their best candidate every frame; this
// turns that stream of decisions into change notifications.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use log::trace;

//=== Internal Dependencies ===============================================

use super::TargetChannel;
use crate::core::interaction::{InteractableRef, WeakInteractable};

//=== Published State =====================================================

enum Published {
    Nothing,
    Absent,
    Target(WeakInteractable),
}

//=== TargetPublisher =====================================================

/// Publishes through a [`TargetChannel`], suppressing repeats.
///
/// The first call always notifies, so late subscribers are not left
/// without an initial value when the provider starts.
pub struct TargetPublisher {
    channel: TargetChannel,
    last: Published,
}

impl TargetPublisher {
    pub fn new(channel: TargetChannel) -> Self {
        Self {
            channel,
            last: Published::Nothing,
        }
    }

    pub fn channel(&self) -> &TargetChannel {
        &self.channel
    }

    /// Publishes `candidate` if it differs from the previous publication.
    /// Returns `true` if a notification was sent.
    pub fn publish(&mut self, candidate: Option<&InteractableRef>) -> bool {
        let unchanged = match (&self.last, candidate) {
            (Published::Absent, None) => true,
            (Published::Target(previous), Some(current)) => previous
                .upgrade()
                .is_some_and(|previous| Rc::ptr_eq(&previous, current)),
            _ => false,
        };

        if unchanged {
            return false;
        }

        self.last = match candidate {
            Some(target) => Published::Target(Rc::downgrade(target)),
            None => Published::Absent,
        };

        trace!("Publishing target change on '{}'", self.channel.name());
        self.channel.notify(candidate);
        true
    }

    /// Forgets the last publication; the next `publish` always notifies.
    pub fn reset(&mut self) {
        self.last = Published::Nothing;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
