//=========================================================================
// Target Channel
//=========================================================================
//
// Named, synchronous "target changed" notification stream.
//
// Architecture:
//   Provider → notify(target) → snapshot of subscribers → callback(target)
//                                        ↑
//   Subscriber ── subscribe() ──> Subscription (unsubscribes on drop)
//
// Delivery happens on the caller's thread, in subscription order. No
// borrow of the subscriber table is held while a callback runs, so
// callbacks may subscribe, unsubscribe or notify again.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::interaction::InteractableRef;

//=== Subscriber Table ====================================================

type Callback = Rc<dyn Fn(Option<&InteractableRef>)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Subscribers {
    fn insert(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }
}

//=== TargetChannel =======================================================

/// A named stream of "best interaction target changed" notifications.
///
/// Cloning yields another handle to the same channel.
///
/// ```
/// use aetheric_interaction::prelude::*;
///
/// let channel = TargetChannel::new("primary_detector");
/// let subscription = channel.subscribe(|target| {
///     println!("target present: {}", target.is_some());
/// });
///
/// assert_eq!(channel.notify(None), 1);
/// drop(subscription);
/// assert_eq!(channel.subscriber_count(), 0);
/// ```
#[derive(Clone)]
pub struct TargetChannel {
    name: Rc<str>,
    subscribers: Rc<RefCell<Subscribers>>,
}

impl TargetChannel {
    /// Creates a channel with no subscribers.
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Self {
            name: name.into(),
            subscribers: Rc::new(RefCell::new(Subscribers::default())),
        }
    }

    /// Name of the channel, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    //--- Subscription -----------------------------------------------------

    /// Registers `callback` and returns the guard that keeps it registered.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&InteractableRef>) + 'static,
    {
        let id = self.subscribers.borrow_mut().insert(Rc::new(callback));
        debug!("Subscriber #{} registered on '{}'", id, self.name);

        Subscription {
            id,
            channel: Rc::clone(&self.name),
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().entries.len()
    }

    /// Returns `true` if both handles refer to the same channel.
    pub fn same_channel(&self, other: &TargetChannel) -> bool {
        Rc::ptr_eq(&self.subscribers, &other.subscribers)
    }

    //--- Delivery ---------------------------------------------------------

    /// Delivers `target` to every subscriber and returns how many were
    /// reached. A subscriber removed during delivery is skipped.
    pub fn notify(&self, target: Option<&InteractableRef>) -> usize {
        let snapshot: Vec<(u64, Callback)> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        trace!(
            "'{}' notifying {} subscriber(s), target present: {}",
            self.name,
            snapshot.len(),
            target.is_some()
        );

        let mut delivered = 0;
        for (id, callback) in snapshot {
            if !self.subscribers.borrow().contains(id) {
                continue;
            }
            callback(target);
            delivered += 1;
        }
        delivered
    }
}

impl fmt::Debug for TargetChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetChannel")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

//=== Subscription ========================================================

/// Guard for a registered callback. Dropping it unsubscribes.
///
/// The guard does not keep the channel alive; if the channel is gone first,
/// dropping the guard does nothing.
pub struct Subscription {
    id: u64,
    channel: Rc<str>,
    subscribers: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    /// Name of the channel this subscription belongs to.
    pub fn channel_name(&self) -> &str {
        &self.channel
    }

    /// Returns `true` while the callback is still registered.
    pub fn is_active(&self) -> bool {
        self.subscribers
            .upgrade()
            .is_some_and(|subscribers| subscribers.borrow().contains(self.id))
    }

    /// Unsubscribes now. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return;
        };
        // A guard dropped from inside a callback of the same channel still
        // finds the table unborrowed, since delivery works on a snapshot.
        if subscribers.borrow_mut().remove(self.id) {
            debug!("Subscriber #{} removed from '{}'", self.id, self.channel);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("channel", &self.channel)
            .field("active", &self.is_active())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use glam::Vec3;

    use crate::test_support::Probe;

    //--- Test Helpers -----------------------------------------------------

    fn counter() -> (Rc<Cell<usize>>, impl Fn(Option<&InteractableRef>) + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move |_: Option<&InteractableRef>| inner.set(inner.get() + 1))
    }

    //=====================================================================
    // Subscription lifecycle
    //=====================================================================

    #[test]
    fn new_channel_has_no_subscribers() {
        let channel = TargetChannel::new("primary_detector");
        assert_eq!(channel.name(), "primary_detector");
        assert_eq!(channel.subscriber_count(), 0);
        assert_eq!(channel.notify(None), 0);
    }

    #[test]
    fn subscribe_and_notify() {
        let channel = TargetChannel::new("c");
        let (count, callback) = counter();
        let _sub = channel.subscribe(callback);

        assert_eq!(channel.notify(None), 1);
        assert_eq!(channel.notify(None), 1);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let channel = TargetChannel::new("c");
        let (count, callback) = counter();
        let sub = channel.subscribe(callback);
        assert!(sub.is_active());

        drop(sub);
        assert_eq!(channel.subscriber_count(), 0);
        assert_eq!(channel.notify(None), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn explicit_unsubscribe() {
        let channel = TargetChannel::new("c");
        let (_count, callback) = counter();
        let sub = channel.subscribe(callback);
        assert_eq!(sub.channel_name(), "c");

        sub.unsubscribe();
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_channel_is_harmless() {
        let channel = TargetChannel::new("c");
        let (_count, callback) = counter();
        let sub = channel.subscribe(callback);

        drop(channel);
        assert!(!sub.is_active());
        drop(sub);
    }

    #[test]
    fn clones_share_subscribers() {
        let channel = TargetChannel::new("c");
        let other = channel.clone();
        let (count, callback) = counter();
        let _sub = channel.subscribe(callback);

        assert!(channel.same_channel(&other));
        assert_eq!(other.notify(None), 1);
        assert_eq!(count.get(), 1);

        assert!(!channel.same_channel(&TargetChannel::new("c")));
    }

    //=====================================================================
    // Delivery
    //=====================================================================

    #[test]
    fn payload_is_delivered() {
        let channel = TargetChannel::new("c");
        let seen = Rc::new(Cell::new(Vec3::ZERO));
        let sink = Rc::clone(&seen);
        let _sub = channel.subscribe(move |target| {
            if let Some(target) = target {
                sink.set(target.borrow().position());
            }
        });

        let (probe, _calls) = Probe::at(Vec3::new(1.0, 2.0, 3.0));
        channel.notify(Some(&probe));
        assert_eq!(seen.get(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn subscriber_removed_mid_delivery_is_skipped() {
        let channel = TargetChannel::new("c");
        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot = Rc::clone(&victim);
        let _killer = channel.subscribe(move |_| {
            slot.borrow_mut().take();
        });

        let (count, callback) = counter();
        *victim.borrow_mut() = Some(channel.subscribe(callback));

        assert_eq!(channel.notify(None), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(channel.subscriber_count(), 1);
    }

    #[test]
    fn callback_may_notify_reentrantly() {
        let channel = TargetChannel::new("c");
        let depth = Rc::new(Cell::new(0));

        let inner_channel = channel.clone();
        let inner_depth = Rc::clone(&depth);
        let _sub = channel.subscribe(move |_| {
            inner_depth.set(inner_depth.get() + 1);
            if inner_depth.get() == 1 {
                inner_channel.notify(None);
            }
        });

        channel.notify(None);
        assert_eq!(depth.get(), 2);
    }
}
