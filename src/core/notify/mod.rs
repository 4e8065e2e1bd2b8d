//=========================================================================
// Notification Channels
//=========================================================================
//
// Explicit observer registration between target providers and listeners.
//
// Architecture:
//   DetectorChannels
//     ├─ primary:     TargetChannel ("primary_detector")
//     └─ comparative: TargetChannel ("comparative_detector")
//
// Pattern: subscribe → notify (N providers, M listeners) → drop guard
//
//=========================================================================

//=== Module Declarations =================================================

mod channel;
mod publisher;

//=== Public API ==========================================================

pub use channel::{Subscription, TargetChannel};
pub use publisher::TargetPublisher;

//=== DetectorChannels ====================================================

/// Channel name of the primary interactable detector.
pub const PRIMARY_DETECTOR: &str = "primary_detector";

/// Channel name of the comparative detector, which picks the best of
/// several candidates.
pub const COMPARATIVE_DETECTOR: &str = "comparative_detector";

/// The two standard detector channels.
///
/// Both feed the dispatcher with equal standing; whichever notifies last
/// decides the current target.
#[derive(Debug, Clone)]
pub struct DetectorChannels {
    pub primary: TargetChannel,
    pub comparative: TargetChannel,
}

impl DetectorChannels {
    pub fn new() -> Self {
        Self {
            primary: TargetChannel::new(PRIMARY_DETECTOR),
            comparative: TargetChannel::new(COMPARATIVE_DETECTOR),
        }
    }

    /// Iterates over both channels, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &TargetChannel> {
        [&self.primary, &self.comparative].into_iter()
    }
}

impl Default for DetectorChannels {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
