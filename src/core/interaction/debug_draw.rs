//=========================================================================
// Debug Draw
//=========================================================================
//
// Observability hook for visual debugging overlays.
//
// The dispatcher emits one ray per frame from its origin to the current
// target, in debug builds only. Rendering is the host's job.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== DebugColor ==========================================================

/// Linear RGBA colour, each component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DebugColor {
    pub const GREEN: Self = Self::rgba(0.0, 1.0, 0.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `true` if every component lies in `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for DebugColor {
    fn default() -> Self {
        Self::GREEN
    }
}

impl From<[f32; 4]> for DebugColor {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

//=== DebugDraw ===========================================================

/// Sink for debug primitives.
pub trait DebugDraw {
    /// Draws a ray starting at `origin` and extending by `direction`
    /// (not normalized; its length is the ray's length).
    fn draw_ray(&mut self, origin: Vec3, direction: Vec3, color: DebugColor);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_green() {
        assert_eq!(DebugColor::default(), DebugColor::GREEN);
    }

    #[test]
    fn normalized_check() {
        assert!(DebugColor::WHITE.is_normalized());
        assert!(!DebugColor::rgba(1.5, 0.0, 0.0, 1.0).is_normalized());
        assert!(!DebugColor::rgba(f32::NAN, 0.0, 0.0, 1.0).is_normalized());
    }

    #[test]
    fn from_array() {
        assert_eq!(DebugColor::from([1.0, 0.0, 0.0, 1.0]), DebugColor::RED);
    }
}
