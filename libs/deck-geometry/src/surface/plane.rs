//! Axis-aligned plane primitive.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckResult, Identity, Named};

use crate::axis::Axis;
use crate::surface::{Boundary, Transform};

/// Plane perpendicular to one of the Cartesian axes.
///
/// Shifts in any direction are accepted, but only the component along the
/// plane's axis has an effect; the same holds for stretches, where the
/// axis-aligned factor scales the position.
///
/// ## Example
///
/// ```rust
/// use deck_geometry::{Axis, AxisPlane, Transform};
/// use glam::DVec3;
///
/// let mut plane = AxisPlane::new("top", Axis::X, 3.0).unwrap();
/// plane.shift(DVec3::new(3.0, 0.0, 0.0)).unwrap();
/// assert_eq!(plane.position(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPlane {
    identity: Identity,
    axis: Axis,
    position: f64,
    boundary: Boundary,
}

impl AxisPlane {
    /// Create a plane perpendicular to `axis` at the given signed position
    /// along it, in cm.
    pub fn new(name: impl Into<String>, axis: Axis, position: f64) -> DeckResult<Self> {
        Ok(Self {
            identity: Identity::new(name)?,
            axis,
            position,
            boundary: Boundary::default(),
        })
    }

    /// Attach a boundary condition.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// The axis the plane is perpendicular to.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Signed position along the axis, in cm.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// The boundary condition.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Move the plane to a new position along its axis.
    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub(crate) fn apply_shift(&mut self, offset: DVec3) {
        self.position += self.axis.component(offset);
    }

    pub(crate) fn apply_stretch(&mut self, factors: DVec3) {
        let factor = self.axis.component(factors);
        if factor != 0.0 {
            self.position *= factor;
        }
    }
}

impl Named for AxisPlane {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for AxisPlane {
    fn comment(&self) -> String {
        format!(
            "Axis plane '{}': {} = {:.4} cm.",
            self.name(),
            self.axis,
            self.position
        )
    }
}

impl Transform for AxisPlane {
    fn shift(&mut self, offset: DVec3) -> DeckResult<()> {
        self.apply_shift(offset);
        Ok(())
    }

    fn stretch(&mut self, factors: DVec3) -> DeckResult<()> {
        self.apply_stretch(factors);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_uses_matching_component_only() {
        let mut plane = AxisPlane::new("p", Axis::X, 3.0).unwrap();
        plane.shift(DVec3::new(3.0, 5.0, -2.0)).unwrap();
        assert_eq!(plane.position(), 6.0);
        // Purely off-axis shift is accepted but has no effect.
        plane.shift(DVec3::new(0.0, 3.0, 2.0)).unwrap();
        assert_eq!(plane.position(), 6.0);
    }

    #[test]
    fn test_stretch_scales_position() {
        let mut plane = AxisPlane::new("p", Axis::X, 3.0).unwrap();
        plane.stretch(DVec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(plane.position(), 9.0);
        // Off-axis factors are no-ops.
        plane.stretch(DVec3::new(0.0, 3.0, 2.0)).unwrap();
        assert_eq!(plane.position(), 9.0);
    }

    #[test]
    fn test_negative_stretch_reflects_position() {
        let mut plane = AxisPlane::new("p", Axis::Y, 2.0).unwrap();
        plane.stretch(DVec3::new(0.0, -1.0, 0.0)).unwrap();
        assert_eq!(plane.position(), -2.0);
    }

    #[test]
    fn test_comment_format() {
        let plane = AxisPlane::new("myplane", Axis::X, 3.0).unwrap();
        assert_eq!(plane.comment(), "Axis plane 'myplane': x = 3.0000 cm.");
    }
}
