//! # Surface Primitives
//!
//! The closed union of surface primitives a problem can be built from:
//! axis-aligned cylinders, axis-aligned planes, and parallelepipeds.
//!
//! Each primitive owns its geometric parameters and implements the
//! shift/stretch transform contract with primitive-specific validity rules;
//! validation always precedes mutation, so a failed transform leaves the
//! surface untouched. Dispatch over the union is by pattern match, never by
//! virtual call chains.

mod cylinder;
mod parallelepiped;
mod plane;

pub use cylinder::AxisCylinder;
pub use parallelepiped::{Cuboid, Extent, Parallelepiped};
pub use plane::AxisPlane;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Named};

// =============================================================================
// BOUNDARY CONDITION
// =============================================================================

/// Boundary condition carried by a surface.
///
/// Reflecting and white (cosine-distributed reflection) conditions are
/// mutually exclusive, so the two flags of the classic card format are
/// stored as a closed union. Codes that keep boundary conditions on a
/// separate card read these flags through [`Boundary::is_reflecting`] and
/// [`Boundary::is_white`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    /// No special boundary condition.
    #[default]
    Vacuum,
    /// Reflective boundary condition.
    Reflecting,
    /// White boundary condition (reflection with a cosine distribution
    /// with respect to the surface normal).
    White,
}

impl Boundary {
    /// Build a boundary condition from the two card-format flags.
    ///
    /// Fails with [`DeckError::Configuration`] when both flags are set.
    pub fn from_flags(reflecting: bool, white: bool) -> DeckResult<Self> {
        match (reflecting, white) {
            (true, true) => Err(DeckError::Configuration(
                "a surface can be reflecting or white, but not both".to_string(),
            )),
            (true, false) => Ok(Boundary::Reflecting),
            (false, true) => Ok(Boundary::White),
            (false, false) => Ok(Boundary::Vacuum),
        }
    }

    /// Whether the surface reflects specularly.
    pub fn is_reflecting(self) -> bool {
        self == Boundary::Reflecting
    }

    /// Whether the surface reflects with a cosine distribution.
    pub fn is_white(self) -> bool {
        self == Boundary::White
    }
}

// =============================================================================
// TRANSFORM CAPABILITY
// =============================================================================

/// Shift/stretch transform capability.
///
/// Both operations validate before mutating: on error the receiver's prior
/// state is unchanged. Not every primitive accepts every vector; see the
/// primitive documentation for the per-type contracts.
pub trait Transform {
    /// Translate by a 3-component offset, in units of length.
    fn shift(&mut self, offset: DVec3) -> DeckResult<()>;

    /// Scale from the origin by per-axis dimensionless factors.
    ///
    /// Negative factors are permitted and represent reflections; a zero
    /// factor means "no stretch in that direction".
    fn stretch(&mut self, factors: DVec3) -> DeckResult<()>;
}

// =============================================================================
// SURFACE UNION
// =============================================================================

/// A surface card: one of the closed set of primitives.
///
/// ## Example
///
/// ```rust
/// use deck_geometry::{Axis, AxisCylinder, Surface};
/// use deck_core::Named;
///
/// let surface: Surface = AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into();
/// assert_eq!(surface.name(), "pin");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Cylinder aligned with and centered on a Cartesian axis.
    Cylinder(AxisCylinder),
    /// Plane perpendicular to a Cartesian axis.
    Plane(AxisPlane),
    /// Axis-aligned rectangular parallelepiped.
    Parallelepiped(Parallelepiped),
}

impl Surface {
    /// The surface's boundary condition.
    pub fn boundary(&self) -> Boundary {
        match self {
            Surface::Cylinder(c) => c.boundary(),
            Surface::Plane(p) => p.boundary(),
            Surface::Parallelepiped(p) => p.boundary(),
        }
    }

    /// Validate a shift without mutating. Used by region-level transforms
    /// to reject a whole multi-surface transform before any surface moves.
    pub(crate) fn check_shift(&self, offset: DVec3) -> DeckResult<()> {
        match self {
            Surface::Cylinder(c) => c.check_shift(offset),
            Surface::Plane(_) | Surface::Parallelepiped(_) => Ok(()),
        }
    }

    /// Apply a shift previously validated with [`Surface::check_shift`].
    pub(crate) fn apply_shift(&mut self, offset: DVec3) {
        match self {
            Surface::Cylinder(c) => c.apply_shift(offset),
            Surface::Plane(p) => p.apply_shift(offset),
            Surface::Parallelepiped(p) => p.apply_shift(offset),
        }
    }

    /// Validate a stretch without mutating.
    pub(crate) fn check_stretch(&self, factors: DVec3) -> DeckResult<()> {
        match self {
            Surface::Cylinder(c) => c.check_stretch(factors),
            Surface::Plane(_) | Surface::Parallelepiped(_) => Ok(()),
        }
    }

    /// Apply a stretch previously validated with [`Surface::check_stretch`].
    pub(crate) fn apply_stretch(&mut self, factors: DVec3) {
        match self {
            Surface::Cylinder(c) => c.apply_stretch(factors),
            Surface::Plane(p) => p.apply_stretch(factors),
            Surface::Parallelepiped(p) => p.apply_stretch(factors),
        }
    }
}

impl Named for Surface {
    fn name(&self) -> &str {
        match self {
            Surface::Cylinder(c) => c.name(),
            Surface::Plane(p) => p.name(),
            Surface::Parallelepiped(p) => p.name(),
        }
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        match self {
            Surface::Cylinder(c) => c.rename(name),
            Surface::Plane(p) => p.rename(name),
            Surface::Parallelepiped(p) => p.rename(name),
        }
    }
}

impl Commentable for Surface {
    fn comment(&self) -> String {
        match self {
            Surface::Cylinder(c) => c.comment(),
            Surface::Plane(p) => p.comment(),
            Surface::Parallelepiped(p) => p.comment(),
        }
    }
}

impl Transform for Surface {
    fn shift(&mut self, offset: DVec3) -> DeckResult<()> {
        self.check_shift(offset)?;
        self.apply_shift(offset);
        Ok(())
    }

    fn stretch(&mut self, factors: DVec3) -> DeckResult<()> {
        self.check_stretch(factors)?;
        self.apply_stretch(factors);
        Ok(())
    }
}

impl From<AxisCylinder> for Surface {
    fn from(value: AxisCylinder) -> Self {
        Surface::Cylinder(value)
    }
}

impl From<AxisPlane> for Surface {
    fn from(value: AxisPlane) -> Self {
        Surface::Plane(value)
    }
}

impl From<Parallelepiped> for Surface {
    fn from(value: Parallelepiped) -> Self {
        Surface::Parallelepiped(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    #[test]
    fn test_boundary_from_flags() {
        assert_eq!(Boundary::from_flags(false, false).unwrap(), Boundary::Vacuum);
        assert_eq!(
            Boundary::from_flags(true, false).unwrap(),
            Boundary::Reflecting
        );
        assert_eq!(Boundary::from_flags(false, true).unwrap(), Boundary::White);
    }

    #[test]
    fn test_boundary_both_flags_rejected() {
        match Boundary::from_flags(true, true) {
            Err(DeckError::Configuration(msg)) => {
                assert!(msg.contains("reflecting"));
                assert!(msg.contains("white"));
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_union_dispatch() {
        let mut surface: Surface = AxisPlane::new("mid", Axis::Y, 2.0).unwrap().into();
        surface.shift(DVec3::new(0.0, 1.0, 0.0)).unwrap();
        match &surface {
            Surface::Plane(p) => assert_eq!(p.position(), 3.0),
            other => panic!("expected plane, got {:?}", other),
        }
        assert!(surface.comment().contains("mid"));
    }

    #[test]
    fn test_failed_surface_transform_leaves_state() {
        let mut surface: Surface = AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into();
        assert!(surface.shift(DVec3::new(1.0, 0.0, 0.0)).is_err());
        match &surface {
            Surface::Cylinder(c) => assert_eq!(c.radius(), 0.4),
            other => panic!("expected cylinder, got {:?}", other),
        }
    }
}
