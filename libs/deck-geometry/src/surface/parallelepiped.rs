//! Axis-aligned parallelepiped primitive.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};

use crate::axis::Axis;
use crate::surface::{Boundary, Transform};

// =============================================================================
// EXTENT
// =============================================================================

/// A (min, max) bound pair on one axis.
///
/// The pair (0, 0) is reserved to mean "infinite in that direction".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    /// Create a bound pair, enforcing min ≤ max.
    ///
    /// Fails with [`DeckError::Geometry`] when the ordering is violated.
    pub fn new(min: f64, max: f64) -> DeckResult<Self> {
        if min > max {
            return Err(DeckError::Geometry(format!(
                "the value of the minimum bound, {:.4}, is greater than that \
                 of the maximum bound, {:.4}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound in cm.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in cm.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether this extent uses the (0, 0) infinite-direction convention.
    pub fn is_infinite(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    fn shifted(self, offset: f64) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    fn stretched(self, factor: f64) -> Self {
        if factor == 0.0 {
            self
        } else if factor > 0.0 {
            Self {
                min: self.min * factor,
                max: self.max * factor,
            }
        } else {
            // Reflection: scaling flips the bounds, so swap to keep min <= max.
            Self {
                min: self.max * factor,
                max: self.min * factor,
            }
        }
    }
}

// =============================================================================
// PARALLELEPIPED
// =============================================================================

/// Rectangular parallelepiped with all faces parallel to the Cartesian axes.
///
/// Shifts translate both bounds on every axis; stretches act per axis
/// independently, with negative factors producing a reflection (bounds are
/// scaled then swapped, preserving min ≤ max) and zero factors leaving the
/// axis untouched.
///
/// ## Example
///
/// ```rust
/// use deck_geometry::Parallelepiped;
///
/// // A cube centered at the origin with 4 cm sides.
/// let pp = Parallelepiped::new("box", -2.0, 2.0, -2.0, 2.0, -2.0, 2.0).unwrap();
/// assert_eq!(pp.extent(deck_geometry::Axis::X).min(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parallelepiped {
    identity: Identity,
    extents: [Extent; 3],
    boundary: Boundary,
}

/// Shorter alias for [`Parallelepiped`], for those who fancy brevity.
pub type Cuboid = Parallelepiped;

impl Parallelepiped {
    /// Create a parallelepiped from per-axis bounds in cm.
    ///
    /// Each min must be at most the matching max; setting both bounds of an
    /// axis to 0 means the body is infinite in that direction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        zmin: f64,
        zmax: f64,
    ) -> DeckResult<Self> {
        Ok(Self {
            identity: Identity::new(name)?,
            extents: [
                Extent::new(xmin, xmax)?,
                Extent::new(ymin, ymax)?,
                Extent::new(zmin, zmax)?,
            ],
            boundary: Boundary::default(),
        })
    }

    /// Attach a boundary condition.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// The bound pair on the given axis.
    pub fn extent(&self, axis: Axis) -> Extent {
        self.extents[axis.index()]
    }

    /// Replace the bound pair on one axis.
    pub fn set_extent(&mut self, axis: Axis, extent: Extent) {
        self.extents[axis.index()] = extent;
    }

    /// The boundary condition.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub(crate) fn apply_shift(&mut self, offset: DVec3) {
        for axis in Axis::ALL {
            let i = axis.index();
            self.extents[i] = self.extents[i].shifted(axis.component(offset));
        }
    }

    pub(crate) fn apply_stretch(&mut self, factors: DVec3) {
        for axis in Axis::ALL {
            let i = axis.index();
            self.extents[i] = self.extents[i].stretched(axis.component(factors));
        }
    }
}

impl Named for Parallelepiped {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Parallelepiped {
    fn comment(&self) -> String {
        let [x, y, z] = self.extents;
        format!(
            "Parallelepiped '{}': [{:.4}, {:.4}] x [{:.4}, {:.4}] x \
             [{:.4}, {:.4}] cm.",
            self.name(),
            x.min,
            x.max,
            y.min,
            y.max,
            z.min,
            z.max
        )
    }
}

impl Transform for Parallelepiped {
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
