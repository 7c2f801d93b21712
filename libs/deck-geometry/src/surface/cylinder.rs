//! Axis-aligned cylinder primitive.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};

use crate::axis::Axis;
use crate::surface::{Boundary, Transform};

/// Cylinder aligned with and centered on one of the Cartesian axes.
///
/// The cylinder is infinite along its axis and characterized solely by its
/// radius, which makes its transform contract unusual:
///
/// - it can only be shifted along its own axis (a no-op, kept legal so the
///   cylinder can participate in a region-level shift);
/// - a perpendicular stretch must be uniform in both perpendicular
///   directions, or the cross section would stop being circular.
///
/// ## Example
///
/// ```rust
/// use deck_geometry::{Axis, AxisCylinder};
///
/// let cyl = AxisCylinder::new("pin", Axis::Z, 0.4).unwrap();
/// assert_eq!(cyl.radius(), 0.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisCylinder {
    identity: Identity,
    axis: Axis,
    radius: f64,
    boundary: Boundary,
}

impl AxisCylinder {
    /// Create a cylinder aligned with `axis`, with the given radius in cm.
    ///
    /// Fails with [`DeckError::Configuration`] for a non-positive radius
    /// and with [`DeckError::Naming`] for an empty name.
    pub fn new(name: impl Into<String>, axis: Axis, radius: f64) -> DeckResult<Self> {
        Self::check_radius(radius)?;
        Ok(Self {
            identity: Identity::new(name)?,
            axis,
            radius,
            boundary: Boundary::default(),
        })
    }

    /// Attach a boundary condition.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// The axis the cylinder is aligned with and centered on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Radius in cm. Always positive.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The boundary condition.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Replace the radius, keeping the positivity invariant.
    pub fn set_radius(&mut self, radius: f64) -> DeckResult<()> {
        Self::check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    fn check_radius(radius: f64) -> DeckResult<()> {
        if radius <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "cylinder radius must be positive; user provided {:.4}",
                radius
            )));
        }
        Ok(())
    }

    /// A shift is legal only when both off-axis components are zero; the
    /// surviving axis-aligned shift is a symmetric no-op.
    pub(crate) fn check_shift(&self, offset: DVec3) -> DeckResult<()> {
        let [p, q] = self.axis.perpendicular();
        if p.component(offset) != 0.0 || q.component(offset) != 0.0 {
            return Err(DeckError::Geometry(format!(
                "a cylinder aligned with the {} axis cannot be shifted in the \
                 {} or {} directions; user provided [{:.4}, {:.4}, {:.4}]",
                self.axis, p, q, offset.x, offset.y, offset.z
            )));
        }
        Ok(())
    }

    pub(crate) fn apply_shift(&mut self, _offset: DVec3) {
        // Axis-aligned shifts have no effect on an infinite cylinder.
    }

    /// Perpendicular stretch factors must be numerically equal, and must
    /// not flip the radius negative. The axis-aligned component is accepted
    /// and ignored.
    pub(crate) fn check_stretch(&self, factors: DVec3) -> DeckResult<()> {
        let [p, q] = self.axis.perpendicular();
        let fp = p.component(factors);
        let fq = q.component(factors);
        if fp != fq {
            return Err(DeckError::Geometry(format!(
                "stretches perpendicular to the axis must be uniform in the \
                 two perpendicular directions; user provided {} stretch {:.4} \
                 and {} stretch {:.4} for a {}-aligned cylinder",
                p, fp, q, fq, self.axis
            )));
        }
        if fp < 0.0 {
            return Err(DeckError::Geometry(format!(
                "perpendicular stretch factor {:.4} would make the radius of \
                 cylinder '{}' non-positive",
                fp,
                self.name()
            )));
        }
        Ok(())
    }

    pub(crate) fn apply_stretch(&mut self, factors: DVec3) {
        let [p, _] = self.axis.perpendicular();
        let factor = p.component(factors);
        // A factor of exactly zero is a no-op, not a zero radius.
        if factor != 0.0 {
            self.radius *= factor;
        }
    }
}

impl Named for AxisCylinder {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for AxisCylinder {
    fn comment(&self) -> String {
        format!(
            "Axis cylinder '{}': aligned and centered on {} axis, with \
             radius {:.4} cm (diameter {:.4} cm).",
            self.name(),
            self.axis,
            self.radius,
            2.0 * self.radius
        )
    }
}

impl Transform for AxisCylinder {
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

// =============================================================================
// TESTS
// =============================================================================
