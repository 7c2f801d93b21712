//! # Detector Cards
//!
//! Point and ring detectors: next-event estimators scoring flux at a point
//! or on a ring around a coordinate axis.
//!
//! The exclusion region around each detector is an explicit unit choice
//! rather than a sign convention on the radius, so a zero-size exclusion
//! in either unit is representable without ambiguity.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};
use deck_geometry::Axis;

use crate::particle::Particle;

// =============================================================================
// EXCLUSION RADIUS
// =============================================================================

/// The radius of the sphere around a detector within which collisions do
/// not contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExclusionRadius {
    /// Radius in centimeters.
    Centimeters(f64),
    /// Radius in mean free paths at the collision energy.
    MeanFreePaths(f64),
}

impl ExclusionRadius {
    /// Exclusion radius in centimeters. Must be non-negative.
    pub fn cm(radius: f64) -> DeckResult<Self> {
        Self::check(radius)?;
        Ok(Self::Centimeters(radius))
    }

    /// Exclusion radius in mean free paths. Must be non-negative.
    pub fn mean_free_paths(radius: f64) -> DeckResult<Self> {
        Self::check(radius)?;
        Ok(Self::MeanFreePaths(radius))
    }

    fn check(radius: f64) -> DeckResult<()> {
        if radius < 0.0 {
            return Err(DeckError::Configuration(format!(
                "an exclusion radius must be non-negative; user provided \
                 {:.4}",
                radius
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match self {
            Self::Centimeters(r) => format!("{:.4} cm", r),
            Self::MeanFreePaths(r) => format!("{:.4} mean free paths", r),
        }
    }
}

// =============================================================================
// DETECTOR SPECS
// =============================================================================

/// One point detector position with its exclusion radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
    /// Detector position.
    pub position: DVec3,
    /// Exclusion region around the point.
    pub exclusion: ExclusionRadius,
}

/// One ring detector with its exclusion radius.
///
/// The ring lies in the plane `axis = position`, centered on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    axis: Axis,
    position: f64,
    radius: f64,
    exclusion: ExclusionRadius,
}

impl RingSpec {
    /// Create a ring of positive radius around `axis` at `position`.
    pub fn new(
        axis: Axis,
        position: f64,
        radius: f64,
        exclusion: ExclusionRadius,
    ) -> DeckResult<Self> {
        if radius <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "ring detector radius must be positive; user provided {:.4}",
                radius
            )));
        }
        Ok(Self {
            axis,
            position,
            radius,
            exclusion,
        })
    }

    /// The axis the ring is centered on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Position of the ring's plane along the axis.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Ring radius in centimeters.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Exclusion region around the ring.
    pub fn exclusion(&self) -> ExclusionRadius {
        self.exclusion
    }
}

/// The geometry of a detector card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetectorKind {
    /// One or more point detectors.
    Point(Vec<PointSpec>),
    /// One or more ring detectors.
    Ring(Vec<RingSpec>),
}

// =============================================================================
// DETECTOR
// =============================================================================

/// A point or ring detector card.
///
/// Detectors are next-event estimators and only exist for neutrons and
/// photons.
///
/// ## Example
///
/// ```rust
/// use deck_cards::{Detector, DetectorKind, ExclusionRadius, Particle, PointSpec};
/// use glam::DVec3;
///
/// let spec = PointSpec {
///     position: DVec3::new(10.0, 0.0, 0.0),
///     exclusion: ExclusionRadius::cm(0.5).unwrap(),
/// };
/// let det = Detector::new(
///     "outside",
///     Particle::Photon,
///     DetectorKind::Point(vec![spec]),
///     true,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detector {
    identity: Identity,
    particle: Particle,
    kind: DetectorKind,
    separate_direct: bool,
}

impl Detector {
    /// Create a detector card.
    ///
    /// `separate_direct` asks for the uncollided (direct) contribution to
    /// be reported separately from the total.
    pub fn new(
        name: &str,
        particle: Particle,
        kind: DetectorKind,
        separate_direct: bool,
    ) -> DeckResult<Self> {
        match particle {
            Particle::Neutron | Particle::Photon => {}
            other => {
                return Err(DeckError::Configuration(format!(
                    "detectors exist only for neutrons and photons, not \
                     {}s",
                    other.label()
                )))
            }
        }
        let empty = match &kind {
            DetectorKind::Point(specs) => specs.is_empty(),
            DetectorKind::Ring(specs) => specs.is_empty(),
        };
        if empty {
            return Err(DeckError::Configuration(
                "a detector card requires at least one detector".to_string(),
            ));
        }
        Ok(Self {
            identity: Identity::new(name)?,
            particle,
            kind,
            separate_direct,
        })
    }

    /// The detected species.
    pub fn particle(&self) -> Particle {
        self.particle
    }

    /// The detector geometry.
    pub fn kind(&self) -> &DetectorKind {
        &self.kind
    }

    /// Whether the direct contribution is reported separately.
    pub fn separate_direct(&self) -> bool {
        self.separate_direct
    }
}

impl Named for Detector {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Detector {
    fn comment(&self) -> String {
        let (title, specs) = match &self.kind {
            DetectorKind::Point(specs) => (
                "Point detector",
                specs
                    .iter()
                    .map(|s| {
                        format!(
                            "point ({:.4}, {:.4}, {:.4}) with exclusion \
                             radius {}",
                            s.position.x,
                            s.position.y,
                            s.position.z,
                            s.exclusion.describe()
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
            DetectorKind::Ring(specs) => (
                "Ring detector",
                specs
                    .iter()
                    .map(|s| {
                        format!(
                            "ring at {} = {:.4} with radius {:.4} cm and \
                             exclusion radius {}",
                            s.axis,
                            s.position,
                            s.radius,
                            s.exclusion.describe()
                        )
                    })
                    .collect::<Vec<_>>(),
            ),
        };
        let direct = if self.separate_direct {
            "direct contrib is separate"
        } else {
            "direct contrib is not separate"
        };
        format!(
            "{} '{}' of {}: {}; {}.",
            title,
            self.identity.name(),
            self.particle.plural(),
            specs.join("; "),
            direct
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
