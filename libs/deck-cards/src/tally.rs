//! # Tally Cards
//!
//! Tallies score particle traffic over surfaces or cells. Each tally names
//! the quantity scored (current, flux, energy deposition, ...), the particle
//! species it applies to, and the surface or cell bins it scores into.
//!
//! Bins hold arena handles, never card copies, so a tally built before a
//! geometry transform still refers to the live surfaces and cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};
use deck_geometry::SurfaceId;

use crate::cell::CellId;
use crate::particle::{Particle, ParticleFilter};

// =============================================================================
// TALLY BINS
// =============================================================================

/// The bin structure of a tally over handles of type `I` (surfaces or
/// cells).
///
/// The three shapes are distinct variants rather than a convention on list
/// nesting, so a caller states averaging intent explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TallyBins<I> {
    /// One bin.
    Single(I),
    /// One bin per listed handle.
    List(Vec<I>),
    /// One bin per group, scoring the average over the group's handles.
    GroupedForAverage(Vec<Vec<I>>),
}

impl<I: Copy + PartialEq + fmt::Display> TallyBins<I> {
    /// Validate the bin structure: lists and groups must be non-empty.
    pub fn validate(&self) -> DeckResult<()> {
        match self {
            Self::Single(_) => Ok(()),
            Self::List(ids) => {
                if ids.is_empty() {
                    return Err(DeckError::Configuration(
                        "a tally's bin list cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
            Self::GroupedForAverage(groups) => {
                if groups.is_empty() || groups.iter().any(Vec::is_empty) {
                    return Err(DeckError::Configuration(
                        "a tally's averaging groups must each contain at \
                         least one entry"
                            .to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Every distinct handle the bins reference, in first-seen order.
    pub fn unique_ids(&self) -> Vec<I> {
        let mut seen = Vec::new();
        let mut push = |id: I| {
            if !seen.contains(&id) {
                seen.push(id);
            }
        };
        match self {
            Self::Single(id) => push(*id),
            Self::List(ids) => ids.iter().copied().for_each(push),
            Self::GroupedForAverage(groups) => {
                groups.iter().flatten().copied().for_each(push);
            }
        }
        seen
    }

    /// Render the bins for comments; `noun` is the singular bin kind
    /// ("surface" or "cell").
    fn describe(&self, noun: &str) -> String {
        let join = |ids: &[I]| {
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Self::Single(id) => format!("{} {}", noun, id),
            Self::List(ids) => format!("{}s {}", noun, join(ids)),
            Self::GroupedForAverage(groups) => groups
                .iter()
                .map(|group| format!("avg. of {}s {}", noun, join(group)))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

// =============================================================================
// TALLY KIND
// =============================================================================

/// The quantity a tally scores and where it scores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TallyKind {
    /// Particle current across surfaces.
    SurfaceCurrent {
        /// Surface bins.
        bins: TallyBins<SurfaceId>,
        /// Additionally score the total over all bins.
        total: bool,
        /// Weight each score by the particle's energy.
        energy_weighted: bool,
    },
    /// Particle flux averaged over surfaces.
    SurfaceFlux {
        /// Surface bins.
        bins: TallyBins<SurfaceId>,
        /// Additionally score the average over all bins.
        average: bool,
        /// Weight each score by the particle's energy.
        energy_weighted: bool,
    },
    /// Particle flux averaged over cells.
    CellFlux {
        /// Cell bins.
        bins: TallyBins<CellId>,
        /// Additionally score the average over all bins.
        average: bool,
        /// Weight each score by the particle's energy.
        energy_weighted: bool,
    },
    /// Energy deposited in cells.
    EnergyDeposition {
        /// Cell bins.
        bins: TallyBins<CellId>,
        /// Additionally score the average over all bins.
        average: bool,
        /// Score in alternate units (collision heating).
        alt_units: bool,
    },
    /// Fission energy deposited in cells. Implicitly a neutron tally.
    FissionEnergyDeposition {
        /// Cell bins.
        bins: TallyBins<CellId>,
        /// Additionally score the average over all bins.
        average: bool,
    },
    /// Pulse-height distribution in cells.
    PulseHeight {
        /// Cell bins.
        bins: TallyBins<CellId>,
        /// Additionally score the average over all bins.
        average: bool,
        /// Score in alternate units (energy rather than pulses).
        alt_units: bool,
    },
    /// Charge deposited in cells.
    ChargeDeposition {
        /// Cell bins.
        bins: TallyBins<CellId>,
        /// Additionally score the average over all bins.
        average: bool,
    },
}

impl TallyKind {
    fn title(&self) -> &'static str {
        match self {
            Self::SurfaceCurrent { .. } => "Surface current",
            Self::SurfaceFlux { .. } => "Surface flux",
            Self::CellFlux { .. } => "Cell flux",
            Self::EnergyDeposition { .. } => "Energy deposition",
            Self::FissionEnergyDeposition { .. } => "Fission energy deposition",
            Self::PulseHeight { .. } => "Pulse height",
            Self::ChargeDeposition { .. } => "Charge deposition",
        }
    }

    fn validate(&self) -> DeckResult<()> {
        match self {
            Self::SurfaceCurrent { bins, .. } | Self::SurfaceFlux { bins, .. } => bins.validate(),
            Self::CellFlux { bins, .. }
            | Self::EnergyDeposition { bins, .. }
            | Self::FissionEnergyDeposition { bins, .. }
            | Self::PulseHeight { bins, .. }
            | Self::ChargeDeposition { bins, .. } => bins.validate(),
        }
    }

    fn describe_bins(&self) -> String {
        match self {
            Self::SurfaceCurrent { bins, .. } | Self::SurfaceFlux { bins, .. } => {
                bins.describe("surface")
            }
            Self::CellFlux { bins, .. }
            | Self::EnergyDeposition { bins, .. }
            | Self::FissionEnergyDeposition { bins, .. }
            | Self::PulseHeight { bins, .. }
            | Self::ChargeDeposition { bins, .. } => bins.describe("cell"),
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Self::SurfaceCurrent { total: true, .. } => "; and total of all provided.",
            Self::SurfaceFlux { average: true, .. }
            | Self::CellFlux { average: true, .. }
            | Self::EnergyDeposition { average: true, .. }
            | Self::FissionEnergyDeposition { average: true, .. }
            | Self::PulseHeight { average: true, .. }
            | Self::ChargeDeposition { average: true, .. } => "; and avg. of all provided.",
            _ => ".",
        }
    }
}

// =============================================================================
// TALLY
// =============================================================================

/// A named tally card.
///
/// ## Example
///
/// ```rust
/// use deck_cards::{Particle, Tally, TallyBins};
/// use deck_geometry::{Axis, AxisPlane, SurfaceArena};
///
/// let mut surfaces = SurfaceArena::new();
/// let top = surfaces.insert(AxisPlane::new("top", Axis::Z, 10.0).unwrap().into()).unwrap();
///
/// let leakage = Tally::surface_current(
///     "leakage",
///     Particle::Neutron.into(),
///     TallyBins::Single(top),
///     true,
///     false,
/// ).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    identity: Identity,
    particles: ParticleFilter,
    kind: TallyKind,
}

impl Tally {
    fn build(name: &str, particles: ParticleFilter, kind: TallyKind) -> DeckResult<Self> {
        particles.validate()?;
        kind.validate()?;
        Ok(Self {
            identity: Identity::new(name)?,
            particles,
            kind,
        })
    }

    /// Current of particles across surfaces.
    pub fn surface_current(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<SurfaceId>,
        total: bool,
        energy_weighted: bool,
    ) -> DeckResult<Self> {
        Self::build(
            name,
            particles,
            TallyKind::SurfaceCurrent {
                bins,
                total,
                energy_weighted,
            },
        )
    }

    /// Flux averaged over surfaces.
    pub fn surface_flux(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<SurfaceId>,
        average: bool,
        energy_weighted: bool,
    ) -> DeckResult<Self> {
        Self::build(
            name,
            particles,
            TallyKind::SurfaceFlux {
                bins,
                average,
                energy_weighted,
            },
        )
    }

    /// Flux averaged over cells.
    pub fn cell_flux(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<CellId>,
        average: bool,
        energy_weighted: bool,
    ) -> DeckResult<Self> {
        Self::build(
            name,
            particles,
            TallyKind::CellFlux {
                bins,
                average,
                energy_weighted,
            },
        )
    }

    /// Energy deposited in cells.
    ///
    /// Alternate units require an explicit particle selection; combining
    /// them with an all-particle filter fails with
    /// [`DeckError::Configuration`].
    pub fn energy_deposition(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<CellId>,
        average: bool,
        alt_units: bool,
    ) -> DeckResult<Self> {
        if particles.is_all() && alt_units {
            return Err(DeckError::Configuration(
                "an energy deposition tally over all particles cannot use \
                 alternate units"
                    .to_string(),
            ));
        }
        Self::build(
            name,
            particles,
            TallyKind::EnergyDeposition {
                bins,
                average,
                alt_units,
            },
        )
    }

    /// Fission energy deposited in cells. The particle selection is always
    /// neutrons.
    pub fn fission_energy_deposition(
        name: &str,
        bins: TallyBins<CellId>,
        average: bool,
    ) -> DeckResult<Self> {
        Self::build(
            name,
            ParticleFilter::Single(Particle::Neutron),
            TallyKind::FissionEnergyDeposition { bins, average },
        )
    }

    /// Pulse-height distribution in cells.
    ///
    /// Requires an explicit particle selection.
    pub fn pulse_height(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<CellId>,
        average: bool,
        alt_units: bool,
    ) -> DeckResult<Self> {
        if particles.is_all() {
            return Err(DeckError::Configuration(
                "a pulse height tally requires an explicit particle \
                 selection"
                    .to_string(),
            ));
        }
        Self::build(
            name,
            particles,
            TallyKind::PulseHeight {
                bins,
                average,
                alt_units,
            },
        )
    }

    /// Charge deposited in cells.
    ///
    /// Requires an explicit particle selection; has no alternate units.
    pub fn charge_deposition(
        name: &str,
        particles: ParticleFilter,
        bins: TallyBins<CellId>,
        average: bool,
    ) -> DeckResult<Self> {
        if particles.is_all() {
            return Err(DeckError::Configuration(
                "a charge deposition tally requires an explicit particle \
                 selection"
                    .to_string(),
            ));
        }
        Self::build(
            name,
            particles,
            TallyKind::ChargeDeposition { bins, average },
        )
    }

    /// The particle selection.
    pub fn particles(&self) -> &ParticleFilter {
        &self.particles
    }

    /// The scored quantity and its bins.
    pub fn kind(&self) -> &TallyKind {
        &self.kind
    }
}

impl Named for Tally {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Tally {
    fn comment(&self) -> String {
        format!(
            "{} tally '{}' of {}: {}{}",
            self.kind.title(),
            self.identity.name(),
            self.particles.describe(),
            self.kind.describe_bins(),
            self.kind.suffix()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
