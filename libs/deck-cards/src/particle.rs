//! # Particle Types
//!
//! The particle species tracked by the transport codes this library
//! targets, and the filter used by tallies to select which species a
//! score applies to.

use std::fmt;

use serde::{Deserialize, Serialize};

use deck_core::{DeckError, DeckResult};

// =============================================================================
// PARTICLE
// =============================================================================

/// A particle species.
///
/// `Ord` follows declaration order so particle-keyed maps iterate in a
/// stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Particle {
    /// Neutrons.
    Neutron,
    /// Photons (gammas and x rays).
    Photon,
    /// Electrons.
    Electron,
    /// Protons.
    Proton,
}

impl Particle {
    /// Lowercase singular label, as used in card descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Neutron => "neutron",
            Self::Photon => "photon",
            Self::Electron => "electron",
            Self::Proton => "proton",
        }
    }

    /// Lowercase plural label.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Neutron => "neutrons",
            Self::Photon => "photons",
            Self::Electron => "electrons",
            Self::Proton => "protons",
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// PARTICLE FILTER
// =============================================================================

/// The particle selection of a tally.
///
/// Most tallies score one species; some accept several, and the
/// energy-deposition family also accepts all species at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleFilter {
    /// One species.
    Single(Particle),
    /// An explicit list of species.
    Multiple(Vec<Particle>),
    /// Every species the problem tracks.
    All,
}

impl ParticleFilter {
    /// Validate the filter: an explicit list must not be empty.
    pub fn validate(&self) -> DeckResult<()> {
        match self {
            Self::Multiple(particles) if particles.is_empty() => {
                Err(DeckError::Configuration(
                    "a tally's particle list cannot be empty".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Whether the filter selects all species.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Human-readable rendering, e.g. `"neutrons"` or `"all particles"`.
    pub fn describe(&self) -> String {
        match self {
            Self::Single(p) => p.plural().to_string(),
            Self::Multiple(particles) => {
                let labels: Vec<&str> = particles.iter().map(|p| p.plural()).collect();
                labels.join(", ")
            }
            Self::All => "all particles".to_string(),
        }
    }
}

impl From<Particle> for ParticleFilter {
    fn from(particle: Particle) -> Self {
        Self::Single(particle)
    }
}

// =============================================================================
// TESTS
// =============================================================================
