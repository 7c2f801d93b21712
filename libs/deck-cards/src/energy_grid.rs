//! # Energy Grid Card
//!
//! Energy group boundaries for tallies, either for one named tally or for
//! all tallies in the problem.

use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};

// =============================================================================
// ENERGY GRID
// =============================================================================

/// Energy group boundaries, in MeV, strictly increasing.
///
/// ## Example
///
/// ```rust
/// use deck_cards::EnergyGrid;
/// use deck_core::Commentable;
///
/// let grid = EnergyGrid::for_all("groups", vec![1e-6, 1.0, 20.0]).unwrap();
/// assert_eq!(
///     grid.comment(),
///     "Energy grid 'groups' for all tallies: 3 boundaries."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyGrid {
    identity: Identity,
    tally: Option<String>,
    energies: Vec<f64>,
}

impl EnergyGrid {
    /// A grid applying to every tally.
    pub fn for_all(name: &str, energies: Vec<f64>) -> DeckResult<Self> {
        Self::build(name, None, energies)
    }

    /// A grid applying to the tally with the given name.
    pub fn for_tally(name: &str, tally: &str, energies: Vec<f64>) -> DeckResult<Self> {
        if tally.is_empty() {
            return Err(DeckError::Naming(
                "the referenced tally name cannot be empty".to_string(),
            ));
        }
        Self::build(name, Some(tally.to_string()), energies)
    }

    fn build(name: &str, tally: Option<String>, energies: Vec<f64>) -> DeckResult<Self> {
        if energies.is_empty() {
            return Err(DeckError::Configuration(
                "an energy grid requires at least one boundary".to_string(),
            ));
        }
        if energies.windows(2).any(|w| w[1] <= w[0]) {
            return Err(DeckError::Configuration(
                "energy grid boundaries must be strictly increasing".to_string(),
            ));
        }
        Ok(Self {
            identity: Identity::new(name)?,
            tally,
            energies,
        })
    }

    /// The tally this grid applies to, or `None` for all tallies.
    pub fn tally(&self) -> Option<&str> {
        self.tally.as_deref()
    }

    /// The group boundaries in MeV.
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }
}

impl Named for EnergyGrid {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for EnergyGrid {
    fn comment(&self) -> String {
        let scope = match &self.tally {
            Some(tally) => format!("for tally '{}'", tally),
            None => "for all tallies".to_string(),
        };
        format!(
            "Energy grid '{}' {}: {} boundaries.",
            self.identity.name(),
            scope,
            self.energies.len()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
