//! # Source Cards
//!
//! Criticality (eigenvalue) source definitions. Both cards here are unique:
//! a problem holds at most one of each, under a fixed name, and the name
//! cannot be changed after construction.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};

// =============================================================================
// CRITICALITY
// =============================================================================

/// The criticality source card: cycle counts and the initial k-effective
/// guess for an eigenvalue calculation.
///
/// Unique card; its name is always `"criticality"`.
///
/// ## Example
///
/// ```rust
/// use deck_cards::Criticality;
/// use deck_core::Commentable;
///
/// let source = Criticality::defaults().unwrap();
/// assert_eq!(
///     source.comment(),
///     "Criticality source 'criticality': 1000 histories/cycle, \
///      keff guess 1.0000, 30 skipped cycles, 130 cycles."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criticality {
    identity: Identity,
    histories: u32,
    keff_guess: f64,
    skip_cycles: u32,
    cycles: u32,
}

impl Criticality {
    /// The fixed name of this unique card.
    pub const NAME: &'static str = "criticality";

    /// Create a criticality source.
    ///
    /// Each parameter is validated; see the setters for the individual
    /// constraints.
    pub fn new(
        histories: u32,
        keff_guess: f64,
        skip_cycles: u32,
        cycles: u32,
    ) -> DeckResult<Self> {
        let mut source = Self {
            identity: Identity::unique(Self::NAME)?,
            histories: 1,
            keff_guess: 1.0,
            skip_cycles: 1,
            cycles: 1,
        };
        source.set_histories(histories)?;
        source.set_keff_guess(keff_guess)?;
        // Cycle counts are coupled; widen the total before raising the
        // skip count.
        source.set_cycles(cycles)?;
        source.set_skip_cycles(skip_cycles)?;
        Ok(source)
    }

    /// The conventional defaults: 1000 histories per cycle, a guess of 1,
    /// 30 skipped cycles out of 130.
    pub fn defaults() -> DeckResult<Self> {
        Self::new(1000, 1.0, 30, 130)
    }

    /// Set the number of histories per cycle. Must be positive.
    pub fn set_histories(&mut self, histories: u32) -> DeckResult<()> {
        if histories == 0 {
            return Err(DeckError::Configuration(
                "the number of histories per cycle must be positive".to_string(),
            ));
        }
        self.histories = histories;
        Ok(())
    }

    /// Set the initial k-effective guess. Must be non-negative.
    pub fn set_keff_guess(&mut self, keff_guess: f64) -> DeckResult<()> {
        if keff_guess < 0.0 {
            return Err(DeckError::Configuration(format!(
                "the k-effective guess must be non-negative; user provided \
                 {:.4}",
                keff_guess
            )));
        }
        self.keff_guess = keff_guess;
        Ok(())
    }

    /// Set the number of cycles skipped before tallying. Must be positive
    /// and no greater than the total cycle count.
    pub fn set_skip_cycles(&mut self, skip_cycles: u32) -> DeckResult<()> {
        if skip_cycles == 0 {
            return Err(DeckError::Configuration(
                "the number of skipped cycles must be positive".to_string(),
            ));
        }
        if skip_cycles > self.cycles {
            return Err(DeckError::Configuration(format!(
                "cannot skip {} cycles of a {}-cycle run",
                skip_cycles, self.cycles
            )));
        }
        self.skip_cycles = skip_cycles;
        Ok(())
    }

    /// Set the total number of cycles. Must be at least the skip count.
    pub fn set_cycles(&mut self, cycles: u32) -> DeckResult<()> {
        if cycles < self.skip_cycles {
            return Err(DeckError::Configuration(format!(
                "the number of cycles must be at least the {} skipped \
                 cycles; user provided {}",
                self.skip_cycles, cycles
            )));
        }
        self.cycles = cycles;
        Ok(())
    }

    /// Histories per cycle.
    pub fn histories(&self) -> u32 {
        self.histories
    }

    /// Initial k-effective guess.
    pub fn keff_guess(&self) -> f64 {
        self.keff_guess
    }

    /// Cycles skipped before tallying.
    pub fn skip_cycles(&self) -> u32 {
        self.skip_cycles
    }

    /// Total cycle count.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

impl Named for Criticality {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Criticality {
    fn comment(&self) -> String {
        format!(
            "Criticality source '{}': {} histories/cycle, keff guess {:.4}, \
             {} skipped cycles, {} cycles.",
            self.identity.name(),
            self.histories,
            self.keff_guess,
            self.skip_cycles,
            self.cycles
        )
    }
}

// =============================================================================
// CRITICALITY POINTS
// =============================================================================

/// Initial fission source points for a criticality calculation.
///
/// Unique card; its name is always `"criticalitypoints"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalityPoints {
    identity: Identity,
    points: Vec<DVec3>,
}

impl CriticalityPoints {
    /// The fixed name of this unique card.
    pub const NAME: &'static str = "criticalitypoints";

    /// Create from an explicit, non-empty point list.
    pub fn new(points: Vec<DVec3>) -> DeckResult<Self> {
        if points.is_empty() {
            return Err(DeckError::Configuration(
                "at least one criticality source point is required".to_string(),
            ));
        }
        Ok(Self {
            identity: Identity::unique(Self::NAME)?,
            points,
        })
    }

    /// A single point at the origin, the conventional default.
    pub fn origin() -> DeckResult<Self> {
        Self::new(vec![DVec3::ZERO])
    }

    /// The source points.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }
}

impl Named for CriticalityPoints {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for CriticalityPoints {
    fn comment(&self) -> String {
        let points: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("({:.4}, {:.4}, {:.4})", p.x, p.y, p.z))
            .collect();
        format!(
            "Criticality points '{}': {}.",
            self.identity.name(),
            points.join(", ")
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let source = Criticality::defaults().unwrap();
        assert_eq!(source.histories(), 1000);
        assert_eq!(source.keff_guess(), 1.0);
        assert_eq!(source.skip_cycles(), 30);
        assert_eq!(source.cycles(), 130);
        assert_eq!(source.name(), "criticality");
    }

    #[test]
    fn test_parameter_validation() {
        assert!(Criticality::new(0, 1.0, 30, 130).is_err());
        assert!(Criticality::new(1000, -0.5, 30, 130).is_err());
        assert!(Criticality::new(1000, 1.0, 0, 130).is_err());
        // Fewer total cycles than skipped cycles.
        assert!(Criticality::new(1000, 1.0, 30, 20).is_err());
        // Equal counts are allowed.
        assert!(Criticality::new(1000, 1.0, 30, 30).is_ok());
    }

    #[test]
    fn test_failed_setter_keeps_old_value() {
        let mut source = Criticality::defaults().unwrap();
        assert!(source.set_cycles(10).is_err());
        assert_eq!(source.cycles(), 130);
        assert!(source.set_skip_cycles(500).is_err());
        assert_eq!(source.skip_cycles(), 30);
    }

    #[test]
    fn test_unique_cards_cannot_be_renamed() {
        let mut source = Criticality::defaults().unwrap();
        assert!(matches!(
            source.rename("other"),
            Err(DeckError::Immutability(_))
        ));
        let mut points = CriticalityPoints::origin().unwrap();
        assert!(points.rename("other").is_err());
        assert_eq!(points.name(), "criticalitypoints");
    }

    #[test]
    fn test_points_comment() {
        let points = CriticalityPoints::new(vec![
            DVec3::ZERO,
            DVec3::new(1.0, 2.0, 3.0),
        ])
        .unwrap();
        assert_eq!(
            points.comment(),
            "Criticality points 'criticalitypoints': \
             (0.0000, 0.0000, 0.0000), (1.0000, 2.0000, 3.0000)."
        );
    }

    #[test]
    fn test_empty_points_rejected() {
        assert!(matches!(
            CriticalityPoints::new(Vec::new()),
            Err(DeckError::Configuration(_))
        ));
    }
}
