//! # Material Card
//!
//! A named nuclide composition. Cells reference materials by the material's
//! name; the composition itself is an opaque list of nuclide labels and
//! fractions as far as the geometry layer is concerned.

use serde::{Deserialize, Serialize};

use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};

// =============================================================================
// MATERIAL
// =============================================================================

/// A named material composition.
///
/// ## Example
///
/// ```rust
/// use deck_cards::Material;
///
/// let mut uo2 = Material::new("UO2").unwrap();
/// uo2.add_nuclide("U235", 0.05).unwrap();
/// uo2.add_nuclide("U238", 0.95).unwrap();
/// assert_eq!(uo2.composition().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    identity: Identity,
    composition: Vec<(String, f64)>,
}

impl Material {
    /// Create an empty material.
    ///
    /// Fails with [`DeckError::Naming`] when the name is empty; cells
    /// reference their material by this name.
    pub fn new(name: &str) -> DeckResult<Self> {
        Ok(Self {
            identity: Identity::new(name)?,
            composition: Vec::new(),
        })
    }

    /// Append a nuclide with a positive fraction.
    ///
    /// Fractions are interpreted by the serialization layer (atom or mass
    /// fractions); this layer only requires them to be positive.
    pub fn add_nuclide(&mut self, nuclide: &str, fraction: f64) -> DeckResult<()> {
        if nuclide.is_empty() {
            return Err(DeckError::Naming(
                "nuclide label cannot be empty".to_string(),
            ));
        }
        if fraction <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "nuclide fraction must be positive; user provided {:.4} for '{}'",
                fraction, nuclide
            )));
        }
        self.composition.push((nuclide.to_string(), fraction));
        Ok(())
    }

    /// The nuclide labels and fractions, in insertion order.
    pub fn composition(&self) -> &[(String, f64)] {
        &self.composition
    }
}

impl Named for Material {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Material {
    fn comment(&self) -> String {
        format!(
            "Material '{}': {} nuclides.",
            self.identity.name(),
            self.composition.len()
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
