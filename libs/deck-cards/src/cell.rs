//! # Cell Card
//!
//! A cell binds a region of space to its material fill and per-cell
//! options (temperature, volume, particle importances).
//!
//! Cells reference their region through a [`RegionId`] handle; the region
//! tree and the surfaces it references stay owned by their arenas, so a
//! surface transform performed after the cell is built is visible through
//! the cell with no extra bookkeeping.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use config::constants::{KELVIN_TO_KT, MIN_PHYSICAL_TEMPERATURE, SUSPICIOUS_TEMPERATURE};
use deck_core::{Commentable, DeckError, DeckResult, Identity, Named};
use deck_geometry::{RegionArena, RegionId, SurfaceArena};

use crate::material::Material;
use crate::particle::Particle;

// =============================================================================
// CELL ID
// =============================================================================

/// Handle to a cell stored in a [`CellArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(u32);

impl CellId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the cell in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DENSITY UNITS
// =============================================================================

/// The unit the cell's fill density is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnits {
    /// Grams per cubic centimeter.
    MassDensity,
    /// Atoms per barn-centimeter.
    AtomDensity,
}

impl DensityUnits {
    /// Unit label used in comments.
    pub fn label(self) -> &'static str {
        match self {
            Self::MassDensity => "g/cm^3",
            Self::AtomDensity => "atoms/b/cm",
        }
    }
}

// =============================================================================
// CELL FILL
// =============================================================================

/// A material fill with its density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellFill {
    material: Material,
    density: f64,
    units: DensityUnits,
}

impl CellFill {
    /// Combine a material with a positive density.
    pub fn new(material: Material, density: f64, units: DensityUnits) -> DeckResult<Self> {
        if density <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "cell density must be positive; user provided {:.4}",
                density
            )));
        }
        Ok(Self {
            material,
            density,
            units,
        })
    }

    /// The material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The density, in [`CellFill::units`].
    pub fn density(&self) -> f64 {
        self.density
    }

    /// The density unit.
    pub fn units(&self) -> DensityUnits {
        self.units
    }
}

// =============================================================================
// CELL OPTIONS
// =============================================================================

/// Optional per-cell settings.
///
/// All setters validate; a failed setter leaves the options unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellOptions {
    temperature: Option<f64>,
    volume: Option<f64>,
    importances: BTreeMap<Particle, f64>,
}

impl CellOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell temperature, in Kelvin.
    ///
    /// Values below 1 K are rejected outright (the caller most likely
    /// passed kT), and values below 200 K are rejected as likely degrees
    /// Celsius.
    pub fn set_temperature(&mut self, kelvin: f64) -> DeckResult<()> {
        if kelvin < MIN_PHYSICAL_TEMPERATURE {
            return Err(DeckError::Configuration(format!(
                "the temperature {:.4} K is less than 1 K; was it mistakenly \
                 specified as kT?",
                kelvin
            )));
        }
        if kelvin < SUSPICIOUS_TEMPERATURE {
            return Err(DeckError::Configuration(format!(
                "the temperature {:.4} K is less than 200 K; was it mistakenly \
                 specified in degrees Celsius?",
                kelvin
            )));
        }
        self.temperature = Some(kelvin);
        Ok(())
    }

    /// Set the cell volume, in cubic centimeters.
    pub fn set_volume(&mut self, volume: f64) -> DeckResult<()> {
        if volume <= 0.0 {
            return Err(DeckError::Configuration(format!(
                "cell volume must be positive; user provided {:.4}",
                volume
            )));
        }
        self.volume = Some(volume);
        Ok(())
    }

    /// Set the importance of a particle species in this cell.
    pub fn set_importance(&mut self, particle: Particle, importance: f64) -> DeckResult<()> {
        if importance < 0.0 {
            return Err(DeckError::Configuration(format!(
                "cell importance must be non-negative; user provided {:.4} \
                 for {}s",
                importance,
                particle.label()
            )));
        }
        self.importances.insert(particle, importance);
        Ok(())
    }

    /// The temperature in Kelvin, if set.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// The temperature as thermal energy kT in MeV, the form transport
    /// codes consume.
    pub fn temperature_kt(&self) -> Option<f64> {
        self.temperature.map(|kelvin| kelvin * KELVIN_TO_KT)
    }

    /// The volume in cubic centimeters, if set.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Particle importances, keyed by species.
    pub fn importances(&self) -> &BTreeMap<Particle, f64> {
        &self.importances
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.volume.is_none() && self.importances.is_empty()
    }
}

// =============================================================================
// CELL
// =============================================================================

/// A cell: a region, its fill, and its options.
///
/// ## Example
///
/// ```rust
/// use deck_cards::{Cell, DensityUnits, Material};
/// use deck_geometry::{Axis, AxisCylinder, RegionArena, SurfaceArena};
///
/// let mut surfaces = SurfaceArena::new();
/// let pin = surfaces.insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into()).unwrap();
/// let mut regions = RegionArena::new();
/// let inside = regions.leaf(pin.neg());
///
/// let fuel = Cell::new(
///     "fuel",
///     inside,
///     Material::new("UO2").unwrap(),
///     10.3,
///     DensityUnits::MassDensity,
/// ).unwrap();
/// assert_eq!(
///     fuel.comment_in(&regions, &surfaces),
///     "Cell 'fuel': region -pin, material 'UO2' density 10.3000 g/cm^3."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    identity: Identity,
    region: RegionId,
    fill: Option<CellFill>,
    options: CellOptions,
}

impl Cell {
    /// Create a filled cell.
    pub fn new(
        name: &str,
        region: RegionId,
        material: Material,
        density: f64,
        units: DensityUnits,
    ) -> DeckResult<Self> {
        Ok(Self {
            identity: Identity::new(name)?,
            region,
            fill: Some(CellFill::new(material, density, units)?),
            options: CellOptions::new(),
        })
    }

    /// Create a void cell (no material).
    pub fn void(name: &str, region: RegionId) -> DeckResult<Self> {
        Ok(Self {
            identity: Identity::new(name)?,
            region,
            fill: None,
            options: CellOptions::new(),
        })
    }

    /// Attach options, builder style.
    pub fn with_options(mut self, options: CellOptions) -> Self {
        self.options = options;
        self
    }

    /// The region handle this cell occupies.
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// The fill, or `None` for a void cell.
    pub fn fill(&self) -> Option<&CellFill> {
        self.fill.as_ref()
    }

    /// The cell's options.
    pub fn options(&self) -> &CellOptions {
        &self.options
    }

    /// Mutable access to the cell's options.
    pub fn options_mut(&mut self) -> &mut CellOptions {
        &mut self.options
    }

    fn fill_text(&self) -> String {
        match &self.fill {
            Some(fill) => format!(
                "material '{}' density {:.4} {}",
                fill.material().name(),
                fill.density(),
                fill.units().label()
            ),
            None => "void".to_string(),
        }
    }

    /// Full description including the region rendered against its arenas.
    pub fn comment_in(&self, regions: &RegionArena, surfaces: &SurfaceArena) -> String {
        format!(
            "Cell '{}': region {}, {}.",
            self.identity.name(),
            regions.comment(self.region, surfaces),
            self.fill_text()
        )
    }
}

impl Named for Cell {
    fn name(&self) -> &str {
        self.identity.name()
    }

    fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.identity.rename(name)
    }
}

impl Commentable for Cell {
    fn comment(&self) -> String {
        format!("Cell '{}': {}.", self.identity.name(), self.fill_text())
    }
}

// =============================================================================
// CELL ARENA
// =============================================================================

/// The cells of one problem definition, addressed by [`CellId`] and indexed
/// by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CellArena {
    cells: Vec<Cell>,
}

impl CellArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell, enforcing collection-unique names.
    pub fn insert(&mut self, cell: Cell) -> DeckResult<CellId> {
        if self.lookup(cell.name()).is_some() {
            return Err(DeckError::Naming(format!(
                "a cell named '{}' already exists in this problem",
                cell.name()
            )));
        }
        let id = CellId::from_index(self.cells.len());
        self.cells.push(cell);
        Ok(id)
    }

    /// The cell behind a handle, or `None` for a handle from another arena.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Mutable access to a cell.
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.index())
    }

    /// Find a cell by name.
    pub fn lookup(&self, name: &str) -> Option<CellId> {
        self.cells
            .iter()
            .position(|c| c.name() == name)
            .map(CellId::from_index)
    }

    /// Iterate cells in insertion order with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (CellId::from_index(i), c))
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the arena holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Index<CellId> for CellArena {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }
}

// =============================================================================
// TESTS
// =============================================================================
