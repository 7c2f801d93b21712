//! # Deck Cards
//!
//! The validated card containers that sit on top of the geometry layer:
//! cells binding regions to materials, tally/detector cards referencing
//! cells and surfaces by identity, and source cards.
//!
//! ## Architecture
//!
//! ```text
//! deck-geometry (SurfaceArena, RegionArena)
//!       ↓
//! Cell / CellArena  ←  Tally, Detector, EnergyGrid (reference by id)
//!       ↓
//! serialization layer (external; consumes comment() and the id handles)
//! ```
//!
//! Cards never own geometry; they reference surfaces and cells through the
//! arena handles, so identity stays stable while the referenced geometry
//! mutates underneath.
//!
//! ## Example
//!
//! ```rust
//! use deck_cards::{Cell, CellArena, DensityUnits, Material};
//! use deck_geometry::{Axis, AxisCylinder, RegionArena, SurfaceArena};
//!
//! let mut surfaces = SurfaceArena::new();
//! let pin = surfaces.insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into()).unwrap();
//! let mut regions = RegionArena::new();
//! let fuel_region = regions.leaf(pin.neg());
//!
//! let uo2 = Material::new("UO2").unwrap();
//! let fuel = Cell::new("fuel", fuel_region, uo2, 10.3, DensityUnits::MassDensity).unwrap();
//!
//! let mut cells = CellArena::new();
//! cells.insert(fuel).unwrap();
//! ```

pub mod cell;
pub mod detector;
pub mod energy_grid;
pub mod material;
pub mod particle;
pub mod source;
pub mod tally;

// Re-export public API
pub use cell::{Cell, CellArena, CellFill, CellId, CellOptions, DensityUnits};
pub use detector::{Detector, DetectorKind, ExclusionRadius, PointSpec, RingSpec};
pub use energy_grid::EnergyGrid;
pub use material::Material;
pub use particle::{Particle, ParticleFilter};
pub use source::{Criticality, CriticalityPoints};
pub use tally::{Tally, TallyBins, TallyKind};

#[cfg(test)]
mod tests;
