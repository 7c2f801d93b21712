//! # Deck Geometry
//!
//! Surface primitives and the boolean region algebra of a transport-code
//! problem definition.
//!
//! ## Architecture
//!
//! ```text
//! Surface → HalfSpace (signed leaf selector) → RegionArena (intersect/union)
//!         → Cell (deck-cards) → serialization layer (external)
//! ```
//!
//! Surfaces live in a [`SurfaceArena`] owned by the problem definition;
//! regions hold [`SurfaceId`] handles, never direct references, so sharing
//! one surface between several region leaves is explicit. Shifting or
//! stretching a region mutates the referenced surfaces in place, and every
//! leaf holding the same handle observes the change.
//!
//! ## Example
//!
//! ```rust
//! use deck_geometry::{Axis, AxisCylinder, AxisPlane, RegionArena, SurfaceArena};
//!
//! let mut surfaces = SurfaceArena::new();
//! let pin = surfaces.insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into()).unwrap();
//! let top = surfaces.insert(AxisPlane::new("top", Axis::Z, 1.0).unwrap().into()).unwrap();
//!
//! let mut regions = RegionArena::new();
//! let inside = regions.leaf(pin.neg());
//! let below = regions.leaf(top.neg());
//! let fuel = regions.intersect(inside, below).unwrap();
//!
//! assert_eq!(regions.comment(fuel, &surfaces), "(-pin & -top)");
//! ```

pub mod arena;
pub mod axis;
pub mod region;
pub mod surface;

// Re-export public API
pub use arena::{SurfaceArena, SurfaceId};
pub use axis::Axis;
pub use region::{
    HalfSpace, RegionArena, RegionId, RegionLeaf, RegionNode, RegionVisitor, Sense,
};
pub use surface::{
    AxisCylinder, AxisPlane, Boundary, Cuboid, Extent, Parallelepiped, Surface, Transform,
};
