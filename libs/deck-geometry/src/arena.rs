//! # Surface Arena
//!
//! Storage for the surfaces of one problem definition.
//!
//! Regions never own surfaces; they hold [`SurfaceId`] handles into the
//! arena owned by the problem definition. This makes the shared-mutation
//! semantics of transforms explicit: when several region leaves hold the
//! same handle, a shift or stretch through any of them mutates the single
//! arena slot, and every other leaf observes the change immediately.
//!
//! The arena is not safe for unsynchronized concurrent mutation; give each
//! concurrently-built problem its own arena, or guard mutating calls with
//! an external lock.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use deck_core::{DeckError, DeckResult, Named};

use crate::surface::Surface;

// =============================================================================
// SURFACE ID
// =============================================================================

/// Handle to a surface stored in a [`SurfaceArena`].
///
/// Handles are only produced by [`SurfaceArena::insert`] and stay valid for
/// the lifetime of the arena (surfaces are created once per problem and
/// never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(u32);

impl SurfaceId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the surface in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SURFACE ARENA
// =============================================================================

/// The surfaces of one problem definition, addressed by [`SurfaceId`] and
/// indexed by name.
///
/// ## Example
///
/// ```rust
/// use deck_geometry::{Axis, AxisCylinder, SurfaceArena};
///
/// let mut surfaces = SurfaceArena::new();
/// let id = surfaces.insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into()).unwrap();
/// assert_eq!(surfaces.lookup("pin"), Some(id));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfaceArena {
    surfaces: Vec<Surface>,
    by_name: HashMap<String, SurfaceId>,
}

impl SurfaceArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface, enforcing collection-unique names.
    ///
    /// Fails with [`DeckError::Naming`] when a surface with the same name
    /// is already present.
    pub fn insert(&mut self, surface: Surface) -> DeckResult<SurfaceId> {
        if self.by_name.contains_key(surface.name()) {
            return Err(DeckError::Naming(format!(
                "a surface named '{}' already exists in this problem",
                surface.name()
            )));
        }
        let id = SurfaceId::from_index(self.surfaces.len());
        self.by_name.insert(surface.name().to_string(), id);
        self.surfaces.push(surface);
        Ok(id)
    }

    /// The surface behind a handle, or `None` for a handle from another
    /// arena.
    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.index())
    }

    /// Mutable access for transforms.
    ///
    /// Renames must go through [`SurfaceArena::rename`] instead, so the
    /// name index stays consistent.
    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id.index())
    }

    /// Rename a surface, keeping the name index in sync.
    pub fn rename(&mut self, id: SurfaceId, name: &str) -> DeckResult<()> {
        if self.by_name.contains_key(name) {
            return Err(DeckError::Naming(format!(
                "a surface named '{}' already exists in this problem",
                name
            )));
        }
        let surface = self.surfaces.get_mut(id.index()).ok_or_else(|| {
            DeckError::Configuration(format!(
                "surface handle {} does not belong to this arena",
                id.index()
            ))
        })?;
        let old = surface.name().to_string();
        surface.rename(name)?;
        self.by_name.remove(&old);
        self.by_name.insert(name.to_string(), id);
        Ok(())
    }

    /// Find a surface by name.
    pub fn lookup(&self, name: &str) -> Option<SurfaceId> {
        self.by_name.get(name).copied()
    }

    /// Iterate surfaces in insertion order with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId::from_index(i), s))
    }

    /// Number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the arena holds no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl Index<SurfaceId> for SurfaceArena {
    type Output = Surface;

    fn index(&self, id: SurfaceId) -> &Surface {
        &self.surfaces[id.index()]
    }
}

impl IndexMut<SurfaceId> for SurfaceArena {
    fn index_mut(&mut self, id: SurfaceId) -> &mut Surface {
        &mut self.surfaces[id.index()]
    }
}

// =============================================================================
// TESTS
// =============================================================================
