//! # Region Algebra
//!
//! Boolean combination trees over signed surface half-spaces.
//!
//! A region is a binary tree: leaves select one side (sense) of a surface,
//! internal nodes are intersections or unions of exactly two children and
//! carry no geometric data. Trees live in a [`RegionArena`]; nodes are
//! addressed by [`RegionId`] and the parent relation is kept in a side
//! table (child-id → parent-id), used for upward lookup only — traversal
//! is always driven downward from a root.
//!
//! ## Example
//!
//! ```rust
//! use deck_geometry::{Axis, AxisCylinder, AxisPlane, RegionArena, SurfaceArena};
//!
//! let mut surfaces = SurfaceArena::new();
//! let c = surfaces.insert(AxisCylinder::new("c", Axis::Z, 0.4).unwrap().into()).unwrap();
//! let p = surfaces.insert(AxisPlane::new("p", Axis::Z, 1.0).unwrap().into()).unwrap();
//!
//! let mut regions = RegionArena::new();
//! let inside = regions.leaf(c.neg());
//! let above = regions.leaf(p.pos());
//! let root = regions.union(inside, above).unwrap();
//! assert_eq!(regions.comment(root, &surfaces), "(-c | +p)");
//! ```

use glam::DVec3;
use serde::{Deserialize, Serialize};

use deck_core::{DeckError, DeckResult, Named};

use crate::arena::{SurfaceArena, SurfaceId};

#[cfg(test)]
mod tests;

// =============================================================================
// SENSE AND HALF-SPACE
// =============================================================================

/// Which side of a surface a region leaf occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    /// The positive half-space.
    Positive,
    /// The negative half-space.
    Negative,
}

impl Sense {
    /// The sign prefix used in diagnostic renderings ("+" or "-").
    pub fn prefix(self) -> &'static str {
        match self {
            Sense::Positive => "+",
            Sense::Negative => "-",
        }
    }
}

/// A signed surface selector: the building block of region leaves.
///
/// Produced by the [`SurfaceId::pos`] and [`SurfaceId::neg`] sense
/// selectors; each call yields a fresh, independently owned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfSpace {
    /// Handle of the selected surface.
    pub surface: SurfaceId,
    /// Which side of the surface is selected.
    pub sense: Sense,
}

impl SurfaceId {
    /// Select the positive half-space of this surface.
    pub fn pos(self) -> HalfSpace {
        HalfSpace {
            surface: self,
            sense: Sense::Positive,
        }
    }

    /// Select the negative half-space of this surface.
    pub fn neg(self) -> HalfSpace {
        HalfSpace {
            surface: self,
            sense: Sense::Negative,
        }
    }
}

// =============================================================================
// NODES
// =============================================================================

/// Handle to a region node stored in a [`RegionArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId(u32);

impl RegionId {
    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A leaf node: one signed surface reference, optionally named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionLeaf {
    /// The signed surface selector.
    pub half_space: HalfSpace,
    /// Optional leaf name, for referencing the leaf from other cards.
    pub name: Option<String>,
}

/// A node of the boolean region tree.
///
/// Only leaves reference surfaces; combination nodes own exactly two
/// children and carry no geometric data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegionNode {
    /// A signed surface half-space.
    Leaf(RegionLeaf),
    /// Intersection of the two children.
    And {
        /// Left child.
        left: RegionId,
        /// Right child.
        right: RegionId,
    },
    /// Union of the two children.
    Or {
        /// Left child.
        left: RegionId,
        /// Right child.
        right: RegionId,
    },
}

// =============================================================================
// VISITOR
// =============================================================================

/// In-order visitor over a region tree.
///
/// [`RegionArena::walk`] recurses into the left child, invokes the matching
/// combinator hook, then recurses into the right child; leaves invoke
/// [`RegionVisitor::visit_leaf`]. Traversal is idempotent and side-effect
/// free apart from visitor effects, so it is safe to repeat.
pub trait RegionVisitor {
    /// Called for every leaf, in left-to-right order.
    fn visit_leaf(&mut self, id: RegionId, leaf: &RegionLeaf);

    /// Called between the children of an intersection node.
    fn visit_and(&mut self, _id: RegionId) {}

    /// Called between the children of a union node.
    fn visit_or(&mut self, _id: RegionId) {}
}

/// Collects the surface handle of every leaf, in traversal order.
struct LeafSurfaces {
    surfaces: Vec<SurfaceId>,
}

impl RegionVisitor for LeafSurfaces {
    fn visit_leaf(&mut self, _id: RegionId, leaf: &RegionLeaf) {
        self.surfaces.push(leaf.half_space.surface);
    }
}

// =============================================================================
// REGION ARENA
// =============================================================================

/// The region trees of one problem definition.
///
/// Like [`SurfaceArena`], the region arena is owned by the problem
/// definition and is not safe for unsynchronized concurrent mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionArena {
    nodes: Vec<RegionNode>,
    /// Side table: parent of each node, if it has been combined.
    parents: Vec<Option<RegionId>>,
}

impl RegionArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unnamed leaf over the given half-space.
    pub fn leaf(&mut self, half_space: HalfSpace) -> RegionId {
        self.push(RegionNode::Leaf(RegionLeaf {
            half_space,
            name: None,
        }))
    }

    /// Add a named leaf; fails with [`DeckError::Naming`] on an empty name.
    pub fn named_leaf(&mut self, half_space: HalfSpace, name: &str) -> DeckResult<RegionId> {
        if name.is_empty() {
            return Err(DeckError::Naming(
                "region leaf name cannot be empty".to_string(),
            ));
        }
        Ok(self.push(RegionNode::Leaf(RegionLeaf {
            half_space,
            name: Some(name.to_string()),
        })))
    }

    /// Combine two regions into an intersection node.
    ///
    /// The new node owns `left` and `right` as its children and records
    /// itself as their parent. Fails with [`DeckError::Configuration`] when
    /// either operand is already owned by another combination (children are
    /// owned exclusively) or when the operands are the same node.
    pub fn intersect(&mut self, left: RegionId, right: RegionId) -> DeckResult<RegionId> {
        self.combine(left, right, true)
    }

    /// Combine two regions into a union node. Same ownership rules as
    /// [`RegionArena::intersect`].
    pub fn union(&mut self, left: RegionId, right: RegionId) -> DeckResult<RegionId> {
        self.combine(left, right, false)
    }

    fn combine(&mut self, left: RegionId, right: RegionId, and: bool) -> DeckResult<RegionId> {
        if left == right {
            return Err(DeckError::Configuration(format!(
                "region node {} cannot be combined with itself",
                left.index()
            )));
        }
        for child in [left, right] {
            if let Some(parent) = self.parent(child) {
                return Err(DeckError::Configuration(format!(
                    "region node {} is already owned by combination node {}",
                    child.index(),
                    parent.index()
                )));
            }
        }
        let id = if and {
            self.push(RegionNode::And { left, right })
        } else {
            self.push(RegionNode::Or { left, right })
        };
        self.parents[left.index()] = Some(id);
        self.parents[right.index()] = Some(id);
        Ok(id)
    }

    fn push(&mut self, node: RegionNode) -> RegionId {
        let id = RegionId::from_index(self.nodes.len());
        self.nodes.push(node);
        self.parents.push(None);
        id
    }

    /// The node behind a handle.
    pub fn node(&self, id: RegionId) -> &RegionNode {
        &self.nodes[id.index()]
    }

    /// Upward lookup: the combination node that owns `id`, if any.
    pub fn parent(&self, id: RegionId) -> Option<RegionId> {
        self.parents[id.index()]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // TRAVERSAL
    // =========================================================================

    /// In-order traversal of the tree rooted at `root`.
    pub fn walk<V: RegionVisitor>(&self, root: RegionId, visitor: &mut V) {
        match self.node(root) {
            RegionNode::Leaf(leaf) => visitor.visit_leaf(root, leaf),
            RegionNode::And { left, right } => {
                self.walk(*left, visitor);
                visitor.visit_and(root);
                self.walk(*right, visitor);
            }
            RegionNode::Or { left, right } => {
                self.walk(*left, visitor);
                visitor.visit_or(root);
                self.walk(*right, visitor);
            }
        }
    }

    /// Surface handles of every leaf under `root`, one entry per leaf
    /// occurrence, in traversal order.
    pub fn leaf_surfaces(&self, root: RegionId) -> Vec<SurfaceId> {
        let mut collector = LeafSurfaces {
            surfaces: Vec::new(),
        };
        self.walk(root, &mut collector);
        collector.surfaces
    }

    /// Canonical diagnostic rendering: `+name`/`-name` per leaf sense,
    /// `&` for intersection, `|` for union, fully parenthesized by
    /// recursive construction so the text mirrors the tree shape.
    pub fn comment(&self, root: RegionId, surfaces: &SurfaceArena) -> String {
        match self.node(root) {
            RegionNode::Leaf(leaf) => format!(
                "{}{}",
                leaf.half_space.sense.prefix(),
                surfaces[leaf.half_space.surface].name()
            ),
            RegionNode::And { left, right } => format!(
                "({} & {})",
                self.comment(*left, surfaces),
                self.comment(*right, surfaces)
            ),
            RegionNode::Or { left, right } => format!(
                "({} | {})",
                self.comment(*left, surfaces),
                self.comment(*right, surfaces)
            ),
        }
    }

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Shift every surface referenced under `root` by `offset`.
    ///
    /// Surfaces are mutated in place through the arena: every region leaf
    /// holding the same handle observes the change. A surface referenced by
    /// several leaves is shifted once per reachable leaf; this sharing is
    /// intentional. All leaves are validated before any surface mutates, so
    /// a failing leaf leaves the whole region untouched.
    pub fn shift(
        &self,
        root: RegionId,
        offset: DVec3,
        surfaces: &mut SurfaceArena,
    ) -> DeckResult<()> {
        let leaves = self.leaf_surfaces(root);
        for &id in &leaves {
            surfaces[id].check_shift(offset)?;
        }
        for &id in &leaves {
            surfaces[id].apply_shift(offset);
        }
        Ok(())
    }

    /// Stretch every surface referenced under `root` by per-axis `factors`.
    ///
    /// Same propagation and validation rules as [`RegionArena::shift`].
    pub fn stretch(
        &self,
        root: RegionId,
        factors: DVec3,
        surfaces: &mut SurfaceArena,
    ) -> DeckResult<()> {
        let leaves = self.leaf_surfaces(root);
        for &id in &leaves {
            surfaces[id].check_stretch(factors)?;
        }
        for &id in &leaves {
            surfaces[id].apply_stretch(factors);
        }
        Ok(())
    }
}
