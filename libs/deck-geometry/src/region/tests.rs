use glam::DVec3;

use deck_core::DeckError;

use crate::arena::{SurfaceArena, SurfaceId};
use crate::axis::Axis;
use crate::region::{RegionArena, RegionId, RegionLeaf, RegionVisitor};
use crate::surface::{AxisCylinder, AxisPlane, Parallelepiped, Surface};

fn fixture() -> (SurfaceArena, SurfaceId, SurfaceId, SurfaceId) {
    let mut surfaces = SurfaceArena::new();
    let c = surfaces
        .insert(AxisCylinder::new("c", Axis::Z, 1.0).unwrap().into())
        .unwrap();
    let p = surfaces
        .insert(AxisPlane::new("p", Axis::Z, 2.0).unwrap().into())
        .unwrap();
    let b = surfaces
        .insert(
            Parallelepiped::new("b", -1.0, 1.0, -1.0, 1.0, -1.0, 1.0)
                .unwrap()
                .into(),
        )
        .unwrap();
    (surfaces, c, p, b)
}

/// Records the traversal as a flat token sequence.
struct Trace {
    tokens: Vec<String>,
}

impl RegionVisitor for Trace {
    fn visit_leaf(&mut self, _id: RegionId, leaf: &RegionLeaf) {
        self.tokens
            .push(format!("leaf:{}", leaf.half_space.surface.index()));
    }

    fn visit_and(&mut self, _id: RegionId) {
        self.tokens.push("&".to_string());
    }

    fn visit_or(&mut self, _id: RegionId) {
        self.tokens.push("|".to_string());
    }
}

#[test]
fn test_sense_selectors_make_fresh_leaves() {
    let (_, c, _, _) = fixture();
    let mut regions = RegionArena::new();
    let first = regions.leaf(c.neg());
    let second = regions.leaf(c.neg());
    assert_ne!(first, second);
    assert_eq!(regions.len(), 2);
}

#[test]
fn test_leaf_comment_carries_sense_prefix() {
    let (surfaces, c, _, _) = fixture();
    let mut regions = RegionArena::new();
    let pos = regions.leaf(c.pos());
    let neg = regions.leaf(c.neg());
    assert_eq!(regions.comment(pos, &surfaces), "+c");
    assert_eq!(regions.comment(neg, &surfaces), "-c");
}

#[test]
fn test_comment_is_fully_parenthesized() {
    let (surfaces, c, p, b) = fixture();
    let mut regions = RegionArena::new();
    let lc = regions.leaf(c.neg());
    let lp = regions.leaf(p.pos());
    let lb = regions.leaf(b.neg());
    let and = regions.intersect(lc, lp).unwrap();
    let root = regions.union(and, lb).unwrap();
    assert_eq!(regions.comment(root, &surfaces), "((-c & +p) | -b)");
}

#[test]
fn test_association_changes_shape_not_leaf_count() {
    let (_, c, p, b) = fixture();

    // (a & b) & c
    let mut left_heavy = RegionArena::new();
    let (a1, b1, c1) = (
        left_heavy.leaf(c.neg()),
        left_heavy.leaf(p.neg()),
        left_heavy.leaf(b.neg()),
    );
    let ab = left_heavy.intersect(a1, b1).unwrap();
    let root_left = left_heavy.intersect(ab, c1).unwrap();

    // a & (b & c)
    let mut right_heavy = RegionArena::new();
    let (a2, b2, c2) = (
        right_heavy.leaf(c.neg()),
        right_heavy.leaf(p.neg()),
        right_heavy.leaf(b.neg()),
    );
    let bc = right_heavy.intersect(b2, c2).unwrap();
    let root_right = right_heavy.intersect(a2, bc).unwrap();

    let mut trace_left = Trace { tokens: Vec::new() };
    left_heavy.walk(root_left, &mut trace_left);
    let mut trace_right = Trace { tokens: Vec::new() };
    right_heavy.walk(root_right, &mut trace_right);

    // Different shapes...
    assert_ne!(
        left_heavy.node(root_left),
        right_heavy.node(root_right)
    );
    // ...but both visit exactly three leaves.
    let leaves = |trace: &Trace| {
        trace
            .tokens
            .iter()
            .filter(|t| t.starts_with("leaf"))
            .count()
    };
    assert_eq!(leaves(&trace_left), 3);
    assert_eq!(leaves(&trace_right), 3);
}

#[test]
fn test_walk_is_in_order() {
    let (_, c, p, b) = fixture();
    let mut regions = RegionArena::new();
    let lc = regions.leaf(c.neg());
    let lp = regions.leaf(p.pos());
    let lb = regions.leaf(b.neg());
    let and = regions.intersect(lc, lp).unwrap();
    let root = regions.union(and, lb).unwrap();

    let mut trace = Trace { tokens: Vec::new() };
    regions.walk(root, &mut trace);
    assert_eq!(
        trace.tokens,
        vec!["leaf:0", "&", "leaf:1", "|", "leaf:2"]
    );

    // Walking again yields the same sequence; traversal is idempotent.
    let mut again = Trace { tokens: Vec::new() };
    regions.walk(root, &mut again);
    assert_eq!(trace.tokens, again.tokens);
}

#[test]
fn test_combination_records_parent() {
    let (_, c, p, _) = fixture();
    let mut regions = RegionArena::new();
    let lc = regions.leaf(c.neg());
    let lp = regions.leaf(p.pos());
    assert_eq!(regions.parent(lc), None);
    let and = regions.intersect(lc, lp).unwrap();
    assert_eq!(regions.parent(lc), Some(and));
    assert_eq!(regions.parent(lp), Some(and));
    assert_eq!(regions.parent(and), None);
}

#[test]
fn test_children_are_owned_exclusively() {
    let (_, c, p, b) = fixture();
    let mut regions = RegionArena::new();
    let lc = regions.leaf(c.neg());
    let lp = regions.leaf(p.pos());
    let lb = regions.leaf(b.neg());
    let and = regions.intersect(lc, lp).unwrap();

    match regions.union(lc, lb) {
        Err(DeckError::Configuration(msg)) => {
            assert!(msg.contains("already owned"), "{}", msg);
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
    // The failed call changed neither parent table entry.
    assert_eq!(regions.parent(lc), Some(and));
    assert_eq!(regions.parent(lb), None);
}

#[test]
fn test_self_combination_rejected() {
    let (_, c, _, _) = fixture();
    let mut regions = RegionArena::new();
    let lc = regions.leaf(c.neg());
    assert!(regions.intersect(lc, lc).is_err());
}

#[test]
fn test_region_shift_reaches_every_leaf() {
    let (mut surfaces, c, p, b) = fixture();
    let mut regions = RegionArena::new();
    let lp = regions.leaf(p.pos());
    let lb = regions.leaf(b.neg());
    let root = regions.intersect(lp, lb).unwrap();
    // The cylinder is not part of this region and must stay untouched.
    let _ = c;

    regions
        .shift(root, DVec3::new(0.0, 0.0, 3.0), &mut surfaces)
        .unwrap();
    match &surfaces[p] {
        Surface::Plane(plane) => assert_eq!(plane.position(), 5.0),
        other => panic!("expected plane, got {:?}", other),
    }
    match &surfaces[b] {
        Surface::Parallelepiped(pp) => {
            assert_eq!(pp.extent(Axis::Z).min(), 2.0);
            assert_eq!(pp.extent(Axis::Z).max(), 4.0);
            assert_eq!(pp.extent(Axis::X).min(), -1.0);
        }
        other => panic!("expected parallelepiped, got {:?}", other),
    }
}

#[test]
fn test_failed_region_transform_mutates_nothing() {
    let (mut surfaces, c, p, _) = fixture();
    let mut regions = RegionArena::new();
    let lp = regions.leaf(p.pos());
    let lc = regions.leaf(c.neg());
    let root = regions.intersect(lp, lc).unwrap();

    // Off-axis shift is illegal for the cylinder; the plane (validated
    // first in traversal order) must not move either.
    let result = regions.shift(root, DVec3::new(1.0, 0.0, 0.0), &mut surfaces);
    assert!(matches!(result, Err(DeckError::Geometry(_))));
    match &surfaces[p] {
        Surface::Plane(plane) => assert_eq!(plane.position(), 2.0),
        other => panic!("expected plane, got {:?}", other),
    }
}

#[test]
fn test_shared_surface_is_mutated_once_per_leaf() {
    let (mut surfaces, _, p, _) = fixture();
    let mut regions = RegionArena::new();
    // Two leaves over the same plane handle: one surface, two paths.
    let first = regions.leaf(p.pos());
    let second = regions.leaf(p.neg());
    let root = regions.intersect(first, second).unwrap();

    regions
        .shift(root, DVec3::new(0.0, 0.0, 1.0), &mut surfaces)
        .unwrap();
    match &surfaces[p] {
        // Shifted once per reachable leaf: 2.0 + 1.0 + 1.0.
        Surface::Plane(plane) => assert_eq!(plane.position(), 4.0),
        other => panic!("expected plane, got {:?}", other),
    }
}

#[test]
fn test_stretch_propagates_to_shared_surface() {
    // End-to-end: cylinder c, z axis, radius 1; region = c.neg;
    // stretching the region by (2, 2, 0) doubles the cylinder radius
    // while the comment text (name-based) is unchanged.
    let mut surfaces = SurfaceArena::new();
    let c = surfaces
        .insert(AxisCylinder::new("c", Axis::Z, 1.0).unwrap().into())
        .unwrap();
    let mut regions = RegionArena::new();
    let root = regions.leaf(c.neg());

    let before = regions.comment(root, &surfaces);
    regions
        .stretch(root, DVec3::new(2.0, 2.0, 0.0), &mut surfaces)
        .unwrap();
    match &surfaces[c] {
        Surface::Cylinder(cyl) => assert_eq!(cyl.radius(), 2.0),
        other => panic!("expected cylinder, got {:?}", other),
    }
    assert_eq!(regions.comment(root, &surfaces), before);
    assert_eq!(before, "-c");
}

#[test]
fn test_named_leaf_validation() {
    let (_, c, _, _) = fixture();
    let mut regions = RegionArena::new();
    assert!(regions.named_leaf(c.neg(), "").is_err());
    let id = regions.named_leaf(c.neg(), "inside").unwrap();
    match regions.node(id) {
        crate::region::RegionNode::Leaf(leaf) => {
            assert_eq!(leaf.name.as_deref(), Some("inside"));
        }
        other => panic!("expected leaf, got {:?}", other),
    }
}
