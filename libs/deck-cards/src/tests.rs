//! Crate-level tests building a small but complete problem definition.

use approx::assert_relative_eq;
use glam::DVec3;

use deck_core::{Commentable, Named};
use deck_geometry::{Axis, AxisCylinder, AxisPlane, Parallelepiped, RegionArena, Surface, SurfaceArena};

use crate::{
    Cell, CellArena, Criticality, CriticalityPoints, DensityUnits, Detector, DetectorKind,
    EnergyGrid, ExclusionRadius, Material, Particle, PointSpec, Tally, TallyBins,
};

/// An infinite-lattice pin cell: fuel cylinder, surrounding coolant box,
/// criticality source, and the tallies a user would actually ask for.
#[test]
fn test_full_pin_cell_deck() {
    let mut surfaces = SurfaceArena::new();
    let pin = surfaces
        .insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into())
        .unwrap();
    let bound = surfaces
        .insert(
            Parallelepiped::new("bound", -0.6, 0.6, -0.6, 0.6, 0.0, 100.0)
                .unwrap()
                .into(),
        )
        .unwrap();

    let mut regions = RegionArena::new();
    let in_pin = regions.leaf(pin.neg());
    let in_bound = regions.leaf(bound.neg());
    let out_pin = regions.leaf(pin.pos());
    let coolant_region = regions.intersect(in_bound, out_pin).unwrap();

    let mut uo2 = Material::new("UO2").unwrap();
    uo2.add_nuclide("U235", 0.05).unwrap();
    uo2.add_nuclide("U238", 0.95).unwrap();
    let mut water = Material::new("H2O").unwrap();
    water.add_nuclide("H1", 2.0).unwrap();
    water.add_nuclide("O16", 1.0).unwrap();

    let mut fuel = Cell::new("fuel", in_pin, uo2, 10.3, DensityUnits::MassDensity).unwrap();
    fuel.options_mut().set_temperature(900.0).unwrap();
    fuel.options_mut().set_importance(Particle::Neutron, 1.0).unwrap();
    let coolant = Cell::new(
        "coolant",
        coolant_region,
        water,
        1.0,
        DensityUnits::MassDensity,
    )
    .unwrap();

    let mut cells = CellArena::new();
    let fuel_id = cells.insert(fuel).unwrap();
    let coolant_id = cells.insert(coolant).unwrap();

    assert_eq!(
        cells[fuel_id].comment_in(&regions, &surfaces),
        "Cell 'fuel': region -pin, material 'UO2' density 10.3000 g/cm^3."
    );
    assert_eq!(
        cells[coolant_id].comment_in(&regions, &surfaces),
        "Cell 'coolant': region (-bound & +pin), material 'H2O' density \
         1.0000 g/cm^3."
    );

    let source = Criticality::defaults().unwrap();
    let points = CriticalityPoints::origin().unwrap();
    assert_eq!(source.name(), "criticality");
    assert_eq!(points.points(), &[DVec3::ZERO]);

    let flux = Tally::cell_flux(
        "pin flux",
        Particle::Neutron.into(),
        TallyBins::List(vec![fuel_id, coolant_id]),
        true,
        false,
    )
    .unwrap();
    assert_eq!(
        flux.comment(),
        "Cell flux tally 'pin flux' of neutrons: cells 0, 1; and avg. of \
         all provided."
    );

    let grid = EnergyGrid::for_tally("thermal split", "pin flux", vec![1e-6, 6.25e-7, 20.0])
        .err();
    // Boundaries out of order are caught at construction.
    assert!(grid.is_some());
    EnergyGrid::for_tally("thermal split", "pin flux", vec![6.25e-7, 1e-6, 20.0]).unwrap();
}

/// Cards hold handles, not copies: geometry mutated after a tally is built
/// is visible through the tally's bins.
#[test]
fn test_tally_bins_see_later_transforms() {
    let mut surfaces = SurfaceArena::new();
    let top = surfaces
        .insert(AxisPlane::new("top", Axis::Z, 100.0).unwrap().into())
        .unwrap();
    let mut regions = RegionArena::new();
    let below = regions.leaf(top.neg());

    let leakage = Tally::surface_current(
        "leakage",
        Particle::Neutron.into(),
        TallyBins::Single(top),
        false,
        false,
    )
    .unwrap();
    let before = leakage.comment();

    regions
        .shift(below, DVec3::new(0.0, 0.0, 50.0), &mut surfaces)
        .unwrap();
    match &surfaces[top] {
        Surface::Plane(plane) => assert_eq!(plane.position(), 150.0),
        other => panic!("expected plane, got {:?}", other),
    }
    // The tally still points at the same (now moved) surface.
    assert_eq!(leakage.comment(), before);
    match leakage.kind() {
        crate::TallyKind::SurfaceCurrent { bins, .. } => {
            assert_eq!(bins.unique_ids(), vec![top]);
        }
        other => panic!("expected surface current, got {:?}", other),
    }
}

#[test]
fn test_temperature_converts_to_kt() {
    let mut cells = CellArena::new();
    let mut regions = RegionArena::new();
    let mut surfaces = SurfaceArena::new();
    let pin = surfaces
        .insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into())
        .unwrap();
    let region = regions.leaf(pin.neg());

    let mut cell = Cell::void("hot", region).unwrap();
    cell.options_mut().set_temperature(293.6).unwrap();
    let id = cells.insert(cell).unwrap();

    // Room temperature corresponds to the conventional 2.53e-8 MeV.
    let kt = cells[id].options().temperature_kt().unwrap();
    assert_relative_eq!(kt, 2.53e-8, max_relative = 1e-3);
}

#[test]
fn test_detector_references_nothing_but_space() {
    // Detectors are standalone cards; they carry positions, not handles.
    let det = Detector::new(
        "corner",
        Particle::Neutron,
        DetectorKind::Point(vec![PointSpec {
            position: DVec3::new(1.0, 1.0, 1.0),
            exclusion: ExclusionRadius::mean_free_paths(2.0).unwrap(),
        }]),
        false,
    )
    .unwrap();
    assert!(det.comment().contains("2.0000 mean free paths"));
}

#[test]
fn test_card_renames_follow_identity_contract() {
    let mut surfaces = SurfaceArena::new();
    let pin = surfaces
        .insert(AxisCylinder::new("pin", Axis::Z, 0.4).unwrap().into())
        .unwrap();
    let mut regions = RegionArena::new();
    let region = regions.leaf(pin.neg());

    let mut cell = Cell::void("a", region).unwrap();
    cell.rename("b").unwrap();
    assert_eq!(cell.name(), "b");
    assert!(cell.rename("").is_err());
    assert_eq!(cell.name(), "b");

    let mut source = Criticality::defaults().unwrap();
    assert!(source.rename("anything").is_err());
}
