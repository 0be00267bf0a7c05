//! End-to-end checks of the single legal construction order.

use pretty_assertions::assert_eq;
use runstage_core::Actions;
use runstage_core::CoreError;
use runstage_core::Event;
use runstage_core::Geometry;
use runstage_core::PhysicsList;
use runstage_core::RunManager;
use runstage_core::WorldVolume;

struct WaterBox;

impl Geometry for WaterBox {
    fn construct(&self) -> WorldVolume {
        WorldVolume::new("water-box").with_half_extents([1.0, 1.0, 1.0])
    }
}

struct NamelessWorld;

impl Geometry for NamelessWorld {
    fn construct(&self) -> WorldVolume {
        WorldVolume::new("")
    }
}

struct ReferencePhysics;

impl PhysicsList for ReferencePhysics {
    fn label(&self) -> &str {
        "reference"
    }
}

struct GeantinoGun;

impl Actions for GeantinoGun {
    fn generate_primaries(&self, event: &mut Event) {
        event.add_primary("geantino", [1.0, 0.0, 0.0]);
    }
}

#[test]
fn headless_chain_reaches_ready() {
    let run = RunManager::create()
        .headless()
        .physics(ReferencePhysics)
        .geometry(WaterBox)
        .actions(GeantinoGun)
        .initialize()
        .expect("the canonical order must initialize");

    assert_eq!(run.world().name(), "water-box");
    assert_eq!(run.world().half_extents(), [1.0, 1.0, 1.0]);
    assert_eq!(run.physics_label(), "reference");
    assert!(run.ui_config().is_none());
}

#[test]
fn ui_chain_records_the_front_end() {
    let args = vec!["run.mac".to_string()];
    let run = RunManager::create()
        .ui("protocol-test", &args, true)
        .physics(ReferencePhysics)
        .geometry(WaterBox)
        .actions(GeantinoGun)
        .initialize()
        .expect("the UI order must initialize");

    let ui = run.ui_config().expect("UI was configured");
    assert_eq!(ui.program_name(), "protocol-test");
    assert_eq!(ui.args(), args.as_slice());
    assert!(ui.warn_empty_run());
}

#[test]
fn physics_may_be_supplied_without_a_front_end_step() {
    let run = RunManager::create()
        .physics(ReferencePhysics)
        .geometry(WaterBox)
        .actions(GeantinoGun)
        .initialize()
        .expect("skipping the optional UI step must initialize");

    assert_eq!(run.world().name(), "water-box");
}

#[test]
fn builder_function_styles_are_equivalent() {
    let run = RunManager::create()
        .headless()
        .physics_with(|| ReferencePhysics)
        .geometry_with(|| WaterBox)
        .actions_with(|| GeantinoGun)
        .initialize()
        .expect("builder-function provision must initialize");

    assert_eq!(run.world().name(), "water-box");
    assert_eq!(run.physics_label(), "reference");
}

#[test]
fn nameless_world_fails_initialization() {
    let result = RunManager::create()
        .headless()
        .physics(ReferencePhysics)
        .geometry(NamelessWorld)
        .actions(GeantinoGun)
        .initialize();

    assert!(matches!(result, Err(CoreError::MissingWorldVolume)));
}

#[test]
fn empty_program_name_fails_initialization() {
    let result = RunManager::create()
        .ui("", &[], false)
        .physics(ReferencePhysics)
        .geometry(WaterBox)
        .actions(GeantinoGun)
        .initialize();

    assert!(matches!(result, Err(CoreError::EmptyProgramName)));
}

#[test]
fn actions_feed_primaries_into_an_event() {
    let mut event = Event::new();
    GeantinoGun.generate_primaries(&mut event);

    assert_eq!(event.primaries().len(), 1);
    assert_eq!(event.primaries()[0].particle, "geantino");
    assert_eq!(event.primaries()[0].direction, [1.0, 0.0, 0.0]);
}
