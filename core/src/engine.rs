//! Stand-in for the underlying simulation engine being configured.
//!
//! The engine owns the configuration inputs as they are handed over, one
//! per construction stage, and turns them into a bootstrapped run. It is
//! deliberately thin: what the engine does with a physics list after
//! bootstrap is outside the construction protocol.

use tracing::debug;
use tracing::info;

use crate::error::CoreError;
use crate::error::CoreResult;
use crate::parts::Actions;
use crate::parts::Geometry;
use crate::parts::PhysicsList;
use crate::parts::WorldVolume;

#[derive(Default)]
pub struct Engine {
    physics: Option<Box<dyn PhysicsList>>,
    geometry: Option<Box<dyn Geometry>>,
    actions: Option<Box<dyn Actions>>,
    world: Option<WorldVolume>,
    bootstrapped: bool,
}

impl Engine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn install_physics(&mut self, physics: Box<dyn PhysicsList>) {
        debug!(label = physics.label(), "physics list installed");
        self.physics = Some(physics);
    }

    pub(crate) fn install_geometry(&mut self, geometry: Box<dyn Geometry>) {
        debug!("geometry installed");
        self.geometry = Some(geometry);
    }

    pub(crate) fn install_actions(&mut self, actions: Box<dyn Actions>) {
        debug!("action set installed");
        self.actions = Some(actions);
    }

    /// Construct the world and commit the configuration.
    ///
    /// Errors if an input slot is empty, if the constructed world volume
    /// has no name, or if called twice.
    pub(crate) fn bootstrap(&mut self) -> CoreResult<()> {
        if self.bootstrapped {
            return Err(CoreError::AlreadyBootstrapped);
        }
        let physics = self
            .physics
            .as_ref()
            .ok_or(CoreError::MissingInput("physics list"))?;
        let geometry = self
            .geometry
            .as_ref()
            .ok_or(CoreError::MissingInput("geometry"))?;
        self.actions
            .as_ref()
            .ok_or(CoreError::MissingInput("action set"))?;

        let world = geometry.construct();
        check_world_volume(&world)?;

        info!(
            physics = physics.label(),
            world = world.name(),
            "engine bootstrapped"
        );
        self.world = Some(world);
        self.bootstrapped = true;
        Ok(())
    }

    pub fn world(&self) -> Option<&WorldVolume> {
        self.world.as_ref()
    }

    pub fn physics_label(&self) -> Option<&str> {
        self.physics.as_ref().map(|physics| physics.label())
    }

    pub const fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }
}

fn check_world_volume(world: &WorldVolume) -> CoreResult<()> {
    if world.name().is_empty() {
        return Err(CoreError::MissingWorldVolume);
    }
    Ok(())
}
