//! Type-state construction protocol for the simulation run manager.
//!
//! Usage:
//!
//! ```text
//! let run = RunManager::create()
//!     .ui("my-app", &args, true)   // or .headless() for tests
//!     .physics(my_physics)
//!     .geometry(my_geometry)
//!     .actions(my_actions)
//!     .initialize()?;
//! ```
//!
//! Each step offers two provision styles (physics as the example):
//! `.physics(a_physics_list_instance)` and
//! `.physics_with(zero_arg_fn_returning_a_physics_list)`.
//!
//! The engine requires the physics list to be set before the action set is
//! instantiated. The chain imposes a stricter total order than strictly
//! necessary, with no loss of generality.

use std::marker::PhantomData;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use tracing::info;
use tracing::warn;

use crate::engine::Engine;
use crate::error::CoreError;
use crate::error::CoreResult;
use crate::parts::Actions;
use crate::parts::Geometry;
use crate::parts::PhysicsList;
use crate::parts::WorldVolume;
use crate::stage::ActionsReady;
use crate::stage::GeometryReady;
use crate::stage::Idle;
use crate::stage::PhysicsReady;
use crate::stage::Ready;
use crate::stage::Stage;
use crate::stage::UiReady;
use crate::ui::UiConfig;

static CREATE_CALLED: AtomicBool = AtomicBool::new(false);

/// Staged builder for a simulation run.
///
/// The stage type parameter records which configuration steps have been
/// taken; only the legal next steps are implemented for a given stage, so
/// the single call order that reaches [`initialize`] is
/// `create` → (`ui` | `headless`) → `physics` → `geometry` → `actions` →
/// `initialize`, with the UI step optional. A misordered call is a missing
/// method on the current stage's type, not a runtime error.
///
/// Every transition consumes `self`, so a partially-configured value bound
/// to a variable cannot be used twice.
///
/// [`initialize`]: RunManager::initialize
pub struct RunManager<S: Stage> {
    engine: Engine,
    ui: Option<UiConfig>,
    _stage: PhantomData<S>,
}

impl<S: Stage> RunManager<S> {
    fn advance<T: Stage>(self) -> RunManager<T> {
        RunManager {
            engine: self.engine,
            ui: self.ui,
            _stage: PhantomData,
        }
    }

    fn install_physics(mut self, physics: Box<dyn PhysicsList>) -> RunManager<PhysicsReady> {
        self.engine.install_physics(physics);
        self.advance()
    }
}

impl RunManager<Idle> {
    /// Start a new construction chain.
    pub fn create() -> Self {
        if CREATE_CALLED.swap(true, Ordering::SeqCst) {
            warn!("RunManager::create called more than once in this process");
        }
        RunManager {
            engine: Engine::new(),
            ui: None,
            _stage: PhantomData,
        }
    }

    /// Configure the interactive front end.
    pub fn ui(
        mut self,
        program_name: impl Into<String>,
        args: &[String],
        warn_empty_run: bool,
    ) -> RunManager<UiReady> {
        self.ui = Some(UiConfig::new(program_name, args, warn_empty_run));
        self.advance()
    }

    /// Skip the front end entirely. Meant for tests and batch jobs.
    pub fn headless(self) -> RunManager<UiReady> {
        self.advance()
    }
}

// The physics step is reachable both straight from `create()` and after
// the optional UI step.
macro_rules! physics_step {
    ($stage:ty) => {
        impl RunManager<$stage> {
            /// Supply the physics list.
            pub fn physics(self, physics: impl PhysicsList) -> RunManager<PhysicsReady> {
                self.install_physics(Box::new(physics))
            }

            /// Supply the physics list from a zero-argument builder function.
            pub fn physics_with<P, F>(self, build: F) -> RunManager<PhysicsReady>
            where
                P: PhysicsList,
                F: FnOnce() -> P,
            {
                self.install_physics(Box::new(build()))
            }
        }
    };
}

physics_step!(Idle);
physics_step!(UiReady);

impl RunManager<PhysicsReady> {
    /// Supply the detector description.
    pub fn geometry(mut self, geometry: impl Geometry) -> RunManager<GeometryReady> {
        self.engine.install_geometry(Box::new(geometry));
        self.advance()
    }

    /// Supply the detector description from a zero-argument builder function.
    pub fn geometry_with<G, F>(self, build: F) -> RunManager<GeometryReady>
    where
        G: Geometry,
        F: FnOnce() -> G,
    {
        self.geometry(build())
    }
}

impl RunManager<GeometryReady> {
    /// Supply the user actions.
    pub fn actions(mut self, actions: impl Actions) -> RunManager<ActionsReady> {
        self.engine.install_actions(Box::new(actions));
        self.advance()
    }

    /// Supply the user actions from a zero-argument builder function.
    pub fn actions_with<A, F>(self, build: F) -> RunManager<ActionsReady>
    where
        A: Actions,
        F: FnOnce() -> A,
    {
        self.actions(build())
    }
}

impl RunManager<ActionsReady> {
    /// Bootstrap the engine with the collected configuration.
    ///
    /// This is the only stage that exposes `initialize`; every mandatory
    /// input is guaranteed present by the preceding transitions. The
    /// remaining failure modes are runtime ones: a front end configured
    /// with an empty program name, or a geometry that constructs an
    /// unusable world.
    pub fn initialize(mut self) -> CoreResult<RunManager<Ready>> {
        if let Some(ui) = &self.ui {
            if ui.program_name().is_empty() {
                return Err(CoreError::EmptyProgramName);
            }
            ui.warn_if_empty_run();
        }
        self.engine.bootstrap()?;
        info!(stage = Ready::name(), "run manager initialized");
        Ok(self.advance())
    }
}

impl RunManager<Ready> {
    /// The world volume constructed during initialization.
    pub fn world(&self) -> &WorldVolume {
        match self.engine.world() {
            Some(world) => world,
            None => unreachable!("bootstrap stores the world before Ready exists"),
        }
    }

    /// Label of the installed physics list.
    pub fn physics_label(&self) -> &str {
        match self.engine.physics_label() {
            Some(label) => label,
            None => unreachable!("physics is installed before Ready exists"),
        }
    }

    /// Front-end configuration, if one was supplied.
    pub fn ui_config(&self) -> Option<&UiConfig> {
        self.ui.as_ref()
    }
}
