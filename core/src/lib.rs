//! Compile-time staged bootstrap for a particle transport simulation engine.
//!
//! The entry point is [`RunManager`], a type-state builder that walks the
//! mandatory configuration steps of a simulation run in a fixed order:
//!
//! ```text
//! create() -> [ui() | headless()] -> physics() -> geometry() -> actions() -> initialize()
//! ```
//!
//! Each step consumes the current value and returns one typed at the
//! successor stage, so a skipped or misordered step is a *missing method*
//! on the value's type. There is no runtime "was this field set?" check
//! anywhere in the protocol; the absence of the method is the enforcement
//! mechanism.
//!
//! The engine requires the physics list to be installed before the action
//! set is instantiated, and the imposed total order costs no generality,
//! so the chain is strictly linear.
//!
//! # Example
//!
//! ```
//! use runstage_core::Actions;
//! use runstage_core::Event;
//! use runstage_core::Geometry;
//! use runstage_core::PhysicsList;
//! use runstage_core::RunManager;
//! use runstage_core::WorldVolume;
//!
//! struct AirBox;
//!
//! impl Geometry for AirBox {
//!     fn construct(&self) -> WorldVolume {
//!         WorldVolume::new("world").with_half_extents([1.0, 1.0, 1.0])
//!     }
//! }
//!
//! struct ReferencePhysics;
//!
//! impl PhysicsList for ReferencePhysics {
//!     fn label(&self) -> &str {
//!         "reference"
//!     }
//! }
//!
//! struct GeantinoGun;
//!
//! impl Actions for GeantinoGun {
//!     fn generate_primaries(&self, event: &mut Event) {
//!         event.add_primary("geantino", [1.0, 0.0, 0.0]);
//!     }
//! }
//!
//! let run = RunManager::create()
//!     .headless()
//!     .physics(ReferencePhysics)
//!     .geometry(AirBox)
//!     .actions(GeantinoGun)
//!     .initialize()?;
//!
//! assert_eq!(run.world().name(), "world");
//! # Ok::<(), runstage_core::CoreError>(())
//! ```
//!
//! Calling a step before its prerequisites does not compile:
//!
//! ```compile_fail
//! use runstage_core::RunManager;
//!
//! RunManager::create().initialize();
//! ```

pub mod engine;
pub mod error;
pub mod parts;
pub mod run_manager;
pub mod stage;
pub mod ui;

pub use engine::Engine;
pub use error::CoreError;
pub use error::CoreResult;
pub use parts::*;
pub use run_manager::RunManager;
pub use stage::*;
pub use ui::UiConfig;
