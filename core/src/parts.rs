//! Opaque configuration inputs consumed by the run manager.
//!
//! The run manager does not care what a physics list or a detector
//! description actually is; it only shuttles them into the engine in the
//! right order. These traits are the seams where real implementations (or
//! test stand-ins) plug in.

use serde::Deserialize;
use serde::Serialize;

/// The world container produced by a [`Geometry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldVolume {
    name: String,
    half_extents: [f64; 3],
}

impl WorldVolume {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            half_extents: [1.0; 3],
        }
    }

    pub fn with_half_extents(mut self, half_extents: [f64; 3]) -> Self {
        self.half_extents = half_extents;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn half_extents(&self) -> [f64; 3] {
        self.half_extents
    }
}

/// A primary particle injected at the start of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primary {
    pub particle: String,
    pub direction: [f64; 3],
}

/// Event skeleton handed to [`Actions::generate_primaries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    primaries: Vec<Primary>,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_primary(&mut self, particle: impl Into<String>, direction: [f64; 3]) {
        self.primaries.push(Primary {
            particle: particle.into(),
            direction,
        });
    }

    pub fn primaries(&self) -> &[Primary] {
        &self.primaries
    }
}

/// Physics configuration for the run.
pub trait PhysicsList: 'static {
    /// Short identifier used in logs.
    fn label(&self) -> &str;
}

/// Detector description supplied to the run manager.
pub trait Geometry: 'static {
    /// Build the world volume for this detector description.
    fn construct(&self) -> WorldVolume;
}

/// User actions attached to the run, at minimum a primary generator.
pub trait Actions: 'static {
    /// Inject primary particles into a fresh event.
    fn generate_primaries(&self, event: &mut Event);
}
