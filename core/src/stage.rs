//! Construction stages of the run manager protocol.
//!
//! A stage is a marker type carried in the [`RunManager`] type parameter;
//! the set of methods implemented for a given stage is exactly the set of
//! legal next steps from that stage.
//!
//! [`RunManager`]: crate::run_manager::RunManager

use serde::Deserialize;
use serde::Serialize;

/// Trait for run manager construction stages.
pub trait Stage: 'static {}

/// Macro for declaring stages with automatic trait implementations.
#[macro_export]
macro_rules! define_stages {
    ($($stage:ident),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
            pub struct $stage;

            impl Stage for $stage {}

            impl $stage {
                pub const fn name() -> &'static str {
                    stringify!($stage)
                }
            }
        )*
    };
}

// The protocol chain. `Idle` is produced by `create()`; every other stage
// is reachable only through the single setter that targets it.
define_stages! {
    Idle,
    UiReady,
    PhysicsReady,
    GeometryReady,
    ActionsReady,
    Ready,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names() {
        assert_eq!(Idle::name(), "Idle");
        assert_eq!(UiReady::name(), "UiReady");
        assert_eq!(PhysicsReady::name(), "PhysicsReady");
        assert_eq!(GeometryReady::name(), "GeometryReady");
        assert_eq!(ActionsReady::name(), "ActionsReady");
        assert_eq!(Ready::name(), "Ready");
    }

    #[test]
    fn stage_markers_are_zero_sized() {
        use std::mem;

        assert_eq!(mem::size_of::<Idle>(), 0);
        assert_eq!(mem::size_of::<Ready>(), 0);
    }
}
