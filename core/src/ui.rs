//! Session configuration for the interactive front end.
//!
//! Only the construction-time shape lives here. Driving the front end
//! (macros, command application, event loops) belongs to the engine side
//! and is not part of the staged protocol.

use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

/// Front-end configuration recorded by [`RunManager::ui`].
///
/// [`RunManager::ui`]: crate::run_manager::RunManager::ui
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    program_name: String,
    args: Vec<String>,
    warn_empty_run: bool,
}

impl UiConfig {
    pub fn new(program_name: impl Into<String>, args: &[String], warn_empty_run: bool) -> Self {
        Self {
            program_name: program_name.into(),
            args: args.to_vec(),
            warn_empty_run,
        }
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub const fn warn_empty_run(&self) -> bool {
        self.warn_empty_run
    }

    pub(crate) fn warn_if_empty_run(&self) {
        if self.warn_empty_run && self.args.is_empty() {
            warn!(
                program = %self.program_name,
                "no run arguments were given; the session will not start a run"
            );
        }
    }
}
