use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConformanceError>;

#[derive(Error, Debug)]
pub enum ConformanceError {
    #[error("duplicate scenario name: {name}")]
    DuplicateScenario { name: String },

    #[error("core crate directory not found: {}", .0.display())]
    MissingCoreDir(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
