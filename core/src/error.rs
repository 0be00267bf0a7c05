use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("no {0} has been installed")]
    MissingInput(&'static str),

    #[error("geometry produced a world volume without a name")]
    MissingWorldVolume,

    #[error("engine has already been bootstrapped")]
    AlreadyBootstrapped,

    #[error("UI program name must not be empty")]
    EmptyProgramName,
}
