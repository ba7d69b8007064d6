use mh_core::CoreError;

/// Alias for `Result<T, HuntError>`.
pub type HuntResult<T> = Result<T, HuntError>;

/// Errors surfaced by the simulation.
#[derive(Debug, thiserror::Error)]
pub enum HuntError {
    /// A configuration value would make the simulation misbehave.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A state operation was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),
}
