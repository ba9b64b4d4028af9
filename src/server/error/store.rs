use thiserror::Error;

/// Failures of the key-value store backing cooldowns and telemetry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Redis command or connection failure.
    #[error(transparent)]
    Redis(#[from] redis::RedisError),

    /// A counter key held a value that is not an integer.
    #[error("Value at key '{0}' is not an integer")]
    NotAnInteger(String),
}
