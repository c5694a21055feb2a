use thiserror::Error;

/// Errors surfaced by the list fixture and the cycle detector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller broke a precondition, e.g. passed an absent head.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cycle position {pos} is out of range for a list of length {len}")]
    CyclePositionOutOfRange { pos: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
