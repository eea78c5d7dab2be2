use quantum::QuantumError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MitigationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("insufficient data: {distinct} distinct noise level(s), need at least {required}")]
    InsufficientData { distinct: usize, required: usize },

    /// Raised by the simulator; passed through unchanged.
    #[error(transparent)]
    Simulation(#[from] QuantumError),
}

pub type Result<T> = std::result::Result<T, MitigationError>;
