use thiserror::Error;

/// Errors raised while building or running circuits and observables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantumError {
    #[error("qubit index {qubit} out of range for {n_qubits}-qubit register")]
    QubitOutOfRange { qubit: usize, n_qubits: usize },

    #[error("qubit {qubit} used more than once in a single operation")]
    RepeatedQubit { qubit: usize },

    #[error("qubit count mismatch: expected {expected}, got {actual}")]
    QubitCountMismatch { expected: usize, actual: usize },

    #[error("probability #{index} = {value} is not in [0, 1]")]
    InvalidProbability { index: usize, value: f64 },

    #[error("branch probabilities sum to {total}, which exceeds 1")]
    ProbabilityOverflow { total: f64 },

    #[error("invalid Pauli string {input:?}: {reason}")]
    InvalidPauliString { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, QuantumError>;
