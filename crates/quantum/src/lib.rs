pub mod circuit;
pub mod error;
pub mod gates;
pub mod noise;
pub mod observable;
pub mod operation;
pub mod state;

pub use circuit::{Circuit, Gate, Probabilistic};
pub use error::QuantumError;
pub use observable::{Observable, Pauli, PauliTerm};
pub use operation::Operation;
pub use state::QuantumState;
pub use tn::truncation::Truncation;
