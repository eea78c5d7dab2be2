use crate::error::{QuantumError, Result};
use crate::operation::{Operation, Unitary};
use tn::{mps::MPS, truncation::Truncation};

/// Pure state of a fixed-width qubit register, stored as an MPS.
///
/// `Clone` is a deep copy; `PartialEq` compares every amplitude bit for bit.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantumState {
    psi: MPS,
    trunc: Truncation,
}

impl QuantumState {
    /// |0…0⟩ on `n_qubits` qubits.
    pub fn new(n_qubits: usize) -> Self {
        Self::with_truncation(n_qubits, Truncation::default())
    }

    pub fn with_truncation(n_qubits: usize, trunc: Truncation) -> Self {
        Self {
            psi: MPS::new_zero(n_qubits),
            trunc,
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.psi.len()
    }

    pub fn truncation(&self) -> Truncation {
        self.trunc
    }

    /// Resets to |0…0⟩ in place.
    pub fn set_zero_state(&mut self) {
        self.psi = MPS::new_zero(self.psi.len());
    }

    pub fn mps(&self) -> &MPS {
        &self.psi
    }

    pub fn apply(&mut self, op: &Operation) -> Result<()> {
        op.validate(self.n_qubits())?;
        match op.unitary() {
            Unitary::Single(q, u) => self.psi.apply_1q(q, u),
            Unitary::Pair(a, b, u) => self.psi.apply_2q(a, b, u, self.trunc),
        }
        Ok(())
    }

    pub(crate) fn check_width(&self, expected: usize) -> Result<()> {
        if self.n_qubits() != expected {
            return Err(QuantumError::QubitCountMismatch {
                expected,
                actual: self.n_qubits(),
            });
        }
        Ok(())
    }
}
