use crate::error::{QuantumError, Result};
use crate::gates::{
    cnot, cz, hadamard, pauli_x, pauli_y, pauli_z, phase_s, phase_t, rx, ry, rz, swap, C64,
};

/// A deterministic gate on named qubits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    X(usize),
    Y(usize),
    Z(usize),
    H(usize),
    S(usize),
    T(usize),
    Rx(usize, f64),
    Ry(usize, f64),
    Rz(usize, f64),
    Cnot { control: usize, target: usize },
    Cz(usize, usize),
    Swap(usize, usize),
}

/// Dense matrix of an operation together with the qubits it acts on.
pub(crate) enum Unitary {
    Single(usize, [[C64; 2]; 2]),
    /// first tensor factor acts on the first qubit
    Pair(usize, usize, [[C64; 4]; 4]),
}

impl Operation {
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Operation::X(q)
            | Operation::Y(q)
            | Operation::Z(q)
            | Operation::H(q)
            | Operation::S(q)
            | Operation::T(q)
            | Operation::Rx(q, _)
            | Operation::Ry(q, _)
            | Operation::Rz(q, _) => vec![q],
            Operation::Cnot { control, target } => vec![control, target],
            Operation::Cz(a, b) | Operation::Swap(a, b) => vec![a, b],
        }
    }

    /// Checks that every qubit exists in an `n_qubits` register and that a
    /// two-qubit operation names two different qubits.
    pub fn validate(&self, n_qubits: usize) -> Result<()> {
        let qubits = self.qubits();
        for &q in &qubits {
            if q >= n_qubits {
                return Err(QuantumError::QubitOutOfRange { qubit: q, n_qubits });
            }
        }
        if let [a, b] = qubits.as_slice() {
            if a == b {
                return Err(QuantumError::RepeatedQubit { qubit: *a });
            }
        }
        Ok(())
    }

    pub(crate) fn unitary(&self) -> Unitary {
        match *self {
            Operation::X(q) => Unitary::Single(q, pauli_x()),
            Operation::Y(q) => Unitary::Single(q, pauli_y()),
            Operation::Z(q) => Unitary::Single(q, pauli_z()),
            Operation::H(q) => Unitary::Single(q, hadamard()),
            Operation::S(q) => Unitary::Single(q, phase_s()),
            Operation::T(q) => Unitary::Single(q, phase_t()),
            Operation::Rx(q, theta) => Unitary::Single(q, rx(theta)),
            Operation::Ry(q, theta) => Unitary::Single(q, ry(theta)),
            Operation::Rz(q, theta) => Unitary::Single(q, rz(theta)),
            Operation::Cnot { control, target } => Unitary::Pair(control, target, cnot()),
            Operation::Cz(a, b) => Unitary::Pair(a, b, cz()),
            Operation::Swap(a, b) => Unitary::Pair(a, b, swap()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Operation;
    use crate::error::QuantumError;

    #[test]
    fn out_of_range_qubit() {
        let err = Operation::Cnot { control: 0, target: 2 }.validate(2).unwrap_err();
        assert_eq!(err, QuantumError::QubitOutOfRange { qubit: 2, n_qubits: 2 });
    }

    #[test]
    fn repeated_qubit() {
        let err = Operation::Cz(1, 1).validate(3).unwrap_err();
        assert_eq!(err, QuantumError::RepeatedQubit { qubit: 1 });
    }

    #[test]
    fn single_qubit_ok() {
        assert!(Operation::Ry(0, 0.3).validate(1).is_ok());
    }
}
