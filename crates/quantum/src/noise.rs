use crate::circuit::Probabilistic;
use crate::error::Result;
use crate::operation::Operation;

/// X on qubit `q` with probability `p`.
pub fn bit_flip(q: usize, p: f64) -> Result<Probabilistic> {
    Probabilistic::new(vec![(p, Operation::X(q))])
}

/// Independent X, Y and Z kicks on qubit `q`.
pub fn pauli_channel(q: usize, px: f64, py: f64, pz: f64) -> Result<Probabilistic> {
    Probabilistic::new(vec![
        (px, Operation::X(q)),
        (py, Operation::Y(q)),
        (pz, Operation::Z(q)),
    ])
}

/// Single-qubit depolarizing channel ρ → (1-p)ρ + p·I/2, unravelled as
/// X, Y, Z each with probability p/4.
pub fn depolarizing(q: usize, p: f64) -> Result<Probabilistic> {
    let k = p / 4.0;
    pauli_channel(q, k, k, k)
}
