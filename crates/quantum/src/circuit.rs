use crate::error::{QuantumError, Result};
use crate::operation::Operation;
use crate::state::QuantumState;
use rng::StreamRng;

const PROBABILITY_SLACK: f64 = 1e-12;

/// Stochastic choice among deterministic alternatives.
///
/// Branch probabilities may sum to less than one; the remainder selects the
/// identity. A new branch is drawn every time the gate is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Probabilistic {
    branches: Vec<(f64, Operation)>,
}

impl Probabilistic {
    pub fn new(branches: Vec<(f64, Operation)>) -> Result<Self> {
        let mut total = 0.0;
        for (index, &(p, _)) in branches.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(QuantumError::InvalidProbability { index, value: p });
            }
            total += p;
        }
        if total > 1.0 + PROBABILITY_SLACK {
            return Err(QuantumError::ProbabilityOverflow { total });
        }
        Ok(Self { branches })
    }

    pub fn branches(&self) -> &[(f64, Operation)] {
        &self.branches
    }

    /// Draws one uniform number and returns the selected branch, or `None`
    /// for the identity remainder.
    pub fn sample(&self, rng: &mut StreamRng) -> Option<&Operation> {
        let x = rng.next_f64();
        let mut acc = 0.0;
        for (p, op) in &self.branches {
            acc += p;
            if x < acc {
                return Some(op);
            }
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
    Unitary(Operation),
    Probabilistic(Probabilistic),
}

impl Gate {
    fn validate(&self, n_qubits: usize) -> Result<()> {
        match self {
            Gate::Unitary(op) => op.validate(n_qubits),
            Gate::Probabilistic(pg) => pg
                .branches()
                .iter()
                .try_for_each(|(_, op)| op.validate(n_qubits)),
        }
    }
}

impl From<Operation> for Gate {
    fn from(op: Operation) -> Self {
        Gate::Unitary(op)
    }
}

impl From<Probabilistic> for Gate {
    fn from(pg: Probabilistic) -> Self {
        Gate::Probabilistic(pg)
    }
}

/// Ordered gate list on a fixed-width register.
#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    n_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            gates: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn has_noise(&self) -> bool {
        self.gates
            .iter()
            .any(|g| matches!(g, Gate::Probabilistic(_)))
    }

    pub fn add_gate(&mut self, gate: impl Into<Gate>) -> Result<&mut Self> {
        let gate = gate.into();
        gate.validate(self.n_qubits)?;
        self.gates.push(gate);
        Ok(self)
    }

    pub fn add_x(&mut self, q: usize) -> Result<&mut Self> {
        self.add_gate(Operation::X(q))
    }

    pub fn add_h(&mut self, q: usize) -> Result<&mut Self> {
        self.add_gate(Operation::H(q))
    }

    pub fn add_rx(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(Operation::Rx(q, theta))
    }

    pub fn add_ry(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(Operation::Ry(q, theta))
    }

    pub fn add_rz(&mut self, q: usize, theta: f64) -> Result<&mut Self> {
        self.add_gate(Operation::Rz(q, theta))
    }

    pub fn add_cnot(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.add_gate(Operation::Cnot { control, target })
    }

    pub fn add_cz(&mut self, a: usize, b: usize) -> Result<&mut Self> {
        self.add_gate(Operation::Cz(a, b))
    }

    pub fn add_probabilistic(&mut self, branches: Vec<(f64, Operation)>) -> Result<&mut Self> {
        self.add_gate(Probabilistic::new(branches)?)
    }

    /// Applies every gate in order, drawing a fresh branch for each
    /// probabilistic gate.
    pub fn update_quantum_state(&self, state: &mut QuantumState, rng: &mut StreamRng) -> Result<()> {
        state.check_width(self.n_qubits)?;
        for gate in &self.gates {
            match gate {
                Gate::Unitary(op) => state.apply(op)?,
                Gate::Probabilistic(pg) => {
                    if let Some(op) = pg.sample(rng) {
                        state.apply(op)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Applies only the deterministic gates; probabilistic gates act as the
    /// identity.
    pub fn apply_ideal(&self, state: &mut QuantumState) -> Result<()> {
        state.check_width(self.n_qubits)?;
        for gate in &self.gates {
            if let Gate::Unitary(op) = gate {
                state.apply(op)?;
            }
        }
        Ok(())
    }

    /// Copy of this circuit with every probabilistic gate removed.
    pub fn noise_free(&self) -> Circuit {
        Circuit {
            n_qubits: self.n_qubits,
            gates: self
                .gates
                .iter()
                .filter(|g| matches!(g, Gate::Unitary(_)))
                .cloned()
                .collect(),
        }
    }
}
