use crate::error::{QuantumError, Result};
use crate::gates::{pauli_x, pauli_y, pauli_z, C64};
use crate::state::QuantumState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

impl Pauli {
    fn matrix(self) -> [[C64; 2]; 2] {
        match self {
            Pauli::X => pauli_x(),
            Pauli::Y => pauli_y(),
            Pauli::Z => pauli_z(),
        }
    }
}

/// `coefficient · P_{q0} ⊗ P_{q1} ⊗ …`; an empty factor list is the identity.
#[derive(Clone, Debug, PartialEq)]
pub struct PauliTerm {
    pub coefficient: f64,
    pub factors: Vec<(usize, Pauli)>,
}

impl PauliTerm {
    pub fn new(coefficient: f64, factors: Vec<(usize, Pauli)>) -> Self {
        Self {
            coefficient,
            factors,
        }
    }

    /// Parses `"Z 0 Z 1"`-style strings: whitespace-separated pairs of a
    /// Pauli letter and a qubit index. `I` factors are dropped.
    pub fn parse(coefficient: f64, input: &str) -> Result<Self> {
        let invalid = |reason: &str| QuantumError::InvalidPauliString {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() % 2 != 0 {
            return Err(invalid("expected <pauli> <index> pairs"));
        }

        let mut factors = Vec::with_capacity(tokens.len() / 2);
        for pair in tokens.chunks(2) {
            let pauli = match pair[0].to_ascii_uppercase().as_str() {
                "I" => None,
                "X" => Some(Pauli::X),
                "Y" => Some(Pauli::Y),
                "Z" => Some(Pauli::Z),
                _ => return Err(invalid(&format!("unknown Pauli {:?}", pair[0]))),
            };
            let qubit: usize = pair[1]
                .parse()
                .map_err(|_| invalid(&format!("bad qubit index {:?}", pair[1])))?;
            if let Some(p) = pauli {
                factors.push((qubit, p));
            }
        }

        Ok(Self::new(coefficient, factors))
    }

    fn validate(&self, n_qubits: usize) -> Result<()> {
        for (i, &(q, _)) in self.factors.iter().enumerate() {
            if q >= n_qubits {
                return Err(QuantumError::QubitOutOfRange { qubit: q, n_qubits });
            }
            if self.factors[..i].iter().any(|&(other, _)| other == q) {
                return Err(QuantumError::RepeatedQubit { qubit: q });
            }
        }
        Ok(())
    }

    /// Re⟨ψ|P|ψ⟩ without the coefficient or normalisation.
    fn raw_expectation(&self, state: &QuantumState) -> f64 {
        let psi = state.mps();
        if self.factors.is_empty() {
            return psi.norm_sqr();
        }
        let mut p_psi = psi.clone();
        for &(q, p) in &self.factors {
            p_psi.apply_1q(q, p.matrix());
        }
        psi.overlap(&p_psi).re
    }
}

/// Weighted sum of Pauli strings on a fixed-width register.
#[derive(Clone, Debug, PartialEq)]
pub struct Observable {
    n_qubits: usize,
    terms: Vec<PauliTerm>,
}

impl Observable {
    pub fn new(n_qubits: usize) -> Self {
        Self {
            n_qubits,
            terms: Vec::new(),
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    pub fn add_term(&mut self, term: PauliTerm) -> Result<&mut Self> {
        term.validate(self.n_qubits)?;
        self.terms.push(term);
        Ok(self)
    }

    pub fn add_operator(&mut self, coefficient: f64, pauli: &str) -> Result<&mut Self> {
        self.add_term(PauliTerm::parse(coefficient, pauli)?)
    }

    /// ⟨ψ|O|ψ⟩ / ⟨ψ|ψ⟩. Returns 0 for a zero-norm state.
    pub fn expectation(&self, state: &QuantumState) -> Result<f64> {
        state.check_width(self.n_qubits)?;

        let norm = state.mps().norm_sqr();
        if norm == 0.0 {
            return Ok(0.0);
        }

        let mut e = 0.0;
        for term in &self.terms {
            e += term.coefficient * term.raw_expectation(state);
        }
        Ok(e / norm)
    }
}
