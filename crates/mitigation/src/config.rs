use quantum::{Circuit, Observable};

pub const DEFAULT_SEED: &str = "default-seed";

/// Parameters of a depth sweep: the circuit is applied `d` times for every
/// depth `d` in `[0, max_depth)`.
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    pub circuit: Circuit,
    pub observable: Observable,
    pub max_depth: usize,
    /// Monte Carlo trials per depth
    pub samples: usize,
    pub seed: String,
}

impl SamplerConfig {
    pub fn new(circuit: Circuit, observable: Observable) -> Self {
        Self {
            circuit,
            observable,
            max_depth: 20,
            samples: 10_000,
            seed: DEFAULT_SEED.to_string(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }
}

/// Parameters of a linear zero-noise extrapolation.
///
/// `circuits[i]` must realise the noise strength `noise_levels[i]`.
#[derive(Clone, Debug)]
pub struct ExtrapolationConfig {
    pub circuits: Vec<Circuit>,
    pub noise_levels: Vec<f64>,
    pub observable: Observable,
    pub samples_per_circuit: usize,
    /// also return per-level averages and the fitted line
    pub return_diagnostics: bool,
    pub seed: String,
}

impl ExtrapolationConfig {
    pub fn new(circuits: Vec<Circuit>, noise_levels: Vec<f64>, observable: Observable) -> Self {
        Self {
            circuits,
            noise_levels,
            observable,
            samples_per_circuit: 1000,
            return_diagnostics: false,
            seed: DEFAULT_SEED.to_string(),
        }
    }

    /// Builds one circuit per noise level with `build`.
    pub fn from_levels<F, E>(noise_levels: Vec<f64>, observable: Observable, mut build: F) -> Result<Self, E>
    where
        F: FnMut(f64) -> Result<Circuit, E>,
    {
        let circuits = noise_levels
            .iter()
            .map(|&p| build(p))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self::new(circuits, noise_levels, observable))
    }

    pub fn with_samples(mut self, samples_per_circuit: usize) -> Self {
        self.samples_per_circuit = samples_per_circuit;
        self
    }

    pub fn with_diagnostics(mut self, return_diagnostics: bool) -> Self {
        self.return_diagnostics = return_diagnostics;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }
}
