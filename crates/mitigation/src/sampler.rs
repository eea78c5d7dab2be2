use crate::config::SamplerConfig;
use crate::error::{MitigationError, Result};
use crate::trials::{average_trials, TrialStream};
use quantum::{QuantumError, QuantumState};
use tracing::{debug, info};

/// Mean expectation value at every depth in `[0, max_depth)`.
///
/// Each trial starts from |0…0⟩ and applies the circuit `depth` times, so
/// every probabilistic gate is redrawn once per application.
pub fn sample_depth_series(config: &SamplerConfig) -> Result<Vec<f64>> {
    if config.samples == 0 {
        return Err(MitigationError::InvalidArgument(
            "sample count must be at least 1".to_string(),
        ));
    }

    let n = config.circuit.n_qubits();
    if config.observable.n_qubits() != n {
        return Err(QuantumError::QubitCountMismatch {
            expected: n,
            actual: config.observable.n_qubits(),
        }
        .into());
    }

    let mut series = Vec::with_capacity(config.max_depth);
    for depth in 0..config.max_depth {
        let stream = TrialStream {
            seed: &config.seed,
            label: b"depth",
            level: depth,
        };
        let mean = average_trials(config.samples, stream, |rng| {
            let mut state = QuantumState::new(n);
            for _ in 0..depth {
                config.circuit.update_quantum_state(&mut state, rng)?;
            }
            config.observable.expectation(&state)
        })?;

        debug!(depth, mean, "depth sampled");
        series.push(mean);
    }

    info!(
        depths = config.max_depth,
        samples = config.samples,
        "depth sweep finished"
    );
    Ok(series)
}
