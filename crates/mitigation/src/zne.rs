use crate::config::ExtrapolationConfig;
use crate::error::{MitigationError, Result};
use crate::fit::{distinct_count, fit_linear, LinearFit};
use crate::trials::{average_trials, TrialStream};
use quantum::{Circuit, Observable, QuantumState};
use tracing::{debug, info};

/// Per-level averages and the line fitted through them.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostics {
    /// aligned with `ExtrapolationConfig::noise_levels`
    pub averages: Vec<f64>,
    pub fit: LinearFit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Extrapolation {
    /// fitted value at zero noise
    pub mitigated: f64,
    pub diagnostics: Option<Diagnostics>,
}

fn validate(config: &ExtrapolationConfig) -> Result<()> {
    if config.samples_per_circuit == 0 {
        return Err(MitigationError::InvalidArgument(
            "samples_per_circuit must be at least 1".to_string(),
        ));
    }
    if config.circuits.len() != config.noise_levels.len() {
        return Err(MitigationError::InvalidArgument(format!(
            "{} circuits but {} noise levels",
            config.circuits.len(),
            config.noise_levels.len()
        )));
    }
    if let Some(p) = config.noise_levels.iter().find(|p| !p.is_finite()) {
        return Err(MitigationError::InvalidArgument(format!(
            "noise level {} is not finite",
            p
        )));
    }
    let distinct = distinct_count(&config.noise_levels);
    if distinct < 2 {
        return Err(MitigationError::InsufficientData {
            distinct,
            required: 2,
        });
    }
    Ok(())
}

/// Linear zero-noise extrapolation.
///
/// Every trial runs on a private copy of `initial_state`; the template
/// itself is only read. Levels are processed in input order and the
/// intercept of the least-squares line through `(noise, mean)` is returned
/// as the mitigated value.
pub fn extrapolate_linear(
    config: &ExtrapolationConfig,
    initial_state: &QuantumState,
) -> Result<Extrapolation> {
    validate(config)?;

    let mut averages = Vec::with_capacity(config.circuits.len());
    for (level, (circuit, &noise)) in config
        .circuits
        .iter()
        .zip(&config.noise_levels)
        .enumerate()
    {
        let stream = TrialStream {
            seed: &config.seed,
            label: b"zne",
            level,
        };
        let mean = average_trials(config.samples_per_circuit, stream, |rng| {
            let mut state = initial_state.clone();
            circuit.update_quantum_state(&mut state, rng)?;
            config.observable.expectation(&state)
        })?;

        debug!(level, noise, mean, "noise level sampled");
        averages.push(mean);
    }

    let fit = fit_linear(&config.noise_levels, &averages)?;
    info!(
        mitigated = fit.intercept,
        slope = fit.slope,
        levels = averages.len(),
        "linear extrapolation"
    );

    Ok(Extrapolation {
        mitigated: fit.intercept,
        diagnostics: config
            .return_diagnostics
            .then(|| Diagnostics { averages, fit }),
    })
}

/// Exact expectation value of the circuit's deterministic part applied to a
/// copy of `initial_state`.
pub fn noiseless_expectation(
    circuit: &Circuit,
    initial_state: &QuantumState,
    observable: &Observable,
) -> Result<f64> {
    let mut state = initial_state.clone();
    circuit.apply_ideal(&mut state)?;
    Ok(observable.expectation(&state)?)
}
