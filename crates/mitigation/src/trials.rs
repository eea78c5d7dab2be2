use quantum::QuantumError;
use rayon::prelude::*;
use rng::StreamRng;

/// Identity of one batch of trials. Each trial draws from its own stream
/// derived from `(seed, label, level, trial index)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TrialStream<'a> {
    pub seed: &'a str,
    pub label: &'static [u8],
    pub level: usize,
}

impl TrialStream<'_> {
    fn rng(&self, trial: usize) -> StreamRng {
        StreamRng::from_parts(&[
            self.seed.as_bytes(),
            self.label,
            &(self.level as u64).to_be_bytes(),
            &(trial as u64).to_be_bytes(),
        ])
    }
}

/// Mean of `samples` independent trials run on the rayon pool.
///
/// Per-trial values are summed in trial order, so the result does not
/// depend on the number of worker threads. The first failing trial aborts
/// the batch.
pub(crate) fn average_trials<F>(
    samples: usize,
    stream: TrialStream<'_>,
    trial: F,
) -> Result<f64, QuantumError>
where
    F: Fn(&mut StreamRng) -> Result<f64, QuantumError> + Sync,
{
    debug_assert!(samples > 0, "average_trials needs at least one sample");

    let values: Vec<f64> = (0..samples)
        .into_par_iter()
        .map(|t| {
            let mut rng = stream.rng(t);
            trial(&mut rng)
        })
        .collect::<Result<_, _>>()?;

    let mut total = 0.0;
    for v in values {
        total += v;
    }

    Ok(total / samples as f64)
}
