use mitigation::{
    extrapolate_linear, noiseless_expectation, ExtrapolationConfig, MitigationError,
};
use quantum::{noise, Circuit, Observable, QuantumError, QuantumState};
use std::f64::consts::PI;

fn zz() -> Observable {
    let mut obs = Observable::new(2);
    obs.add_operator(1.0, "Z 0 Z 1").unwrap();
    obs
}

fn mitigation_circuit(p: f64) -> Result<Circuit, QuantumError> {
    let mut c = Circuit::new(2);
    c.add_h(0)?
        .add_ry(1, PI / 6.0)?
        .add_cnot(0, 1)?
        .add_gate(noise::depolarizing(0, p)?)?
        .add_gate(noise::depolarizing(1, p)?)?;
    Ok(c)
}

fn config(levels: Vec<f64>) -> ExtrapolationConfig {
    ExtrapolationConfig::from_levels(levels, zz(), mitigation_circuit).unwrap()
}

#[test]
fn depolarized_bell_like_circuit() {
    let levels = vec![0.02, 0.04, 0.06, 0.08];
    let cfg = config(levels.clone())
        .with_samples(100_000)
        .with_diagnostics(true)
        .with_seed("zne-e2e");
    let initial = QuantumState::new(2);

    let out = extrapolate_linear(&cfg, &initial).unwrap();
    let exact = noiseless_expectation(&cfg.circuits[0], &initial, &cfg.observable).unwrap();
    assert!((exact - (PI / 6.0).cos()).abs() < 1e-12, "exact = {}", exact);

    // A line through (1-p)^2 decay is biased by about -0.0017 at p = 0, and
    // the intercept's sampling sigma at 1e5 samples is about 0.0034.
    assert!(
        (out.mitigated - exact).abs() < 0.02,
        "mitigated = {}, exact = {}",
        out.mitigated,
        exact
    );

    let diag = out.diagnostics.expect("diagnostics requested");
    assert_eq!(diag.averages.len(), levels.len());
    assert_eq!(diag.fit.intercept, out.mitigated);
    assert!(diag.fit.slope < 0.0, "slope = {}", diag.fit.slope);
    // Each unmitigated point sits below the noiseless value.
    for (p, avg) in levels.iter().zip(&diag.averages) {
        let expected = exact * (1.0 - p) * (1.0 - p);
        assert!((avg - expected).abs() < 0.02, "p = {}: {} vs {}", p, avg, expected);
    }
}

#[test]
fn exact_linear_data_recovers_line() {
    // Deterministic circuits whose <Z> is exactly a*p + b.
    let (a, b) = (-2.5, 0.9);
    let levels = vec![0.0, 0.05, 0.1, 0.2, 0.3];
    let mut z = Observable::new(1);
    z.add_operator(1.0, "Z 0").unwrap();

    let cfg = ExtrapolationConfig::from_levels(levels, z, |p| {
        let mut c = Circuit::new(1);
        c.add_ry(0, (a * p + b).acos())?;
        Ok::<_, QuantumError>(c)
    })
    .unwrap()
    .with_samples(3)
    .with_diagnostics(true);

    let out = extrapolate_linear(&cfg, &QuantumState::new(1)).unwrap();
    let fit = out.diagnostics.unwrap().fit;
    assert!((fit.slope - a).abs() < 1e-9, "slope = {}", fit.slope);
    assert!((fit.intercept - b).abs() < 1e-9, "intercept = {}", fit.intercept);
    assert!((out.mitigated - b).abs() < 1e-9);
}

#[test]
fn template_state_is_untouched() {
    let mut prep = Circuit::new(2);
    prep.add_h(0).unwrap().add_ry(1, 0.7).unwrap();
    let mut template = QuantumState::new(2);
    prep.apply_ideal(&mut template).unwrap();
    let snapshot = template.clone();

    let cfg = config(vec![0.1, 0.2, 0.3]).with_samples(200);
    extrapolate_linear(&cfg, &template).unwrap();

    assert_eq!(template, snapshot);
}

#[test]
fn diagnostics_only_on_request() {
    let cfg = config(vec![0.01, 0.05]).with_samples(10);
    let out = extrapolate_linear(&cfg, &QuantumState::new(2)).unwrap();
    assert!(out.diagnostics.is_none());
}

#[test]
fn same_seed_same_estimate() {
    let cfg = config(vec![0.05, 0.1, 0.15]).with_samples(500).with_seed("repeat");
    let initial = QuantumState::new(2);
    let a = extrapolate_linear(&cfg, &initial).unwrap();
    let b = extrapolate_linear(&cfg, &initial).unwrap();
    assert_eq!(a, b);
}

#[test]
fn too_few_levels() {
    let initial = QuantumState::new(2);

    let err = extrapolate_linear(&config(vec![0.05]), &initial).unwrap_err();
    assert_eq!(err, MitigationError::InsufficientData { distinct: 1, required: 2 });

    let err = extrapolate_linear(&config(vec![]), &initial).unwrap_err();
    assert_eq!(err, MitigationError::InsufficientData { distinct: 0, required: 2 });

    let err = extrapolate_linear(&config(vec![0.05, 0.05, 0.05]), &initial).unwrap_err();
    assert_eq!(err, MitigationError::InsufficientData { distinct: 1, required: 2 });
}

#[test]
fn levels_too_close_to_fit() {
    let err = extrapolate_linear(&config(vec![0.0, 1e-170]).with_samples(10), &QuantumState::new(2))
        .unwrap_err();
    assert_eq!(err, MitigationError::InsufficientData { distinct: 1, required: 2 });
}

#[test]
fn invalid_arguments() {
    let initial = QuantumState::new(2);

    let cfg = config(vec![0.02, 0.04]).with_samples(0);
    assert!(matches!(
        extrapolate_linear(&cfg, &initial),
        Err(MitigationError::InvalidArgument(_))
    ));

    let mut cfg = config(vec![0.02, 0.04, 0.06]);
    cfg.circuits.pop();
    assert!(matches!(
        extrapolate_linear(&cfg, &initial),
        Err(MitigationError::InvalidArgument(_))
    ));

    let mut cfg = config(vec![0.02, 0.04]);
    cfg.noise_levels[1] = f64::NAN;
    assert!(matches!(
        extrapolate_linear(&cfg, &initial),
        Err(MitigationError::InvalidArgument(_))
    ));
}

#[test]
fn simulator_errors_pass_through() {
    let cfg = config(vec![0.02, 0.04]).with_samples(5);

    let err = extrapolate_linear(&cfg, &QuantumState::new(3)).unwrap_err();
    assert_eq!(
        err,
        MitigationError::Simulation(QuantumError::QubitCountMismatch {
            expected: 2,
            actual: 3
        })
    );

    let mut obs = Observable::new(3);
    obs.add_operator(1.0, "Z 2").unwrap();
    let mut cfg = cfg;
    cfg.observable = obs;
    let err = extrapolate_linear(&cfg, &QuantumState::new(2)).unwrap_err();
    assert_eq!(
        err,
        MitigationError::Simulation(QuantumError::QubitCountMismatch {
            expected: 3,
            actual: 2
        })
    );
}
