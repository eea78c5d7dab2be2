use anyhow::{Context, Result};
use clap::Parser;
use mitigation::{
    output::{depth_rows, write_csv},
    sample_depth_series, SamplerConfig,
};
use quantum::{noise, Circuit, Observable};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Decay of <Z> on one qubit under repeated probabilistic bit flips
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bit-flip probability per application
    #[arg(long, default_value_t = 0.1)]
    p: f64,

    /// Monte Carlo samples per depth
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Number of depths to sample (0..depth)
    #[arg(long, default_value_t = 20)]
    depth: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "bit-flip")]
    seed: String,

    /// Output CSV path
    #[arg(long, default_value = "bit_flip_decay.csv")]
    out: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Log filter, e.g. info or mitigation=debug
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let mut circuit = Circuit::new(1);
    circuit.add_gate(noise::bit_flip(0, args.p)?)?;

    let mut observable = Observable::new(1);
    observable.add_operator(1.0, "Z 0")?;

    let config = SamplerConfig::new(circuit, observable)
        .with_max_depth(args.depth)
        .with_samples(args.samples)
        .with_seed(args.seed.as_str());

    info!(p = args.p, samples = args.samples, depth = args.depth, "sampling bit-flip decay");
    let series = sample_depth_series(&config)?;

    for (d, e) in series.iter().enumerate() {
        println!("depth={:>3}  <Z>={:.6}", d, e);
    }

    write_csv(&args.out, ["depth", "expectation"], &depth_rows(&series))
        .with_context(|| format!("failed to write {}", args.out))?;
    info!(path = %args.out, "wrote depth series");

    Ok(())
}
