//! Monte Carlo sampling of noisy circuits and linear zero-noise
//! extrapolation on top of the `quantum` simulator.

pub mod config;
pub mod error;
pub mod fit;
pub mod output;
pub mod sampler;
mod trials;
pub mod zne;

pub use config::{ExtrapolationConfig, SamplerConfig};
pub use error::MitigationError;
pub use fit::{fit_linear, LinearFit};
pub use sampler::sample_depth_series;
pub use zne::{extrapolate_linear, noiseless_expectation, Diagnostics, Extrapolation};
