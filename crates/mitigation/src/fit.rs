use crate::error::{MitigationError, Result};

/// Least-squares line `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn residual_sum_of_squares(&self, xs: &[f64], ys: &[f64]) -> f64 {
        xs.iter()
            .zip(ys)
            .map(|(&x, &y)| {
                let r = y - self.evaluate(x);
                r * r
            })
            .sum()
    }

    /// `points` evenly spaced samples of the line over `[0, x_max]`.
    pub fn curve(&self, x_max: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(0.0, self.intercept)],
            _ => (0..points)
                .map(|i| {
                    let x = x_max * i as f64 / (points - 1) as f64;
                    (x, self.evaluate(x))
                })
                .collect(),
        }
    }
}

pub(crate) fn distinct_count(xs: &[f64]) -> usize {
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted.dedup();
    sorted.len()
}

/// Degree-1 polynomial fit minimising the sum of squared residuals.
///
/// Solved in closed form on mean-centred data. Needs at least two distinct
/// x values.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> Result<LinearFit> {
    if xs.len() != ys.len() {
        return Err(MitigationError::InvalidArgument(format!(
            "fit needs equal-length inputs, got {} x and {} y values",
            xs.len(),
            ys.len()
        )));
    }
    let distinct = distinct_count(xs);
    if distinct < 2 {
        return Err(MitigationError::InsufficientData {
            distinct,
            required: 2,
        });
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        sxx += dx * dx;
        sxy += dx * (y - y_mean);
    }

    // Distinct levels can still collapse numerically when squared.
    if !(sxx > 0.0) {
        return Err(MitigationError::InsufficientData {
            distinct: 1,
            required: 2,
        });
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(MitigationError::InvalidArgument(format!(
            "fit is not finite (slope {}, intercept {})",
            slope, intercept
        )));
    }
    Ok(LinearFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn two_points_pass_through_both() {
        let fit = fit_linear(&[1.0, 3.0], &[2.0, 6.0]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!(fit.intercept.abs() < 1e-12);
    }

    #[test]
    fn noisy_points_minimise_residuals() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 2.9, 5.2, 6.9];
        let fit = fit_linear(&xs, &ys).unwrap();
        let best = fit.residual_sum_of_squares(&xs, &ys);

        for (ds, di) in [(0.01, 0.0), (-0.01, 0.0), (0.0, 0.01), (0.0, -0.01)] {
            let other = LinearFit {
                slope: fit.slope + ds,
                intercept: fit.intercept + di,
            };
            assert!(other.residual_sum_of_squares(&xs, &ys) > best);
        }
    }

    #[test]
    fn duplicate_levels_with_two_distinct() {
        let fit = fit_linear(&[1.0, 1.0, 2.0], &[1.0, 3.0, 4.0]).unwrap();
        // mean at x=1 is 2, single point at x=2 is 4
        assert!((fit.slope - 2.0).abs() < 1e-12, "slope = {}", fit.slope);
        assert!(fit.intercept.abs() < 1e-12, "intercept = {}", fit.intercept);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(
            fit_linear(&[0.5], &[1.0]).unwrap_err(),
            MitigationError::InsufficientData { distinct: 1, required: 2 }
        );
        assert_eq!(
            fit_linear(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0]).unwrap_err(),
            MitigationError::InsufficientData { distinct: 1, required: 2 }
        );
        assert!(matches!(
            fit_linear(&[0.1, 0.2], &[1.0]),
            Err(MitigationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn nearly_equal_levels_rejected() {
        for xs in [[0.0, 1e-170], [0.0, 5e-324]] {
            assert_eq!(
                fit_linear(&xs, &[1.0, 0.9]).unwrap_err(),
                MitigationError::InsufficientData { distinct: 1, required: 2 }
            );
        }
    }

    #[test]
    fn overflowing_fit_rejected() {
        let err = fit_linear(&[-1e300, 1e300], &[-1e300, 1e300]).unwrap_err();
        assert!(matches!(err, MitigationError::InvalidArgument(_)), "{:?}", err);
    }

    #[test]
    fn curve_spans_zero_to_max() {
        let fit = LinearFit { slope: -1.0, intercept: 0.5 };
        let pts = fit.curve(0.08, 100);
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0], (0.0, 0.5));
        assert!((pts[99].0 - 0.08).abs() < 1e-15);
        assert!((pts[99].1 - 0.42).abs() < 1e-12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn recovers_exact_line(
            a in -10.0f64..10.0,
            b in -10.0f64..10.0,
            xs in prop::collection::vec(-5.0f64..5.0, 2..12),
        ) {
            prop_assume!(distinct_count(&xs) >= 2);
            let x_mean = xs.iter().sum::<f64>() / xs.len() as f64;
            let spread = xs.iter().map(|x| (x - x_mean).powi(2)).sum::<f64>();
            prop_assume!(spread > 1e-6);

            let ys: Vec<f64> = xs.iter().map(|x| a * x + b).collect();
            let fit = fit_linear(&xs, &ys).unwrap();

            prop_assert!((fit.slope - a).abs() < 1e-6, "slope {} vs {}", fit.slope, a);
            prop_assert!((fit.intercept - b).abs() < 1e-6, "intercept {} vs {}", fit.intercept, b);
        }
    }
}
