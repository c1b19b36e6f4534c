//! Function-style entry points: `optimize(f, g, x0, n, prob)`.
//!
//! These wrap [`HillClimber`] for callers that only want the best point.
//! The gradient and the problem label are accepted for interface
//! compatibility; the gradient is never called and the label is only
//! recorded in logs.

use std::convert::Infallible;

use hc_types::{ClimbResult, ObjectiveError};
use rand::Rng;

use crate::climber::HillClimber;
use crate::config::ClimbConfig;

/// Minimize `f` from `x0` using `n` objective evaluations and the
/// thread-local random generator.
pub fn optimize<F, G>(f: F, g: G, x0: &[f64], n: usize, prob: &str) -> ClimbResult<Vec<f64>>
where
    F: FnMut(&[f64]) -> f64,
    G: FnMut(&[f64]) -> Vec<f64>,
{
    optimize_with_rng(f, g, x0, n, prob, &mut rand::rng())
}

/// Like [`optimize`], drawing perturbations from `rng`.
pub fn optimize_with_rng<F, G, R>(
    mut f: F,
    g: G,
    x0: &[f64],
    n: usize,
    prob: &str,
    rng: &mut R,
) -> ClimbResult<Vec<f64>>
where
    F: FnMut(&[f64]) -> f64,
    G: FnMut(&[f64]) -> Vec<f64>,
    R: Rng + ?Sized,
{
    try_optimize_with_rng(|x| Ok::<_, Infallible>(f(x)), g, x0, n, prob, rng)
}

/// Like [`optimize_with_rng`] for an objective that can fail. The first
/// failure aborts the run and is returned as [`hc_types::ClimbError::Objective`].
pub fn try_optimize_with_rng<F, E, G, R>(
    f: F,
    _g: G,
    x0: &[f64],
    n: usize,
    prob: &str,
    rng: &mut R,
) -> ClimbResult<Vec<f64>>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: Into<ObjectiveError>,
    G: FnMut(&[f64]) -> Vec<f64>,
    R: Rng + ?Sized,
{
    let config = ClimbConfig::new(prob, n).with_history(false);
    let outcome = HillClimber::new(config)?.run(f, x0, rng)?;
    Ok(outcome.best)
}
