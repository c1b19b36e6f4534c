//! Random-step policy: isotropic Gaussian perturbations around the best point.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

/// Draws candidates as `from + scale * z` with `z ~ N(0, I)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianStep {
    pub scale: f64,
}

impl GaussianStep {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Draw a perturbation vector of dimensionality `dimension`.
    pub fn draw<R: Rng + ?Sized>(&self, dimension: usize, rng: &mut R) -> Vec<f64> {
        (0..dimension)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                self.scale * z
            })
            .collect()
    }

    /// Form a candidate by adding a fresh perturbation to `from`.
    pub fn perturb<R: Rng + ?Sized>(&self, from: &[f64], rng: &mut R) -> Vec<f64> {
        self.draw(from.len(), rng)
            .into_iter()
            .zip(from)
            .map(|(dx, x)| x + dx)
            .collect()
    }
}

impl Default for GaussianStep {
    fn default() -> Self {
        Self::new(1.0)
    }
}
