//! # hc-optimizer
//!
//! Random-perturbation hill climbing for unconstrained minimization.
//!
//! Provides the [`HillClimber`] driver with its run configuration, the
//! Gaussian step policy, and the `optimize(f, g, x0, n, prob)` entry points
//! built on top of them.

mod climber;
mod config;
mod optimize;
mod step;

pub use climber::{ClimbOutcome, HillClimber};
pub use config::ClimbConfig;
pub use optimize::{optimize, optimize_with_rng, try_optimize_with_rng};
pub use step::GaussianStep;

pub use hc_types::{ClimbError, ClimbReport, ClimbResult, ClimbState, EvaluationRecord};
