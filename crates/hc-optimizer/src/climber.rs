//! The hill-climbing loop.
//!
//! [`HillClimber`] keeps a single best-known point. Every iteration draws a
//! Gaussian perturbation around it, evaluates the candidate, and keeps the
//! candidate only if its value is strictly lower. A run spends exactly
//! `budget` objective evaluations: one on the starting point and one per
//! iteration.

use hc_types::{validation_error, ClimbError, ClimbReport, ClimbResult, ObjectiveError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, trace, warn};

use crate::config::ClimbConfig;

/// Best point found by a completed run, with its bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbOutcome {
    pub best: Vec<f64>,
    pub best_value: f64,
    pub report: ClimbReport,
}

/// Random-perturbation hill climber for unconstrained minimization.
#[derive(Debug, Clone)]
pub struct HillClimber {
    config: ClimbConfig,
}

impl HillClimber {
    pub fn new(config: ClimbConfig) -> ClimbResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClimbConfig {
        &self.config
    }

    /// Run with a generator built from the configured seed, or the
    /// thread-local generator when no seed is set.
    pub fn run_seeded<F, E>(&self, objective: F, x0: &[f64]) -> ClimbResult<ClimbOutcome>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: Into<ObjectiveError>,
    {
        match self.config.seed {
            Some(seed) => self.run(objective, x0, &mut StdRng::seed_from_u64(seed)),
            None => self.run(objective, x0, &mut rand::rng()),
        }
    }

    /// Minimize `objective` starting from `x0`.
    ///
    /// The first objective error aborts the run; no partial result is
    /// returned.
    pub fn run<F, E, R>(
        &self,
        mut objective: F,
        x0: &[f64],
        rng: &mut R,
    ) -> ClimbResult<ClimbOutcome>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: Into<ObjectiveError>,
        R: Rng + ?Sized,
    {
        if x0.is_empty() {
            return Err(validation_error!("start point must have at least one dimension"));
        }

        let budget = self.config.budget;
        let mut report = ClimbReport::new(self.config.problem.clone(), x0.len(), budget);
        if !self.config.record_history {
            report = report.without_history();
        }

        info!(
            "Starting hill climb {} on '{}': dimension {}, budget {}",
            report.id, report.problem, report.dimension, budget
        );
        if budget == 0 {
            warn!("Evaluation budget is 0; the start point is still evaluated once");
        }

        report.mark_running();
        match self.climb(&mut objective, x0, rng, &mut report) {
            Ok((best, best_value)) => {
                report.mark_completed();
                info!(
                    "Hill climb {} finished: best value {} after {} evaluations ({} accepted)",
                    report.id, best_value, report.evaluations, report.accepted
                );
                Ok(ClimbOutcome {
                    best,
                    best_value,
                    report,
                })
            }
            Err(e) => {
                report.mark_failed(e.to_string());
                error!("Hill climb {} aborted: {}", report.id, e);
                Err(e)
            }
        }
    }

    fn climb<F, E, R>(
        &self,
        objective: &mut F,
        x0: &[f64],
        rng: &mut R,
        report: &mut ClimbReport,
    ) -> ClimbResult<(Vec<f64>, f64)>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        E: Into<ObjectiveError>,
        R: Rng + ?Sized,
    {
        let step = self.config.step();

        let mut x_best = x0.to_vec();
        let mut y_best = evaluate(objective, &x_best, 1)?;
        report.record(y_best, false);

        for index in 2..=self.config.budget {
            let x_next = step.perturb(&x_best, rng);
            let y_next = evaluate(objective, &x_next, index)?;

            // NaN never compares less, so it is never accepted.
            let accepted = y_next < y_best;
            report.record(y_next, accepted);
            trace!("Evaluation {}: value {} (best {})", index, y_next, y_best);

            if accepted {
                debug!("Evaluation {} improved best value {} -> {}", index, y_best, y_next);
                x_best = x_next;
                y_best = y_next;
            }
        }

        Ok((x_best, y_best))
    }
}

fn evaluate<F, E>(objective: &mut F, x: &[f64], index: usize) -> ClimbResult<f64>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
    E: Into<ObjectiveError>,
{
    objective(x).map_err(|e| ClimbError::objective(index, e))
}
