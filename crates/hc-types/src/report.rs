//! Run tracking for a single hill-climbing call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique climb run identifier.
pub type ClimbId = Uuid;

/// Lifecycle state for a climb run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimbState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// One objective evaluation as seen by the climber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// 1-based evaluation index; index 1 is the starting point.
    pub index: usize,
    pub value: f64,
    /// Running best after this evaluation.
    pub best_value: f64,
    /// Whether this evaluation replaced the best-known point.
    pub accepted: bool,
}

/// Aggregate status of a climb run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbReport {
    pub id: ClimbId,
    /// Opaque problem label supplied by the caller.
    pub problem: String,
    pub dimension: usize,
    pub budget: usize,
    pub state: ClimbState,
    pub evaluations: usize,
    /// The climber never calls the gradient; kept so callers can account
    /// for it the way they account for objective calls.
    pub gradient_evaluations: usize,
    pub accepted: usize,
    pub initial_value: Option<f64>,
    pub best_value: Option<f64>,
    pub history: Vec<EvaluationRecord>,
    #[serde(skip, default = "record_history_default")]
    record_history: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

fn record_history_default() -> bool {
    true
}

impl ClimbReport {
    pub fn new(problem: impl Into<String>, dimension: usize, budget: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            problem: problem.into(),
            dimension,
            budget,
            state: ClimbState::Pending,
            evaluations: 0,
            gradient_evaluations: 0,
            accepted: 0,
            initial_value: None,
            best_value: None,
            history: Vec::new(),
            record_history: true,
            started_at: None,
            finished_at: None,
            error: None,
        }
    }

    /// Keep only the aggregate counters, not the per-evaluation trace.
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }

    pub fn mark_running(&mut self) {
        self.state = ClimbState::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self) {
        self.state = ClimbState::Completed;
        self.finished_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self, error: String) {
        self.state = ClimbState::Failed;
        self.finished_at = Some(Utc::now());
        self.error = Some(error);
    }

    /// Record one objective evaluation.
    ///
    /// The first call establishes the initial value. `accepted` must only be
    /// set when `value` strictly improved on the running best; the first
    /// evaluation is never counted as an acceptance.
    pub fn record(&mut self, value: f64, accepted: bool) {
        self.evaluations += 1;
        match self.best_value {
            None => {
                self.initial_value = Some(value);
                self.best_value = Some(value);
            }
            Some(_) if accepted => {
                self.accepted += 1;
                self.best_value = Some(value);
            }
            Some(_) => {}
        }

        if self.record_history {
            self.history.push(EvaluationRecord {
                index: self.evaluations,
                value,
                best_value: self.best_value.unwrap_or(value),
                accepted: accepted && self.evaluations > 1,
            });
        }
    }

    /// How far the best value dropped below the starting value.
    pub fn improvement(&self) -> Option<f64> {
        Some(self.initial_value? - self.best_value?)
    }

    /// Running best value after each recorded evaluation.
    pub fn best_trace(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.best_value).collect()
    }

    pub fn acceptance_rate(&self) -> f64 {
        let candidates = self.evaluations.saturating_sub(1);
        if candidates == 0 {
            0.0
        } else {
            self.accepted as f64 / candidates as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_report_lifecycle() {
        let mut report = ClimbReport::new("sphere", 2, 10);

        assert_eq!(report.state, ClimbState::Pending);
        assert!(report.started_at.is_none());

        report.mark_running();
        assert_eq!(report.state, ClimbState::Running);
        assert!(report.started_at.is_some());

        report.mark_completed();
        assert_eq!(report.state, ClimbState::Completed);
        assert!(report.finished_at.is_some());
        assert!(report.error.is_none());
    }

    #[test]
    fn climb_report_failure() {
        let mut report = ClimbReport::new("sphere", 1, 5);
        report.mark_running();
        report.mark_failed("objective panicked".into());
        assert_eq!(report.state, ClimbState::Failed);
        assert_eq!(report.error.as_deref(), Some("objective panicked"));
    }

    #[test]
    fn first_record_sets_initial_value() {
        let mut report = ClimbReport::new("sphere", 1, 3);
        report.record(25.0, false);

        assert_eq!(report.evaluations, 1);
        assert_eq!(report.accepted, 0);
        assert_eq!(report.initial_value, Some(25.0));
        assert_eq!(report.best_value, Some(25.0));
        assert_eq!(report.improvement(), Some(0.0));
    }

    #[test]
    fn best_value_tracking() {
        let mut report = ClimbReport::new("sphere", 1, 4);
        report.record(25.0, false);
        report.record(16.0, true);
        // Worse candidate should not replace
        report.record(30.0, false);
        report.record(9.0, true);

        assert_eq!(report.evaluations, 4);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.best_value, Some(9.0));
        assert_eq!(report.improvement(), Some(16.0));
        assert_eq!(report.best_trace(), vec![25.0, 16.0, 16.0, 9.0]);
        assert!((report.acceptance_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn history_can_be_disabled() {
        let mut report = ClimbReport::new("sphere", 1, 3).without_history();
        report.record(4.0, false);
        report.record(1.0, true);

        assert!(report.history.is_empty());
        assert_eq!(report.evaluations, 2);
        assert_eq!(report.best_value, Some(1.0));
    }

    #[test]
    fn acceptance_rate_without_candidates() {
        let mut report = ClimbReport::new("sphere", 1, 1);
        report.record(1.0, false);
        assert_eq!(report.acceptance_rate(), 0.0);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = ClimbReport::new("rosenbrock", 2, 2);
        report.mark_running();
        report.record(3.0, false);
        report.record(1.0, true);
        report.mark_completed();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["problem"], "rosenbrock");
        assert_eq!(json["state"], "Completed");
        assert_eq!(json["history"].as_array().unwrap().len(), 2);
        assert_eq!(json["history"][1]["accepted"], true);
    }
}
