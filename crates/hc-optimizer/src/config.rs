//! Configuration for a hill-climbing run.

use hc_types::{config_error, ClimbResult};
use serde::{Deserialize, Serialize};

use crate::step::GaussianStep;

/// Top-level configuration for a climb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimbConfig {
    /// Opaque problem label. Recorded and logged, never interpreted.
    pub problem: String,

    /// Total number of objective evaluations, including the one spent on
    /// the starting point.
    pub budget: usize,

    /// Standard deviation of each perturbation component.
    pub step_scale: f64,

    /// Seed for [`crate::HillClimber::run_seeded`].
    pub seed: Option<u64>,

    /// Keep a per-evaluation trace in the report.
    pub record_history: bool,
}

impl ClimbConfig {
    pub fn new(problem: impl Into<String>, budget: usize) -> Self {
        Self {
            problem: problem.into(),
            budget,
            ..Self::default()
        }
    }

    pub fn with_step_scale(mut self, scale: f64) -> Self {
        self.step_scale = scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    pub fn step(&self) -> GaussianStep {
        GaussianStep::new(self.step_scale)
    }

    pub fn validate(&self) -> ClimbResult<()> {
        if !self.step_scale.is_finite() || self.step_scale <= 0.0 {
            return Err(config_error!(
                "step scale must be positive and finite, got {}",
                self.step_scale
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> ClimbResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ClimbResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            problem: String::new(),
            budget: 1,
            step_scale: 1.0,
            seed: None,
            record_history: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_types::ClimbError;

    #[test]
    fn builder_chain() {
        let config = ClimbConfig::new("rosenbrock", 200)
            .with_step_scale(0.5)
            .with_seed(17)
            .with_history(false);

        assert_eq!(config.problem, "rosenbrock");
        assert_eq!(config.budget, 200);
        assert_eq!(config.step(), GaussianStep::new(0.5));
        assert_eq!(config.seed, Some(17));
        assert!(!config.record_history);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_step_is_standard_normal() {
        let config = ClimbConfig::new("sphere", 10);
        assert_eq!(config.step(), GaussianStep::default());
        assert_eq!(config.seed, None);
        assert!(config.record_history);
    }

    #[test]
    fn rejects_bad_step_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ClimbConfig::new("sphere", 10).with_step_scale(scale);
            match config.validate() {
                Err(ClimbError::Config(msg)) => assert!(msg.contains("step scale")),
                other => panic!("expected config error for {scale}, got {other:?}"),
            }
        }
    }

    #[test]
    fn json_missing_fields_take_defaults() {
        let config = ClimbConfig::from_json(r#"{ "problem": "simple1", "budget": 20 }"#).unwrap();
        assert_eq!(config, ClimbConfig::new("simple1", 20));
    }

    #[test]
    fn json_round_trip() {
        let config = ClimbConfig::new("simple2", 100).with_seed(3);
        let parsed = ClimbConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn json_validates_on_load() {
        let err = ClimbConfig::from_json(r#"{ "budget": 5, "step_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ClimbError::Config(_)));

        let err = ClimbConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ClimbError::Serialization(_)));
    }
}
