use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::info;
use tworaycore::{LossComparison, PathLossEvaluator, Scenario};

pub struct WorkflowResult {
    pub scenario: Scenario,
    pub distances: Vec<f64>,
    pub comparisons: Vec<LossComparison>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Evaluates every configured band set on the shared distance grid.
    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let evaluator = PathLossEvaluator::new(self.config.scenario);

        let comparisons = self
            .config
            .band_sets
            .iter()
            .enumerate()
            .map(|(index, bands)| {
                evaluator
                    .evaluate(bands)
                    .with_context(|| format!("evaluating band set #{} {}", index + 1, bands))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        info!(
            "evaluated {} band sets over {} distance samples",
            comparisons.len(),
            evaluator.distances().len()
        );

        Ok(WorkflowResult {
            scenario: self.config.scenario,
            distances: evaluator.distances().to_vec(),
            comparisons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tworaycore::BandSet;

    #[test]
    fn runner_executes_workflow() {
        let mut cfg = WorkflowConfig::default();
        cfg.scenario.samples = 64;
        let runner = Runner::new(cfg.clone());
        let result = runner.execute().unwrap();
        assert_eq!(result.comparisons.len(), cfg.band_sets.len());
        assert_eq!(result.distances.len(), 64);
        assert_eq!(result.distances[0], 1.0);
        for comparison in &result.comparisons {
            assert_eq!(comparison.curves.len(), 64);
        }
    }

    #[test]
    fn runner_keeps_band_set_order() {
        let mut cfg = WorkflowConfig::default();
        cfg.band_sets = vec![
            BandSet::new(vec![2600.0]).unwrap(),
            BandSet::new(vec![800.0, 900.0]).unwrap(),
        ];
        let result = Runner::new(cfg).execute().unwrap();
        assert_eq!(result.comparisons[0].bands.label(), "(2600)");
        assert_eq!(result.comparisons[1].bands.len(), 2);
    }

    #[test]
    fn runner_reports_empty_distance_grid() {
        let mut cfg = WorkflowConfig::default();
        cfg.scenario.samples = 0;
        let err = Runner::new(cfg).execute().err().unwrap();
        assert!(format!("{:#}", err).contains("distance sequence is empty"));
    }
}
