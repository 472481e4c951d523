use crate::workflow::runner::WorkflowResult;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tworaycore::propagation::ComparisonSummary;
use tworaycore::Scenario;

#[derive(Debug, Serialize)]
pub struct WorkflowReport {
    pub scenario: Scenario,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<f64>>,
    pub band_sets: Vec<BandSetReport>,
}

#[derive(Debug, Serialize)]
pub struct BandSetReport {
    pub label: String,
    pub frequencies_mhz: Vec<f64>,
    pub reference_db: f64,
    pub summary: ComparisonSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<CurveReport>,
}

#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub two_ray: Vec<f64>,
    pub u_model: Vec<f64>,
    pub free_space: Vec<f64>,
}

impl WorkflowReport {
    pub fn from_result(result: &WorkflowResult, include_curves: bool) -> Self {
        let band_sets = result
            .comparisons
            .iter()
            .map(|comparison| BandSetReport {
                label: comparison.bands.label(),
                frequencies_mhz: comparison.bands.frequencies().to_vec(),
                reference_db: comparison.reference_db,
                summary: comparison.summary,
                curves: include_curves.then(|| CurveReport {
                    two_ray: comparison.curves.two_ray.to_vec(),
                    u_model: comparison.curves.u_model.to_vec(),
                    free_space: comparison.curves.free_space.to_vec(),
                }),
            })
            .collect();

        Self {
            scenario: result.scenario,
            distances: include_curves.then(|| result.distances.clone()),
            band_sets,
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path_ref = path.as_ref();
        if let Some(parent) = path_ref.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing workflow report")?;
        fs::write(path_ref, json)
            .with_context(|| format!("writing workflow report {}", path_ref.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use serde_json::Value;

    fn small_result() -> WorkflowResult {
        let mut cfg = WorkflowConfig::default();
        cfg.scenario.samples = 16;
        Runner::new(cfg).execute().unwrap()
    }

    #[test]
    fn report_without_curves_keeps_summaries_only() {
        let report = WorkflowReport::from_result(&small_result(), false);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["band_sets"].as_array().unwrap().len(), 4);
        assert_eq!(value["band_sets"][1]["label"], "(800, 900, 2100)");
        assert!(value.get("distances").is_none());
        assert!(value["band_sets"][0].get("curves").is_none());
        assert_eq!(value["scenario"]["samples"], 16);
    }

    #[test]
    fn report_writes_json_with_curves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        WorkflowReport::from_result(&small_result(), true)
            .write(&path)
            .unwrap();

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["distances"].as_array().unwrap().len(), 16);
        assert_eq!(
            value["band_sets"][3]["curves"]["two_ray"]
                .as_array()
                .unwrap()
                .len(),
            16
        );
    }
}
