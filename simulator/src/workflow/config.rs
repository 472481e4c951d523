use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tworaycore::bands::default_band_sets;
use tworaycore::{BandSet, Scenario};

/// Run description: link scenario, band sets to compare, and figure directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    #[serde(flatten)]
    pub scenario: Scenario,
    pub band_sets: Vec<BandSet>,
    pub output_dir: PathBuf,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            band_sets: default_band_sets(),
            output_dir: PathBuf::from("Figures"),
        }
    }
}

/// Command-line overrides layered on top of the default or loaded config.
#[derive(Clone, Debug, Default)]
pub struct ScenarioOverrides {
    pub tx_height: Option<f64>,
    pub rx_height: Option<f64>,
    pub reflection: Option<f64>,
    pub u_factor: Option<f64>,
    pub max_distance: Option<f64>,
    pub samples: Option<usize>,
    pub band_sets: Vec<BandSet>,
    pub output_dir: Option<PathBuf>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(overrides: &ScenarioOverrides) -> Self {
        let mut config = Self::default();
        config.apply(overrides);
        config
    }

    pub fn apply(&mut self, overrides: &ScenarioOverrides) {
        let scenario = &mut self.scenario;
        if let Some(value) = overrides.tx_height {
            scenario.tx_height = value;
        }
        if let Some(value) = overrides.rx_height {
            scenario.rx_height = value;
        }
        if let Some(value) = overrides.reflection {
            scenario.reflection = value;
        }
        if let Some(value) = overrides.u_factor {
            scenario.u_factor = value;
        }
        if let Some(value) = overrides.max_distance {
            scenario.max_distance = value;
        }
        if let Some(value) = overrides.samples {
            scenario.samples = value;
        }
        if !overrides.band_sets.is_empty() {
            self.band_sets = overrides.band_sets.clone();
        }
        if let Some(dir) = overrides.output_dir.as_ref() {
            self.output_dir = dir.clone();
        }
    }

    /// Figure name derived from the scenario; re-runs overwrite the same file.
    pub fn figure_file_name(&self) -> String {
        format!(
            "ht = {}m, hr={}m, Γ={}, u={}.png",
            self.scenario.tx_height,
            self.scenario.rx_height,
            self.scenario.reflection,
            self.scenario.u_factor
        )
    }

    pub fn figure_path(&self) -> PathBuf {
        self.output_dir.join(self.figure_file_name())
    }
}
