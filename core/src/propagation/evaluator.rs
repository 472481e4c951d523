use crate::bands::BandSet;
use crate::prelude::{ModelError, ModelResult, PathLossModel, Scenario};
use crate::propagation::free_space::FreeSpaceModel;
use crate::propagation::geometry::PathGeometry;
use crate::propagation::summary::ComparisonSummary;
use crate::propagation::two_ray::TwoRayModel;
use crate::propagation::u_factor::u_factor_curve;
use crate::telemetry::log::LogManager;
use ndarray::Array1;

/// Analytical two-ray, u-factor and free-space levels (dB), aligned with the
/// evaluator's distance sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LossCurves {
    pub two_ray: Array1<f64>,
    pub u_model: Array1<f64>,
    pub free_space: Array1<f64>,
}

impl LossCurves {
    pub fn len(&self) -> usize {
        self.two_ray.len()
    }

    pub fn is_empty(&self) -> bool {
        self.two_ray.is_empty()
    }

    /// Louder of the two-ray and u-factor levels at the first distance sample.
    pub fn reference_level(&self) -> ModelResult<f64> {
        match (self.two_ray.first(), self.u_model.first()) {
            (Some(&two_ray), Some(&u_model)) => Ok(two_ray.max(u_model)),
            _ => Err(ModelError::EmptyDistances),
        }
    }

    /// Subtracts `offset` from every curve.
    pub fn shifted(&self, offset: f64) -> LossCurves {
        LossCurves {
            two_ray: self.two_ray.mapv(|v| v - offset),
            u_model: self.u_model.mapv(|v| v - offset),
            free_space: self.free_space.mapv(|v| v - offset),
        }
    }
}

/// Normalized curves for one band set plus their annotation figures.
#[derive(Debug, Clone, PartialEq)]
pub struct LossComparison {
    pub bands: BandSet,
    pub curves: LossCurves,
    /// Offset removed from the raw curves (dB).
    pub reference_db: f64,
    pub summary: ComparisonSummary,
}

/// Evaluates every path-loss model for a band set over a fixed distance grid.
pub struct PathLossEvaluator {
    scenario: Scenario,
    distances: Array1<f64>,
    geometry: PathGeometry,
    two_ray: TwoRayModel,
    free_space: FreeSpaceModel,
    logger: LogManager,
}

impl PathLossEvaluator {
    pub fn new(scenario: Scenario) -> Self {
        let distances = scenario.distances();
        Self::with_distances(scenario, distances)
    }

    /// Uses an explicit distance sequence instead of the scenario's grid.
    /// The first element anchors the normalization.
    pub fn with_distances(scenario: Scenario, distances: Array1<f64>) -> Self {
        let geometry = PathGeometry::new(scenario.tx_height, scenario.rx_height, distances.view());
        let logger = LogManager::for_component("tworaycore::evaluator");
        logger.detail(&format!(
            "evaluator ready: ht={} hr={} Γ={} u={} samples={}",
            scenario.tx_height,
            scenario.rx_height,
            scenario.reflection,
            scenario.u_factor,
            distances.len()
        ));
        Self {
            scenario,
            distances,
            geometry,
            two_ray: TwoRayModel::new(scenario.reflection),
            free_space: FreeSpaceModel,
            logger,
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn distances(&self) -> &Array1<f64> {
        &self.distances
    }

    /// Curves summed over the band set, before normalization.
    pub fn raw_curves(&self, bands: &BandSet) -> ModelResult<LossCurves> {
        if bands.is_empty() {
            return Err(ModelError::EmptyBandSet);
        }
        if self.geometry.is_empty() {
            return Err(ModelError::EmptyDistances);
        }

        let mut two_ray = Array1::<f64>::zeros(self.geometry.len());
        let mut free_space = Array1::<f64>::zeros(self.geometry.len());
        for wavelength in bands.wavelengths() {
            two_ray += &self.two_ray.level_db(wavelength, &self.geometry);
            free_space += &self.free_space.level_db(wavelength, &self.geometry);
        }
        let u_model = u_factor_curve(&free_space, self.scenario.u_factor, bands.len());

        Ok(LossCurves {
            two_ray,
            u_model,
            free_space,
        })
    }

    pub fn evaluate(&self, bands: &BandSet) -> ModelResult<LossComparison> {
        let raw = self.raw_curves(bands)?;
        let reference_db = raw.reference_level()?;
        let curves = raw.shifted(reference_db);
        let summary = ComparisonSummary::from_curves(&curves);

        self.logger.record(&format!(
            "bands {} normalized by {:.2} dB; u-model at/above analytical {:.2}%",
            bands, reference_db, summary.u_model_at_or_above_pct
        ));

        Ok(LossComparison {
            bands: bands.clone(),
            curves,
            reference_db,
            summary,
        })
    }
}
