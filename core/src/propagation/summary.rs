use crate::math::stats::StatsHelper;
use crate::propagation::evaluator::LossCurves;
use serde::{Deserialize, Serialize};

/// Annotation figures comparing the approximations with the analytical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Share of samples (%) where the analytical two-ray level exceeds the u-factor level.
    pub two_ray_above_pct: f64,
    /// Complement of `two_ray_above_pct`: the u-factor level is at or above the analytical one.
    pub u_model_at_or_above_pct: f64,
    pub mean_u_minus_two_ray_db: f64,
    pub mean_fspl_minus_two_ray_db: f64,
}

impl ComparisonSummary {
    pub fn from_curves(curves: &LossCurves) -> Self {
        let two_ray = curves.two_ray.view();
        let two_ray_above_pct = StatsHelper::percent_greater(two_ray, curves.u_model.view());
        Self {
            two_ray_above_pct,
            u_model_at_or_above_pct: 100.0 - two_ray_above_pct,
            mean_u_minus_two_ray_db: StatsHelper::mean_difference(curves.u_model.view(), two_ray),
            mean_fspl_minus_two_ray_db: StatsHelper::mean_difference(
                curves.free_space.view(),
                two_ray,
            ),
        }
    }
}
