use crate::math::units::power_db;
use crate::prelude::PathLossModel;
use crate::propagation::geometry::PathGeometry;
use ndarray::{Array1, Zip};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Exact two-ray ground-reflection model: the direct ray and the
/// ground-reflected ray are summed as complex fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoRayModel {
    reflection: f64,
    los_gain: f64,
    ground_gain: f64,
}

impl TwoRayModel {
    /// Model with unity antenna gains on both rays.
    pub fn new(reflection: f64) -> Self {
        Self::with_gains(reflection, 1.0, 1.0)
    }

    pub fn with_gains(reflection: f64, los_gain: f64, ground_gain: f64) -> Self {
        Self {
            reflection,
            los_gain,
            ground_gain,
        }
    }

    pub fn reflection(&self) -> f64 {
        self.reflection
    }

    /// Complex received-field coefficient `rs` for a single ray pair.
    pub fn field(&self, wavelength: f64, d_los: f64, d_ref: f64) -> Complex64 {
        let phase = 2.0 * PI * (d_ref - d_los) / wavelength;
        let direct = Complex64::new(self.los_gain.sqrt() / d_los, 0.0);
        let reflected =
            Complex64::from_polar(self.reflection * self.ground_gain.sqrt() / d_ref, -phase);
        (direct + reflected) * (wavelength / (4.0 * PI))
    }
}

impl PathLossModel for TwoRayModel {
    fn name(&self) -> &'static str {
        "two-ray"
    }

    fn level_db(&self, wavelength: f64, geometry: &PathGeometry) -> Array1<f64> {
        Zip::from(geometry.direct())
            .and(geometry.reflected())
            .map_collect(|&d_los, &d_ref| power_db(self.field(wavelength, d_los, d_ref).norm_sqr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::units::wavelength_m;
    use crate::propagation::free_space::FreeSpaceModel;

    #[test]
    fn zero_reflection_collapses_to_free_space() {
        let distances = Array1::linspace(1.0, 25.0, 200);
        let geometry = PathGeometry::new(6.0, 4.0, distances.view());
        let wavelength = wavelength_m(900.0);
        let two_ray = TwoRayModel::new(0.0).level_db(wavelength, &geometry);
        let free_space = FreeSpaceModel.level_db(wavelength, &geometry);
        for (a, b) in two_ray.iter().zip(free_space.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn field_phase_cancels_at_half_wavelength_difference() {
        let model = TwoRayModel::new(1.0);
        let wavelength = 2.0;
        // d_ref - d_los = λ/2 flips the sign of the reflected ray.
        let field = model.field(wavelength, 10.0, 11.0);
        let expected = wavelength / (4.0 * PI) * (1.0 / 10.0 - 1.0 / 11.0);
        assert!((field.re - expected).abs() < 1e-12);
        assert!(field.im.abs() < 1e-12);
    }

    #[test]
    fn two_ray_level_oscillates_over_distance() {
        let distances = Array1::linspace(1.0, 25.0, 2000);
        let geometry = PathGeometry::new(6.0, 4.0, distances.view());
        let level = TwoRayModel::new(-0.9).level_db(wavelength_m(900.0), &geometry);
        let rising = level.windows(2).into_iter().any(|w| w[1] > w[0]);
        let falling = level.windows(2).into_iter().any(|w| w[1] < w[0]);
        assert!(rising && falling);
    }
}
