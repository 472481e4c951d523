use crate::prelude::PathLossModel;
use crate::propagation::geometry::PathGeometry;
use ndarray::Array1;
use std::f64::consts::PI;

/// Friis free-space propagation over the direct ray only.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeSpaceModel;

impl PathLossModel for FreeSpaceModel {
    fn name(&self) -> &'static str {
        "free-space"
    }

    fn level_db(&self, wavelength: f64, geometry: &PathGeometry) -> Array1<f64> {
        geometry
            .direct()
            .mapv(|d_los| 20.0 * (wavelength / (4.0 * PI * d_los)).log10())
    }
}
