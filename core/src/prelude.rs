use crate::propagation::geometry::PathGeometry;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Link geometry and ground model shared by every band-set evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Transmitter antenna height (m).
    pub tx_height: f64,
    /// Receiver antenna height (m).
    pub rx_height: f64,
    /// Ground reflection coefficient Γ, expected in [-1, 1].
    pub reflection: f64,
    /// Coherent-sum factor of the simplified model, `u = 1 + |Γ|`.
    pub u_factor: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    pub samples: usize,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            tx_height: 6.0,
            rx_height: 4.0,
            reflection: -0.9,
            u_factor: 1.6,
            min_distance: 1.0,
            max_distance: 25.0,
            samples: 2000,
        }
    }
}

impl Scenario {
    /// Linearly spaced ground distances from `min_distance` to `max_distance`.
    pub fn distances(&self) -> Array1<f64> {
        Array1::linspace(self.min_distance, self.max_distance, self.samples)
    }
}

/// Common error type for path-loss evaluation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("band set must contain at least one frequency")]
    EmptyBandSet,
    #[error("distance sequence is empty")]
    EmptyDistances,
    #[error("invalid band frequency: {0}")]
    InvalidBand(String),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// A propagation model contributing one carrier's received level (dB) over
/// every sampled distance.
pub trait PathLossModel {
    fn name(&self) -> &'static str;
    fn level_db(&self, wavelength: f64, geometry: &PathGeometry) -> Array1<f64>;
}
