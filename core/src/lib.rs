//! Path-loss core for comparing the two-ray ground-reflection model with its
//! u-factor approximation and free-space propagation.
//!
//! The evaluator is a pure numeric function over a [`prelude::Scenario`] and a
//! [`bands::BandSet`]; plotting and file output live in the simulator crate.

pub mod bands;
pub mod math;
pub mod prelude;
pub mod propagation;
pub mod telemetry;

pub use bands::BandSet;
pub use prelude::{ModelError, ModelResult, PathLossModel, Scenario};
pub use propagation::{LossComparison, LossCurves, PathLossEvaluator};
