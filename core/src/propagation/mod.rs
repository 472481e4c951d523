pub mod evaluator;
pub mod free_space;
pub mod geometry;
pub mod summary;
pub mod two_ray;
pub mod u_factor;

pub use evaluator::{LossComparison, LossCurves, PathLossEvaluator};
pub use free_space::FreeSpaceModel;
pub use geometry::PathGeometry;
pub use summary::ComparisonSummary;
pub use two_ray::TwoRayModel;
pub use u_factor::{u_factor_curve, u_factor_offset_db};
