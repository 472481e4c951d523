pub mod figure;
pub mod model;

pub use figure::FigureRenderer;
pub use model::FigureModel;
