pub mod stats;
pub mod units;

pub use stats::StatsHelper;
pub use units::{power_db, wavelength_m, SPEED_OF_LIGHT_MHZ_M};
