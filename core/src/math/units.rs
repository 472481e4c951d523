/// Speed of light expressed so that `c / f[MHz]` yields metres.
pub const SPEED_OF_LIGHT_MHZ_M: f64 = 3.0e2;

pub fn wavelength_m(frequency_mhz: f64) -> f64 {
    SPEED_OF_LIGHT_MHZ_M / frequency_mhz
}

/// Power ratio expressed in decibels.
pub fn power_db(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wavelength_at_900_mhz_is_one_third_metre() {
        assert!((wavelength_m(900.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_frequency_is_not_guarded() {
        assert!(wavelength_m(0.0).is_infinite());
        assert!(power_db(0.0).is_infinite());
    }

    #[test]
    fn power_db_of_hundred_is_twenty() {
        assert_eq!(power_db(100.0), 20.0);
    }
}
