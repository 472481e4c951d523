use ndarray::Array1;

/// Flat gain of the simplified two-ray model over free space for `band_count`
/// carriers: `10 · n · log10(u²)`.
pub fn u_factor_offset_db(u_factor: f64, band_count: usize) -> f64 {
    10.0 * band_count as f64 * (u_factor * u_factor).log10()
}

/// u-factor curve derived from the accumulated free-space curve.
pub fn u_factor_curve(free_space: &Array1<f64>, u_factor: f64, band_count: usize) -> Array1<f64> {
    let offset = u_factor_offset_db(u_factor, band_count);
    free_space.mapv(|level| offset + level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn unity_u_factor_is_free_space() {
        assert_eq!(u_factor_offset_db(1.0, 3), 0.0);
        let fs = arr1(&[-30.0, -40.0]);
        assert_eq!(u_factor_curve(&fs, 1.0, 3), fs);
    }

    #[test]
    fn offset_scales_with_band_count() {
        let single = u_factor_offset_db(1.6, 1);
        let triple = u_factor_offset_db(1.6, 3);
        assert!((triple - 3.0 * single).abs() < 1e-12);
        assert!(single > 4.0 && single < 4.1);
    }
}
