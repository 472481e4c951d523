use ndarray::ArrayView1;

pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: ArrayView1<f64>) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.sum() / samples.len() as f64
    }

    /// Mean of `lhs - rhs` over the overlapping samples.
    pub fn mean_difference(lhs: ArrayView1<f64>, rhs: ArrayView1<f64>) -> f64 {
        let len = lhs.len().min(rhs.len());
        if len == 0 {
            return 0.0;
        }
        let total: f64 = lhs.iter().zip(rhs.iter()).map(|(a, b)| a - b).sum();
        total / len as f64
    }

    /// Percentage of samples where `lhs > rhs`; NaN comparisons count as false.
    pub fn percent_greater(lhs: ArrayView1<f64>, rhs: ArrayView1<f64>) -> f64 {
        let len = lhs.len().min(rhs.len());
        if len == 0 {
            return 0.0;
        }
        let hits = lhs.iter().zip(rhs.iter()).filter(|(a, b)| a > b).count();
        hits as f64 * 100.0 / len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array1};

    #[test]
    fn mean_of_empty_sequence_is_zero() {
        let empty: Array1<f64> = Array1::zeros(0);
        assert_eq!(StatsHelper::mean(empty.view()), 0.0);
        assert_eq!(StatsHelper::percent_greater(empty.view(), empty.view()), 0.0);
    }

    #[test]
    fn mean_difference_handles_offsets() {
        let a = arr1(&[3.0, 5.0]);
        let b = arr1(&[1.0, 1.0]);
        assert_eq!(StatsHelper::mean_difference(a.view(), b.view()), 3.0);
        assert_eq!(StatsHelper::mean(a.view()), 4.0);
    }

    #[test]
    fn percent_greater_ignores_nan() {
        let a = arr1(&[2.0, f64::NAN, 0.0, 5.0]);
        let b = arr1(&[1.0, 1.0, 1.0, 5.0]);
        assert_eq!(StatsHelper::percent_greater(a.view(), b.view()), 25.0);
    }
}
