use ndarray::{Array1, ArrayView1};

/// Direct and ground-reflected ray lengths for every sampled ground distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGeometry {
    direct: Array1<f64>,
    reflected: Array1<f64>,
}

impl PathGeometry {
    pub fn new(tx_height: f64, rx_height: f64, distances: ArrayView1<f64>) -> Self {
        let direct_dz = tx_height - rx_height;
        let reflected_dz = tx_height + rx_height;
        Self {
            direct: distances.mapv(|d| (direct_dz * direct_dz + d * d).sqrt()),
            reflected: distances.mapv(|d| (reflected_dz * reflected_dz + d * d).sqrt()),
        }
    }

    /// Line-of-sight path lengths.
    pub fn direct(&self) -> &Array1<f64> {
        &self.direct
    }

    /// Lengths of the path bouncing off the ground plane (image antenna).
    pub fn reflected(&self) -> &Array1<f64> {
        &self.reflected
    }

    pub fn len(&self) -> usize {
        self.direct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn geometry_uses_height_difference_and_sum() {
        let distances = arr1(&[0.0, 4.0]);
        let geometry = PathGeometry::new(5.0, 2.0, distances.view());
        assert_eq!(geometry.direct(), &arr1(&[3.0, 5.0]));
        assert_eq!(geometry.reflected()[0], 7.0);
        assert_eq!(geometry.len(), 2);
    }

    #[test]
    fn reflected_ray_is_never_shorter_than_direct() {
        let distances = Array1::linspace(1.0, 25.0, 50);
        let geometry = PathGeometry::new(6.0, 4.0, distances.view());
        assert!(geometry
            .direct()
            .iter()
            .zip(geometry.reflected().iter())
            .all(|(los, refl)| refl >= los));
    }
}
