use crate::math::units::wavelength_m;
use crate::prelude::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered, non-empty set of carrier frequencies (MHz) compared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct BandSet {
    frequencies_mhz: Vec<f64>,
}

impl BandSet {
    pub fn new(frequencies_mhz: Vec<f64>) -> ModelResult<Self> {
        if frequencies_mhz.is_empty() {
            return Err(ModelError::EmptyBandSet);
        }
        Ok(Self { frequencies_mhz })
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies_mhz
    }

    pub fn len(&self) -> usize {
        self.frequencies_mhz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies_mhz.is_empty()
    }

    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.frequencies_mhz.iter().map(|&f| wavelength_m(f))
    }

    /// Parenthesised, comma-separated frequency list, e.g. `(800, 900, 2100)`.
    pub fn label(&self) -> String {
        let joined = self
            .frequencies_mhz
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("({})", joined)
    }
}

/// The four reference band sets, from a single GSM carrier up to five
/// aggregated LTE/UMTS bands.
pub fn default_band_sets() -> Vec<BandSet> {
    [
        vec![900.0],
        vec![800.0, 900.0, 2100.0],
        vec![800.0, 900.0, 1800.0, 2100.0],
        vec![800.0, 900.0, 1800.0, 2100.0, 2600.0],
    ]
    .into_iter()
    .map(|frequencies_mhz| BandSet { frequencies_mhz })
    .collect()
}

impl TryFrom<Vec<f64>> for BandSet {
    type Error = ModelError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        BandSet::new(value)
    }
}

impl From<BandSet> for Vec<f64> {
    fn from(value: BandSet) -> Self {
        value.frequencies_mhz
    }
}

impl FromStr for BandSet {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let frequencies = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| ModelError::InvalidBand(token.to_string()))
            })
            .collect::<ModelResult<Vec<f64>>>()?;
        BandSet::new(frequencies)
    }
}

impl fmt::Display for BandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}MHz", self.label())
    }
}
