use crate::math::stats::StatsHelper;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Background-noise estimate at the resolution of the input frame.
#[derive(Debug, Clone)]
pub struct NoiseEstimate {
    /// Estimated background noise, dB. NaN where undefined.
    pub background: Array2<f64>,
    /// True where the estimate is not to be trusted.
    pub mask: Array2<bool>,
}

impl NoiseEstimate {
    /// Fraction of cells carrying a finite, unmasked estimate.
    pub fn valid_fraction(&self) -> f64 {
        let total = self.mask.len();
        if total == 0 {
            return 0.0;
        }
        let valid = self
            .mask
            .iter()
            .zip(self.background.iter())
            .filter(|(masked, value)| !**masked && value.is_finite())
            .count();
        valid as f64 / total as f64
    }

    pub fn summary(&self) -> NoiseSummary {
        let (samples, pings) = self.background.dim();
        let bounds = StatsHelper::finite_bounds(self.background.iter().copied());
        NoiseSummary {
            samples,
            pings,
            valid_fraction: self.valid_fraction(),
            floor_min_db: bounds.map(|b| b.0),
            floor_max_db: bounds.map(|b| b.1),
        }
    }
}

/// Compact record describing one noise estimate, for telemetry and reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseSummary {
    pub samples: usize,
    pub pings: usize,
    pub valid_fraction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_min_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_max_db: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fraction_counts_finite_unmasked_cells() {
        let background =
            Array2::from_shape_vec((2, 2), vec![-120.0, f64::NAN, -118.0, -119.0]).unwrap();
        let mut mask = Array2::from_elem((2, 2), false);
        mask[[1, 1]] = true;
        let estimate = NoiseEstimate { background, mask };
        assert!((estimate.valid_fraction() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn summary_reports_finite_bounds() {
        let background =
            Array2::from_shape_vec((1, 3), vec![-130.0, f64::NAN, -110.0]).unwrap();
        let mask = Array2::from_elem((1, 3), false);
        let summary = NoiseEstimate { background, mask }.summary();
        assert_eq!(summary.pings, 3);
        assert_eq!(summary.floor_min_db, Some(-130.0));
        assert_eq!(summary.floor_max_db, Some(-110.0));
    }

    #[test]
    fn summary_of_all_nan_estimate_has_no_bounds() {
        let background = Array2::from_elem((2, 2), f64::NAN);
        let mask = Array2::from_elem((2, 2), true);
        let summary = NoiseEstimate { background, mask }.summary();
        assert_eq!(summary.valid_fraction, 0.0);
        assert!(summary.floor_min_db.is_none());
    }
}
