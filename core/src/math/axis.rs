/// Axis utilities shared by the resampler and the estimation stage.
pub struct AxisHelper;

impl AxisHelper {
    /// End-exclusive arithmetic sequence from `start` towards `stop`.
    ///
    /// Empty when `step` is not a positive finite number or `stop <= start`.
    pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
        let mut out = Vec::new();
        if !(step > 0.0) || !step.is_finite() {
            return out;
        }
        let mut value = start;
        while value < stop {
            out.push(value);
            value = start + (out.len() as f64) * step;
        }
        out
    }

    pub fn is_strictly_increasing(values: &[f64]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Index of the bin holding `coord`. Bin `k` spans
    /// `[edges[k], edges[k+1])`; the final bin is open-ended. None when
    /// `coord` lies below the first edge or is NaN.
    pub fn bin_index(edges: &[f64], coord: f64) -> Option<usize> {
        if edges.is_empty() || coord.is_nan() || coord < edges[0] {
            return None;
        }
        let upper = edges.partition_point(|&edge| edge <= coord);
        Some(upper - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arange_excludes_the_stop_value() {
        assert_eq!(AxisHelper::arange(0.0, 4.0, 1.0), vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(AxisHelper::arange(0.0, 9.0, 2.0), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn arange_with_oversized_step_has_one_point() {
        assert_eq!(AxisHelper::arange(0.0, 4.0, 10.0), vec![0.0]);
    }

    #[test]
    fn arange_rejects_nonpositive_step() {
        assert!(AxisHelper::arange(0.0, 4.0, 0.0).is_empty());
        assert!(AxisHelper::arange(0.0, 4.0, -1.0).is_empty());
    }

    #[test]
    fn strictly_increasing_check() {
        assert!(AxisHelper::is_strictly_increasing(&[0.0, 0.5, 2.0]));
        assert!(!AxisHelper::is_strictly_increasing(&[0.0, 0.0, 2.0]));
        assert!(AxisHelper::is_strictly_increasing(&[]));
    }

    #[test]
    fn bin_index_uses_half_open_bins_with_open_final_bin() {
        let edges = [0.0, 2.0, 4.0];
        assert_eq!(AxisHelper::bin_index(&edges, 0.0), Some(0));
        assert_eq!(AxisHelper::bin_index(&edges, 1.9), Some(0));
        assert_eq!(AxisHelper::bin_index(&edges, 2.0), Some(1));
        assert_eq!(AxisHelper::bin_index(&edges, 9.0), Some(2));
        assert_eq!(AxisHelper::bin_index(&edges, -0.1), None);
        assert_eq!(AxisHelper::bin_index(&edges, f64::NAN), None);
    }
}
