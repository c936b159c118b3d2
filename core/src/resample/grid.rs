use crate::math::axis::AxisHelper;
use crate::math::decibel::DecibelHelper;
use crate::prelude::Resampler;
use ndarray::{Array2, ArrayView2};

/// Interval-based resampler aggregating each destination bin by averaging
/// the source samples it encloses, in dB or linear power.
pub struct GridResampler;

impl GridResampler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GridResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Resampler for GridResampler {
    fn bin2d(
        &self,
        grid: ArrayView2<'_, f64>,
        src_i: &[f64],
        src_j: &[f64],
        dst_i: &[f64],
        dst_j: &[f64],
        log_domain: bool,
    ) -> (Array2<f64>, Array2<bool>) {
        let shape = (dst_i.len(), dst_j.len());
        let mut sums = Array2::<f64>::zeros(shape);
        let mut counts = Array2::<usize>::zeros(shape);

        let j_bins: Vec<Option<usize>> = src_j
            .iter()
            .map(|&coord| AxisHelper::bin_index(dst_j, coord))
            .collect();

        for (si, &icoord) in src_i.iter().enumerate() {
            let bi = match AxisHelper::bin_index(dst_i, icoord) {
                Some(bin) => bin,
                None => continue,
            };
            for (sj, j_bin) in j_bins.iter().enumerate() {
                let bj = match j_bin {
                    Some(bin) => *bin,
                    None => continue,
                };
                let value = grid[[si, sj]];
                if value.is_nan() {
                    continue;
                }
                sums[[bi, bj]] += if log_domain {
                    DecibelHelper::to_linear(value)
                } else {
                    value
                };
                counts[[bi, bj]] += 1;
            }
        }

        let mut binned = Array2::<f64>::from_elem(shape, f64::NAN);
        let mut empty = Array2::<bool>::from_elem(shape, false);
        for bi in 0..shape.0 {
            for bj in 0..shape.1 {
                let count = counts[[bi, bj]];
                if count == 0 {
                    empty[[bi, bj]] = true;
                    continue;
                }
                let mean = sums[[bi, bj]] / count as f64;
                binned[[bi, bj]] = if log_domain {
                    DecibelHelper::to_db(mean)
                } else {
                    mean
                };
            }
        }
        (binned, empty)
    }

    fn upsample2d(
        &self,
        coarse: ArrayView2<'_, f64>,
        coarse_i: &[f64],
        coarse_j: &[f64],
        dst_i: &[f64],
        dst_j: &[f64],
    ) -> (Array2<f64>, Array2<bool>) {
        debug_assert_eq!(coarse.dim(), (coarse_i.len(), coarse_j.len()));

        let shape = (dst_i.len(), dst_j.len());
        let mut fine = Array2::<f64>::from_elem(shape, f64::NAN);
        let mut unmapped = Array2::<bool>::from_elem(shape, false);

        let j_bins: Vec<Option<usize>> = dst_j
            .iter()
            .map(|&coord| AxisHelper::bin_index(coarse_j, coord))
            .collect();

        for (fi, &icoord) in dst_i.iter().enumerate() {
            let i_bin = AxisHelper::bin_index(coarse_i, icoord);
            for (fj, j_bin) in j_bins.iter().enumerate() {
                match (i_bin, j_bin) {
                    (Some(bi), Some(bj)) => fine[[fi, fj]] = coarse[[bi, *bj]],
                    _ => unmapped[[fi, fj]] = true,
                }
            }
        }
        (fine, unmapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn bin2d_averages_in_linear_power_when_log_domain() {
        let grid = array![[-70.0, -60.0]];
        let (binned, empty) =
            GridResampler::new().bin2d(grid.view(), &[0.0], &[0.0, 1.0], &[0.0], &[0.0], true);
        // mean of 1e-7 and 1e-6 W is 5.5e-7 W
        let expected = 10.0 * (5.5e-7f64).log10();
        assert!((binned[[0, 0]] - expected).abs() < 1e-9);
        assert!(!empty[[0, 0]]);
    }

    #[test]
    fn bin2d_averages_arithmetically_otherwise() {
        let grid = array![[-70.0, -60.0]];
        let (binned, _) =
            GridResampler::new().bin2d(grid.view(), &[0.0], &[0.0, 1.0], &[0.0], &[0.0], false);
        assert!((binned[[0, 0]] - -65.0).abs() < 1e-12);
    }

    #[test]
    fn bin2d_ignores_nan_samples() {
        let grid = array![[f64::NAN, -70.0]];
        let (binned, empty) =
            GridResampler::new().bin2d(grid.view(), &[0.0], &[0.0, 1.0], &[0.0], &[0.0], true);
        assert!((binned[[0, 0]] - -70.0).abs() < 1e-9);
        assert!(!empty[[0, 0]]);
    }

    #[test]
    fn bin2d_marks_bins_without_samples() {
        let grid = array![[-70.0], [-70.0]];
        // source coordinates 0 and 10 leave the middle bin empty
        let (binned, empty) = GridResampler::new().bin2d(
            grid.view(),
            &[0.0, 10.0],
            &[0.0],
            &[0.0, 4.0, 8.0],
            &[0.0],
            true,
        );
        assert!(!empty[[0, 0]]);
        assert!(empty[[1, 0]]);
        assert!(binned[[1, 0]].is_nan());
        assert!(!empty[[2, 0]]);
    }

    #[test]
    fn bin2d_all_nan_bin_is_nan_and_flagged() {
        let grid = array![[f64::NAN], [f64::NAN]];
        let (binned, empty) = GridResampler::new().bin2d(
            grid.view(),
            &[0.0, 1.0],
            &[0.0],
            &[0.0, 2.0],
            &[0.0],
            true,
        );
        assert!(binned[[0, 0]].is_nan());
        assert!(empty[[0, 0]]);
    }

    #[test]
    fn upsample2d_copies_enclosing_bin_values() {
        let coarse = array![[1.0, 2.0], [3.0, 4.0]];
        let (fine, unmapped) = GridResampler::new().upsample2d(
            coarse.view(),
            &[0.0, 2.0],
            &[0.0, 2.0],
            &[0.0, 1.0, 2.0, 3.0],
            &[0.0, 1.0, 2.0, 3.0],
        );
        assert_eq!(fine.dim(), (4, 4));
        assert_eq!(fine[[0, 0]], 1.0);
        assert_eq!(fine[[1, 3]], 2.0);
        assert_eq!(fine[[3, 1]], 3.0);
        assert_eq!(fine[[2, 2]], 4.0);
        assert!(!unmapped.iter().any(|&m| m));
    }

    #[test]
    fn upsample2d_masks_cells_below_the_coarse_origin() {
        let coarse = array![[1.0]];
        let (fine, unmapped) = GridResampler::new().upsample2d(
            coarse.view(),
            &[2.0],
            &[0.0],
            &[0.0, 2.0],
            &[0.0],
        );
        assert!(fine[[0, 0]].is_nan());
        assert!(unmapped[[0, 0]]);
        assert_eq!(fine[[1, 0]], 1.0);
        assert!(!unmapped[[1, 0]]);
    }
}
