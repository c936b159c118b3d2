use crate::echogram::{EchogramFrame, NoiseEstimate};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Shared configuration for the noise-estimation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Bin width along the sample axis, in sample-axis units.
    pub sample_bin: f64,
    /// Bin width along the ping axis, in ping-axis units.
    pub ping_bin: f64,
    /// Absorption coefficient, dB per metre.
    pub absorption_db_per_m: f64,
    /// Maximum background noise expected from the system, dB.
    pub noise_ceiling_db: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            sample_bin: 5.0,
            ping_bin: 20.0,
            absorption_db_per_m: 0.01,
            noise_ceiling_db: -125.0,
        }
    }
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum EstimateError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("non-monotonic axis: {0}")]
    NonMonotonicAxis(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type EstimateResult<T> = Result<T, EstimateError>;

/// Trait describing noise-estimation stages of the post-processing pipeline.
pub trait EstimatorStage {
    fn initialize(&mut self, config: &EstimatorConfig) -> EstimateResult<()>;
    fn execute(&mut self, frame: &EchogramFrame) -> EstimateResult<NoiseEstimate>;
    fn cleanup(&mut self);
}

/// Two-way 2D resampling capability consumed by the estimation stage.
///
/// Bin `k` along an axis spans `[dst[k], dst[k+1])`; the final bin extends
/// to the end of the source axis. Coordinates below the first bin edge map
/// to no bin.
pub trait Resampler {
    /// Aggregate `grid` into the bins defined by `dst_i`/`dst_j`. NaN
    /// samples are ignored; with `log_domain` the average is taken in
    /// linear power and converted back to dB. The returned mask is true
    /// for bins with no contributing samples.
    fn bin2d(
        &self,
        grid: ArrayView2<'_, f64>,
        src_i: &[f64],
        src_j: &[f64],
        dst_i: &[f64],
        dst_j: &[f64],
        log_domain: bool,
    ) -> (Array2<f64>, Array2<bool>);

    /// Broadcast each coarse bin value onto the fine cells it encloses.
    /// The returned mask is true where a fine cell has no enclosing bin.
    fn upsample2d(
        &self,
        coarse: ArrayView2<'_, f64>,
        coarse_i: &[f64],
        coarse_j: &[f64],
        dst_i: &[f64],
        dst_j: &[f64],
    ) -> (Array2<f64>, Array2<bool>);
}
