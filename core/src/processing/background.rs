use crate::echogram::{EchogramFrame, NoiseEstimate};
use crate::math::axis::AxisHelper;
use crate::math::stats::StatsHelper;
use crate::prelude::{
    EstimateError, EstimateResult, EstimatorConfig, EstimatorStage, Resampler,
};
use crate::resample::GridResampler;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;
use ndarray::{Array1, Array2, Axis};

/// Background-noise estimation stage after De Robertis and Higginbottom
/// (2007): remove the two-way travel gain, bin the corrected echogram, take
/// the per-ping-bin minimum as the noise floor, clip it to the system
/// ceiling and project it back onto the frame.
pub struct BackgroundStage {
    resampler: Box<dyn Resampler>,
    config: Option<EstimatorConfig>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl BackgroundStage {
    pub fn new() -> Self {
        Self::with_resampler(Box::new(GridResampler::new()))
    }

    /// Substitute the resampling strategy, e.g. for nearest-neighbour
    /// aggregation.
    pub fn with_resampler(resampler: Box<dyn Resampler>) -> Self {
        Self {
            resampler,
            config: None,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    fn validate(frame: &EchogramFrame, config: &EstimatorConfig) -> EstimateResult<()> {
        let (samples, pings) = frame.sv.dim();
        if samples == 0 || pings == 0 {
            return Err(EstimateError::InvalidInput("empty echogram frame".into()));
        }
        if frame.range_m.len() != samples {
            return Err(EstimateError::ShapeMismatch(format!(
                "range vector has {} entries for {} samples",
                frame.range_m.len(),
                samples
            )));
        }
        if frame.sample_axis.len() != samples {
            return Err(EstimateError::ShapeMismatch(format!(
                "sample axis has {} entries for {} samples",
                frame.sample_axis.len(),
                samples
            )));
        }
        if frame.ping_axis.len() != pings {
            return Err(EstimateError::ShapeMismatch(format!(
                "ping axis has {} entries for {} pings",
                frame.ping_axis.len(),
                pings
            )));
        }
        if !AxisHelper::is_strictly_increasing(&frame.sample_axis) {
            return Err(EstimateError::NonMonotonicAxis(
                "sample axis must be strictly increasing".into(),
            ));
        }
        if !AxisHelper::is_strictly_increasing(&frame.ping_axis) {
            return Err(EstimateError::NonMonotonicAxis(
                "ping axis must be strictly increasing".into(),
            ));
        }
        if !(config.sample_bin > 0.0 && config.sample_bin.is_finite()) {
            return Err(EstimateError::InvalidInput(
                "sample bin width must be positive and finite".into(),
            ));
        }
        if !(config.ping_bin > 0.0 && config.ping_bin.is_finite()) {
            return Err(EstimateError::InvalidInput(
                "ping bin width must be positive and finite".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BackgroundStage {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimatorStage for BackgroundStage {
    fn initialize(&mut self, config: &EstimatorConfig) -> EstimateResult<()> {
        self.config = Some(config.clone());
        Ok(())
    }

    fn execute(&mut self, frame: &EchogramFrame) -> EstimateResult<NoiseEstimate> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| EstimateError::InvalidInput("stage not initialized".into()))?;
        Self::validate(frame, config)?;

        let (samples, pings) = frame.sv.dim();

        // Two-way travel gain per sample; non-positive ranges are undefined
        // for the log term and stay NaN through the whole chain.
        let tvg: Array1<f64> = frame
            .range_m
            .iter()
            .map(|&range| {
                if range <= 0.0 {
                    f64::NAN
                } else {
                    20.0 * range.log10() + 2.0 * config.absorption_db_per_m * range
                }
            })
            .collect();
        let tvg_col = tvg.view().insert_axis(Axis(1));

        let sv_no_tvg = &frame.sv - &tvg_col;

        let iaxrs = AxisHelper::arange(
            frame.sample_axis[0],
            frame.sample_axis[samples - 1],
            config.sample_bin,
        );
        let jaxrs = AxisHelper::arange(
            frame.ping_axis[0],
            frame.ping_axis[pings - 1],
            config.ping_bin,
        );

        if iaxrs.len() < 2 || jaxrs.len() < 2 {
            self.logger
                .warn("unable to estimate background noise, incorrect resampling axes");
            self.metrics.record_degenerate();
            return Ok(NoiseEstimate {
                background: Array2::from_elem((samples, pings), f64::NAN),
                mask: Array2::from_elem((samples, pings), true),
            });
        }

        let (coarse, _occupancy) = self.resampler.bin2d(
            sv_no_tvg.view(),
            &frame.sample_axis,
            &frame.ping_axis,
            &iaxrs,
            &jaxrs,
            true,
        );

        // Noise floor per ping bin: minimum down the sample axis. A ping
        // bin with no valid samples at any depth stays NaN.
        let floor: Vec<f64> = coarse
            .axis_iter(Axis(1))
            .map(|column| StatsHelper::nanmin(column.iter().copied()))
            .collect();

        // The floor is assumed constant with range within a bin and never
        // above the system ceiling. NaN compares false and passes through.
        let mut coarse_bgn = Array2::<f64>::from_elem((iaxrs.len(), jaxrs.len()), f64::NAN);
        for (bj, &level) in floor.iter().enumerate() {
            let clipped = if level > config.noise_ceiling_db {
                config.noise_ceiling_db
            } else {
                level
            };
            coarse_bgn.column_mut(bj).fill(clipped);
        }

        let (fine, mask) = self.resampler.upsample2d(
            coarse_bgn.view(),
            &iaxrs,
            &jaxrs,
            &frame.sample_axis,
            &frame.ping_axis,
        );
        let background = &fine + &tvg_col;

        self.metrics.record_estimated();
        self.logger.record(&format!(
            "BackgroundStage floor over {} ping bins, {} sample bins",
            jaxrs.len(),
            iaxrs.len()
        ));

        Ok(NoiseEstimate { background, mask })
    }

    fn cleanup(&mut self) {
        self.config = None;
    }
}
