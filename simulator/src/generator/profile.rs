use crate::generator::template::tvg_profile;
use anyhow::Context;
use echocore::echogram::{EchogramFrame, SurveyMetadata};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating synthetic echogram frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub pings: usize,
    pub range_step_m: f64,
    pub noise_floor_db: f64,
    pub jitter_db: f64,
    pub seed: u64,
    pub absorption_db_per_m: f64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            pings: 100,
            range_step_m: 0.5,
            noise_floor_db: -140.0,
            jitter_db: 0.5,
            seed: 0,
            absorption_db_per_m: 0.01,
            description: None,
            scenario: None,
        }
    }
}

impl GeneratorConfig {
    fn normalized_samples(&self) -> usize {
        self.samples.max(1)
    }

    fn normalized_pings(&self) -> usize {
        self.pings.max(1)
    }
}

/// Builds a frame whose Sv is the configured noise floor with TVG applied
/// plus seeded jitter, so the estimated floor is known in advance.
pub fn build_echogram_frame_from_config(config: &GeneratorConfig) -> anyhow::Result<EchogramFrame> {
    let samples = config.normalized_samples();
    let pings = config.normalized_pings();
    samples
        .checked_mul(pings)
        .context("overflow computing cell count for generator")?;

    let range_m: Vec<f64> = (0..samples)
        .map(|i| (i as f64 + 1.0) * config.range_step_m)
        .collect();
    let tvg = tvg_profile(&range_m, config.absorption_db_per_m);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sv = Array2::<f64>::zeros((samples, pings));
    for i in 0..samples {
        for j in 0..pings {
            let jitter = if config.jitter_db > 0.0 {
                rng.gen_range(-config.jitter_db..config.jitter_db)
            } else {
                0.0
            };
            sv[[i, j]] = config.noise_floor_db + tvg[i] + jitter;
        }
    }

    let metadata = SurveyMetadata {
        survey: config.scenario.clone().unwrap_or_else(|| "synthetic".into()),
        vessel: "RV Example".into(),
        transducer_frequency_khz: 38.0,
        pulse_length_ms: 1.024,
        description: config.description.clone(),
    };

    Ok(EchogramFrame::new(
        sv,
        (0..samples).map(|i| i as f64).collect(),
        (0..pings).map(|j| j as f64).collect(),
        range_m,
    )
    .with_metadata(metadata))
}

pub fn build_echogram_frame(samples: usize, pings: usize) -> anyhow::Result<EchogramFrame> {
    let config = GeneratorConfig {
        samples,
        pings,
        ..Default::default()
    };
    build_echogram_frame_from_config(&config)
}
