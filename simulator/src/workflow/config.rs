use anyhow::Context;
use echocore::prelude::EstimatorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub sample_bin: f64,
    pub ping_bin: f64,
    pub absorption_db_per_m: f64,
    pub noise_ceiling_db: f64,
    pub samples: usize,
    pub pings: usize,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        sample_bin: f64,
        ping_bin: f64,
        absorption_db_per_m: f64,
        samples: usize,
        pings: usize,
    ) -> Self {
        Self {
            sample_bin,
            ping_bin,
            absorption_db_per_m,
            noise_ceiling_db: -125.0,
            samples,
            pings,
        }
    }

    pub fn to_estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            sample_bin: self.sample_bin,
            ping_bin: self.ping_bin,
            absorption_db_per_m: self.absorption_db_per_m,
            noise_ceiling_db: self.noise_ceiling_db,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_estimator_config() {
        let cfg = WorkflowConfig::from_args(5.0, 20.0, 0.01, 500, 100);
        let estimator = cfg.to_estimator_config();
        assert_eq!(estimator.ping_bin, 20.0);
        assert_eq!(estimator.noise_ceiling_db, -125.0);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"sample_bin: 2.5\nping_bin: 10.0\nabsorption_db_per_m: 0.008\nnoise_ceiling_db: -120.0\nsamples: 256\npings: 64\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.sample_bin, 2.5);
        assert_eq!(cfg.noise_ceiling_db, -120.0);
    }
}
