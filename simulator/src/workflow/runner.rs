use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use echocore::echogram::{EchogramFrame, NoiseSummary};
use echocore::prelude::EstimatorStage;
use echocore::processing::BackgroundStage;

pub struct WorkflowResult {
    pub summary: NoiseSummary,
    pub degenerate: bool,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, frame: &EchogramFrame) -> anyhow::Result<WorkflowResult> {
        let estimator_config = self.config.to_estimator_config();

        let mut stage = BackgroundStage::new();
        stage
            .initialize(&estimator_config)
            .context("initializing background stage")?;
        let estimate = stage
            .execute(frame)
            .context("executing background stage")?;
        let (_, degenerate) = stage.metrics().snapshot();
        stage.cleanup();

        let summary = estimate.summary();
        let notes = vec![format!("valid fraction {:.3}", summary.valid_fraction)];

        Ok(WorkflowResult {
            summary,
            degenerate: degenerate > 0,
            notes,
        })
    }
}
