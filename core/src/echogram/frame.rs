use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Ancillary survey metadata accompanying an echogram frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyMetadata {
    pub survey: String,
    pub vessel: String,
    pub transducer_frequency_khz: f32,
    pub pulse_length_ms: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Calibrated Sv frame consumed by the noise-estimation core.
///
/// `sv` has shape (samples, pings); `sample_axis` and `ping_axis` give the
/// physical coordinate of each row/column and `range_m` the range of each
/// sample in metres.
#[derive(Debug, Clone)]
pub struct EchogramFrame {
    pub sv: Array2<f64>,
    pub sample_axis: Vec<f64>,
    pub ping_axis: Vec<f64>,
    pub range_m: Vec<f64>,
    pub metadata: Option<SurveyMetadata>,
}

impl EchogramFrame {
    pub fn new(
        sv: Array2<f64>,
        sample_axis: Vec<f64>,
        ping_axis: Vec<f64>,
        range_m: Vec<f64>,
    ) -> Self {
        Self {
            sv,
            sample_axis,
            ping_axis,
            range_m,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: SurveyMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
