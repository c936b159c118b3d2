pub mod estimate;
pub mod frame;

pub use estimate::{NoiseEstimate, NoiseSummary};
pub use frame::{EchogramFrame, SurveyMetadata};
