pub mod axis;
pub mod decibel;
pub mod stats;

pub use axis::AxisHelper;
pub use decibel::DecibelHelper;
pub use stats::StatsHelper;
