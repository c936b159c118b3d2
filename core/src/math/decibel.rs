/// Decibel / linear-power conversions.
pub struct DecibelHelper;

impl DecibelHelper {
    pub fn to_linear(db: f64) -> f64 {
        10f64.powf(db / 10.0)
    }

    pub fn to_db(power: f64) -> f64 {
        10.0 * power.log10()
    }
}
