/// Two-way travel-gain profile used to shape synthetic echograms.
pub fn tvg_profile(range_m: &[f64], absorption_db_per_m: f64) -> Vec<f64> {
    range_m
        .iter()
        .map(|&range| 20.0 * range.log10() + 2.0 * absorption_db_per_m * range)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tvg_profile_grows_with_range() {
        let profile = tvg_profile(&[1.0, 10.0, 100.0], 0.01);
        assert!((profile[0] - 0.02).abs() < 1e-12);
        assert!(profile.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
