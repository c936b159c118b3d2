/// NaN-aware reductions used by the estimation stage and summaries.
pub struct StatsHelper;

impl StatsHelper {
    /// Minimum ignoring NaN entries. NaN when no non-NaN value exists,
    /// never an infinity sentinel.
    pub fn nanmin<I>(values: I) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::NAN;
        for value in values {
            if value.is_nan() {
                continue;
            }
            if min.is_nan() || value < min {
                min = value;
            }
        }
        min
    }

    /// Smallest and largest finite values, if any.
    pub fn finite_bounds<I>(values: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(f64, f64)> = None;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
        bounds
    }
}
