//! Student-t tail probabilities and quantiles for pooled coefficients.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Two-sided p-value for statistic `t_stat` with `df` degrees of freedom.
///
/// Infinite `df` uses the standard normal. Returns NaN when `df` is not
/// positive or the statistic is NaN.
pub fn two_sided_p_value(t_stat: f64, df: f64) -> f64 {
    if t_stat.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let upper = upper_tail(t_stat.abs(), df);
    (2.0 * upper).min(1.0)
}

/// Critical value `q` with `P(|T| <= q) = level` for `T ~ t(df)`.
///
/// Returns NaN when `df` is not positive.
pub fn critical_value(level: f64, df: f64) -> f64 {
    if df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let p = 1.0 - (1.0 - level) / 2.0;
    if df.is_infinite() {
        return Normal::new(0.0, 1.0).map_or(f64::NAN, |d| d.inverse_cdf(p));
    }
    StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.inverse_cdf(p))
}

/// `P(T > x)`, computed as `sf` to keep precision for large statistics.
fn upper_tail(x: f64, df: f64) -> f64 {
    if df.is_infinite() {
        return Normal::new(0.0, 1.0).map_or(f64::NAN, |d| d.sf(x));
    }
    StudentsT::new(0.0, 1.0, df).map_or(f64::NAN, |d| d.sf(x))
}
