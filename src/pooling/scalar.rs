//! Pooling of a single scalar quantity.

use super::rubin::pool_with;
use crate::core::{CoefficientTable, PoolError, PoolOptions, PooledResult, Result, TermEstimate};

/// Term name used for [`pool_scalar`] results.
pub const SCALAR_TERM: &str = "scalar";

/// Pool one scalar estimate from `m` imputations.
///
/// `estimates[l]` and `variances[l]` are the estimate and its
/// within-imputation variance (not standard error) in imputation `l`. The
/// complete-data degrees of freedom are `n - k` for sample size `n` and `k`
/// estimated parameters; pass `n = f64::INFINITY` for a large-sample quantity.
///
/// # Errors
/// - `InsufficientData` if no estimates are given
/// - `TypeMismatch` if `estimates` and `variances` differ in length
/// - `InvalidParameter` if `n - k` is not positive
pub fn pool_scalar(estimates: &[f64], variances: &[f64], n: f64, k: f64) -> Result<PooledResult> {
    if estimates.is_empty() {
        return Err(PoolError::InsufficientData);
    }
    if estimates.len() != variances.len() {
        return Err(PoolError::TypeMismatch(format!(
            "{} estimates but {} variances",
            estimates.len(),
            variances.len()
        )));
    }
    if let Some(&v) = variances.iter().find(|v| **v < 0.0) {
        return Err(PoolError::invalid_parameter(
            "variances",
            v,
            "within-imputation variances must be non-negative",
        ));
    }

    let dfcom = n - k;
    let tables: Vec<CoefficientTable> = estimates
        .iter()
        .zip(variances)
        .map(|(&q, &u)| {
            CoefficientTable::new(vec![
                TermEstimate::new(SCALAR_TERM, q, u.sqrt()).with_dfcom(dfcom)
            ])
        })
        .collect();

    pool_with(&tables, &PoolOptions::builder().dfcom(dfcom).build())
}
