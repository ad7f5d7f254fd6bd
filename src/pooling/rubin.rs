//! Rubin's rules for combining estimates from multiply-imputed data.
//!
//! For `m` imputations with estimates `Q_l` and within-imputation variances
//! `U_l`:
//!
//! ```text
//! qbar = (1/m) Σ Q_l
//! ubar = (1/m) Σ U_l
//! b    = 1/(m-1) Σ (Q_l - qbar)²
//! t    = ubar + (1 + 1/m) b
//! ```
//!
//! Degrees of freedom use the Barnard-Rubin small-sample adjustment, which
//! interpolates between the classical Rubin (1987) df and the complete-data
//! df so that the pooled df never exceeds `dfcom`.
//!
//! # References
//!
//! - Rubin, D.B. (1987). *Multiple Imputation for Nonresponse in Surveys*. Wiley.
//! - Barnard, J. and Rubin, D.B. (1999). "Small-sample degrees of freedom with
//!   multiple imputation." *Biometrika*, 86(4), 948–955.
//! - van Buuren, S. (2018). *Flexible Imputation of Missing Data*, 2nd ed., §2.3.

use crate::core::{
    CoefficientTable, ImputationFit, PoolError, PoolOptions, PooledResult, PooledTerm, Result,
};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use faer::Mat;
use std::collections::HashSet;

/// Pool coefficient tables from `m` imputations with Rubin's rules.
///
/// Every table must list the same terms in the same order. Output rows follow
/// that term order.
///
/// # Errors
/// - `InsufficientData` if `fits` is empty
/// - `InconsistentTerms` if any table's terms differ from the first table's
/// - `TypeMismatch` if a term name appears twice in a table
/// - `InvalidParameter` if a fit reports a non-positive `dfcom` (a NaN
///   `dfcom` is treated as not reported)
///
/// # Example
///
/// ```rust,ignore
/// use anofox_mipool::prelude::*;
///
/// let pooled = pool(&tables)?;
/// println!("{}", pooled);
/// ```
pub fn pool(fits: &[CoefficientTable]) -> Result<PooledResult> {
    pool_with(fits, &PoolOptions::default())
}

/// Pool coefficient tables with explicit options.
///
/// See [`pool`].
pub fn pool_with(fits: &[CoefficientTable], options: &PoolOptions) -> Result<PooledResult> {
    options.validate()?;

    let m = fits.len();
    let first = fits.first().ok_or(PoolError::InsufficientData)?;
    check_terms(fits)?;

    let k = first.len();
    tracing::debug!(m, terms = k, "pooling imputations");

    // m × k: one row per imputation, one column per term
    let estimates = Mat::from_fn(m, k, |l, j| fits[l].terms[j].estimate);
    let variances = Mat::from_fn(m, k, |l, j| fits[l].terms[j].variance());

    let mut log = DiagnosticLog::default();
    let mut terms = Vec::with_capacity(k);

    for j in 0..k {
        let name = &first.terms[j].term;
        let qbar = column_mean(&estimates, j);
        let ubar = column_mean(&variances, j);
        let b = column_variance(&estimates, j, qbar);
        let t = total_variance(ubar, b, m);

        let reported = match options.dfcom {
            Some(dfcom) => Some(dfcom),
            None => fit_dfcom(name, first.terms[j].dfcom)?,
        };
        let dfcom = match reported {
            Some(dfcom) => dfcom,
            None => {
                log.push(Diagnostic::LargeSampleAssumed { term: name.clone() });
                f64::INFINITY
            }
        };

        let riv = relative_increase_in_variance(b, ubar, m);
        let lambda = proportion_of_variance(b, t, m);
        let df = barnard_rubin_df(m, lambda, dfcom);
        let fmi = fraction_missing_information(riv, df);

        terms.push(PooledTerm {
            term: name.clone(),
            qbar,
            ubar,
            b,
            t,
            dfcom,
            df,
            riv,
            lambda,
            fmi,
        });
    }

    Ok(PooledResult {
        m,
        terms,
        link: first.link.clone(),
        diagnostics: log.into_vec(),
    })
}

/// Pool any collection of fitted models that can report a coefficient table.
pub fn pool_fits<F: ImputationFit>(fits: &[F], options: &PoolOptions) -> Result<PooledResult> {
    let tables = fits
        .iter()
        .map(ImputationFit::coefficient_table)
        .collect::<Result<Vec<_>>>()?;
    pool_with(&tables, options)
}

/// Complete-data df reported by a fit. NaN counts as not reported.
fn fit_dfcom(term: &str, dfcom: Option<f64>) -> Result<Option<f64>> {
    match dfcom {
        Some(v) if v.is_nan() => Ok(None),
        Some(v) if v <= 0.0 => Err(PoolError::invalid_parameter(
            &format!("dfcom[{}]", term),
            v,
            "complete-data degrees of freedom must be positive",
        )),
        other => Ok(other),
    }
}

/// Verify that the first table has distinct term names and that every table
/// repeats them in order.
fn check_terms(fits: &[CoefficientTable]) -> Result<()> {
    let Some(first) = fits.first() else {
        return Ok(());
    };

    let mut seen = HashSet::with_capacity(first.len());
    if let Some(dup) = first.terms.iter().find(|t| !seen.insert(t.term.as_str())) {
        return Err(PoolError::TypeMismatch(format!(
            "term '{}' appears more than once in imputation 0",
            dup.term
        )));
    }

    for (l, fit) in fits.iter().enumerate().skip(1) {
        let same = fit.len() == first.len()
            && fit
                .terms
                .iter()
                .zip(&first.terms)
                .all(|(a, b)| a.term == b.term);
        if !same {
            return Err(PoolError::InconsistentTerms {
                imputation: l,
                expected: first.term_names(),
                found: fit.term_names(),
            });
        }
    }
    Ok(())
}

fn column_mean(x: &Mat<f64>, j: usize) -> f64 {
    let m = x.nrows();
    (0..m).map(|l| x[(l, j)]).sum::<f64>() / m as f64
}

/// Sample variance with divisor `m - 1`; zero for a single imputation.
fn column_variance(x: &Mat<f64>, j: usize, mean: f64) -> f64 {
    let m = x.nrows();
    if m < 2 {
        return 0.0;
    }
    let ss: f64 = (0..m).map(|l| (x[(l, j)] - mean).powi(2)).sum();
    ss / (m - 1) as f64
}

/// Total variance `t = ubar + b + b/m`.
///
/// A zero between-imputation variance contributes nothing, so `m = 1` gives
/// `t = ubar` exactly.
pub fn total_variance(ubar: f64, b: f64, m: usize) -> f64 {
    if b == 0.0 {
        ubar
    } else {
        ubar + b + b / m as f64
    }
}

/// Relative increase in variance `riv = (1 + 1/m) b / ubar`.
///
/// `ubar = 0` yields `inf` (or NaN when `b` is also zero); the value is not
/// clamped.
pub fn relative_increase_in_variance(b: f64, ubar: f64, m: usize) -> f64 {
    (1.0 + 1.0 / m as f64) * b / ubar
}

/// Proportion of total variance due to missingness, `lambda = (1 + 1/m) b / t`.
pub fn proportion_of_variance(b: f64, t: f64, m: usize) -> f64 {
    (1.0 + 1.0 / m as f64) * b / t
}

/// Barnard-Rubin adjusted degrees of freedom.
///
/// ```text
/// df_old = (m - 1) / lambda²
/// df_obs = (dfcom + 1) / (dfcom + 3) · dfcom · (1 - lambda)
/// df     = df_old · df_obs / (df_old + df_obs)
/// ```
///
/// `lambda = 0` makes `df_old` infinite and the result is `df_obs`. An
/// infinite `dfcom` makes the result `df_old`.
pub fn barnard_rubin_df(m: usize, lambda: f64, dfcom: f64) -> f64 {
    let df_old = if lambda == 0.0 {
        f64::INFINITY
    } else {
        (m as f64 - 1.0) / (lambda * lambda)
    };

    if dfcom.is_infinite() {
        return df_old;
    }

    let df_obs = (dfcom + 1.0) / (dfcom + 3.0) * dfcom * (1.0 - lambda);
    if df_old.is_infinite() {
        df_obs
    } else {
        df_old * df_obs / (df_old + df_obs)
    }
}

/// Fraction of missing information `fmi = (riv + 2/(df + 3)) / (riv + 1)`.
pub fn fraction_missing_information(riv: f64, df: f64) -> f64 {
    (riv + 2.0 / (df + 3.0)) / (riv + 1.0)
}
