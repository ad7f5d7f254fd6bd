//! Common test utilities and data generators.

use anofox_mipool::{CoefficientTable, LinkFunction, TermEstimate};
use faer::Col;

/// Build one table per imputation from per-term estimate and standard error
/// series. `estimates[j][l]` is term `j` in imputation `l`.
#[allow(dead_code)]
pub fn tables_from_series(
    names: &[&str],
    estimates: &[&[f64]],
    std_errors: &[&[f64]],
    dfcom: Option<f64>,
) -> Vec<CoefficientTable> {
    let m = estimates[0].len();
    (0..m)
        .map(|l| {
            let est = Col::from_fn(names.len(), |j| estimates[j][l]);
            let se = Col::from_fn(names.len(), |j| std_errors[j][l]);
            CoefficientTable::from_columns(names, &est, &se, dfcom)
                .expect("series lengths should agree")
        })
        .collect()
}

/// Generate `m` tables of `n_terms` terms with deterministic pseudo-random
/// spread around `(j + 1)` for term `j`.
#[allow(dead_code)]
pub fn generate_imputation_tables(
    m: usize,
    n_terms: usize,
    spread: f64,
    dfcom: f64,
    seed: u64,
) -> Vec<CoefficientTable> {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = || -> f64 {
        rng_state = rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    (0..m)
        .map(|_| {
            let terms = (0..n_terms)
                .map(|j| {
                    let estimate = (j + 1) as f64 + spread * next_rand();
                    let std_error = 0.2 + 0.05 * (1.0 + next_rand());
                    TermEstimate::new(format!("x{}", j), estimate, std_error).with_dfcom(dfcom)
                })
                .collect();
            CoefficientTable::new(terms)
        })
        .collect()
}

/// Logistic-regression style tables with a logit link.
#[allow(dead_code)]
pub fn generate_logit_tables(m: usize) -> Vec<CoefficientTable> {
    generate_imputation_tables(m, 3, 0.1, 96.0, 11)
        .into_iter()
        .map(|t| t.with_link(LinkFunction::Logit))
        .collect()
}

/// Approximate equality check for floating point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
