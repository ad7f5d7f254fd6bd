//! Integration tests against hand-computed Rubin's rules reference values.
//!
//! Reference values follow `mice::pool()` / `summary(..., conf.int = TRUE)`:
//!
//! ```r
//! library(mice)
//! q  <- list(c(2.31, 2.45, 2.18, 2.52, 2.39), c(0.112, 0.098, 0.131, 0.104, 0.121))
//! se <- list(c(0.41, 0.43, 0.40, 0.44, 0.42), c(0.021, 0.023, 0.020, 0.022, 0.021))
//! # per term: pool.scalar(q[[j]], se[[j]]^2, n = 47, k = 2)
//! #   (Intercept): qbar 2.37   ubar 0.1766   b 0.01725   t 0.1973
//! #                riv 0.117214  lambda 0.104916  df 34.893937  fmi 0.152158
//! #   age:         qbar 0.1132 ubar 0.000459 b 0.0001737 t 0.00066744
//! #                riv 0.454118  lambda 0.312298  df 17.211367  fmi 0.380349
//! ```

mod common;

use anofox_mipool::prelude::*;
use approx::assert_relative_eq;
use common::tables_from_series;

const NAMES: [&str; 2] = ["(Intercept)", "age"];
const EST_INTERCEPT: [f64; 5] = [2.31, 2.45, 2.18, 2.52, 2.39];
const EST_AGE: [f64; 5] = [0.112, 0.098, 0.131, 0.104, 0.121];
const SE_INTERCEPT: [f64; 5] = [0.41, 0.43, 0.40, 0.44, 0.42];
const SE_AGE: [f64; 5] = [0.021, 0.023, 0.020, 0.022, 0.021];
const DFCOM: f64 = 45.0;

fn reference_tables() -> Vec<CoefficientTable> {
    tables_from_series(
        &NAMES,
        &[&EST_INTERCEPT[..], &EST_AGE[..]],
        &[&SE_INTERCEPT[..], &SE_AGE[..]],
        Some(DFCOM),
    )
}

#[test]
fn test_pooled_intercept() {
    let pooled = pool(&reference_tables()).unwrap();
    let r = pooled.term("(Intercept)").unwrap();

    assert_eq!(pooled.m(), 5);
    assert_relative_eq!(r.qbar, 2.37, epsilon = 1e-12);
    assert_relative_eq!(r.ubar, 0.1766, epsilon = 1e-12);
    assert_relative_eq!(r.b, 0.01725, epsilon = 1e-12);
    assert_relative_eq!(r.t, 0.1973, epsilon = 1e-12);
    assert_relative_eq!(r.riv, 0.117214, epsilon = 1e-6);
    assert_relative_eq!(r.lambda, 0.104916, epsilon = 1e-6);
    assert_relative_eq!(r.df, 34.893937, epsilon = 1e-5);
    assert_relative_eq!(r.fmi, 0.152158, epsilon = 1e-6);
    assert_eq!(r.dfcom, DFCOM);
}

#[test]
fn test_pooled_slope() {
    let pooled = pool(&reference_tables()).unwrap();
    let r = pooled.term("age").unwrap();

    assert_relative_eq!(r.qbar, 0.1132, epsilon = 1e-12);
    assert_relative_eq!(r.ubar, 0.000459, epsilon = 1e-12);
    assert_relative_eq!(r.b, 0.0001737, epsilon = 1e-12);
    assert_relative_eq!(r.t, 0.00066744, epsilon = 1e-12);
    assert_relative_eq!(r.riv, 0.454118, epsilon = 1e-6);
    assert_relative_eq!(r.lambda, 0.312298, epsilon = 1e-6);
    assert_relative_eq!(r.df, 17.211367, epsilon = 1e-5);
    assert_relative_eq!(r.fmi, 0.380349, epsilon = 1e-6);
}

#[test]
fn test_summary_matches_pooled_quantities() {
    let pooled = pool(&reference_tables()).unwrap();
    let summary = summarize(&pooled, &SummaryOptions::builder().conf_int(true).build()).unwrap();

    assert_eq!(summary.len(), 2);
    assert_eq!(summary.conf_level, Some(0.95));

    for (row, p) in summary.rows.iter().zip(&pooled.terms) {
        assert_eq!(row.term, p.term);
        assert_eq!(row.estimate, p.qbar);
        assert_relative_eq!(row.std_error, p.t.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(row.statistic, p.qbar / p.t.sqrt(), epsilon = 1e-12);
        assert_eq!(row.df, p.df);
        assert_relative_eq!(row.riv, p.riv, epsilon = 1e-12);
        assert_relative_eq!(row.lambda, p.lambda, epsilon = 1e-12);
        assert_relative_eq!(row.fmi, p.fmi, epsilon = 1e-12);

        let (lo, hi) = (row.conf_low.unwrap(), row.conf_high.unwrap());
        assert!(lo < row.estimate && row.estimate < hi);
        assert_relative_eq!(hi - row.estimate, row.estimate - lo, epsilon = 1e-12);
    }

    let age = summary.row("age").unwrap();
    assert_relative_eq!(age.statistic, 4.381677, epsilon = 1e-5);
    // |t| = 4.38 on 17 df is well below 0.001
    assert!(age.p_value > 0.0 && age.p_value < 0.001);
}

#[test]
fn test_interval_width_uses_term_df() {
    let pooled = pool(&reference_tables()).unwrap();
    let summary = summarize(&pooled, &SummaryOptions::builder().conf_level(0.9).build()).unwrap();

    for (row, p) in summary.rows.iter().zip(&pooled.terms) {
        let q = anofox_mipool::inference::critical_value(0.9, p.df);
        assert_relative_eq!(
            row.conf_high.unwrap() - row.estimate,
            q * p.t.sqrt(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_pool_scalar_agrees_with_table_pooling() {
    let pooled = pool(&reference_tables()).unwrap();
    let variances: Vec<f64> = SE_AGE.iter().map(|s| s * s).collect();
    let scalar = pool_scalar(&EST_AGE, &variances, 47.0, 2.0).unwrap();

    let a = pooled.term("age").unwrap();
    let s = &scalar.terms[0];
    assert_relative_eq!(s.qbar, a.qbar, epsilon = 1e-15);
    assert_relative_eq!(s.t, a.t, epsilon = 1e-15);
    assert_relative_eq!(s.df, a.df, epsilon = 1e-9);
}
