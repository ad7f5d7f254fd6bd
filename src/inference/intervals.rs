//! Confidence intervals for pooled terms.

use super::coefficient::critical_value;
use crate::core::{PivotedIntervals, PoolError, PooledTerm, Result};

/// Student-t interval `qbar ± q(df) · sqrt(t)` at `level`, using the term's own
/// degrees of freedom. Bounds are NaN when `df` is not positive.
pub fn pooled_interval(term: &PooledTerm, level: f64) -> (f64, f64) {
    let half_width = critical_value(level, term.df) * term.t.sqrt();
    (term.qbar - half_width, term.qbar + half_width)
}

/// Reorder provider interval rows into pooled term order.
///
/// Term `j < pivot.len()` receives `rows[pivot[j]]`. Terms past the pivot were
/// excluded from the rank-deficient design and receive NaN bounds.
///
/// # Errors
/// `RankDeficiency` if the pivot and rows differ in length, the pivot is
/// longer than the number of terms, or a pivot entry is out of range or
/// repeated.
pub fn merge_pivoted_intervals(
    intervals: &PivotedIntervals,
    n_terms: usize,
) -> Result<Vec<(f64, f64)>> {
    let PivotedIntervals { rows, pivot } = intervals;
    let err = |reason: &str| PoolError::RankDeficiency {
        pivot_len: pivot.len(),
        rows: rows.len(),
        reason: reason.to_string(),
    };

    if pivot.len() != rows.len() {
        return Err(err("pivot and interval rows differ in length"));
    }
    if pivot.len() > n_terms {
        return Err(err("more pivoted rows than pooled terms"));
    }

    let mut seen = vec![false; rows.len()];
    for &p in pivot {
        if p >= rows.len() {
            return Err(err("pivot index out of range"));
        }
        if std::mem::replace(&mut seen[p], true) {
            return Err(err("pivot index repeated"));
        }
    }

    let mut merged = vec![(f64::NAN, f64::NAN); n_terms];
    for (j, &p) in pivot.iter().enumerate() {
        merged[j] = rows[p];
    }
    Ok(merged)
}
