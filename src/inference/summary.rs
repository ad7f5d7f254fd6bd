//! Test statistics, p-values and intervals for pooled estimates.

use super::coefficient::two_sided_p_value;
use super::intervals::{merge_pivoted_intervals, pooled_interval};
use crate::core::{PooledResult, Result, SummaryOptions, SummaryResult, SummaryRow};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::pooling::{
    fraction_missing_information, proportion_of_variance, relative_increase_in_variance,
};

/// Derive inference for every pooled term.
///
/// `riv` and `lambda` are recomputed from `(m, b, ubar, t)` so that a different
/// number of imputations can be supplied through [`SummaryOptions::m`].
///
/// p-values follow an all-or-nothing rule: if any term has `df <= 0`, every
/// p-value is NaN and a [`Diagnostic::PValuesSuppressed`] is recorded.
///
/// With `exponentiate`, only the estimate and interval bounds are
/// transformed. A link other than `log` or `logit` (or no known link) records
/// a [`Diagnostic::LinkFunction`].
///
/// # Errors
/// - `InvalidParameter` for a confidence level outside `(0, 1)` when intervals
///   are requested
/// - `InsufficientData` for an `m` override of zero
/// - `RankDeficiency` for malformed pivoted intervals
///
/// # Example
///
/// ```rust,ignore
/// let options = SummaryOptions::builder()
///     .conf_int(true)
///     .exponentiate(true)
///     .link(LinkFunction::Logit)
///     .build();
/// let summary = summarize(&pooled, &options)?;
/// println!("{}", summary);
/// ```
pub fn summarize(pooled: &PooledResult, options: &SummaryOptions) -> Result<SummaryResult> {
    options.validate()?;

    let m = options.m.unwrap_or(pooled.m);
    let mut log = DiagnosticLog::default();

    let bounds = if options.conf_int {
        let bounds = match &options.intervals {
            Some(pivoted) => merge_pivoted_intervals(pivoted, pooled.len())?,
            None => pooled
                .terms
                .iter()
                .map(|term| pooled_interval(term, options.conf_level))
                .collect(),
        };
        Some(bounds)
    } else {
        None
    };

    let non_positive: Vec<String> = pooled
        .terms
        .iter()
        .filter(|r| r.df.is_nan() || r.df <= 0.0)
        .map(|r| r.term.clone())
        .collect();
    let report_p = non_positive.is_empty();
    if !report_p {
        log.push(Diagnostic::PValuesSuppressed {
            terms: non_positive,
        });
    }

    if options.exponentiate {
        let link = options.link.as_ref().or(pooled.link.as_ref());
        if !link.is_some_and(|l| l.supports_exponentiation()) {
            log.push(Diagnostic::LinkFunction {
                link: link.map(|l| l.to_string()),
            });
        }
    }

    let transform = |x: f64| if options.exponentiate { x.exp() } else { x };

    let rows = pooled
        .terms
        .iter()
        .enumerate()
        .map(|(j, r)| {
            let std_error = r.t.sqrt();
            let statistic = r.qbar / std_error;
            let riv = relative_increase_in_variance(r.b, r.ubar, m);
            let lambda = proportion_of_variance(r.b, r.t, m);
            let (conf_low, conf_high) = match &bounds {
                Some(b) => (Some(transform(b[j].0)), Some(transform(b[j].1))),
                None => (None, None),
            };

            SummaryRow {
                term: r.term.clone(),
                estimate: transform(r.qbar),
                std_error,
                conf_low,
                conf_high,
                statistic,
                df: r.df,
                p_value: if report_p {
                    two_sided_p_value(statistic, r.df)
                } else {
                    f64::NAN
                },
                riv,
                lambda,
                fmi: fraction_missing_information(riv, r.df),
            }
        })
        .collect();

    Ok(SummaryResult {
        rows,
        conf_level: options.conf_int.then_some(options.conf_level),
        provider_intervals: options.conf_int && options.intervals.is_some(),
        exponentiated: options.exponentiate,
        diagnostics: log.into_vec(),
    })
}
