//! Pooled and summarized result tables.

use crate::core::link::LinkFunction;
use crate::diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};

/// Rubin's-rules quantities for one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PooledTerm {
    /// Term name.
    pub term: String,
    /// Mean of the estimates across imputations.
    pub qbar: f64,
    /// Mean within-imputation variance.
    pub ubar: f64,
    /// Between-imputation variance.
    pub b: f64,
    /// Total variance `ubar + (1 + 1/m) b`.
    pub t: f64,
    /// Complete-data degrees of freedom.
    pub dfcom: f64,
    /// Barnard-Rubin adjusted degrees of freedom.
    pub df: f64,
    /// Relative increase in variance due to nonresponse.
    pub riv: f64,
    /// Proportion of total variance attributable to missingness.
    pub lambda: f64,
    /// Fraction of missing information.
    pub fmi: f64,
}

/// Output of [`crate::pooling::pool`]: one row per term, in input term order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PooledResult {
    /// Number of imputations pooled.
    pub m: usize,
    /// Pooled rows.
    pub terms: Vec<PooledTerm>,
    /// Link function reported by the first imputation.
    pub link: Option<LinkFunction>,
    /// Advisories raised while pooling.
    pub diagnostics: Vec<Diagnostic>,
}

impl PooledResult {
    /// Number of imputations.
    pub fn m(&self) -> usize {
        self.m
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if no terms were pooled.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Look up a pooled row by term name.
    pub fn term(&self, name: &str) -> Option<&PooledTerm> {
        self.terms.iter().find(|t| t.term == name)
    }

    /// Advisories raised while pooling.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Inference for one term.
///
/// Field order matches the rendered column order:
/// `estimate, std.error, [conf.low, conf.high], statistic, df, p.value, riv, lambda, fmi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub term: String,
    /// Pooled estimate, exponentiated if requested.
    pub estimate: f64,
    /// `sqrt(t)`, never exponentiated.
    pub std_error: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_high: Option<f64>,
    /// `qbar / sqrt(t)`.
    pub statistic: f64,
    pub df: f64,
    /// Two-sided p-value; NaN if any term in the table has `df <= 0`.
    pub p_value: f64,
    pub riv: f64,
    pub lambda: f64,
    pub fmi: f64,
}

/// Output of [`crate::inference::summarize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Rows in pooled term order.
    pub rows: Vec<SummaryRow>,
    /// Confidence level, if intervals were reported. For provider rows this is
    /// the requested level; the provider is expected to have used it.
    pub conf_level: Option<f64>,
    /// Whether the bounds are the provider's pivoted rows rather than
    /// intervals computed from the pooled `t` and `df`.
    #[serde(default)]
    pub provider_intervals: bool,
    /// Whether estimates and bounds are on the exponentiated scale.
    pub exponentiated: bool,
    /// Advisories raised while summarizing.
    pub diagnostics: Vec<Diagnostic>,
}

impl SummaryResult {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether confidence bounds are present.
    pub fn has_conf_int(&self) -> bool {
        self.conf_level.is_some()
    }

    /// Look up a row by term name.
    pub fn row(&self, name: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.term == name)
    }

    /// Advisories raised while summarizing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Column headers in display order, excluding `term`.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut cols = vec!["estimate", "std.error"];
        if self.has_conf_int() {
            cols.extend(["conf.low", "conf.high"]);
        }
        cols.extend(["statistic", "df", "p.value", "riv", "lambda", "fmi"]);
        cols
    }
}
