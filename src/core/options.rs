//! Options for pooling and summarizing.

use crate::core::error::{PoolError, Result};
use crate::core::link::LinkFunction;
use serde::{Deserialize, Serialize};

/// Options for [`crate::pooling::pool_with`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolOptions {
    /// Complete-data degrees of freedom for every term. Overrides whatever
    /// the fits report.
    pub dfcom: Option<f64>,
}

impl PoolOptions {
    /// Create a builder with default options.
    pub fn builder() -> PoolOptionsBuilder {
        PoolOptionsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(dfcom) = self.dfcom {
            if dfcom.is_nan() || dfcom <= 0.0 {
                return Err(PoolError::invalid_parameter(
                    "dfcom",
                    dfcom,
                    "must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Builder for [`PoolOptions`].
#[derive(Debug, Clone, Default)]
pub struct PoolOptionsBuilder {
    dfcom: Option<f64>,
}

impl PoolOptionsBuilder {
    /// Set the complete-data degrees of freedom.
    ///
    /// Default: taken from the fits; infinite if they report none.
    pub fn dfcom(mut self, dfcom: f64) -> Self {
        self.dfcom = Some(dfcom);
        self
    }

    /// Build the options.
    pub fn build(self) -> PoolOptions {
        PoolOptions { dfcom: self.dfcom }
    }
}

/// Confidence interval rows computed by the provider for a rank-deficient
/// fit, together with the pivot mapping them onto pooled terms.
///
/// `pivot[j]` is the row of `rows` that belongs to pooled term `j`. Terms at
/// positions `pivot.len()..` were excluded from the design and get no
/// interval. Rows must be computed at the summary's `conf_level`; the summary
/// reports that level and sets `provider_intervals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotedIntervals {
    /// Raw `(lower, upper)` rows in the provider's order.
    pub rows: Vec<(f64, f64)>,
    /// Row index for each retained term.
    pub pivot: Vec<usize>,
}

/// Options for [`crate::inference::summarize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Report confidence intervals.
    pub conf_int: bool,
    /// Confidence level of the intervals.
    pub conf_level: f64,
    /// Report `exp(estimate)` and exponentiated interval bounds.
    pub exponentiate: bool,
    /// Link function; overrides the link carried by the pooled result.
    pub link: Option<LinkFunction>,
    /// Number of imputations; overrides the pooled result's `m`.
    pub m: Option<usize>,
    /// Provider-computed intervals for rank-deficient fits.
    pub intervals: Option<PivotedIntervals>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            conf_int: false,
            conf_level: 0.95,
            exponentiate: false,
            link: None,
            m: None,
            intervals: None,
        }
    }
}

impl SummaryOptions {
    /// Create a builder with default options.
    pub fn builder() -> SummaryOptionsBuilder {
        SummaryOptionsBuilder::default()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.conf_int && !(self.conf_level > 0.0 && self.conf_level < 1.0) {
            return Err(PoolError::invalid_parameter(
                "conf_level",
                self.conf_level,
                "must lie in (0, 1)",
            ));
        }
        if self.m == Some(0) {
            return Err(PoolError::InsufficientData);
        }
        Ok(())
    }
}

/// Builder for [`SummaryOptions`].
#[derive(Debug, Clone, Default)]
pub struct SummaryOptionsBuilder {
    options: SummaryOptions,
}

impl SummaryOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to compute confidence intervals.
    ///
    /// Default is false.
    pub fn conf_int(mut self, conf_int: bool) -> Self {
        self.options.conf_int = conf_int;
        self
    }

    /// Set the confidence level. Implies `conf_int(true)`.
    ///
    /// Default is 0.95.
    pub fn conf_level(mut self, level: f64) -> Self {
        self.options.conf_level = level;
        self.options.conf_int = true;
        self
    }

    /// Whether to exponentiate estimates and interval bounds.
    ///
    /// Default is false.
    pub fn exponentiate(mut self, exponentiate: bool) -> Self {
        self.options.exponentiate = exponentiate;
        self
    }

    /// Set the link function of the analysis model.
    pub fn link(mut self, link: LinkFunction) -> Self {
        self.options.link = Some(link);
        self
    }

    /// Override the number of imputations used for `riv` and `lambda`.
    pub fn m(mut self, m: usize) -> Self {
        self.options.m = Some(m);
        self
    }

    /// Use provider-computed intervals from a rank-deficient fit. Implies
    /// `conf_int(true)`.
    pub fn pivoted_intervals(mut self, rows: Vec<(f64, f64)>, pivot: Vec<usize>) -> Self {
        self.options.intervals = Some(PivotedIntervals { rows, pivot });
        self.options.conf_int = true;
        self
    }

    /// Build the options.
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}
