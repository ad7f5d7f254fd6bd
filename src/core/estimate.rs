//! Per-imputation coefficient tables supplied by the model-fit provider.

use crate::core::error::{PoolError, Result};
use crate::core::link::LinkFunction;
use faer::Col;
use serde::{Deserialize, Serialize};

/// One coefficient from the analysis of one imputed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEstimate {
    /// Term name, e.g. `"(Intercept)"` or `"age"`.
    pub term: String,
    /// Point estimate.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Complete-data degrees of freedom. `None` when the fit does not report
    /// one; may be `f64::INFINITY` for large-sample fits.
    pub dfcom: Option<f64>,
}

impl TermEstimate {
    /// Create a row without complete-data degrees of freedom.
    pub fn new(term: impl Into<String>, estimate: f64, std_error: f64) -> Self {
        Self {
            term: term.into(),
            estimate,
            std_error,
            dfcom: None,
        }
    }

    /// Set the complete-data degrees of freedom.
    pub fn with_dfcom(mut self, dfcom: f64) -> Self {
        self.dfcom = Some(dfcom);
        self
    }

    /// Within-imputation variance (squared standard error).
    pub fn variance(&self) -> f64 {
        self.std_error * self.std_error
    }
}

/// All coefficients from the analysis of one imputed dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Rows in model term order.
    pub terms: Vec<TermEstimate>,
    /// Link function of the fitted model, if the provider knows it.
    pub link: Option<LinkFunction>,
}

impl CoefficientTable {
    /// Create a table from rows.
    pub fn new(terms: Vec<TermEstimate>) -> Self {
        Self { terms, link: None }
    }

    /// Build a table from coefficient and standard error columns as returned by
    /// a regression solver.
    ///
    /// # Errors
    /// `TypeMismatch` if `names`, `estimates` and `std_errors` differ in length.
    pub fn from_columns<S: AsRef<str>>(
        names: &[S],
        estimates: &Col<f64>,
        std_errors: &Col<f64>,
        dfcom: Option<f64>,
    ) -> Result<Self> {
        let k = names.len();
        if estimates.nrows() != k || std_errors.nrows() != k {
            return Err(PoolError::TypeMismatch(format!(
                "coefficient columns disagree in length: {} names, {} estimates, {} standard errors",
                k,
                estimates.nrows(),
                std_errors.nrows()
            )));
        }

        let terms = names
            .iter()
            .enumerate()
            .map(|(j, name)| TermEstimate {
                term: name.as_ref().to_string(),
                estimate: estimates[j],
                std_error: std_errors[j],
                dfcom,
            })
            .collect();

        Ok(Self { terms, link: None })
    }

    /// Attach the link function name of the fitted model.
    pub fn with_link(mut self, link: LinkFunction) -> Self {
        self.link = Some(link);
        self
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the table has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term names in order.
    pub fn term_names(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.term.clone()).collect()
    }
}

/// A fitted model that can report its coefficient table.
///
/// Implement this for your own fitted-model type to pool it directly with
/// [`crate::pooling::pool_fits`]. Returning degrees of freedom is the
/// provider's responsibility; residual degrees of freedom are the usual
/// choice.
pub trait ImputationFit {
    /// Tidy coefficient table for this fit.
    fn coefficient_table(&self) -> Result<CoefficientTable>;
}

impl ImputationFit for CoefficientTable {
    fn coefficient_table(&self) -> Result<CoefficientTable> {
        Ok(self.clone())
    }
}
