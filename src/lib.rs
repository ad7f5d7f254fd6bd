//! Pooled inference for analyses of multiply-imputed data.
//!
//! Fit the same model to each of `m` completed datasets, hand the `m`
//! coefficient tables to [`pool`], and derive tests and intervals with
//! [`summarize`]. Pooling follows Rubin's rules with the Barnard-Rubin
//! small-sample degrees of freedom.
//!
//! # Example
//!
//! ```rust,ignore
//! use anofox_mipool::prelude::*;
//!
//! // One table per imputed dataset, identical terms in identical order
//! let tables: Vec<CoefficientTable> = fits
//!     .iter()
//!     .map(|fit| CoefficientTable::from_columns(&names, &fit.coefficients, &fit.std_errors, Some(fit.residual_df)))
//!     .collect::<Result<_, _>>()?;
//!
//! let pooled = pool(&tables)?;
//!
//! let summary = summarize(
//!     &pooled,
//!     &SummaryOptions::builder().conf_int(true).build(),
//! )?;
//! println!("{}", summary);
//! ```

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod pooling;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CoefficientTable, ImputationFit, LinkFunction, PivotedIntervals, PoolError, PoolOptions,
        PooledResult, PooledTerm, SummaryOptions, SummaryResult, SummaryRow, TermEstimate,
    };
    pub use crate::diagnostics::Diagnostic;
    pub use crate::inference::summarize;
    pub use crate::pooling::{pool, pool_fits, pool_scalar, pool_with};
}

pub use crate::core::{
    CoefficientTable, ImputationFit, LinkFunction, PivotedIntervals, PoolError, PoolOptions,
    PooledResult, PooledTerm, Result, SummaryOptions, SummaryResult, SummaryRow, TermEstimate,
};
pub use crate::diagnostics::Diagnostic;
pub use crate::inference::summarize;
pub use crate::pooling::{pool, pool_fits, pool_scalar, pool_with};
