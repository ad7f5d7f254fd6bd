//! Core types for pooled inference.

mod error;
mod estimate;
mod format;
mod link;
mod options;
mod result;

pub use error::{PoolError, Result};
pub use estimate::{CoefficientTable, ImputationFit, TermEstimate};
pub use link::LinkFunction;
pub use options::{
    PivotedIntervals, PoolOptions, PoolOptionsBuilder, SummaryOptions, SummaryOptionsBuilder,
};
pub use result::{PooledResult, PooledTerm, SummaryResult, SummaryRow};
