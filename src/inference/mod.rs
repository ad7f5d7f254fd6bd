//! Statistical inference (test statistics, p-values, confidence intervals)
//! for pooled estimates.

mod coefficient;
mod intervals;
mod summary;

pub use coefficient::{critical_value, two_sided_p_value};
pub use intervals::{merge_pivoted_intervals, pooled_interval};
pub use summary::summarize;
