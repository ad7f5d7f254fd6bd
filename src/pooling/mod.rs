//! Combination of per-imputation estimates with Rubin's rules.

mod rubin;
mod scalar;

pub use rubin::{
    barnard_rubin_df, fraction_missing_information, pool, pool_fits, pool_with,
    proportion_of_variance, relative_increase_in_variance, total_variance,
};
pub use scalar::{pool_scalar, SCALAR_TERM};
