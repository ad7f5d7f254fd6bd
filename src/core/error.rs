//! Error type shared by pooling and summarizing.

use thiserror::Error;

/// Result alias for pooling operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Structural failures. Numeric degeneracies (zero within-imputation
/// variance, zero between-imputation variance, non-positive degrees of
/// freedom) are not errors; they surface as NaN or infinite fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    /// Input is not a usable per-imputation coefficient table.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// Term names or their order differ between imputations.
    #[error(
        "Inconsistent term sets across imputations: imputation {imputation} has [{}], expected [{}]",
        .found.join(", "),
        .expected.join(", ")
    )]
    InconsistentTerms {
        imputation: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// No imputations were supplied.
    #[error("Insufficient data: at least one imputation is required")]
    InsufficientData,

    /// Pivot indices do not line up with the confidence interval rows.
    #[error("Rank deficiency: {reason} (pivot length {pivot_len}, interval rows {rows})")]
    RankDeficiency {
        pivot_len: usize,
        rows: usize,
        reason: String,
    },

    /// An option value is outside its valid range.
    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },
}

impl PoolError {
    pub(crate) fn invalid_parameter(
        name: &str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
