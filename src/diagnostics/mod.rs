//! Advisory diagnostics for pooled inference.
//!
//! Degenerate but legitimate situations do not abort pooling. They are
//! recorded as [`Diagnostic`] values on the returned result and logged through
//! `tracing` at `WARN` level:
//!
//! - **Link function**: exponentiated coefficients requested under a link
//!   other than `log` or `logit`
//! - **Large sample**: no complete-data degrees of freedom were available
//! - **Suppressed p-values**: some term has non-positive degrees of freedom
//!
//! ```rust,ignore
//! let summary = summarize(&pooled, &SummaryOptions::builder().exponentiate(true).build())?;
//! for d in summary.diagnostics() {
//!     eprintln!("Warning: {}", d);
//! }
//! ```

mod advisory;

pub use advisory::Diagnostic;
pub(crate) use advisory::DiagnosticLog;
