//! Non-fatal advisories raised while pooling or summarizing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An advisory attached to a result instead of aborting the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Exponentiation was requested but the link is neither `log` nor
    /// `logit`. `link` is `None` when the provider did not report one.
    LinkFunction { link: Option<String> },
    /// No complete-data degrees of freedom were available for `term`;
    /// `dfcom` was taken as infinite.
    LargeSampleAssumed { term: String },
    /// At least one term has `df <= 0`, so p-values were withheld for all
    /// terms.
    PValuesSuppressed { terms: Vec<String> },
}

impl Diagnostic {
    /// Emit the advisory as a `tracing` warning.
    pub fn emit(&self) {
        match self {
            Self::LinkFunction { link } => tracing::warn!(
                link = link.as_deref().unwrap_or("unknown"),
                "{}",
                self
            ),
            Self::LargeSampleAssumed { term } => {
                tracing::warn!(term = %term, "{}", self)
            }
            Self::PValuesSuppressed { terms } => {
                tracing::warn!(count = terms.len(), "{}", self)
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkFunction { link } => write!(
                f,
                "Exponentiate requested for link '{}'; exp(estimate) is only a ratio under a log or logit link",
                link.as_deref().unwrap_or("unknown")
            ),
            Self::LargeSampleAssumed { term } => write!(
                f,
                "No complete-data degrees of freedom for term '{}'; large sample assumed",
                term
            ),
            Self::PValuesSuppressed { terms } => write!(
                f,
                "Non-positive degrees of freedom for [{}]; p-values not reported",
                terms.join(", ")
            ),
        }
    }
}

/// Collects advisories and logs each one as it is recorded.
#[derive(Debug, Clone, Default)]
pub(crate) struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        self.entries.push(diagnostic);
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
