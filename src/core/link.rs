//! Link function names reported by the model-fit provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Link function of the model fitted to each imputed dataset.
///
/// Only used to judge whether exponentiated coefficients have a ratio
/// interpretation (odds ratios under `logit`, rate ratios under `log`).
/// Serialized as its plain name; any name deserializes, unknown ones as
/// `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkFunction {
    Identity,
    Log,
    Logit,
    Probit,
    Cloglog,
    Inverse,
    Sqrt,
    /// Any link the provider names that is not listed above.
    Other(String),
}

impl LinkFunction {
    /// Whether `exp(coefficient)` is a ratio for this link.
    pub fn supports_exponentiation(&self) -> bool {
        matches!(self, Self::Log | Self::Logit)
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        match self {
            Self::Identity => "identity",
            Self::Log => "log",
            Self::Logit => "logit",
            Self::Probit => "probit",
            Self::Cloglog => "cloglog",
            Self::Inverse => "inverse",
            Self::Sqrt => "sqrt",
            Self::Other(name) => name,
        }
    }
}

impl FromStr for LinkFunction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let link = match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Self::Identity,
            "log" => Self::Log,
            "logit" => Self::Logit,
            "probit" => Self::Probit,
            "cloglog" => Self::Cloglog,
            "inverse" => Self::Inverse,
            "sqrt" => Self::Sqrt,
            _ => Self::Other(s.trim().to_string()),
        };
        Ok(link)
    }
}

impl From<String> for LinkFunction {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(link) => link,
            Err(never) => match never {},
        }
    }
}

impl From<LinkFunction> for String {
    fn from(link: LinkFunction) -> Self {
        link.name().to_string()
    }
}

impl fmt::Display for LinkFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
