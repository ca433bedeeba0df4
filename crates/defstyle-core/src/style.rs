//! Style selection and dispatch.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::google;
use crate::locator::Definition;
use crate::token::Token;
use crate::types::Diagnostic;

/// Names of all known styles, for help text and error messages.
pub const KNOWN_STYLES: &[&str] = &["google"];

/// A named function-definition layout style.
///
/// The set is closed: adding a style means adding a variant here plus a
/// sibling check routine. The locator and adapter layers stay untouched.
/// Unknown names are rejected when configuration is parsed, never at
/// check time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Arguments open on the `def` line and close with the last argument.
    #[default]
    Google,
}

impl Style {
    /// Runs this style's layout checks over one definition's tokens.
    #[must_use]
    pub fn check(self, def: &Definition, tokens: &[Token<'_>]) -> Vec<Diagnostic> {
        match self {
            Self::Google => google::check(def, tokens),
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => f.write_str("google"),
        }
    }
}

/// A style name that matches none of the known styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style {0:?}, expected one of: google")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            other => Err(UnknownStyle(other.to_owned())),
        }
    }
}
