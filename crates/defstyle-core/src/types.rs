//! Core types for layout diagnostics.

use serde::Serialize;

/// Diagnostic code identifying which layout rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Code {
    /// First argument not on the same line as the definition opening.
    Fd101,
    /// Closing `:` not on the same line as the last argument.
    Fd102,
    /// `def`, function name, and opening parenthesis not all on one line.
    Fd103,
}

impl Code {
    /// Short identifier used in output (e.g. `"FD101"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fd101 => "FD101",
            Self::Fd102 => "FD102",
            Self::Fd103 => "FD103",
        }
    }

    /// Human-readable message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Fd101 => "First argument must be on same line as the function definition.",
            Self::Fd102 => "Function definition must end on same line as last argument.",
            Self::Fd103 => "def and function name must appear on the same line.",
        }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported layout violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic code.
    pub code: Code,
    /// Absolute line number (1-based).
    pub line: usize,
    /// Column (0-based).
    pub column: usize,
    /// Human-readable message.
    pub message: &'static str,
}

impl Diagnostic {
    /// Creates a diagnostic at the given position.
    #[must_use]
    pub const fn new(code: Code, line: usize, column: usize) -> Self {
        Self {
            code,
            line,
            column,
            message: code.message(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.message)
    }
}
