//! The "google" function-definition layout checks.
//!
//! Accepted shape: the argument list opens on the `def` line, the first
//! argument follows on that same line, and the closing `:` sits on the
//! line of the last argument:
//!
//! ```text
//! def foo(bar1, bar2, bar3,
//!         bar4, bar5,
//!         bar6):
//! ```

use crate::locator::Definition;
use crate::token::Token;
use crate::types::{Code, Diagnostic};

/// Walks the definition's tokens once, front to back, and reports any of
/// FD103/FD101/FD102 (in that order, matching the pass).
///
/// Before the opening parenthesis is seen, the pass pins down the `def`
/// keyword, then the definition's name, then `(` itself. Afterwards every
/// identifier updates the running last-argument marker, and the first `:`
/// that directly follows `)` closes the parameter list and ends the scan.
pub(crate) fn check(def: &Definition, tokens: &[Token<'_>]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let mut def_token: Option<&Token<'_>> = None;
    let mut name_token: Option<&Token<'_>> = None;
    let mut open_token: Option<&Token<'_>> = None;
    let mut first_arg: Option<&Token<'_>> = None;
    let mut last_arg: Option<&Token<'_>> = None;
    let mut previous: Option<&Token<'_>> = None;

    for token in tokens {
        if let Some(open) = open_token {
            if token.kind == "identifier" {
                if first_arg.is_none() {
                    first_arg = Some(token);
                    if token.row != open.row {
                        diagnostics.push(Diagnostic::new(Code::Fd101, token.row + 1, token.col));
                    }
                }
                last_arg = Some(token);
            } else if token.kind == ":" && previous.is_some_and(|p| p.kind == ")") {
                if last_arg.is_some_and(|arg| arg.row != token.row) {
                    diagnostics.push(Diagnostic::new(Code::Fd102, token.row + 1, token.col));
                }
                // Only the first definition-closing colon matters.
                break;
            }
        } else {
            if token.kind == "def" {
                def_token = Some(token);
            } else if token.kind == "identifier" && def_token.is_some() && token.text == def.name {
                name_token = Some(token);
            } else if token.kind == "(" && def_token.is_some() && name_token.is_some() {
                open_token = Some(token);
                let scattered = [def_token, name_token]
                    .into_iter()
                    .flatten()
                    .any(|t| t.row != token.row);
                if scattered {
                    diagnostics.push(Diagnostic::new(Code::Fd103, token.row + 1, token.col));
                }
            }
        }
        previous = Some(token);
    }

    diagnostics
}
