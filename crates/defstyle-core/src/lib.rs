//! # defstyle-core
//!
//! Core library for checking the layout of Python function definitions.
//!
//! The checker walks every function definition in a parsed source file and
//! verifies it against a named layout style (currently only `google`):
//!
//! ```text
//! def foo(bar1, bar2, bar3,
//!         bar4, bar5,
//!         bar6):
//! ```
//!
//! Main pieces:
//!
//! - [`SourceFile`] — owns the source text and its Tree-sitter parse tree
//! - [`definitions`] — enumerates function definitions and their extents
//! - [`Style`] — the closed set of layout styles and their check routines
//! - [`Checker`] — orchestrates parsing, suppression, and dispatch
//! - [`Diagnostic`] — one positioned violation (`FD101`/`FD102`/`FD103`)
//!
//! ## Example
//!
//! ```
//! use defstyle_core::{Checker, Config};
//!
//! let checker = Checker::new(&Config::default());
//! let diagnostics = checker.check("def foo(a, b):\n    pass\n").unwrap();
//! assert!(diagnostics.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod google;
mod locator;
mod source;
mod style;
mod suppress;
mod token;
mod types;

pub use checker::{CheckError, Checker};
pub use config::{Config, ConfigError};
pub use locator::{definitions, Definition};
pub use source::SourceFile;
pub use style::{Style, UnknownStyle, KNOWN_STYLES};
pub use suppress::NoqaFilter;
pub use token::{lex_rows, Token};
pub use types::{Code, Diagnostic};
