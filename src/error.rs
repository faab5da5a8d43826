//! The interpreter's error taxonomy.
//!
//! Every failure mode in the crate — lexing, parsing, and evaluation —
//! resolves to one of three human-readable categories. [`InterpError`] is
//! the boundary type returned from [`crate::Interpreter::run`]; the
//! per-stage constructors below are what the tokenizer, parser, evaluator
//! and builtins actually raise.

use std::fmt;

use strum::Display;

/// A single interpreter failure, carrying its category and a message.
///
/// `Display` renders as `"{category}: {message}"`, e.g.
/// `"NameError: unbound variable: foo"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpError {
    kind: ErrorKind,
    message: String,
}

/// The three error categories the reference dialect distinguishes.
///
/// Kept separate from [`InterpError`] so callers that want to match on
/// category (without caring about the message text) can do so directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// Malformed tokens, unbalanced parentheses, misuse of special-form
    /// syntax, or dotted syntax where a proper list is required.
    SyntaxError,
    /// Reference to, or `set!` of, a symbol with no binding in scope.
    NameError,
    /// Type mismatches, arity violations, out-of-range indices, or
    /// application of a non-procedure.
    RuntimeError,
}

impl InterpError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SyntaxError, message)
    }

    pub(crate) fn name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameError, message)
    }

    pub(crate) fn runtime(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RuntimeError, message)
    }

    /// The error's category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InterpError {}

/// Result alias used throughout the crate for fallible interpreter operations.
pub type InterpResult<T> = Result<T, InterpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_message() {
        let err = InterpError::name("unbound variable: foo");
        assert_eq!(err.to_string(), "NameError: unbound variable: foo");
    }
}
