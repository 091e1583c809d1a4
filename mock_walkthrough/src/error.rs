// vim: tw=80
//! Errors raised when invoking builder operations by name.

use thiserror::Error;

/// Why a by-name invocation was rejected.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DispatchError {
    /// A known operation was given the wrong number of arguments.
    #[error("{operation} takes {expected} argument(s) but {found} were supplied")]
    Arity {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    /// A known operation was given an argument of the wrong shape.
    #[error("{operation} expects a {expected} argument, got {found}")]
    ArgumentType {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The receiver does not accept operations it doesn't define.
    #[error("no operation named {name:?} ({arity} argument(s))")]
    UnknownOperation { name: String, arity: usize },
}
