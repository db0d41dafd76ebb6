//! Error types for proplogic

use crate::op::OperatorKind;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by parsing, evaluation, and truth-table construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The parser could not interpret the input. `saw` is either the
    /// offending token in backticks or `end of input`.
    #[error("expected {expected}, saw {saw}")]
    Syntax { expected: String, saw: String },

    /// `evaluate` was called with an assignment missing a required name.
    #[error("variable `{0}` is missing from the assignment")]
    UnboundVariable(String),

    /// An operator was constructed with a term count outside its arity range.
    #[error("the `{kind}` operator takes {expected} ({given} given)")]
    Arity {
        kind: OperatorKind,
        expected: String,
        given: usize,
    },

    /// Truth-table construction exceeded the configured variable cap.
    #[error("{count} variables in expression, maximum of {limit} allowed")]
    TooManyVariables { count: usize, limit: usize },
}

impl Error {
    pub(crate) fn syntax(expected: &str, saw: Option<&str>) -> Error {
        Error::Syntax {
            expected: expected.to_string(),
            saw: match saw {
                Some(token) => format!("`{token}`"),
                None => "end of input".to_string(),
            },
        }
    }

    pub(crate) fn arity(kind: OperatorKind, given: usize) -> Error {
        let expected = match kind.max_terms() {
            Some(max) if max == kind.min_terms() => format!("exactly {max} terms"),
            Some(max) => format!("{} to {max} terms", kind.min_terms()),
            None => format!("at least {} terms", kind.min_terms()),
        };
        Error::Arity {
            kind,
            expected,
            given,
        }
    }
}
