//! Error kinds produced while building, selecting or configuring function tree nodes.
//!
//! Every kind carries the offending value and is wrapped into a [`functree_error::Error`] at the
//! point of detection.

use ariadne::Fmt;
use functree_attrs::ErrorKind;
use functree_error::EXPR;

pub use functree_error::Error;

/// The tag names neither an operator nor a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is an invalid node type", self.tag),
    labels = ["this node type"],
    help = format!(
        "node types are operator types such as {} or function types such as {}",
        "ADDITION".fg(EXPR),
        "CONSTANT".fg(EXPR),
    ),
)]
pub struct InvalidNodeType {
    /// The tag that was given.
    pub tag: String,
}

/// The tag does not name an operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is an invalid operator type", self.tag),
    labels = ["this operator type"],
    help = "valid operator types are: ADDITION, SUBTRACTION, MULTIPLICATION, DIVISION",
)]
pub struct InvalidOperatorType {
    /// The tag that was given.
    pub tag: String,
}

/// The tag does not name a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is an invalid function type", self.tag),
    labels = ["this function type"],
    help = "valid function types are: CONSTANT, INT MONOMIAL, MONOMIAL, FRAC MONOMIAL, \
        NATURAL EXP, EXP, NATURAL LOG, LOG, TRIG, INVERSE TRIG",
)]
pub struct InvalidFunctionType {
    /// The tag that was given.
    pub tag: String,
}

/// The requested tree height is not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is not a valid value for the height; it must be greater than 0", self.height),
    labels = ["this height"],
    help = "a tree of height 1 is a single function node",
)]
pub struct InvalidHeight {
    /// The height that was requested.
    pub height: i64,
}

/// The category names neither operators nor functions.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is an invalid node category", self.category),
    labels = ["this category"],
    help = format!("the node category must be {} or {}", "operator".fg(EXPR), "function".fg(EXPR)),
)]
pub struct InvalidNodeCategory {
    /// The category that was given.
    pub category: String,
}

/// A weight table cannot be used to choose node variants.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid {} weights: {}", self.table, self.reason),
    labels = ["these weights"],
    help = format!(
        "provide exactly {} non-negative weights, at least one of them non-zero",
        self.expected,
    ),
)]
pub struct InvalidWeights {
    /// Which table the weights were given for (`operator` or `function`).
    pub table: &'static str,

    /// The number of weights the table needs.
    pub expected: usize,

    /// Why the weights were rejected.
    pub reason: String,
}

/// A parameter range is empty or starts below the smallest allowed value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid {} range {}..={}", self.parameter, self.start, self.end),
    labels = ["this range"],
    help = format!("the range must be non-empty and start at {} or more", self.min_start),
)]
pub struct InvalidRange {
    /// The parameter the range is drawn for.
    pub parameter: &'static str,

    /// Start of the range.
    pub start: u32,

    /// End of the range (inclusive).
    pub end: u32,

    /// The smallest start the parameter allows.
    pub min_start: u32,
}

/// A probability outside of `[0, 1]`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{} is not a valid probability", self.value),
    labels = ["this probability"],
    help = "probabilities must be between 0 and 1, inclusive",
)]
pub struct InvalidProbability {
    /// The value that was given.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_names_value() {
        let err = Error::new(vec![], InvalidHeight { height: -3 });
        assert_eq!(err.to_string(), "-3 is not a valid value for the height; it must be greater than 0");
    }

    #[test]
    fn kind_is_recoverable() {
        let err = Error::new(vec![], InvalidOperatorType { tag: "MODULO".to_string() });
        assert!(err.is::<InvalidOperatorType>());
        assert!(!err.is::<InvalidFunctionType>());
        assert_eq!(
            err.downcast_ref::<InvalidOperatorType>(),
            Some(&InvalidOperatorType { tag: "MODULO".to_string() }),
        );
    }

    #[test]
    fn help_is_derived() {
        let err = Error::new(vec![], InvalidHeight { height: 0 });
        assert_eq!(err.kind.help().as_deref(), Some("a tree of height 1 is a single function node"));
    }
}
