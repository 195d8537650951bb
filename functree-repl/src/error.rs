//! Errors in the input of the REPL itself.

use ariadne::Fmt;
use functree_attrs::ErrorKind;
use functree_error::EXPR;

/// A token that should be a non-negative integer is not one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid {}", self.token, self.expected),
    labels = ["this argument"],
    help = format!("the {} must be a whole number", self.expected),
)]
pub struct InvalidNumber {
    /// The token that was given.
    pub token: String,

    /// What the token was supposed to be (`height` or `seed`).
    pub expected: &'static str,
}

/// The line has no height.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing tree height",
    labels = ["add a height here"],
    help = format!("enter {}, for example {}", "<height> [seed]".fg(EXPR), "3 42".fg(EXPR)),
)]
pub struct MissingHeight;

/// The line has more arguments than a command takes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected argument `{}`", self.token),
    labels = ["remove this argument"],
    help = "commands take a height and an optional seed",
)]
pub struct UnexpectedArgument {
    /// The extra token.
    pub token: String,
}

/// The line starts with a `:` command that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.command),
    labels = ["this command"],
    help = format!("available commands are {} and {}", ":levels".fg(EXPR), ":simplify".fg(EXPR)),
)]
pub struct UnknownCommand {
    /// The command that was given.
    pub command: String,
}
