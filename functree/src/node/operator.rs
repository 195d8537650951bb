use crate::{
    error::{Error, InvalidOperatorType},
    fmt::Latex,
};
use rand::Rng;
use std::{fmt, str::FromStr};

/// A binary operator. Operator nodes always have exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `a + b`
    Addition,

    /// `a - b`
    Subtraction,

    /// `a * b`, written as juxtaposition in LaTeX.
    Multiplication,

    /// `a / b`, written as a fraction in LaTeX.
    Division,
}

impl Operator {
    /// All operators, in the order used by weight tables.
    pub const ALL: [Operator; 4] = [
        Operator::Addition,
        Operator::Subtraction,
        Operator::Multiplication,
        Operator::Division,
    ];

    /// Chooses an operator uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
    }

    /// The tag naming this operator, such as `ADDITION`.
    pub fn tag(self) -> &'static str {
        match self {
            Operator::Addition => "ADDITION",
            Operator::Subtraction => "SUBTRACTION",
            Operator::Multiplication => "MULTIPLICATION",
            Operator::Division => "DIVISION",
        }
    }

    /// The plain text symbol of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Addition => "+",
            Operator::Subtraction => "-",
            Operator::Multiplication => "*",
            Operator::Division => "/",
        }
    }

    /// The LaTeX symbol placed between the two operands, or [`None`] for division, which wraps
    /// its operands in a fraction instead.
    pub fn latex_symbol(self) -> Option<&'static str> {
        match self {
            Operator::Addition => Some("+"),
            Operator::Subtraction => Some("-"),
            Operator::Multiplication => Some(""),
            Operator::Division => None,
        }
    }

    /// Writes the LaTeX of `left op right`.
    pub(crate) fn fmt_latex_with(
        self,
        f: &mut fmt::Formatter,
        left: &impl Latex,
        right: &impl Latex,
    ) -> fmt::Result {
        match self.latex_symbol() {
            Some(symbol) => {
                write!(f, "\\left( ")?;
                left.fmt_latex(f)?;
                write!(f, " {} ", symbol)?;
                right.fmt_latex(f)?;
                write!(f, " \\right)")
            },
            None => {
                write!(f, "\\frac{{ ")?;
                left.fmt_latex(f)?;
                write!(f, " }}{{ ")?;
                right.fmt_latex(f)?;
                write!(f, " }}")
            },
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.tag() == tag)
            .ok_or_else(|| Error::new(vec![], InvalidOperatorType { tag: tag.to_string() }))
    }
}

/// Formats the operator on its own, as its plain text symbol.
impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Formats the operator on its own. Division has no infix symbol in LaTeX, so on its own it is
/// written as `/`.
impl Latex for Operator {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.latex_symbol().unwrap_or("/"))
    }
}
