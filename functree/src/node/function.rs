use crate::{
    error::{Error, InvalidFunctionType},
    fmt::{fmt_exponent_latex, fmt_exponent_plain, fmt_subscript_latex, Coefficient, Latex},
    options::GenerateOptions,
    random::{random_base, random_coefficient, random_exponent, random_inverse_trig_function, random_trig_function, Exponent},
};
use num_rational::Ratio;
use rand::Rng;
use std::{fmt, str::FromStr};
use super::Node;

/// One of the six trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trig {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
}

impl Trig {
    /// All trigonometric functions.
    pub const ALL: [Trig; 6] = [Trig::Sin, Trig::Cos, Trig::Tan, Trig::Csc, Trig::Sec, Trig::Cot];

    /// The name of the function, which is also its LaTeX command without the backslash.
    pub fn name(self) -> &'static str {
        match self {
            Trig::Sin => "sin",
            Trig::Cos => "cos",
            Trig::Tan => "tan",
            Trig::Csc => "csc",
            Trig::Sec => "sec",
            Trig::Cot => "cot",
        }
    }
}

impl fmt::Display for Trig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The tag of a function variant, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKindTag {
    Constant,
    IntMonomial,
    FracMonomial,
    NaturalExp,
    Exp,
    NaturalLog,
    Log,
    Trig,
    InverseTrig,
}

impl FunctionKindTag {
    /// All function variants, in the order used by weight tables.
    pub const ALL: [FunctionKindTag; 9] = [
        FunctionKindTag::Constant,
        FunctionKindTag::IntMonomial,
        FunctionKindTag::FracMonomial,
        FunctionKindTag::NaturalExp,
        FunctionKindTag::Exp,
        FunctionKindTag::NaturalLog,
        FunctionKindTag::Log,
        FunctionKindTag::Trig,
        FunctionKindTag::InverseTrig,
    ];

    /// The tag naming this variant, such as `NATURAL LOG`.
    pub fn tag(self) -> &'static str {
        match self {
            FunctionKindTag::Constant => "CONSTANT",
            FunctionKindTag::IntMonomial => "INT MONOMIAL",
            FunctionKindTag::FracMonomial => "FRAC MONOMIAL",
            FunctionKindTag::NaturalExp => "NATURAL EXP",
            FunctionKindTag::Exp => "EXP",
            FunctionKindTag::NaturalLog => "NATURAL LOG",
            FunctionKindTag::Log => "LOG",
            FunctionKindTag::Trig => "TRIG",
            FunctionKindTag::InverseTrig => "INVERSE TRIG",
        }
    }
}

impl FromStr for FunctionKindTag {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        // an unqualified monomial has an integer exponent
        if tag == "MONOMIAL" {
            return Ok(FunctionKindTag::IntMonomial);
        }

        FunctionKindTag::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| Error::new(vec![], InvalidFunctionType { tag: tag.to_string() }))
    }
}

impl fmt::Display for FunctionKindTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A function variant together with the parameters it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `c`
    Constant,

    /// `cx^n`
    IntMonomial { exponent: u32 },

    /// `cx^(p/q)`
    FracMonomial { exponent: Ratio<u32> },

    /// `ce^x`
    NaturalExp,

    /// `c*b^x`
    Exp { base: u32 },

    /// `cln(x)`
    NaturalLog,

    /// `clog_b(x)`
    Log { base: u32 },

    /// `csin(x)`, `ccos(x)`, ...
    Trig(Trig),

    /// `csin^(-1)(x)`, `ccos^(-1)(x)`, ...
    InverseTrig(Trig),
}

impl FunctionKind {
    /// Returns the tag of this variant.
    pub fn tag(&self) -> FunctionKindTag {
        match self {
            FunctionKind::Constant => FunctionKindTag::Constant,
            FunctionKind::IntMonomial { .. } => FunctionKindTag::IntMonomial,
            FunctionKind::FracMonomial { .. } => FunctionKindTag::FracMonomial,
            FunctionKind::NaturalExp => FunctionKindTag::NaturalExp,
            FunctionKind::Exp { .. } => FunctionKindTag::Exp,
            FunctionKind::NaturalLog => FunctionKindTag::NaturalLog,
            FunctionKind::Log { .. } => FunctionKindTag::Log,
            FunctionKind::Trig(_) => FunctionKindTag::Trig,
            FunctionKind::InverseTrig(_) => FunctionKindTag::InverseTrig,
        }
    }

    /// Returns true if this is an integer or rational monomial.
    pub fn is_monomial(&self) -> bool {
        matches!(self, FunctionKind::IntMonomial { .. } | FunctionKind::FracMonomial { .. })
    }
}

/// An elementary function with its coefficient, such as `3sin(x)` or `x^(3/2)`.
///
/// The parameters are fixed when the function is created. The coefficient is always at least
/// `1`: every constructor raises a coefficient of `0` to `1`, so `Function::constant(0)` is the
/// constant `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function {
    coefficient: u32,
    kind: FunctionKind,
}

impl Function {
    /// Creates a function with the given coefficient. A coefficient of `0` is raised to `1`.
    pub fn new(coefficient: u32, kind: FunctionKind) -> Self {
        Self { coefficient: coefficient.max(1), kind }
    }

    /// Creates the constant `c`.
    pub fn constant(c: u32) -> Self {
        Self::new(c, FunctionKind::Constant)
    }

    /// Creates the monomial `cx^n`.
    pub fn int_monomial(coefficient: u32, exponent: u32) -> Self {
        Self::new(coefficient, FunctionKind::IntMonomial { exponent })
    }

    /// Creates the monomial `cx^(p/q)`.
    pub fn frac_monomial(coefficient: u32, exponent: Ratio<u32>) -> Self {
        Self::new(coefficient, FunctionKind::FracMonomial { exponent })
    }

    /// The coefficient of the function. For a constant, this is its value.
    pub fn coefficient(&self) -> u32 {
        self.coefficient
    }

    /// The variant of the function and its parameters.
    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// Returns a copy of this function with a different coefficient.
    pub fn with_coefficient(&self, coefficient: u32) -> Self {
        Self::new(coefficient, self.kind)
    }

    /// Creates a random function of any variant, chosen uniformly.
    pub fn random<R: Rng + ?Sized>(options: &GenerateOptions, rng: &mut R) -> Result<Self, Error> {
        let tag = FunctionKindTag::ALL[rng.gen_range(0..FunctionKindTag::ALL.len())];
        Self::random_of_kind(tag, options, rng)
    }

    /// Creates a function of the given variant with random parameters.
    pub fn random_of_kind<R: Rng + ?Sized>(
        tag: FunctionKindTag,
        options: &GenerateOptions,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let coefficient = random_coefficient(rng, options.coefficients.clone())?;
        let kind = match tag {
            FunctionKindTag::Constant => FunctionKind::Constant,
            FunctionKindTag::IntMonomial | FunctionKindTag::FracMonomial => {
                match random_exponent(rng, options.exponents.clone(), tag == FunctionKindTag::IntMonomial)? {
                    Exponent::Integer(exponent) => FunctionKind::IntMonomial { exponent },
                    Exponent::Rational(exponent) => FunctionKind::FracMonomial { exponent },
                }
            },
            FunctionKindTag::NaturalExp => FunctionKind::NaturalExp,
            FunctionKindTag::Exp => FunctionKind::Exp { base: random_base(rng, options.bases.clone())? },
            FunctionKindTag::NaturalLog => FunctionKind::NaturalLog,
            FunctionKindTag::Log => FunctionKind::Log { base: random_base(rng, options.bases.clone())? },
            FunctionKindTag::Trig => FunctionKind::Trig(random_trig_function(rng)),
            FunctionKindTag::InverseTrig => FunctionKind::InverseTrig(random_inverse_trig_function(rng)),
        };
        Ok(Self::new(coefficient, kind))
    }

    /// Writes the plain text of this function, with `input` substituted for the variable `x`.
    pub(crate) fn fmt_plain_with(&self, f: &mut fmt::Formatter, input: Option<&Node>) -> fmt::Result {
        let c = Coefficient(self.coefficient);

        // operators already write themselves as `(left op right)`
        let grouped = |f: &mut fmt::Formatter, input: &Node| match input {
            Node::Operator { .. } => write!(f, "{}", input),
            Node::Function { .. } => write!(f, "({})", input),
        };

        // `x`, or the grouped input
        let var = |f: &mut fmt::Formatter| match input {
            Some(input) => grouped(f, input),
            None => write!(f, "x"),
        };

        // input of a function written with parentheses, such as `ln(x)`
        let arg = |f: &mut fmt::Formatter| match input {
            Some(input) => grouped(f, input),
            None => write!(f, "(x)"),
        };

        match self.kind {
            FunctionKind::Constant => write!(f, "{}", self.coefficient),
            FunctionKind::IntMonomial { exponent } => {
                write!(f, "{}", c)?;
                var(f)?;
                fmt_exponent_plain(f, &exponent.to_string())
            },
            FunctionKind::FracMonomial { exponent } => {
                write!(f, "{}", c)?;
                var(f)?;
                fmt_exponent_plain(f, &exponent.to_string())
            },
            FunctionKind::NaturalExp => {
                write!(f, "{}e^", c)?;
                var(f)
            },
            FunctionKind::Exp { base } => {
                if self.coefficient != 1 {
                    write!(f, "{}*", c)?;
                }
                write!(f, "{}^", base)?;
                var(f)
            },
            FunctionKind::NaturalLog => {
                write!(f, "{}ln", c)?;
                arg(f)
            },
            FunctionKind::Log { base } => {
                write!(f, "{}log_{}", c, base)?;
                arg(f)
            },
            FunctionKind::Trig(trig) => {
                write!(f, "{}{}", c, trig)?;
                arg(f)
            },
            FunctionKind::InverseTrig(trig) => {
                write!(f, "{}{}^(-1)", c, trig)?;
                arg(f)
            },
        }
    }

    /// Writes the LaTeX of this function, with the LaTeX of `input` substituted for the variable
    /// `x`.
    pub(crate) fn fmt_latex_with(&self, f: &mut fmt::Formatter, input: Option<&Node>) -> fmt::Result {
        let c = Coefficient(self.coefficient);

        let var = |f: &mut fmt::Formatter| match input {
            Some(input) => input.fmt_latex(f),
            None => write!(f, "x"),
        };

        // monomials group a non-leaf input as `\left( {input} \right)`
        let monomial_base = |f: &mut fmt::Formatter| match input {
            Some(input) => {
                write!(f, "\\left( {{")?;
                input.fmt_latex(f)?;
                write!(f, "}} \\right)")
            },
            None => write!(f, "x"),
        };

        let arg = |f: &mut fmt::Formatter| {
            write!(f, "\\left( {{")?;
            var(f)?;
            write!(f, "}} \\right)")
        };

        match self.kind {
            FunctionKind::Constant => write!(f, "{}", self.coefficient),
            FunctionKind::IntMonomial { exponent } => {
                write!(f, "{}", c)?;
                monomial_base(f)?;
                fmt_exponent_latex(f, &exponent.to_string(), false)
            },
            FunctionKind::FracMonomial { exponent } => {
                write!(f, "{}", c)?;
                monomial_base(f)?;
                fmt_exponent_latex(f, &exponent.to_string(), true)
            },
            FunctionKind::NaturalExp => {
                write!(f, "{}e^{{", c)?;
                var(f)?;
                write!(f, "}}")
            },
            FunctionKind::Exp { base } => {
                if self.coefficient != 1 {
                    write!(f, "{} \\cdot ", c)?;
                }
                write!(f, "{}^{{", base)?;
                var(f)?;
                write!(f, "}}")
            },
            FunctionKind::NaturalLog => {
                write!(f, "{}\\ln", c)?;
                arg(f)
            },
            FunctionKind::Log { base } => {
                write!(f, "{}\\log", c)?;
                fmt_subscript_latex(f, &base.to_string())?;
                arg(f)
            },
            FunctionKind::Trig(trig) => {
                write!(f, "{}\\{}", c, trig)?;
                arg(f)
            },
            FunctionKind::InverseTrig(trig) => {
                write!(f, "{}\\{}^{{-1}}", c, trig)?;
                arg(f)
            },
        }
    }
}

/// Formats the function on its own, over the bare variable `x`.
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_plain_with(f, None)
    }
}

/// Formats the function on its own, over the bare variable `x`.
impl Latex for Function {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_latex_with(f, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain_and_latex(func: Function) -> (String, String) {
        (func.to_string(), func.as_display().to_string())
    }

    #[test]
    fn constant() {
        assert_eq!(plain_and_latex(Function::constant(5)), ("5".into(), "5".into()));
        assert_eq!(plain_and_latex(Function::constant(1)), ("1".into(), "1".into()));
    }

    #[test]
    fn int_monomial() {
        assert_eq!(plain_and_latex(Function::int_monomial(3, 2)), ("3x^2".into(), "3x^2".into()));
        assert_eq!(plain_and_latex(Function::int_monomial(1, 12)), ("x^(12)".into(), "x^{12}".into()));
        assert_eq!(plain_and_latex(Function::int_monomial(2, 1)), ("2x".into(), "2x".into()));
    }

    #[test]
    fn frac_monomial() {
        let func = Function::frac_monomial(4, Ratio::new(3, 2));
        assert_eq!(plain_and_latex(func), ("4x^(3/2)".into(), "4x^{3/2}".into()));

        // `Ratio` reduces `4/2` to `2`
        let func = Function::frac_monomial(1, Ratio::new(4, 2));
        assert_eq!(plain_and_latex(func), ("x^2".into(), "x^{2}".into()));

        let func = Function::frac_monomial(1, Ratio::new(5, 5));
        assert_eq!(plain_and_latex(func), ("x".into(), "x".into()));
    }

    #[test]
    fn exponentials() {
        let natural = Function::new(2, FunctionKind::NaturalExp);
        assert_eq!(plain_and_latex(natural), ("2e^x".into(), "2e^{x}".into()));

        let exp = Function::new(3, FunctionKind::Exp { base: 5 });
        assert_eq!(plain_and_latex(exp), ("3*5^x".into(), "3 \\cdot 5^{x}".into()));

        let exp = Function::new(1, FunctionKind::Exp { base: 10 });
        assert_eq!(plain_and_latex(exp), ("10^x".into(), "10^{x}".into()));
    }

    #[test]
    fn logarithms() {
        let ln = Function::new(1, FunctionKind::NaturalLog);
        assert_eq!(plain_and_latex(ln), ("ln(x)".into(), "\\ln\\left( {x} \\right)".into()));

        let log = Function::new(6, FunctionKind::Log { base: 2 });
        assert_eq!(plain_and_latex(log), ("6log_2(x)".into(), "6\\log_2\\left( {x} \\right)".into()));

        let log = Function::new(1, FunctionKind::Log { base: 10 });
        assert_eq!(plain_and_latex(log), ("log_10(x)".into(), "\\log_{10}\\left( {x} \\right)".into()));
    }

    #[test]
    fn trigonometric() {
        let trig = Function::new(1, FunctionKind::Trig(Trig::Sec));
        assert_eq!(plain_and_latex(trig), ("sec(x)".into(), "\\sec\\left( {x} \\right)".into()));

        let inverse = Function::new(7, FunctionKind::InverseTrig(Trig::Cos));
        assert_eq!(
            plain_and_latex(inverse),
            ("7cos^(-1)(x)".into(), "7\\cos^{-1}\\left( {x} \\right)".into()),
        );
    }

    #[test]
    fn unit_coefficient_never_printed() {
        let kinds = [
            FunctionKind::IntMonomial { exponent: 3 },
            FunctionKind::FracMonomial { exponent: Ratio::new(2, 3) },
            FunctionKind::NaturalExp,
            FunctionKind::Exp { base: 2 },
            FunctionKind::NaturalLog,
            FunctionKind::Log { base: 3 },
            FunctionKind::Trig(Trig::Tan),
            FunctionKind::InverseTrig(Trig::Cot),
        ];
        for kind in kinds {
            let (plain, latex) = plain_and_latex(Function::new(1, kind));
            assert!(!plain.starts_with('1'), "{}", plain);
            assert!(!latex.starts_with('1'), "{}", latex);
            assert!(!latex.contains("\\cdot"), "{}", latex);
            assert!(!plain.contains('*'), "{}", plain);
        }
    }

    #[test]
    fn zero_coefficient_is_raised() {
        assert_eq!(Function::constant(0), Function::constant(1));
        assert_eq!(Function::constant(0).coefficient(), 1);
        assert_eq!(Function::int_monomial(0, 2).to_string(), "x^2");
        assert_eq!(Function::constant(4).with_coefficient(0).to_string(), "1");
    }

    #[test]
    fn plain_input_grouping() {
        let sum = Node::operator(
            crate::node::Operator::Addition,
            Node::leaf(Function::int_monomial(2, 1)),
            Node::leaf(Function::constant(3)),
        );
        let ln = Function::new(1, FunctionKind::NaturalLog);
        assert_eq!(Node::function(ln, sum.clone()).to_string(), "ln(2x + 3)");

        let square = Function::int_monomial(5, 2);
        assert_eq!(Node::function(square, sum.clone()).to_string(), "5(2x + 3)^2");
        assert_eq!(Node::function(Function::new(1, FunctionKind::NaturalExp), sum).to_string(), "e^(2x + 3)");

        // a function input keeps its own parentheses
        let sin = Node::leaf(Function::new(1, FunctionKind::Trig(Trig::Sin)));
        assert_eq!(Node::function(ln, sin.clone()).to_string(), "ln(sin(x))");
        assert_eq!(Node::function(square, sin).to_string(), "5(sin(x))^2");
    }

    #[test]
    fn parse_tags() {
        for tag in FunctionKindTag::ALL {
            assert_eq!(tag.tag().parse::<FunctionKindTag>().unwrap(), tag);
        }
        assert_eq!("MONOMIAL".parse::<FunctionKindTag>().unwrap(), FunctionKindTag::IntMonomial);

        let err = "SQRT".parse::<FunctionKindTag>().unwrap_err();
        assert!(err.is::<InvalidFunctionType>());
        assert_eq!(err.to_string(), "`SQRT` is an invalid function type");
    }

    #[test]
    fn random_of_kind_keeps_tag() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        let options = GenerateOptions::default();
        for tag in FunctionKindTag::ALL {
            for _ in 0..20 {
                let func = Function::random_of_kind(tag, &options, &mut rng).unwrap();
                assert_eq!(func.kind().tag(), tag);
                assert!(options.coefficients.contains(&func.coefficient()));
            }
        }
    }
}
