use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// A coefficient, which is left out entirely when it is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coefficient(pub u32);

impl Display for Coefficient {
    fn fmt(&self, f: &mut Formatter) -> Result {
        if self.0 == 1 {
            Ok(())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Writes a plain text exponent marker: nothing for an exponent of `1`, `^n` for a one-character
/// exponent, and `^(nn)` otherwise.
pub fn fmt_exponent_plain(f: &mut Formatter, exponent: &str) -> Result {
    match exponent.len() {
        _ if exponent == "1" => Ok(()),
        0 | 1 => write!(f, "^{}", exponent),
        _ => write!(f, "^({})", exponent),
    }
}

/// Writes a LaTeX exponent marker: nothing for an exponent of `1`, `^n` for a one-character
/// exponent, and `^{nn}` otherwise. If `always_brace` is set, the exponent is braced regardless
/// of its length.
pub fn fmt_exponent_latex(f: &mut Formatter, exponent: &str, always_brace: bool) -> Result {
    match exponent.len() {
        _ if exponent == "1" => Ok(()),
        0 | 1 if !always_brace => write!(f, "^{}", exponent),
        _ => write!(f, "^{{{}}}", exponent),
    }
}

/// Writes a LaTeX subscript, braced if it is longer than one character.
pub fn fmt_subscript_latex(f: &mut Formatter, subscript: &str) -> Result {
    if subscript.len() > 1 {
        write!(f, "_{{{}}}", subscript)
    } else {
        write!(f, "_{}", subscript)
    }
}
