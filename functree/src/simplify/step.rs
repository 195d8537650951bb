/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `3 + 4 = 7`
    AddConstants,

    /// `2x^3 + 2x^3 = 4x^3`
    /// `(ln(x))^(1/2) + (ln(x))^(1/2) = 2(ln(x))^(1/2)`
    CombineLikeMonomials,
}
