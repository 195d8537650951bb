use crate::random::{BASE_RANGE, COEFFICIENT_RANGE, EXPONENT_RANGE};
use std::ops::RangeInclusive;

/// Options controlling how random function trees are generated.
///
/// The defaults draw coefficients from `1..=10`, exponents from `1..=50`, bases from `2..=10`,
/// choose between an operator and a function with equal probability for inner nodes, and choose
/// every operator / function variant with equal probability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// The range coefficients are drawn from. Must start at `1` or above.
    pub coefficients: RangeInclusive<u32>,

    /// The range integer exponents, and the numerators and denominators of rational exponents,
    /// are drawn from. Must start at `1` or above.
    pub exponents: RangeInclusive<u32>,

    /// The range bases of exponentials and logarithms are drawn from. Must start at `2` or above.
    pub bases: RangeInclusive<u32>,

    /// The probability that an inner node is an operator rather than a function.
    pub operator_probability: f64,

    /// Relative weights of each operator, in the order of
    /// [`Operator::ALL`](crate::node::Operator::ALL). [`None`] chooses uniformly.
    pub operator_weights: Option<Vec<f64>>,

    /// Relative weights of each function variant, in the order of
    /// [`FunctionKindTag::ALL`](crate::node::FunctionKindTag::ALL). [`None`] chooses uniformly.
    pub function_weights: Option<Vec<f64>>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            coefficients: COEFFICIENT_RANGE,
            exponents: EXPONENT_RANGE,
            bases: BASE_RANGE,
            operator_probability: 0.5,
            operator_weights: None,
            function_weights: None,
        }
    }
}

impl GenerateOptions {
    /// Wraps the given [`GenerateOptions`] into a builder for further customization.
    pub fn into_builder(self) -> GenerateOptionsBuilder {
        GenerateOptionsBuilder(self)
    }
}

/// Helper struct to build a [`GenerateOptions`] struct.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerateOptionsBuilder(GenerateOptions);

impl GenerateOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range coefficients are drawn from.
    pub fn coefficients(mut self, coefficients: RangeInclusive<u32>) -> Self {
        self.0.coefficients = coefficients;
        self
    }

    /// Sets the range exponents are drawn from.
    pub fn exponents(mut self, exponents: RangeInclusive<u32>) -> Self {
        self.0.exponents = exponents;
        self
    }

    /// Sets the range bases are drawn from.
    pub fn bases(mut self, bases: RangeInclusive<u32>) -> Self {
        self.0.bases = bases;
        self
    }

    /// Sets the probability that an inner node is an operator.
    pub fn operator_probability(mut self, probability: f64) -> Self {
        self.0.operator_probability = probability;
        self
    }

    /// Sets the relative weights of each operator. See [`GenerateOptions::operator_weights`].
    pub fn operator_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.0.operator_weights = Some(weights.into());
        self
    }

    /// Sets the relative weights of each function variant. See
    /// [`GenerateOptions::function_weights`].
    pub fn function_weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.0.function_weights = Some(weights.into());
        self
    }

    /// Builds the [`GenerateOptions`] struct.
    pub fn build(self) -> GenerateOptions {
        self.0
    }
}
