//! Random draws of the parameters owned by function nodes.
//!
//! None of these functions hold on to a random source; the caller passes one in. Use
//! [`rand::thread_rng`] when reproducibility does not matter, or a seeded
//! [`rand::rngs::StdRng`] when it does.

use crate::{
    error::{Error, InvalidRange},
    node::Trig,
};
use num_rational::Ratio;
use rand::{seq::SliceRandom, Rng};
use std::{fmt, ops::RangeInclusive};

/// Default range of coefficients.
pub const COEFFICIENT_RANGE: RangeInclusive<u32> = 1..=10;

/// Default range of exponents, and of the numerator / denominator of rational exponents.
pub const EXPONENT_RANGE: RangeInclusive<u32> = 1..=50;

/// Default range of bases for exponentials and logarithms.
pub const BASE_RANGE: RangeInclusive<u32> = 2..=10;

/// An exponent drawn by [`random_exponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exponent {
    /// An integer exponent, such as `3`.
    Integer(u32),

    /// A positive rational exponent, such as `3/2`.
    Rational(Ratio<u32>),
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Integer(n) => write!(f, "{}", n),
            Exponent::Rational(r) => write!(f, "{}", r),
        }
    }
}

/// Checks that `range` is non-empty and starts at `min_start` or above.
pub(crate) fn check_range(
    parameter: &'static str,
    range: &RangeInclusive<u32>,
    min_start: u32,
) -> Result<(), Error> {
    if range.is_empty() || *range.start() < min_start {
        return Err(Error::new(vec![], InvalidRange {
            parameter,
            start: *range.start(),
            end: *range.end(),
            min_start,
        }));
    }
    Ok(())
}

/// Draws a coefficient uniformly from `range`.
pub fn random_coefficient<R: Rng + ?Sized>(
    rng: &mut R,
    range: RangeInclusive<u32>,
) -> Result<u32, Error> {
    check_range("coefficient", &range, 1)?;
    Ok(rng.gen_range(range))
}

/// Draws an exponent from `range`.
///
/// If `is_integer` is false, the numerator and denominator are drawn independently from `range`,
/// so the rational may be improper (`7/2`) or come out as a whole number (`4/2 = 2`).
pub fn random_exponent<R: Rng + ?Sized>(
    rng: &mut R,
    range: RangeInclusive<u32>,
    is_integer: bool,
) -> Result<Exponent, Error> {
    check_range("exponent", &range, 1)?;
    if is_integer {
        Ok(Exponent::Integer(rng.gen_range(range)))
    } else {
        let numer = rng.gen_range(range.clone());
        let denom = rng.gen_range(range);
        Ok(Exponent::Rational(Ratio::new(numer, denom)))
    }
}

/// Draws a base for an exponential or logarithm uniformly from `range`.
pub fn random_base<R: Rng + ?Sized>(
    rng: &mut R,
    range: RangeInclusive<u32>,
) -> Result<u32, Error> {
    check_range("base", &range, 2)?;
    Ok(rng.gen_range(range))
}

/// Chooses one of the six trigonometric functions.
pub fn random_trig_function<R: Rng + ?Sized>(rng: &mut R) -> Trig {
    // `Trig::ALL` is never empty
    *Trig::ALL.choose(rng).unwrap_or(&Trig::Sin)
}

/// Chooses one of the six trigonometric functions, to be used as an inverse.
///
/// The domain is the same as [`random_trig_function`]; the inverse marker is carried by
/// [`FunctionKind::InverseTrig`](crate::node::FunctionKind::InverseTrig).
pub fn random_inverse_trig_function<R: Rng + ?Sized>(rng: &mut R) -> Trig {
    random_trig_function(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidRange;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn coefficient_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = random_coefficient(&mut rng, COEFFICIENT_RANGE).unwrap();
            assert!(COEFFICIENT_RANGE.contains(&c));
        }
    }

    #[test]
    fn coefficient_singleton_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_coefficient(&mut rng, 5..=5).unwrap(), 5);
    }

    #[test]
    fn empty_range_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        #[allow(clippy::reversed_empty_ranges)]
        let err = random_coefficient(&mut rng, 10..=1).unwrap_err();
        assert!(err.is::<InvalidRange>());
        assert_eq!(err.to_string(), "invalid coefficient range 10..=1");
    }

    #[test]
    fn base_below_two_is_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_base(&mut rng, 1..=10).unwrap_err().is::<InvalidRange>());
    }

    #[test]
    fn integer_exponent() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            match random_exponent(&mut rng, EXPONENT_RANGE, true).unwrap() {
                Exponent::Integer(n) => assert!(EXPONENT_RANGE.contains(&n)),
                other => panic!("expected an integer exponent, got {:?}", other),
            }
        }
    }

    #[test]
    fn rational_exponent_is_positive() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            match random_exponent(&mut rng, 1..=9, false).unwrap() {
                Exponent::Rational(r) => {
                    assert!(*r.numer() >= 1);
                    assert!(*r.denom() >= 1);
                    assert!(*r.numer() <= 9 && *r.denom() <= 9);
                },
                other => panic!("expected a rational exponent, got {:?}", other),
            }
        }
    }

    #[test]
    fn trig_covers_domain() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_trig_function(&mut rng));
            seen.insert(random_inverse_trig_function(&mut rng));
        }
        assert_eq!(seen.len(), Trig::ALL.len());
    }
}
