//! Definition and implementation of polynomials.

mod polynomial_traits;

mod display;
mod fixed_polynomial;
mod growable_polynomial;

pub use polynomial_traits::*;

pub use fixed_polynomial::*;
pub use growable_polynomial::*;

/// Raw exponent reported in place of [`DensePoly::next_term`] finding no later term.
pub const NO_NEXT_TERM: usize = 0;

/// Raw exponent reported in place of [`DensePoly::previous_term`] finding no earlier term.
pub const NO_PREVIOUS_TERM: usize = usize::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_and_growable_agree() {
        let mut growable = Polynomial::<f64>::new();
        let mut fixed = FixedPolynomial::<f64, 8>::new();

        for (c, e) in [(4.0, 3), (-4.0, 1), (1.5, 0), (0.0, 3), (2.0, 5)] {
            growable.assign(c, e);
            fixed.assign(c, e).unwrap();
        }

        assert_eq!(growable.degree(), DensePoly::degree(&fixed));
        assert_eq!(growable.to_string(), fixed.to_string());
        assert_eq!(growable.eval(1.5), fixed.eval(1.5));
        assert_eq!(Polynomial::from(fixed), growable);
    }
}
