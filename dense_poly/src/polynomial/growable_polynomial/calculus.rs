use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Polynomial<F> {
    /// Returns the derivative of `self`.
    pub fn derivative(&self) -> Self {
        let mut derivative = Self::new();
        for i in 0..self.degree {
            let exponent = i + 1;
            derivative.assign(self.data[exponent] * F::from_exponent(exponent), i);
        }
        derivative
    }

    /// Returns the antiderivative of `self` whose constant term is zero.
    ///
    /// Every slot of the storage is integrated, not only those up to the
    /// degree, so the result's capacity is `self.capacity() + 1`.
    pub fn antiderivative(&self) -> Self {
        let mut antiderivative = Self::new();
        for exponent in (1..=self.data.len()).rev() {
            antiderivative.assign(self.data[exponent - 1] / F::from_exponent(exponent), exponent);
        }
        antiderivative.assign(F::zero(), 0);
        antiderivative
    }

    /// Returns the integral of `self` over `[x0, x1]`.
    #[inline]
    pub fn definite_integral(&self, x0: F, x1: F) -> F {
        self.antiderivative().eval(x1) - self.antiderivative().eval(x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_of_constant() {
        let poly = Polynomial::monomial(7.0, 0);
        let derivative = poly.derivative();
        assert!(derivative.is_zero());
        assert_eq!(derivative.capacity(), 1);
    }

    #[test]
    fn test_derivative() {
        let poly: Polynomial = [(3.0, 4), (-2.0, 2), (5.0, 1), (9.0, 0)]
            .into_iter()
            .collect();
        let expected: Polynomial = [(12.0, 3), (-4.0, 1), (5.0, 0)].into_iter().collect();
        assert_eq!(poly.derivative(), expected);
        assert_eq!(poly.derivative().degree(), poly.degree() - 1);
    }

    #[test]
    fn test_antiderivative_spans_storage() {
        let mut poly = Polynomial::monomial(2.0, 1);
        poly.assign(0.0, 5);
        assert_eq!(poly.capacity(), 6);

        let antiderivative = poly.antiderivative();
        assert_eq!(antiderivative.capacity(), 7);
        assert_eq!(antiderivative.degree(), 2);
        assert_eq!(antiderivative, Polynomial::monomial(1.0, 2));
    }

    #[test]
    fn test_antiderivative_constant_is_zero() {
        let poly: Polynomial = [(6.0, 2), (4.0, 0)].into_iter().collect();
        let antiderivative = poly.antiderivative();
        assert_eq!(antiderivative.coefficient(0), 0.0);
        assert_eq!(antiderivative.to_string(), "2x^3 + 4x");
    }

    #[test]
    fn test_antiderivative_of_zero() {
        assert!(Polynomial::<f64>::new().antiderivative().is_zero());
    }

    #[test]
    fn test_definite_integral() {
        // 3x^2 integrates to x^3
        let poly = Polynomial::monomial(3.0, 2);
        assert_eq!(poly.definite_integral(0.0, 2.0), 8.0);
        assert_eq!(poly.definite_integral(2.0, 0.0), -8.0);
        assert_eq!(poly.definite_integral(1.5, 1.5), 0.0);
    }
}
