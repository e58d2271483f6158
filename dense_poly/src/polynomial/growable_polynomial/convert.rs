use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Polynomial<F> {
    /// Constructs a new polynomial from dense coefficients, constant term first.
    #[inline]
    pub fn from_slice(coefficients: &[F]) -> Self {
        Self::from(coefficients.to_vec())
    }
}

impl<F: Coefficient> From<Vec<F>> for Polynomial<F> {
    /// Takes `coefficients` as the storage, constant term first.
    fn from(coefficients: Vec<F>) -> Self {
        if coefficients.is_empty() {
            return Self::new();
        }
        debug_assert!(
            coefficients.iter().all(|c| c.is_finite()),
            "coefficient must be finite"
        );

        let mut poly = Self {
            data: coefficients,
            degree: 0,
        };
        poly.rescan_degree();
        poly
    }
}

impl<F: Coefficient> FromIterator<(F, usize)> for Polynomial<F> {
    /// Accumulates `(coefficient, exponent)` terms, so repeated exponents add up.
    fn from_iter<I: IntoIterator<Item = (F, usize)>>(iter: I) -> Self {
        let mut poly = Self::new();
        poly.extend(iter);
        poly
    }
}

impl<F: Coefficient> Extend<(F, usize)> for Polynomial<F> {
    fn extend<I: IntoIterator<Item = (F, usize)>>(&mut self, iter: I) {
        iter.into_iter()
            .for_each(|(coefficient, exponent)| self.accumulate(coefficient, exponent));
    }
}

impl<F: Coefficient> AsRef<[F]> for Polynomial<F> {
    #[inline]
    fn as_ref(&self) -> &[F] {
        self.coefficients()
    }
}
