use crate::Coefficient;

/// Read access shared by the dense polynomial representations.
///
/// Implementors only supply the tracked degree and the coefficient lookup;
/// the zero test, term walking and evaluation are derived from those two.
pub trait DensePoly<F: Coefficient> {
    /// Returns the tracked degree, the highest exponent with a nonzero coefficient
    /// as of the last rescan.
    fn degree(&self) -> usize;

    /// Returns the coefficient of `x^exponent`, which is `0` above the degree.
    fn coefficient(&self, exponent: usize) -> F;

    /// Returns `true` if `self` is the zero polynomial.
    #[inline]
    fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefficient(0).is_zero()
    }

    /// Returns the smallest exponent above `exponent` with a nonzero coefficient.
    ///
    /// `None` corresponds to the [`NO_NEXT_TERM`](crate::NO_NEXT_TERM) sentinel.
    fn next_term(&self, exponent: usize) -> Option<usize> {
        let start = exponent.checked_add(1)?;
        (start..=self.degree()).find(|&e| !self.coefficient(e).is_zero())
    }

    /// Returns the largest exponent below `exponent` with a nonzero coefficient.
    ///
    /// `None` corresponds to the [`NO_PREVIOUS_TERM`](crate::NO_PREVIOUS_TERM) sentinel,
    /// and is always the answer for `exponent == 0`.
    fn previous_term(&self, exponent: usize) -> Option<usize> {
        // nothing above the degree can be nonzero
        let end = exponent.min(self.degree() + 1);
        (0..end).rev().find(|&e| !self.coefficient(e).is_zero())
    }

    /// Evaluate p(x).
    fn eval(&self, x: F) -> F {
        (0..=self.degree()).fold(F::zero(), |acc, i| {
            acc + self.coefficient(i) * num_traits::pow(x, i)
        })
    }
}
