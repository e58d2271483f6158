use std::ops::{Sub, SubAssign};

use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Sub<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// Accumulates the terms of `self` and then the negated terms of `rhs`
    /// into a fresh polynomial.
    fn sub(self, rhs: &Polynomial<F>) -> Self::Output {
        let mut difference = Polynomial::new();
        difference.extend(self.dense_terms());
        difference.extend(rhs.dense_terms().map(|(c, i)| (-c, i)));
        difference
    }
}

impl<F: Coefficient> Sub<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Sub::sub(&self, &rhs)
    }
}

impl<F: Coefficient> Sub<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Sub::sub(&self, rhs)
    }
}

impl<F: Coefficient> Sub<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(self, rhs: Polynomial<F>) -> Self::Output {
        Sub::sub(self, &rhs)
    }
}

impl<F: Coefficient> SubAssign<&Self> for Polynomial<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        *self = Sub::sub(&*self, rhs);
    }
}

impl<F: Coefficient> SubAssign<Self> for Polynomial<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        SubAssign::sub_assign(self, &rhs);
    }
}
