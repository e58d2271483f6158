use std::ops::{Add, AddAssign};

use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Add<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// Accumulates the terms of `self` and then of `rhs` into a fresh polynomial.
    fn add(self, rhs: &Polynomial<F>) -> Self::Output {
        let mut sum = Polynomial::new();
        sum.extend(self.dense_terms());
        sum.extend(rhs.dense_terms());
        sum
    }
}

impl<F: Coefficient> Add<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Add::add(&self, &rhs)
    }
}

impl<F: Coefficient> Add<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Add::add(&self, rhs)
    }
}

impl<F: Coefficient> Add<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn add(self, rhs: Polynomial<F>) -> Self::Output {
        Add::add(self, &rhs)
    }
}

impl<F: Coefficient> AddAssign<&Self> for Polynomial<F> {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        *self = Add::add(&*self, rhs);
    }
}

impl<F: Coefficient> AddAssign<Self> for Polynomial<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        AddAssign::add_assign(self, &rhs);
    }
}
