use std::ops::{Mul, MulAssign};

use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Polynomial<F> {
    /// Multiply `self` with a scalar.
    #[inline]
    pub fn mul_scalar(&self, scalar: F) -> Self {
        Self::from(self.data.iter().map(|&c| c * scalar).collect::<Vec<F>>())
    }
}

impl<F: Coefficient> Mul<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// Full convolution: every `self[i] * rhs[j]` is accumulated at `x^(i + j)`.
    fn mul(self, rhs: &Polynomial<F>) -> Self::Output {
        let mut product = Polynomial::new();
        for (a, i) in self.dense_terms() {
            for (b, j) in rhs.dense_terms() {
                product.accumulate(a * b, i + j);
            }
        }
        product
    }
}

impl<F: Coefficient> Mul<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Mul::mul(&self, &rhs)
    }
}

impl<F: Coefficient> Mul<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &Self) -> Self::Output {
        Mul::mul(&self, rhs)
    }
}

impl<F: Coefficient> Mul<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn mul(self, rhs: Polynomial<F>) -> Self::Output {
        Mul::mul(self, &rhs)
    }
}

impl<F: Coefficient> MulAssign<&Self> for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        *self = Mul::mul(&*self, rhs);
    }
}

impl<F: Coefficient> MulAssign<Self> for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        MulAssign::mul_assign(self, &rhs);
    }
}
