use std::ops::Neg;

use crate::Coefficient;

use super::Polynomial;

impl<F: Coefficient> Polynomial<F> {
    /// Performs the unary `-` operation in place.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.data.iter_mut().for_each(|c| *c = -*c);
    }
}

impl<F: Coefficient> Neg for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl<F: Coefficient> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}
