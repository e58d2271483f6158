use std::fmt;

use num_traits::Zero;

use crate::Coefficient;

use super::DensePoly;

mod calculus;
mod convert;
mod random;

mod add;
mod mul;
mod neg;
mod sub;

/// A dense univariate polynomial whose coefficient storage grows on demand.
///
/// Coefficients are stored in a vector `data`, where the `i`-th element is the
/// coefficient of the `x^i` term. Assigning to an exponent past the end of the
/// storage reallocates it to fit that exponent exactly.
///
/// Alongside the storage a `degree` is tracked: the highest exponent with a
/// nonzero coefficient as seen by the last rescan. Every mutation rescans, so
/// all slots above `degree` hold zero once a public method returns.
///
/// Cloning deep-copies the storage. Equality compares coefficients only, so
/// two polynomials with different capacities can still be equal.
///
/// # Examples
/// ```
/// use dense_poly::Polynomial;
///
/// let mut poly = Polynomial::monomial(1.0, 1);
/// poly.assign(3.0, 0);
/// assert_eq!(poly.to_string(), "x + 3");
///
/// poly.accumulate(-5.0, 1);
/// assert_eq!(poly.to_string(), "-4x + 3");
/// assert_eq!(poly.eval(2.0), -5.0);
/// ```
#[derive(Clone, Debug)]
pub struct Polynomial<F = f64> {
    data: Vec<F>,
    degree: usize,
}

impl<F: Coefficient> Polynomial<F> {
    /// Creates the zero polynomial.
    #[inline]
    pub fn new() -> Self {
        Self::monomial(F::zero(), 0)
    }

    /// Creates the polynomial `coefficient * x^exponent`.
    pub fn monomial(coefficient: F, exponent: usize) -> Self {
        debug_assert!(coefficient.is_finite(), "coefficient must be finite");
        let mut poly = Self {
            data: Vec::new(),
            degree: 0,
        };
        poly.ensure_capacity(exponent);
        poly.data[exponent] = coefficient;
        poly.rescan_degree();
        poly
    }

    /// Returns the tracked degree.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the length of the coefficient storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the coefficient of `x^exponent`.
    #[inline]
    pub fn coefficient(&self, exponent: usize) -> F {
        if exponent > self.degree {
            F::zero()
        } else {
            self.data[exponent]
        }
    }

    /// Returns the coefficients from `x^0` up to the degree.
    #[inline]
    pub fn coefficients(&self) -> &[F] {
        &self.data[..=self.degree]
    }

    /// Returns `true` if `self` is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }

    /// Returns the smallest exponent above `exponent` with a nonzero coefficient.
    #[inline]
    pub fn next_term(&self, exponent: usize) -> Option<usize> {
        DensePoly::next_term(self, exponent)
    }

    /// Returns the largest exponent below `exponent` with a nonzero coefficient.
    #[inline]
    pub fn previous_term(&self, exponent: usize) -> Option<usize> {
        DensePoly::previous_term(self, exponent)
    }

    /// Evaluate p(x).
    #[inline]
    pub fn eval(&self, x: F) -> F {
        DensePoly::eval(self, x)
    }

    /// Sets the coefficient of `x^exponent`, growing the storage if needed.
    pub fn assign(&mut self, coefficient: F, exponent: usize) {
        debug_assert!(coefficient.is_finite(), "coefficient must be finite");
        if exponent > self.degree {
            self.ensure_capacity(exponent);
        }
        self.data[exponent] = coefficient;
        self.rescan_degree();
    }

    /// Adds `amount` to the coefficient of `x^exponent`, growing the storage if needed.
    pub fn accumulate(&mut self, amount: F, exponent: usize) {
        debug_assert!(amount.is_finite(), "coefficient must be finite");
        if exponent > self.degree {
            self.ensure_capacity(exponent);
        }
        self.data[exponent] = self.data[exponent] + amount;
        self.rescan_degree();
    }

    /// Sets every coefficient to zero. The storage keeps its length.
    pub fn clear(&mut self) {
        self.data.fill(F::zero());
        self.rescan_degree();
    }

    /// Yields `(coefficient, exponent)` for every slot up to the degree.
    #[inline]
    fn dense_terms(&self) -> impl Iterator<Item = (F, usize)> + '_ {
        self.coefficients().iter().copied().zip(0..)
    }

    /// Grows the storage to exactly `exponent + 1` slots when it is shorter.
    ///
    /// Only `0..=degree` is carried over, and `degree` is set to `exponent`
    /// outright; callers rescan afterwards.
    fn ensure_capacity(&mut self, exponent: usize) {
        if exponent < self.data.len() {
            return;
        }

        let new_capacity = exponent
            .checked_add(1)
            .expect("exponent exceeds the addressable storage");
        tracing::trace!(
            old_capacity = self.data.len(),
            new_capacity,
            "growing polynomial storage"
        );

        let mut grown = vec![F::zero(); new_capacity];
        if !self.data.is_empty() {
            grown[..=self.degree].copy_from_slice(&self.data[..=self.degree]);
        }
        self.data = grown;
        self.degree = exponent;
    }

    /// Recomputes `degree` as the highest nonzero slot, or `0` if there is none.
    #[inline]
    fn rescan_degree(&mut self) {
        self.degree = self
            .data
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0);
    }
}

impl<F: Coefficient> Default for Polynomial<F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Coefficient> DensePoly<F> for Polynomial<F> {
    #[inline]
    fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    fn coefficient(&self, exponent: usize) -> F {
        Polynomial::coefficient(self, exponent)
    }
}

impl<F: Coefficient> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        let degree = self.degree.max(other.degree);
        (0..=degree).all(|i| self.coefficient(i) == other.coefficient(i))
    }
}

impl<F: Coefficient> Zero for Polynomial<F> {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        DensePoly::is_zero(self)
    }

    #[inline]
    fn set_zero(&mut self) {
        self.clear();
    }
}

impl<F: Coefficient> fmt::Display for Polynomial<F> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display::fmt_terms::<F, _>(self, f)
    }
}
