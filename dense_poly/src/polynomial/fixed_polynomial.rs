use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::{Coefficient, PolynomialError};

use super::{DensePoly, Polynomial};

/// A dense polynomial stored inline in `N` slots, so exponents run from `0`
/// to [`FixedPolynomial::MAXIMUM_DEGREE`] (`N - 1`).
///
/// It follows the same assign-then-rescan discipline as [`Polynomial`], but
/// never reallocates: operations that would need an exponent above the
/// maximum degree fail with a [`PolynomialError`] instead.
///
/// # Examples
/// ```
/// use dense_poly::{DensePoly, FixedPolynomial, PolynomialError};
///
/// let mut poly = FixedPolynomial::<f64, 4>::monomial(4.0, 3)?;
/// poly.assign(-4.0, 1)?;
/// assert_eq!(poly.to_string(), "4x^3 - 4x");
/// assert_eq!(poly.eval(2.0), 24.0);
///
/// assert!(poly.assign(1.0, 4).is_err());
/// # Ok::<(), PolynomialError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPolynomial<F, const N: usize> {
    data: [F; N],
    degree: usize,
}

impl<F: Coefficient, const N: usize> FixedPolynomial<F, N> {
    /// The highest exponent that can be stored.
    pub const MAXIMUM_DEGREE: usize = N - 1;

    const NON_EMPTY: () = assert!(N > 0, "a fixed polynomial needs at least one slot");

    /// Creates the zero polynomial.
    #[inline]
    pub fn new() -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [F::zero(); N],
            degree: 0,
        }
    }

    /// Creates the polynomial `coefficient * x^exponent`.
    #[inline]
    pub fn monomial(coefficient: F, exponent: usize) -> Result<Self, PolynomialError> {
        let mut poly = Self::new();
        poly.assign(coefficient, exponent)?;
        Ok(poly)
    }

    /// Returns the coefficients from `x^0` up to the degree.
    #[inline]
    pub fn coefficients(&self) -> &[F] {
        &self.data[..=self.degree]
    }

    /// Sets the coefficient of `x^exponent`.
    pub fn assign(&mut self, coefficient: F, exponent: usize) -> Result<(), PolynomialError> {
        Self::check_exponent(exponent)?;
        debug_assert!(coefficient.is_finite(), "coefficient must be finite");
        self.data[exponent] = coefficient;
        self.rescan_degree();
        Ok(())
    }

    /// Adds `amount` to the coefficient of `x^exponent`.
    pub fn accumulate(&mut self, amount: F, exponent: usize) -> Result<(), PolynomialError> {
        Self::check_exponent(exponent)?;
        debug_assert!(amount.is_finite(), "coefficient must be finite");
        self.data[exponent] = self.data[exponent] + amount;
        self.rescan_degree();
        Ok(())
    }

    /// Sets every coefficient to zero.
    pub fn clear(&mut self) {
        self.data.fill(F::zero());
        self.rescan_degree();
    }

    /// Returns the derivative of `self`.
    pub fn derivative(&self) -> Self {
        let mut derivative = Self::new();
        for i in 0..self.degree {
            let exponent = i + 1;
            derivative.data[i] = self.data[exponent] * F::from_exponent(exponent);
        }
        derivative.rescan_degree();
        derivative
    }

    /// Returns the antiderivative of `self` whose constant term is zero.
    ///
    /// Fails when the degree is already [`Self::MAXIMUM_DEGREE`].
    pub fn antiderivative(&self) -> Result<Self, PolynomialError> {
        if !self.is_zero() {
            Self::check_degree(self.degree + 1)?;
        }

        let mut antiderivative = Self::new();
        for exponent in 1..N {
            antiderivative.data[exponent] = self.data[exponent - 1] / F::from_exponent(exponent);
        }
        antiderivative.rescan_degree();
        Ok(antiderivative)
    }

    /// Returns the integral of `self` over `[x0, x1]`.
    #[inline]
    pub fn definite_integral(&self, x0: F, x1: F) -> Result<F, PolynomialError> {
        Ok(self.antiderivative()?.eval(x1) - self.antiderivative()?.eval(x0))
    }

    /// Multiplies `self` by `rhs`, failing when the product needs an exponent
    /// above [`Self::MAXIMUM_DEGREE`].
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, PolynomialError> {
        let mut product = Self::new();
        if self.is_zero() || rhs.is_zero() {
            return Ok(product);
        }
        Self::check_degree(self.degree + rhs.degree)?;

        for (i, &a) in self.coefficients().iter().enumerate() {
            for (j, &b) in rhs.coefficients().iter().enumerate() {
                product.data[i + j] = product.data[i + j] + a * b;
            }
        }
        product.rescan_degree();
        Ok(product)
    }

    fn check_exponent(exponent: usize) -> Result<(), PolynomialError> {
        if exponent > Self::MAXIMUM_DEGREE {
            tracing::debug!(exponent, max = Self::MAXIMUM_DEGREE, "exponent out of range");
            return Err(PolynomialError::ExponentOutOfRange {
                exponent,
                max: Self::MAXIMUM_DEGREE,
            });
        }
        Ok(())
    }

    fn check_degree(degree: usize) -> Result<(), PolynomialError> {
        if degree > Self::MAXIMUM_DEGREE {
            tracing::debug!(degree, max = Self::MAXIMUM_DEGREE, "result degree overflow");
            return Err(PolynomialError::DegreeOverflow {
                degree,
                max: Self::MAXIMUM_DEGREE,
            });
        }
        Ok(())
    }

    #[inline]
    fn rescan_degree(&mut self) {
        self.degree = self
            .data
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0);
    }
}

impl<F: Coefficient, const N: usize> Default for FixedPolynomial<F, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Coefficient, const N: usize> DensePoly<F> for FixedPolynomial<F, N> {
    #[inline]
    fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    fn coefficient(&self, exponent: usize) -> F {
        if exponent > self.degree {
            F::zero()
        } else {
            self.data[exponent]
        }
    }
}

impl<F: Coefficient, const N: usize> fmt::Display for FixedPolynomial<F, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display::fmt_terms::<F, _>(self, f)
    }
}

impl<F: Coefficient, const N: usize> Add for FixedPolynomial<F, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.data
            .iter_mut()
            .zip(rhs.data)
            .for_each(|(l, r)| *l = *l + r);
        self.rescan_degree();
        self
    }
}

impl<F: Coefficient, const N: usize> Sub for FixedPolynomial<F, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self.data
            .iter_mut()
            .zip(rhs.data)
            .for_each(|(l, r)| *l = *l - r);
        self.rescan_degree();
        self
    }
}

impl<F: Coefficient, const N: usize> Neg for FixedPolynomial<F, N> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.data.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl<F: Coefficient, const N: usize> TryFrom<&Polynomial<F>> for FixedPolynomial<F, N> {
    type Error = PolynomialError;

    fn try_from(poly: &Polynomial<F>) -> Result<Self, Self::Error> {
        Self::check_exponent(poly.degree())?;

        let mut fixed = Self::new();
        fixed.data[..=poly.degree()].copy_from_slice(poly.coefficients());
        fixed.rescan_degree();
        Ok(fixed)
    }
}

impl<F: Coefficient, const N: usize> From<FixedPolynomial<F, N>> for Polynomial<F> {
    #[inline]
    fn from(fixed: FixedPolynomial<F, N>) -> Self {
        Polynomial::from_slice(fixed.coefficients())
    }
}
