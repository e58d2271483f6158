use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, Float};

/// Floating-point types usable as polynomial coefficients.
pub trait Coefficient: Float + Debug + Display + 'static {
    /// Converts an exponent into a coefficient value.
    fn from_exponent(exponent: usize) -> Self;
}

impl<T> Coefficient for T
where
    T: Float + Debug + Display + 'static,
    usize: AsPrimitive<T>,
{
    #[inline]
    fn from_exponent(exponent: usize) -> Self {
        exponent.as_()
    }
}
