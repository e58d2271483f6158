//! This module defines the errors that
//! may occur when working with bounded polynomials.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolynomialError {
    /// Error that occurs when an exponent exceeds the maximum degree of a bounded polynomial.
    #[error("exponent {exponent} exceeds the maximum degree {max}")]
    ExponentOutOfRange {
        /// The rejected exponent.
        exponent: usize,
        /// The maximum degree.
        max: usize,
    },
    /// Error that occurs when an operation would produce a term above the maximum degree.
    #[error("result degree {degree} exceeds the maximum degree {max}")]
    DegreeOverflow {
        /// The degree the result would need.
        degree: usize,
        /// The maximum degree.
        max: usize,
    },
}
