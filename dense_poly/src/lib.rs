#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Dense univariate polynomials over floating-point coefficients.
//!
//! Two representations are provided: the growable [`Polynomial`], whose
//! storage expands on demand, and the bounded [`FixedPolynomial`], whose
//! exponents are capped by a const generic slot count.

pub mod error;
pub mod polynomial;

mod primitive;

pub use error::PolynomialError;
pub use polynomial::*;
pub use primitive::Coefficient;
