use std::fmt;

use crate::Coefficient;

use super::DensePoly;

/// Writes `poly` highest exponent first, e.g. `4x^3 - 4x + 1`.
///
/// Formatter options such as precision apply to every coefficient.
pub(crate) fn fmt_terms<F, P>(poly: &P, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    F: Coefficient,
    P: DensePoly<F> + ?Sized,
{
    if poly.is_zero() {
        return fmt::Display::fmt(&F::zero(), f);
    }

    let mut first = true;
    for exponent in (0..=poly.degree()).rev() {
        let coefficient = poly.coefficient(exponent);
        if coefficient.is_zero() {
            continue;
        }

        let shown = if first {
            coefficient
        } else {
            f.write_str(if coefficient < F::zero() { " - " } else { " + " })?;
            coefficient.abs()
        };
        first = false;

        // unit coefficients are implied on x terms: `x^2`, `-x`
        if exponent > 0 && shown.abs() == F::one() {
            if shown < F::zero() {
                f.write_str("-")?;
            }
        } else {
            fmt::Display::fmt(&shown, f)?;
        }

        match exponent {
            0 => {}
            1 => f.write_str("x")?,
            _ => write!(f, "x^{}", exponent)?,
        }
    }
    Ok(())
}
