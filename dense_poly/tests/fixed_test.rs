use dense_poly::{DensePoly, FixedPolynomial, Polynomial, PolynomialError};
use rand::{thread_rng, Rng};

const SLOTS: usize = 6;
type Fixed = FixedPolynomial<f64, SLOTS>;

#[test]
fn test_fixed_scenario() -> Result<(), PolynomialError> {
    let mut p1 = Fixed::monomial(1.0, 1)?;
    p1.assign(3.0, 0)?;
    p1.accumulate(-5.0, 1)?;
    assert_eq!(p1.to_string(), "-4x + 3");
    assert_eq!(p1.antiderivative()?.to_string(), "-2x^2 + 3x");
    assert_eq!(p1.derivative().to_string(), "-4");
    assert_eq!(p1.definite_integral(1.0, 2.0)?, -3.0);
    assert_eq!(p1.eval(2.0), -5.0);

    p1.assign(4.0, 3)?;
    assert_eq!(p1.next_term(1), Some(3));
    assert_eq!(p1.previous_term(1), Some(0));
    p1.assign(0.0, 0)?;
    assert_eq!(p1.to_string(), "4x^3 - 4x");
    assert_eq!(p1.previous_term(1), None);

    let mut p2 = Fixed::monomial(1.0, 2)?;
    p2.assign(1.0, 0)?;
    p2.assign(2.0, 1)?;
    assert_eq!((p1 + p2).to_string(), "4x^3 + x^2 - 2x + 1");
    assert_eq!((p2 - p1).to_string(), "-4x^3 + x^2 + 6x + 1");
    assert_eq!(p1.checked_mul(&p2)?.to_string(), "4x^5 + 8x^4 - 8x^2 - 4x");

    p1.clear();
    assert_eq!(p1.to_string(), "0");
    Ok(())
}

#[test]
fn test_fixed_rejects_out_of_range() {
    let mut poly = Fixed::new();
    let max = Fixed::MAXIMUM_DEGREE;

    assert_eq!(
        poly.assign(1.0, max + 1),
        Err(PolynomialError::ExponentOutOfRange {
            exponent: max + 1,
            max
        })
    );
    assert!(poly.is_zero());

    poly.assign(1.0, max).unwrap();
    assert_eq!(
        poly.antiderivative(),
        Err(PolynomialError::DegreeOverflow {
            degree: max + 1,
            max
        })
    );
    assert_eq!(
        poly.checked_mul(&poly),
        Err(PolynomialError::DegreeOverflow {
            degree: 2 * max,
            max
        })
    );
}

#[test]
fn test_fixed_matches_growable() {
    let mut rng = thread_rng();
    for _ in 0..32 {
        let mut fixed = Fixed::new();
        let mut growable = Polynomial::new();
        for _ in 0..8 {
            let exponent = rng.gen_range(0..SLOTS);
            let amount = f64::from(rng.gen_range(-5..=5));
            fixed.accumulate(amount, exponent).unwrap();
            growable.accumulate(amount, exponent);
        }

        assert_eq!(Polynomial::from(fixed), growable);
        assert_eq!(fixed.to_string(), growable.to_string());
        assert_eq!(Polynomial::from(fixed.derivative()), growable.derivative());
        assert_eq!(Fixed::try_from(&growable), Ok(fixed));
    }
}

#[test]
fn test_error_messages() {
    let err = Fixed::monomial(1.0, 9).unwrap_err();
    assert_eq!(err.to_string(), "exponent 9 exceeds the maximum degree 5");

    let err = PolynomialError::DegreeOverflow { degree: 8, max: 5 };
    assert_eq!(err.to_string(), "result degree 8 exceeds the maximum degree 5");
}
