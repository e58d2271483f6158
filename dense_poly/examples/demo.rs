use dense_poly::{Polynomial, NO_NEXT_TERM, NO_PREVIOUS_TERM};

// Walks through the basic operations of the growable polynomial,
// printing each intermediate value with the expected output alongside.

fn main() {
    let mut p1 = Polynomial::monomial(1.0, 1);
    println!("{p1}"); // x

    p1.assign(3.0, 0);
    println!("{p1}"); // x + 3

    p1.accumulate(-5.0, 1);
    println!("{p1}"); // -4x + 3

    println!("{}", p1.antiderivative()); // -2x^2 + 3x
    println!("{}", p1.derivative()); // -4
    println!("{}", p1.coefficient(1)); // -4
    println!("{}", p1.definite_integral(1.0, 2.0)); // -3
    println!("{}", p1.degree()); // 1
    println!("{}", p1.eval(2.0)); // -5
    println!("{}", p1.is_zero()); // false

    p1.assign(4.0, 3);
    println!("{}", p1.next_term(1).unwrap_or(NO_NEXT_TERM)); // 3
    println!("{}", p1.previous_term(1).unwrap_or(NO_PREVIOUS_TERM)); // 0
    println!("{}", p1.next_term(10).unwrap_or(NO_NEXT_TERM)); // 0

    p1.assign(-4.0, 1);
    p1.assign(0.0, 0);
    println!("{p1}"); // 4x^3 - 4x
    println!("{}", p1.previous_term(1).unwrap_or(NO_PREVIOUS_TERM)); // usize::MAX
    println!("{}", p1.eval(2.0)); // 24

    let mut p2 = Polynomial::monomial(1.0, 2);
    p2.assign(1.0, 0);
    p2.assign(2.0, 1);
    println!("p1: {p1}"); // 4x^3 - 4x
    println!("p2: {p2}"); // x^2 + 2x + 1
    println!("----");

    let p3 = p1.clone();
    println!("p3: {p3}");
    println!("p1 + p2: {}", &p1 + &p2); // 4x^3 + x^2 - 2x + 1
    println!("p2 - p1: {}", &p2 - &p1); // -4x^3 + x^2 + 6x + 1
    println!("p1 * p2: {}", &p1 * &p2); // 4x^5 + 8x^4 - 8x^2 - 4x

    p1.clear();
    println!("{p1}"); // 0

    p1.assign(0.1, 0);
    p1.assign(5.23, 1);
    p1.assign(2.1, 2);
    println!("{p1}"); // 2.1x^2 + 5.23x + 0.1
    println!("{p1:.1}"); // 2.1x^2 + 5.2x + 0.1
}
