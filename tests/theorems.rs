use quelim::proving::{Prover, ProvingError};

fn is_theorem(input: &str) -> bool {
    Prover::new()
        .is_theorem(input)
        .unwrap_or_else(|error| panic!("could not decide `{input}`: {error}"))
}

#[test]
fn order_axioms() {
    // transitivity holds, density of the order bounds nothing from above
    assert!(is_theorem("!x.!y.!z. x < y & y < z => x < z"));
    assert!(!is_theorem("!x.!y. x < y => !z. x < z => z < y"));
    assert!(is_theorem("!x.?y.x < y"));
    assert!(!is_theorem("?y.!x.x < y"));
}

#[test]
fn contradictory_bounds() {
    assert!(!is_theorem("?x. x > 0 & x < 0"));
    assert!(is_theorem("?x. x > 0 & x < 1"));
}

#[test]
fn scaled_transitivity() {
    assert!(is_theorem(
        "!x.!y.!z. 2*x < 3*y & 3*x < 2*y & 7*y < 5*z => 14*x < 10*z"
    ));
}

#[test]
fn sums_of_positives() {
    assert!(is_theorem("!x.!y. x > 0 & y > 0 => x + y > 0"));
}

#[test]
fn equational_chains() {
    // substituting c = 3*a leaves b < a < 3*b, which has no solution with
    // b negative
    assert!(!is_theorem("?a.?b.?c. 2*a+3*b > c & a > b & c = 3*a & b < 0"));

    // the same system without the sign restriction on b is solvable
    assert!(is_theorem("?a.?b.?c. 2*a+3*b > c & a > b & c = 3*a & b > 0"));
}

#[test]
fn averaging_arguments() {
    assert!(is_theorem(
        "!x.!y.!z.!u.(x < y & x + y = 2*z & y - x = u) => z + u > y"
    ));
    assert!(is_theorem(
        "!x.!y.!z.!u.(x < 2*y & x + 2*y = z & y - z > u) => 5*y - 2*z > u"
    ));
}

#[test]
fn free_variables_are_closed_existentially() {
    assert!(is_theorem("x < y"));
    assert!(!is_theorem("x < x"));
}

#[test]
fn ground_formulas() {
    assert!(is_theorem("1 < 2"));
    assert!(!is_theorem("1 > 2"));
    assert!(is_theorem("T"));
    assert!(!is_theorem("F"));
    assert!(is_theorem("2*3 = 6"));
}

#[test]
fn rational_reasoning() {
    // there is no smallest positive rational
    assert!(is_theorem("!x. x > 0 => ?y. y > 0 & y < x"));
    // halves exist
    assert!(is_theorem("!x.?y. y + y = x"));
}

#[test]
fn connective_semantics() {
    assert!(is_theorem("!x.!y. x < y | x = y | x > y"));
    assert!(is_theorem("!x.!y. x < y <=> ~(x = y | x > y)"));
    assert!(is_theorem("!x.!y. ~(x < y & y < x)"));
}

#[test]
fn invalid_formulas_are_rejected() {
    let prover = Prover::new();
    assert!(matches!(
        prover.is_theorem("x <"),
        Err(ProvingError::InvalidFormula { .. })
    ));
    assert!(matches!(
        prover.is_theorem("?x.?y.x*y > 0"),
        Err(ProvingError::Linearize(_))
    ));
    assert!(matches!(
        prover.is_theorem("?x.x/0 > 0"),
        Err(ProvingError::Linearize(_))
    ));
}

#[test]
fn the_growth_bound_abandons_large_projections() {
    let prover = Prover { limit: Some(1) };
    assert!(matches!(
        prover.is_theorem("?x. x > 0 & x > 1 & x < 2 & x < 3"),
        Err(ProvingError::Constraint(_))
    ));
}
