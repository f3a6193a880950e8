use {
    std::{
        cmp::Ordering,
        fmt::{self, Display, Formatter},
        ops::{Add, Div, Mul, Neg, Sub},
    },
    thiserror::Error,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("the denominator of a rational number must be non-zero")]
pub struct DivisionByZero;

/// An exact rational number.
///
/// Every value is kept in canonical form: numerator and denominator are
/// coprime and the denominator is positive. Equality is therefore
/// structural.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd(b, a % b)
    }
}

impl Rational {
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: i64, denominator: i64) -> Result<Rational, DivisionByZero> {
        if denominator == 0 {
            Err(DivisionByZero)
        } else {
            Ok(Rational::canonical(numerator, denominator))
        }
    }

    fn canonical(numerator: i64, denominator: i64) -> Rational {
        assert_ne!(denominator, 0, "the denominator must be non-zero");

        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let gcd = gcd(numerator, denominator);
        Rational {
            numerator: numerator / gcd,
            denominator: denominator / gcd,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational {
            numerator: n,
            denominator: 1,
        }
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        Rational::canonical(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        Rational::canonical(
            self.numerator * other.denominator - other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        Rational::canonical(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, other: Rational) -> Rational {
        Rational::canonical(
            self.numerator * other.denominator,
            self.denominator * other.numerator,
        )
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DivisionByZero, Rational};

    #[test]
    fn construct_canonical() {
        for ((n, d), (cn, cd)) in [
            ((1, 2), (1, 2)),
            ((2, 4), (1, 2)),
            ((-2, 4), (-1, 2)),
            ((2, -4), (-1, 2)),
            ((-2, -4), (1, 2)),
            ((0, 7), (0, 1)),
            ((6, 3), (2, 1)),
        ] {
            let rational = Rational::new(n, d).unwrap();
            assert_eq!((rational.numerator(), rational.denominator()), (cn, cd));
        }
    }

    #[test]
    fn construct_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();

        assert_eq!(half + third, Rational::new(5, 6).unwrap());
        assert_eq!(half - third, Rational::new(1, 6).unwrap());
        assert_eq!(half * third, Rational::new(1, 6).unwrap());
        assert_eq!(half / third, Rational::new(3, 2).unwrap());
        assert_eq!(-half, Rational::new(-1, 2).unwrap());
    }

    #[test]
    fn ordering() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();

        assert!(third < half);
        assert!(-half < -third);
        assert!(Rational::ZERO < half);
        assert!(half <= Rational::new(2, 4).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(Rational::from(3).to_string(), "3");
        assert_eq!(Rational::new(-3, 4).unwrap().to_string(), "-3/4");
        assert_eq!(Rational::new(3, -4).unwrap().to_string(), "-3/4");
    }
}
