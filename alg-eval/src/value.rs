//! Values that expressions evaluate to, and the algebraic structures they belong to.

use std::fmt::{self, Debug, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element of a field: a set with addition, multiplication, and their identities and
/// inverses.
///
/// Some method names overlap with the [`std::ops`] traits. Call them with the fully-qualified
/// syntax, such as `FieldElement::add(a, b)`.
pub trait FieldElement: Copy + Debug + PartialEq {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    fn add(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;

    /// The additive inverse.
    fn neg(self) -> Self;

    /// Returns `self - rhs`.
    fn sub(self, rhs: Self) -> Self {
        FieldElement::add(self, FieldElement::neg(rhs))
    }
}

/// A real number, with the operations of a field plus the usual elementary functions.
///
/// Trigonometric functions work in radians.
pub trait Real: FieldElement + PartialOrd {
    fn div(self, rhs: Self) -> Self;

    fn pow(self, exponent: Self) -> Self;

    /// The natural logarithm.
    fn ln(self) -> Self;

    fn cos(self) -> Self;

    fn sin(self) -> Self;

    /// Euler's number.
    fn e() -> Self;

    fn pi() -> Self;

    /// Converts a value in degrees to radians.
    fn to_radians(self) -> Self {
        Real::div(FieldElement::mul(self, Self::pi()), Self::from_f64(180.0))
    }

    /// Converts from a double-precision value, rounding if needed.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_real {
    ($ty:ty, $consts:ident) => {
        impl FieldElement for $ty {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            fn neg(self) -> Self {
                -self
            }
        }

        impl Real for $ty {
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }

            fn pow(self, exponent: Self) -> Self {
                <$ty>::powf(self, exponent)
            }

            fn ln(self) -> Self {
                <$ty>::ln(self)
            }

            fn cos(self) -> Self {
                <$ty>::cos(self)
            }

            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            fn e() -> Self {
                std::$consts::consts::E
            }

            fn pi() -> Self {
                std::$consts::consts::PI
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_real!(f32, f32);
impl_real!(f64, f64);

/// A complex number with real and imaginary parts of type `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T: Real> Complex<T> {
    /// Creates a complex number from its real and imaginary parts.
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Returns `self / rhs`.
    ///
    /// `(a + bi) / (c + di) = ((ac + bd) + (bc - ad)i) / (c^2 + d^2)`
    pub fn div(self, rhs: Self) -> Self {
        let Self { re: a, im: b } = self;
        let Self { re: c, im: d } = rhs;
        let denominator = FieldElement::add(FieldElement::mul(c, c), FieldElement::mul(d, d));
        Self::new(
            Real::div(FieldElement::add(FieldElement::mul(a, c), FieldElement::mul(b, d)), denominator),
            Real::div(FieldElement::sub(FieldElement::mul(b, c), FieldElement::mul(a, d)), denominator),
        )
    }
}

impl<T: Real> FieldElement for Complex<T> {
    fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    fn add(self, rhs: Self) -> Self {
        Self::new(FieldElement::add(self.re, rhs.re), FieldElement::add(self.im, rhs.im))
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`
    fn mul(self, rhs: Self) -> Self {
        let Self { re: a, im: b } = self;
        let Self { re: c, im: d } = rhs;
        Self::new(
            FieldElement::sub(FieldElement::mul(a, c), FieldElement::mul(b, d)),
            FieldElement::add(FieldElement::mul(a, d), FieldElement::mul(b, c)),
        )
    }

    fn neg(self) -> Self {
        Self::new(FieldElement::neg(self.re), FieldElement::neg(self.im))
    }
}

impl<T: Display + Real> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im < T::zero() {
            write!(f, "{} - {}i", self.re, FieldElement::neg(self.im))
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

/// The result of evaluating an expression.
///
/// Values of different variants never mix. Adding a [`Value::Single`] to a [`Value::Double`] is a
/// type error, not an implicit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A single-precision real number.
    Single(f32),

    /// A double-precision real number.
    Double(f64),

    /// A complex number with single-precision parts.
    SingleComplex(Complex<f32>),

    /// A complex number with double-precision parts.
    DoubleComplex(Complex<f64>),
}

impl Value {
    /// Returns the name of the type of this value, for use in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Single(_) => "single",
            Value::Double(_) => "double",
            Value::SingleComplex(_) => "single complex",
            Value::DoubleComplex(_) => "double complex",
        }
    }

    /// Returns the value as an [`f64`] if it is a real number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Single(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            Value::SingleComplex(_) | Value::DoubleComplex(_) => None,
        }
    }

    /// Returns true if this value is a real number.
    pub fn is_real(&self) -> bool {
        matches!(self, Value::Single(_) | Value::Double(_))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Single(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<Complex<f32>> for Value {
    fn from(c: Complex<f32>) -> Self {
        Value::SingleComplex(c)
    }
}

impl From<Complex<f64>> for Value {
    fn from(c: Complex<f64>) -> Self {
        Value::DoubleComplex(c)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Single(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::SingleComplex(c) => write!(f, "{}", c),
            Value::DoubleComplex(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn complex_multiplication() {
        // (1 + 2i)(3 - i) = 5 + 5i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(FieldElement::mul(a, b), Complex::new(5.0, 5.0));

        // i^2 = -1
        let i = Complex::<f64>::i();
        assert_eq!(FieldElement::mul(i, i), FieldElement::neg(Complex::one()));
    }

    #[test]
    fn complex_division() {
        // (5 + 5i) / (3 - i) = 1 + 2i
        let a = Complex::new(5.0, 5.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a.div(b), Complex::new(1.0, 2.0));
    }

    #[test]
    fn identities() {
        let x = Complex::new(2.5f32, -4.0);
        assert_eq!(FieldElement::add(x, Complex::zero()), x);
        assert_eq!(FieldElement::mul(x, Complex::one()), x);
        assert_eq!(FieldElement::add(x, FieldElement::neg(x)), Complex::zero());
        assert_eq!(FieldElement::sub(7.0f64, 2.0), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Value::Double(2.5).to_string(), "2.5");
        assert_eq!(Value::from(Complex::new(1.0f64, -2.0)).to_string(), "1 - 2i");
        assert_eq!(Value::from(Complex::new(0.0f32, 1.0)).to_string(), "0 + 1i");
        assert_eq!(Value::SingleComplex(Complex::zero()).type_name(), "single complex");
    }
}
