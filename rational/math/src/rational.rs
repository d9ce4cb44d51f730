use {
    crate::{IsZero, MathResult, SignedInteger},
    std::{
        any::Any,
        fmt::{self, Debug, Display},
    },
};

/// Describes a number expressed as the quotient of two integers, the
/// denominator being non-zero.
///
/// Implementors decide how the two integers are stored. [`construct`](Rational::construct)
/// builds a new value of the implementor's own type, so that generic code can
/// produce values without knowing which representation it is working with.
pub trait Rational: Sized + Copy + Debug + Display + PartialEq + 'static {
    type Int: SignedInteger;

    fn numerator(&self) -> Self::Int;

    fn denominator(&self) -> Self::Int;

    /// Create a new value of the same type as `self`.
    ///
    /// Errors if the denominator is zero.
    fn construct(&self, numerator: Self::Int, denominator: Self::Int) -> MathResult<Self>;

    /// Return true if `other` is a value of the same type that compares equal
    /// to `self`; false for anything else, including other rational types.
    #[inline]
    fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| self == other)
    }

    /// Return true if exactly one of numerator and denominator is negative.
    ///
    /// Zero is never negative, regardless of the denominator's sign.
    #[inline]
    fn is_negative(&self) -> bool {
        let numerator = self.numerator();

        !numerator.is_zero() && numerator.is_negative() != self.denominator().is_negative()
    }
}

/// Write a rational as `n/d`, or `-n/d` if negative, using the magnitudes of
/// both fields.
pub(crate) fn fmt_rational<R>(rational: &R, f: &mut fmt::Formatter) -> fmt::Result
where
    R: Rational,
{
    if rational.is_negative() {
        f.write_str("-")?;
    }

    write!(
        f,
        "{}/{}",
        rational.numerator().unsigned_abs(),
        rational.denominator().unsigned_abs()
    )
}

// ----------------------------------- tests -----------------------------------
