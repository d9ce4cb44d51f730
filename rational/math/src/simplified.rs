use {
    crate::{MathError, MathResult, Rational, SignedInteger, rational::fmt_rational, simplify},
    borsh::BorshSerialize,
    serde::Serialize,
    std::fmt,
};

/// A rational number always kept in lowest terms.
///
/// On construction, numerator and denominator are divided by their greatest
/// common divisor, and zero is stored as `0/1`. Each field keeps its own sign,
/// so `6/-8` is stored as `3/-4` and `-6/-8` as `-3/-4`; rendering treats the
/// latter as positive.
#[derive(Serialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimplifiedRational<I = i32> {
    pub(crate) numerator: I,
    pub(crate) denominator: I,
}

impl<I> SimplifiedRational<I>
where
    I: SignedInteger,
{
    /// Create a new rational in lowest terms.
    ///
    /// Errors if the denominator is zero.
    ///
    /// Also errors with [`MathError::OverflowAbs`] if a non-zero numerator or
    /// the denominator is `I::MIN`, since its magnitude doesn't fit in `I`.
    /// This holds even when the reduced value would fit: `-2 / i32::MIN` is
    /// rejected although it equals `1 / 1073741824`.
    pub fn new(numerator: I, denominator: I) -> MathResult<Self> {
        if denominator.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                numerator = %numerator,
                denominator = %denominator,
                "Rejected simplified rational with zero denominator"
            );

            return Err(MathError::zero_denominator(numerator));
        }

        if numerator.is_zero() {
            return Ok(Self::new_unchecked(I::ZERO, I::ONE));
        }

        let (numerator, denominator) = simplify(numerator, denominator)?;

        Ok(Self::new_unchecked(numerator, denominator))
    }
}

impl<I> SimplifiedRational<I> {
    /// Create a rational without simplifying it. The caller is responsible for
    /// passing a pair that is already in lowest terms.
    pub(crate) const fn new_unchecked(numerator: I, denominator: I) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl<I> Rational for SimplifiedRational<I>
where
    I: SignedInteger,
{
    type Int = I;

    fn numerator(&self) -> I {
        self.numerator
    }

    fn denominator(&self) -> I {
        self.denominator
    }

    fn construct(&self, numerator: I, denominator: I) -> MathResult<Self> {
        Self::new(numerator, denominator)
    }
}

impl<I> fmt::Display for SimplifiedRational<I>
where
    I: SignedInteger,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rational(self, f)
    }
}

// ----------------------------------- tests -----------------------------------
