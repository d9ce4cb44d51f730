use {
    crate::{MathError, MathResult, Rational, SignedInteger, rational::fmt_rational},
    borsh::BorshSerialize,
    serde::Serialize,
    std::fmt,
};

/// A rational number stored exactly as it was given: no reduction, no sign
/// normalization.
///
/// Equality is structural, so `6/8` and `3/4` are different values.
#[derive(Serialize, BorshSerialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRational<I = i32> {
    pub(crate) numerator: I,
    pub(crate) denominator: I,
}

impl<I> RawRational<I>
where
    I: SignedInteger,
{
    /// Create a new rational. Error if the denominator is zero.
    pub fn new(numerator: I, denominator: I) -> MathResult<Self> {
        if denominator.is_zero() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                numerator = %numerator,
                denominator = %denominator,
                "Rejected raw rational with zero denominator"
            );

            return Err(MathError::zero_denominator(numerator));
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }
}

impl<I> RawRational<I> {
    /// Create a rational without checking the denominator.
    pub(crate) const fn new_unchecked(numerator: I, denominator: I) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl<I> Rational for RawRational<I>
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

impl<I> fmt::Display for RawRational<I>
where
    I: SignedInteger,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_rational(self, f)
    }
}

// ----------------------------------- tests -----------------------------------
