use crate::{MathError, MathResult, SignedInteger};

/// Compute the greatest common divisor of `a` and `b` with the Euclidean
/// algorithm.
///
/// Errors if `a <= 0` or `b < 0`. `gcd(a, 0)` is `a`.
pub fn gcd<I>(a: I, b: I) -> MathResult<I>
where
    I: SignedInteger,
{
    if a <= I::ZERO || b.is_negative() {
        #[cfg(feature = "tracing")]
        tracing::debug!(a = %a, b = %b, "Rejected gcd operands");

        return Err(MathError::invalid_gcd_operands(a, b));
    }

    if b.is_zero() {
        return Ok(a);
    }

    let (mut hi, mut lo) = (a.max(b), a.min(b));

    // `lo` is strictly positive on every iteration: it starts as the smaller
    // of two positive numbers, then takes the value of a non-zero remainder.
    loop {
        let rem = hi % lo;

        if rem.is_zero() {
            return Ok(lo);
        }

        (hi, lo) = (lo, rem);
    }
}

/// Reduce the fraction `numerator / denominator` to lowest terms.
///
/// A zero numerator reduces to `0 / 1`. Otherwise both fields are divided by
/// their greatest common divisor; each keeps its own sign, so `6 / -8` reduces
/// to `3 / -4`.
pub fn simplify<I>(numerator: I, denominator: I) -> MathResult<(I, I)>
where
    I: SignedInteger,
{
    if denominator.is_zero() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            numerator = %numerator,
            denominator = %denominator,
            "Rejected zero denominator"
        );

        return Err(MathError::zero_denominator(numerator));
    }

    if numerator.is_zero() {
        return Ok((I::ZERO, I::ONE));
    }

    let divisor = gcd(numerator.checked_abs()?, denominator.checked_abs()?)?;

    Ok((numerator / divisor, denominator / divisor))
}

// ----------------------------------- tests -----------------------------------
