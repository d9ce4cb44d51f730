use crate::{MathError, MathResult, RawRational, SignedInteger, SimplifiedRational};

// ------------------------------ int -> rational ------------------------------

impl<I> From<I> for RawRational<I>
where
    I: SignedInteger,
{
    fn from(value: I) -> Self {
        Self::new_unchecked(value, I::ONE)
    }
}

// Any integer over one is already in lowest terms.
impl<I> From<I> for SimplifiedRational<I>
where
    I: SignedInteger,
{
    fn from(value: I) -> Self {
        Self::new_unchecked(value, I::ONE)
    }
}

// --------------------------- simplified <-> raw ------------------------------

impl<I> From<SimplifiedRational<I>> for RawRational<I> {
    fn from(value: SimplifiedRational<I>) -> Self {
        Self::new_unchecked(value.numerator, value.denominator)
    }
}

impl<I> TryFrom<RawRational<I>> for SimplifiedRational<I>
where
    I: SignedInteger,
{
    type Error = MathError;

    fn try_from(value: RawRational<I>) -> MathResult<Self> {
        Self::new(value.numerator, value.denominator)
    }
}

impl<I> RawRational<I>
where
    I: SignedInteger,
{
    /// Reduce the rational to lowest terms.
    pub fn simplified(self) -> MathResult<SimplifiedRational<I>> {
        self.try_into()
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{MathError, RawRational, Rational, SimplifiedRational},
        bnum::types::I256,
        test_case::test_case,
    };

    #[test_case(7 => "7/1"; "positive")]
    #[test_case(-7 => "-7/1"; "negative")]
    #[test_case(0 => "0/1"; "zero")]
    fn from_int(value: i64) -> String {
        let raw = RawRational::from(value);
        let simplified = SimplifiedRational::from(value);
        assert_eq!(raw.to_string(), simplified.to_string());
        raw.to_string()
    }

    #[test]
    fn raw_to_simplified() {
        let raw = RawRational::new(-10_i32, -100).unwrap();
        let simplified = raw.simplified().unwrap();
        assert_eq!(simplified, SimplifiedRational::new(-1, -10).unwrap());
        assert_eq!(simplified.to_string(), "1/10");

        // The raw value keeps its own representation.
        assert_eq!(raw.numerator(), -10);
        assert_eq!(raw.to_string(), "10/100");
    }

    #[test]
    fn raw_to_simplified_reports_overflow() {
        let raw = RawRational::new(i16::MIN, 4).unwrap();
        assert!(matches!(
            SimplifiedRational::try_from(raw),
            Err(MathError::OverflowAbs { .. })
        ));
    }

    #[test]
    fn simplified_to_raw() {
        let simplified = SimplifiedRational::new(6_i32, -8).unwrap();
        let raw = RawRational::from(simplified);
        assert_eq!(raw, RawRational::new(3, -4).unwrap());
        assert!(!raw.equals(&simplified));
    }

    #[test]
    fn wide_integers() {
        let big = I256::from(i128::MAX) * I256::from(6_i128);
        let value = SimplifiedRational::new(big, I256::from(-4_i128)).unwrap();
        assert_eq!(value.numerator(), I256::from(i128::MAX) * I256::from(3_i128));
        assert_eq!(value.denominator(), I256::from(-2_i128));
        assert_eq!(
            value.to_string(),
            "-510423550381407695195061911147652317181/2"
        );
    }
}
