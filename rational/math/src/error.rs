use std::any::type_name;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("denominator of a rational must be non-zero! type: {ty}, numerator: {numerator}")]
    ZeroDenominator { ty: &'static str, numerator: String },

    #[error("invalid gcd operands! type: {ty}, a: {a}, b: {b}; expecting a > 0 and b >= 0")]
    InvalidGcdOperands {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("absolute value overflow! type: {ty}, value: {value}")]
    OverflowAbs { ty: &'static str, value: String },
}

impl MathError {
    pub fn zero_denominator<T>(numerator: T) -> Self
    where
        T: ToString,
    {
        Self::ZeroDenominator {
            ty: type_name::<T>(),
            numerator: numerator.to_string(),
        }
    }

    pub fn invalid_gcd_operands<T>(a: T, b: T) -> Self
    where
        T: ToString,
    {
        Self::InvalidGcdOperands {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_abs<T>(value: T) -> Self
    where
        T: ToString,
    {
        Self::OverflowAbs {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }

    /// Return true if the error was caused by an invalid input, as opposed to
    /// an integer overflow.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::ZeroDenominator { .. } | Self::InvalidGcdOperands { .. }
        )
    }
}

pub type MathResult<T> = Result<T, MathError>;

// ----------------------------------- tests -----------------------------------
