use {
    crate::{NumberConst, RawRational, SimplifiedRational},
    bnum::types::{I256, I512},
};

/// Describes a number that can be compared to zero.
pub trait IsZero {
    /// Return true if the number is zero; false otherwise.
    fn is_zero(&self) -> bool;

    /// Return true if the number is not zero; false otherwise.
    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }
}

// ---------------------------------- rational ---------------------------------

// A rational is zero iff its numerator is, whatever the denominator.

impl<I> IsZero for RawRational<I>
where
    I: IsZero,
{
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<I> IsZero for SimplifiedRational<I>
where
    I: IsZero,
{
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_is_zero {
    ($t:ty) => {
        impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_is_zero!($t);
        )+
    };
}

impl_is_zero! {
    i8, i16, i32, i64, i128, isize, I256, I512,
}

// ----------------------------------- tests -----------------------------------
