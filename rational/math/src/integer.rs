use {
    crate::{IsZero, MathError, MathResult, NumberConst},
    bnum::types::{I256, I512, U256, U512},
    std::{
        fmt::{Debug, Display},
        hash::Hash,
        ops::{Div, Rem},
    },
};

/// Describes a fixed-width signed integer that can back a rational number.
///
/// Operations that may overflow at the edge of the integer's range are
/// checked, and report a [`MathError`] instead of panicking or wrapping.
pub trait SignedInteger:
    Sized
    + Copy
    + Debug
    + Display
    + Eq
    + Ord
    + Hash
    + IsZero
    + NumberConst
    + Div<Output = Self>
    + Rem<Output = Self>
    + 'static
{
    /// The unsigned counterpart, wide enough to hold the magnitude of any
    /// value of `Self`, including `Self::MIN`.
    type Unsigned: Display;

    fn is_negative(self) -> bool;

    fn checked_abs(self) -> MathResult<Self>;

    fn unsigned_abs(self) -> Self::Unsigned;
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_signed_integer {
    ($signed:ty => $unsigned:ty) => {
        impl SignedInteger for $signed {
            type Unsigned = $unsigned;

            fn is_negative(self) -> bool {
                self.is_negative()
            }

            fn checked_abs(self) -> MathResult<Self> {
                self.checked_abs()
                    .ok_or_else(|| MathError::overflow_abs(self))
            }

            fn unsigned_abs(self) -> $unsigned {
                self.unsigned_abs()
            }
        }
    };
    ($($signed:ty => $unsigned:ty),+ $(,)?) => {
        $(
            impl_signed_integer!($signed => $unsigned);
        )+
    };
}

impl_signed_integer! {
    i8    => u8,
    i16   => u16,
    i32   => u32,
    i64   => u64,
    i128  => u128,
    isize => usize,
    I256  => U256,
    I512  => U512,
}

// ----------------------------------- tests -----------------------------------
