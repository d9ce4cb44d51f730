use crate::{MathResult, Rational};

/// `rational`
///
/// Build a rational of the same type as `zero` from two `i32`s, so that one
/// generic test body can run against every variant and integer width.
pub(crate) fn rat<R>(zero: R, numerator: i32, denominator: i32) -> MathResult<R>
where
    R: Rational,
    R::Int: From<i32>,
{
    zero.construct(numerator.into(), denominator.into())
}

/// Macro for unit tests that must hold for both `RawRational` and
/// `SimplifiedRational`, over several integer widths.
///
/// The test function is called with the type's `ZERO`, from which the test
/// body derives the type it works with; see [`rat`]. Since the variants are
/// different types, the body is usually a generic `fn` declared inside the
/// closure.
#[macro_export]
macro_rules! rational_test {
    (
        $name:ident
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $($(#[$meta])*)?
            #[test]
            fn [<$name _raw_i32>]() {
                ($test_fn)(<$crate::RawRational<i32> as $crate::NumberConst>::ZERO);
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _raw_i64>]() {
                ($test_fn)(<$crate::RawRational<i64> as $crate::NumberConst>::ZERO);
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _raw_i128>]() {
                ($test_fn)(<$crate::RawRational<i128> as $crate::NumberConst>::ZERO);
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _simplified_i32>]() {
                ($test_fn)(<$crate::SimplifiedRational<i32> as $crate::NumberConst>::ZERO);
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _simplified_i64>]() {
                ($test_fn)(<$crate::SimplifiedRational<i64> as $crate::NumberConst>::ZERO);
            }

            $($(#[$meta])*)?
            #[test]
            fn [<$name _simplified_i128>]() {
                ($test_fn)(<$crate::SimplifiedRational<i128> as $crate::NumberConst>::ZERO);
            }
        }
    };
}
