mod conversions;
mod error;
mod gcd;
mod integer;
mod is_zero;
mod number_const;
mod rational;
mod raw;
mod serializers;
mod simplified;

#[cfg(test)]
mod test_utils;

pub use {
    error::*, gcd::*, integer::*, is_zero::*, number_const::*, rational::*, raw::*,
    simplified::*,
};
