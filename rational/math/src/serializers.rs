use {
    crate::{RawRational, SignedInteger, SimplifiedRational},
    borsh::BorshDeserialize,
    serde::{
        Deserialize,
        de::{self, Error},
    },
    std::io,
};

/// The two fields of a rational as they appear on the wire, before any
/// validation.
#[derive(Deserialize)]
struct Fields<I> {
    numerator: I,
    denominator: I,
}

// ----------------------------------- serde -----------------------------------

impl<'de, I> de::Deserialize<'de> for RawRational<I>
where
    I: SignedInteger + de::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let Fields {
            numerator,
            denominator,
        } = Fields::deserialize(deserializer)?;

        // We assert the denominator is non-zero here with `RawRational::new`.
        RawRational::new(numerator, denominator).map_err(D::Error::custom)
    }
}

impl<'de, I> de::Deserialize<'de> for SimplifiedRational<I>
where
    I: SignedInteger + de::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let Fields {
            numerator,
            denominator,
        } = Fields::deserialize(deserializer)?;

        // Reduce again: the input may not be in lowest terms.
        SimplifiedRational::new(numerator, denominator).map_err(D::Error::custom)
    }
}

// ----------------------------------- borsh -----------------------------------

impl<I> BorshDeserialize for RawRational<I>
where
    I: SignedInteger + BorshDeserialize,
{
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let numerator = I::deserialize_reader(reader)?;
        let denominator = I::deserialize_reader(reader)?;

        RawRational::new(numerator, denominator).map_err(io::Error::other)
    }
}

impl<I> BorshDeserialize for SimplifiedRational<I>
where
    I: SignedInteger + BorshDeserialize,
{
    fn deserialize_reader<R>(reader: &mut R) -> io::Result<Self>
    where
        R: io::Read,
    {
        let numerator = I::deserialize_reader(reader)?;
        let denominator = I::deserialize_reader(reader)?;

        SimplifiedRational::new(numerator, denominator).map_err(io::Error::other)
    }
}

// ----------------------------------- tests -----------------------------------
