use std::fmt;

use super::well_known_scrypto_custom_type;
use crate::internal_prelude::*;

/// A fixed-point decimal: a signed 192-bit integer of `10^-18` ("atto") units, carried
/// as its little-endian two's-complement bytes.
///
/// This crate treats the representation as opaque - it defines the wire codec and the
/// schema entry, not arithmetic.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(pub [u8; Self::LENGTH]);

impl Decimal {
    /// 192 bits.
    pub const LENGTH: usize = 24;

    pub const ZERO: Self = Self([0u8; Self::LENGTH]);

    /// `1.0`, ie `10^18` atto units.
    pub const ONE: Self = Self::from_attos(10u64.pow(18) as i128);

    /// Builds a decimal from a count of `10^-18` units, sign-extending into the full
    /// 192-bit representation.
    pub const fn from_attos(attos: i128) -> Self {
        let mut bytes = [if attos < 0 { 0xffu8 } else { 0x00u8 }; Self::LENGTH];
        let low = attos.to_le_bytes();
        let mut index = 0;
        while index < low.len() {
            bytes[index] = low[index];
            index += 1;
        }
        Self(bytes)
    }

    pub const fn from_le_bytes(bytes: [u8; Self::LENGTH]) -> Self {
        Self(bytes)
    }

    pub const fn to_le_bytes(&self) -> [u8; Self::LENGTH] {
        self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Decimal {
    type Error = ParseDecimalError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::LENGTH]>::try_from(slice)
            .map(Self)
            .map_err(|_| ParseDecimalError::InvalidLength(slice.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDecimalError {
    #[error("Expected {expected} bytes for a decimal, got {0}", expected = Decimal::LENGTH)]
    InvalidLength(usize),
}

well_known_scrypto_custom_type!(
    Decimal,
    Decimal,
    Decimal::LENGTH,
    crate::custom_well_known_types::DECIMAL_TYPE,
    crate::custom_well_known_types::decimal_type_data
);

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Decimal({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_attos_sign_extends() {
        let one = Decimal::ONE.to_le_bytes();
        assert_eq!(&one[0..8], &10u64.pow(18).to_le_bytes());
        assert_eq!(&one[8..], &[0u8; 16]);

        let minus_one_atto = Decimal::from_attos(-1).to_le_bytes();
        assert_eq!(minus_one_atto, [0xffu8; Decimal::LENGTH]);
    }
}
