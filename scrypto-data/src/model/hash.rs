use std::fmt;
use std::str::FromStr;

use super::well_known_scrypto_custom_type;
use crate::internal_prelude::*;

/// A 32-byte digest.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash(pub [u8; Self::LENGTH]);

impl Hash {
    pub const LENGTH: usize = 32;

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl From<[u8; Hash::LENGTH]> for Hash {
    fn from(bytes: [u8; Hash::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = ParseHashError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::LENGTH]>::try_from(slice)
            .map(Self)
            .map_err(|_| ParseHashError::InvalidLength(slice.len()))
    }
}

impl FromStr for Hash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ParseHashError::InvalidHex(s.to_string()))?;
        Self::try_from(bytes.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHashError {
    #[error("Expected {expected} bytes for a hash, got {0}", expected = Hash::LENGTH)]
    InvalidLength(usize),

    #[error("Not a valid hex string: {0}")]
    InvalidHex(String),
}

well_known_scrypto_custom_type!(
    Hash,
    Hash,
    Hash::LENGTH,
    crate::custom_well_known_types::HASH_TYPE,
    crate::custom_well_known_types::hash_type_data
);

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_hex_round_trip() {
        let hex_string = "b177968c9c68877dc8d33e25759183c556379daa45a4d78a2b91c70133c873ca";
        let hash = Hash::from_str(hex_string).unwrap();
        assert_eq!(hash.to_string(), hex_string);
        assert_eq!(
            Hash::from_str("b177"),
            Err(ParseHashError::InvalidLength(2))
        );
        assert!(matches!(
            Hash::from_str("not hex"),
            Err(ParseHashError::InvalidHex(_))
        ));
    }
}
