use std::fmt;

use super::well_known_scrypto_custom_type;
use crate::internal_prelude::*;

/// A placeholder for an out-of-band byte blob, identified by the hash of its contents.
///
/// Blob references only appear in payloads which still await placeholder resolution -
/// see [`IndexedScryptoValue::replace_placeholders`][crate::IndexedScryptoValue].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManifestBlobRef(pub Hash);

impl ManifestBlobRef {
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for ManifestBlobRef {
    type Error = ParseManifestBlobRefError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Hash::try_from(slice)
            .map(Self)
            .map_err(|_| ParseManifestBlobRefError::InvalidLength(slice.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseManifestBlobRefError {
    #[error("Expected {expected} bytes for a blob reference, got {0}", expected = Hash::LENGTH)]
    InvalidLength(usize),
}

well_known_scrypto_custom_type!(
    ManifestBlobRef,
    Blob,
    Hash::LENGTH,
    crate::custom_well_known_types::BLOB_TYPE,
    crate::custom_well_known_types::blob_type_data
);

impl fmt::Debug for ManifestBlobRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Blob({})", self.0)
    }
}
