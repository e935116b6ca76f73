use std::fmt;

use super::well_known_scrypto_custom_type;
use crate::internal_prelude::*;

/// An owning pointer to a node.
///
/// A well-formed payload owns each of its owned nodes exactly once - extraction and
/// uniqueness checking is the job of [`IndexedScryptoValue`][crate::IndexedScryptoValue].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Own(pub NodeId);

impl Own {
    pub fn as_node_id(&self) -> &NodeId {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Own {
    type Error = ParseOwnError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        NodeId::try_from(slice)
            .map(Self)
            .map_err(|_| ParseOwnError::InvalidLength(slice.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOwnError {
    #[error("Expected {expected} bytes for an own, got {0}", expected = NodeId::LENGTH)]
    InvalidLength(usize),
}

well_known_scrypto_custom_type!(
    Own,
    Own,
    NodeId::LENGTH,
    crate::custom_well_known_types::OWN_TYPE,
    crate::custom_well_known_types::own_type_data
);

impl fmt::Debug for Own {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Own({})", hex::encode(self.0 .0))
    }
}
