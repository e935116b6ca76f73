use std::fmt;

use super::well_known_scrypto_custom_type;
use crate::internal_prelude::*;

/// A non-owning pointer to a node.
///
/// References do not confer ownership: the same node may be referenced from many
/// payloads. Contrast [`Own`][crate::Own].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference(pub NodeId);

impl Reference {
    pub fn as_node_id(&self) -> &NodeId {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Reference {
    type Error = ParseReferenceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        NodeId::try_from(slice)
            .map(Self)
            .map_err(|_| ParseReferenceError::InvalidLength(slice.len()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseReferenceError {
    #[error("Expected {expected} bytes for a reference, got {0}", expected = NodeId::LENGTH)]
    InvalidLength(usize),
}

well_known_scrypto_custom_type!(
    Reference,
    Reference,
    NodeId::LENGTH,
    crate::custom_well_known_types::REFERENCE_TYPE,
    crate::custom_well_known_types::reference_type_data
);

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reference({})", hex::encode(self.0 .0))
    }
}
