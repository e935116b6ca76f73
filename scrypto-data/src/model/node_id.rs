use std::fmt;

use crate::internal_prelude::*;

/// The unique identifier of a node, as stored in [`Reference`] and [`Own`] values.
///
/// The leading byte is the node's [`EntityType`], which places the node in either the
/// global or the internal address space. The remaining bytes individuate the node.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub [u8; Self::LENGTH]);

impl NodeId {
    pub const LENGTH: usize = 30;
    pub const ENTITY_ID_LENGTH: usize = 1;
    pub const UUID_LENGTH: usize = Self::LENGTH - Self::ENTITY_ID_LENGTH;

    pub const fn new(entity_type: EntityType, suffix: &[u8; Self::UUID_LENGTH]) -> Self {
        let mut bytes = [0u8; Self::LENGTH];
        bytes[0] = entity_type as u8;
        let mut index = 0;
        while index < Self::UUID_LENGTH {
            bytes[1 + index] = suffix[index];
            index += 1;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::from_repr(self.0[0])
    }

    pub fn is_global(&self) -> bool {
        self.entity_type()
            .is_some_and(|entity_type| entity_type.is_global())
    }

    pub fn is_internal(&self) -> bool {
        self.entity_type()
            .is_some_and(|entity_type| entity_type.is_internal())
    }

    pub fn is_global_package(&self) -> bool {
        self.entity_type() == Some(EntityType::GlobalPackage)
    }

    pub fn is_global_component(&self) -> bool {
        self.entity_type() == Some(EntityType::GlobalGenericComponent)
    }

    pub fn is_global_resource_manager(&self) -> bool {
        matches!(
            self.entity_type(),
            Some(EntityType::GlobalFungibleResourceManager)
                | Some(EntityType::GlobalNonFungibleResourceManager)
        )
    }

    pub fn is_internal_vault(&self) -> bool {
        matches!(
            self.entity_type(),
            Some(EntityType::InternalFungibleVault) | Some(EntityType::InternalNonFungibleVault)
        )
    }

    pub fn is_internal_kv_store(&self) -> bool {
        self.entity_type() == Some(EntityType::InternalKeyValueStore)
    }
}

impl From<[u8; NodeId::LENGTH]> for NodeId {
    fn from(bytes: [u8; NodeId::LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for NodeId {
    type Error = ParseNodeIdError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        <[u8; Self::LENGTH]>::try_from(slice)
            .map(Self)
            .map_err(|_| ParseNodeIdError::InvalidLength(slice.len()))
    }
}

impl AsRef<[u8]> for NodeId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeId({})", hex::encode(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNodeIdError {
    #[error("Expected {expected} bytes for a node id, got {0}", expected = NodeId::LENGTH)]
    InvalidLength(usize),
}

/// The space a node lives in, recorded in the first byte of its [`NodeId`].
///
/// Bytes with the top bit clear are global entities; bytes with the top bit set are
/// internal entities, only addressable from their owning node.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityType {
    GlobalPackage = 0x10,
    GlobalGenericComponent = 0x20,
    GlobalAccount = 0x28,
    GlobalFungibleResourceManager = 0x30,
    GlobalNonFungibleResourceManager = 0x38,
    InternalGenericComponent = 0x80,
    InternalKeyValueStore = 0x90,
    InternalFungibleVault = 0xa0,
    InternalNonFungibleVault = 0xa8,
}

impl EntityType {
    pub fn from_repr(byte: u8) -> Option<Self> {
        match byte {
            0x10 => Some(Self::GlobalPackage),
            0x20 => Some(Self::GlobalGenericComponent),
            0x28 => Some(Self::GlobalAccount),
            0x30 => Some(Self::GlobalFungibleResourceManager),
            0x38 => Some(Self::GlobalNonFungibleResourceManager),
            0x80 => Some(Self::InternalGenericComponent),
            0x90 => Some(Self::InternalKeyValueStore),
            0xa0 => Some(Self::InternalFungibleVault),
            0xa8 => Some(Self::InternalNonFungibleVault),
            _ => None,
        }
    }

    pub const fn is_global(&self) -> bool {
        (*self as u8) & 0x80 == 0
    }

    pub const fn is_internal(&self) -> bool {
        !self.is_global()
    }
}
