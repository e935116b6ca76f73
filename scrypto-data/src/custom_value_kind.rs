use crate::internal_prelude::*;

pub const VALUE_KIND_REFERENCE: u8 = CUSTOM_VALUE_KIND_START + 0x00; // 0x80
pub const VALUE_KIND_OWN: u8 = CUSTOM_VALUE_KIND_START + 0x10; // 0x90
pub const VALUE_KIND_DECIMAL: u8 = CUSTOM_VALUE_KIND_START + 0x20; // 0xa0
pub const VALUE_KIND_NON_FUNGIBLE_LOCAL_ID: u8 = CUSTOM_VALUE_KIND_START + 0x40; // 0xc0
pub const VALUE_KIND_HASH: u8 = CUSTOM_VALUE_KIND_START + 0x50; // 0xd0
pub const VALUE_KIND_BLOB: u8 = CUSTOM_VALUE_KIND_START + 0x51; // 0xd1
pub const VALUE_KIND_EXPRESSION: u8 = CUSTOM_VALUE_KIND_START + 0x52; // 0xd2

/// The custom value kinds of the Scrypto dialect.
///
/// The byte values are spaced out so related kinds can be added later without
/// re-ordering the registry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScryptoCustomValueKind {
    Reference,
    Own,
    Decimal,
    NonFungibleLocalId,
    Hash,
    Blob,
    Expression,
}

impl CustomValueKind for ScryptoCustomValueKind {
    fn as_u8(&self) -> u8 {
        match self {
            Self::Reference => VALUE_KIND_REFERENCE,
            Self::Own => VALUE_KIND_OWN,
            Self::Decimal => VALUE_KIND_DECIMAL,
            Self::NonFungibleLocalId => VALUE_KIND_NON_FUNGIBLE_LOCAL_ID,
            Self::Hash => VALUE_KIND_HASH,
            Self::Blob => VALUE_KIND_BLOB,
            Self::Expression => VALUE_KIND_EXPRESSION,
        }
    }

    fn from_u8(id: u8) -> Option<Self> {
        match id {
            VALUE_KIND_REFERENCE => Some(Self::Reference),
            VALUE_KIND_OWN => Some(Self::Own),
            VALUE_KIND_DECIMAL => Some(Self::Decimal),
            VALUE_KIND_NON_FUNGIBLE_LOCAL_ID => Some(Self::NonFungibleLocalId),
            VALUE_KIND_HASH => Some(Self::Hash),
            VALUE_KIND_BLOB => Some(Self::Blob),
            VALUE_KIND_EXPRESSION => Some(Self::Expression),
            _ => None,
        }
    }
}

impl From<ScryptoCustomValueKind> for ValueKind<ScryptoCustomValueKind> {
    fn from(custom_value_kind: ScryptoCustomValueKind) -> Self {
        ValueKind::Custom(custom_value_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_value_kind_bytes_round_trip() {
        let all = [
            ScryptoCustomValueKind::Reference,
            ScryptoCustomValueKind::Own,
            ScryptoCustomValueKind::Decimal,
            ScryptoCustomValueKind::NonFungibleLocalId,
            ScryptoCustomValueKind::Hash,
            ScryptoCustomValueKind::Blob,
            ScryptoCustomValueKind::Expression,
        ];
        for kind in all {
            assert!(kind.as_u8() >= CUSTOM_VALUE_KIND_START);
            assert_eq!(ScryptoCustomValueKind::from_u8(kind.as_u8()), Some(kind));
        }
        assert_eq!(ScryptoCustomValueKind::from_u8(0x7f), None);
        assert_eq!(ScryptoCustomValueKind::from_u8(0x81), None);
    }
}
