use crate::internal_prelude::*;

/// The Scrypto SBOR dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScryptoCustomExtension {}

impl CustomExtension for ScryptoCustomExtension {
    const PAYLOAD_PREFIX: u8 = SCRYPTO_SBOR_V1_PAYLOAD_PREFIX;
    const DEFAULT_DEPTH_LIMIT: usize = SCRYPTO_SBOR_V1_MAX_DEPTH;

    type CustomValueKind = ScryptoCustomValueKind;
    type CustomSchema = ScryptoCustomSchema;
    type CustomValue = ScryptoCustomValue;

    fn custom_value_kind_matches_type_kind(
        custom_value_kind: Self::CustomValueKind,
        type_kind: &TypeKind<ScryptoCustomTypeKind, LocalTypeId>,
    ) -> bool {
        let TypeKind::Custom(custom_type_kind) = type_kind else {
            return false;
        };
        match custom_type_kind {
            ScryptoCustomTypeKind::Reference => {
                custom_value_kind == ScryptoCustomValueKind::Reference
            }
            ScryptoCustomTypeKind::Own => custom_value_kind == ScryptoCustomValueKind::Own,
            ScryptoCustomTypeKind::Decimal => custom_value_kind == ScryptoCustomValueKind::Decimal,
            ScryptoCustomTypeKind::NonFungibleLocalId => {
                custom_value_kind == ScryptoCustomValueKind::NonFungibleLocalId
            }
            ScryptoCustomTypeKind::Hash => custom_value_kind == ScryptoCustomValueKind::Hash,
            ScryptoCustomTypeKind::Blob => custom_value_kind == ScryptoCustomValueKind::Blob,
            ScryptoCustomTypeKind::Expression => {
                custom_value_kind == ScryptoCustomValueKind::Expression
            }
        }
    }
}
