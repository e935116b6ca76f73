use crate::internal_prelude::*;

/// The custom leaf values of the Scrypto dialect - the `Y` in `Value<X, Y>`.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScryptoCustomValue {
    Reference(Reference),
    Own(Own),
    Decimal(Decimal),
    NonFungibleLocalId(NonFungibleLocalId),
    Hash(Hash),
    Blob(ManifestBlobRef),
    Expression(ManifestExpression),
}

impl CustomValue<ScryptoCustomValueKind> for ScryptoCustomValue {
    fn get_custom_value_kind(&self) -> ScryptoCustomValueKind {
        match self {
            Self::Reference(_) => ScryptoCustomValueKind::Reference,
            Self::Own(_) => ScryptoCustomValueKind::Own,
            Self::Decimal(_) => ScryptoCustomValueKind::Decimal,
            Self::NonFungibleLocalId(_) => ScryptoCustomValueKind::NonFungibleLocalId,
            Self::Hash(_) => ScryptoCustomValueKind::Hash,
            Self::Blob(_) => ScryptoCustomValueKind::Blob,
            Self::Expression(_) => ScryptoCustomValueKind::Expression,
        }
    }
}

impl<E: Encoder<ScryptoCustomValueKind>> Encode<ScryptoCustomValueKind, E>
    for ScryptoCustomValue
{
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(ValueKind::Custom(self.get_custom_value_kind()))
    }

    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        // The leaf types share the dialect's single body format, so delegate
        match self {
            Self::Reference(value) => value.encode_body(encoder),
            Self::Own(value) => value.encode_body(encoder),
            Self::Decimal(value) => value.encode_body(encoder),
            Self::NonFungibleLocalId(value) => value.encode_body(encoder),
            Self::Hash(value) => value.encode_body(encoder),
            Self::Blob(value) => value.encode_body(encoder),
            Self::Expression(value) => value.encode_body(encoder),
        }
    }
}

impl<D: Decoder<ScryptoCustomValueKind>> Decode<ScryptoCustomValueKind, D>
    for ScryptoCustomValue
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<ScryptoCustomValueKind>,
    ) -> Result<Self, DecodeError> {
        let ValueKind::Custom(custom_value_kind) = value_kind else {
            return Err(DecodeError::InvalidCustomValue);
        };
        match custom_value_kind {
            ScryptoCustomValueKind::Reference => {
                Reference::decode_body_with_value_kind(decoder, value_kind).map(Self::Reference)
            }
            ScryptoCustomValueKind::Own => {
                Own::decode_body_with_value_kind(decoder, value_kind).map(Self::Own)
            }
            ScryptoCustomValueKind::Decimal => {
                Decimal::decode_body_with_value_kind(decoder, value_kind).map(Self::Decimal)
            }
            ScryptoCustomValueKind::NonFungibleLocalId => {
                NonFungibleLocalId::decode_body_with_value_kind(decoder, value_kind)
                    .map(Self::NonFungibleLocalId)
            }
            ScryptoCustomValueKind::Hash => {
                Hash::decode_body_with_value_kind(decoder, value_kind).map(Self::Hash)
            }
            ScryptoCustomValueKind::Blob => {
                ManifestBlobRef::decode_body_with_value_kind(decoder, value_kind).map(Self::Blob)
            }
            ScryptoCustomValueKind::Expression => {
                ManifestExpression::decode_body_with_value_kind(decoder, value_kind)
                    .map(Self::Expression)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scrypto_decode, scrypto_encode, ScryptoValue};

    #[test]
    fn custom_values_round_trip_through_the_value_model() {
        let node_id = NodeId::new(EntityType::GlobalPackage, &[3u8; NodeId::UUID_LENGTH]);
        let values = vec![
            ScryptoCustomValue::Reference(Reference(node_id)),
            ScryptoCustomValue::Own(Own(node_id)),
            ScryptoCustomValue::Decimal(Decimal::ONE),
            ScryptoCustomValue::NonFungibleLocalId(NonFungibleLocalId::integer(7)),
            ScryptoCustomValue::Hash(Hash([9u8; Hash::LENGTH])),
            ScryptoCustomValue::Blob(ManifestBlobRef(Hash([1u8; Hash::LENGTH]))),
            ScryptoCustomValue::Expression(ManifestExpression::EntireWorktop),
        ];
        for custom_value in values {
            let value = ScryptoValue::Custom {
                value: custom_value.clone(),
            };
            let encoded = scrypto_encode(&value).unwrap();
            let decoded: ScryptoValue = scrypto_decode(&encoded).unwrap();
            assert_eq!(
                decoded,
                ScryptoValue::Custom {
                    value: custom_value
                }
            );
        }
    }

    #[test]
    fn reference_wire_format_is_kind_byte_then_node_id() {
        let node_id = NodeId::new(EntityType::GlobalPackage, &[5u8; NodeId::UUID_LENGTH]);
        let encoded = scrypto_encode(&Reference(node_id)).unwrap();
        assert_eq!(encoded[0], crate::SCRYPTO_SBOR_V1_PAYLOAD_PREFIX);
        assert_eq!(encoded[1], crate::VALUE_KIND_REFERENCE);
        assert_eq!(&encoded[2..], node_id.as_bytes());
    }

    #[test]
    fn truncated_custom_body_is_rejected() {
        let mut encoded = scrypto_encode(&Decimal::ZERO).unwrap();
        encoded.truncate(encoded.len() - 1);
        assert_eq!(
            scrypto_decode::<Decimal>(&encoded),
            Err(DecodeError::BufferUnderflow {
                required: Decimal::LENGTH,
                remaining: Decimal::LENGTH - 1
            })
        );
    }
}
