use crate::internal_prelude::*;

/// The payload prefix byte of Scrypto SBOR v1 payloads, one above the basic prefix.
pub const SCRYPTO_SBOR_V1_PAYLOAD_PREFIX: u8 = 0x5c;

/// The depth limit used by the Scrypto encoders/decoders.
pub const SCRYPTO_SBOR_V1_MAX_DEPTH: usize = 64;

pub type ScryptoEncoder<'a> = VecEncoder<'a, ScryptoCustomValueKind>;
pub type ScryptoDecoder<'de> = VecDecoder<'de, ScryptoCustomValueKind>;
pub type ScryptoValueKind = ValueKind<ScryptoCustomValueKind>;
pub type ScryptoValue = Value<ScryptoCustomValueKind, ScryptoCustomValue>;
pub type ScryptoSchema = Schema<ScryptoCustomSchema>;
pub type ScryptoTypeData = TypeData<ScryptoCustomTypeKind, LocalTypeId>;

/// Encodes a rust representation to a Scrypto payload, including the payload prefix.
pub fn scrypto_encode<T: ScryptoEncode + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(512);
    let encoder = ScryptoEncoder::new(&mut buf, SCRYPTO_SBOR_V1_MAX_DEPTH);
    encoder.encode_payload(value, SCRYPTO_SBOR_V1_PAYLOAD_PREFIX)?;
    Ok(buf)
}

/// Decodes a full Scrypto payload, checking the payload prefix and that the whole
/// payload is consumed.
pub fn scrypto_decode<T: ScryptoDecode>(buf: &[u8]) -> Result<T, DecodeError> {
    ScryptoDecoder::new(buf, SCRYPTO_SBOR_V1_MAX_DEPTH).decode_payload(SCRYPTO_SBOR_V1_PAYLOAD_PREFIX)
}

/// As [`scrypto_decode`], but tolerating unread bytes after the decoded value.
pub fn scrypto_decode_permissive<T: ScryptoDecode>(buf: &[u8]) -> Result<T, DecodeError> {
    ScryptoDecoder::new(buf, SCRYPTO_SBOR_V1_MAX_DEPTH)
        .decode_payload_permissive(SCRYPTO_SBOR_V1_PAYLOAD_PREFIX)
}

/// Generates the schema for a single Scrypto type, alongside its local type id.
pub fn generate_scrypto_schema_from_single_type<T: ScryptoDescribe>(
) -> (LocalTypeId, ScryptoSchema) {
    generate_full_schema_from_single_type::<T, ScryptoCustomSchema>()
}

/// Marker traits for the Scrypto dialect, blanket-implemented for everything which
/// implements the underlying generic traits.
pub trait ScryptoCategorize: Categorize<ScryptoCustomValueKind> {}
impl<T: Categorize<ScryptoCustomValueKind> + ?Sized> ScryptoCategorize for T {}

pub trait ScryptoEncode: for<'a> Encode<ScryptoCustomValueKind, ScryptoEncoder<'a>> {}
impl<T: for<'a> Encode<ScryptoCustomValueKind, ScryptoEncoder<'a>> + ?Sized> ScryptoEncode for T {}

pub trait ScryptoDecode: for<'de> Decode<ScryptoCustomValueKind, ScryptoDecoder<'de>> {}
impl<T: for<'de> Decode<ScryptoCustomValueKind, ScryptoDecoder<'de>>> ScryptoDecode for T {}

pub trait ScryptoDescribe: Describe<ScryptoCustomTypeKind> {}
impl<T: Describe<ScryptoCustomTypeKind>> ScryptoDescribe for T {}

pub trait ScryptoSbor: ScryptoCategorize + ScryptoDecode + ScryptoEncode + ScryptoDescribe {}
impl<T: ScryptoCategorize + ScryptoDecode + ScryptoEncode + ScryptoDescribe> ScryptoSbor for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrypto_payloads_use_the_scrypto_prefix() {
        let encoded = scrypto_encode(&(7u8, "hi")).unwrap();
        assert_eq!(
            encoded,
            vec![0x5c, 0x21, 0x02, 0x07, 0x07, 0x0c, 0x02, 0x68, 0x69]
        );
        // A basic payload is rejected by prefix
        assert_eq!(
            scrypto_decode::<(u8, String)>(&[vec![0x5b], encoded[1..].to_vec()].concat()),
            Err(DecodeError::UnexpectedPayloadPrefix {
                expected: 0x5c,
                actual: 0x5b
            })
        );
    }

    #[test]
    fn permissive_decoding_tolerates_trailing_bytes() {
        let mut payload = scrypto_encode(&42u8).unwrap();
        payload.extend_from_slice(&[0, 0]);
        assert_eq!(
            scrypto_decode::<u8>(&payload),
            Err(DecodeError::ExtraTrailingBytes(2))
        );
        assert_eq!(scrypto_decode_permissive::<u8>(&payload), Ok(42));
    }

    #[test]
    fn derived_types_can_carry_custom_leaves() {
        #[derive(Debug, PartialEq, Eq, Sbor)]
        #[sbor(
            custom_value_kind = "crate::ScryptoCustomValueKind",
            custom_type_kind = "crate::ScryptoCustomTypeKind"
        )]
        struct VaultHeader {
            resource: Reference,
            amount: Decimal,
        }

        let header = VaultHeader {
            resource: Reference(NodeId::new(
                EntityType::GlobalFungibleResourceManager,
                &[8u8; NodeId::UUID_LENGTH],
            )),
            amount: Decimal::ONE,
        };
        let encoded = scrypto_encode(&header).unwrap();
        assert_eq!(scrypto_decode::<VaultHeader>(&encoded), Ok(header));
    }

    #[test]
    fn scrypto_schema_includes_custom_well_known_types() {
        #[derive(Sbor)]
        #[sbor(
            custom_value_kind = "crate::ScryptoCustomValueKind",
            custom_type_kind = "crate::ScryptoCustomTypeKind"
        )]
        struct VaultHeader {
            resource: Reference,
            amount: Decimal,
        }

        let (type_id, schema) = generate_scrypto_schema_from_single_type::<VaultHeader>();
        schema.validate().unwrap();
        let LocalTypeId::SchemaLocalIndex(index) = type_id else {
            panic!("Expected a schema-local type");
        };
        assert_eq!(
            schema.type_kinds[index],
            TypeKind::Tuple {
                field_types: vec![
                    LocalTypeId::WellKnown(REFERENCE_TYPE),
                    LocalTypeId::WellKnown(DECIMAL_TYPE),
                ]
            }
        );
    }
}
