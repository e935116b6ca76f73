use indexmap::IndexMap;
use sbor::*;
use scrypto_data::*;

#[derive(Debug, PartialEq, Eq, Sbor)]
#[sbor(
    custom_value_kind = "scrypto_data::ScryptoCustomValueKind",
    custom_type_kind = "scrypto_data::ScryptoCustomTypeKind"
)]
struct ResourceState {
    manager: Reference,
    vault: Own,
    total_supply: Decimal,
    tracked_id: NonFungibleLocalId,
}

fn example_state() -> ResourceState {
    ResourceState {
        manager: Reference(NodeId::new(
            EntityType::GlobalFungibleResourceManager,
            &[1u8; NodeId::UUID_LENGTH],
        )),
        vault: Own(NodeId::new(
            EntityType::InternalFungibleVault,
            &[2u8; NodeId::UUID_LENGTH],
        )),
        total_supply: Decimal::ONE,
        tracked_id: NonFungibleLocalId::integer(3),
    }
}

#[test]
fn custom_leaves_round_trip_through_a_derived_struct() {
    let state = example_state();
    let encoded = scrypto_encode(&state).unwrap();
    assert_eq!(encoded[0], 0x5c);
    assert_eq!(scrypto_decode::<ResourceState>(&encoded), Ok(state));
}

#[test]
fn integer_local_id_wire_format_is_big_endian() {
    let encoded = scrypto_encode(&NonFungibleLocalId::integer(1)).unwrap();
    assert_eq!(
        encoded,
        vec![0x5c, 0xc0, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]
    );
}

#[test]
fn payloads_validate_against_a_derived_schema() {
    let (type_id, schema) = generate_scrypto_schema_from_single_type::<ResourceState>();
    schema.validate().unwrap();
    let payload = scrypto_encode(&example_state()).unwrap();
    validate_payload_against_schema::<ScryptoCustomExtension, ()>(
        &payload,
        &schema,
        type_id,
        &(),
        SCRYPTO_SBOR_V1_MAX_DEPTH,
    )
    .unwrap();
}

#[test]
fn kind_mismatches_report_the_field_path() {
    let (type_id, schema) = generate_scrypto_schema_from_single_type::<ResourceState>();
    // The vault field holds a reference instead of an own
    let reference = Reference(NodeId::new(
        EntityType::GlobalPackage,
        &[9u8; NodeId::UUID_LENGTH],
    ));
    let payload = scrypto_encode(&(reference, reference, Decimal::ZERO, 1u8)).unwrap();
    let error = validate_payload_against_schema::<ScryptoCustomExtension, ()>(
        &payload,
        &schema,
        type_id,
        &(),
        SCRYPTO_SBOR_V1_MAX_DEPTH,
    )
    .unwrap_err();
    assert_eq!(
        error.error,
        PayloadValidationError::ValueKindMismatchWithTypeKind {
            expected: "Custom",
            actual: 0x80,
        }
    );
    assert_eq!(error.location.path, "ResourceState.[1|vault]");
}

#[test]
fn manifest_placeholders_resolve_to_concrete_values() {
    let blob_hash = Hash([5u8; Hash::LENGTH]);
    let payload = scrypto_encode(&(
        ManifestBlobRef(blob_hash),
        ManifestExpression::EntireWorktop,
    ))
    .unwrap();

    let worktop = [Own(NodeId::new(
        EntityType::InternalFungibleVault,
        &[6u8; NodeId::UUID_LENGTH],
    ))];
    let mut blobs = IndexMap::new();
    blobs.insert(blob_hash, vec![0xDE, 0xAD]);

    let replaced = replace_manifest_values(
        &payload,
        &PlaceholderReplacements {
            blobs: &blobs,
            entire_worktop: &worktop,
            entire_auth_zone: &[],
        },
    )
    .unwrap();

    assert_eq!(
        scrypto_decode::<(Vec<u8>, Vec<Own>)>(&replaced),
        Ok((vec![0xDE, 0xAD], worktop.to_vec()))
    );
    assert_eq!(read_owned_nodes(&replaced), Ok(vec![worktop[0].0]));
}

#[test]
fn decimal_body_is_little_endian_twos_complement() {
    let encoded = scrypto_encode(&Decimal::from_attos(-1)).unwrap();
    assert_eq!(encoded[0], 0x5c);
    assert_eq!(encoded[1], 0xa0);
    assert_eq!(&encoded[2..], [0xffu8; Decimal::LENGTH]);
}
