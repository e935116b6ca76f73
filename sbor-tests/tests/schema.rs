use sbor::*;

#[derive(Debug, PartialEq, Eq, Sbor)]
struct TwoLists {
    first: Vec<String>,
    second: Vec<String>,
}

#[derive(Debug, PartialEq, Eq, Sbor)]
struct TreeNode {
    value: u32,
    children: Vec<TreeNode>,
}

#[test]
fn well_known_types_take_no_schema_slots() {
    let (type_id, schema) = generate_basic_schema_from_single_type::<u32>();
    assert_eq!(
        type_id,
        LocalTypeId::WellKnown(basic_well_known_types::U32_TYPE)
    );
    assert_eq!(schema.local_type_count(), 0);

    let (type_id, schema) = generate_basic_schema_from_single_type::<()>();
    assert_eq!(
        type_id,
        LocalTypeId::WellKnown(basic_well_known_types::UNIT_TYPE)
    );
    assert_eq!(schema.local_type_count(), 0);
}

#[test]
fn repeated_types_are_hash_consed() {
    let (type_id, schema) = generate_basic_schema_from_single_type::<TwoLists>();
    schema.validate().unwrap();
    // TwoLists plus a single shared Vec<String>
    assert_eq!(schema.local_type_count(), 2);
    let type_kind = schema.resolve_type_kind(type_id).unwrap();
    let TypeKind::Tuple { field_types } = type_kind else {
        panic!("Expected a tuple type kind");
    };
    assert_eq!(field_types[0], field_types[1]);
}

#[test]
fn recursive_types_produce_finite_schemas() {
    let (type_id, schema) = generate_basic_schema_from_single_type::<TreeNode>();
    schema.validate().unwrap();
    // TreeNode and Vec<TreeNode>
    assert_eq!(schema.local_type_count(), 2);

    let TypeKind::Tuple { field_types } = schema.resolve_type_kind(type_id).unwrap() else {
        panic!("Expected a tuple type kind");
    };
    let TypeKind::Array { element_type } = schema.resolve_type_kind(field_types[1]).unwrap()
    else {
        panic!("Expected an array type kind");
    };
    assert_eq!(element_type, type_id);
}

#[test]
fn schemas_round_trip_through_sbor() {
    let (_, schema) = generate_basic_schema_from_single_type::<TreeNode>();
    let encoded = basic_encode(&schema).unwrap();
    assert_eq!(basic_decode::<BasicSchema>(&encoded), Ok(schema));
}

#[test]
fn inconsistent_schemas_fail_validation() {
    // A type kind without matching metadata or validation entries
    let schema = BasicSchema {
        type_kinds: vec![TypeKind::Bool],
        type_metadata: vec![],
        type_validations: vec![],
    };
    assert!(schema.validate().is_err());

    // A local link pointing past the end of the schema
    let schema = BasicSchema {
        type_kinds: vec![TypeKind::Array {
            element_type: LocalTypeId::SchemaLocalIndex(7),
        }],
        type_metadata: vec![TypeMetadata::unnamed()],
        type_validations: vec![TypeValidation::None],
    };
    assert!(schema.validate().is_err());
}
