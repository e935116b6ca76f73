use std::fmt::Debug;

use sbor::*;

fn check_round_trip<T>(value: &T)
where
    T: BasicEncode + BasicDecode + Eq + Debug,
{
    assert_eq!(
        &basic_decode::<T>(&basic_encode(value).unwrap()).unwrap(),
        value
    );
}

#[derive(Debug, PartialEq, Eq, Sbor)]
struct Unit;

#[derive(Debug, PartialEq, Eq, Sbor)]
struct Simple {
    number: u32,
    string: String,
    vector: Vec<u16>,
}

#[derive(Debug, PartialEq, Eq, Sbor)]
struct WithSkipped {
    kept: u32,
    #[sbor(skip)]
    ignored: String,
}

#[derive(Debug, PartialEq, Eq, Sbor)]
#[sbor(transparent)]
struct Wrapper(u16);

#[derive(Debug, PartialEq, Eq, Sbor)]
enum Shape {
    Dot,
    Line(u32),
    Rect { width: u8, height: u8 },
}

#[derive(Debug, PartialEq, Eq, Sbor)]
struct Pair<A, B> {
    first: A,
    second: B,
}

#[test]
fn derived_structs_round_trip() {
    check_round_trip(&Unit);
    check_round_trip(&Simple {
        number: 12345,
        string: "hello".to_string(),
        vector: vec![1, 2],
    });
    check_round_trip(&Pair {
        first: 5u8,
        second: Some("x".to_string()),
    });
}

#[test]
fn derived_enums_round_trip() {
    check_round_trip(&Shape::Dot);
    check_round_trip(&Shape::Line(99));
    check_round_trip(&Shape::Rect {
        width: 2,
        height: 3,
    });
}

#[test]
fn enum_discriminators_follow_declaration_order() {
    assert_eq!(
        basic_encode(&Shape::Rect {
            width: 2,
            height: 3
        })
        .unwrap(),
        vec![0x5b, 0x22, 0x02, 0x02, 0x07, 0x02, 0x07, 0x03]
    );
    assert_eq!(basic_encode(&Shape::Dot).unwrap(), vec![0x5b, 0x22, 0x00, 0x00]);
}

#[test]
fn skipped_fields_are_left_out_and_defaulted() {
    let encoded = basic_encode(&WithSkipped {
        kept: 7,
        ignored: "not written".to_string(),
    })
    .unwrap();
    // A single-field tuple - the skipped field takes no space
    assert_eq!(encoded, vec![0x5b, 0x21, 0x01, 0x09, 0x07, 0x00, 0x00, 0x00]);
    assert_eq!(
        basic_decode::<WithSkipped>(&encoded),
        Ok(WithSkipped {
            kept: 7,
            ignored: String::new(),
        })
    );
}

#[test]
fn transparent_structs_encode_as_their_inner_field() {
    assert_eq!(
        basic_encode(&Wrapper(513)).unwrap(),
        basic_encode(&513u16).unwrap()
    );
    assert_eq!(basic_decode::<Wrapper>(&basic_encode(&513u16).unwrap()), Ok(Wrapper(513)));
}

#[test]
fn derived_types_describe_themselves() {
    let (type_id, schema) = generate_basic_schema_from_single_type::<Simple>();
    schema.validate().unwrap();
    let type_data = schema.resolve_type_data(type_id).unwrap();
    let TypeKind::Tuple { field_types } = &type_data.kind else {
        panic!("Expected a tuple type kind");
    };
    assert_eq!(
        field_types[0],
        LocalTypeId::WellKnown(basic_well_known_types::U32_TYPE)
    );
    assert_eq!(
        field_types[1],
        LocalTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
    );
    // `Vec<u16>` is not well-known, so it takes a schema-local slot
    assert!(matches!(field_types[2], LocalTypeId::SchemaLocalIndex(_)));
    assert_eq!(
        type_data.metadata.get_field_names().unwrap(),
        ["number", "string", "vector"]
    );
}

#[test]
fn identically_shaped_types_get_distinct_type_ids() {
    #[derive(Sbor)]
    struct A {
        value: u8,
    }
    #[derive(Sbor)]
    struct B {
        value: u8,
    }
    assert_ne!(
        <A as Describe<NoCustomTypeKind>>::type_id(),
        <B as Describe<NoCustomTypeKind>>::type_id()
    );
}
