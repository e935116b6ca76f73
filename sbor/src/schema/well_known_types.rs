use crate::*;

pub mod basic_well_known_types {
    use super::*;

    // The ids of the well known base types deliberately agree with their value kind bytes.
    pub const BOOL_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_BOOL);
    pub const I8_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_I8);
    pub const I16_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_I16);
    pub const I32_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_I32);
    pub const I64_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_I64);
    pub const I128_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_I128);
    pub const U8_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_U8);
    pub const U16_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_U16);
    pub const U32_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_U32);
    pub const U64_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_U64);
    pub const U128_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_U128);
    pub const STRING_TYPE: WellKnownTypeId = WellKnownTypeId::of(VALUE_KIND_STRING);

    // Composite well known types live above the value kind range.
    pub const ANY_TYPE: WellKnownTypeId = WellKnownTypeId::of(0x40);
    pub const BYTES_TYPE: WellKnownTypeId = WellKnownTypeId::of(0x41); // `Vec<u8>`
    pub const UNIT_TYPE: WellKnownTypeId = WellKnownTypeId::of(0x42); // `()` - the empty tuple

    /// Resolves the type data of the base well known types.
    ///
    /// Custom schemas layer their own well known types on top of these.
    pub fn resolve<C: CustomTypeKind<LocalTypeId>>(
        well_known_id: WellKnownTypeId,
    ) -> Option<TypeData<C, LocalTypeId>> {
        let type_data = match well_known_id {
            BOOL_TYPE => TypeData::unnamed(TypeKind::Bool),
            I8_TYPE => TypeData::unnamed(TypeKind::I8),
            I16_TYPE => TypeData::unnamed(TypeKind::I16),
            I32_TYPE => TypeData::unnamed(TypeKind::I32),
            I64_TYPE => TypeData::unnamed(TypeKind::I64),
            I128_TYPE => TypeData::unnamed(TypeKind::I128),
            U8_TYPE => TypeData::unnamed(TypeKind::U8),
            U16_TYPE => TypeData::unnamed(TypeKind::U16),
            U32_TYPE => TypeData::unnamed(TypeKind::U32),
            U64_TYPE => TypeData::unnamed(TypeKind::U64),
            U128_TYPE => TypeData::unnamed(TypeKind::U128),
            STRING_TYPE => TypeData::unnamed(TypeKind::String),
            ANY_TYPE => TypeData::unnamed(TypeKind::Any),
            BYTES_TYPE => TypeData::no_child_names(
                TypeKind::Array {
                    element_type: LocalTypeId::WellKnown(U8_TYPE),
                },
                "Bytes",
            ),
            UNIT_TYPE => TypeData::unnamed(TypeKind::Tuple {
                field_types: vec![],
            }),
            _ => return None,
        };
        Some(type_data)
    }
}
