use crate::*;

macro_rules! codec_int {
    ($type:ty, $value_kind:ident, $well_known_type:ident, $size:expr) => {
        categorize_simple!($type, ValueKind::$value_kind);

        impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for $type {
            #[inline]
            fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
                encoder.write_value_kind(Self::value_kind())
            }

            #[inline]
            fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
                encoder.write_slice(&self.to_le_bytes())
            }
        }

        impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for $type {
            #[inline]
            fn decode_body_with_value_kind(
                decoder: &mut D,
                value_kind: ValueKind<X>,
            ) -> Result<Self, DecodeError> {
                decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
                let slice = decoder.read_slice($size)?;
                let mut bytes = [0u8; $size];
                bytes.copy_from_slice(slice);
                Ok(<$type>::from_le_bytes(bytes))
            }
        }

        impl<C: CustomTypeKind<RustTypeId>> Describe<C> for $type {
            fn type_id() -> RustTypeId {
                RustTypeId::WellKnown(basic_well_known_types::$well_known_type)
            }

            fn type_data() -> TypeData<C, RustTypeId> {
                TypeData::unnamed(TypeKind::$value_kind)
            }
        }
    };
}

codec_int!(i8, I8, I8_TYPE, 1);
codec_int!(i16, I16, I16_TYPE, 2);
codec_int!(i32, I32, I32_TYPE, 4);
codec_int!(i64, I64, I64_TYPE, 8);
codec_int!(i128, I128, I128_TYPE, 16);
codec_int!(u8, U8, U8_TYPE, 1);
codec_int!(u16, U16, U16_TYPE, 2);
codec_int!(u32, U32, U32_TYPE, 4);
codec_int!(u64, U64, U64_TYPE, 8);
codec_int!(u128, U128, U128_TYPE, 16);

// `isize` and `usize` are encoded as 64-bit integers, so payloads agree across platforms.

categorize_simple!(isize, ValueKind::I64);
categorize_simple!(usize, ValueKind::U64);

impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for isize {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        (*self as i64).encode_body(encoder)
    }
}

impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for isize {
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        i64::decode_body_with_value_kind(decoder, value_kind).map(|value| value as isize)
    }
}

impl<C: CustomTypeKind<RustTypeId>> Describe<C> for isize {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(basic_well_known_types::I64_TYPE)
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::I64)
    }
}

impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for usize {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        (*self as u64).encode_body(encoder)
    }
}

impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for usize {
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        u64::decode_body_with_value_kind(decoder, value_kind).map(|value| value as usize)
    }
}

impl<C: CustomTypeKind<RustTypeId>> Describe<C> for usize {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(basic_well_known_types::U64_TYPE)
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::U64)
    }
}
