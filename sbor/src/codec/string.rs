use std::borrow::Cow;

use crate::*;

categorize_simple!(str, ValueKind::String);
categorize_simple!(String, ValueKind::String);

impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for str {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_size(self.len())?;
        encoder.write_slice(self.as_bytes())
    }
}

impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for String {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.as_str().encode_body(encoder)
    }
}

impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for String {
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let len = decoder.read_size()?;
        let slice = decoder.read_slice(len)?;
        String::from_utf8(slice.to_vec()).map_err(|_| DecodeError::InvalidUtf8)
    }
}

impl<'a, X: CustomValueKind> Categorize<X> for Cow<'a, str> {
    #[inline]
    fn value_kind() -> ValueKind<X> {
        ValueKind::String
    }
}

impl<'a, X: CustomValueKind, E: Encoder<X>> Encode<X, E> for Cow<'a, str> {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.as_ref().encode_body(encoder)
    }
}

impl<'a, X: CustomValueKind, D: Decoder<X>> Decode<X, D> for Cow<'a, str> {
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        Ok(Cow::Owned(String::decode_body_with_value_kind(
            decoder, value_kind,
        )?))
    }
}

macro_rules! describe_string {
    ($type:ty) => {
        impl<C: CustomTypeKind<RustTypeId>> Describe<C> for $type {
            fn type_id() -> RustTypeId {
                RustTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
            }

            fn type_data() -> TypeData<C, RustTypeId> {
                TypeData::unnamed(TypeKind::String)
            }
        }
    };
}

describe_string!(str);
describe_string!(String);

impl<'a, C: CustomTypeKind<RustTypeId>> Describe<C> for Cow<'a, str> {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(basic_well_known_types::STRING_TYPE)
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::String)
    }
}
