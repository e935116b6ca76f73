use indexmap::indexmap;

use crate::*;

categorize_generic!(Result<T, E2>, <T, E2>, ValueKind::Enum);

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E>, E2: Encode<X, E>> Encode<X, E>
    for Result<T, E2>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        match self {
            Ok(value) => {
                encoder.write_discriminator(RESULT_VARIANT_OK)?;
                encoder.write_size(1)?;
                encoder.encode(value)?;
            }
            Err(error) => {
                encoder.write_discriminator(RESULT_VARIANT_ERR)?;
                encoder.write_size(1)?;
                encoder.encode(error)?;
            }
        }
        Ok(())
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D>, E2: Decode<X, D>> Decode<X, D>
    for Result<T, E2>
{
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let discriminator = decoder.read_discriminator()?;

        match discriminator {
            RESULT_VARIANT_OK => {
                decoder.read_and_check_size(1)?;
                Ok(Ok(decoder.decode()?))
            }
            RESULT_VARIANT_ERR => {
                decoder.read_and_check_size(1)?;
                Ok(Err(decoder.decode()?))
            }
            _ => Err(DecodeError::UnknownDiscriminator(discriminator)),
        }
    }
}

impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>, E2: Describe<C>> Describe<C> for Result<T, E2> {
    fn type_id() -> RustTypeId {
        RustTypeId::novel("Result", &[T::type_id(), E2::type_id()])
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::enum_variants(
            "Result",
            indexmap![
                RESULT_VARIANT_OK => TypeData::struct_with_unnamed_fields("Ok", vec![T::type_id()]),
                RESULT_VARIANT_ERR => TypeData::struct_with_unnamed_fields("Err", vec![E2::type_id()]),
            ],
        )
    }

    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        aggregator.add_child_type_and_descendents::<T>();
        aggregator.add_child_type_and_descendents::<E2>();
    }
}
