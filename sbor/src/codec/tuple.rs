use crate::*;

categorize_simple!((), ValueKind::Tuple);

impl<X: CustomValueKind, E: Encoder<X>> Encode<X, E> for () {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_size(0)
    }
}

impl<X: CustomValueKind, D: Decoder<X>> Decode<X, D> for () {
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        decoder.read_and_check_size(0)?;
        Ok(())
    }
}

impl<C: CustomTypeKind<RustTypeId>> Describe<C> for () {
    fn type_id() -> RustTypeId {
        RustTypeId::WellKnown(basic_well_known_types::UNIT_TYPE)
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::Tuple {
            field_types: vec![],
        })
    }
}

macro_rules! codec_tuple {
    ($n:expr, $($idx:tt $name:ident)+) => {
        impl<X: CustomValueKind, $($name),+> Categorize<X> for ($($name,)+) {
            #[inline]
            fn value_kind() -> ValueKind<X> {
                ValueKind::Tuple
            }
        }

        impl<X: CustomValueKind, E: Encoder<X>, $($name: Encode<X, E>),+> Encode<X, E> for ($($name,)+) {
            #[inline]
            fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
                encoder.write_value_kind(Self::value_kind())
            }

            #[inline]
            fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
                encoder.write_size($n)?;
                $(encoder.encode(&self.$idx)?;)+
                Ok(())
            }
        }

        impl<X: CustomValueKind, D: Decoder<X>, $($name: Decode<X, D>),+> Decode<X, D> for ($($name,)+) {
            #[inline]
            fn decode_body_with_value_kind(
                decoder: &mut D,
                value_kind: ValueKind<X>,
            ) -> Result<Self, DecodeError> {
                decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
                decoder.read_and_check_size($n)?;
                Ok(($(decoder.decode::<$name>()?,)+))
            }
        }

        impl<C: CustomTypeKind<RustTypeId>, $($name: Describe<C>),+> Describe<C> for ($($name,)+) {
            fn type_id() -> RustTypeId {
                RustTypeId::novel("Tuple", &[$($name::type_id(),)+])
            }

            fn type_data() -> TypeData<C, RustTypeId> {
                TypeData::unnamed(TypeKind::Tuple {
                    field_types: vec![$($name::type_id(),)+],
                })
            }

            fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
                $(aggregator.add_child_type_and_descendents::<$name>();)+
            }
        }
    };
}

codec_tuple!(1, 0 T0);
codec_tuple!(2, 0 T0 1 T1);
codec_tuple!(3, 0 T0 1 T1 2 T2);
codec_tuple!(4, 0 T0 1 T1 2 T2 3 T3);
codec_tuple!(5, 0 T0 1 T1 2 T2 3 T3 4 T4);
codec_tuple!(6, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5);
codec_tuple!(7, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6);
codec_tuple!(8, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7);
codec_tuple!(9, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8);
codec_tuple!(10, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9);
codec_tuple!(11, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10);
codec_tuple!(12, 0 T0 1 T1 2 T2 3 T3 4 T4 5 T5 6 T6 7 T7 8 T8 9 T9 10 T10 11 T11);
