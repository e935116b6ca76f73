use crate::*;

categorize_generic!([T], <T>, ValueKind::Array);
categorize_generic!(Vec<T>, <T>, ValueKind::Array);

impl<X: CustomValueKind, T, const N: usize> Categorize<X> for [T; N] {
    #[inline]
    fn value_kind() -> ValueKind<X> {
        ValueKind::Array
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X>> Encode<X, E> for [T] {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(T::value_kind())?;
        encoder.write_size(self.len())?;
        if T::value_kind() == ValueKind::U8 || T::value_kind() == ValueKind::I8 {
            // An element with kind U8/I8 is a single byte, so we can copy the whole slice
            let ptr = self.as_ptr() as *const u8;
            let slice = unsafe { std::slice::from_raw_parts(ptr, self.len()) };
            encoder.write_slice(slice)?;
        } else {
            for v in self {
                encoder.encode_deeper_body(v)?;
            }
        }
        Ok(())
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X>> Encode<X, E> for Vec<T> {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.as_slice().encode_body(encoder)
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X>, const N: usize>
    Encode<X, E> for [T; N]
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.as_slice().encode_body(encoder)
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D> + Categorize<X>> Decode<X, D> for Vec<T> {
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let element_value_kind = decoder.read_and_check_value_kind(T::value_kind())?;
        let len = decoder.read_size()?;

        if element_value_kind == ValueKind::U8 || element_value_kind == ValueKind::I8 {
            let slice = decoder.read_slice(len)?; // length is checked here
            let mut result = Vec::<T>::with_capacity(len);
            unsafe {
                std::ptr::copy(slice.as_ptr(), result.as_mut_ptr() as *mut u8, slice.len());
                result.set_len(slice.len());
            }
            Ok(result)
        } else {
            let mut result = Vec::<T>::with_capacity(if len <= 1024 { len } else { 1024 });
            for _ in 0..len {
                result.push(decoder.decode_deeper_body_with_value_kind(element_value_kind)?);
            }
            Ok(result)
        }
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D> + Categorize<X>, const N: usize>
    Decode<X, D> for [T; N]
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        let elements = Vec::<T>::decode_body_with_value_kind(decoder, value_kind)?;
        let actual = elements.len();
        <[T; N]>::try_from(elements).map_err(|_| DecodeError::UnexpectedSize {
            expected: N,
            actual,
        })
    }
}

impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>> Describe<C> for [T] {
    fn type_id() -> RustTypeId {
        <Vec<T> as Describe<C>>::type_id()
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        <Vec<T> as Describe<C>>::type_data()
    }

    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        <Vec<T> as Describe<C>>::add_all_dependencies(aggregator)
    }
}

impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>> Describe<C> for Vec<T> {
    fn type_id() -> RustTypeId {
        RustTypeId::novel("Array", &[T::type_id()])
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        TypeData::unnamed(TypeKind::Array {
            element_type: T::type_id(),
        })
    }

    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        aggregator.add_child_type_and_descendents::<T>();
    }
}

impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>, const N: usize> Describe<C> for [T; N] {
    fn type_id() -> RustTypeId {
        let size = N
            .try_into()
            .map(u32::to_le_bytes)
            .unwrap_or_else(|_| u32::MAX.to_le_bytes());
        RustTypeId::novel_validated("Array", &[T::type_id()], &[("min", &size), ("max", &size)])
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        let size = N.try_into().ok();
        TypeData::unnamed(TypeKind::Array {
            element_type: T::type_id(),
        })
        .with_validation(TypeValidation::Array(LengthValidation {
            min: size,
            max: size,
        }))
    }

    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        aggregator.add_child_type_and_descendents::<T>();
    }
}
