use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::*;

categorize_generic!(BTreeSet<T>, <T>, ValueKind::Array);
categorize_generic!(HashSet<T>, <T>, ValueKind::Array);
categorize_generic!(IndexSet<T>, <T>, ValueKind::Array);
categorize_generic!(BTreeMap<K, V>, <K, V>, ValueKind::Map);
categorize_generic!(HashMap<K, V>, <K, V>, ValueKind::Map);
categorize_generic!(IndexMap<K, V>, <K, V>, ValueKind::Map);

fn encode_set_body<'a, X, E, T, I>(encoder: &mut E, len: usize, values: I) -> Result<(), EncodeError>
where
    X: CustomValueKind,
    E: Encoder<X>,
    T: Encode<X, E> + Categorize<X> + 'a,
    I: Iterator<Item = &'a T>,
{
    encoder.write_value_kind(T::value_kind())?;
    encoder.write_size(len)?;
    for value in values {
        encoder.encode_deeper_body(value)?;
    }
    Ok(())
}

fn encode_map_body<'a, X, E, K, V, I>(
    encoder: &mut E,
    len: usize,
    entries: I,
) -> Result<(), EncodeError>
where
    X: CustomValueKind,
    E: Encoder<X>,
    K: Encode<X, E> + Categorize<X> + 'a,
    V: Encode<X, E> + Categorize<X> + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    encoder.write_value_kind(K::value_kind())?;
    encoder.write_value_kind(V::value_kind())?;
    encoder.write_size(len)?;
    for (key, value) in entries {
        encoder.encode_deeper_body(key)?;
        encoder.encode_deeper_body(value)?;
    }
    Ok(())
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X>> Encode<X, E>
    for BTreeSet<T>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encode_set_body(encoder, self.len(), self.iter())
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X> + Ord> Encode<X, E>
    for HashSet<T>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        // Sort into a deterministic order before encoding
        let values: BTreeSet<&T> = self.iter().collect();
        encode_set_body(encoder, values.len(), values.into_iter())
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E> + Categorize<X>> Encode<X, E>
    for IndexSet<T>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encode_set_body(encoder, self.len(), self.iter())
    }
}

impl<
        X: CustomValueKind,
        E: Encoder<X>,
        K: Encode<X, E> + Categorize<X>,
        V: Encode<X, E> + Categorize<X>,
    > Encode<X, E> for BTreeMap<K, V>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encode_map_body(encoder, self.len(), self.iter())
    }
}

impl<
        X: CustomValueKind,
        E: Encoder<X>,
        K: Encode<X, E> + Categorize<X> + Ord,
        V: Encode<X, E> + Categorize<X>,
    > Encode<X, E> for HashMap<K, V>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        // Sort into a deterministic order before encoding
        let entries: BTreeMap<&K, &V> = self.iter().collect();
        encode_map_body(encoder, entries.len(), entries.into_iter())
    }
}

impl<
        X: CustomValueKind,
        E: Encoder<X>,
        K: Encode<X, E> + Categorize<X>,
        V: Encode<X, E> + Categorize<X>,
    > Encode<X, E> for IndexMap<K, V>
{
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encoder.write_value_kind(Self::value_kind())
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        encode_map_body(encoder, self.len(), self.iter())
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D> + Categorize<X> + Ord> Decode<X, D>
    for BTreeSet<T>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let element_value_kind = decoder.read_and_check_value_kind(T::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = BTreeSet::new();
        for _ in 0..len {
            let value = decoder.decode_deeper_body_with_value_kind(element_value_kind)?;
            if !result.insert(value) {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D> + Categorize<X> + Hash + Eq> Decode<X, D>
    for HashSet<T>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let element_value_kind = decoder.read_and_check_value_kind(T::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = HashSet::with_capacity(if len <= 1024 { len } else { 1024 });
        for _ in 0..len {
            let value = decoder.decode_deeper_body_with_value_kind(element_value_kind)?;
            if !result.insert(value) {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D> + Categorize<X> + Hash + Eq> Decode<X, D>
    for IndexSet<T>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let element_value_kind = decoder.read_and_check_value_kind(T::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = IndexSet::with_capacity(if len <= 1024 { len } else { 1024 });
        for _ in 0..len {
            let value = decoder.decode_deeper_body_with_value_kind(element_value_kind)?;
            if !result.insert(value) {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

impl<
        X: CustomValueKind,
        D: Decoder<X>,
        K: Decode<X, D> + Categorize<X> + Ord,
        V: Decode<X, D> + Categorize<X>,
    > Decode<X, D> for BTreeMap<K, V>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let key_value_kind = decoder.read_and_check_value_kind(K::value_kind())?;
        let value_value_kind = decoder.read_and_check_value_kind(V::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = BTreeMap::new();
        for _ in 0..len {
            let key = decoder.decode_deeper_body_with_value_kind(key_value_kind)?;
            let value = decoder.decode_deeper_body_with_value_kind(value_value_kind)?;
            if result.insert(key, value).is_some() {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

impl<
        X: CustomValueKind,
        D: Decoder<X>,
        K: Decode<X, D> + Categorize<X> + Hash + Eq,
        V: Decode<X, D> + Categorize<X>,
    > Decode<X, D> for HashMap<K, V>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let key_value_kind = decoder.read_and_check_value_kind(K::value_kind())?;
        let value_value_kind = decoder.read_and_check_value_kind(V::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = HashMap::with_capacity(if len <= 1024 { len } else { 1024 });
        for _ in 0..len {
            let key = decoder.decode_deeper_body_with_value_kind(key_value_kind)?;
            let value = decoder.decode_deeper_body_with_value_kind(value_value_kind)?;
            if result.insert(key, value).is_some() {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

impl<
        X: CustomValueKind,
        D: Decoder<X>,
        K: Decode<X, D> + Categorize<X> + Hash + Eq,
        V: Decode<X, D> + Categorize<X>,
    > Decode<X, D> for IndexMap<K, V>
{
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        decoder.check_preloaded_value_kind(value_kind, Self::value_kind())?;
        let key_value_kind = decoder.read_and_check_value_kind(K::value_kind())?;
        let value_value_kind = decoder.read_and_check_value_kind(V::value_kind())?;
        let len = decoder.read_size()?;
        let mut result = IndexMap::with_capacity(if len <= 1024 { len } else { 1024 });
        for _ in 0..len {
            let key = decoder.decode_deeper_body_with_value_kind(key_value_kind)?;
            let value = decoder.decode_deeper_body_with_value_kind(value_value_kind)?;
            if result.insert(key, value).is_some() {
                return Err(DecodeError::DuplicateKey);
            }
        }
        Ok(result)
    }
}

macro_rules! describe_set {
    ($type:ident) => {
        impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>> Describe<C> for $type<T> {
            fn type_id() -> RustTypeId {
                RustTypeId::novel("Set", &[T::type_id()])
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
    };
}

describe_set!(BTreeSet);
describe_set!(HashSet);
describe_set!(IndexSet);

macro_rules! describe_map {
    ($type:ident) => {
        impl<C: CustomTypeKind<RustTypeId>, K: Describe<C>, V: Describe<C>> Describe<C>
            for $type<K, V>
        {
            fn type_id() -> RustTypeId {
                RustTypeId::novel("Map", &[K::type_id(), V::type_id()])
            }

            fn type_data() -> TypeData<C, RustTypeId> {
                TypeData::unnamed(TypeKind::Map {
                    key_type: K::type_id(),
                    value_type: V::type_id(),
                })
            }

            fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
                aggregator.add_child_type_and_descendents::<K>();
                aggregator.add_child_type_and_descendents::<V>();
            }
        }
    };
}

describe_map!(BTreeMap);
describe_map!(HashMap);
describe_map!(IndexMap);
