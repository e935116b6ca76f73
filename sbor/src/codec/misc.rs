use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::*;

impl<X: CustomValueKind, T: Categorize<X> + ?Sized> Categorize<X> for &T {
    #[inline]
    fn value_kind() -> ValueKind<X> {
        T::value_kind()
    }
}

// Smart pointers are transparent to the value model, so their codecs delegate
// to the wrapped type without any depth increase.
macro_rules! codec_wrapped {
    ($type:ident) => {
        impl<X: CustomValueKind, T: Categorize<X>> Categorize<X> for $type<T> {
            #[inline]
            fn value_kind() -> ValueKind<X> {
                T::value_kind()
            }
        }

        impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E>> Encode<X, E> for $type<T> {
            #[inline]
            fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
                self.as_ref().encode_value_kind(encoder)
            }

            #[inline]
            fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
                self.as_ref().encode_body(encoder)
            }
        }

        impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D>> Decode<X, D> for $type<T> {
            #[inline]
            fn decode_body_with_value_kind(
                decoder: &mut D,
                value_kind: ValueKind<X>,
            ) -> Result<Self, DecodeError> {
                Ok($type::new(T::decode_body_with_value_kind(
                    decoder, value_kind,
                )?))
            }
        }

        impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>> Describe<C> for $type<T> {
            fn type_id() -> RustTypeId {
                T::type_id()
            }

            fn type_data() -> TypeData<C, RustTypeId> {
                T::type_data()
            }

            fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
                T::add_all_dependencies(aggregator)
            }
        }
    };
}

codec_wrapped!(Box);
codec_wrapped!(Rc);
codec_wrapped!(Arc);

impl<X: CustomValueKind, T: Categorize<X>> Categorize<X> for RefCell<T> {
    #[inline]
    fn value_kind() -> ValueKind<X> {
        T::value_kind()
    }
}

impl<X: CustomValueKind, E: Encoder<X>, T: Encode<X, E>> Encode<X, E> for RefCell<T> {
    #[inline]
    fn encode_value_kind(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.borrow().encode_value_kind(encoder)
    }

    #[inline]
    fn encode_body(&self, encoder: &mut E) -> Result<(), EncodeError> {
        self.borrow().encode_body(encoder)
    }
}

impl<X: CustomValueKind, D: Decoder<X>, T: Decode<X, D>> Decode<X, D> for RefCell<T> {
    #[inline]
    fn decode_body_with_value_kind(
        decoder: &mut D,
        value_kind: ValueKind<X>,
    ) -> Result<Self, DecodeError> {
        Ok(RefCell::new(T::decode_body_with_value_kind(
            decoder, value_kind,
        )?))
    }
}

impl<C: CustomTypeKind<RustTypeId>, T: Describe<C>> Describe<C> for RefCell<T> {
    fn type_id() -> RustTypeId {
        T::type_id()
    }

    fn type_data() -> TypeData<C, RustTypeId> {
        T::type_data()
    }

    fn add_all_dependencies(aggregator: &mut TypeAggregator<C>) {
        T::add_all_dependencies(aggregator)
    }
}
