mod blob;
mod decimal;
mod expression;
mod hash;
mod node_id;
mod non_fungible_local_id;
mod own;
mod reference;

pub use blob::*;
pub use decimal::*;
pub use expression::*;
pub use hash::*;
pub use node_id::*;
pub use non_fungible_local_id::*;
pub use own::*;
pub use reference::*;

/// Implements the codec and schema contracts for a fixed-length custom leaf type.
///
/// The type must offer `to_vec(&self) -> Vec<u8>` and `TryFrom<&[u8]>`.
macro_rules! well_known_scrypto_custom_type {
    ($type:ty, $custom_value_kind:ident, $size:expr, $well_known_id:path, $type_data_fn:path) => {
        impl sbor::Categorize<crate::ScryptoCustomValueKind> for $type {
            #[inline]
            fn value_kind() -> sbor::ValueKind<crate::ScryptoCustomValueKind> {
                sbor::ValueKind::Custom(crate::ScryptoCustomValueKind::$custom_value_kind)
            }
        }

        impl<E: sbor::Encoder<crate::ScryptoCustomValueKind>>
            sbor::Encode<crate::ScryptoCustomValueKind, E> for $type
        {
            #[inline]
            fn encode_value_kind(&self, encoder: &mut E) -> Result<(), sbor::EncodeError> {
                encoder.write_value_kind(<Self as sbor::Categorize<
                    crate::ScryptoCustomValueKind,
                >>::value_kind())
            }

            #[inline]
            fn encode_body(&self, encoder: &mut E) -> Result<(), sbor::EncodeError> {
                encoder.write_slice(&self.to_vec())
            }
        }

        impl<D: sbor::Decoder<crate::ScryptoCustomValueKind>>
            sbor::Decode<crate::ScryptoCustomValueKind, D> for $type
        {
            fn decode_body_with_value_kind(
                decoder: &mut D,
                value_kind: sbor::ValueKind<crate::ScryptoCustomValueKind>,
            ) -> Result<Self, sbor::DecodeError> {
                decoder.check_preloaded_value_kind(
                    value_kind,
                    sbor::ValueKind::Custom(crate::ScryptoCustomValueKind::$custom_value_kind),
                )?;
                let slice = decoder.read_slice($size)?;
                Self::try_from(slice).map_err(|_| sbor::DecodeError::InvalidCustomValue)
            }
        }

        impl sbor::Describe<crate::ScryptoCustomTypeKind> for $type {
            fn type_id() -> sbor::RustTypeId {
                sbor::RustTypeId::WellKnown($well_known_id)
            }

            fn type_data() -> sbor::TypeData<crate::ScryptoCustomTypeKind, sbor::RustTypeId> {
                $type_data_fn()
            }
        }
    };
}

pub(crate) use well_known_scrypto_custom_type;
